//! Opsdeck API server library

#![forbid(unsafe_code)]

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use opsdeck_core::Config;
use opsdeck_core::context_error::Result;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the API router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the application state validation fails.
pub fn build_router(config: Config) -> Result<Router> {
    let enable_cors = config.api.enable_cors;
    let state = Arc::new(AppState::new(config));

    // Validate the application state
    state.validate()?;

    // Build the complete router with all routes
    let mut app = routes::build_router().with_state(state);

    if enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    Ok(app)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use opsdeck_core::Config;

    #[test]
    fn test_build_router_with_defaults() {
        let router = build_router(Config::default());
        assert!(router.is_ok());
    }

    #[test]
    fn test_build_router_without_cors() {
        let mut config = Config::default();
        config.api.enable_cors = false;
        assert!(build_router(config).is_ok());
    }

    #[test]
    fn test_build_router_rejects_bad_page_sizes() {
        let mut config = Config::default();
        config.api.default_page_size = 0;
        assert!(build_router(config).is_err());
    }

    #[test]
    fn test_module_structure() {
        // Verify all modules are accessible
        let _state_mod = std::any::type_name::<state::AppState>();
        let _health_mod = std::any::type_name::<handlers::health::HealthResponse>();
        let _routes_fn = routes::build_router;
    }
}
