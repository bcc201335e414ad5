//! Application state management

use opsdeck_core::{Config, context_error, context_error::Result};
use opsdeck_data::DataStore;
use opsdeck_live::LiveFeedService;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Seeded dataset store
    pub store: Arc<DataStore>,
    /// Live activity feed
    pub live: Arc<LiveFeedService>,
    /// When the server started
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state with a seeded store
    #[must_use]
    pub fn new(config: Config) -> Self {
        let live_config = config.live.clone().unwrap_or_default();

        Self {
            config,
            store: Arc::new(DataStore::seed()),
            live: Arc::new(LiveFeedService::new(live_config)),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Check that the application is properly configured
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.config.api.default_page_size < 1 {
            return Err(context_error!(
                "Default page size must be positive, got {}",
                self.config.api.default_page_size
            ));
        }

        if self.config.api.max_page_size < self.config.api.default_page_size {
            return Err(context_error!(
                "Max page size {} is below the default page size {}",
                self.config.api.max_page_size,
                self.config.api.default_page_size
            ));
        }

        if self.store.customers.is_empty() || self.store.production_lines.is_empty() {
            return Err(context_error!("Dataset store is not seeded"));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_seeds_store() {
        let state = AppState::new(Config::default());

        assert_eq!(state.store.customers.len(), 4);
        assert_eq!(state.store.employees.len(), 5);
        assert!(!state.live.is_running());
    }

    #[test]
    fn test_validate_default_config() {
        let state = AppState::new(Config::default());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_page_sizes() {
        let mut config = Config::default();
        config.api.default_page_size = 100;
        config.api.max_page_size = 10;

        let state = AppState::new(config);
        let result = state.validate();
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("below the default"));
    }

    #[test]
    fn test_state_clone_shares_store() {
        let state1 = AppState::new(Config::default());
        let state2 = state1.clone();

        assert!(Arc::ptr_eq(&state1.store, &state2.store));
        assert!(Arc::ptr_eq(&state1.live, &state2.live));
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(Config::default());
        let first = state.uptime_seconds();
        assert!(state.uptime_seconds() >= first);
    }
}
