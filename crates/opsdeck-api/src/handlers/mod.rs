//! Request handlers, one module per dashboard page

pub mod analytics;
pub mod customers;
pub mod financial;
pub mod health;
pub mod hr;
pub mod inventory;
pub mod operations;
pub mod overview;
pub mod reports;
pub mod settings;

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use tracing::warn;

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional details
    pub details: Option<serde_json::Value>,
}

/// Handler error type: a status code with a structured body
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Pagination information for list responses
#[derive(Debug, Serialize)]
pub struct PaginationInfo {
    /// Whether there are more results
    pub has_next: bool,

    /// Whether there are previous results
    pub has_prev: bool,

    /// Next page offset
    pub next_offset: Option<i64>,

    /// Previous page offset
    pub prev_offset: Option<i64>,
}

impl PaginationInfo {
    /// Compute pagination info for a window into `total` items
    #[must_use]
    pub const fn new(limit: i64, offset: i64, total: i64) -> Self {
        let has_next = offset + limit < total;
        let has_prev = offset > 0;

        Self {
            has_next,
            has_prev,
            next_offset: if has_next { Some(offset + limit) } else { None },
            prev_offset: if has_prev {
                let prev = offset - limit;
                Some(if prev > 0 { prev } else { 0 })
            } else {
                None
            },
        }
    }
}

/// Reject a request whose query parameters failed validation
pub(crate) fn invalid_parameters(errors: &validator::ValidationErrors) -> HandlerError {
    warn!("Invalid query parameters: {:?}", errors);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Invalid query parameters".to_string(),
            code: "INVALID_PARAMETERS".to_string(),
            details: Some(serde_json::json!(errors)),
        }),
    )
}

/// Reject a request with a bad filter value
pub(crate) fn bad_request(message: impl Into<String>) -> HandlerError {
    let message = message.into();
    warn!("Bad request: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message,
            code: "INVALID_PARAMETERS".to_string(),
            details: None,
        }),
    )
}

/// Map the UI's sentinel filter values to "no filter".
///
/// The select controls send "all" for the unfiltered state, and an
/// empty search box is a no-op.
pub(crate) fn active_filter(value: Option<&str>) -> Option<&str> {
    match value {
        None | Some("all" | "") => None,
        Some(v) => Some(v),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pagination_middle_page() {
        let info = PaginationInfo::new(10, 10, 35);

        assert!(info.has_next);
        assert!(info.has_prev);
        assert_eq!(info.next_offset, Some(20));
        assert_eq!(info.prev_offset, Some(0));
    }

    #[test]
    fn test_pagination_first_page() {
        let info = PaginationInfo::new(10, 0, 35);

        assert!(info.has_next);
        assert!(!info.has_prev);
        assert_eq!(info.next_offset, Some(10));
        assert_eq!(info.prev_offset, None);
    }

    #[test]
    fn test_pagination_last_page() {
        let info = PaginationInfo::new(10, 30, 35);

        assert!(!info.has_next);
        assert!(info.has_prev);
        assert_eq!(info.next_offset, None);
        assert_eq!(info.prev_offset, Some(20));
    }

    #[test]
    fn test_pagination_everything_fits() {
        let info = PaginationInfo::new(50, 0, 4);

        assert!(!info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn test_active_filter_sentinels() {
        assert_eq!(active_filter(None), None);
        assert_eq!(active_filter(Some("all")), None);
        assert_eq!(active_filter(Some("")), None);
        assert_eq!(active_filter(Some("active")), Some("active"));
    }
}
