//! Error types for the live-activity feed

use std::{error::Error as StdError, fmt};

/// Result type alias for live feed operations
pub type Result<T> = std::result::Result<T, LiveError>;

/// Errors that can occur while controlling the live feed
#[derive(Debug)]
pub enum LiveError {
    /// Feed is not running
    ServiceNotRunning,

    /// Feed is already running
    ServiceAlreadyRunning,

    /// Shutdown error
    Shutdown {
        /// Error message
        message: String,
    },
}

impl LiveError {
    /// Create a new shutdown error
    #[must_use]
    pub fn shutdown<S: Into<String>>(message: S) -> Self {
        Self::Shutdown {
            message: message.into(),
        }
    }
}

impl fmt::Display for LiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceNotRunning => write!(f, "Live feed is not running"),
            Self::ServiceAlreadyRunning => write!(f, "Live feed is already running"),
            Self::Shutdown { message } => write!(f, "Shutdown error: {message}"),
        }
    }
}

impl StdError for LiveError {}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", LiveError::ServiceNotRunning),
            "Live feed is not running"
        );
        assert_eq!(
            format!("{}", LiveError::ServiceAlreadyRunning),
            "Live feed is already running"
        );
        assert_eq!(
            format!("{}", LiveError::shutdown("task did not finish")),
            "Shutdown error: task did not finish"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = LiveError::shutdown("test");
        let debug = format!("{error:?}");
        assert!(debug.contains("Shutdown"));
        assert!(debug.contains("test"));
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<u64> = Ok(3);
        assert!(matches!(success, Ok(3)));

        let failure: Result<u64> = Err(LiveError::ServiceNotRunning);
        assert!(failure.is_err());
    }
}
