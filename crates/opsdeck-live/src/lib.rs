//! Simulated live-activity feed for the Opsdeck dashboard
//!
//! The dashboard overview has a "Live Data" toggle that animates a
//! small set of counters while enabled. This crate models that as a
//! structured, cancellable task: a tokio interval applies bounded
//! random jitter to a snapshot until the feed is stopped, and
//! stopping is guaranteed to cancel the timer.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod service;

// Re-export commonly used types
pub use error::{LiveError, Result};
pub use service::{ActivitySnapshot, FeedStatus, LiveFeedService};

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use opsdeck_core::config::LiveConfig;

    #[test]
    fn test_re_exports() {
        let service = LiveFeedService::new(LiveConfig::default());
        assert_eq!(service.status(), FeedStatus::Stopped);

        let snapshot = service.snapshot();
        assert_eq!(snapshot.active_users, 1247);

        let error = LiveError::ServiceNotRunning;
        assert!(!format!("{error}").is_empty());
    }
}
