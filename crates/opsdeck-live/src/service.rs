//! The live-activity feed service
//!
//! Owns the activity snapshot and the timer task that animates it.
//! The task is cancellable: stopping the feed broadcasts shutdown and
//! awaits the task, so no tick can fire after `stop` returns.

use crate::{LiveError, Result};
use chrono::{DateTime, Utc};
use opsdeck_core::config::LiveConfig;
use parking_lot::{Mutex, RwLock};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::sync::Arc;
use tokio::{sync::broadcast, task::JoinHandle, time::interval};
use tracing::{debug, info, warn};

/// The animated counters shown on the dashboard overview
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySnapshot {
    /// Users active right now
    pub active_users: i64,

    /// Running revenue counter in dollars
    pub current_revenue: i64,

    /// Orders placed today
    pub orders_today: i64,

    /// Ticks applied since the service was created
    pub tick: u64,

    /// When the snapshot last changed
    pub updated_at: DateTime<Utc>,
}

impl ActivitySnapshot {
    fn seeded(config: &LiveConfig) -> Self {
        Self {
            active_users: config.seed_active_users,
            current_revenue: config.seed_revenue,
            orders_today: config.seed_orders,
            tick: 0,
            updated_at: Utc::now(),
        }
    }
}

/// Feed run state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// Feed is stopped
    #[default]
    Stopped,

    /// Feed is ticking
    Running,

    /// Feed is shutting down
    Stopping,
}

/// The live-activity feed service
#[derive(Debug)]
pub struct LiveFeedService {
    /// Feed configuration
    config: LiveConfig,

    /// Current counter values
    snapshot: Arc<RwLock<ActivitySnapshot>>,

    /// Run state
    status: Arc<RwLock<FeedStatus>>,

    /// Handle of the running timer task
    task_handle: Mutex<Option<JoinHandle<()>>>,

    /// Shutdown sender (for broadcasting shutdown)
    shutdown_tx: broadcast::Sender<()>,
}

impl LiveFeedService {
    /// Create a stopped feed seeded from the configuration
    #[must_use]
    pub fn new(config: LiveConfig) -> Self {
        let snapshot = ActivitySnapshot::seeded(&config);
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            snapshot: Arc::new(RwLock::new(snapshot)),
            status: Arc::new(RwLock::new(FeedStatus::Stopped)),
            task_handle: Mutex::new(None),
            shutdown_tx,
        }
    }

    /// Start the feed timer
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::ServiceAlreadyRunning`] if the feed is not
    /// stopped.
    pub fn start(&self) -> Result<()> {
        {
            let mut status = self.status.write();
            if *status != FeedStatus::Stopped {
                return Err(LiveError::ServiceAlreadyRunning);
            }
            *status = FeedStatus::Running;
        }

        info!(
            interval_seconds = self.config.tick_interval_seconds,
            "Starting live activity feed"
        );

        let snapshot = Arc::clone(&self.snapshot);
        let config = self.config.clone();
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(config.tick_interval());
            // The first interval tick completes immediately; the feed
            // waits a full period before the first mutation, like the
            // toggle it models.
            ticker.tick().await;

            let mut rng = StdRng::from_entropy();

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let mut snap = snapshot.write();
                        apply_jitter(&mut snap, &config, &mut rng);
                        debug!(
                            tick = snap.tick,
                            active_users = snap.active_users,
                            "Live feed tick"
                        );
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Live feed task shutting down");
                        break;
                    }
                }
            }
        });

        *self.task_handle.lock() = Some(handle);
        Ok(())
    }

    /// Stop the feed timer
    ///
    /// Broadcasts shutdown and awaits the timer task; once this
    /// returns, no further tick can mutate the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LiveError::ServiceNotRunning`] if the feed is not
    /// running.
    pub async fn stop(&self) -> Result<()> {
        {
            let mut status = self.status.write();
            if *status != FeedStatus::Running {
                return Err(LiveError::ServiceNotRunning);
            }
            *status = FeedStatus::Stopping;
        }

        info!("Stopping live activity feed");

        let _ = self.shutdown_tx.send(());

        let handle = self.task_handle.lock().take();
        if let Some(handle) = handle {
            if handle.await.is_err() {
                warn!("Live feed task ended abnormally");
            }
        }

        *self.status.write() = FeedStatus::Stopped;

        info!("Live activity feed stopped");
        Ok(())
    }

    /// Current run state
    #[must_use]
    pub fn status(&self) -> FeedStatus {
        *self.status.read()
    }

    /// Whether the feed is currently ticking
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status() == FeedStatus::Running
    }

    /// Copy of the current counters
    #[must_use]
    pub fn snapshot(&self) -> ActivitySnapshot {
        self.snapshot.read().clone()
    }
}

/// Random delta in `[low, high)`; zero when the range is empty
fn bounded(rng: &mut impl Rng, low: i64, high: i64) -> i64 {
    if low >= high {
        0
    } else {
        rng.gen_range(low..high)
    }
}

/// Apply one tick of bounded jitter to the snapshot
fn apply_jitter(snapshot: &mut ActivitySnapshot, config: &LiveConfig, rng: &mut impl Rng) {
    snapshot.active_users += bounded(rng, -config.user_jitter, config.user_jitter);
    snapshot.current_revenue += bounded(rng, 0, config.revenue_jitter);
    snapshot.orders_today += bounded(rng, 0, config.order_jitter);
    snapshot.tick += 1;
    snapshot.updated_at = Utc::now();
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn fast_config() -> LiveConfig {
        LiveConfig {
            tick_interval_seconds: 1,
            ..LiveConfig::default()
        }
    }

    #[test]
    fn test_new_feed_is_stopped_and_seeded() {
        let service = LiveFeedService::new(LiveConfig::default());

        assert_eq!(service.status(), FeedStatus::Stopped);
        assert!(!service.is_running());

        let snapshot = service.snapshot();
        assert_eq!(snapshot.active_users, 1247);
        assert_eq!(snapshot.current_revenue, 245_780);
        assert_eq!(snapshot.orders_today, 156);
        assert_eq!(snapshot.tick, 0);
    }

    #[test]
    fn test_apply_jitter_respects_bounds() {
        let config = LiveConfig::default();
        let mut snapshot = ActivitySnapshot::seeded(&config);
        let mut rng = StdRng::seed_from_u64(42);

        for expected_tick in 1..=200u64 {
            let before = snapshot.clone();
            apply_jitter(&mut snapshot, &config, &mut rng);

            let user_delta = snapshot.active_users - before.active_users;
            assert!((-config.user_jitter..config.user_jitter).contains(&user_delta));

            let revenue_delta = snapshot.current_revenue - before.current_revenue;
            assert!((0..config.revenue_jitter).contains(&revenue_delta));

            let order_delta = snapshot.orders_today - before.orders_today;
            assert!((0..config.order_jitter).contains(&order_delta));

            assert_eq!(snapshot.tick, expected_tick);
        }
    }

    #[test]
    fn test_apply_jitter_with_zero_bounds_only_counts_ticks() {
        let config = LiveConfig {
            user_jitter: 0,
            revenue_jitter: 0,
            order_jitter: 0,
            ..LiveConfig::default()
        };
        let mut snapshot = ActivitySnapshot::seeded(&config);
        let mut rng = StdRng::seed_from_u64(7);

        apply_jitter(&mut snapshot, &config, &mut rng);

        assert_eq!(snapshot.active_users, config.seed_active_users);
        assert_eq!(snapshot.current_revenue, config.seed_revenue);
        assert_eq!(snapshot.orders_today, config.seed_orders);
        assert_eq!(snapshot.tick, 1);
    }

    #[tokio::test]
    async fn test_start_twice_is_an_error() {
        let service = LiveFeedService::new(fast_config());

        service.start().unwrap();
        assert!(matches!(
            service.start(),
            Err(LiveError::ServiceAlreadyRunning)
        ));

        service.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_while_stopped_is_an_error() {
        let service = LiveFeedService::new(fast_config());

        assert!(matches!(
            service.stop().await,
            Err(LiveError::ServiceNotRunning)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_ticks_while_enabled_and_freezes_after_stop() {
        let service = LiveFeedService::new(fast_config());
        service.start().unwrap();
        assert!(service.is_running());

        // Paused time auto-advances; cover at least three tick periods
        tokio::time::sleep(Duration::from_secs(4)).await;

        let while_running = service.snapshot();
        assert!(while_running.tick >= 3);
        assert!(while_running.current_revenue >= 245_780);

        service.stop().await.unwrap();
        assert_eq!(service.status(), FeedStatus::Stopped);

        let after_stop = service.snapshot();
        tokio::time::sleep(Duration::from_secs(5)).await;
        let much_later = service.snapshot();

        assert_eq!(after_stop.tick, much_later.tick);
        assert_eq!(after_stop.active_users, much_later.active_users);
        assert_eq!(after_stop.current_revenue, much_later.current_revenue);
        assert_eq!(after_stop.orders_today, much_later.orders_today);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_can_be_restarted_after_stop() {
        let service = LiveFeedService::new(fast_config());

        service.start().unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        service.stop().await.unwrap();

        let between = service.snapshot().tick;

        service.start().unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        service.stop().await.unwrap();

        assert!(service.snapshot().tick > between);
    }
}
