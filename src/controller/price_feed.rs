//! Price feed controller

use super::{FetchState, Notification, DEFAULT_NOTIFICATION_TTL};
use crate::feed::{FetchError, PriceSource};
use crate::telemetry::{increment, record_latency, CounterMetric, LatencyMetric};
use chrono::Utc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

/// Fetches price snapshots and publishes the resulting [`FetchState`]
///
/// The controller is the only writer of the state. Readers either take a
/// copy with [`state`](Self::state) or follow changes through
/// [`subscribe`](Self::subscribe). At most one fetch cycle is outstanding at
/// a time; a refresh during `Loading` is dropped, not queued.
pub struct PriceFeedController<S> {
    source: S,
    state: watch::Sender<FetchState>,
    notifications: mpsc::Sender<Notification>,
    notification_ttl: Duration,
}

impl<S: PriceSource> PriceFeedController<S> {
    /// Create an idle controller that reports failures on `notifications`
    pub fn new(source: S, notifications: mpsc::Sender<Notification>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            source,
            state,
            notifications,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    /// Set how long failure notifications stay visible
    pub fn notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Current state
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Follow state changes
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// First fetch on activation
    ///
    /// Only runs from `Idle`. Returns `true` if a fetch cycle ran.
    pub async fn initialize(&self) -> bool {
        let entered = self.state.send_if_modified(|state| {
            if matches!(state, FetchState::Idle) {
                *state = FetchState::Loading;
                true
            } else {
                false
            }
        });

        if !entered {
            tracing::warn!(
                state = self.state.borrow().label(),
                "Controller already initialized, ignoring"
            );
            return false;
        }

        self.run_fetch_cycle().await;
        true
    }

    /// Manual re-fetch
    ///
    /// Ignored while a fetch is outstanding. Returns `true` if a fetch cycle
    /// ran.
    pub async fn refresh(&self) -> bool {
        let entered = self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = FetchState::Loading;
                true
            }
        });

        if !entered {
            tracing::debug!("Fetch already in flight, ignoring refresh");
            increment(CounterMetric::RefreshIgnored);
            return false;
        }

        self.run_fetch_cycle().await;
        true
    }

    /// Fetch once and settle the state. Caller has already entered `Loading`.
    async fn run_fetch_cycle(&self) {
        let guard = SettleOnDrop::new(self);
        let started = Instant::now();
        let result = self.source.fetch().await;
        let elapsed = started.elapsed();
        record_latency(LatencyMetric::Fetch, elapsed);

        match result {
            Ok(snapshot) => {
                tracing::info!(
                    endpoint = %self.source.describe(),
                    outcome = "loaded",
                    elapsed_ms = elapsed.as_millis() as u64,
                    gold = %snapshot.gold.value,
                    tether = %snapshot.tether.value,
                    "Price snapshot loaded"
                );
                increment(CounterMetric::FetchLoaded);
                self.state.send_replace(FetchState::Loaded {
                    snapshot,
                    fetched_at: Utc::now(),
                });
            }
            Err(e) => {
                let status = match &e {
                    FetchError::Http(status) => Some(status.as_u16()),
                    _ => None,
                };
                tracing::warn!(
                    endpoint = %self.source.describe(),
                    outcome = e.kind(),
                    status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "Price fetch failed"
                );
                increment(CounterMetric::FetchFailed(e.kind()));
                self.fail();
            }
        }

        guard.disarm();
    }

    fn fail(&self) {
        self.state.send_replace(FetchState::Failed);
        self.notify(Notification::fetch_failed(self.notification_ttl));
    }

    fn notify(&self, notification: Notification) {
        if let Err(e) = self.notifications.try_send(notification) {
            tracing::warn!(error = %e, "Dropping failure notification");
        }
    }
}

/// Settles a fetch cycle as `Failed` if its future is dropped mid-flight
///
/// Without it a cancelled cycle (timeout, `select!`, task abort) would leave
/// the state in `Loading` and every later refresh would be ignored.
struct SettleOnDrop<'a, S: PriceSource> {
    controller: &'a PriceFeedController<S>,
    armed: bool,
}

impl<'a, S: PriceSource> SettleOnDrop<'a, S> {
    fn new(controller: &'a PriceFeedController<S>) -> Self {
        Self {
            controller,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<S: PriceSource> Drop for SettleOnDrop<'_, S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!(
            endpoint = %self.controller.source.describe(),
            outcome = "cancelled",
            "Price fetch dropped before completion"
        );
        increment(CounterMetric::FetchFailed("cancelled"));
        self.controller.fail();
    }
}
