//! Fetch state machine

use crate::feed::PriceSnapshot;
use chrono::{DateTime, Utc};

/// Lifecycle of the price board
///
/// `Idle -> Loading -> {Loaded | Failed}`; both outcomes go back to
/// `Loading` on the next refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch cycle is outstanding
    Loading,
    /// Last fetch succeeded
    Loaded {
        snapshot: PriceSnapshot,
        /// When the fetch completed
        fetched_at: DateTime<Utc>,
    },
    /// Last fetch failed (detail is logged, not kept)
    Failed,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    /// Current snapshot, only present in `Loaded`
    pub fn snapshot(&self) -> Option<&PriceSnapshot> {
        match self {
            FetchState::Loaded { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    /// Completion time of the current snapshot
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match self {
            FetchState::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Loaded { .. } => "loaded",
            FetchState::Failed => "failed",
        }
    }
}
