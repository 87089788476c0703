//! Transient user-facing notifications

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default time a notification stays on screen
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(4000);

const FETCH_FAILED_TITLE: &str = "خطا در دریافت اطلاعات";
const FETCH_FAILED_BODY: &str = "اتصال اینترنت خود را بررسی کنید و دوباره تلاش کنید.";

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
}

/// A toast that dismisses itself after `ttl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub issued_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Notification {
    /// The notification shown when a fetch cycle fails
    pub fn fetch_failed(ttl: Duration) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: FETCH_FAILED_TITLE.to_string(),
            body: FETCH_FAILED_BODY.to_string(),
            issued_at: Utc::now(),
            ttl,
        }
    }

    /// Whether the notification should no longer be shown at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(self.ttl) {
            Ok(ttl) => now >= self.issued_at + ttl,
            Err(_) => false,
        }
    }
}
