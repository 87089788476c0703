//! Price board controller
//!
//! Owns the [`FetchState`] and drives fetch cycles against a
//! [`PriceSource`](crate::feed::PriceSource)

mod notification;
mod price_feed;
mod state;

pub use notification::{Notification, NotificationLevel, DEFAULT_NOTIFICATION_TTL};
pub use price_feed::PriceFeedController;
pub use state::FetchState;
