//! Text rendering of the price board
//!
//! Turns a [`FetchState`] into the lines a terminal front end prints:
//! two skeleton cards while loading, two quote cards plus a last-updated
//! footer once loaded, nothing otherwise.

use crate::controller::{FetchState, Notification};
use crate::feed::{PriceQuote, Trend};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Card title for 18k gold per gram
pub const GOLD_TITLE: &str = "هر گرم طلای ۱۸ عیار";
/// Card title for tether
pub const TETHER_TITLE: &str = "تتر";
/// Currency label shown next to every value
pub const CURRENCY_LABEL: &str = "ریال";
/// Prefix of the last-updated footer
pub const UPDATED_LABEL: &str = "آخرین بروزرسانی";

const SKELETON_TITLE: &str = "░░░░░░░░░░░░";
const SKELETON_VALUE: &str = "░░░░░░░░░░░░░░░░";
const SKELETON_CHANGE: &str = "░░░░░░";

impl Trend {
    /// Arrow shown after the change string
    pub fn marker(self) -> char {
        match self {
            Trend::Up => '▲',
            Trend::Down => '▼',
            Trend::Flat => '•',
        }
    }
}

/// Render the board for `state`, with times shown in `tz`
pub fn render<Tz>(state: &FetchState, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    match state {
        FetchState::Idle | FetchState::Failed => {}
        FetchState::Loading => {
            out.push_str(&skeleton_card());
            out.push('\n');
            out.push_str(&skeleton_card());
        }
        FetchState::Loaded {
            snapshot,
            fetched_at,
        } => {
            out.push_str(&quote_card(GOLD_TITLE, &snapshot.gold));
            out.push('\n');
            out.push_str(&quote_card(TETHER_TITLE, &snapshot.tether));
            out.push('\n');
            out.push_str(&updated_footer(&fetched_at.with_timezone(tz)));
            out.push('\n');
        }
    }

    out
}

/// Render a notification as a single toast line
pub fn render_notification(notification: &Notification) -> String {
    format!("⚠ {} | {}", notification.title, notification.body)
}

fn quote_card(title: &str, quote: &PriceQuote) -> String {
    let mut card = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(card, "[{}]", title);
    let _ = writeln!(card, "  {} {}", quote.value, CURRENCY_LABEL);
    let _ = writeln!(card, "  {} {}", quote.change, quote.trend().marker());
    card
}

fn skeleton_card() -> String {
    format!(
        "[{}]\n  {}\n  {}\n",
        SKELETON_TITLE, SKELETON_VALUE, SKELETON_CHANGE
    )
}

fn updated_footer<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = at.format("%H:%M:%S").to_string();
    format!("{}: {}", UPDATED_LABEL, to_persian_digits(&time))
}

/// Replace ASCII digits with Extended Arabic-Indic (Persian) digits
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
