//! Price snapshot types

use serde::{Deserialize, Serialize};

/// One priced item as published by the remote source
///
/// Both fields are display strings and are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Formatted price (e.g., "1,000,000")
    pub value: String,
    /// Signed formatted delta (e.g., "+1.2%")
    pub change: String,
}

impl PriceQuote {
    pub fn new(value: impl Into<String>, change: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            change: change.into(),
        }
    }

    /// Direction of the change string
    pub fn trend(&self) -> Trend {
        Trend::from_change(&self.change)
    }
}

/// The full payload of one fetch cycle
///
/// Replaced wholesale on every successful fetch, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// 18k gold, per gram
    pub gold: PriceQuote,
    /// Tether (USDT)
    pub tether: PriceQuote,
}

/// Direction of a quote's change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a formatted change string. A '+' anywhere wins over a '-'.
    pub fn from_change(change: &str) -> Self {
        if change.contains('+') {
            Trend::Up
        } else if change.contains('-') {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}
