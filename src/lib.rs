//! arzesh: live 18k gold and tether price board
//!
//! This library provides the core components for:
//! - Fetching the price snapshot from the currency endpoint
//! - A fetch-state controller with manual refresh and failure notifications
//! - Text rendering of the board for terminal front ends
//! - Configuration, logging and fetch metrics

pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod feed;
pub mod telemetry;
