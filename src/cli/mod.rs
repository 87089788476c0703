//! CLI interface for arzesh
//!
//! Provides subcommands for:
//! - `show`: Fetch once and print the board
//! - `watch`: Keep the board open with manual refresh
//! - `config`: Show the effective configuration

mod show;
mod watch;

pub use show::ShowArgs;
pub use watch::WatchArgs;

use crate::config::Config;
use crate::controller::{Notification, PriceFeedController};
use crate::feed::HttpPriceSource;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "arzesh")]
#[command(about = "Live 18k gold and tether prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "arzesh.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch prices once and print them
    Show(ShowArgs),
    /// Keep the board open; Enter refreshes, q quits
    Watch(WatchArgs),
    /// Show configuration
    Config,
}

/// Wire an HTTP-backed controller from configuration
fn build_controller(
    config: &Config,
) -> anyhow::Result<(
    PriceFeedController<HttpPriceSource>,
    mpsc::Receiver<Notification>,
)> {
    let source = HttpPriceSource::with_config(&config.feed)?;
    let (tx, rx) = mpsc::channel(16);
    let controller =
        PriceFeedController::new(source, tx).notification_ttl(config.notifications.ttl());
    Ok((controller, rx))
}
