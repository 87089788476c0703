//! Show command implementation

use super::build_controller;
use crate::config::Config;
use crate::display::{render, render_notification};
use chrono::Local;
use clap::Args;

#[derive(Args, Debug)]
pub struct ShowArgs {}

impl ShowArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (controller, mut notifications) = build_controller(config)?;

        controller.initialize().await;
        let state = controller.state();

        print!("{}", render(&state, &Local));
        while let Ok(notification) = notifications.try_recv() {
            eprintln!("{}", render_notification(&notification));
        }

        if state.is_failed() {
            anyhow::bail!("Could not fetch prices from {}", config.feed.endpoint);
        }

        Ok(())
    }
}
