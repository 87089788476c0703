//! Watch command implementation

use super::build_controller;
use crate::config::Config;
use crate::controller::{FetchState, Notification};
use crate::display::{render, render_notification};
use chrono::{Local, Utc};
use clap::Args;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

#[derive(Args, Debug)]
pub struct WatchArgs {}

/// What a line of user input asks for
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Refresh,
    Quit,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" | "r" | "R" => Input::Refresh,
            "q" | "Q" => Input::Quit,
            _ => Input::Unknown,
        }
    }
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (controller, notifications) = build_controller(config)?;
        let controller = Arc::new(controller);

        let board = tokio::spawn(print_board(controller.subscribe()));
        let toasts = tokio::spawn(print_notifications(notifications));

        controller.initialize().await;
        eprintln!("Enter to refresh, q to quit");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match Input::parse(&line) {
                Input::Refresh => {
                    // Spawned so a second Enter during a fetch reaches the guard
                    let controller = controller.clone();
                    tokio::spawn(async move {
                        controller.refresh().await;
                    });
                }
                Input::Quit => break,
                Input::Unknown => eprintln!("Enter to refresh, q to quit"),
            }
        }

        board.abort();
        toasts.abort();
        Ok(())
    }
}

async fn print_board(mut states: watch::Receiver<FetchState>) {
    loop {
        let board = {
            let state = states.borrow_and_update();
            render(&state, &Local)
        };
        println!("{}", board);

        if states.changed().await.is_err() {
            break;
        }
    }
}

async fn print_notifications(mut notifications: mpsc::Receiver<Notification>) {
    while let Some(notification) = notifications.recv().await {
        if notification.is_expired(Utc::now()) {
            continue;
        }
        eprintln!("{}", render_notification(&notification));
    }
}
