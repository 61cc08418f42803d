mod app;
mod cli;
mod config;
mod report;
mod terminal;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use analysis::{normalize, AnalysisClient};
use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use tokio::sync::mpsc;

use crate::app::{AppState, UiEvent};
use crate::cli::Args;
use crate::config::load_console_config;
use crate::report::render_report;
use crate::terminal::{init_logging, restore_terminal, setup_terminal};
use crate::ui::{draw_ui, handle_key_event};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _log_guard = init_logging(&args.log_dir, args.log_to_stderr)?;

    let config = load_console_config(&args.config, args.base_url.as_deref())?;
    let client = AnalysisClient::new(&config.service)
        .map_err(anyhow::Error::msg)
        .context("failed to build analysis client")?;
    tracing::info!(endpoint = client.endpoint(), "analysis client ready");

    if let Some(text) = args.text.as_deref() {
        return run_once(&client, text).await;
    }

    let client = Arc::new(client);
    let (ui_tx, mut ui_rx) = mpsc::channel::<UiEvent>(16);

    let mut terminal = setup_terminal()?;
    let mut app = AppState::default();

    let tick_rate = Duration::from_millis(100);
    loop {
        while let Ok(event) = ui_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, &mut app, &client, &ui_tx) {
                    break;
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

async fn run_once(client: &AnalysisClient, text: &str) -> anyhow::Result<()> {
    let report = match client.analyze(text).await {
        Ok(outcome) => normalize(outcome).map(|result| render_report(&result)),
        Err(message) => Err(message),
    };
    match report {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
