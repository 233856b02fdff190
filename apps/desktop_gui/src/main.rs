use std::time::Duration;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::EmployeeClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::EmployeeManagerApp;

#[derive(Parser, Debug)]
#[command(name = "employee-manager", about = "Desktop client for the employee service")]
struct Args {
    /// Base URL of the employee service; `/employee` is appended.
    #[arg(long)]
    server_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        settings.request_timeout_secs = timeout_secs;
    }

    let client = EmployeeClient::with_timeout(
        &settings.server_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
    .with_context(|| format!("invalid server url {}", settings.server_url))?;
    info!(
        server_url = %settings.server_url,
        timeout_secs = settings.request_timeout_secs,
        "starting employee manager"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(client, cmd_rx, ui_tx);

    let app = EmployeeManagerApp::new(cmd_tx, ui_rx, settings.server_url);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Manager")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Manager",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("failed to run the desktop window: {err}"))
}
