//! Runtime bridge between UI command queue and backend event intake.

use std::{io::Cursor, sync::Arc, thread};

use anyhow::{Context, Result};
use client_core::{execute, EmployeeClient};
use crossbeam_channel::{Receiver, Sender};
use image::imageops::FilterType;
use tracing::{debug, error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Longest edge of a decoded avatar, in pixels.
pub const AVATAR_MAX_DIMENSION: u32 = 96;

/// Spawns the worker thread. Each command runs as its own task, so requests
/// overlap and their results come back in completion order.
pub fn launch(client: EmployeeClient, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(
                    "Backend worker failed to start; restart the application".to_string(),
                ));
                return;
            }
        };

        let client = Arc::new(client);
        runtime.block_on(async move {
            info!(base_url = client.base_url(), "backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let client = Arc::clone(&client);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    handle_command(&client, cmd, &ui_tx).await;
                });
            }
            info!("command queue closed; backend worker stopping");
        });
    });
}

async fn handle_command(client: &EmployeeClient, cmd: BackendCommand, ui_tx: &Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::Execute(request) => UiEvent::Outcome(execute(client, request).await),
        BackendCommand::FetchAvatar { url } => match fetch_avatar(client, &url).await {
            Ok(image) => UiEvent::AvatarLoaded { url, image },
            Err(err) => {
                debug!("avatar {url} unavailable, using initials: {err:#}");
                UiEvent::AvatarFailed { url }
            }
        },
    };

    if ui_tx.send(event).is_err() {
        debug!("ui event channel closed; dropping backend result");
    }
}

async fn fetch_avatar(client: &EmployeeClient, url: &str) -> Result<egui::ColorImage> {
    let bytes = client.fetch_image(url).await?;
    decode_avatar(&bytes)
}

pub fn decode_avatar(bytes: &[u8]) -> Result<egui::ColorImage> {
    let decoded = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("failed to sniff avatar format")?
        .decode()
        .context("failed to decode avatar")?;
    let resized = decoded.resize(AVATAR_MAX_DIMENSION, AVATAR_MAX_DIMENSION, FilterType::Triangle);
    let rgba = resized.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
