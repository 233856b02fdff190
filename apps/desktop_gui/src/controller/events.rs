//! Events flowing from the backend worker back to the UI thread.

use client_core::Outcome;

pub enum UiEvent {
    Outcome(Outcome),
    AvatarLoaded { url: String, image: egui::ColorImage },
    AvatarFailed { url: String },
    BackendFailed(String),
}
