//! Backend commands queued from UI to backend worker.

use client_core::Request;

pub enum BackendCommand {
    Execute(Request),
    FetchAvatar { url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Execute(request) => request.operation().name(),
            BackendCommand::FetchAvatar { .. } => "fetch_avatar",
        }
    }
}
