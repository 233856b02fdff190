//! Command orchestration from UI actions to the backend command queue.

use std::time::Instant;

use client_core::{Command, FormError, ManagerState, Outcome};
use crossbeam_channel::{Sender, TrySendError};
use shared::error::OperationError;
use tracing::{debug, warn};

use crate::backend_bridge::commands::BackendCommand;

/// Applies a command locally and queues the backend request it needs.
pub fn submit_command(
    state: &mut ManagerState,
    cmd_tx: &Sender<BackendCommand>,
    command: Command,
) -> Result<(), FormError> {
    if let Some(request) = state.prepare(command)? {
        dispatch_backend_command(state, cmd_tx, BackendCommand::Execute(request));
    }
    Ok(())
}

/// A request that cannot be queued fails like any other request would.
pub fn dispatch_backend_command(
    state: &mut ManagerState,
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) {
    let cmd_name = cmd.name();
    let rejected = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            debug!(command = cmd_name, "queued ui->backend command");
            return;
        }
        Err(TrySendError::Full(cmd)) => {
            warn!(command = cmd_name, "ui command queue is full");
            cmd
        }
        Err(TrySendError::Disconnected(cmd)) => {
            warn!(command = cmd_name, "backend command processor disconnected");
            cmd
        }
    };

    if let BackendCommand::Execute(request) = rejected {
        state.apply(
            Outcome::Failed(OperationError::new(request.operation())),
            Instant::now(),
        );
    }
}
