//! Named commands, the backend requests they issue, and the outcomes that come back.

use std::time::Instant;

use shared::{
    domain::{EmployeeId, Operation},
    error::OperationError,
    protocol::{Employee, NewEmployee},
};
use tracing::{debug, warn};

use crate::{form::FormError, state::ManagerState, EmployeeBackend};

/// Every UI interaction enters through one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    SubmitCreate,
    SubmitEdit,
    ConfirmDelete,
    Search(String),
    BeginEdit(EmployeeId),
    CloseEdit,
    BeginDelete(EmployeeId),
    CancelDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Load,
    Create(NewEmployee),
    Update(Employee),
    Delete(EmployeeId),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Load => Operation::Load,
            Request::Create(_) => Operation::Add,
            Request::Update(_) => Operation::Update,
            Request::Delete(_) => Operation::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Vec<Employee>),
    Created(Employee),
    Updated(Employee),
    Deleted(EmployeeId),
    Failed(OperationError),
}

/// Runs one request; any failure collapses into the operation's fixed error.
pub async fn execute<B>(backend: &B, request: Request) -> Outcome
where
    B: EmployeeBackend + ?Sized,
{
    let operation = request.operation();
    debug!(operation = operation.name(), "issuing employee request");

    let result = match request {
        Request::Load => backend.list_all().await.map(Outcome::Loaded),
        Request::Create(new_employee) => backend.add(&new_employee).await.map(Outcome::Created),
        Request::Update(employee) => backend.update(&employee).await.map(Outcome::Updated),
        Request::Delete(id) => backend.delete(id).await.map(|()| Outcome::Deleted(id)),
    };

    result.unwrap_or_else(|err| {
        warn!(
            operation = operation.name(),
            "employee request failed: {err:#}"
        );
        Outcome::Failed(OperationError::new(operation))
    })
}

/// Prepares, executes and applies a command in one step.
///
/// Local commands never touch the backend. The only error is a form that
/// fails its required-field check, in which case nothing is sent.
pub async fn dispatch<B>(
    state: &mut ManagerState,
    backend: &B,
    command: Command,
) -> Result<(), FormError>
where
    B: EmployeeBackend + ?Sized,
{
    if let Some(request) = state.prepare(command)? {
        let outcome = execute(backend, request).await;
        state.apply(outcome, Instant::now());
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
