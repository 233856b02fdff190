//! Single owner of client state and the reducer applying command outcomes.

use std::time::Instant;

use shared::{
    domain::{EmployeeId, Operation},
    protocol::Employee,
};
use tracing::{info, warn};

use crate::{
    commands::{Command, Outcome, Request},
    form::{EmployeeForm, FormError, Submission},
    notifications::Notifications,
    search::filter_employees,
    store::EmployeeStore,
    view::{render_employees, ListView},
};

pub const ADDED_MESSAGE: &str = "Employee added successfully!";
pub const UPDATED_MESSAGE: &str = "Employee updated successfully!";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Pending delete confirmation, naming the employee being removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub id: EmployeeId,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct ManagerState {
    store: EmployeeStore,
    loading: bool,
    search_term: String,
    pub create_form: EmployeeForm,
    edit_form: Option<EmployeeForm>,
    pending_delete: Option<DeleteConfirmation>,
    notifications: Notifications,
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns a command into the backend request it needs, if any.
    ///
    /// Local commands (search, opening or closing dialogs) take effect here.
    pub fn prepare(&mut self, command: Command) -> Result<Option<Request>, FormError> {
        let request = match command {
            Command::Load => {
                self.loading = true;
                Some(Request::Load)
            }
            Command::SubmitCreate => Some(submission_request(self.create_form.submission()?)),
            Command::SubmitEdit => match &self.edit_form {
                Some(form) => Some(submission_request(form.submission()?)),
                None => None,
            },
            Command::ConfirmDelete => self
                .pending_delete
                .as_ref()
                .map(|pending| Request::Delete(pending.id)),
            Command::Search(term) => {
                self.search_term = term;
                None
            }
            Command::BeginEdit(id) => {
                if let Some(employee) = self.store.get(id) {
                    self.edit_form = Some(EmployeeForm::edit(employee));
                }
                None
            }
            Command::CloseEdit => {
                self.edit_form = None;
                None
            }
            Command::BeginDelete(id) => {
                if let Some(employee) = self.store.get(id) {
                    self.pending_delete = Some(DeleteConfirmation {
                        id,
                        name: employee.name.clone(),
                    });
                }
                None
            }
            Command::CancelDelete => {
                self.pending_delete = None;
                None
            }
        };
        Ok(request)
    }

    /// Applies a backend outcome in arrival order.
    pub fn apply(&mut self, outcome: Outcome, now: Instant) {
        match outcome {
            Outcome::Loaded(employees) => {
                info!("loaded {} employees", employees.len());
                self.store.replace_all(employees);
                self.loading = false;
            }
            Outcome::Created(employee) => {
                info!(id = employee.id.0, "employee added");
                self.store.insert(employee);
                self.create_form.reset();
                self.notifications.success(ADDED_MESSAGE, now);
            }
            Outcome::Updated(employee) => {
                let id = employee.id;
                match self.store.upsert(employee) {
                    Ok(()) => info!(id = id.0, "employee updated"),
                    Err(err) => warn!("updated employee not applied locally: {err}"),
                }
                self.edit_form = None;
                self.notifications.success(UPDATED_MESSAGE, now);
            }
            Outcome::Deleted(id) => {
                if self.store.remove(id).is_some() {
                    info!(id = id.0, "employee deleted");
                }
                self.pending_delete = None;
                self.notifications.success(DELETED_MESSAGE, now);
            }
            Outcome::Failed(err) => {
                if err.operation == Operation::Load {
                    self.loading = false;
                }
                self.notifications.error(err.message(), now);
            }
        }
    }

    /// Shows an error that did not come from a backend outcome.
    pub fn report_error(&mut self, message: impl Into<String>, now: Instant) {
        self.notifications.error(message, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    /// The current view: the store filtered by the search term.
    pub fn view(&self) -> ListView {
        if self.loading {
            return ListView::Loading;
        }
        render_employees(self.visible_employees())
    }

    pub fn visible_employees(&self) -> Vec<&Employee> {
        filter_employees(self.store.as_slice(), &self.search_term)
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn edit_form(&self) -> Option<&EmployeeForm> {
        self.edit_form.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EmployeeForm> {
        self.edit_form.as_mut()
    }

    pub fn pending_delete(&self) -> Option<&DeleteConfirmation> {
        self.pending_delete.as_ref()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

fn submission_request(submission: Submission) -> Request {
    match submission {
        Submission::Create(new_employee) => Request::Create(new_employee),
        Submission::Update(employee) => Request::Update(employee),
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
