use thiserror::Error;

use crate::domain::Operation;

/// The only user-facing failure kind: an operation did not complete.
///
/// The message is fixed per operation and never includes server detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .operation.failure_message())]
pub struct OperationError {
    pub operation: Operation,
}

impl OperationError {
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    pub fn message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load employees",
            Operation::Add => "Failed to add employee",
            Operation::Update => "Failed to update employee",
            Operation::Delete => "Failed to delete employee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_fixed_per_operation() {
        assert_eq!(
            OperationError::new(Operation::Add).to_string(),
            "Failed to add employee"
        );
        assert_eq!(
            OperationError::new(Operation::Delete).message(),
            "Failed to delete employee"
        );
    }
}
