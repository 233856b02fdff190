//! Client-side cache of the employee list last confirmed by the server.

use shared::{domain::EmployeeId, protocol::Employee};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("employee {0} is not in the store")]
    UnknownEmployee(EmployeeId),
}

/// Ordered employee records; ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the store from a server listing. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, records: Vec<Employee>) {
        self.employees.clear();
        for record in records {
            if self.position(record.id).is_none() {
                self.employees.push(record);
            }
        }
    }

    /// Appends a newly created record, replacing an existing one with the same id.
    pub fn insert(&mut self, record: Employee) {
        match self.position(record.id) {
            Some(index) => self.employees[index] = record,
            None => self.employees.push(record),
        }
    }

    pub fn upsert(&mut self, record: Employee) -> Result<(), StoreError> {
        let index = self
            .position(record.id)
            .ok_or(StoreError::UnknownEmployee(record.id))?;
        self.employees[index] = record;
        Ok(())
    }

    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        let index = self.position(id)?;
        Some(self.employees.remove(index))
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
