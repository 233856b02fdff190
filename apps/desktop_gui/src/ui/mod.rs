//! UI layer: the app shell painting the employee view-model.

pub mod app;

pub use app::EmployeeManagerApp;
