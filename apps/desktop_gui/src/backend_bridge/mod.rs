//! Backend worker: runs employee requests off the UI thread.

pub mod commands;
pub mod runtime;
