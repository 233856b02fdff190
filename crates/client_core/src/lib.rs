use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::EmployeeId,
    protocol::{Employee, NewEmployee},
};
use tracing::debug;
use url::Url;

pub mod commands;
pub mod form;
pub mod notifications;
pub mod search;
pub mod state;
pub mod store;
pub mod view;

pub use commands::{dispatch, execute, Command, Outcome, Request};
pub use form::{EmployeeForm, FormError, FormMode};
pub use notifications::{Notification, NotificationKind, NotificationPhase, Notifications};
pub use state::{DeleteConfirmation, ManagerState};
pub use store::{EmployeeStore, StoreError};
pub use view::{initials, render_employees, Avatar, EmployeeCard, ListView};

const EMPLOYEE_BASE_PATH: &str = "/employee";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resource-style employee backend rooted at `/employee`.
#[async_trait]
pub trait EmployeeBackend: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Employee>>;
    async fn add(&self, employee: &NewEmployee) -> Result<Employee>;
    async fn update(&self, employee: &Employee) -> Result<Employee>;
    async fn delete(&self, id: EmployeeId) -> Result<()>;
}

pub struct EmployeeClient {
    http: Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_timeout(server_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(server_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = resource_base_url(server_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Downloads avatar bytes from an absolute image URL.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to request image {url}"))?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Joins the server origin (and any path prefix) with the employee resource path.
pub fn resource_base_url(server_url: &str) -> Result<String> {
    let parsed = Url::parse(server_url.trim())
        .with_context(|| format!("invalid server url '{server_url}'"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported server url scheme '{other}'"),
    }
    let root = parsed.as_str().trim_end_matches('/');
    Ok(format!("{root}{EMPLOYEE_BASE_PATH}"))
}

#[async_trait]
impl EmployeeBackend for EmployeeClient {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        let url = format!("{}/all", self.base_url);
        debug!("GET {url}");
        let employees = self
            .http
            .get(&url)
            .send()
            .await
            .context("failed to request employee list")?
            .error_for_status()?
            .json()
            .await
            .context("failed to decode employee list")?;
        Ok(employees)
    }

    async fn add(&self, employee: &NewEmployee) -> Result<Employee> {
        let url = format!("{}/add", self.base_url);
        debug!("POST {url}");
        let created = self
            .http
            .post(&url)
            .json(employee)
            .send()
            .await
            .context("failed to submit new employee")?
            .error_for_status()?
            .json()
            .await
            .context("failed to decode created employee")?;
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee> {
        let url = format!("{}/update", self.base_url);
        debug!("PUT {url} id={}", employee.id);
        let updated = self
            .http
            .put(&url)
            .json(employee)
            .send()
            .await
            .context("failed to submit employee update")?
            .error_for_status()?
            .json()
            .await
            .context("failed to decode updated employee")?;
        Ok(updated)
    }

    async fn delete(&self, id: EmployeeId) -> Result<()> {
        let url = format!("{}/delete/{}", self.base_url, id.0);
        debug!("DELETE {url}");
        self.http
            .delete(&url)
            .send()
            .await
            .context("failed to request employee deletion")?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
