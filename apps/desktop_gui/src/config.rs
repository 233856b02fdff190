use std::fs;

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "employee_manager.toml";
pub const SERVER_URL_ENV: &str = "EMPLOYEE_MANAGER_SERVER_URL";
pub const TIMEOUT_ENV: &str = "EMPLOYEE_MANAGER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `employee_manager.toml`, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        if let Err(err) = apply_file_settings(&mut settings, &raw) {
            warn!("ignoring malformed {SETTINGS_FILE}: {err}");
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup(SERVER_URL_ENV) {
        settings.server_url = v;
    }
    if let Some(v) = lookup(TIMEOUT_ENV) {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(_) => warn!("ignoring {TIMEOUT_ENV}={v}: not a whole number of seconds"),
        }
    }
}
