//! Environment-driven configuration for the HTTP server binary.
//!
//! Values are read once at startup. A missing or empty variable falls
//! back to its default; a present but unparseable one is an error, so
//! a typo in `PORT` aborts the boot instead of silently binding 3000.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::probe::ProbeOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}

/// Settings for the server binary.
///
/// `api_token` stays `None` when `API_TOKEN` is unset or empty; the
/// server still boots, and `/verify` answers 500 until it is set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_token: Option<String>,
    pub smtp_port: u16,
    pub helo_domain: String,
    pub mail_from: String,
    pub connect_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProbeOptions::default();
        Ok(Self {
            port: parse_or(&get, "PORT", 3000)?,
            api_token: get("API_TOKEN").filter(|token| !token.trim().is_empty()),
            smtp_port: parse_or(&get, "SMTP_PORT", defaults.port)?,
            helo_domain: get("SMTP_HELO_DOMAIN")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.helo_domain),
            mail_from: get("SMTP_MAIL_FROM")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.mail_from),
            connect_timeout: Duration::from_millis(parse_or(
                &get,
                "SMTP_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout.as_millis() as u64,
            )?),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            port: self.smtp_port,
            helo_domain: self.helo_domain.clone(),
            mail_from: self.mail_from.clone(),
            connect_timeout: self.connect_timeout,
        }
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, raw)),
        _ => Ok(default),
    }
}
