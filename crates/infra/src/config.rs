//! Upstream configuration, read once at process start.
//!
//! Credentials have no fallback values: a process without `APIKEY` and
//! `TENANT_ID` refuses to start.

use reqwest::{Url, header::HeaderValue};
use thiserror::Error;

pub const DEFAULT_MAESTRO_BASE_URL: &str = "https://alpha.api.magalu.com/maestro/v1";

pub const ENV_API_KEY: &str = "APIKEY";
pub const ENV_TENANT_ID: &str = "TENANT_ID";
pub const ENV_BASE_URL: &str = "MAESTRO_BASE_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

/// Where the upstream order service lives and which credentials to forward.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    base_url: String,
    api_key: String,
    tenant_id: String,
}

impl UpstreamConfig {
    /// Build a config from explicit values.
    ///
    /// A trailing `/` on `base_url` is dropped so paths can be appended as-is.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Read the config through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, ENV_API_KEY)?;
        let tenant_id = required(&lookup, ENV_TENANT_ID)?;
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAESTRO_BASE_URL.to_string());

        validate_base_url(&base_url)?;
        validate_header_value(ENV_API_KEY, &api_key)?;
        validate_header_value(ENV_TENANT_ID, &tenant_id)?;

        Ok(Self::new(base_url, api_key, tenant_id))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

impl core::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or(ConfigError::Missing(name))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(value.to_string())
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid(ENV_BASE_URL, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::invalid(
            ENV_BASE_URL,
            format!("unsupported scheme `{other}`"),
        )),
    }
}

fn validate_header_value(name: &'static str, value: &str) -> Result<(), ConfigError> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| ConfigError::invalid(name, "not a valid HTTP header value"))
}
