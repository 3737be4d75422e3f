//! Process configuration for the API binary.

use std::net::SocketAddr;

use orderitems_infra::{ConfigError, UpstreamConfig};

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::invalid(ENV_BIND_ADDR, format!("{raw}: {e}")))?;

        Ok(Self {
            bind_addr,
            upstream: UpstreamConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_addr() {
        let cfg = ApiConfig::from_lookup(|key| match key {
            "APIKEY" => Some("k".to_string()),
            "TENANT_ID" => Some("t".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ApiConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("localhost".to_string()),
            "APIKEY" => Some("k".to_string()),
            "TENANT_ID" => Some("t".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }

    #[test]
    fn credentials_are_still_required() {
        let err = ApiConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::Missing("APIKEY"));
    }
}
