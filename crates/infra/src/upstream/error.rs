//! Upstream failures and their translation into item source errors.

use reqwest::StatusCode;
use thiserror::Error;

use orderitems_orders::ItemSourceError;

/// Which upstream read failed. Translation depends on it: only the order read
/// turns a 404 into `OrderNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    Order,
    PackageItems,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No HTTP response could be obtained (connect, DNS, TLS, timeout, body read).
    #[error("transport failure calling {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived with a non-success status.
    #[error("upstream returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// A success response whose body did not match the expected shape.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map onto the item source taxonomy.
    ///
    /// Package-level 404s stay unclassified.
    pub fn translate(self, call: UpstreamCall) -> ItemSourceError {
        match self {
            UpstreamError::Status { status, .. }
                if status == StatusCode::NOT_FOUND && call == UpstreamCall::Order =>
            {
                ItemSourceError::OrderNotFound
            }
            UpstreamError::Status { url, status } => ItemSourceError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            },
            transport @ UpstreamError::Transport { .. } => {
                ItemSourceError::communication(transport.to_string())
            }
            decode @ UpstreamError::Decode { .. } => ItemSourceError::malformed(decode.to_string()),
        }
    }
}
