//! Infrastructure layer: configuration and the upstream order service.

pub mod aggregator;
pub mod config;
pub mod upstream;

pub use aggregator::OrderItemAggregator;
pub use config::{ConfigError, UpstreamConfig};
pub use upstream::{MaestroClient, UpstreamCall, UpstreamError};
