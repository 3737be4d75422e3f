//! Client for the upstream order-management ("maestro") service.
//!
//! The service models an order as packages of items. Two reads are exposed:
//! the order itself and the items of one package.

pub mod client;
pub mod error;
pub mod payload;

pub use client::{API_KEY_HEADER, MaestroClient, TENANT_ID_HEADER};
pub use error::{UpstreamCall, UpstreamError};
pub use payload::{OrderPayload, PackageDescriptor, PackageItemRecord, ProductRecord};
