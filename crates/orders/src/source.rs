//! The item source seam between the HTTP layer and whatever produces items.

use async_trait::async_trait;
use thiserror::Error;

use orderitems_core::OrderId;

use crate::item::Item;

/// Failures an item source can report.
///
/// The HTTP layer classifies `OrderNotFound` and `CommunicationFailure`; every
/// other variant is an unclassified upstream fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemSourceError {
    /// The upstream service does not know the order.
    #[error("order not found")]
    OrderNotFound,

    /// No usable HTTP response could be obtained from the upstream service.
    #[error("communication failure with upstream service: {0}")]
    CommunicationFailure(String),

    /// The upstream service answered with a non-success status.
    #[error("upstream returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The upstream service answered successfully but the body did not match
    /// the expected shape.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl ItemSourceError {
    pub fn communication(msg: impl Into<String>) -> Self {
        Self::CommunicationFailure(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

/// Produces the flattened item list of an order.
///
/// Implementations either return every item of the order or fail as a whole;
/// partial results are never returned.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn items_for_order(&self, order_id: OrderId) -> Result<Vec<Item>, ItemSourceError>;
}
