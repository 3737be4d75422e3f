//! Upstream-backed item source: resolves an order to its packages and
//! flattens the items of every package into one list.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use orderitems_core::OrderId;
use orderitems_orders::{Item, ItemSource, ItemSourceError};

use crate::upstream::{MaestroClient, UpstreamCall, UpstreamError};

/// Aggregates order items by querying the upstream order service.
///
/// One order read, then one read per package, strictly in sequence. Any
/// failure aborts the whole aggregation.
#[derive(Clone)]
pub struct OrderItemAggregator {
    client: MaestroClient,
}

impl OrderItemAggregator {
    pub fn new(client: MaestroClient) -> Self {
        Self { client }
    }

    fn fail(order_id: OrderId, call: UpstreamCall, err: UpstreamError) -> ItemSourceError {
        warn!(%order_id, ?call, error = %err, "upstream call failed");
        err.translate(call)
    }
}

#[async_trait]
impl ItemSource for OrderItemAggregator {
    async fn items_for_order(&self, order_id: OrderId) -> Result<Vec<Item>, ItemSourceError> {
        let order = self
            .client
            .get_order(order_id)
            .await
            .map_err(|e| Self::fail(order_id, UpstreamCall::Order, e))?;

        let package_count = order.packages.len();
        let mut items = Vec::new();

        // Repeated package ids are fetched again; no dedup.
        for package in order.packages {
            debug!(%order_id, package_id = %package.uuid, "fetching package items");
            let records = self
                .client
                .get_package_items(order_id, &package.uuid)
                .await
                .map_err(|e| Self::fail(order_id, UpstreamCall::PackageItems, e))?;

            items.extend(records.into_iter().map(Item::from));
        }

        info!(%order_id, packages = package_count, items = items.len(), "order items aggregated");
        Ok(items)
    }
}
