use std::sync::Arc;

use orderitems_infra::{MaestroClient, OrderItemAggregator, UpstreamConfig, UpstreamError};
use orderitems_orders::ItemSource;

/// Shared, read-only services handed to every handler.
///
/// Handlers only see the `ItemSource` trait object, so tests can swap the
/// upstream-backed aggregator for a stub.
#[derive(Clone)]
pub struct AppServices {
    item_source: Arc<dyn ItemSource>,
}

impl AppServices {
    pub fn new(item_source: Arc<dyn ItemSource>) -> Self {
        Self { item_source }
    }

    pub fn item_source(&self) -> &dyn ItemSource {
        self.item_source.as_ref()
    }
}

/// Production wiring: items come from the upstream order service.
pub fn build_services(config: &UpstreamConfig) -> Result<AppServices, UpstreamError> {
    let client = MaestroClient::new(config.clone())?;
    Ok(AppServices::new(Arc::new(OrderItemAggregator::new(client))))
}
