use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use orderitems_orders::Item;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthCheckResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// JSON shape of one order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Item)]
pub struct ItemResponse {
    #[schema(example = "2100012")]
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub reference: String,
    #[schema(example = 1)]
    pub quantity: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            sku: item.sku,
            description: item.description,
            image_url: item.image_url,
            reference: item.reference,
            quantity: item.quantity,
        }
    }
}

pub fn items_to_response(items: Vec<Item>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}
