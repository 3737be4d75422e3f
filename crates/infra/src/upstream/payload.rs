//! Wire shapes returned by the upstream service.
//!
//! Only the fields this service reads are declared; anything else in the
//! upstream payload is ignored.

use serde::Deserialize;

use orderitems_core::PackageId;
use orderitems_orders::Item;

/// Body of `GET /orders/{order_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderPayload {
    pub packages: Vec<PackageDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    pub uuid: PackageId,
}

/// One element of `GET /orders/{order_id}/packages/{package_id}/items`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageItemRecord {
    pub product: ProductRecord,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl From<PackageItemRecord> for Item {
    fn from(record: PackageItemRecord) -> Self {
        let ProductRecord {
            code,
            description,
            image_url,
            reference,
        } = record.product;

        Item {
            sku: code,
            description: description.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            reference: reference.unwrap_or_default(),
            quantity: record.quantity,
        }
    }
}
