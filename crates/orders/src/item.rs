use serde::{Deserialize, Serialize};

use orderitems_core::ValueObject;

/// One line of an order: a product code, optional descriptive fields and a
/// quantity.
///
/// Optional fields are plain strings that default to empty, never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub reference: String,
    pub quantity: i64,
}

impl Item {
    /// Item with only the required fields set.
    pub fn new(sku: impl Into<String>, quantity: i64) -> Self {
        Self {
            sku: sku.into(),
            description: String::new(),
            image_url: String::new(),
            reference: String::new(),
            quantity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }
}

impl ValueObject for Item {}
