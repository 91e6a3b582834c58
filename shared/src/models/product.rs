//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API.
///
/// Catalog entries are owned and mutated by the backend; the client only
/// ever reads a snapshot of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    #[serde(default)]
    pub stock: i32,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub stock: i32,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Base64-encoded image data, set when uploading a new image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}
