//! Order models
//!
//! Drafts (`OrderDraft`, `OrderLineDraft`) exist only while an order is
//! being composed client-side and are never serialized directly; the wire
//! payload is built from them via [`OrderDraft::to_request`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "pending".to_string()
}

/// A confirmed order as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    pub date: DateTime<Utc>,
    pub store_id: i32,
    pub user_id: Option<i32>,
    pub total: Decimal,
    #[serde(default = "default_status")]
    pub status: String,
}

/// One line item on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// One line of an order being composed client-side.
///
/// `product_name` and `unit_price` are copied from the catalog entry when
/// the product is chosen; they are not re-checked against later price
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineDraft {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderLineDraft {
    /// Line subtotal: quantity times unit price, in exact decimal
    /// arithmetic.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    pub fn to_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// An order being composed client-side, not yet submitted
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub store_id: i32,
    pub user_id: i32,
    pub status: String,
    pub lines: Vec<OrderLineDraft>,
}

impl OrderDraft {
    pub fn new(store_id: i32, user_id: i32) -> Self {
        Self {
            store_id,
            user_id,
            status: default_status(),
            lines: Vec::new(),
        }
    }

    /// Wire payload for order creation. Denormalized product names stay
    /// client-side.
    pub fn to_request(&self) -> OrderRequest {
        OrderRequest {
            store_id: self.store_id,
            user_id: self.user_id,
            status: self.status.clone(),
            items: self.lines.iter().map(OrderLineDraft::to_item).collect(),
        }
    }
}

/// Payload for creating or updating an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub store_id: i32,
    pub user_id: i32,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// An order as returned by the list/read endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: i32,
    pub date: DateTime<Utc>,
    pub store_id: i32,
    pub user_id: Option<i32>,
    pub total: Decimal,
    #[serde(default = "default_status")]
    pub status: String,
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// An order with its line items resolved for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: i32,
    pub date: DateTime<Utc>,
    pub store_id: i32,
    pub user_id: Option<i32>,
    pub total: Decimal,
    pub status: String,
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemDetail>,
}

/// A resolved line item on an order detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A persisted order line from the order-line resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub line_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Payload for creating or updating a persisted order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}
