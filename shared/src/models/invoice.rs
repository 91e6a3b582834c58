//! Invoice models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice linked to a confirmed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i32,
    pub order_id: i32,
    pub date: DateTime<Utc>,
    /// Location of the rendered PDF, once the backend has generated it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Payload for creating an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub order_id: i32,
}

/// An invoice with its order context resolved for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub invoice_id: i32,
    pub order_id: i32,
    pub date: DateTime<Utc>,
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<InvoiceLineItem>,
}

/// A billed line on an invoice detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}
