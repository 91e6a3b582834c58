//! Typed clients for the backend resources

mod auth;
mod invoices;
mod order_lines;
mod orders;
mod products;
mod stores;

pub use auth::AuthApi;
pub use invoices::InvoiceApi;
pub use order_lines::OrderLineApi;
pub use orders::OrderApi;
pub use products::{encode_image, ProductApi};
pub use stores::StoreApi;
