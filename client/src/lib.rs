//! Store Order Management - REST client
//!
//! Typed client for the store order management backend: one API client per
//! resource, bearer-token handling, and the order submission flow with its
//! client-side validation pre-checks.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod submit;
pub mod token;

pub use config::Config;
pub use error::ClientError;
pub use http::ApiClient;
pub use token::TokenStore;
