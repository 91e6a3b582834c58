//! Shared types and models for the Store Order Management client
//!
//! This crate contains the wire models for every backend resource the
//! client talks to, plus the pure order validation and aggregation logic
//! that runs before an order draft is submitted.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
