// src/models/mod.rs

//! Data structures for database rows and wire payloads.

// Declare child modules for each model
pub mod order;
pub mod order_item;
pub mod photo;

// Re-export the model structs for convenient access
pub use order::{OrderSummary, STATUS_PAID};
pub use order_item::OrderItem;
pub use photo::PopularPhoto;
