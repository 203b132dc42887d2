//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod order;
pub mod product;
pub mod status;

pub use category::{Category, categories};
pub use id::*;
pub use order::{Customer, Order, OrderItem, ShippingAddress};
pub use product::{PLACEHOLDER_IMAGE, Product};
pub use status::OrderStatus;
