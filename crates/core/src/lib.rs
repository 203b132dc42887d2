//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain types used across all Shopfront components:
//! - `api` - REST API server backed by the in-memory entity store
//! - `storefront` - Client-side catalog and cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, products, orders, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
