//! Shopfront API - REST API over the in-memory entity store.
//!
//! Exposed as a library so the route handlers and store can be exercised
//! directly from unit tests; the binary lives in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
