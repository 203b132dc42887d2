//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API server
//! cargo run -p shopfront-api
//!
//! # Run integration tests against it
//! cargo test -p shopfront-integration-tests -- --ignored
//! ```
//!
//! The server keeps all state in memory and reseeds on restart, so the
//! tests assume a freshly started instance only where they say so; most
//! create their own data and assert on it.
//!
//! # Test Categories
//!
//! - `api_products` - Product CRUD and category listing
//! - `api_orders` - Order creation and retrieval

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("SHOPFRONT_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
