//! In-memory entity store.
//!
//! Holds the process-lifetime product and order collections. There is no
//! persistence: restarting the process resets the store to its seed data.
//!
//! The store is an owned object injected through `AppState`, not module
//! state, so tests get isolated instances. IDs come from monotonic counters
//! rather than collection length, so a delete can never cause a later insert
//! to reuse an id.

mod orders;
mod products;

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use rust_decimal::Decimal;
use thiserror::Error;

use shopfront_core::{Category, Order, PLACEHOLDER_IMAGE, Product, ProductId, categories};

pub use orders::NewOrder;
pub use products::{NewProduct, ProductPatch};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required fields missing or invalid.
    #[error("{0}")]
    Validation(String),

    /// The named entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
}

/// The in-memory entity store.
///
/// Each operation takes one lock for its duration; there is no
/// cross-operation transactionality.
pub struct Store {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    next_product_id: AtomicI64,
    next_order_id: AtomicI64,
}

impl Store {
    /// An empty store. Used by tests that need full isolation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            orders: RwLock::new(Vec::new()),
            next_product_id: AtomicI64::new(1),
            next_order_id: AtomicI64::new(1),
        }
    }

    /// A store pre-loaded with the demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut products = store
                .products
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            products.extend(seed_products());
        }
        store.next_product_id.store(4, Ordering::SeqCst);
        store
    }

    /// The static category set. Always succeeds, never derived from
    /// product data.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        categories()
    }

    fn allocate_product_id(&self) -> ProductId {
        ProductId::new(self.next_product_id.fetch_add(1, Ordering::SeqCst))
    }

    fn read_products(&self) -> std::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.products
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_products(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.products
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn read_orders(&self) -> std::sync::RwLockReadGuard<'_, Vec<Order>> {
        self.orders
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_orders(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Order>> {
        self.orders
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo catalog the server starts with.
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Product 1".to_string(),
            price: Decimal::new(9999, 2),
            description: "This is product 1 description".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            category: "Electronics".to_string(),
            stock_quantity: 50,
        },
        Product {
            id: ProductId::new(2),
            name: "Product 2".to_string(),
            price: Decimal::new(14999, 2),
            description: "This is product 2 description".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            category: "Clothing".to_string(),
            stock_quantity: 100,
        },
        Product {
            id: ProductId::new(3),
            name: "Product 3".to_string(),
            price: Decimal::new(7999, 2),
            description: "This is product 3 description".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            category: "Home".to_string(),
            stock_quantity: 25,
        },
    ]
}
