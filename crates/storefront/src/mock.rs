//! Bundled fallback data.
//!
//! When the API is unreachable the storefront silently renders this catalog
//! instead of showing an error. The records mirror the seed data the API
//! ships with.

use rust_decimal::Decimal;

use shopfront_core::{Category, PLACEHOLDER_IMAGE, Product, ProductId, categories};

/// The fallback product catalog.
#[must_use]
pub fn mock_products() -> Vec<Product> {
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

/// The fallback category set (same static set the API serves).
#[must_use]
pub fn mock_categories() -> Vec<Category> {
    categories()
}
