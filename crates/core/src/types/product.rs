//! Product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Image path used when a product is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// A catalog product.
///
/// Serialized camelCase (`imageUrl`, `stockQuantity`) to match the wire
/// format the browser clients already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency. Never negative.
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// Units on hand. Never negative; not decremented by checkout.
    pub stock_quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Product 1".to_string(),
            price: Decimal::new(9999, 2),
            description: "This is product 1 description".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            category: "Electronics".to_string(),
            stock_quantity: 50,
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageUrl"], "/images/placeholder.jpg");
        assert_eq!(json["stockQuantity"], 50);
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["price"].is_number());
        assert!((json["price"].as_f64().unwrap() - 99.99).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let product = sample();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
