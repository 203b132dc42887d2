//! Product operations on the entity store.

use rust_decimal::Decimal;
use serde::Deserialize;

use shopfront_core::{PLACEHOLDER_IMAGE, Product, ProductId};

use super::{Store, StoreError};

/// Payload for creating a product.
///
/// All fields are optional at the serde layer so a missing field surfaces as
/// a validation failure (HTTP 400) instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock_quantity: Option<u32>,
    pub image_url: Option<String>,
}

/// Partial update payload. Only provided fields are overwritten; stored
/// values are kept for the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock_quantity: Option<u32>,
    pub image_url: Option<String>,
}

impl Store {
    /// All products in insertion order.
    #[must_use]
    pub fn list_products(&self) -> Vec<Product> {
        self.read_products().clone()
    }

    /// First product matching `id`, if any.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.read_products().iter().find(|p| p.id == id).cloned()
    }

    /// Create a product.
    ///
    /// Requires name, price, description, and category; `stock_quantity`
    /// defaults to 0 and `image_url` to the placeholder path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if a required field is missing or
    /// empty, or if the price is negative.
    pub fn create_product(&self, new: NewProduct) -> Result<Product, StoreError> {
        let name = require_text(new.name, "name")?;
        let price = new
            .price
            .ok_or_else(|| StoreError::Validation("Missing required fields".to_string()))?;
        let description = require_text(new.description, "description")?;
        let category = require_text(new.category, "category")?;

        if price < Decimal::ZERO {
            return Err(StoreError::Validation(
                "Price must not be negative".to_string(),
            ));
        }

        let product = Product {
            id: self.allocate_product_id(),
            name,
            price,
            description,
            image_url: new
                .image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category,
            stock_quantity: new.stock_quantity.unwrap_or(0),
        };

        self.write_products().push(product.clone());
        Ok(product)
    }

    /// Overwrite the provided fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has `id`, or
    /// `StoreError::Validation` if a patched price is negative.
    pub fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        if let Some(price) = patch.price
            && price < Decimal::ZERO
        {
            return Err(StoreError::Validation(
                "Price must not be negative".to_string(),
            ));
        }

        let mut products = self.write_products();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound("Product"))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(image_url) = patch.image_url {
            product.image_url = image_url;
        }

        Ok(product.clone())
    }

    /// Remove a product. Returns whether anything was removed. Orders
    /// referencing the product are left untouched.
    #[must_use]
    pub fn delete_product(&self, id: ProductId) -> bool {
        let mut products = self.write_products();
        let before = products.len();
        products.retain(|p| p.id != id);
        products.len() < before
    }
}

fn require_text(value: Option<String>, _field: &'static str) -> Result<String, StoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(StoreError::Validation(
            "Missing required fields".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_product(name: &str) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            price: Some(Decimal::new(1999, 2)),
            description: Some("A test product".to_string()),
            category: Some("Electronics".to_string()),
            stock_quantity: Some(5),
            image_url: None,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = Store::new();
        let a = store.create_product(valid_new_product("A")).unwrap();
        let b = store.create_product(valid_new_product("B")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_create_applies_defaults() {
        let store = Store::new();
        let product = store
            .create_product(NewProduct {
                stock_quantity: None,
                image_url: None,
                ..valid_new_product("A")
            })
            .unwrap();
        assert_eq!(product.stock_quantity, 0);
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        let store = Store::new();
        for payload in [
            NewProduct {
                name: None,
                ..valid_new_product("A")
            },
            NewProduct {
                price: None,
                ..valid_new_product("A")
            },
            NewProduct {
                description: None,
                ..valid_new_product("A")
            },
            NewProduct {
                category: None,
                ..valid_new_product("A")
            },
            NewProduct {
                name: Some(String::new()),
                ..valid_new_product("A")
            },
        ] {
            assert!(matches!(
                store.create_product(payload),
                Err(StoreError::Validation(_))
            ));
        }
        assert!(store.list_products().is_empty());
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let store = Store::new();
        let result = store.create_product(NewProduct {
            price: Some(Decimal::new(-1, 2)),
            ..valid_new_product("A")
        });
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_create_allows_zero_price() {
        let store = Store::new();
        let product = store
            .create_product(NewProduct {
                price: Some(Decimal::ZERO),
                ..valid_new_product("Freebie")
            })
            .unwrap();
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn test_list_includes_created_product_exactly_once() {
        let store = Store::seeded();
        let created = store.create_product(valid_new_product("New")).unwrap();
        let matches: Vec<_> = store
            .list_products()
            .into_iter()
            .filter(|p| p.id == created.id)
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], created);
    }

    #[test]
    fn test_get_missing_product_is_none() {
        let store = Store::seeded();
        assert!(store.get_product(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_update_overwrites_only_provided_fields() {
        let store = Store::seeded();
        let updated = store
            .update_product(
                ProductId::new(1),
                ProductPatch {
                    price: Some(Decimal::new(8999, 2)),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, Decimal::new(8999, 2));
        // Untouched fields keep their stored values, not defaults
        assert_eq!(updated.name, "Product 1");
        assert_eq!(updated.stock_quantity, 50);
    }

    #[test]
    fn test_update_missing_product_is_not_found() {
        let store = Store::seeded();
        let result = store.update_product(ProductId::new(999), ProductPatch::default());
        assert!(matches!(result, Err(StoreError::NotFound("Product"))));
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = Store::seeded();
        assert!(store.delete_product(ProductId::new(2)));
        assert!(store.get_product(ProductId::new(2)).is_none());
        assert_eq!(store.list_products().len(), 2);
    }

    #[test]
    fn test_delete_missing_product_is_false() {
        let store = Store::seeded();
        assert!(!store.delete_product(ProductId::new(999)));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        // length + 1 allocation would collide after a delete; the
        // monotonic counter must not.
        let store = Store::seeded();
        assert!(store.delete_product(ProductId::new(3)));
        let created = store.create_product(valid_new_product("Fresh")).unwrap();
        assert_eq!(created.id, ProductId::new(4));
        assert!(store.get_product(ProductId::new(3)).is_none());
    }
}
