//! Order operations on the entity store.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use shopfront_core::{Customer, Order, OrderId, OrderItem, OrderStatus, ShippingAddress};

use super::{Store, StoreError};

/// Payload for creating an order.
///
/// Item prices are client-supplied and are not repriced against the product
/// collection; the total is computed from what the client sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Option<Vec<OrderItem>>,
    pub customer: Option<Customer>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<String>,
}

impl Store {
    /// Create an order with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if items are missing or empty, or if
    /// customer, shipping address, or payment method are absent.
    pub fn create_order(&self, new: NewOrder) -> Result<Order, StoreError> {
        let items = match new.items {
            Some(items) if !items.is_empty() => items,
            _ => {
                return Err(StoreError::Validation(
                    "Missing required order information".to_string(),
                ));
            }
        };
        let (Some(customer), Some(shipping_address), Some(payment_method)) =
            (new.customer, new.shipping_address, new.payment_method)
        else {
            return Err(StoreError::Validation(
                "Missing required order information".to_string(),
            ));
        };

        let total: Decimal = items.iter().map(OrderItem::subtotal).sum();

        let order = Order {
            id: OrderId::new(self.next_order_id.fetch_add(1, std::sync::atomic::Ordering::SeqCst)),
            items,
            customer,
            shipping_address,
            payment_method,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        self.write_orders().push(order.clone());
        Ok(order)
    }

    /// First order matching `id`, if any.
    #[must_use]
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        self.read_orders().iter().find(|o| o.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::ProductId;

    fn valid_new_order() -> NewOrder {
        NewOrder {
            items: Some(vec![
                OrderItem {
                    product_id: ProductId::new(1),
                    quantity: 2,
                    price: Decimal::new(9999, 2),
                },
                OrderItem {
                    product_id: ProductId::new(3),
                    quantity: 1,
                    price: Decimal::new(7999, 2),
                },
            ]),
            customer: Some(Customer {
                name: "Test Customer".to_string(),
                email: "test@example.com".to_string(),
            }),
            shipping_address: Some(ShippingAddress {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62701".to_string(),
                country: "US".to_string(),
            }),
            payment_method: Some("credit_card".to_string()),
        }
    }

    #[test]
    fn test_create_order_computes_total() {
        let store = Store::new();
        let order = store.create_order(valid_new_order()).unwrap();
        // 2 x 99.99 + 1 x 79.99
        assert_eq!(order.total, Decimal::new(27997, 2));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_create_order_uses_client_prices() {
        // No server-side repricing: the submitted price wins even if it
        // disagrees with the catalog.
        let store = Store::seeded();
        let order = store
            .create_order(NewOrder {
                items: Some(vec![OrderItem {
                    product_id: ProductId::new(1),
                    quantity: 1,
                    price: Decimal::new(100, 2),
                }]),
                ..valid_new_order()
            })
            .unwrap();
        assert_eq!(order.total, Decimal::new(100, 2));
    }

    #[test]
    fn test_create_order_rejects_empty_items() {
        let store = Store::new();
        for items in [None, Some(Vec::new())] {
            let result = store.create_order(NewOrder {
                items,
                ..valid_new_order()
            });
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
    }

    #[test]
    fn test_create_order_rejects_missing_customer_fields() {
        let store = Store::new();
        for payload in [
            NewOrder {
                customer: None,
                ..valid_new_order()
            },
            NewOrder {
                shipping_address: None,
                ..valid_new_order()
            },
            NewOrder {
                payment_method: None,
                ..valid_new_order()
            },
        ] {
            assert!(matches!(
                store.create_order(payload),
                Err(StoreError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let store = Store::new();
        let a = store.create_order(valid_new_order()).unwrap();
        let b = store.create_order(valid_new_order()).unwrap();
        assert_eq!(a.id, OrderId::new(1));
        assert_eq!(b.id, OrderId::new(2));
    }

    #[test]
    fn test_get_order_roundtrip() {
        let store = Store::new();
        let created = store.create_order(valid_new_order()).unwrap();
        let fetched = store.get_order(created.id).unwrap();
        assert_eq!(fetched, created);
        assert!(store.get_order(OrderId::new(999)).is_none());
    }
}
