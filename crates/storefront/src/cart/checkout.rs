//! Checkout.
//!
//! By default checkout is a local demo simulation that clears the cart
//! without contacting the backend. [`CheckoutMode::SubmitOrder`] opts into
//! building a real order from the cart lines and posting it to the API.

use rust_decimal::Decimal;
use thiserror::Error;

use shopfront_core::{Customer, OrderId, OrderItem, ShippingAddress};

use crate::client::{ApiClient, ClientError, OrderRequest};

use super::{Cart, CartStorage, StorageError};

/// What checkout does with the cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutMode {
    /// Pretend success locally and clear the cart. The backend never hears
    /// about it.
    #[default]
    Simulate,
    /// Build an order from the cart lines and submit it to the API,
    /// clearing the cart only on success.
    SubmitOrder,
}

/// Customer details collected at checkout.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out.
    EmptyCart,
    /// Local simulation completed; cart cleared, no order persisted.
    Simulated,
    /// Order accepted by the API.
    Submitted { order_id: OrderId, total: Decimal },
}

/// Errors from checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Run checkout over the cart.
///
/// # Errors
///
/// Returns `CheckoutError::Client` if order submission fails (the cart is
/// left intact), or `CheckoutError::Storage` if clearing the cart fails.
pub async fn checkout<S: CartStorage>(
    cart: &mut Cart<S>,
    mode: CheckoutMode,
    client: &ApiClient,
    details: &CheckoutDetails,
) -> Result<CheckoutOutcome, CheckoutError> {
    if cart.is_empty() {
        return Ok(CheckoutOutcome::EmptyCart);
    }

    match mode {
        CheckoutMode::Simulate => {
            cart.clear()?;
            Ok(CheckoutOutcome::Simulated)
        }
        CheckoutMode::SubmitOrder => {
            let items: Vec<OrderItem> = cart
                .lines()
                .into_iter()
                .map(|line| OrderItem {
                    product_id: line.product.id,
                    quantity: line.quantity,
                    price: line.product.price,
                })
                .collect();

            let request = OrderRequest {
                items,
                customer: details.customer.clone(),
                shipping_address: details.shipping_address.clone(),
                payment_method: details.payment_method.clone(),
            };

            let created = client.place_order(&request).await?;
            cart.clear()?;
            Ok(CheckoutOutcome::Submitted {
                order_id: created.order_id,
                total: created.order.total,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryStorage;
    use crate::mock::mock_products;

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            customer: Customer {
                name: "Test Customer".to_string(),
                email: "test@example.com".to_string(),
            },
            shipping_address: ShippingAddress {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62701".to_string(),
                country: "US".to_string(),
            },
            payment_method: "credit_card".to_string(),
        }
    }

    fn offline_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn test_empty_cart_refuses_checkout() {
        let mut cart = Cart::open(MemoryStorage::new()).unwrap();
        let outcome = checkout(&mut cart, CheckoutMode::Simulate, &offline_client(), &details())
            .await
            .unwrap();
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    }

    #[tokio::test]
    async fn test_simulated_checkout_clears_cart_without_backend() {
        let mut cart = Cart::open(MemoryStorage::new()).unwrap();
        for p in mock_products() {
            cart.add(p).unwrap();
        }

        // The client points at a dead port; simulation must not care.
        let outcome = checkout(&mut cart, CheckoutMode::Simulate, &offline_client(), &details())
            .await
            .unwrap();

        assert_eq!(outcome, CheckoutOutcome::Simulated);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_cart_intact() {
        let mut cart = Cart::open(MemoryStorage::new()).unwrap();
        for p in mock_products() {
            cart.add(p).unwrap();
        }

        let result = checkout(
            &mut cart,
            CheckoutMode::SubmitOrder,
            &offline_client(),
            &details(),
        )
        .await;

        assert!(matches!(result, Err(CheckoutError::Client(_))));
        assert_eq!(cart.items().len(), 3);
    }
}
