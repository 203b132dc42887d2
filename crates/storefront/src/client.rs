//! HTTP client for the Shopfront API.
//!
//! Catalog reads degrade to the bundled mock data on any failure, matching
//! the frontend's behavior of swapping in hardcoded records rather than
//! showing an error. Order submission does not degrade: a failed order is a
//! real error.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shopfront_core::{
    Category, Customer, Order, OrderId, OrderItem, Product, ProductId, ShippingAddress,
};

use crate::mock;

/// Default API base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors from API calls that do not degrade to mock data.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Order payload submitted at checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
}

/// Response envelope for a created order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: OrderId,
    pub order: Order,
}

/// Client for the Shopfront REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch the product catalog, falling back to the bundled mock catalog
    /// on any network or decode failure.
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(error = %err, "API unavailable, using mock catalog");
                mock::mock_products()
            }
        }
    }

    /// Fetch a single product by id. Does not degrade to mock data: a
    /// missing product is a real answer, not an outage.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Rejected` for 404s and other 4xx responses, or
    /// `ClientError::Http` for transport failures.
    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let url = self.endpoint(&format!("/api/products/{id}"))?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ClientError::Rejected {
                status,
                message: error_message(response).await,
            })
        }
    }

    async fn try_fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint("/api/products")?;
        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    /// Fetch the category set, falling back to the static set on failure.
    pub async fn fetch_categories(&self) -> Vec<Category> {
        let result: Result<Vec<Category>, ClientError> = async {
            let url = self.endpoint("/api/categories")?;
            Ok(self
                .http
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?)
        }
        .await;

        match result {
            Ok(categories) => categories,
            Err(err) => {
                tracing::warn!(error = %err, "API unavailable, using mock categories");
                mock::mock_categories()
            }
        }
    }

    /// Submit an order. Does not degrade to mock behavior.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Rejected` with the server's message for 4xx
    /// responses, or `ClientError::Http` for transport failures.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderCreated, ClientError> {
        let url = self.endpoint("/api/orders")?;
        let response = self.http.post(url).json(order).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ClientError::Rejected {
                status,
                message: error_message(response).await,
            })
        }
    }
}

/// Pull the `{"message": ...}` body out of an error response.
async fn error_message(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| "unknown error".to_string(), |body| body.message)
}
