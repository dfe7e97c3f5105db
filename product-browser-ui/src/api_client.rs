use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BrowserConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    ApiErrorBody, Customer, CustomersResponse, FilterCriteria, Product, ProductDetails,
    ProductDetailsRequest, ProductsResponse,
};

/// The three backend calls the page controller depends on.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// page's single event loop.
#[async_trait(?Send)]
pub trait ProductApi {
    async fn customers(&self) -> Result<Vec<Customer>>;
    async fn filter_products(&self, criteria: &FilterCriteria) -> Result<Vec<Product>>;
    async fn product_details(&self, request: &ProductDetailsRequest) -> Result<ProductDetails>;
}

#[derive(Debug, Clone)]
pub struct ProductApiClient {
    client: Client,
    config: BrowserConfig,
}

impl ProductApiClient {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.config.endpoint(path);
        log::debug!("📋 GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(&url, response).await
    }

    async fn post_json<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let url = self.config.endpoint(path);
        log::debug!("📤 POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(&url, response).await
    }

    async fn decode<R: DeserializeOwned>(url: &str, response: Response) -> Result<R> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            log::warn!("❌ {} returned {} {:?}", url, status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("💥 Failed to parse response from {}: {} - body was: {}", url, e, body);
            ApiError::MalformedResponse(e)
        })
    }
}

#[async_trait(?Send)]
impl ProductApi for ProductApiClient {
    async fn customers(&self) -> Result<Vec<Customer>> {
        let response: CustomersResponse = self.get_json("customers").await?;
        let customers = response.into_customers();
        log::info!("✅ Loaded {} customers", customers.len());
        Ok(customers)
    }

    async fn filter_products(&self, criteria: &FilterCriteria) -> Result<Vec<Product>> {
        let response: ProductsResponse = self.post_json("filter-products", criteria).await?;
        let products = response.into_products();
        log::info!(
            "✅ {} products match customer '{}' (cross-border: {})",
            products.len(),
            criteria.customer_id,
            criteria.buy_cross_border
        );
        Ok(products)
    }

    async fn product_details(&self, request: &ProductDetailsRequest) -> Result<ProductDetails> {
        let details: ProductDetails = self.post_json("product-details", request).await?;
        log::info!(
            "✅ Loaded details for product '{}' / customer '{}'",
            request.product_id,
            request.customer_id
        );
        Ok(details)
    }
}
