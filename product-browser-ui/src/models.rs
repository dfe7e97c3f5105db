use serde::{Deserialize, Serialize};

// Wire types for the product API

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub risk_appetite: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub risk_level: String,
    pub regulatory_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub customer_id: String,
    pub buy_cross_border: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailsRequest {
    pub customer_id: String,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub details: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomersResponse {
    #[serde(default)]
    pub customers: Option<Vec<Customer>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// Body the backend sends with 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl CustomersResponse {
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers.unwrap_or_default()
    }
}

impl ProductsResponse {
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}
