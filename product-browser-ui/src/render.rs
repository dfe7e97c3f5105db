//! View models for the product browser page.
//!
//! Everything here is plain data derived from API responses, so the exact
//! text and class names that reach the page can be checked without a DOM.

use crate::error::ApiError;
use crate::models::{Customer, Product};

pub const NO_CUSTOMERS_LABEL: &str = "No customers available";
pub const NO_PRODUCTS_MESSAGE: &str = "No products found matching your criteria.";
pub const LOADING_TEXT: &str = "Loading...";

const APPROVED_PREFIX: &str = "Approved for ";
const MARKETS_SUFFIX: &str = " markets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Placeholder rows carry an empty value and are styled as disabled.
    pub placeholder: bool,
    /// Set when the row stands in for a failed customer fetch.
    pub is_error: bool,
}

impl SelectOption {
    pub fn customer(customer: &Customer) -> Self {
        Self {
            value: customer.customer_id.clone(),
            label: customer_label(customer),
            placeholder: false,
            is_error: false,
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            placeholder: true,
            is_error: false,
        }
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::placeholder(label)
        }
    }
}

/// `"<customer_id> (<risk_appetite>, <country>)"`
pub fn customer_label(customer: &Customer) -> String {
    format!(
        "{} ({}, {})",
        customer.customer_id, customer.risk_appetite, customer.country
    )
}

pub fn customer_options(customers: &[Customer]) -> Vec<SelectOption> {
    if customers.is_empty() {
        return vec![SelectOption::placeholder(NO_CUSTOMERS_LABEL)];
    }
    customers.iter().map(SelectOption::customer).collect()
}

pub fn customer_error_options(error: &ApiError) -> Vec<SelectOption> {
    vec![SelectOption::error(format!(
        "Unable to load customers: {}",
        error.user_message()
    ))]
}

/// Strips the "Approved for " / " markets" wrapper from a regulatory status,
/// leaving the list of countries.
pub fn approved_markets(regulatory_status: &str) -> String {
    regulatory_status
        .replace(APPROVED_PREFIX, "")
        .replace(MARKETS_SUFFIX, "")
}

/// CSS class for a risk tag: whitespace removed, `risk-` prefixed.
pub fn risk_class(risk_level: &str) -> String {
    let token: String = risk_level.chars().filter(|c| !c.is_whitespace()).collect();
    format!("risk-{token}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product_id: String,
    pub name: String,
    pub product_type: String,
    pub risk_level: String,
    pub risk_class: String,
    pub approved_in: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            product_type: product.product_type.clone(),
            risk_level: product.risk_level.clone(),
            risk_class: risk_class(&product.risk_level),
            approved_in: approved_markets(&product.regulatory_status),
        }
    }

    pub fn risk_label(&self) -> String {
        format!("Risk Level: {}", self.risk_level)
    }

    /// Inner markup of the card element. Field values are escaped.
    pub fn markup(&self) -> String {
        format!(
            concat!(
                "<h3>{name}</h3>",
                "<p><strong>Type:</strong> {product_type}</p>",
                "<p><strong class=\"risk-tag {risk_class}\">{risk_label}</strong></p>",
                "<p><strong>Approved In:</strong> {approved_in}</p>",
            ),
            name = escape_html(&self.name),
            product_type = escape_html(&self.product_type),
            risk_class = escape_html(&self.risk_class),
            risk_label = escape_html(&self.risk_label()),
            approved_in = escape_html(&self.approved_in),
        )
    }
}

/// What the product list container shows after a filter submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductListing {
    Cards(Vec<ProductCard>),
    Empty,
    Failed(String),
}

impl ProductListing {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            ProductListing::Empty
        } else {
            ProductListing::Cards(products.iter().map(ProductCard::from_product).collect())
        }
    }

    pub fn failed(error: &ApiError) -> Self {
        ProductListing::Failed(format!("Unable to load products: {}", error.user_message()))
    }

    /// Single-line message shown instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ProductListing::Cards(_) => None,
            ProductListing::Empty => Some(NO_PRODUCTS_MESSAGE),
            ProductListing::Failed(message) => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProductListing::Failed(_))
    }
}

/// Content of the details panel. Always rendered as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsView {
    Loading,
    Loaded(String),
    Failed(String),
}

impl DetailsView {
    pub fn failed(error: &ApiError) -> Self {
        DetailsView::Failed(format!(
            "Unable to load product details: {}",
            error.user_message()
        ))
    }

    pub fn text(&self) -> &str {
        match self {
            DetailsView::Loading => LOADING_TEXT,
            DetailsView::Loaded(text) | DetailsView::Failed(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DetailsView::Failed(_))
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, appetite: &str, country: &str) -> Customer {
        Customer {
            customer_id: id.into(),
            risk_appetite: appetite.into(),
            country: country.into(),
        }
    }

    fn product(id: &str, risk_level: &str, regulatory_status: &str) -> Product {
        Product {
            product_id: id.into(),
            name: format!("Product {id}"),
            product_type: "Bond".into(),
            risk_level: risk_level.into(),
            regulatory_status: regulatory_status.into(),
        }
    }

    #[test]
    fn test_single_customer_option() {
        let options = customer_options(&[customer("C1", "High", "US")]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "C1");
        assert_eq!(options[0].label, "C1 (High, US)");
        assert!(!options[0].placeholder);
    }

    #[test]
    fn test_customer_options_keep_response_order() {
        let customers = vec![
            customer("C3", "Low", "UK"),
            customer("C1", "High", "US"),
            customer("C2", "Medium", "DE"),
        ];
        let values: Vec<_> = customer_options(&customers).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["C3", "C1", "C2"]);
    }

    #[test]
    fn test_empty_customer_list_gives_one_placeholder() {
        let options = customer_options(&[]);
        assert_eq!(options, vec![SelectOption::placeholder(NO_CUSTOMERS_LABEL)]);
        assert_eq!(options[0].value, "");
        assert!(!options[0].is_error);
    }

    #[test]
    fn test_customer_error_is_a_placeholder() {
        let error = ApiError::Status { status: 503, message: None };
        let options = customer_error_options(&error);
        assert_eq!(options.len(), 1);
        assert!(options[0].placeholder);
        assert!(options[0].is_error);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Unable to load customers: the server responded with HTTP 503");
    }

    #[test]
    fn test_approved_markets() {
        assert_eq!(approved_markets("Approved for US, EU markets"), "US, EU");
        assert_eq!(approved_markets("Approved for SG markets"), "SG");
        assert_eq!(approved_markets("Pending review"), "Pending review");
    }

    #[test]
    fn test_approved_markets_removes_every_occurrence() {
        assert_eq!(
            approved_markets("Approved for US markets; Approved for EU markets"),
            "US; EU"
        );
    }

    #[test]
    fn test_risk_class_strips_all_whitespace() {
        assert_eq!(risk_class("High Risk"), "risk-HighRisk");
        assert_eq!(risk_class("Medium\tRisk "), "risk-MediumRisk");
        assert_eq!(risk_class("Low"), "risk-Low");
    }

    #[test]
    fn test_card_markup() {
        let card = ProductCard::from_product(&product("P1", "High Risk", "Approved for US, EU markets"));
        let markup = card.markup();
        assert!(markup.contains("<h3>Product P1</h3>"));
        assert!(markup.contains("<strong>Type:</strong> Bond"));
        assert!(markup.contains(r#"<strong class="risk-tag risk-HighRisk">Risk Level: High Risk</strong>"#));
        assert!(markup.contains("<strong>Approved In:</strong> US, EU"));
    }

    #[test]
    fn test_card_markup_escapes_values() {
        let mut p = product("P2", "Low", "Approved for US markets");
        p.name = "<script>alert(1)</script> & co".into();
        let markup = ProductCard::from_product(&p).markup();
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_empty_listing_message() {
        let listing = ProductListing::from_products(&[]);
        assert_eq!(listing, ProductListing::Empty);
        assert_eq!(listing.message(), Some("No products found matching your criteria."));
        assert!(!listing.is_error());
    }

    #[test]
    fn test_cards_listing_has_no_message() {
        let listing = ProductListing::from_products(&[product("P1", "Low", "Approved for US markets")]);
        assert!(listing.message().is_none());
    }

    #[test]
    fn test_details_text() {
        assert_eq!(DetailsView::Loading.text(), "Loading...");
        assert_eq!(DetailsView::Loaded("<b>plain</b>".into()).text(), "<b>plain</b>");

        let failed = DetailsView::failed(&ApiError::Status { status: 404, message: Some("Product with ID P9 not found".into()) });
        assert!(failed.is_error());
        assert_eq!(failed.text(), "Unable to load product details: Product with ID P9 not found (HTTP 404)");
    }
}
