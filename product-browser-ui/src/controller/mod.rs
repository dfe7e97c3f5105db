use std::rc::Rc;

use crate::api_client::ProductApi;
use crate::models::ProductDetailsRequest;
use crate::render::{self, DetailsView, ProductListing};
use crate::surface::{CardClickHandler, PageSurface};
use crate::wasm_utils;


/// Page controller: loads customers, runs filter submissions and fetches
/// product details, writing every result into its own page region.
pub struct ProductBrowser<A, V> {
    api: A,
    view: V,
}

impl<A, V> ProductBrowser<A, V>
where
    A: ProductApi + 'static,
    V: PageSurface + 'static,
{
    pub fn new(api: A, view: V) -> Rc<Self> {
        Rc::new(Self { api, view })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Populates the customer selector. Runs once, when the page is ready.
    pub async fn initialize(&self) {
        log::info!("🚀 Loading customers");

        let options = match self.api.customers().await {
            Ok(customers) => render::customer_options(&customers),
            Err(e) => {
                log::error!("Failed to load customers: {} ({:?})", e, e.kind());
                render::customer_error_options(&e)
            }
        };
        self.view.render_customers(&options);
    }

    /// Handles a filter form submission. The caller has already suppressed
    /// the browser's default submit; that listener lives in
    /// `dom::PageView::on_filter_submit` and is only exercised in a browser.
    pub async fn submit_filter(self: &Rc<Self>) {
        let criteria = self.view.filter_criteria();
        log::info!(
            "🔍 Filtering products for customer '{}' (cross-border: {})",
            criteria.customer_id,
            criteria.buy_cross_border
        );

        let listing = match self.api.filter_products(&criteria).await {
            Ok(products) => ProductListing::from_products(&products),
            Err(e) => {
                log::error!("Failed to filter products: {} ({:?})", e, e.kind());
                ProductListing::failed(&e)
            }
        };

        let on_select = self.card_click_handler(criteria.customer_id);
        self.view.render_products(&listing, on_select);
    }

    /// Opens the details panel and fills it with the text for one product.
    /// Overlapping calls are not cancelled; whichever completes last is shown.
    pub async fn show_product_details(&self, product_id: &str, customer_id: &str) {
        self.view.show_details_panel();
        self.view.render_details(&DetailsView::Loading);

        let request = ProductDetailsRequest {
            customer_id: customer_id.to_string(),
            product_id: product_id.to_string(),
        };

        let details = match self.api.product_details(&request).await {
            Ok(details) => DetailsView::Loaded(details.details),
            Err(e) => {
                log::error!(
                    "Failed to load details for product '{}': {} ({:?})",
                    product_id,
                    e,
                    e.kind()
                );
                DetailsView::failed(&e)
            }
        };
        self.view.render_details(&details);
    }

    fn card_click_handler(self: &Rc<Self>, customer_id: String) -> CardClickHandler {
        let browser = Rc::clone(self);
        Rc::new(move |product_id: &str| {
            let browser = Rc::clone(&browser);
            let product_id = product_id.to_string();
            let customer_id = customer_id.clone();
            log::debug!("Product card '{}' clicked", product_id);
            wasm_utils::spawn_async(async move {
                browser.show_product_details(&product_id, &customer_id).await;
            });
        })
    }
}
