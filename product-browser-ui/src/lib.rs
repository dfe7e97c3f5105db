//! Product browser page: customer selector, product filter and product
//! details, driven by the product API.

pub mod api_client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod surface;
pub mod wasm_utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use api_client::{ProductApi, ProductApiClient};
pub use config::BrowserConfig;
pub use controller::ProductBrowser;
pub use error::{ApiError, ErrorKind};
pub use surface::{CardClickHandler, PageSurface};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// This is the entry-point for all the web-assembly.
/// This is called once from the HTML.
/// It mounts the controller as soon as the document is ready, then returns.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(api_base_url: Option<String>) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    wasm_utils::set_panic_hook();
    wasm_utils::init_logging();

    let config = BrowserConfig::from_override(api_base_url.as_deref());
    log::info!("🔌 Product API at {}", config.api_base_url());

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let listener = Closure::once(move || {
            if let Err(e) = mount(config) {
                log::error!("Failed to start product browser: {}", e);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            listener.as_ref().unchecked_ref(),
        )?;
        listener.forget();
        return Ok(());
    }

    mount(config)?;
    Ok(())
}

/// Binds the page, wires the filter form and loads the customer list.
#[cfg(target_arch = "wasm32")]
fn mount(config: BrowserConfig) -> Result<(), dom::ViewError> {
    use std::rc::Rc;

    let view = dom::PageView::bind(dom::document()?)?;
    let browser = ProductBrowser::new(ProductApiClient::new(config), view);

    let on_submit = Rc::clone(&browser);
    browser.view().on_filter_submit(move || {
        let browser = Rc::clone(&on_submit);
        wasm_utils::spawn_async(async move { browser.submit_filter().await });
    })?;

    wasm_utils::spawn_async(async move { browser.initialize().await });
    Ok(())
}
