//! DOM binding for the product browser page.

use std::cell::RefCell;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::models::FilterCriteria;
use crate::render::{DetailsView, ProductListing, SelectOption};
use crate::surface::{CardClickHandler, PageSurface};

pub const CUSTOMER_SELECT_ID: &str = "customer_id";
pub const PROFILE_FORM_ID: &str = "profile-form";
pub const CROSS_BORDER_ID: &str = "cross_border";
pub const PRODUCT_LIST_ID: &str = "product-list";
pub const DETAILS_PANEL_ID: &str = "product-details";
pub const DETAILS_CONTENT_ID: &str = "details-content";

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Page has no document")]
    NoDocument,
    #[error("Missing element #{0}")]
    MissingElement(&'static str),
    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: &'static str, expected: &'static str },
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        ViewError::Dom(format!("{value:?}"))
    }
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub fn document() -> Result<Document, ViewError> {
    web_sys::window()
        .ok_or(ViewError::NoWindow)?
        .document()
        .ok_or(ViewError::NoDocument)
}

fn element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, ViewError> {
    document
        .get_element_by_id(id)
        .ok_or(ViewError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| ViewError::WrongElementType { id, expected })
}

/// Typed handles to every element the page controller touches, bound once
/// at start-up.
pub struct PageView {
    document: Document,
    customer_select: HtmlSelectElement,
    form: HtmlFormElement,
    cross_border: HtmlInputElement,
    product_list: HtmlElement,
    details_panel: HtmlElement,
    details_content: HtmlElement,
    // Click listeners of the cards currently on the page
    card_listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl PageView {
    pub fn bind(document: Document) -> Result<Self, ViewError> {
        Ok(Self {
            customer_select: element(&document, CUSTOMER_SELECT_ID, "select")?,
            form: element(&document, PROFILE_FORM_ID, "form")?,
            cross_border: element(&document, CROSS_BORDER_ID, "input")?,
            product_list: element(&document, PRODUCT_LIST_ID, "element")?,
            details_panel: element(&document, DETAILS_PANEL_ID, "element")?,
            details_content: element(&document, DETAILS_CONTENT_ID, "element")?,
            card_listeners: RefCell::new(Vec::new()),
            document,
        })
    }

    /// Registers `on_submit` for the filter form. The browser's own submit
    /// navigation is always prevented.
    pub fn on_filter_submit<F>(&self, on_submit: F) -> Result<(), ViewError>
    where
        F: Fn() + 'static,
    {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            on_submit();
        });
        self.form
            .add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
        // The form lives as long as the page
        listener.forget();
        Ok(())
    }

    fn option(&self, option: &SelectOption) -> Result<HtmlOptionElement, ViewError> {
        let element: HtmlOptionElement = self
            .document
            .create_element("option")?
            .dyn_into()
            .map_err(|_| ViewError::WrongElementType { id: "option", expected: "option" })?;
        element.set_value(&option.value);
        element.set_text(&option.label);
        if option.placeholder {
            element.class_list().add_1("placeholder")?;
        }
        if option.is_error {
            element.class_list().add_1("error")?;
        }
        Ok(element)
    }

    fn try_render_customers(&self, options: &[SelectOption]) -> Result<(), ViewError> {
        self.customer_select.set_inner_html("");
        for option in options {
            let element = self.option(option)?;
            self.customer_select.append_child(&element)?;
        }
        Ok(())
    }

    fn message_paragraph(&self, message: &str, is_error: bool) -> Result<Element, ViewError> {
        let paragraph = self.document.create_element("p")?;
        paragraph.set_text_content(Some(message));
        if is_error {
            paragraph.class_list().add_1("error")?;
        }
        Ok(paragraph)
    }

    fn try_render_products(
        &self,
        listing: &ProductListing,
        on_select: CardClickHandler,
    ) -> Result<(), ViewError> {
        self.product_list.set_inner_html("");
        self.card_listeners.borrow_mut().clear();

        let cards = match listing {
            ProductListing::Cards(cards) => cards,
            _ => {
                let message = listing.message().unwrap_or_default();
                let paragraph = self.message_paragraph(message, listing.is_error())?;
                self.product_list.append_child(&paragraph)?;
                return Ok(());
            }
        };

        let mut listeners = self.card_listeners.borrow_mut();
        for card in cards {
            let element = self.document.create_element("div")?;
            element.set_class_name("product-card");
            element.set_inner_html(&card.markup());

            let handler = on_select.clone();
            let product_id = card.product_id.clone();
            let listener = Closure::<dyn FnMut()>::new(move || handler(&product_id));
            element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

            self.product_list.append_child(&element)?;
            listeners.push(listener);
        }
        Ok(())
    }
}

impl PageSurface for PageView {
    fn render_customers(&self, options: &[SelectOption]) {
        if let Err(e) = self.try_render_customers(options) {
            log::error!("Failed to render customer options: {}", e);
        }
    }

    fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            customer_id: self.customer_select.value(),
            buy_cross_border: self.cross_border.checked(),
        }
    }

    fn render_products(&self, listing: &ProductListing, on_select: CardClickHandler) {
        if let Err(e) = self.try_render_products(listing, on_select) {
            log::error!("Failed to render product list: {}", e);
        }
    }

    fn show_details_panel(&self) {
        if let Err(e) = self.details_panel.style().set_property("display", "block") {
            log::error!("Failed to show details panel: {:?}", e);
        }
    }

    fn render_details(&self, details: &DetailsView) {
        self.details_content.set_text_content(Some(details.text()));
        let classes = self.details_content.class_list();
        let result = if details.is_error() {
            classes.add_1("error")
        } else {
            classes.remove_1("error")
        };
        if let Err(e) = result {
            log::warn!("Failed to update details styling: {:?}", e);
        }
    }
}
