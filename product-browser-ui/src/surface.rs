use std::rc::Rc;

use crate::models::FilterCriteria;
use crate::render::{DetailsView, ProductListing, SelectOption};

/// Called with a product id when its card is clicked.
pub type CardClickHandler = Rc<dyn Fn(&str)>;

/// The page regions the controller reads from and writes to.
///
/// Implemented by the DOM-backed view in the browser and by plain
/// in-memory or terminal surfaces elsewhere.
pub trait PageSurface {
    /// Replaces every option of the customer selector.
    fn render_customers(&self, options: &[SelectOption]);

    /// Current form input: selected customer and the cross-border checkbox.
    fn filter_criteria(&self) -> FilterCriteria;

    /// Clears the product list container and renders `listing` into it.
    /// `on_select` must be wired to every rendered card.
    fn render_products(&self, listing: &ProductListing, on_select: CardClickHandler);

    fn show_details_panel(&self);

    /// Sets the details text. Content is never interpreted as markup.
    fn render_details(&self, details: &DetailsView);
}
