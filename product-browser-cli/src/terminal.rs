use std::cell::Cell;

use product_browser_ui::models::FilterCriteria;
use product_browser_ui::render::{DetailsView, ProductListing, SelectOption};
use product_browser_ui::{CardClickHandler, PageSurface};

/// Prints each page region to stdout. Form input comes from the command line.
pub struct TerminalSurface {
    criteria: FilterCriteria,
    failed: Cell<bool>,
}

impl TerminalSurface {
    pub fn new(customer_id: &str, buy_cross_border: bool) -> Self {
        Self {
            criteria: FilterCriteria {
                customer_id: customer_id.to_string(),
                buy_cross_border,
            },
            failed: Cell::new(false),
        }
    }

    /// True once any region has rendered an error state.
    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}

impl PageSurface for TerminalSurface {
    fn render_customers(&self, options: &[SelectOption]) {
        println!("--- CUSTOMERS ---");
        for option in options {
            if option.is_error {
                self.failed.set(true);
                eprintln!("{}", option.label);
            } else if option.placeholder {
                println!("  ({})", option.label);
            } else {
                println!("  {}", option.label);
            }
        }
    }

    fn filter_criteria(&self) -> FilterCriteria {
        self.criteria.clone()
    }

    fn render_products(&self, listing: &ProductListing, _on_select: CardClickHandler) {
        println!("--- PRODUCTS ---");
        match listing {
            ProductListing::Cards(cards) => {
                for card in cards {
                    println!("[{}] {}", card.product_id, card.name);
                    println!("    Type: {}", card.product_type);
                    println!("    {} ({})", card.risk_label(), card.risk_class);
                    println!("    Approved In: {}", card.approved_in);
                }
            }
            ProductListing::Empty => println!("{}", listing.message().unwrap_or_default()),
            ProductListing::Failed(message) => {
                self.failed.set(true);
                eprintln!("{message}");
            }
        }
    }

    fn show_details_panel(&self) {
        println!("--- PRODUCT DETAILS ---");
    }

    fn render_details(&self, details: &DetailsView) {
        match details {
            // Only the final text is worth printing
            DetailsView::Loading => {}
            DetailsView::Loaded(text) => println!("{text}"),
            DetailsView::Failed(text) => {
                self.failed.set(true);
                eprintln!("{text}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use product_browser_ui::ApiError;
    use product_browser_ui::render::{customer_error_options, customer_options};

    fn unreachable() -> ApiError {
        ApiError::Status { status: 502, message: None }
    }

    fn ignore_clicks() -> CardClickHandler {
        Rc::new(|_: &str| {})
    }

    #[test]
    fn test_successful_regions_do_not_fail() {
        let surface = TerminalSurface::new("C1", false);

        surface.render_customers(&customer_options(&[]));
        surface.render_products(&ProductListing::Empty, ignore_clicks());
        surface.render_details(&DetailsView::Loading);
        surface.render_details(&DetailsView::Loaded("Low risk bond".into()));

        assert!(!surface.failed());
    }

    #[test]
    fn test_customer_error_marks_failure() {
        let surface = TerminalSurface::new("", false);
        surface.render_customers(&customer_error_options(&unreachable()));
        assert!(surface.failed());
    }

    #[test]
    fn test_product_error_marks_failure() {
        let surface = TerminalSurface::new("C1", true);
        surface.render_products(&ProductListing::failed(&unreachable()), ignore_clicks());
        assert!(surface.failed());
    }

    #[test]
    fn test_details_error_marks_failure() {
        let surface = TerminalSurface::new("C1", false);
        surface.render_details(&DetailsView::failed(&unreachable()));
        assert!(surface.failed());
    }
}
