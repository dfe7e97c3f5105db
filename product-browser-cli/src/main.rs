mod terminal;

use clap::{Parser, Subcommand};
use product_browser_ui::{BrowserConfig, ProductApiClient, ProductBrowser};
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalSurface;

/// Query the product API the way the product browser page does.
#[derive(Parser, Debug)]
#[command(name = "product-browser", version)]
struct Cli {
    /// API base URL (defaults to $PRODUCT_BROWSER_API_BASE, then http://127.0.0.1:5000/api)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the customers offered by the selector
    Customers,
    /// Filter products for a customer
    Products {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        cross_border: bool,
    },
    /// Show the detail text for one product
    Details {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        product: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match cli.api_base.as_deref() {
        Some(url) => BrowserConfig::from_override(Some(url)),
        None => BrowserConfig::from_env(),
    };
    tracing::info!(api = config.api_base_url(), "using product API");

    let api = ProductApiClient::new(config);

    let failed = match cli.command {
        Command::Customers => {
            let browser = ProductBrowser::new(api, TerminalSurface::new("", false));
            browser.initialize().await;
            browser.view().failed()
        }
        Command::Products { customer, cross_border } => {
            let browser = ProductBrowser::new(api, TerminalSurface::new(&customer, cross_border));
            browser.submit_filter().await;
            browser.view().failed()
        }
        Command::Details { customer, product } => {
            let browser = ProductBrowser::new(api, TerminalSurface::new(&customer, false));
            browser.show_product_details(&product, &customer).await;
            browser.view().failed()
        }
    };

    if failed {
        anyhow::bail!("product API request failed");
    }
    Ok(())
}
