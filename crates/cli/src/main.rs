//! Catalog CLI - Product and collection management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of products, newest first
//! catalog products list --sort created-at --reverse
//!
//! # Create a product and set its first variant's price
//! catalog products create --title "Red Snowboard"
//! catalog products set-price gid://shopify/Product/1 gid://shopify/ProductVariant/11 --price 100.00
//!
//! # Put products into a collection
//! catalog collections add-products gid://shopify/Collection/1 gid://shopify/Product/1
//!
//! # Run the demo snowboard flow
//! catalog flow snowboard
//! ```
//!
//! Results are written to stdout as pretty-printed JSON; logs go to stderr.
//! Configuration is read from the environment (and `.env`), see
//! `catalog_admin::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::collections::CollectionAction;
use commands::flow::FlowAction;
use commands::products::ProductAction;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Catalog management over the Shopify Admin API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products and variants
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage collections and their products
    Collections {
        #[command(subcommand)]
        action: CollectionAction,
    },
    /// Run multi-step flows
    Flow {
        #[command(subcommand)]
        action: FlowAction,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // JSON for log shippers, text for humans; stdout is reserved for results
    let json = std::env::var("CATALOG_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let context = commands::Context::from_env()?;

    match cli.command {
        Commands::Products { action } => commands::products::run(&context, action).await,
        Commands::Collections { action } => commands::collections::run(&context, action).await,
        Commands::Flow { action } => commands::flow::run(&context, action).await,
    }
}
