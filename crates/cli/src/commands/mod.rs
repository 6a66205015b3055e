//! Command implementations.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Shopify store domain (required)
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token (required)
//! - `SHOPIFY_API_VERSION`, `SHOPIFY_DEFAULT_LOCATION_ID`,
//!   `SHOPIFY_PUBLICATION_IDS` - optional, see `catalog_admin::config`

pub mod collections;
pub mod flow;
pub mod products;

use std::io::Write;
use std::sync::Arc;

use catalog_admin::{
    CatalogConfig, CollectionGateway, CollectionService, ConfigError, GatewayError,
    HttpTransport, ProductGateway, ProductService,
};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A gateway or service call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Services shared by every command, over one HTTP transport.
pub struct Context {
    pub products: ProductService<Arc<HttpTransport>>,
    pub collections: CollectionService<Arc<HttpTransport>>,
}

impl Context {
    /// Build services from environment configuration.
    pub fn from_env() -> Result<Self, CommandError> {
        let config = CatalogConfig::from_env()?;
        tracing::debug!(store = %config.shopify.store, "configuration loaded");

        let transport = Arc::new(HttpTransport::new(&config.shopify)?);
        let gateway_config = Arc::new(config.gateway);

        Ok(Self {
            products: ProductService::new(ProductGateway::new(
                Arc::clone(&transport),
                Arc::clone(&gateway_config),
            )),
            collections: CollectionService::new(CollectionGateway::new(
                transport,
                gateway_config,
            )),
        })
    }
}

/// Write a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Split `a,b` and repeated flags into one list, dropping blanks.
pub fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
