//! Catalog Admin library.
//!
//! Product and collection gateways over the Shopify Admin GraphQL API, with
//! a thin validation layer in front of them.
//!
//! # Security
//!
//! The HTTP transport carries the Shopify Admin API token (full store
//! management). Load it from the environment and never log it.
//!
//! # Layers
//!
//! - [`transport`] - the single seam to the network
//! - [`shopify`] - GraphQL documents, normalizer and gateways
//! - [`services`] - input validation in front of the gateways
//! - [`flows`] - multi-step operations built on the services
//! - [`config`] / [`error`] - environment configuration and error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod flows;
pub mod services;
pub mod shopify;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{CatalogConfig, ConfigError, GatewayConfig, ShopifyAdminConfig};
pub use error::GatewayError;
pub use flows::{ProductFlowOutcome, create_product_flow, create_product_flow_with_title};
pub use services::{CollectionService, ProductService};
pub use shopify::{CollectionGateway, ProductGateway};
pub use transport::{HttpTransport, Transport, TransportError};
