//! Catalog services: input validation in front of the gateways.
//!
//! # Services
//!
//! - `products` - Product and variant operations
//! - `collections` - Collection and membership operations
//! - `validation` - Pre-flight checks shared by both
//!
//! A failed check returns `GatewayError::MissingField` and the transport is
//! never called.

pub mod collections;
pub mod products;
pub mod validation;

pub use collections::CollectionService;
pub use products::ProductService;
