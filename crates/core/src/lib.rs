//! Catalog Core - Shared types library.
//!
//! This crate provides the domain types used by the catalog gateway:
//! - `admin` - Gateways and services over the Shopify Admin API
//! - `cli` - Command-line front end for catalog management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no GraphQL
//! payload shapes. Responses are normalized into these types by the admin
//! crate before they reach callers.
//!
//! # Modules
//!
//! - [`types`] - Opaque ID newtypes, products, variants, collections, statuses
//!   and the inputs accepted by each operation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
