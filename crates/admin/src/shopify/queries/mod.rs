//! GraphQL operation definitions for the Shopify Admin API.
//!
//! Each operation lives in its own module with the same layout
//! `graphql_client` generates: an `OPERATION` (name + document), the
//! `Variables` it takes and the `ResponseData` it returns. Documents are
//! written by hand so the crate builds without a vendored schema.
//!
//! Response types deserialize the raw `data` object exactly as the API shapes
//! it; the `conversions` module turns them into domain types.

use serde::Deserialize;

pub mod collections;
pub mod products;

pub use collections::*;
pub use products::*;

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, as declared in the document.
    pub name: &'static str,
    /// The full GraphQL document.
    pub document: &'static str,
}

// =============================================================================
// Shared response shapes
// =============================================================================

/// A field-level error reported inside a mutation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    /// Path to the offending input field.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

/// A connection's `edges` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// Edges in order; a missing list reads as empty.
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

/// One edge of a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    /// The wrapped node.
    pub node: T,
}

/// Mutation payloads that only report user errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserErrorsPayload {
    /// Errors, if any.
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}
