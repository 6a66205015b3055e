//! Type conversions from raw GraphQL nodes to domain types.
//!
//! These functions are pure: they never fail and never touch the network.
//! Optional strings that arrive as `null` or `""` become `None`, and
//! connection envelopes are unwrapped into plain `Vec`s.

mod collections;
mod products;

pub use collections::{convert_collection, convert_collection_connection};
pub use products::{convert_product, convert_product_connection, convert_variant};

use super::queries::Connection;

/// Treat a blank string the same as an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Unwrap a connection's edges, mapping each node in order.
pub fn unwrap_edges<T, U>(connection: Option<Connection<T>>, convert: impl Fn(T) -> U) -> Vec<U> {
    connection
        .map(|c| c.edges.into_iter().map(|e| convert(e.node)).collect())
        .unwrap_or_default()
}
