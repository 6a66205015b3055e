//! Shopify Admin API gateways (HIGH PRIVILEGE).
//!
//! # Security
//!
//! Requests sent through these gateways carry the Admin API token via the
//! transport. Keep the token out of logs; spans only record resource IDs.
//!
//! # Architecture
//!
//! - `queries` holds one module per GraphQL operation (document, variables,
//!   raw response shape)
//! - `conversions` normalizes raw nodes into `catalog_core` domain types
//! - [`ProductGateway`] and [`CollectionGateway`] issue exactly one request
//!   per operation through an injected [`Transport`](crate::transport::Transport)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_admin::shopify::ProductGateway;
//! use catalog_admin::transport::HttpTransport;
//!
//! let transport = Arc::new(HttpTransport::new(&config.shopify)?);
//! let products = ProductGateway::new(transport, Arc::new(config.gateway));
//!
//! let page = products.find_all(&ProductListParams::default()).await?;
//! ```

mod collections;
mod conversions;
mod products;
pub mod queries;

pub use collections::CollectionGateway;
pub use products::ProductGateway;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::GatewayError;
use crate::transport::{GraphQlRequest, Transport};
use queries::{Operation, UserError};

/// Send one operation and decode its `data` object.
///
/// A non-empty top-level `errors` list fails with `ValidationFailed` and wins
/// over any partial data.
async fn execute<T, V, R>(
    transport: &T,
    operation: Operation,
    variables: &V,
) -> Result<R, GatewayError>
where
    T: Transport + ?Sized,
    V: Serialize + Sync,
    R: DeserializeOwned,
{
    let request = GraphQlRequest {
        variables: serde_json::to_value(variables)?,
        query: operation.document,
        operation_name: operation.name,
    };

    let response = transport.send(request).await?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let message = join_messages(errors.iter().map(|e| e.message.as_str()));
        warn!(
            operation = operation.name,
            errors = %message,
            "GraphQL request returned errors"
        );
        return Err(GatewayError::ValidationFailed(message));
    }

    let data = response.data.ok_or_else(|| {
        GatewayError::OperationFailed(format!("no data in {} response", operation.name))
    })?;

    Ok(serde_json::from_value(data)?)
}

/// Fail with `ValidationFailed` if a mutation reported user errors.
///
/// Messages are joined with `", "` in the order received.
fn ensure_no_user_errors(user_errors: &[UserError]) -> Result<(), GatewayError> {
    if user_errors.is_empty() {
        return Ok(());
    }

    let message = join_messages(user_errors.iter().map(|e| e.message.as_str()));
    warn!(errors = %message, "mutation returned user errors");

    Err(GatewayError::ValidationFailed(message))
}

fn join_messages<'a>(messages: impl Iterator<Item = &'a str>) -> String {
    messages.collect::<Vec<_>>().join(", ")
}

/// An empty filter string means "no filter".
fn non_empty_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}
