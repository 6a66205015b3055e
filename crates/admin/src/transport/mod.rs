//! Transport abstraction for GraphQL exchanges.
//!
//! Gateways never talk to the network themselves. Every operation builds a
//! [`GraphQlRequest`] (operation name, document and variables) and hands it to
//! a [`Transport`], which returns the standard `{ data, errors }` envelope.
//!
//! ```text
//!         ┌────────────────────┐
//!         │   Transport trait  │
//!         └────────┬───────────┘
//!                  │
//!        ┌─────────┴──────────┐
//!        ▼                    ▼
//!  HttpTransport     ScriptedTransport
//!  (Admin API)       (tests, `testing` feature)
//! ```

mod http;

pub use http::HttpTransport;

use std::sync::Arc;

use async_trait::async_trait;
use graphql_client::{QueryBody, Response};
use thiserror::Error;

/// A GraphQL request: operation name, document and JSON variables.
pub type GraphQlRequest = QueryBody<serde_json::Value>;

/// A GraphQL response envelope with untyped `data`.
pub type GraphQlResponse = Response<serde_json::Value>;

/// Errors raised by a transport before a GraphQL envelope is available.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Any other failure from a custom transport.
    #[error("transport error: {0}")]
    Other(String),
}

/// Performs a single GraphQL request/response exchange.
///
/// Implementations must not retry, cache or otherwise reinterpret the
/// exchange; the gateways decide what the envelope means.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the parsed response envelope.
    async fn send(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        (**self).send(request).await
    }
}
