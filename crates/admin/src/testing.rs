//! Test doubles for the transport seam.
//!
//! Available to this crate's unit tests and, with the `testing` feature, to
//! downstream test crates.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{GraphQlRequest, GraphQlResponse, Transport, TransportError};

/// A request as seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation_name: String,
    pub query: String,
    pub variables: Value,
}

/// Replays queued response envelopes in order and records every request.
///
/// Each queued value is a whole envelope (`{"data": ..., "errors": ...}`).
/// Sending with an empty queue fails with `TransportError::Other`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport preloaded with envelopes.
    #[must_use]
    pub fn with_responses(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a whole response envelope.
    pub fn push_response(&self, envelope: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(envelope);
    }

    /// Queue a successful response carrying `data`.
    pub fn push_data(&self, data: Value) {
        self.push_response(serde_json::json!({ "data": data }));
    }

    /// Every request sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                operation_name: request.operation_name.to_string(),
                query: request.query.to_string(),
                variables: request.variables,
            });

        let envelope = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| TransportError::Other("no scripted response left".to_string()))?;

        serde_json::from_value(envelope)
            .map_err(|e| TransportError::Other(format!("invalid scripted envelope: {e}")))
    }
}
