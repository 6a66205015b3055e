//! Unified error handling for gateways and services.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by catalog gateways and services.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required field or list was absent or blank. Raised before any
    /// request is sent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The remote system reported errors, either as mutation user errors or
    /// as the response's top-level `errors` list.
    ///
    /// Carries the error messages joined with `", "` in the order received.
    #[error("{0}")]
    ValidationFailed(String),

    /// The remote system reported success but left out the expected entity.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// The transport failed before a response envelope was available.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request variables or response data did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::MissingField("title");
        assert_eq!(err.to_string(), "Missing required field: title");

        let err =
            GatewayError::ValidationFailed("Title can't be blank, Handle is taken".to_string());
        assert_eq!(err.to_string(), "Title can't be blank, Handle is taken");

        let err = GatewayError::OperationFailed("no product returned from create".to_string());
        assert_eq!(
            err.to_string(),
            "Operation failed: no product returned from create"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let err: GatewayError = TransportError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Transport error: unexpected status 502: bad gateway"
        );
    }
}
