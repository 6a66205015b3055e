//! HTTP transport for the Shopify Admin GraphQL endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use url::Url;

use super::{GraphQlRequest, GraphQlResponse, Transport, TransportError};
use crate::config::{ConfigError, ShopifyAdminConfig};

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Sends GraphQL requests to the Admin API over HTTPS.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Security
///
/// Holds a HIGH PRIVILEGE Admin API token. `Debug` output redacts it.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<HttpTransportInner>,
}

struct HttpTransportInner {
    client: reqwest::Client,
    endpoint: Url,
    access_token: SecretString,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport for the configured store and API version.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the store domain does not form
    /// a valid endpoint URL.
    pub fn new(config: &ShopifyAdminConfig) -> Result<Self, ConfigError> {
        let endpoint = config.graphql_endpoint()?;

        Ok(Self {
            inner: Arc::new(HttpTransportInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.access_token.clone(),
            }),
        })
    }

    /// The GraphQL endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(operation = request.operation_name))]
    async fn send(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "GraphQL response received");

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(store: &str) -> ShopifyAdminConfig {
        ShopifyAdminConfig {
            store: store.to_string(),
            api_version: "2026-01".to_string(),
            access_token: SecretString::from("shpat_super_secret_token"),
        }
    }

    #[test]
    fn test_endpoint_from_config() {
        let transport = HttpTransport::new(&config("test.myshopify.com")).expect("transport");
        assert_eq!(
            transport.endpoint().as_str(),
            "https://test.myshopify.com/admin/api/2026-01/graphql.json"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let transport = HttpTransport::new(&config("test.myshopify.com")).expect("transport");
        let debug_output = format!("{transport:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret_token"));
    }

    #[test]
    fn test_invalid_store_is_rejected() {
        assert!(HttpTransport::new(&config("not a host")).is_err());
    }
}
