//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `SHOPIFY_DEFAULT_LOCATION_ID` - Location that variant inventory
//!   quantities are recorded against (default: `gid://shopify/Location/1`)
//! - `SHOPIFY_PUBLICATION_IDS` - Comma-separated publication IDs that
//!   collections are published to

use catalog_core::{LocationId, PublicationId};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_API_VERSION: &str = "2026-01";
const DEFAULT_LOCATION_ID: &str = "gid://shopify/Location/1";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Complete configuration for talking to one store.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Admin API connection settings.
    pub shopify: ShopifyAdminConfig,
    /// Settings the gateways apply to outgoing requests.
    pub gateway: GatewayConfig,
}

/// Shopify Admin API connection settings.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyAdminConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Admin API access token (HIGH PRIVILEGE - full store access)
    pub access_token: SecretString,
}

impl std::fmt::Debug for ShopifyAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyAdminConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl ShopifyAdminConfig {
    /// The Admin API GraphQL endpoint for this store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the store domain does not form
    /// a valid URL.
    pub fn graphql_endpoint(&self) -> Result<Url, ConfigError> {
        let raw = format!(
            "https://{}/admin/api/{}/graphql.json",
            self.store, self.api_version
        );
        Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPIFY_STORE".to_string(), e.to_string()))
    }
}

/// Deployment-specific values the gateways put into requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Location that variant inventory quantities are set at.
    pub default_location_id: LocationId,
    /// Publications that collections are published to.
    pub publication_ids: Vec<PublicationId>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_location_id: LocationId::new(DEFAULT_LOCATION_ID),
            publication_ids: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store = get("SHOPIFY_STORE")
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPIFY_STORE".to_string()))?;
        let access_token = get("SHOPIFY_ADMIN_ACCESS_TOKEN")
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPIFY_ADMIN_ACCESS_TOKEN".to_string()))?;
        validate_access_token(&access_token, "SHOPIFY_ADMIN_ACCESS_TOKEN")?;

        let shopify = ShopifyAdminConfig {
            store,
            api_version: get("SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            access_token,
        };
        // Fail at load time rather than on the first request
        shopify.graphql_endpoint()?;

        let gateway = GatewayConfig {
            default_location_id: get("SHOPIFY_DEFAULT_LOCATION_ID")
                .map_or_else(|| LocationId::new(DEFAULT_LOCATION_ID), LocationId::from),
            publication_ids: get("SHOPIFY_PUBLICATION_IDS")
                .map(|raw| parse_id_list(&raw))
                .unwrap_or_default(),
        };

        Ok(Self { shopify, gateway })
    }
}

/// Split a comma-separated ID list, dropping blanks.
fn parse_id_list(raw: &str) -> Vec<PublicationId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PublicationId::from)
        .collect()
}

/// Reject tokens that are obviously copied from a template.
fn validate_access_token(token: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.expose_secret().to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("looks like a placeholder (contains '{pattern}')"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_source_minimal() {
        let config = CatalogConfig::from_source(source(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_ADMIN_ACCESS_TOKEN", "shpat_0a1b2c3d4e5f"),
        ]))
        .expect("config");

        assert_eq!(config.shopify.api_version, "2026-01");
        assert_eq!(
            config.gateway.default_location_id.as_str(),
            "gid://shopify/Location/1"
        );
        assert!(config.gateway.publication_ids.is_empty());
    }

    #[test]
    fn test_from_source_overrides() {
        let config = CatalogConfig::from_source(source(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_ADMIN_ACCESS_TOKEN", "shpat_0a1b2c3d4e5f"),
            ("SHOPIFY_API_VERSION", "2025-10"),
            ("SHOPIFY_DEFAULT_LOCATION_ID", "gid://shopify/Location/77"),
            (
                "SHOPIFY_PUBLICATION_IDS",
                "gid://shopify/Publication/1, ,gid://shopify/Publication/2",
            ),
        ]))
        .expect("config");

        assert_eq!(config.shopify.api_version, "2025-10");
        assert_eq!(
            config.gateway.default_location_id.as_str(),
            "gid://shopify/Location/77"
        );
        assert_eq!(
            config.gateway.publication_ids,
            vec![
                PublicationId::new("gid://shopify/Publication/1"),
                PublicationId::new("gid://shopify/Publication/2"),
            ]
        );
    }

    #[test]
    fn test_missing_store() {
        let result = CatalogConfig::from_source(source(&[(
            "SHOPIFY_ADMIN_ACCESS_TOKEN",
            "shpat_0a1b2c3d4e5f",
        )]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_STORE"));
    }

    #[test]
    fn test_blank_token_is_missing() {
        let result = CatalogConfig::from_source(source(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_ADMIN_ACCESS_TOKEN", "   "),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_placeholder_token_rejected() {
        let result = CatalogConfig::from_source(source(&[
            ("SHOPIFY_STORE", "test.myshopify.com"),
            ("SHOPIFY_ADMIN_ACCESS_TOKEN", "your-admin-token-here"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_shopify_admin_config_debug_redacts_secrets() {
        let config = ShopifyAdminConfig {
            store: "test.myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            access_token: SecretString::from("shpat_super_secret_token"),
        };

        let debug_output = format!("{config:?}");

        // Public fields should be visible
        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("2026-01"));

        // Secret fields should be redacted
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret_token"));
    }
}
