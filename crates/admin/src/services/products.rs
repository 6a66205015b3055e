//! Product service.

use catalog_core::{
    CreateProductInput, Product, ProductId, ProductListParams, ProductVariant, UpdateProductInput,
    UpdateVariantInput,
};
use tracing::instrument;

use super::validation;
use crate::error::GatewayError;
use crate::shopify::ProductGateway;
use crate::transport::Transport;

/// Validates product inputs, then delegates to a [`ProductGateway`].
#[derive(Debug, Clone)]
pub struct ProductService<T> {
    gateway: ProductGateway<T>,
}

impl<T: Transport> ProductService<T> {
    #[must_use]
    pub const fn new(gateway: ProductGateway<T>) -> Self {
        Self { gateway }
    }

    /// The underlying gateway, for calls that need no validation.
    #[must_use]
    pub const fn gateway(&self) -> &ProductGateway<T> {
        &self.gateway
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// `MissingField("title")` for a blank title, otherwise gateway errors.
    #[instrument(skip(self, input))]
    pub async fn create_product(
        &self,
        input: &CreateProductInput,
    ) -> Result<Product, GatewayError> {
        validation::validate_create_product(input)?;
        self.gateway.create(input).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// `MissingField("id")` or `MissingField("title")`, otherwise gateway
    /// errors.
    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub async fn update_product(
        &self,
        input: &UpdateProductInput,
    ) -> Result<Product, GatewayError> {
        validation::validate_update_product(input)?;
        self.gateway.update(input).await
    }

    /// # Errors
    ///
    /// `MissingField("id")` for an empty ID, otherwise gateway errors.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, GatewayError> {
        validation::require_id(id.as_str())?;
        self.gateway.find_by_id(id).await
    }

    /// # Errors
    ///
    /// Returns gateway errors.
    #[instrument(skip(self, params))]
    pub async fn list_products(
        &self,
        params: &ProductListParams,
    ) -> Result<Vec<Product>, GatewayError> {
        self.gateway.find_all(params).await
    }

    /// # Errors
    ///
    /// `MissingField("id")` for an empty ID, otherwise gateway errors.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<bool, GatewayError> {
        validation::require_id(id.as_str())?;
        self.gateway.delete(id).await
    }

    /// Bulk-update variants of one product.
    ///
    /// # Errors
    ///
    /// `MissingField("productId")`, `MissingField("variants")` or
    /// `MissingField("variants.id")`, otherwise gateway errors.
    #[instrument(skip(self, variants), fields(product_id = %product_id))]
    pub async fn update_variants(
        &self,
        product_id: &ProductId,
        variants: &[UpdateVariantInput],
    ) -> Result<Vec<ProductVariant>, GatewayError> {
        validation::validate_variant_update(product_id, variants)?;
        self.gateway.update_variants(product_id, variants).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::config::GatewayConfig;
    use crate::testing::ScriptedTransport;

    fn service() -> (Arc<ScriptedTransport>, ProductService<Arc<ScriptedTransport>>) {
        let transport = Arc::new(ScriptedTransport::new());
        let gateway =
            ProductGateway::new(Arc::clone(&transport), Arc::new(GatewayConfig::default()));
        (transport, ProductService::new(gateway))
    }

    #[tokio::test]
    async fn test_blank_title_never_reaches_transport() {
        let (transport, service) = service();

        let err = service
            .create_product(&CreateProductInput::new("   "))
            .await
            .expect_err("should fail");
        assert!(matches!(err, GatewayError::MissingField("title")));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_ids_never_reach_transport() {
        let (transport, service) = service();
        let empty = ProductId::default();

        assert!(matches!(
            service.get_product(&empty).await,
            Err(GatewayError::MissingField("id"))
        ));
        assert!(matches!(
            service.delete_product(&empty).await,
            Err(GatewayError::MissingField("id"))
        ));
        assert!(matches!(
            service.update_product(&UpdateProductInput::new("")).await,
            Err(GatewayError::MissingField("id"))
        ));
        assert!(matches!(
            service.update_variants(&empty, &[]).await,
            Err(GatewayError::MissingField("productId"))
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_input_is_delegated() {
        let (transport, service) = service();
        transport.push_data(json!({ "product": null }));

        let found = service
            .get_product(&ProductId::new("gid://shopify/Product/1"))
            .await
            .expect("get");
        assert!(found.is_none());
        assert_eq!(transport.call_count(), 1);
    }
}
