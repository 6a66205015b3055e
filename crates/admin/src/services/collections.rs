//! Collection service.

use catalog_core::{
    Collection, CollectionId, CollectionListParams, CreateCollectionInput, ProductId,
    UpdateCollectionInput,
};
use tracing::{debug, instrument, warn};

use super::validation;
use crate::error::GatewayError;
use crate::shopify::CollectionGateway;
use crate::transport::Transport;

/// Validates collection inputs, then delegates to a [`CollectionGateway`].
///
/// Create and update follow the mutation with a publish/unpublish call when
/// `published` is set; the gateway skips it if no publications are configured.
#[derive(Debug, Clone)]
pub struct CollectionService<T> {
    gateway: CollectionGateway<T>,
}

impl<T: Transport> CollectionService<T> {
    #[must_use]
    pub const fn new(gateway: CollectionGateway<T>) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub const fn gateway(&self) -> &CollectionGateway<T> {
        &self.gateway
    }

    /// Create a collection, published unless `published` is `Some(false)`.
    ///
    /// # Errors
    ///
    /// `MissingField("title")` for a blank title, otherwise gateway errors.
    /// A failed publication change is returned as-is; the collection already
    /// exists at that point and its ID is logged.
    #[instrument(skip(self, input))]
    pub async fn create_collection(
        &self,
        input: &CreateCollectionInput,
    ) -> Result<Collection, GatewayError> {
        validation::validate_create_collection(input)?;

        let collection = self.gateway.create(input).await?;
        let published = input.published.unwrap_or(true);
        if let Err(err) = self.gateway.set_published(&collection.id, published).await {
            warn!(
                collection_id = %collection.id,
                published,
                error = %err,
                "collection created but publication change failed"
            );
            return Err(err);
        }

        Ok(collection)
    }

    /// Update a collection.
    ///
    /// # Errors
    ///
    /// `MissingField("id")` or `MissingField("title")`, otherwise gateway
    /// errors.
    #[instrument(skip(self, input), fields(collection_id = %input.id))]
    pub async fn update_collection(
        &self,
        input: &UpdateCollectionInput,
    ) -> Result<Collection, GatewayError> {
        validation::validate_update_collection(input)?;

        let collection = self.gateway.update(input).await?;
        if let Some(published) = input.published {
            if let Err(err) = self.gateway.set_published(&collection.id, published).await {
                warn!(
                    collection_id = %collection.id,
                    published,
                    error = %err,
                    "collection updated but publication change failed"
                );
                return Err(err);
            }
        }

        Ok(collection)
    }

    /// # Errors
    ///
    /// `MissingField("id")` for an empty ID, otherwise gateway errors.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn get_collection(
        &self,
        id: &CollectionId,
    ) -> Result<Option<Collection>, GatewayError> {
        validation::require_id(id.as_str())?;
        self.gateway.find_by_id(id).await
    }

    /// # Errors
    ///
    /// Returns gateway errors.
    #[instrument(skip(self, params))]
    pub async fn list_collections(
        &self,
        params: &CollectionListParams,
    ) -> Result<Vec<Collection>, GatewayError> {
        self.gateway.find_all(params).await
    }

    /// # Errors
    ///
    /// `MissingField("id")` for an empty ID, otherwise gateway errors.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn delete_collection(&self, id: &CollectionId) -> Result<bool, GatewayError> {
        validation::require_id(id.as_str())?;
        self.gateway.delete(id).await
    }

    /// # Errors
    ///
    /// `MissingField("collectionId")` or `MissingField("productIds")`,
    /// otherwise gateway errors.
    #[instrument(skip(self, product_ids), fields(collection_id = %collection_id))]
    pub async fn add_products_to_collection(
        &self,
        collection_id: &CollectionId,
        product_ids: &[ProductId],
    ) -> Result<bool, GatewayError> {
        validation::validate_membership(collection_id, product_ids)?;
        let added = self.gateway.add_products(collection_id, product_ids).await?;
        debug!(added, count = product_ids.len(), "collection membership updated");
        Ok(added)
    }

    /// # Errors
    ///
    /// `MissingField("collectionId")` or `MissingField("productIds")`,
    /// otherwise gateway errors.
    #[instrument(skip(self, product_ids), fields(collection_id = %collection_id))]
    pub async fn remove_products_from_collection(
        &self,
        collection_id: &CollectionId,
        product_ids: &[ProductId],
    ) -> Result<bool, GatewayError> {
        validation::validate_membership(collection_id, product_ids)?;
        self.gateway.remove_products(collection_id, product_ids).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_core::PublicationId;
    use serde_json::json;

    use super::*;
    use crate::config::GatewayConfig;
    use crate::testing::ScriptedTransport;

    fn service_with(
        config: GatewayConfig,
    ) -> (Arc<ScriptedTransport>, CollectionService<Arc<ScriptedTransport>>) {
        let transport = Arc::new(ScriptedTransport::new());
        let gateway = CollectionGateway::new(Arc::clone(&transport), Arc::new(config));
        (transport, CollectionService::new(gateway))
    }

    fn created(id: &str) -> serde_json::Value {
        json!({
            "collectionCreate": {
                "collection": { "id": id, "title": "Winter", "handle": "winter" },
                "userErrors": []
            }
        })
    }

    #[tokio::test]
    async fn test_membership_validation_skips_transport() {
        let (transport, service) = service_with(GatewayConfig::default());
        let collection = CollectionId::new("gid://shopify/Collection/1");

        let err = service
            .add_products_to_collection(&collection, &[])
            .await
            .expect_err("should fail");
        assert!(matches!(err, GatewayError::MissingField("productIds")));

        let err = service
            .remove_products_from_collection(
                &CollectionId::default(),
                &[ProductId::new("gid://shopify/Product/1")],
            )
            .await
            .expect_err("should fail");
        assert!(matches!(err, GatewayError::MissingField("collectionId")));

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_without_publications_sends_one_request() {
        let (transport, service) = service_with(GatewayConfig::default());
        transport.push_data(created("gid://shopify/Collection/1"));

        let collection = service
            .create_collection(&CreateCollectionInput::new("Winter"))
            .await
            .expect("create");
        assert_eq!(collection.id.as_str(), "gid://shopify/Collection/1");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_create_publishes_by_default() {
        let (transport, service) = service_with(GatewayConfig {
            publication_ids: vec![PublicationId::new("gid://shopify/Publication/1")],
            ..GatewayConfig::default()
        });
        transport.push_data(created("gid://shopify/Collection/1"));
        transport.push_data(json!({ "publishablePublish": { "userErrors": [] } }));

        service
            .create_collection(&CreateCollectionInput::new("Winter"))
            .await
            .expect("create");

        let operations: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| r.operation_name)
            .collect();
        assert_eq!(operations, vec!["createCollection", "publishCollection"]);
    }

    #[tokio::test]
    async fn test_create_surfaces_failed_publication_after_create() {
        let (transport, service) = service_with(GatewayConfig {
            publication_ids: vec![PublicationId::new("gid://shopify/Publication/1")],
            ..GatewayConfig::default()
        });
        transport.push_data(created("gid://shopify/Collection/7"));
        transport.push_data(json!({
            "publishablePublish": {
                "userErrors": [{ "field": ["id"], "message": "Publication is not available" }]
            }
        }));

        let err = service
            .create_collection(&CreateCollectionInput::new("Winter"))
            .await
            .expect_err("publication should fail");
        assert!(matches!(
            err,
            GatewayError::ValidationFailed(ref m) if m == "Publication is not available"
        ));

        let requests = transport.requests();
        let [create, publish] = requests.as_slice() else {
            panic!("expected two requests, got {requests:?}");
        };
        assert_eq!(create.operation_name, "createCollection");
        assert_eq!(publish.operation_name, "publishCollection");
        assert_eq!(publish.variables["id"], "gid://shopify/Collection/7");
    }

    #[tokio::test]
    async fn test_update_without_published_skips_publication() {
        let (transport, service) = service_with(GatewayConfig {
            publication_ids: vec![PublicationId::new("gid://shopify/Publication/1")],
            ..GatewayConfig::default()
        });
        transport.push_data(json!({
            "collectionUpdate": {
                "collection": {
                    "id": "gid://shopify/Collection/1",
                    "title": "Spring",
                    "handle": "winter"
                },
                "userErrors": []
            }
        }));

        let mut input = UpdateCollectionInput::new("gid://shopify/Collection/1");
        input.title = Some("Spring".to_string());
        let collection = service.update_collection(&input).await.expect("update");
        assert_eq!(collection.title, "Spring");
        assert_eq!(transport.call_count(), 1);
    }
}
