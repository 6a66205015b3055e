//! Collection management operations for the Admin API.

use std::sync::Arc;

use catalog_core::{
    Collection, CollectionId, CollectionListParams, CreateCollectionInput, ProductId,
    UpdateCollectionInput,
};
use tracing::{debug, instrument};

use super::conversions::{convert_collection, convert_collection_connection};
use super::queries::{
    CollectionInput, ImageInput, MembershipVariables, PublicationInput, PublishVariables,
    collection_add_products, collection_create, collection_delete, collection_remove_products,
    collection_update, get_collection, get_collections, publishable_publish,
    publishable_unpublish,
};
use super::{ensure_no_user_errors, execute, non_empty_query};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::transport::Transport;

/// Collection gateway: one Admin API request per call, no validation.
#[derive(Debug, Clone)]
pub struct CollectionGateway<T> {
    transport: T,
    config: Arc<GatewayConfig>,
}

fn image_input(url: Option<&str>) -> Option<ImageInput> {
    url.map(|src| ImageInput {
        src: src.to_string(),
    })
}

fn membership(collection_id: &CollectionId, product_ids: &[ProductId]) -> MembershipVariables {
    MembershipVariables {
        id: collection_id.to_string(),
        product_ids: product_ids.iter().map(ToString::to_string).collect(),
    }
}

impl<T: Transport> CollectionGateway<T> {
    #[must_use]
    pub const fn new(transport: T, config: Arc<GatewayConfig>) -> Self {
        Self { transport, config }
    }

    /// Create a collection.
    ///
    /// `published` is not part of the create mutation; see
    /// [`set_published`](Self::set_published).
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the API returns user errors
    /// - `OperationFailed` if no collection comes back
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: &CreateCollectionInput) -> Result<Collection, GatewayError> {
        let variables = collection_create::Variables {
            input: CollectionInput {
                id: None,
                title: Some(input.title.clone()),
                description_html: input.description.clone(),
                image: image_input(input.image.as_deref()),
            },
        };

        let response: collection_create::ResponseData =
            execute(&self.transport, collection_create::OPERATION, &variables).await?;

        let payload = response.collection_create.ok_or_else(|| {
            GatewayError::OperationFailed("no payload returned from collection create".to_string())
        })?;
        ensure_no_user_errors(&payload.user_errors)?;

        let collection = payload.collection.map(convert_collection).ok_or_else(|| {
            GatewayError::OperationFailed("no collection returned from create".to_string())
        })?;

        debug!(collection_id = %collection.id, "collection created");
        Ok(collection)
    }

    /// Update a collection. Only supplied fields are sent.
    ///
    /// # Errors
    ///
    /// Same contract as [`create`](Self::create).
    #[instrument(skip(self, input), fields(collection_id = %input.id))]
    pub async fn update(&self, input: &UpdateCollectionInput) -> Result<Collection, GatewayError> {
        let variables = collection_update::Variables {
            input: CollectionInput {
                id: Some(input.id.to_string()),
                title: input.title.clone(),
                description_html: input.description.clone(),
                image: image_input(input.image.as_deref()),
            },
        };

        let response: collection_update::ResponseData =
            execute(&self.transport, collection_update::OPERATION, &variables).await?;

        let payload = response.collection_update.ok_or_else(|| {
            GatewayError::OperationFailed("no payload returned from collection update".to_string())
        })?;
        ensure_no_user_errors(&payload.user_errors)?;

        payload.collection.map(convert_collection).ok_or_else(|| {
            GatewayError::OperationFailed("no collection returned from update".to_string())
        })
    }

    /// Get a collection by ID, including its product count.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn find_by_id(&self, id: &CollectionId) -> Result<Option<Collection>, GatewayError> {
        let variables = get_collection::Variables { id: id.to_string() };

        let response: get_collection::ResponseData =
            execute(&self.transport, get_collection::OPERATION, &variables).await?;

        Ok(response.collection.map(convert_collection))
    }

    /// List one page of collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, params), fields(first = params.first, query = %params.query))]
    pub async fn find_all(
        &self,
        params: &CollectionListParams,
    ) -> Result<Vec<Collection>, GatewayError> {
        let variables = get_collections::Variables {
            first: params.first,
            after: params.after.clone(),
            query: non_empty_query(&params.query),
            sort_key: params.sort_key,
            reverse: params.reverse,
        };

        let response: get_collections::ResponseData =
            execute(&self.transport, get_collections::OPERATION, &variables).await?;

        let collections = convert_collection_connection(response.collections);
        debug!(count = collections.len(), "collections listed");
        Ok(collections)
    }

    /// Delete a collection. Returns whether the API confirmed the deletion.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn delete(&self, id: &CollectionId) -> Result<bool, GatewayError> {
        let variables = collection_delete::Variables {
            input: collection_delete::CollectionDeleteInput { id: id.to_string() },
        };

        let response: collection_delete::ResponseData =
            execute(&self.transport, collection_delete::OPERATION, &variables).await?;

        let Some(payload) = response.collection_delete else {
            return Ok(false);
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(payload.deleted_collection_id.is_some())
    }

    /// Add products to a collection.
    ///
    /// Returns `false` if the API returned no payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(
        skip(self, product_ids),
        fields(collection_id = %collection_id, count = product_ids.len())
    )]
    pub async fn add_products(
        &self,
        collection_id: &CollectionId,
        product_ids: &[ProductId],
    ) -> Result<bool, GatewayError> {
        let variables = membership(collection_id, product_ids);

        let response: collection_add_products::ResponseData = execute(
            &self.transport,
            collection_add_products::OPERATION,
            &variables,
        )
        .await?;

        let Some(payload) = response.collection_add_products else {
            return Ok(false);
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(true)
    }

    /// Remove products from a collection.
    ///
    /// Returns `false` if the API returned no payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(
        skip(self, product_ids),
        fields(collection_id = %collection_id, count = product_ids.len())
    )]
    pub async fn remove_products(
        &self,
        collection_id: &CollectionId,
        product_ids: &[ProductId],
    ) -> Result<bool, GatewayError> {
        let variables = membership(collection_id, product_ids);

        let response: collection_remove_products::ResponseData = execute(
            &self.transport,
            collection_remove_products::OPERATION,
            &variables,
        )
        .await?;

        let Some(payload) = response.collection_remove_products else {
            return Ok(false);
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(true)
    }

    /// Publish to, or unpublish from, every configured publication.
    ///
    /// Does nothing and returns `false` when no publications are configured.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn set_published(
        &self,
        id: &CollectionId,
        published: bool,
    ) -> Result<bool, GatewayError> {
        if self.config.publication_ids.is_empty() {
            debug!("no publications configured, skipping publish");
            return Ok(false);
        }

        let variables = PublishVariables {
            id: id.to_string(),
            input: self
                .config
                .publication_ids
                .iter()
                .map(|p| PublicationInput {
                    publication_id: p.to_string(),
                })
                .collect(),
        };

        let payload = if published {
            let response: publishable_publish::ResponseData =
                execute(&self.transport, publishable_publish::OPERATION, &variables).await?;
            response.publishable_publish
        } else {
            let response: publishable_unpublish::ResponseData =
                execute(&self.transport, publishable_unpublish::OPERATION, &variables).await?;
            response.publishable_unpublish
        };

        let Some(payload) = payload else {
            return Ok(false);
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(true)
    }
}
