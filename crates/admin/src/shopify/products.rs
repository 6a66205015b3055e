//! Product and variant operations for the Admin API.

use std::sync::Arc;

use catalog_core::{
    CreateProductInput, Product, ProductId, ProductListParams, ProductVariant, UpdateProductInput,
    UpdateVariantInput,
};
use tracing::{debug, instrument};

use super::conversions::{convert_product, convert_product_connection, convert_variant};
use super::queries::{
    get_product, get_products, product_create, product_delete, product_update,
    product_variants_bulk_update,
};
use super::{ensure_no_user_errors, execute, non_empty_query};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::transport::Transport;

/// Product gateway: one Admin API request per call, no validation.
///
/// Cheap to clone when `T` is; wrap a shared transport in `Arc`.
#[derive(Debug, Clone)]
pub struct ProductGateway<T> {
    transport: T,
    config: Arc<GatewayConfig>,
}

impl<T: Transport> ProductGateway<T> {
    #[must_use]
    pub const fn new(transport: T, config: Arc<GatewayConfig>) -> Self {
        Self { transport, config }
    }

    /// Create a product. Status defaults to `ACTIVE`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the API returns user errors
    /// - `OperationFailed` if no product comes back
    /// - transport, GraphQL and parse errors as-is
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: &CreateProductInput) -> Result<Product, GatewayError> {
        let variables = product_create::Variables {
            product: product_create::ProductCreateInput {
                title: input.title.clone(),
                description_html: input.description.clone(),
                vendor: input.vendor.clone(),
                product_type: input.product_type.clone(),
                tags: input.tags.clone(),
                status: input.status.unwrap_or_default(),
            },
        };

        let response: product_create::ResponseData =
            execute(&self.transport, product_create::OPERATION, &variables).await?;

        let payload = response.product_create.ok_or_else(|| {
            GatewayError::OperationFailed("no payload returned from product create".to_string())
        })?;
        ensure_no_user_errors(&payload.user_errors)?;

        let product = payload.product.map(convert_product).ok_or_else(|| {
            GatewayError::OperationFailed("no product returned from create".to_string())
        })?;

        debug!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Update a product. Only supplied fields are sent.
    ///
    /// # Errors
    ///
    /// Same contract as [`create`](Self::create).
    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub async fn update(&self, input: &UpdateProductInput) -> Result<Product, GatewayError> {
        let variables = product_update::Variables {
            product: product_update::ProductUpdateInput {
                id: input.id.to_string(),
                title: input.title.clone(),
                description_html: input.description.clone(),
                vendor: input.vendor.clone(),
                product_type: input.product_type.clone(),
                tags: input.tags.clone(),
                status: input.status,
            },
        };

        let response: product_update::ResponseData =
            execute(&self.transport, product_update::OPERATION, &variables).await?;

        let payload = response.product_update.ok_or_else(|| {
            GatewayError::OperationFailed("no payload returned from product update".to_string())
        })?;
        ensure_no_user_errors(&payload.user_errors)?;

        payload.product.map(convert_product).ok_or_else(|| {
            GatewayError::OperationFailed("no product returned from update".to_string())
        })
    }

    /// Get a product by ID, with up to 10 variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, GatewayError> {
        let variables = get_product::Variables { id: id.to_string() };

        let response: get_product::ResponseData =
            execute(&self.transport, get_product::OPERATION, &variables).await?;

        Ok(response.product.map(convert_product))
    }

    /// List one page of products. Each carries at most its first variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, params), fields(first = params.first, query = %params.query))]
    pub async fn find_all(&self, params: &ProductListParams) -> Result<Vec<Product>, GatewayError> {
        let variables = get_products::Variables {
            first: params.first,
            after: params.after.clone(),
            query: non_empty_query(&params.query),
            sort_key: params.sort_key,
            reverse: params.reverse,
        };

        let response: get_products::ResponseData =
            execute(&self.transport, get_products::OPERATION, &variables).await?;

        let products = convert_product_connection(response.products);
        debug!(count = products.len(), "products listed");
        Ok(products)
    }

    /// Delete a product. Returns whether the API confirmed the deletion.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: &ProductId) -> Result<bool, GatewayError> {
        let variables = product_delete::Variables {
            input: product_delete::ProductDeleteInput { id: id.to_string() },
        };

        let response: product_delete::ResponseData =
            execute(&self.transport, product_delete::OPERATION, &variables).await?;

        let Some(payload) = response.product_delete else {
            return Ok(false);
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(payload.deleted_product_id.is_some())
    }

    /// Bulk-update variants of one product.
    ///
    /// An `inventory_quantity` is set at the configured default location.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` on user errors, or if the request fails.
    #[instrument(skip(self, variants), fields(product_id = %product_id, count = variants.len()))]
    pub async fn update_variants(
        &self,
        product_id: &ProductId,
        variants: &[UpdateVariantInput],
    ) -> Result<Vec<ProductVariant>, GatewayError> {
        use product_variants_bulk_update::{
            InventoryItemInput, InventoryLevelInput, ProductVariantsBulkInput, Variables,
        };

        let location_id = self.config.default_location_id.to_string();
        let variables = Variables {
            product_id: product_id.to_string(),
            variants: variants
                .iter()
                .map(|v| ProductVariantsBulkInput {
                    id: v.id.to_string(),
                    price: v.price,
                    barcode: v.barcode.clone(),
                    inventory_item: v.sku.clone().map(|sku| InventoryItemInput { sku }),
                    inventory_quantities: v.inventory_quantity.map(|available_quantity| {
                        vec![InventoryLevelInput {
                            available_quantity,
                            location_id: location_id.clone(),
                        }]
                    }),
                })
                .collect(),
        };

        let response: product_variants_bulk_update::ResponseData = execute(
            &self.transport,
            product_variants_bulk_update::OPERATION,
            &variables,
        )
        .await?;

        let Some(payload) = response.product_variants_bulk_update else {
            return Ok(Vec::new());
        };
        ensure_no_user_errors(&payload.user_errors)?;

        Ok(payload
            .product_variants
            .unwrap_or_default()
            .into_iter()
            .map(convert_variant)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::{LocationId, ProductSortKey, ProductStatus};
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::testing::ScriptedTransport;

    fn gateway() -> ProductGateway<Arc<ScriptedTransport>> {
        ProductGateway::new(
            Arc::new(ScriptedTransport::new()),
            Arc::new(GatewayConfig::default()),
        )
    }

    fn product_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "handle": title.to_lowercase().replace(' ', "-"),
            "status": "ACTIVE",
            "description": null,
            "variants": {
                "edges": [{
                    "node": {
                        "id": "gid://shopify/ProductVariant/11",
                        "price": "0.00",
                        "createdAt": "2024-03-01T12:00:00Z"
                    }
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_create_defaults_status_to_active() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productCreate": {
                "product": product_json("gid://shopify/Product/1", "Red Snowboard"),
                "userErrors": []
            }
        }));

        let product = gateway
            .create(&CreateProductInput::new("Red Snowboard"))
            .await
            .expect("create");
        assert_eq!(product.title, "Red Snowboard");
        assert_eq!(product.handle, "red-snowboard");
        assert_eq!(product.first_variant().map(|v| v.price), Some(Decimal::ZERO));

        let request = gateway.transport.last_request().expect("request");
        assert_eq!(request.operation_name, "createProduct");
        assert_eq!(request.variables["product"]["status"], "ACTIVE");
        assert_eq!(request.variables["product"]["title"], "Red Snowboard");
        assert!(request.variables["product"].get("vendor").is_none());
    }

    #[tokio::test]
    async fn test_create_user_errors_fail_validation() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productCreate": {
                "product": null,
                "userErrors": [
                    { "field": ["title"], "message": "Title is too long" },
                    { "field": ["handle"], "message": "Handle is taken" }
                ]
            }
        }));

        let err = gateway
            .create(&CreateProductInput::new("x"))
            .await
            .expect_err("should fail");
        assert!(matches!(
            err,
            GatewayError::ValidationFailed(ref m) if m == "Title is too long, Handle is taken"
        ));
    }

    #[tokio::test]
    async fn test_create_without_product_is_operation_failed() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productCreate": { "product": null, "userErrors": [] }
        }));

        let err = gateway
            .create(&CreateProductInput::new("x"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, GatewayError::OperationFailed(_)));
    }

    #[tokio::test]
    async fn test_update_sends_only_supplied_fields() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productUpdate": {
                "product": product_json("gid://shopify/Product/1", "Blue Snowboard"),
                "userErrors": []
            }
        }));

        let mut input = UpdateProductInput::new("gid://shopify/Product/1");
        input.title = Some("Blue Snowboard".to_string());
        input.status = Some(ProductStatus::Archived);
        gateway.update(&input).await.expect("update");

        let request = gateway.transport.last_request().expect("request");
        assert_eq!(
            request.variables,
            json!({
                "product": {
                    "id": "gid://shopify/Product/1",
                    "title": "Blue Snowboard",
                    "status": "ARCHIVED"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_find_by_id_null_is_none() {
        let gateway = gateway();
        gateway.transport.push_data(json!({ "product": null }));

        let found = gateway
            .find_by_id(&ProductId::new("gid://shopify/Product/404"))
            .await
            .expect("find");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_omits_empty_query() {
        let gateway = gateway();
        gateway
            .transport
            .push_data(json!({ "products": { "edges": [] } }));

        let products = gateway
            .find_all(&ProductListParams::default())
            .await
            .expect("list");
        assert!(products.is_empty());

        let request = gateway.transport.last_request().expect("request");
        assert_eq!(
            request.variables,
            json!({ "first": 25, "sortKey": "CREATED_AT", "reverse": false })
        );
    }

    #[tokio::test]
    async fn test_find_all_passes_filters() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "products": {
                "edges": [
                    { "node": product_json("gid://shopify/Product/1", "A") },
                    { "node": product_json("gid://shopify/Product/2", "B") }
                ]
            }
        }));

        let params = ProductListParams {
            first: 2,
            after: Some("cursor-1".to_string()),
            query: "title:snow*".to_string(),
            sort_key: ProductSortKey::Title,
            reverse: true,
        };
        let products = gateway.find_all(&params).await.expect("list");
        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let request = gateway.transport.last_request().expect("request");
        assert_eq!(request.variables["query"], "title:snow*");
        assert_eq!(request.variables["sortKey"], "TITLE");
        assert_eq!(request.variables["after"], "cursor-1");
        assert_eq!(request.variables["reverse"], true);
    }

    #[tokio::test]
    async fn test_delete_reports_confirmation() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productDelete": { "deletedProductId": "gid://shopify/Product/1", "userErrors": [] }
        }));
        gateway.transport.push_data(json!({
            "productDelete": { "deletedProductId": null, "userErrors": [] }
        }));

        let id = ProductId::new("gid://shopify/Product/1");
        assert!(gateway.delete(&id).await.expect("delete"));
        assert!(!gateway.delete(&id).await.expect("delete"));
        let first = gateway.transport.requests().into_iter().next().expect("request");
        assert_eq!(
            first.variables,
            json!({ "input": { "id": "gid://shopify/Product/1" } })
        );
    }

    #[tokio::test]
    async fn test_update_variants_uses_configured_location() {
        let config = GatewayConfig {
            default_location_id: LocationId::new("gid://shopify/Location/77"),
            publication_ids: Vec::new(),
        };
        let gateway = ProductGateway::new(Arc::new(ScriptedTransport::new()), Arc::new(config));
        gateway.transport.push_data(json!({
            "productVariantsBulkUpdate": {
                "productVariants": [{
                    "id": "gid://shopify/ProductVariant/11",
                    "price": "100.00",
                    "sku": "SB-RED",
                    "inventoryQuantity": 0
                }],
                "userErrors": []
            }
        }));

        let mut variant = UpdateVariantInput::new("gid://shopify/ProductVariant/11");
        variant.price = Some(Decimal::new(10000, 2));
        variant.sku = Some("SB-RED".to_string());
        variant.inventory_quantity = Some(0);

        let updated = gateway
            .update_variants(&ProductId::new("gid://shopify/Product/1"), &[variant])
            .await
            .expect("update variants");
        let [variant] = updated.as_slice() else {
            panic!("expected one variant, got {updated:?}");
        };
        assert_eq!(variant.price, Decimal::new(10000, 2));
        assert_eq!(variant.inventory_quantity, Some(0));

        let request = gateway.transport.last_request().expect("request");
        assert_eq!(
            request.variables,
            json!({
                "productId": "gid://shopify/Product/1",
                "variants": [{
                    "id": "gid://shopify/ProductVariant/11",
                    "price": "100.00",
                    "inventoryItem": { "sku": "SB-RED" },
                    "inventoryQuantities": [{
                        "availableQuantity": 0,
                        "locationId": "gid://shopify/Location/77"
                    }]
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_update_variants_absent_list_is_empty() {
        let gateway = gateway();
        gateway.transport.push_data(json!({
            "productVariantsBulkUpdate": { "productVariants": null, "userErrors": [] }
        }));

        let updated = gateway
            .update_variants(
                &ProductId::new("gid://shopify/Product/1"),
                &[UpdateVariantInput::new("gid://shopify/ProductVariant/11")],
            )
            .await
            .expect("update variants");
        assert!(updated.is_empty());
    }
}
