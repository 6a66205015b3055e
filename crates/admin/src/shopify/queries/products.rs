//! Product and variant operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::Connection;

/// Variant fields as selected by the product documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantNode {
    pub id: String,
    pub price: Decimal,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

/// Product fields as selected by the product documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variants: Option<Connection<ProductVariantNode>>,
}

/// Payload of `productCreate` / `productUpdate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMutationPayload {
    #[serde(default)]
    pub product: Option<ProductNode>,
    #[serde(default)]
    pub user_errors: Vec<super::UserError>,
}

// =============================================================================
// createProduct
// =============================================================================

pub mod product_create {
    use catalog_core::ProductStatus;
    use serde::{Deserialize, Serialize};

    use super::ProductMutationPayload;
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "createProduct",
        document: r"
            mutation createProduct($product: ProductCreateInput!) {
                productCreate(product: $product) {
                    product {
                        id
                        title
                        handle
                        status
                        description
                        variants(first: 10) {
                            edges {
                                node {
                                    id
                                    price
                                    barcode
                                    createdAt
                                    title
                                    sku
                                    inventoryQuantity
                                }
                            }
                        }
                    }
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub product: ProductCreateInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductCreateInput {
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description_html: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vendor: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub product_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tags: Option<Vec<String>>,
        pub status: ProductStatus,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub product_create: Option<ProductMutationPayload>,
    }
}

// =============================================================================
// updateProduct
// =============================================================================

pub mod product_update {
    use catalog_core::ProductStatus;
    use serde::{Deserialize, Serialize};

    use super::ProductMutationPayload;
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "updateProduct",
        document: r"
            mutation updateProduct($product: ProductUpdateInput!) {
                productUpdate(product: $product) {
                    product {
                        id
                        title
                        handle
                        status
                        description
                        variants(first: 10) {
                            edges {
                                node {
                                    id
                                    price
                                    barcode
                                    createdAt
                                    title
                                    sku
                                    inventoryQuantity
                                }
                            }
                        }
                    }
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub product: ProductUpdateInput,
    }

    /// Only supplied fields are serialized.
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductUpdateInput {
        pub id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description_html: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vendor: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub product_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tags: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<ProductStatus>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub product_update: Option<ProductMutationPayload>,
    }
}

// =============================================================================
// getProduct
// =============================================================================

pub mod get_product {
    use serde::{Deserialize, Serialize};

    use super::ProductNode;
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "getProduct",
        document: r"
            query getProduct($id: ID!) {
                product(id: $id) {
                    id
                    title
                    handle
                    status
                    description
                    variants(first: 10) {
                        edges {
                            node {
                                id
                                price
                                barcode
                                createdAt
                                title
                                sku
                                inventoryQuantity
                            }
                        }
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub product: Option<ProductNode>,
    }
}

// =============================================================================
// getProducts
// =============================================================================

pub mod get_products {
    use catalog_core::ProductSortKey;
    use serde::{Deserialize, Serialize};

    use super::ProductNode;
    use crate::shopify::queries::{Connection, Operation};

    pub const OPERATION: Operation = Operation {
        name: "getProducts",
        document: r"
            query getProducts(
                $first: Int!
                $after: String
                $query: String
                $sortKey: ProductSortKeys
                $reverse: Boolean
            ) {
                products(
                    first: $first
                    after: $after
                    query: $query
                    sortKey: $sortKey
                    reverse: $reverse
                ) {
                    edges {
                        node {
                            id
                            title
                            handle
                            status
                            description
                            variants(first: 1) {
                                edges {
                                    node {
                                        id
                                        price
                                    }
                                }
                            }
                        }
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub query: Option<String>,
        pub sort_key: ProductSortKey,
        pub reverse: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub products: Option<Connection<ProductNode>>,
    }
}

// =============================================================================
// deleteProduct
// =============================================================================

pub mod product_delete {
    use serde::{Deserialize, Serialize};

    use crate::shopify::queries::{Operation, UserError};

    pub const OPERATION: Operation = Operation {
        name: "deleteProduct",
        document: r"
            mutation deleteProduct($input: ProductDeleteInput!) {
                productDelete(input: $input) {
                    deletedProductId
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: ProductDeleteInput,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct ProductDeleteInput {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductDeletePayload {
        #[serde(default)]
        pub deleted_product_id: Option<String>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub product_delete: Option<ProductDeletePayload>,
    }
}

// =============================================================================
// updateVariants
// =============================================================================

pub mod product_variants_bulk_update {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    use super::ProductVariantNode;
    use crate::shopify::queries::{Operation, UserError};

    pub const OPERATION: Operation = Operation {
        name: "updateVariants",
        document: r"
            mutation updateVariants($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
                productVariantsBulkUpdate(productId: $productId, variants: $variants) {
                    productVariants {
                        id
                        price
                        barcode
                        createdAt
                        sku
                        inventoryQuantity
                    }
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub product_id: String,
        pub variants: Vec<ProductVariantsBulkInput>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductVariantsBulkInput {
        pub id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub price: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub barcode: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub inventory_item: Option<InventoryItemInput>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub inventory_quantities: Option<Vec<InventoryLevelInput>>,
    }

    /// SKU lives on the inventory item, not the variant.
    #[derive(Debug, Clone, Serialize)]
    pub struct InventoryItemInput {
        pub sku: String,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InventoryLevelInput {
        pub available_quantity: i64,
        pub location_id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductVariantsBulkUpdatePayload {
        #[serde(default)]
        pub product_variants: Option<Vec<ProductVariantNode>>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub product_variants_bulk_update: Option<ProductVariantsBulkUpdatePayload>,
    }
}
