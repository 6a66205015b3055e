//! Product and variant domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DEFAULT_PAGE_SIZE;
use super::id::{ProductId, VariantId};
use super::status::{ProductSortKey, ProductStatus};

// =============================================================================
// Product Types
// =============================================================================

/// A product variant.
///
/// Variants are owned by exactly one product and are never created on their
/// own; the remote system creates a default variant with every product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Current price.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Barcode (ISBN, UPC, GTIN, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Variant title (combination of option values).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// SKU code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Inventory quantity across all locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Lifecycle status.
    pub status: ProductStatus,
    /// Plain text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variants in display order, when the query selected them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}

impl Product {
    /// The first variant, if any were returned.
    #[must_use]
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.as_deref().and_then(<[ProductVariant]>::first)
    }
}

// =============================================================================
// Input Types
// =============================================================================

/// Input for creating a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductInput {
    /// Product title (required, must not be blank).
    pub title: String,
    /// Description (HTML).
    pub description: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Product type/category.
    pub product_type: Option<String>,
    /// Product tags.
    pub tags: Option<Vec<String>>,
    /// Initial status (defaults to `Active`).
    pub status: Option<ProductStatus>,
}

impl CreateProductInput {
    /// Create an input with just a title; everything else defaults.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Input for updating a product.
///
/// All fields except `id` are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductInput {
    /// Product to update.
    pub id: ProductId,
    /// New product title.
    pub title: Option<String>,
    /// New description (HTML).
    pub description: Option<String>,
    /// New vendor name.
    pub vendor: Option<String>,
    /// New product type.
    pub product_type: Option<String>,
    /// New tags (replaces existing tags).
    pub tags: Option<Vec<String>>,
    /// New status.
    pub status: Option<ProductStatus>,
}

impl UpdateProductInput {
    /// Create an input that updates nothing yet.
    #[must_use]
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A partial update to one variant of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVariantInput {
    /// Variant to update.
    pub id: VariantId,
    /// New price.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    /// New barcode.
    pub barcode: Option<String>,
    /// New SKU.
    pub sku: Option<String>,
    /// Available quantity at the default location.
    pub inventory_quantity: Option<i64>,
}

impl UpdateVariantInput {
    /// Create an input that updates nothing yet.
    #[must_use]
    pub fn new(id: impl Into<VariantId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Parameters for listing products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListParams {
    /// Page size.
    pub first: i64,
    /// Cursor to continue after.
    pub after: Option<String>,
    /// Search query; empty means no filter.
    pub query: String,
    /// Sort key.
    pub sort_key: ProductSortKey,
    /// Reverse the sort order.
    pub reverse: bool,
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            first: DEFAULT_PAGE_SIZE,
            after: None,
            query: String::new(),
            sort_key: ProductSortKey::default(),
            reverse: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params = ProductListParams::default();
        assert_eq!(params.first, 25);
        assert!(params.query.is_empty());
        assert_eq!(params.sort_key, ProductSortKey::CreatedAt);
        assert!(!params.reverse);
        assert!(params.after.is_none());
    }

    #[test]
    fn test_variant_price_is_a_string_on_the_wire() {
        let variant = ProductVariant {
            id: VariantId::new("gid://shopify/ProductVariant/1"),
            price: Decimal::new(1999, 2),
            barcode: None,
            created_at: None,
            title: None,
            sku: None,
            inventory_quantity: None,
        };

        let json = serde_json::to_value(&variant).expect("serialize");
        assert_eq!(json["price"], "19.99");
        // Absent optionals are omitted rather than serialized as null
        assert!(json.get("barcode").is_none());
    }

    #[test]
    fn test_first_variant() {
        let mut product = Product {
            id: ProductId::new("gid://shopify/Product/1"),
            title: "Board".to_string(),
            handle: "board".to_string(),
            status: ProductStatus::Active,
            description: None,
            variants: None,
        };
        assert!(product.first_variant().is_none());

        product.variants = Some(vec![]);
        assert!(product.first_variant().is_none());
    }
}
