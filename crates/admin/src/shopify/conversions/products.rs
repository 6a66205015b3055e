//! Product type conversion functions.

use catalog_core::{Product, ProductId, ProductStatus, ProductVariant, VariantId};

use super::{non_empty, unwrap_edges};
use crate::shopify::queries::{Connection, ProductNode, ProductVariantNode};

pub fn convert_variant(v: ProductVariantNode) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(v.id),
        price: v.price,
        barcode: non_empty(v.barcode),
        created_at: v.created_at,
        title: non_empty(v.title),
        sku: non_empty(v.sku),
        inventory_quantity: v.inventory_quantity,
    }
}

pub fn convert_product(product: ProductNode) -> Product {
    // A selection without `variants` stays `None`; an empty connection is
    // an empty list.
    let variants = product
        .variants
        .map(|c| unwrap_edges(Some(c), convert_variant));

    Product {
        id: ProductId::new(product.id),
        title: product.title,
        handle: product.handle,
        status: ProductStatus::from_remote(&product.status),
        description: non_empty(product.description),
        variants,
    }
}

pub fn convert_product_connection(connection: Option<Connection<ProductNode>>) -> Vec<Product> {
    unwrap_edges(connection, convert_product)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    fn node(value: serde_json::Value) -> ProductNode {
        serde_json::from_value(value).expect("product node")
    }

    #[test]
    fn test_convert_product_normalizes_blanks() {
        let product = convert_product(node(json!({
            "id": "gid://shopify/Product/1",
            "title": "Red Snowboard",
            "handle": "red-snowboard",
            "status": "ACTIVE",
            "description": "",
            "variants": {
                "edges": [{
                    "node": {
                        "id": "gid://shopify/ProductVariant/11",
                        "price": "49.99",
                        "barcode": null,
                        "createdAt": "2024-03-01T12:00:00Z",
                        "title": "Default Title",
                        "sku": "",
                        "inventoryQuantity": 0
                    }
                }]
            }
        })));

        assert_eq!(product.id.as_str(), "gid://shopify/Product/1");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.description, None);

        let variants = product.variants.expect("variants");
        assert_eq!(variants.len(), 1);
        let variant = variants.first().expect("variant");
        assert_eq!(variant.price, Decimal::new(4999, 2));
        assert_eq!(variant.barcode, None);
        assert_eq!(variant.sku, None);
        assert_eq!(variant.title.as_deref(), Some("Default Title"));
        assert_eq!(variant.inventory_quantity, Some(0));
        assert!(variant.created_at.is_some());
    }

    #[test]
    fn test_convert_product_unknown_status_and_no_variants() {
        let product = convert_product(node(json!({
            "id": "gid://shopify/Product/2",
            "title": "Mystery",
            "handle": "mystery",
            "status": "UNLISTED"
        })));

        assert_eq!(product.status, ProductStatus::Draft);
        assert!(product.variants.is_none());
    }

    #[test]
    fn test_convert_product_connection_empty() {
        let connection: Connection<ProductNode> =
            serde_json::from_value(json!({ "edges": [] })).expect("connection");
        assert!(convert_product_connection(Some(connection)).is_empty());
        assert!(convert_product_connection(None).is_empty());
    }
}
