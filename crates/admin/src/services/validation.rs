//! Pre-flight input checks.
//!
//! Field names in errors use the remote API's spelling (`productId`,
//! `productIds`) so they line up with user errors reported by the API.

use catalog_core::{
    CollectionId, CreateCollectionInput, CreateProductInput, ProductId, UpdateCollectionInput,
    UpdateProductInput, UpdateVariantInput,
};

use crate::error::GatewayError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A title is required and must contain non-whitespace characters.
pub fn require_title(title: &str) -> Result<(), GatewayError> {
    if is_blank(title) {
        return Err(GatewayError::MissingField("title"));
    }
    Ok(())
}

/// A title is optional on update, but a supplied one may not be blank.
pub fn optional_title(title: Option<&str>) -> Result<(), GatewayError> {
    title.map_or(Ok(()), require_title)
}

pub fn require_id(id: &str) -> Result<(), GatewayError> {
    if is_blank(id) {
        return Err(GatewayError::MissingField("id"));
    }
    Ok(())
}

pub fn validate_create_product(input: &CreateProductInput) -> Result<(), GatewayError> {
    require_title(&input.title)
}

pub fn validate_update_product(input: &UpdateProductInput) -> Result<(), GatewayError> {
    require_id(input.id.as_str())?;
    optional_title(input.title.as_deref())
}

pub fn validate_create_collection(input: &CreateCollectionInput) -> Result<(), GatewayError> {
    require_title(&input.title)
}

pub fn validate_update_collection(input: &UpdateCollectionInput) -> Result<(), GatewayError> {
    require_id(input.id.as_str())?;
    optional_title(input.title.as_deref())
}

/// Variant updates need a product and at least one identified variant.
pub fn validate_variant_update(
    product_id: &ProductId,
    variants: &[UpdateVariantInput],
) -> Result<(), GatewayError> {
    if is_blank(product_id.as_str()) {
        return Err(GatewayError::MissingField("productId"));
    }
    if variants.is_empty() {
        return Err(GatewayError::MissingField("variants"));
    }
    if variants.iter().any(|v| is_blank(v.id.as_str())) {
        return Err(GatewayError::MissingField("variants.id"));
    }
    Ok(())
}

/// Membership changes need a collection and a non-empty list of products.
pub fn validate_membership(
    collection_id: &CollectionId,
    product_ids: &[ProductId],
) -> Result<(), GatewayError> {
    if is_blank(collection_id.as_str()) {
        return Err(GatewayError::MissingField("collectionId"));
    }
    if product_ids.is_empty() || product_ids.iter().any(|id| is_blank(id.as_str())) {
        return Err(GatewayError::MissingField("productIds"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(result: Result<(), GatewayError>) -> &'static str {
        match result {
            Err(GatewayError::MissingField(field)) => field,
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(missing(require_title("")), "title");
        assert_eq!(missing(require_title(" \t\n")), "title");
        assert!(require_title("Red Snowboard").is_ok());

        assert!(optional_title(None).is_ok());
        assert_eq!(missing(optional_title(Some("   "))), "title");
    }

    #[test]
    fn test_update_product_requires_id_first() {
        let mut input = UpdateProductInput::new("");
        input.title = Some(String::new());
        assert_eq!(missing(validate_update_product(&input)), "id");

        input.id = ProductId::new("gid://shopify/Product/1");
        assert_eq!(missing(validate_update_product(&input)), "title");

        input.title = None;
        assert!(validate_update_product(&input).is_ok());
    }

    #[test]
    fn test_update_collection() {
        assert_eq!(
            missing(validate_update_collection(&UpdateCollectionInput::new(""))),
            "id"
        );
        assert!(
            validate_update_collection(&UpdateCollectionInput::new("gid://shopify/Collection/1"))
                .is_ok()
        );
        assert_eq!(
            missing(validate_create_collection(&CreateCollectionInput::new(" "))),
            "title"
        );
    }

    #[test]
    fn test_variant_update() {
        let product = ProductId::new("gid://shopify/Product/1");
        let variant = UpdateVariantInput::new("gid://shopify/ProductVariant/1");

        assert_eq!(
            missing(validate_variant_update(
                &ProductId::default(),
                std::slice::from_ref(&variant)
            )),
            "productId"
        );
        assert_eq!(missing(validate_variant_update(&product, &[])), "variants");
        assert_eq!(
            missing(validate_variant_update(
                &product,
                &[variant.clone(), UpdateVariantInput::new("")]
            )),
            "variants.id"
        );
        assert!(validate_variant_update(&product, &[variant]).is_ok());
    }

    #[test]
    fn test_membership() {
        let collection = CollectionId::new("gid://shopify/Collection/1");
        let product = ProductId::new("gid://shopify/Product/1");

        assert_eq!(
            missing(validate_membership(
                &CollectionId::default(),
                std::slice::from_ref(&product)
            )),
            "collectionId"
        );
        assert_eq!(missing(validate_membership(&collection, &[])), "productIds");
        assert_eq!(
            missing(validate_membership(
                &collection,
                &[product.clone(), ProductId::default()]
            )),
            "productIds"
        );
        assert!(validate_membership(&collection, &[product]).is_ok());
    }
}
