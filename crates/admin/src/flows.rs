//! Multi-step catalog flows built on the services.

use catalog_core::{CreateProductInput, Product, ProductVariant, UpdateVariantInput};
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::services::ProductService;
use crate::transport::Transport;

/// Colors the demo snowboard title is picked from.
pub const SNOWBOARD_COLORS: &[&str] = &["Red", "Orange", "Yellow", "Green"];

/// Result of [`create_product_flow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductFlowOutcome {
    /// The product as returned by the create call.
    pub product: Product,
    /// Variants as returned by the price update.
    pub variants: Vec<ProductVariant>,
}

/// Price the first variant is set to.
#[must_use]
pub fn snowboard_price() -> Decimal {
    Decimal::new(10000, 2)
}

/// Create a `"{Color} Snowboard"` with a random color and price its first
/// variant at 100.00.
///
/// # Errors
///
/// Returns `OperationFailed` if the created product has no variant, or any
/// error from the two underlying calls.
pub async fn create_product_flow<T: Transport>(
    service: &ProductService<T>,
) -> Result<ProductFlowOutcome, GatewayError> {
    let title = {
        let mut rng = rand::rng();
        let color = SNOWBOARD_COLORS.choose(&mut rng).copied().unwrap_or("Red");
        format!("{color} Snowboard")
    };

    create_product_flow_with_title(service, title).await
}

/// Create a product with the given title and price its first variant.
///
/// # Errors
///
/// Same as [`create_product_flow`].
#[instrument(skip(service, title), fields(title = tracing::field::Empty))]
pub async fn create_product_flow_with_title<T: Transport>(
    service: &ProductService<T>,
    title: impl Into<String> + Send,
) -> Result<ProductFlowOutcome, GatewayError> {
    let input = CreateProductInput::new(title);
    tracing::Span::current().record("title", input.title.as_str());

    let product = service.create_product(&input).await?;

    let variant_id = product
        .first_variant()
        .map(|v| v.id.clone())
        .ok_or_else(|| {
            GatewayError::OperationFailed(format!("product {} has no variants", product.id))
        })?;

    let mut update = UpdateVariantInput::new(variant_id);
    update.price = Some(snowboard_price());
    let variants = service.update_variants(&product.id, &[update]).await?;

    info!(product_id = %product.id, "snowboard created and priced");
    Ok(ProductFlowOutcome { product, variants })
}
