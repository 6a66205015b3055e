//! Product commands.
//!
//! # Usage
//!
//! ```bash
//! catalog products list --query "title:snow*" --sort title
//! catalog products get gid://shopify/Product/1
//! catalog products create --title "Red Snowboard" --vendor Acme --tag winter --tag sale
//! catalog products update gid://shopify/Product/1 --status archived
//! catalog products delete gid://shopify/Product/1
//! catalog products set-price gid://shopify/Product/1 gid://shopify/ProductVariant/11 --price 100.00
//! ```

use catalog_core::{
    CreateProductInput, DEFAULT_PAGE_SIZE, ProductId, ProductListParams, ProductSortKey,
    ProductStatus, UpdateProductInput, UpdateVariantInput,
};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde_json::json;

use super::{CommandError, Context, print_json, split_list};

#[derive(Subcommand)]
pub enum ProductAction {
    /// List one page of products
    List {
        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        first: i64,

        /// Cursor to continue after
        #[arg(long)]
        after: Option<String>,

        /// Search query (Shopify search syntax)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Sort key (e.g. created-at, title, price)
        #[arg(long, default_value = "created-at")]
        sort: ProductSortKey,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
    },
    /// Show one product with its variants
    Get {
        /// Product ID
        id: String,
    },
    /// Create a product
    Create {
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Update a product; only the given fields change
    Update {
        /// Product ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
    /// Set a variant's price (and optionally SKU, barcode or stock)
    SetPrice {
        /// Product ID
        product_id: String,

        /// Variant ID
        variant_id: String,

        /// New price, e.g. 100.00
        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        barcode: Option<String>,

        /// Available quantity at the default location
        #[arg(long)]
        inventory: Option<i64>,
    },
}

/// Optional product fields shared by create and update.
#[derive(Args)]
pub struct ProductFields {
    /// Description (HTML)
    #[arg(short, long)]
    description: Option<String>,

    #[arg(long)]
    vendor: Option<String>,

    #[arg(long)]
    product_type: Option<String>,

    /// Tag; repeat or comma-separate for several
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// active, archived or draft
    #[arg(long)]
    status: Option<ProductStatus>,
}

impl ProductFields {
    fn tags(&self) -> Option<Vec<String>> {
        let tags = split_list(&self.tags);
        (!tags.is_empty()).then_some(tags)
    }
}

pub async fn run(context: &Context, action: ProductAction) -> Result<(), CommandError> {
    let service = &context.products;

    match action {
        ProductAction::List {
            first,
            after,
            query,
            sort,
            reverse,
        } => {
            let params = ProductListParams {
                first,
                after,
                query,
                sort_key: sort,
                reverse,
            };
            let products = service.list_products(&params).await?;
            tracing::info!(count = products.len(), "products listed");
            print_json(&products)
        }
        ProductAction::Get { id } => {
            let product = service
                .get_product(&ProductId::new(id.clone()))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&product)
        }
        ProductAction::Create { title, fields } => {
            let input = CreateProductInput {
                title,
                tags: fields.tags(),
                description: fields.description,
                vendor: fields.vendor,
                product_type: fields.product_type,
                status: fields.status,
            };
            let product = service.create_product(&input).await?;
            tracing::info!(product_id = %product.id, "product created");
            print_json(&product)
        }
        ProductAction::Update { id, title, fields } => {
            let input = UpdateProductInput {
                id: ProductId::new(id),
                title,
                tags: fields.tags(),
                description: fields.description,
                vendor: fields.vendor,
                product_type: fields.product_type,
                status: fields.status,
            };
            let product = service.update_product(&input).await?;
            print_json(&product)
        }
        ProductAction::Delete { id } => {
            let deleted = service.delete_product(&ProductId::new(id.clone())).await?;
            print_json(&json!({ "id": id, "deleted": deleted }))
        }
        ProductAction::SetPrice {
            product_id,
            variant_id,
            price,
            sku,
            barcode,
            inventory,
        } => {
            let variant = UpdateVariantInput {
                id: variant_id.into(),
                price: Some(price),
                barcode,
                sku,
                inventory_quantity: inventory,
            };
            let variants = service
                .update_variants(&ProductId::new(product_id), &[variant])
                .await?;
            print_json(&variants)
        }
    }
}
