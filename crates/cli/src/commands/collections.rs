//! Collection commands.

use catalog_core::{
    CollectionId, CollectionListParams, CollectionSortKey, CreateCollectionInput,
    DEFAULT_PAGE_SIZE, ProductId, UpdateCollectionInput,
};
use clap::{Args, Subcommand};
use serde_json::json;

use super::{CommandError, Context, print_json, split_list};

#[derive(Subcommand)]
pub enum CollectionAction {
    /// List one page of collections
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        first: i64,

        #[arg(long)]
        after: Option<String>,

        #[arg(short, long, default_value = "")]
        query: String,

        /// Sort key (created, id, relevance, title, updated-at)
        #[arg(long, default_value = "created")]
        sort: CollectionSortKey,

        #[arg(long)]
        reverse: bool,
    },
    /// Show one collection
    Get { id: String },
    /// Create a collection (published unless --unpublished)
    Create {
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        fields: CollectionFields,
    },
    /// Update a collection; only the given fields change
    Update {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        fields: CollectionFields,
    },
    /// Delete a collection
    Delete { id: String },
    /// Add products to a collection
    AddProducts {
        collection_id: String,

        /// Product IDs, space- or comma-separated
        #[arg(required = true)]
        product_ids: Vec<String>,
    },
    /// Remove products from a collection
    RemoveProducts {
        collection_id: String,

        #[arg(required = true)]
        product_ids: Vec<String>,
    },
}

#[derive(Args)]
pub struct CollectionFields {
    #[arg(short, long)]
    description: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,

    #[arg(long, conflicts_with = "unpublished")]
    published: bool,

    #[arg(long)]
    unpublished: bool,
}

impl CollectionFields {
    const fn published(&self) -> Option<bool> {
        match (self.published, self.unpublished) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn product_ids(raw: &[String]) -> Vec<ProductId> {
    split_list(raw).into_iter().map(ProductId::from).collect()
}

pub async fn run(context: &Context, action: CollectionAction) -> Result<(), CommandError> {
    let service = &context.collections;

    match action {
        CollectionAction::List {
            first,
            after,
            query,
            sort,
            reverse,
        } => {
            let params = CollectionListParams {
                first,
                after,
                query,
                sort_key: sort,
                reverse,
            };
            print_json(&service.list_collections(&params).await?)
        }
        CollectionAction::Get { id } => {
            let collection = service
                .get_collection(&CollectionId::new(id.clone()))
                .await?
                .ok_or(CommandError::NotFound(id))?;
            print_json(&collection)
        }
        CollectionAction::Create { title, fields } => {
            let input = CreateCollectionInput {
                title,
                published: fields.published(),
                description: fields.description,
                image: fields.image,
            };
            let collection = service.create_collection(&input).await?;
            tracing::info!(collection_id = %collection.id, "collection created");
            print_json(&collection)
        }
        CollectionAction::Update { id, title, fields } => {
            let input = UpdateCollectionInput {
                id: CollectionId::new(id),
                title,
                published: fields.published(),
                description: fields.description,
                image: fields.image,
            };
            print_json(&service.update_collection(&input).await?)
        }
        CollectionAction::Delete { id } => {
            let deleted = service
                .delete_collection(&CollectionId::new(id.clone()))
                .await?;
            print_json(&json!({ "id": id, "deleted": deleted }))
        }
        CollectionAction::AddProducts {
            collection_id,
            product_ids: raw,
        } => {
            let ids = product_ids(&raw);
            let added = service
                .add_products_to_collection(&CollectionId::new(collection_id.clone()), &ids)
                .await?;
            print_json(&json!({ "id": collection_id, "added": added, "count": ids.len() }))
        }
        CollectionAction::RemoveProducts {
            collection_id,
            product_ids: raw,
        } => {
            let ids = product_ids(&raw);
            let removed = service
                .remove_products_from_collection(&CollectionId::new(collection_id.clone()), &ids)
                .await?;
            print_json(&json!({ "id": collection_id, "removed": removed, "count": ids.len() }))
        }
    }
}
