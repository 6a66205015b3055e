//! Collection type conversion functions.

use catalog_core::{Collection, CollectionId, CollectionImage};

use super::{non_empty, unwrap_edges};
use crate::shopify::queries::{CollectionNode, Connection};

pub fn convert_collection(c: CollectionNode) -> Collection {
    Collection {
        id: CollectionId::new(c.id),
        title: c.title,
        handle: c.handle,
        description: non_empty(c.description),
        image: c
            .image
            .filter(|img| !img.url.is_empty())
            .map(|img| CollectionImage {
                url: img.url,
                alt_text: non_empty(img.alt_text),
            }),
        products_count: c.products_count.map(|pc| pc.count),
    }
}

pub fn convert_collection_connection(
    connection: Option<Connection<CollectionNode>>,
) -> Vec<Collection> {
    unwrap_edges(connection, convert_collection)
}
