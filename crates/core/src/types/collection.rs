//! Collection domain types.

use serde::{Deserialize, Serialize};

use super::DEFAULT_PAGE_SIZE;
use super::id::CollectionId;
use super::status::CollectionSortKey;

/// Collection image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionImage {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// A collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: CollectionId,
    /// Collection title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Plain text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<CollectionImage>,
    /// Number of products in the collection, when the query selected it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_count: Option<i64>,
}

/// Input for creating a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCollectionInput {
    /// Collection title (required, must not be blank).
    pub title: String,
    /// Description (HTML).
    pub description: Option<String>,
    /// Source URL of the collection image.
    pub image: Option<String>,
    /// Whether to publish to the configured publications.
    pub published: Option<bool>,
}

impl CreateCollectionInput {
    /// Create an input with just a title; everything else defaults.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Input for updating a collection.
///
/// All fields except `id` are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCollectionInput {
    /// Collection to update.
    pub id: CollectionId,
    /// New title.
    pub title: Option<String>,
    /// New description (HTML).
    pub description: Option<String>,
    /// New image source URL.
    pub image: Option<String>,
    /// Publish to (or unpublish from) the configured publications.
    pub published: Option<bool>,
}

impl UpdateCollectionInput {
    /// Create an input that updates nothing yet.
    #[must_use]
    pub fn new(id: impl Into<CollectionId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Parameters for listing collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionListParams {
    /// Page size.
    pub first: i64,
    /// Cursor to continue after.
    pub after: Option<String>,
    /// Search query; empty means no filter.
    pub query: String,
    /// Sort key.
    pub sort_key: CollectionSortKey,
    /// Reverse the sort order.
    pub reverse: bool,
}

impl Default for CollectionListParams {
    fn default() -> Self {
        Self {
            first: DEFAULT_PAGE_SIZE,
            after: None,
            query: String::new(),
            sort_key: CollectionSortKey::default(),
            reverse: false,
        }
    }
}
