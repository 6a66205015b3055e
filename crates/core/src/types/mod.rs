//! Core types for the catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod collection;
pub mod id;
pub mod product;
pub mod status;

pub use collection::{
    Collection, CollectionImage, CollectionListParams, CreateCollectionInput,
    UpdateCollectionInput,
};
pub use id::*;
pub use product::{
    CreateProductInput, Product, ProductListParams, ProductVariant, UpdateProductInput,
    UpdateVariantInput,
};
pub use status::*;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: i64 = 25;
