//! Status and sort-key enums for catalog entities.
//!
//! All of these serialize to the `SCREAMING_SNAKE_CASE` enum values the
//! Shopify Admin API uses, and parse case-insensitively from strings so they
//! can be taken straight from command-line arguments.

use serde::{Deserialize, Serialize};

/// Product lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Product is visible on sales channels.
    #[default]
    Active,
    /// Product is hidden/archived.
    Archived,
    /// Product is not visible (work in progress).
    Draft,
}

impl ProductStatus {
    /// The API enum value (e.g. `ACTIVE`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
            Self::Draft => "DRAFT",
        }
    }

    /// Map a remote status string onto a known status.
    ///
    /// Statuses this layer does not model (e.g. `UNLISTED`) are treated as
    /// `Draft`, since they are not publicly sellable.
    #[must_use]
    pub fn from_remote(value: &str) -> Self {
        value.parse().unwrap_or(Self::Draft)
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "ARCHIVED" => Ok(Self::Archived),
            "DRAFT" => Ok(Self::Draft),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Sort keys for product list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortKey {
    /// Sort by creation date.
    #[default]
    CreatedAt,
    /// Sort by ID.
    Id,
    /// Sort by price.
    Price,
    /// Sort by product type.
    ProductType,
    /// Sort by search relevance (only meaningful with a query).
    Relevance,
    /// Sort by title.
    Title,
    /// Sort by last update.
    UpdatedAt,
    /// Sort by vendor.
    Vendor,
}

impl ProductSortKey {
    /// The API enum value (e.g. `CREATED_AT`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "CREATED_AT",
            Self::Id => "ID",
            Self::Price => "PRICE",
            Self::ProductType => "PRODUCT_TYPE",
            Self::Relevance => "RELEVANCE",
            Self::Title => "TITLE",
            Self::UpdatedAt => "UPDATED_AT",
            Self::Vendor => "VENDOR",
        }
    }
}

impl std::fmt::Display for ProductSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CREATED_AT" => Ok(Self::CreatedAt),
            "ID" => Ok(Self::Id),
            "PRICE" => Ok(Self::Price),
            "PRODUCT_TYPE" => Ok(Self::ProductType),
            "RELEVANCE" => Ok(Self::Relevance),
            "TITLE" => Ok(Self::Title),
            "UPDATED_AT" => Ok(Self::UpdatedAt),
            "VENDOR" => Ok(Self::Vendor),
            _ => Err(format!("invalid product sort key: {s}")),
        }
    }
}

/// Sort keys for collection list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionSortKey {
    /// Sort by creation date.
    #[default]
    Created,
    /// Sort by ID.
    Id,
    /// Sort by search relevance (only meaningful with a query).
    Relevance,
    /// Sort by title.
    Title,
    /// Sort by last update.
    UpdatedAt,
}

impl CollectionSortKey {
    /// The API enum value (e.g. `CREATED`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Id => "ID",
            Self::Relevance => "RELEVANCE",
            Self::Title => "TITLE",
            Self::UpdatedAt => "UPDATED_AT",
        }
    }
}

impl std::fmt::Display for CollectionSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CollectionSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CREATED" => Ok(Self::Created),
            "ID" => Ok(Self::Id),
            "RELEVANCE" => Ok(Self::Relevance),
            "TITLE" => Ok(Self::Title),
            "UPDATED_AT" => Ok(Self::UpdatedAt),
            _ => Err(format!("invalid collection sort key: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_parse_is_case_insensitive() {
        assert_eq!("draft".parse::<ProductStatus>(), Ok(ProductStatus::Draft));
        assert_eq!("ACTIVE".parse::<ProductStatus>(), Ok(ProductStatus::Active));
        assert!("published".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn test_unknown_remote_status_is_draft() {
        assert_eq!(ProductStatus::from_remote("UNLISTED"), ProductStatus::Draft);
        assert_eq!(
            ProductStatus::from_remote("ARCHIVED"),
            ProductStatus::Archived
        );
    }

    #[test]
    fn test_sort_keys_serialize_as_api_values() {
        let json = serde_json::to_string(&ProductSortKey::ProductType).expect("serialize");
        assert_eq!(json, "\"PRODUCT_TYPE\"");
        let json = serde_json::to_string(&CollectionSortKey::UpdatedAt).expect("serialize");
        assert_eq!(json, "\"UPDATED_AT\"");
    }

    #[test]
    fn test_sort_key_defaults() {
        assert_eq!(ProductSortKey::default(), ProductSortKey::CreatedAt);
        assert_eq!(CollectionSortKey::default(), CollectionSortKey::Created);
    }

    #[test]
    fn test_sort_key_parse_accepts_kebab_case() {
        assert_eq!(
            "updated-at".parse::<ProductSortKey>(),
            Ok(ProductSortKey::UpdatedAt)
        );
        assert_eq!("title".parse::<CollectionSortKey>(), Ok(CollectionSortKey::Title));
    }
}
