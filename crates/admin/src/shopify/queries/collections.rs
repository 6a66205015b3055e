//! Collection and collection membership operations.

use serde::{Deserialize, Serialize};

use super::{Connection, UserError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionImageNode {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountNode {
    pub count: i64,
}

/// Collection fields as selected by the collection documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<CollectionImageNode>,
    #[serde(default)]
    pub products_count: Option<CountNode>,
}

/// Payload of `collectionCreate` / `collectionUpdate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMutationPayload {
    #[serde(default)]
    pub collection: Option<CollectionNode>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

/// Shared by create and update; only supplied fields are serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageInput {
    pub src: String,
}

/// Variables for the membership mutations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipVariables {
    pub id: String,
    pub product_ids: Vec<String>,
}

/// Variables for the publication mutations.
#[derive(Debug, Clone, Serialize)]
pub struct PublishVariables {
    pub id: String,
    pub input: Vec<PublicationInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationInput {
    pub publication_id: String,
}

// =============================================================================
// createCollection
// =============================================================================

pub mod collection_create {
    use serde::{Deserialize, Serialize};

    use super::{CollectionInput, CollectionMutationPayload};
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "createCollection",
        document: r"
            mutation createCollection($input: CollectionInput!) {
                collectionCreate(input: $input) {
                    collection {
                        id
                        title
                        handle
                        description
                        image {
                            url
                            altText
                        }
                    }
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CollectionInput,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub collection_create: Option<CollectionMutationPayload>,
    }
}

// =============================================================================
// updateCollection
// =============================================================================

pub mod collection_update {
    use serde::{Deserialize, Serialize};

    use super::{CollectionInput, CollectionMutationPayload};
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "updateCollection",
        document: r"
            mutation updateCollection($input: CollectionInput!) {
                collectionUpdate(input: $input) {
                    collection {
                        id
                        title
                        handle
                        description
                        image {
                            url
                            altText
                        }
                    }
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CollectionInput,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub collection_update: Option<CollectionMutationPayload>,
    }
}

// =============================================================================
// getCollection
// =============================================================================

pub mod get_collection {
    use serde::{Deserialize, Serialize};

    use super::CollectionNode;
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "getCollection",
        document: r"
            query getCollection($id: ID!) {
                collection(id: $id) {
                    id
                    title
                    handle
                    description
                    image {
                        url
                        altText
                    }
                    productsCount {
                        count
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub collection: Option<CollectionNode>,
    }
}

// =============================================================================
// getCollections
// =============================================================================

pub mod get_collections {
    use catalog_core::CollectionSortKey;
    use serde::{Deserialize, Serialize};

    use super::{CollectionNode, Connection};
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "getCollections",
        document: r"
            query getCollections(
                $first: Int!
                $after: String
                $query: String
                $sortKey: CollectionSortKeys
                $reverse: Boolean
            ) {
                collections(
                    first: $first
                    after: $after
                    query: $query
                    sortKey: $sortKey
                    reverse: $reverse
                ) {
                    edges {
                        node {
                            id
                            title
                            handle
                            description
                            image {
                                url
                                altText
                            }
                            productsCount {
                                count
                            }
                        }
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub first: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub query: Option<String>,
        pub sort_key: CollectionSortKey,
        pub reverse: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub collections: Option<Connection<CollectionNode>>,
    }
}

// =============================================================================
// deleteCollection
// =============================================================================

pub mod collection_delete {
    use serde::{Deserialize, Serialize};

    use super::UserError;
    use crate::shopify::queries::Operation;

    pub const OPERATION: Operation = Operation {
        name: "deleteCollection",
        document: r"
            mutation deleteCollection($input: CollectionDeleteInput!) {
                collectionDelete(input: $input) {
                    deletedCollectionId
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CollectionDeleteInput,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct CollectionDeleteInput {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CollectionDeletePayload {
        #[serde(default)]
        pub deleted_collection_id: Option<String>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub collection_delete: Option<CollectionDeletePayload>,
    }
}

// =============================================================================
// addProductsToCollection
// =============================================================================

pub mod collection_add_products {
    use serde::Deserialize;

    use crate::shopify::queries::{Operation, UserErrorsPayload};

    pub use super::MembershipVariables as Variables;

    pub const OPERATION: Operation = Operation {
        name: "addProductsToCollection",
        document: r"
            mutation addProductsToCollection($id: ID!, $productIds: [ID!]!) {
                collectionAddProducts(id: $id, productIds: $productIds) {
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub collection_add_products: Option<UserErrorsPayload>,
    }
}

// =============================================================================
// removeProductsFromCollection
// =============================================================================

pub mod collection_remove_products {
    use serde::Deserialize;

    use crate::shopify::queries::{Operation, UserErrorsPayload};

    pub use super::MembershipVariables as Variables;

    pub const OPERATION: Operation = Operation {
        name: "removeProductsFromCollection",
        document: r"
            mutation removeProductsFromCollection($id: ID!, $productIds: [ID!]!) {
                collectionRemoveProducts(id: $id, productIds: $productIds) {
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub collection_remove_products: Option<UserErrorsPayload>,
    }
}

// =============================================================================
// publishCollection / unpublishCollection
// =============================================================================

pub mod publishable_publish {
    use serde::Deserialize;

    use crate::shopify::queries::{Operation, UserErrorsPayload};

    pub use super::PublishVariables as Variables;

    pub const OPERATION: Operation = Operation {
        name: "publishCollection",
        document: r"
            mutation publishCollection($id: ID!, $input: [PublicationInput!]!) {
                publishablePublish(id: $id, input: $input) {
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub publishable_publish: Option<UserErrorsPayload>,
    }
}

pub mod publishable_unpublish {
    use serde::Deserialize;

    use crate::shopify::queries::{Operation, UserErrorsPayload};

    pub use super::PublishVariables as Variables;

    pub const OPERATION: Operation = Operation {
        name: "unpublishCollection",
        document: r"
            mutation unpublishCollection($id: ID!, $input: [PublicationInput!]!) {
                publishableUnpublish(id: $id, input: $input) {
                    userErrors {
                        field
                        message
                    }
                }
            }
        ",
    };

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub publishable_unpublish: Option<UserErrorsPayload>,
    }
}
