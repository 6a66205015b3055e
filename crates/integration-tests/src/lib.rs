//! Integration test support for the catalog gateways.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-integration-tests
//! ```
//!
//! No network access is needed. Tests either script exact responses with
//! [`ScriptedTransport`] or run against [`InMemoryCatalog`], a stub that
//! keeps product state between calls so write-then-read sequences can be
//! checked end to end.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use catalog_admin::transport::{GraphQlRequest, GraphQlResponse, Transport, TransportError};
use catalog_admin::{
    CollectionGateway, CollectionService, GatewayConfig, ProductGateway, ProductService,
};
use serde_json::{Value, json};

pub use catalog_admin::testing::{RecordedRequest, ScriptedTransport};

/// Product and collection services over one scripted transport.
pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub products: ProductService<Arc<ScriptedTransport>>,
    pub collections: CollectionService<Arc<ScriptedTransport>>,
}

impl Harness {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GatewayConfig) -> Self {
        let transport = Arc::new(ScriptedTransport::new());
        let config = Arc::new(config);
        Self {
            products: ProductService::new(ProductGateway::new(
                Arc::clone(&transport),
                Arc::clone(&config),
            )),
            collections: CollectionService::new(CollectionGateway::new(
                Arc::clone(&transport),
                config,
            )),
            transport,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    products: BTreeMap<String, Value>,
    collections: BTreeMap<String, Value>,
    members: BTreeMap<String, BTreeSet<String>>,
}

impl Store {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A stateful stand-in for the Admin API.
///
/// Understands the product operations (`createProduct`, `updateProduct`,
/// `getProduct`, `getProducts`, `deleteProduct`, `updateVariants`) and the
/// collection ones (`createCollection`, `updateCollection`, `getCollection`,
/// `getCollections`, `deleteCollection`, `addProductsToCollection`,
/// `removeProductsFromCollection`). Every created product gets one default
/// variant priced at `0.00`. Publication is not modelled.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    store: Mutex<Store>,
}

fn user_error(field: &str, message: &str) -> Value {
    json!([{ "field": [field], "message": message }])
}

fn handleize(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn apply_collection_fields(collection: &mut Value, input: &Value) {
    if let Some(title) = input.get("title") {
        collection["title"] = title.clone();
    }
    if let Some(description) = input.get("descriptionHtml") {
        collection["description"] = description.clone();
    }
    if let Some(src) = input.get("image").and_then(|i| i.get("src")) {
        collection["image"] = json!({ "url": src, "altText": null });
    }
}

fn apply_product_fields(product: &mut Value, fields: &Value) {
    for (from, to) in [
        ("title", "title"),
        ("status", "status"),
        ("descriptionHtml", "description"),
    ] {
        if let Some(value) = fields.get(from) {
            product[to] = value.clone();
        }
    }
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn create_product(&self, vars: &Value) -> Value {
        let fields = &vars["product"];
        let title = fields["title"].as_str().unwrap_or_default().to_string();

        let mut store = self.lock();
        let product_id = store.allocate();
        let variant_id = store.allocate();

        let mut product = json!({
            "id": format!("gid://shopify/Product/{product_id}"),
            "title": title,
            "handle": handleize(&title),
            "status": "ACTIVE",
            "description": "",
            "variants": { "edges": [{ "node": {
                "id": format!("gid://shopify/ProductVariant/{variant_id}"),
                "price": "0.00",
                "title": "Default Title",
                "inventoryQuantity": 0
            }}]}
        });
        apply_product_fields(&mut product, fields);

        let id = product["id"].as_str().unwrap_or_default().to_string();
        store.products.insert(id, product.clone());

        json!({ "productCreate": { "product": product, "userErrors": [] } })
    }

    fn update_product(&self, vars: &Value) -> Value {
        let fields = &vars["product"];
        let id = fields["id"].as_str().unwrap_or_default();

        let mut store = self.lock();
        let Some(product) = store.products.get_mut(id) else {
            return json!({ "productUpdate": {
                "product": null,
                "userErrors": user_error("id", "Product does not exist")
            }});
        };
        apply_product_fields(product, fields);

        json!({ "productUpdate": { "product": product.clone(), "userErrors": [] } })
    }

    fn get_product(&self, vars: &Value) -> Value {
        let id = vars["id"].as_str().unwrap_or_default();
        let product = self.lock().products.get(id).cloned();
        json!({ "product": product })
    }

    fn get_products(&self, vars: &Value) -> Value {
        let first = vars["first"]
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        let edges: Vec<Value> = self
            .lock()
            .products
            .values()
            .take(first)
            .map(|p| json!({ "node": p }))
            .collect();
        json!({ "products": { "edges": edges } })
    }

    fn delete_product(&self, vars: &Value) -> Value {
        let id = vars["input"]["id"].as_str().unwrap_or_default();
        if self.lock().products.remove(id).is_some() {
            json!({ "productDelete": { "deletedProductId": id, "userErrors": [] } })
        } else {
            json!({ "productDelete": {
                "deletedProductId": null,
                "userErrors": user_error("id", "Product does not exist")
            }})
        }
    }

    fn update_variants(&self, vars: &Value) -> Value {
        let product_id = vars["productId"].as_str().unwrap_or_default();

        let mut store = self.lock();
        let Some(product) = store.products.get_mut(product_id) else {
            return json!({ "productVariantsBulkUpdate": {
                "productVariants": null,
                "userErrors": user_error("productId", "Product does not exist")
            }});
        };

        let mut updated = Vec::new();
        let inputs = vars["variants"].as_array().cloned().unwrap_or_default();
        if let Some(edges) = product["variants"]["edges"].as_array_mut() {
            for input in &inputs {
                let Some(node) = edges
                    .iter_mut()
                    .map(|e| &mut e["node"])
                    .find(|n| n["id"] == input["id"])
                else {
                    continue;
                };
                if let Some(price) = input.get("price") {
                    node["price"] = price.clone();
                }
                if let Some(sku) = input.get("inventoryItem").and_then(|i| i.get("sku")) {
                    node["sku"] = sku.clone();
                }
                if let Some(quantity) = input
                    .get("inventoryQuantities")
                    .and_then(|q| q.get(0))
                    .and_then(|q| q.get("availableQuantity"))
                {
                    node["inventoryQuantity"] = quantity.clone();
                }
                updated.push(node.clone());
            }
        }

        json!({ "productVariantsBulkUpdate": { "productVariants": updated, "userErrors": [] } })
    }

    /// A stored collection with its live product count.
    fn collection_node(store: &Store, id: &str) -> Option<Value> {
        let mut node = store.collections.get(id)?.clone();
        let count = store.members.get(id).map_or(0, BTreeSet::len);
        node["productsCount"] = json!({ "count": count });
        Some(node)
    }

    fn create_collection(&self, vars: &Value) -> Value {
        let input = &vars["input"];
        let title = input["title"].as_str().unwrap_or_default().to_string();

        let mut store = self.lock();
        let id = format!("gid://shopify/Collection/{}", store.allocate());
        let mut collection = json!({
            "id": id,
            "title": title,
            "handle": handleize(&title),
            "description": "",
            "image": null
        });
        apply_collection_fields(&mut collection, input);
        store.collections.insert(id, collection.clone());

        json!({ "collectionCreate": { "collection": collection, "userErrors": [] } })
    }

    fn update_collection(&self, vars: &Value) -> Value {
        let input = &vars["input"];
        let id = input["id"].as_str().unwrap_or_default();

        let mut store = self.lock();
        let Some(collection) = store.collections.get_mut(id) else {
            return json!({ "collectionUpdate": {
                "collection": null,
                "userErrors": user_error("id", "Collection does not exist")
            }});
        };
        apply_collection_fields(collection, input);
        let collection = collection.clone();

        json!({ "collectionUpdate": { "collection": collection, "userErrors": [] } })
    }

    fn get_collection(&self, vars: &Value) -> Value {
        let id = vars["id"].as_str().unwrap_or_default();
        let store = self.lock();
        json!({ "collection": Self::collection_node(&store, id) })
    }

    fn get_collections(&self) -> Value {
        let store = self.lock();
        let edges: Vec<Value> = store
            .collections
            .keys()
            .filter_map(|id| Self::collection_node(&store, id))
            .map(|node| json!({ "node": node }))
            .collect();
        json!({ "collections": { "edges": edges } })
    }

    fn delete_collection(&self, vars: &Value) -> Value {
        let id = vars["input"]["id"].as_str().unwrap_or_default();
        let mut store = self.lock();
        store.members.remove(id);
        if store.collections.remove(id).is_some() {
            json!({ "collectionDelete": { "deletedCollectionId": id, "userErrors": [] } })
        } else {
            json!({ "collectionDelete": {
                "deletedCollectionId": null,
                "userErrors": user_error("id", "Collection does not exist")
            }})
        }
    }

    fn change_membership(&self, vars: &Value, add: bool) -> Value {
        let key = if add {
            "collectionAddProducts"
        } else {
            "collectionRemoveProducts"
        };
        let id = vars["id"].as_str().unwrap_or_default().to_string();
        let product_ids: Vec<String> = vars["productIds"]
            .as_array()
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let mut store = self.lock();
        if !store.collections.contains_key(&id) {
            return json!({ key: { "userErrors": user_error("id", "Collection does not exist") } });
        }
        if let Some(missing) = product_ids
            .iter()
            .find(|p| !store.products.contains_key(p.as_str()))
        {
            let message = format!("Product {missing} does not exist");
            return json!({ key: { "userErrors": user_error("productIds", &message) } });
        }

        let members = store.members.entry(id).or_default();
        if add {
            members.extend(product_ids);
        } else {
            for product_id in &product_ids {
                members.remove(product_id);
            }
        }

        json!({ key: { "userErrors": [] } })
    }
}

#[async_trait]
impl Transport for InMemoryCatalog {
    async fn send(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        let vars = &request.variables;
        let data = match request.operation_name {
            "createProduct" => self.create_product(vars),
            "updateProduct" => self.update_product(vars),
            "getProduct" => self.get_product(vars),
            "getProducts" => self.get_products(vars),
            "deleteProduct" => self.delete_product(vars),
            "updateVariants" => self.update_variants(vars),
            "createCollection" => self.create_collection(vars),
            "updateCollection" => self.update_collection(vars),
            "getCollection" => self.get_collection(vars),
            "getCollections" => self.get_collections(),
            "deleteCollection" => self.delete_collection(vars),
            "addProductsToCollection" => self.change_membership(vars, true),
            "removeProductsFromCollection" => self.change_membership(vars, false),
            other => {
                return Err(TransportError::Other(format!(
                    "operation {other} is not supported by the in-memory catalog"
                )));
            }
        };

        serde_json::from_value::<GraphQlResponse>(json!({ "data": data }))
            .map_err(|e| TransportError::Other(e.to_string()))
    }
}
