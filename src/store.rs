//! In-memory product store.
//!
//! The store owns the authoritative sequence of products for the process
//! lifetime. There is no persistence layer: contents are seeded at startup
//! and lost on exit.
//!
//! # Concurrency
//!
//! Axum services requests concurrently, so the collection sits behind a
//! single `tokio::sync::RwLock`. Lookup-then-mutate operations (`replace`,
//! `remove`) hold one write guard for the whole sequence, keeping each
//! request's read-modify-write atomic.

use tokio::sync::RwLock;

use crate::models::Product;

/// Ordered, mutable collection of products guarded by a single lock.
///
/// Collection order reflects insertion order; updates preserve position.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the three sample products.
    pub fn with_seed_data() -> Self {
        Self {
            products: RwLock::new(vec![
                Product {
                    id: "1".to_string(),
                    name: "Laptop".to_string(),
                    description: "High-performance laptop with 16GB RAM".to_string(),
                    price: 1200.0,
                    category: "electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: "2".to_string(),
                    name: "Smartphone".to_string(),
                    description: "Latest model with 128GB storage".to_string(),
                    price: 800.0,
                    category: "electronics".to_string(),
                    in_stock: true,
                },
                Product {
                    id: "3".to_string(),
                    name: "Coffee Maker".to_string(),
                    description: "Programmable coffee maker with timer".to_string(),
                    price: 50.0,
                    category: "kitchen".to_string(),
                    in_stock: false,
                },
            ]),
        }
    }

    /// Snapshot of the current contents, in insertion order.
    ///
    /// Returns a clone so callers can filter and slice without holding the
    /// lock or mutating the store.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Look up a product by id.
    pub async fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Append a product. The caller must have assigned a unique id.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Overwrite the product with the given id in place, preserving its
    /// position. Returns the stored product, or `None` if the id is absent.
    pub async fn replace(&self, id: &str, product: Product) -> Option<Product> {
        let mut products = self.products.write().await;
        let position = products.iter().position(|p| p.id == id)?;
        let slot = products.get_mut(position)?;
        *slot = product;
        Some(slot.clone())
    }

    /// Remove the product with the given id and return it, or `None` if the
    /// id is absent.
    pub async fn remove(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let position = products.iter().position(|p| p.id == id)?;
        Some(products.remove(position))
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether the store holds no products.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: "A test product".to_string(),
            price: 9.99,
            category: "test".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_seed_data() {
        let store = ProductStore::with_seed_data();

        assert_eq!(store.len().await, 3);
        let products = store.list().await;
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[1].name, "Smartphone");
        assert_eq!(products[2].name, "Coffee Maker");
    }

    #[tokio::test]
    async fn test_insert_appends() {
        let store = ProductStore::with_seed_data();
        store.insert(sample_product("4", "Desk Lamp")).await;

        let products = store.list().await;
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].id, "4");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = ProductStore::with_seed_data();

        let found = store.find_by_id("2").await.expect("Product should exist");
        assert_eq!(found.name, "Smartphone");

        assert!(store.find_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_replace_preserves_position() {
        let store = ProductStore::with_seed_data();

        let replacement = sample_product("2", "Tablet");
        let updated = store
            .replace("2", replacement)
            .await
            .expect("Product should exist");
        assert_eq!(updated.name, "Tablet");

        let products = store.list().await;
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].id, "2");
        assert_eq!(products[1].name, "Tablet");
    }

    #[tokio::test]
    async fn test_replace_missing_returns_none() {
        let store = ProductStore::with_seed_data();
        let before = store.list().await;

        let result = store.replace("missing", sample_product("missing", "x")).await;
        assert!(result.is_none());
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_returns_removed_element() {
        let store = ProductStore::with_seed_data();

        let removed = store.remove("1").await.expect("Product should exist");
        assert_eq!(removed.name, "Laptop");

        assert_eq!(store.len().await, 2);
        assert!(store.find_by_id("1").await.is_none());
        // Remaining elements keep their order
        let products = store.list().await;
        assert_eq!(products[0].id, "2");
        assert_eq!(products[1].id, "3");
    }

    #[tokio::test]
    async fn test_remove_missing_returns_none() {
        let store = ProductStore::with_seed_data();

        assert!(store.remove("missing").await.is_none());
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = ProductStore::new();

        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }
}
