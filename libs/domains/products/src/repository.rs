use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage port for products.
///
/// Absence is `Ok(None)`, never an error. Implementations must be safe to
/// share across request tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by name
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a product, ignoring `product.id`, and return the new id
    async fn create(&self, product: &Product) -> ProductResult<i64>;

    /// Overwrite the product with `product.id`; a missing id is a no-op
    async fn update(&self, product: &Product) -> ProductResult<()>;

    /// Delete by id; a missing id is a no-op
    async fn delete(&self, id: i64) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i64, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store.products.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(result)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, product: &Product) -> ProductResult<i64> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        store.products.insert(id, product.clone().with_id(id));

        tracing::info!(product_id = id, "Created product");
        Ok(id)
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                tracing::info!(product_id = product.id, "Updated product");
            }
            None => tracing::debug!(product_id = product.id, "Update matched no product"),
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> ProductResult<()> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(&Product::new("Caneta", "", 2.5, 1)).await.unwrap();
        let second = repo.create(&Product::new("Lápis", "", 1.0, 1)).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_create_ignores_payload_id() {
        let repo = InMemoryProductRepository::new();

        let id = repo
            .create(&Product::new("Caneta", "", 2.5, 1).with_id(500))
            .await
            .unwrap();

        assert_eq!(id, 1);
        assert!(repo.get_by_id(500).await.unwrap().is_none());
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_all_orders_by_name() {
        let repo = InMemoryProductRepository::new();
        repo.create(&Product::new("Régua", "", 3.0, 1)).await.unwrap();
        repo.create(&Product::new("Borracha", "", 0.5, 1)).await.unwrap();
        repo.create(&Product::new("Caneta", "", 2.5, 1)).await.unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Borracha", "Caneta", "Régua"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryProductRepository::new();

        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryProductRepository::new();
        let id = repo.create(&Product::new("Caneta", "Azul", 2.5, 1)).await.unwrap();

        let changed = Product::new("Caneta", "Vermelha", 3.0, 5).with_id(id);
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let repo = InMemoryProductRepository::new();

        repo.update(&Product::new("Fantasma", "", 1.0, 1).with_id(9))
            .await
            .unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        let id = repo.create(&Product::new("Caneta", "", 2.5, 1)).await.unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }
}
