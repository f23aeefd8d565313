use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::future::Future;
use std::time::Duration;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

/// Per-operation bound applied when no explicit timeout is given.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PgProductRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_timeout(db, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn bounded<T, F>(&self, op: F) -> ProductResult<T>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => result.map_err(ProductError::from),
            Err(_) => {
                tracing::warn!("Storage operation exceeded {:?}", self.timeout);
                Err(ProductError::Timeout(self.timeout))
            }
        }
    }

    fn active_model(product: &Product) -> entity::ActiveModel {
        entity::ActiveModel {
            id: NotSet,
            nome: Set(product.name.clone()),
            descricao: Set(product.description.clone()),
            preco: Set(product.price),
            quantidade: Set(product.quantity),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = self
            .bounded(
                entity::Entity::find()
                    .order_by_asc(entity::Column::Nome)
                    .all(&self.db),
            )
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self
            .bounded(entity::Entity::find_by_id(id).one(&self.db))
            .await?;

        Ok(model.map(Product::from))
    }

    async fn create(&self, product: &Product) -> ProductResult<i64> {
        let model = self
            .bounded(Self::active_model(product).insert(&self.db))
            .await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.id)
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let result = self
            .bounded(
                entity::Entity::update_many()
                    .set(Self::active_model(product))
                    .filter(entity::Column::Id.eq(product.id))
                    .exec(&self.db),
            )
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = product.id, "Updated product");
        } else {
            tracing::debug!(product_id = product.id, "Update matched no product");
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ProductResult<()> {
        let result = self
            .bounded(entity::Entity::delete_by_id(id).exec(&self.db))
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
