use std::sync::Arc;
use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer for Product business rules
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Validate and store a new product, returning its id
    #[instrument(skip(self, product), fields(nome = %product.name))]
    pub async fn create_product(&self, product: &Product) -> ProductResult<i64> {
        product.validate().map_err(invalid_data)?;

        self.repository.create(product).await
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn update_product(&self, product: &Product) -> ProductResult<()> {
        if product.id == 0 {
            return Err(ProductError::Validation("id is required".to_string()));
        }

        self.repository.update(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}

fn invalid_data(errors: ValidationErrors) -> ProductError {
    let mut reasons: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    reasons.sort();

    ProductError::Validation(format!("invalid data: {}", reasons.join(", ")))
}
