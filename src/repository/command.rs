use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{NewProduct, ProductPatch},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "product_id, title, description, price, currency_id, \
     currency_format, style, available_sizes, installments, product_image, \
     is_deleted, created_at, updated_at, deleted_at";

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, doc: &NewProduct) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products \
                 (title, description, price, currency_id, currency_format, style, \
                  available_sizes, installments, product_image, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&doc.title)
        .bind(&doc.description)
        .bind(doc.price)
        .bind(&doc.currency_id)
        .bind(&doc.currency_format)
        .bind(&doc.style)
        .bind(&doc.available_sizes)
        .bind(doc.installments)
        .bind(&doc.product_image)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", doc.title, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            product.product_id, product.title
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = CURRENT_TIMESTAMP");

        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title);
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ").push_bind(description);
        }
        if let Some(price) = patch.price {
            qb.push(", price = ").push_bind(price);
        }
        if let Some(style) = &patch.style {
            qb.push(", style = ").push_bind(style);
        }
        if let Some(sizes) = &patch.available_sizes {
            qb.push(", available_sizes = ").push_bind(sizes);
        }
        if let Some(installments) = patch.installments {
            qb.push(", installments = ").push_bind(installments);
        }
        if let Some(image) = &patch.product_image {
            qb.push(", product_image = ").push_bind(image);
        }

        qb.push(" WHERE product_id = ")
            .push_bind(id)
            .push(format!(" RETURNING {PRODUCT_COLUMNS}"));

        let product = qb
            .build_query_as::<Product>()
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn soft_delete_product(&self, id: Uuid) -> Result<Product, RepositoryError> {
        info!("🗑️ Soft-deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products \
             SET is_deleted = TRUE, \
                 deleted_at = CURRENT_TIMESTAMP, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE product_id = $1 AND is_deleted = FALSE \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft-delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("✅ Product ID {} soft-deleted", product.product_id);
        Ok(product)
    }
}
