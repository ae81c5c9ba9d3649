use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{PriceSort, ProductFilter},
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

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_by_filter(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching products with filter: {:?}", filter);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_deleted = FALSE"
        ));

        if filter.or_combined {
            // Both price bounds present: title, size and price-range branches
            // are a union, not an intersection.
            qb.push(" AND (");
            let mut any_branch = false;

            if let Some(title) = &filter.title {
                qb.push("title = ").push_bind(title);
                any_branch = true;
            }

            if let Some(sizes) = &filter.sizes {
                if any_branch {
                    qb.push(" OR ");
                }
                qb.push("available_sizes && ").push_bind(sizes);
                any_branch = true;
            }

            if any_branch {
                qb.push(" OR ");
            }
            qb.push("(price >= ")
                .push_bind(filter.price_min.unwrap_or_default())
                .push(" AND price <= ")
                .push_bind(filter.price_max.unwrap_or_default())
                .push(")");

            qb.push(")");
        } else {
            if let Some(title) = &filter.title {
                qb.push(" AND title = ").push_bind(title);
            }

            if let Some(sizes) = &filter.sizes {
                qb.push(" AND available_sizes && ").push_bind(sizes);
            }

            if let Some(min) = filter.price_min {
                qb.push(" AND price >= ").push_bind(min);
            }

            if let Some(max) = filter.price_max {
                qb.push(" AND price <= ").push_bind(max);
            }
        }

        match filter.sort {
            Some(PriceSort::Ascending) => {
                qb.push(" ORDER BY price ASC");
            }
            Some(PriceSort::Descending) => {
                qb.push(" ORDER BY price DESC");
            }
            None => {}
        }

        let products = qb
            .build_query_as::<Product>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE title = $1 AND is_deleted = FALSE"
        ))
        .bind(title)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
