use crate::{domain::requests::ProductFilter, errors::RepositoryError, model::Product};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Fetch non-deleted products matching the filter, sorted per the filter.
    async fn find_by_filter(&self, filter: &ProductFilter)
    -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    /// Lookup by normalized (uppercased) title among non-deleted products.
    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, RepositoryError>;
}
