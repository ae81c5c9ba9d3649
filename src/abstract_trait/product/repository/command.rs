use crate::{
    domain::requests::{NewProduct, ProductPatch},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, doc: &NewProduct) -> Result<Product, RepositoryError>;

    /// Merge the patch into the stored record in a single update; unset
    /// fields are left untouched.
    async fn update_product(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError>;

    /// Flip `is_deleted` and stamp `deleted_at`. Fails with `NotFound` when
    /// the record is absent or already soft-deleted.
    async fn soft_delete_product(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
