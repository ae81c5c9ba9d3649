use crate::{
    domain::{
        requests::{ProductForm, UploadedFile},
        response::{ApiResponse, DeleteProductResponse, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        form: &ProductForm,
        files: &[UploadedFile],
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn update_product(
        &self,
        product_id: &str,
        form: &ProductForm,
        files: &[UploadedFile],
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn delete_product(&self, product_id: &str)
    -> Result<DeleteProductResponse, ServiceError>;
}
