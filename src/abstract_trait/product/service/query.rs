use crate::{
    domain::{requests::FindProductsQuery, response::{ApiResponse, ProductResponse}},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_products(
        &self,
        query: &FindProductsQuery,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        product_id: &str,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
