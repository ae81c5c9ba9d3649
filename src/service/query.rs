use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::{FindProductsQuery, PriceSort, ProductFilter},
        response::{ApiResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::validation::{ALLOWED_SIZES, is_valid, is_valid_enum, is_valid_object_id, is_valid_price},
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }

    fn build_filter(params: &FindProductsQuery) -> Result<ProductFilter, ServiceError> {
        let mut filter = ProductFilter::default();

        if is_valid(params.name.as_deref()) {
            filter.title = params.name.as_deref().map(|n| n.trim().to_uppercase());
        }

        if is_valid(params.price_sort.as_deref()) {
            filter.sort = match params.price_sort.as_deref().unwrap_or_default().trim() {
                "ascending" => Some(PriceSort::Ascending),
                // Misspelled literal preserved from the public contract.
                "decending" => Some(PriceSort::Descending),
                _ => {
                    return Err(ServiceError::Validation(
                        "priceSort should be 'ascending' or 'decending'".into(),
                    ));
                }
            };
        }

        if is_valid(params.price_greater_than.as_deref()) {
            let raw = params.price_greater_than.as_deref().unwrap_or_default();
            if !is_valid_price(raw) {
                return Err(ServiceError::Validation(
                    "priceGreaterThan should be a valid number".into(),
                ));
            }
            filter.price_min = raw.trim().parse().ok();
        }

        if is_valid(params.price_less_than.as_deref()) {
            let raw = params.price_less_than.as_deref().unwrap_or_default();
            if !is_valid_price(raw) {
                return Err(ServiceError::Validation(
                    "priceLessThan should be a valid number".into(),
                ));
            }
            filter.price_max = raw.trim().parse().ok();
        }

        if is_valid(params.size.as_deref()) {
            let normalized = params.size.as_deref().unwrap_or_default().to_uppercase();
            let tokens: Vec<String> = normalized
                .trim()
                .split(',')
                .map(|token| token.trim().to_string())
                .collect();

            if tokens.iter().any(|token| !is_valid_enum(token)) {
                return Err(ServiceError::Validation(format!(
                    "Sizes should be {}",
                    ALLOWED_SIZES.join(",")
                )));
            }
            filter.sizes = Some(tokens);
        }

        // With both bounds present the branches are a union, not an
        // intersection. Surprising, but part of the listing contract.
        filter.or_combined = filter.price_min.is_some() && filter.price_max.is_some();

        Ok(filter)
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_products(
        &self,
        params: &FindProductsQuery,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let filter = Self::build_filter(params)?;

        let products = self.query.find_by_filter(&filter).await?;

        if products.is_empty() {
            return Err(ServiceError::NotFound("No products found".into()));
        }

        info!("🔍 Listing {} products", products.len());

        Ok(ApiResponse {
            status: true,
            message: "Products list".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn find_by_id(
        &self,
        product_id: &str,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        if !is_valid_object_id(product_id) {
            return Err(ServiceError::Validation(
                "productId is not a valid product id".into(),
            ));
        }
        let id = Uuid::parse_str(product_id.trim()).map_err(|_| {
            ServiceError::Validation("productId is not a valid product id".into())
        })?;

        let product = self
            .query
            .find_by_id(id)
            .await?
            .filter(|p| !p.is_deleted)
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        Ok(ApiResponse {
            status: true,
            message: "Product Details".into(),
            data: ProductResponse::from(product),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mock::{MockProductRepository, sample_product};
    use std::sync::Arc;

    fn service(repo: Arc<MockProductRepository>) -> ProductQueryService {
        ProductQueryService::new(repo)
    }

    #[tokio::test]
    async fn listing_without_parameters_returns_all_non_deleted() {
        let repo = Arc::new(MockProductRepository::default());
        repo.seed(sample_product("SHIRT", 100.0, &["S"], false));
        repo.seed(sample_product("JACKET", 300.0, &["M"], false));
        let deleted = repo.seed(sample_product("GONE", 50.0, &["L"], true));
        let svc = service(repo);

        let response = svc
            .find_products(&FindProductsQuery::default())
            .await
            .unwrap();

        assert_eq!(response.message, "Products list");
        assert_eq!(response.data.len(), 2);
        assert!(response.data.iter().all(|p| p.id != deleted.to_string()));
    }

    #[tokio::test]
    async fn empty_result_is_a_not_found() {
        let svc = service(Arc::new(MockProductRepository::default()));

        assert!(matches!(
            svc.find_products(&FindProductsQuery::default()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invalid_size_token_rejects_the_whole_request() {
        let repo = Arc::new(MockProductRepository::default());
        repo.seed(sample_product("SHIRT", 100.0, &["S"], false));
        let svc = service(repo);

        let params = FindProductsQuery {
            size: Some("S,XXXL".into()),
            ..Default::default()
        };

        assert!(matches!(
            svc.find_products(&params).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn price_range_alone_selects_inclusive_bounds() {
        let repo = Arc::new(MockProductRepository::default());
        repo.seed(sample_product("CHEAP", 99.0, &["S"], false));
        repo.seed(sample_product("LOW", 100.0, &["S"], false));
        repo.seed(sample_product("MID", 300.0, &["S"], false));
        repo.seed(sample_product("HIGH", 500.0, &["S"], false));
        repo.seed(sample_product("TOO_HIGH", 501.0, &["S"], false));
        let svc = service(repo);

        let params = FindProductsQuery {
            price_greater_than: Some("100".into()),
            price_less_than: Some("500".into()),
            price_sort: Some("ascending".into()),
            ..Default::default()
        };

        let response = svc.find_products(&params).await.unwrap();
        let titles: Vec<_> = response.data.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["LOW", "MID", "HIGH"]);
    }

    #[tokio::test]
    async fn both_bounds_with_name_form_a_union() {
        let repo = Arc::new(MockProductRepository::default());
        repo.seed(sample_product("SHIRT", 1000.0, &["S"], false));
        repo.seed(sample_product("JACKET", 300.0, &["M"], false));
        repo.seed(sample_product("SOCKS", 50.0, &["S"], false));
        let svc = service(repo.clone());

        // SHIRT is far outside the price range but still selected by name.
        let params = FindProductsQuery {
            name: Some("shirt".into()),
            price_greater_than: Some("100".into()),
            price_less_than: Some("500".into()),
            ..Default::default()
        };

        let response = svc.find_products(&params).await.unwrap();
        let titles: Vec<_> = response.data.iter().map(|p| p.title.as_str()).collect();
        assert!(titles.contains(&"SHIRT"));
        assert!(titles.contains(&"JACKET"));
        assert!(!titles.contains(&"SOCKS"));

        let captured = repo.last_filter().expect("filter captured");
        assert!(captured.or_combined);
        assert_eq!(captured.title.as_deref(), Some("SHIRT"));
    }

    #[tokio::test]
    async fn decending_literal_sorts_by_price_descending() {
        let repo = Arc::new(MockProductRepository::default());
        repo.seed(sample_product("A", 100.0, &["S"], false));
        repo.seed(sample_product("B", 300.0, &["S"], false));
        let svc = service(repo);

        let params = FindProductsQuery {
            price_sort: Some("decending".into()),
            ..Default::default()
        };

        let response = svc.find_products(&params).await.unwrap();
        let prices: Vec<_> = response.data.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![300.0, 100.0]);
    }

    #[tokio::test]
    async fn unknown_price_sort_literal_is_rejected() {
        let svc = service(Arc::new(MockProductRepository::default()));

        let params = FindProductsQuery {
            price_sort: Some("descending".into()),
            ..Default::default()
        };

        assert!(matches!(
            svc.find_products(&params).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn get_by_id_hides_soft_deleted_products() {
        let repo = Arc::new(MockProductRepository::default());
        let live = repo.seed(sample_product("SHIRT", 100.0, &["S"], false));
        let gone = repo.seed(sample_product("GONE", 50.0, &["M"], true));
        let svc = service(repo);

        let response = svc.find_by_id(&live.to_string()).await.unwrap();
        assert_eq!(response.message, "Product Details");
        assert_eq!(response.data.title, "SHIRT");

        assert!(matches!(
            svc.find_by_id(&gone.to_string()).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            svc.find_by_id("not-a-uuid").await,
            Err(ServiceError::Validation(_))
        ));
    }
}
