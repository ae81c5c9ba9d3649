use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{FindProductsQuery, ProductForm, UploadedFile},
        response::{ApiResponse, DeleteProductResponse, ProductResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Split a multipart request into typed form fields and attached files.
/// Fields carrying a filename are treated as file attachments regardless of
/// their field name; unknown text fields are ignored.
async fn parse_product_form(
    mut multipart: Multipart,
) -> Result<(ProductForm, Vec<UploadedFile>), HttpError> {
    let mut form = ProductForm::default();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(e.to_string()))?
    {
        if let Some(filename) = field.file_name().map(str::to_string) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| HttpError::BadRequest(e.to_string()))?;
            files.push(UploadedFile {
                original_name: filename,
                bytes: bytes.to_vec(),
            });
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| HttpError::BadRequest(e.to_string()))?;

        match name.as_str() {
            "title" => form.title = Some(value),
            "description" => form.description = Some(value),
            "price" => form.price = Some(value),
            "currencyId" => form.currency_id = Some(value),
            "currencyFormat" => form.currency_format = Some(value),
            "style" => form.style = Some(value),
            "availableSizes" => form.available_sizes = Some(value),
            "installments" => form.installments = Some(value),
            _ => {}
        }
    }

    Ok((form, files))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (form, files) = parse_product_form(multipart).await?;
    let response = service.create_product(&form, &files).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    params(FindProductsQuery),
    responses(
        (status = 200, description = "Products list", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Invalid filter parameter", body = ErrorResponse),
        (status = 404, description = "No products found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindProductsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_products(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{productId}",
    tag = "Product",
    params(("productId" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/products/{productId}",
    tag = "Product",
    params(("productId" = String, Path, description = "Product ID")),
    request_body(content = ProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(product_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (form, files) = parse_product_form(multipart).await?;
    let response = service.update_product(&product_id, &form, &files).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/products/{productId}",
    tag = "Product",
    params(("productId" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product soft-deleted", body = DeleteProductResponse),
        (status = 400, description = "Invalid, unknown or already deleted product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(&product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products))
        .route("/products", post(create_product))
        .route("/products/{productId}", get(get_product))
        .route("/products/{productId}", put(update_product))
        .route("/products/{productId}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
