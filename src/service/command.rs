use crate::{
    abstract_trait::{
        DynFileStorage, DynProductCommandRepository, DynProductQueryRepository,
        ProductCommandServiceTrait,
    },
    domain::{
        requests::{NewProduct, ProductForm, ProductPatch, UploadedFile},
        response::{ApiResponse, DeleteProductResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::validation::{
        is_valid, is_valid_enum, is_valid_file, is_valid_name, is_valid_num, is_valid_object_id,
        is_valid_price,
    },
};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    query: DynProductQueryRepository,
    storage: DynFileStorage,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        query: DynProductQueryRepository,
        storage: DynFileStorage,
    ) -> Self {
        Self {
            command,
            query,
            storage,
        }
    }
}

fn parse_object_id(value: &str, message: &str) -> Result<Uuid, ServiceError> {
    if !is_valid_object_id(value) {
        return Err(ServiceError::Validation(message.to_string()));
    }
    Uuid::parse_str(value.trim()).map_err(|_| ServiceError::Validation(message.to_string()))
}

/// Uppercase, split on commas, check every token against the size domain,
/// keep trimmed tokens in their original order (duplicates permitted).
fn parse_available_sizes(raw: &str) -> Result<Vec<String>, ()> {
    let normalized = raw.to_uppercase();
    let tokens: Vec<&str> = normalized.trim().split(',').collect();

    if tokens.iter().any(|token| !is_valid_enum(token)) {
        return Err(());
    }

    Ok(tokens.iter().map(|token| token.trim().to_string()).collect())
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        form: &ProductForm,
        files: &[UploadedFile],
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        if form.is_empty() {
            return Err(ServiceError::Validation("No data provided".into()));
        }

        let Some(file) = files.first() else {
            return Err(ServiceError::Validation(
                "Please provide a product image".into(),
            ));
        };
        if !is_valid_file(&file.original_name) {
            return Err(ServiceError::Validation("Please provide image only".into()));
        }

        if !is_valid(form.title.as_deref()) {
            return Err(ServiceError::Validation("Title is required".into()));
        }
        let title = form.title.as_deref().unwrap_or_default().trim().to_uppercase();
        if self.query.find_by_title(&title).await?.is_some() {
            return Err(ServiceError::Validation(
                "Title already exist. Please provide a unique title.".into(),
            ));
        }

        if !is_valid(form.description.as_deref()) {
            return Err(ServiceError::Validation("Description is required".into()));
        }
        let description = form.description.clone().unwrap_or_default();

        if !is_valid(form.price.as_deref()) {
            return Err(ServiceError::Validation("Price is required".into()));
        }
        let raw_price = form.price.as_deref().unwrap_or_default();
        if !is_valid_price(raw_price) {
            return Err(ServiceError::Validation(format!(
                "{raw_price} is not a valid price. Please provide input in numbers."
            )));
        }
        let price: f64 = raw_price.trim().parse().map_err(|_| {
            ServiceError::Validation(format!(
                "{raw_price} is not a valid price. Please provide input in numbers."
            ))
        })?;

        if !is_valid(form.currency_id.as_deref()) {
            return Err(ServiceError::Validation("Currency Id is required".into()));
        }
        let currency_id = form.currency_id.as_deref().unwrap_or_default().trim();
        if currency_id != "INR" {
            return Err(ServiceError::Validation(
                "Please provide Indian Currency Id".into(),
            ));
        }

        if !is_valid(form.currency_format.as_deref()) {
            return Err(ServiceError::Validation(
                "Currency Format is required".into(),
            ));
        }
        let currency_format = form.currency_format.as_deref().unwrap_or_default().trim();
        if currency_format != "₹" {
            return Err(ServiceError::Validation(
                "Please provide right format for currency".into(),
            ));
        }

        if !is_valid(form.style.as_deref()) {
            return Err(ServiceError::Validation(
                "Please provide style for your product".into(),
            ));
        }
        let style = form.style.clone().unwrap_or_default();

        if !is_valid(form.available_sizes.as_deref()) {
            return Err(ServiceError::Validation(
                "Please provide available size for your product".into(),
            ));
        }
        let available_sizes = parse_available_sizes(
            form.available_sizes.as_deref().unwrap_or_default(),
        )
        .map_err(|_| {
            ServiceError::Validation("Size should be among [S, XS, M, X, L, XXL, XL]".into())
        })?;

        if !is_valid(form.installments.as_deref()) {
            return Err(ServiceError::Validation(
                "Please provide installments for your product".into(),
            ));
        }
        let raw_installments = form.installments.as_deref().unwrap_or_default();
        if !is_valid_num(raw_installments) {
            return Err(ServiceError::Validation(
                "installments Should be whole Number Only".into(),
            ));
        }
        let installments: i32 = raw_installments
            .trim()
            .parse()
            .map_err(|_| ServiceError::Validation("installments Should be whole Number Only".into()))?;

        // Upload only once every field has passed; invalid input must not
        // leave orphaned assets behind.
        let product_image = self.storage.upload_file(file).await?;

        let doc = NewProduct {
            title,
            description,
            price,
            currency_id: currency_id.to_string(),
            currency_format: currency_format.to_string(),
            style,
            available_sizes,
            installments,
            product_image,
        };

        let product = self.command.create_product(&doc).await?;

        info!("✅ Product created: {}", product.product_id);

        Ok(ApiResponse {
            status: true,
            message: "Product created successfully".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        product_id: &str,
        form: &ProductForm,
        files: &[UploadedFile],
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let id = parse_object_id(product_id, "invalid product Id")?;

        let existing = self
            .query
            .find_by_id(id)
            .await?
            .filter(|p| !p.is_deleted)
            .ok_or_else(|| ServiceError::NotFound("Product not found".into()))?;

        if form.is_empty() {
            return Err(ServiceError::Validation(
                "please provide data to update".into(),
            ));
        }

        let mut patch = ProductPatch::default();

        if let Some(file) = files.first() {
            if !is_valid_file(&file.original_name) {
                return Err(ServiceError::Validation("Please provide image only".into()));
            }
            patch.product_image = Some(self.storage.upload_file(file).await?);
        }

        match form.title.as_deref() {
            Some("") => return Err(ServiceError::Validation("title is not valid".into())),
            Some(title) => {
                if !is_valid(Some(title)) {
                    return Err(ServiceError::Validation("title is not valid".into()));
                }
                let normalized = title.trim().to_uppercase();
                if let Some(holder) = self.query.find_by_title(&normalized).await? {
                    if holder.product_id != existing.product_id {
                        return Err(ServiceError::Validation("title Should be Unique".into()));
                    }
                }
                patch.title = Some(normalized);
            }
            None => {}
        }

        match form.description.as_deref() {
            Some("") => return Err(ServiceError::Validation("description is not valid".into())),
            Some(description) => {
                if !is_valid(Some(description)) {
                    return Err(ServiceError::Validation(
                        "description Should be Valid".into(),
                    ));
                }
                patch.description = Some(description.to_string());
            }
            None => {}
        }

        match form.price.as_deref() {
            Some("") => return Err(ServiceError::Validation("price is not valid".into())),
            Some(price) => {
                if !is_valid_price(price) {
                    return Err(ServiceError::Validation("price Should be Valid".into()));
                }
                patch.price = Some(
                    price
                        .trim()
                        .parse()
                        .map_err(|_| ServiceError::Validation("price Should be Valid".into()))?,
                );
            }
            None => {}
        }

        match form.style.as_deref() {
            Some("") => return Err(ServiceError::Validation("style is not valid".into())),
            Some(style) => {
                if !is_valid(Some(style)) {
                    return Err(ServiceError::Validation("style Should be Valid".into()));
                }
                if !is_valid_name(style) {
                    return Err(ServiceError::Validation(
                        "style Should Not Contain Numbers".into(),
                    ));
                }
                patch.style = Some(style.to_string());
            }
            None => {}
        }

        match form.available_sizes.as_deref() {
            Some("") => {
                return Err(ServiceError::Validation("availableSizes is not valid".into()));
            }
            Some(sizes) => {
                patch.available_sizes = Some(parse_available_sizes(sizes).map_err(|_| {
                    ServiceError::Validation("Size Should be Among S,XS,M,X,L,XXL,XL".into())
                })?);
            }
            None => {}
        }

        match form.installments.as_deref() {
            Some("") => return Err(ServiceError::Validation("installments is not valid".into())),
            Some(installments) => {
                if !is_valid_num(installments) {
                    return Err(ServiceError::Validation(
                        "installments Should be whole Number Only".into(),
                    ));
                }
                patch.installments = Some(installments.trim().parse().map_err(|_| {
                    ServiceError::Validation("installments Should be whole Number Only".into())
                })?);
            }
            None => {}
        }

        let product = self.command.update_product(id, &patch).await?;

        info!("🔄 Product updated: {}", product.product_id);

        Ok(ApiResponse {
            status: true,
            message: "Product updated successfully".into(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(
        &self,
        product_id: &str,
    ) -> Result<DeleteProductResponse, ServiceError> {
        let id = parse_object_id(product_id, "ProductId is invalid")?;

        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::Validation("This productId does not exist".into()))?;

        if product.is_deleted {
            return Err(ServiceError::Validation(
                "This Product is already deleted".into(),
            ));
        }

        self.command.soft_delete_product(id).await?;

        info!("🗑️ Product soft-deleted: {id}");

        Ok(DeleteProductResponse {
            status: true,
            msg: "successfully deleted".into(),
        })
    }
}
