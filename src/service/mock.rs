use crate::{
    abstract_trait::{
        FileStorageTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::{NewProduct, PriceSort, ProductFilter, ProductPatch, UploadedFile},
    errors::{RepositoryError, StorageError},
    model::Product,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use uuid::Uuid;

/// In-memory stand-in for the Postgres repositories. Mirrors the documented
/// repository contract, including the OR-combined filter semantics.
#[derive(Default)]
pub struct MockProductRepository {
    rows: Mutex<Vec<Product>>,
    last_filter: Mutex<Option<ProductFilter>>,
}

impl MockProductRepository {
    pub fn seed(&self, product: Product) -> Uuid {
        let id = product.product_id;
        self.rows.lock().unwrap().push(product);
        id
    }

    pub fn last_filter(&self) -> Option<ProductFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    fn matches(product: &Product, filter: &ProductFilter) -> bool {
        let title_hit = filter
            .title
            .as_deref()
            .map(|t| product.title == t)
            .unwrap_or(false);
        let size_hit = filter
            .sizes
            .as_ref()
            .map(|sizes| sizes.iter().any(|s| product.available_sizes.contains(s)))
            .unwrap_or(false);
        let above = filter.price_min.map(|min| product.price >= min);
        let below = filter.price_max.map(|max| product.price <= max);

        if filter.or_combined {
            let range_hit = above.unwrap_or(false) && below.unwrap_or(false);
            title_hit || size_hit || range_hit
        } else {
            (filter.title.is_none() || title_hit)
                && (filter.sizes.is_none() || size_hit)
                && above.unwrap_or(true)
                && below.unwrap_or(true)
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MockProductRepository {
    async fn find_by_filter(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, RepositoryError> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());

        let mut products: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.is_deleted && Self::matches(p, filter))
            .cloned()
            .collect();

        match filter.sort {
            Some(PriceSort::Ascending) => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(PriceSort::Descending) => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }

        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| !p.is_deleted && p.title == title)
            .cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MockProductRepository {
    async fn create_product(&self, doc: &NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now().naive_utc();
        let product = Product {
            product_id: Uuid::new_v4(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            price: doc.price,
            currency_id: doc.currency_id.clone(),
            currency_format: doc.currency_format.clone(),
            style: doc.style.clone(),
            available_sizes: doc.available_sizes.clone(),
            installments: doc.installments,
            product_image: doc.product_image.clone(),
            is_deleted: false,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.product_id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(title) = &patch.title {
            product.title = title.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(style) = &patch.style {
            product.style = style.clone();
        }
        if let Some(sizes) = &patch.available_sizes {
            product.available_sizes = sizes.clone();
        }
        if let Some(installments) = patch.installments {
            product.installments = installments;
        }
        if let Some(image) = &patch.product_image {
            product.product_image = image.clone();
        }
        product.updated_at = Some(Utc::now().naive_utc());

        Ok(product.clone())
    }

    async fn soft_delete_product(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.product_id == id && !p.is_deleted)
            .ok_or(RepositoryError::NotFound)?;

        let now = Utc::now().naive_utc();
        product.is_deleted = true;
        product.deleted_at = Some(now);
        product.updated_at = Some(now);

        Ok(product.clone())
    }
}

#[derive(Default)]
pub struct MockFileStorage {
    uploads: AtomicUsize,
}

impl MockFileStorage {
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileStorageTrait for MockFileStorage {
    async fn upload_file(&self, file: &UploadedFile) -> Result<String, StorageError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(format!("http://assets.local/uploads/{}", file.original_name))
    }
}

pub fn sample_product(title: &str, price: f64, sizes: &[&str], deleted: bool) -> Product {
    let now = Utc::now().naive_utc();
    Product {
        product_id: Uuid::new_v4(),
        title: title.to_string(),
        description: "A seeded product".into(),
        price,
        currency_id: "INR".into(),
        currency_format: "₹".into(),
        style: "casual".into(),
        available_sizes: sizes.iter().map(|s| s.to_string()).collect(),
        installments: 3,
        product_image: "http://assets.local/uploads/seed.png".into(),
        is_deleted: deleted,
        created_at: Some(now),
        updated_at: Some(now),
        deleted_at: deleted.then_some(now),
    }
}
