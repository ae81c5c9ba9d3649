use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Raw multipart form fields for create and update. Every field is optional
/// at this layer; the service distinguishes "omitted" from "present but
/// empty" and applies the field rules in order.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[schema(example = "Winter Jacket")]
    pub title: Option<String>,

    #[schema(example = "Waterproof jacket with hood")]
    pub description: Option<String>,

    #[schema(example = "2499.99")]
    pub price: Option<String>,

    #[schema(example = "INR")]
    pub currency_id: Option<String>,

    #[schema(example = "₹")]
    pub currency_format: Option<String>,

    #[schema(example = "casual")]
    pub style: Option<String>,

    #[schema(example = "S,M,XL")]
    pub available_sizes: Option<String>,

    #[schema(example = "3")]
    pub installments: Option<String>,
}

impl ProductForm {
    /// The multipart rendition of "no data provided".
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.currency_id.is_none()
            && self.currency_format.is_none()
            && self.style.is_none()
            && self.available_sizes.is_none()
            && self.installments.is_none()
    }
}

/// Query parameters recognized by the listing endpoint.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindProductsQuery {
    /// Exact title match, case-normalized.
    pub name: Option<String>,

    /// Comma-separated size tokens, each validated against the size domain.
    pub size: Option<String>,

    /// Inclusive lower price bound.
    pub price_greater_than: Option<String>,

    /// Inclusive upper price bound.
    pub price_less_than: Option<String>,

    /// "ascending" or "decending" (the misspelled literal is part of the
    /// public contract).
    pub price_sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    Ascending,
    Descending,
}

/// Fully validated filter handed to the repository.
///
/// When `or_combined` is set (both price bounds supplied), the title, size
/// and price-range branches are combined with OR instead of AND. This mirrors
/// surprising but intentional listing behavior; see DESIGN.md.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductFilter {
    pub title: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: Option<PriceSort>,
    pub or_combined: bool,
}

/// Validated document for insertion. All normalization (uppercased title,
/// trimmed size tokens) has already happened.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency_id: String,
    pub currency_format: String,
    pub style: String,
    pub available_sizes: Vec<String>,
    pub installments: i32,
    pub product_image: String,
}

/// Validated partial update. `None` means "leave untouched".
#[derive(Debug, Default, Clone)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub style: Option<String>,
    pub available_sizes: Option<Vec<String>>,
    pub installments: Option<i32>,
    pub product_image: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.style.is_none()
            && self.available_sizes.is_none()
            && self.installments.is_none()
            && self.product_image.is_none()
    }
}
