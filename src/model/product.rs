use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency_id: String,
    pub currency_format: String,
    pub style: String,
    pub available_sizes: Vec<String>,
    pub installments: i32,
    pub product_image: String,
    pub is_deleted: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}
