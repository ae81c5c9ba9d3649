use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
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
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id.to_string(),
            title: value.title,
            description: value.description,
            price: value.price,
            currency_id: value.currency_id,
            currency_format: value.currency_format,
            style: value.style,
            available_sizes: value.available_sizes,
            installments: value.installments,
            product_image: value.product_image,
            is_deleted: value.is_deleted,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
            deleted_at: value.deleted_at.map(|dt| dt.to_string()),
        }
    }
}

/// Delete acknowledgment. Deliberately carries a `msg` key and no entity
/// body, unlike the other handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DeleteProductResponse {
    pub status: bool,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn product_response_serializes_with_camel_case_keys() {
        let response = ProductResponse::from(Product {
            product_id: Uuid::new_v4(),
            title: "SHIRT".into(),
            description: "A shirt".into(),
            price: 100.0,
            currency_id: "INR".into(),
            currency_format: "₹".into(),
            style: "casual".into(),
            available_sizes: vec!["S".into(), "M".into()],
            installments: 3,
            product_image: "http://localhost:8080/uploads/a.png".into(),
            is_deleted: false,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        });

        let value = serde_json::to_value(&response).unwrap();
        for key in [
            "currencyId",
            "currencyFormat",
            "availableSizes",
            "productImage",
            "isDeleted",
            "createdAt",
            "updatedAt",
            "deletedAt",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn delete_ack_uses_msg_key() {
        let ack = DeleteProductResponse {
            status: true,
            msg: "successfully deleted".into(),
        };

        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["msg"], "successfully deleted");
        assert!(value.get("message").is_none());
    }
}
