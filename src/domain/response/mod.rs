mod api;
mod product;

pub use self::api::ApiResponse;
pub use self::product::{DeleteProductResponse, ProductResponse};
