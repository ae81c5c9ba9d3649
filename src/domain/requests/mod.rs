mod product;
mod upload;

pub use self::product::{
    FindProductsQuery, NewProduct, PriceSort, ProductFilter, ProductForm, ProductPatch,
};
pub use self::upload::UploadedFile;
