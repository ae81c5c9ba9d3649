pub mod product;
pub mod storage;

pub use self::product::repository::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
    ProductQueryRepositoryTrait,
};
pub use self::product::service::{
    DynProductCommandService, DynProductQueryService, ProductCommandServiceTrait,
    ProductQueryServiceTrait,
};
pub use self::storage::{DynFileStorage, FileStorageTrait};
