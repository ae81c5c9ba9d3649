use crate::{
    abstract_trait::{DynFileStorage, DynProductCommandService, DynProductQueryService},
    config::ConnectionPool,
    repository::{ProductCommandRepository, ProductQueryRepository},
    service::{ProductCommandService, ProductQueryService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub storage: DynFileStorage,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { pool, storage } = deps;

        let query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let command_repo = Arc::new(ProductCommandRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(query_repo.clone()));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            command_repo,
            query_repo,
            storage,
        ));

        Self {
            product_query,
            product_command,
        }
    }
}
