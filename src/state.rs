use crate::{
    config::{Config, ConnectionPool},
    di::{DependenciesInject, DependenciesInjectDeps},
    storage::DiskStorage,
};
use anyhow::Result;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let storage = Arc::new(DiskStorage::new(
            config.upload_dir.as_str(),
            config.public_base_url.as_str(),
        ));

        let deps = DependenciesInjectDeps { pool, storage };

        let di_container = DependenciesInject::new(deps);

        Ok(Self { di_container })
    }
}
