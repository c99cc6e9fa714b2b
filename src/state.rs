use std::sync::Arc;

use crate::{contact::ContactConfig, services::CatalogService, store::CatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub contact: ContactConfig,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        contact: ContactConfig,
        jwt_secret: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(store),
            contact,
            jwt_secret: jwt_secret.into(),
        }
    }
}
