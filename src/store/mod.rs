//! Persistence boundary for the product catalog.
//!
//! Two interchangeable strategies sit behind [`CatalogStore`]:
//! [`LocalCatalogStore`] keeps the whole collection in one JSON slot on disk,
//! [`RemoteCatalogStore`] talks to a `products` table through SeaORM.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    config::StoreBackend,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    models::{NewProduct, Product},
};

pub mod local;
pub mod remote;
pub mod seed;

pub use local::LocalCatalogStore;
pub use remote::RemoteCatalogStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product {0} not found")]
    NotFound(String),

    #[error("Catalog storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog data is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Remote table error: {0}")]
    Remote(#[from] sea_orm::DbErr),

    #[error("Remote row {id} is malformed: {reason}")]
    InvalidRow { id: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Local,
    Remote,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    fn kind(&self) -> StoreKind;

    /// Every persisted product, in catalog order.
    async fn load_all(&self) -> StoreResult<Vec<Product>>;

    /// Assigns an id and persists the product, returning the stored row.
    async fn create(&self, product: NewProduct) -> StoreResult<Product>;

    /// Replaces the mutable fields of the product with the same id.
    async fn update(&self, product: Product) -> StoreResult<Product>;

    async fn delete(&self, id: &str) -> StoreResult<()>;
}

pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Opens the configured backing store. The local slot is seeded with the
/// demonstration catalog on first run when `seed_defaults` is set; the remote
/// table is never seeded.
pub async fn open_store(
    backend: &StoreBackend,
    seed_defaults: bool,
) -> anyhow::Result<Arc<dyn CatalogStore>> {
    match backend {
        StoreBackend::Local { path } => {
            tracing::info!(path = %path.display(), "using local catalog slot");
            let store = LocalCatalogStore::new(path.clone());
            if seed_defaults {
                let products = store.seed_defaults().await?;
                tracing::info!(count = products.len(), "local catalog ready");
            }
            Ok(Arc::new(store))
        }
        StoreBackend::Remote { database_url } => {
            tracing::info!("using remote products table");
            let conn = create_orm_conn(database_url).await?;
            run_migrations(&conn, MIGRATIONS_DIR).await?;
            Ok(Arc::new(RemoteCatalogStore::new(conn)))
        }
    }
}
