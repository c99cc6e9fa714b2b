use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use crate::{
    error::{AppError, AppResult},
    form::{ProductForm, SaveIntent},
    models::Product,
    store::{CatalogStore, StoreError, StoreKind},
    views::{CatalogMode, CatalogView, DeleteIntent, PendingDelete, ProductDetail},
};

/// Owns the injected store and applies the intents emitted by the form and
/// the catalog view.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

/// Marks a product id as having a write in progress until dropped.
struct WriteGuard {
    ids: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        ids.remove(&self.id);
    }
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store.kind()
    }

    pub async fn catalog(&self, mode: CatalogMode) -> AppResult<CatalogView> {
        let products = self
            .store
            .load_all()
            .await
            .map_err(|err| self.report("load_all", None, err))?;
        Ok(CatalogView::new(products, mode))
    }

    /// Storefront detail for an available product.
    pub async fn product_detail(&self, id: &str) -> AppResult<ProductDetail> {
        let view = self.catalog(CatalogMode::Storefront).await?;
        let product = view.select(id).cloned().ok_or(AppError::NotFound)?;
        Ok(ProductDetail::new(product))
    }

    /// Draft pre-populated from the stored product, for the admin editor.
    pub async fn edit_form(&self, id: &str) -> AppResult<ProductForm> {
        self.catalog(CatalogMode::Admin)
            .await?
            .request_edit(id)
            .ok_or(AppError::NotFound)
    }

    pub async fn request_delete(&self, id: &str) -> AppResult<PendingDelete> {
        self.catalog(CatalogMode::Admin)
            .await?
            .request_delete(id)
            .ok_or(AppError::NotFound)
    }

    pub async fn submit(&self, form: &ProductForm) -> AppResult<Product> {
        let intent = form.submit()?;
        self.save(intent).await
    }

    pub async fn save(&self, intent: SaveIntent) -> AppResult<Product> {
        match intent {
            SaveIntent::Create(draft) => {
                let created = self
                    .store
                    .create(draft)
                    .await
                    .map_err(|err| self.report("create", None, err))?;
                tracing::info!(product_id = %created.id, "product created");
                Ok(created)
            }
            SaveIntent::Update(product) => {
                let _guard = self.begin_write(&product.id)?;
                let id = product.id.clone();
                let updated = self
                    .store
                    .update(product)
                    .await
                    .map_err(|err| self.report("update", Some(&id), err))?;
                tracing::info!(product_id = %updated.id, "product updated");
                Ok(updated)
            }
        }
    }

    pub async fn delete(&self, intent: DeleteIntent) -> AppResult<()> {
        let _guard = self.begin_write(&intent.id)?;
        self.store
            .delete(&intent.id)
            .await
            .map_err(|err| self.report("delete", Some(&intent.id), err))?;
        tracing::info!(product_id = %intent.id, "product deleted");
        Ok(())
    }

    fn begin_write(&self, id: &str) -> AppResult<WriteGuard> {
        let mut ids = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id.to_string()) {
            tracing::warn!(product_id = %id, "rejected overlapping write");
            return Err(AppError::Conflict("Product has a pending write".into()));
        }
        Ok(WriteGuard {
            ids: Arc::clone(&self.in_flight),
            id: id.to_string(),
        })
    }

    fn report(&self, operation: &str, id: Option<&str>, err: StoreError) -> AppError {
        match &err {
            StoreError::NotFound(_) => {
                tracing::debug!(operation, product_id = ?id, "product not found");
            }
            _ => {
                tracing::error!(
                    operation,
                    store = ?self.store.kind(),
                    product_id = ?id,
                    error = %err,
                    "catalog store call failed"
                );
            }
        }
        err.into()
    }
}
