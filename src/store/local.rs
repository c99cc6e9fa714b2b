use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use super::{CatalogStore, StoreError, StoreKind, StoreResult, generate_product_id, seed};
use crate::models::{NewProduct, Product};

/// The whole catalog serialized into a single JSON file.
pub struct LocalCatalogStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl LocalCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the slot with `products`.
    pub async fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_slot(products).await
    }

    /// Writes the demonstration catalog if nothing has been persisted yet and
    /// returns whatever the slot holds afterwards.
    pub async fn seed_defaults(&self) -> StoreResult<Vec<Product>> {
        let _guard = self.write_lock.lock().await;
        if let Some(existing) = self.read_slot().await? {
            return Ok(existing);
        }
        let products = seed::sample_products();
        debug!(count = products.len(), path = %self.path.display(), "seeding catalog slot");
        self.write_slot(&products).await?;
        Ok(products)
    }

    async fn read_slot(&self) -> StoreResult<Option<Vec<Product>>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_slot(&self, products: &[Product]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(products)?;
        // Write then rename so readers never see a half-written slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(count = products.len(), path = %self.path.display(), "catalog slot written");
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for LocalCatalogStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Local
    }

    async fn load_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read_slot().await?.unwrap_or_default())
    }

    async fn create(&self, product: NewProduct) -> StoreResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.read_slot().await?.unwrap_or_default();
        let created = Product::from_new(generate_product_id(), product);
        products.push(created.clone());
        self.write_slot(&products).await?;
        Ok(created)
    }

    async fn update(&self, product: Product) -> StoreResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.read_slot().await?.unwrap_or_default();
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::NotFound(product.id.clone()))?;
        *slot = product.clone();
        self.write_slot(&products).await?;
        Ok(product)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.read_slot().await?.unwrap_or_default();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.write_slot(&products).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LocalCatalogStore {
        LocalCatalogStore::new(dir.path().join("nested").join("fashionProducts.json"))
    }

    fn draft(name: &str) -> NewProduct {
        NewProduct {
            name: name.into(),
            price: 49.99,
            description: "desc".into(),
            images: vec!["u1".into()],
            available: true,
        }
    }

    #[tokio::test]
    async fn missing_slot_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let products = seed::sample_products();

        store.save_all(&products).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), products);
    }

    #[tokio::test]
    async fn seeding_only_happens_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let seeded = store.seed_defaults().await.unwrap();
        assert_eq!(seeded.len(), 5);

        store.delete("1").await.unwrap();
        let reseeded = store.seed_defaults().await.unwrap();
        assert_eq!(reseeded.len(), 4);
    }

    #[tokio::test]
    async fn empty_saved_catalog_is_not_reseeded() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save_all(&[]).await.unwrap();
        assert!(store.seed_defaults().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_update_delete_rewrite_the_slot() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let first = store.create(draft("First")).await.unwrap();
        let second = store.create(draft("Second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let mut renamed = second.clone();
        renamed.name = "Second, renamed".into();
        store.update(renamed.clone()).await.unwrap();

        store.delete(&first.id).await.unwrap();

        let reopened = LocalCatalogStore::new(store.path());
        assert_eq!(reopened.load_all().await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let products = seed::sample_products();
        store.save_all(&products).await.unwrap();

        store.delete("3").await.unwrap();

        let expected: Vec<_> = products.into_iter().filter(|p| p.id != "3").collect();
        assert_eq!(store.load_all().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save_all(&seed::sample_products()).await.unwrap();

        let ghost = Product::from_new("ghost", draft("Ghost"));
        assert!(matches!(store.update(ghost).await, Err(StoreError::NotFound(id)) if id == "ghost"));
        assert!(matches!(store.delete("ghost").await, Err(StoreError::NotFound(_))));
        assert_eq!(store.load_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn malformed_slot_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fashionProducts.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = LocalCatalogStore::new(path);
        assert!(matches!(store.load_all().await, Err(StoreError::Corrupt(_))));
    }
}
