use catalog_storefront::{
    config::DEFAULT_CATALOG_PATH,
    store::{LocalCatalogStore, seed::sample_products},
};

/// Writes the demonstration catalog into the local slot.
/// Pass `--force` to overwrite a catalog that already exists.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let path = std::env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let force = std::env::args().any(|arg| arg == "--force");

    let store = LocalCatalogStore::new(path);
    let products = if force {
        let products = sample_products();
        store.save_all(&products).await?;
        products
    } else {
        store.seed_defaults().await?
    };

    println!(
        "Seed completed. {} products in {}",
        products.len(),
        store.path().display()
    );
    Ok(())
}
