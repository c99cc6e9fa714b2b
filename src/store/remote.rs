use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use super::{CatalogStore, StoreError, StoreKind, StoreResult, generate_product_id};
use crate::{
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    models::{NewProduct, Product},
};

/// Catalog kept in a hosted `products` table.
pub struct RemoteCatalogStore {
    conn: DatabaseConnection,
}

impl RemoteCatalogStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CatalogStore for RemoteCatalogStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Remote
    }

    async fn load_all(&self) -> StoreResult<Vec<Product>> {
        Products::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect()
    }

    async fn create(&self, product: NewProduct) -> StoreResult<Product> {
        let active = ActiveModel {
            id: Set(generate_product_id()),
            name: Set(product.name),
            price: Set(product.price),
            description: Set(product.description),
            images: Set(product.images.into()),
            available: Set(product.available),
            created_at: Set(Utc::now().into()),
        };
        let row = active.insert(&self.conn).await?;
        debug!(product_id = %row.id, "inserted product row");
        product_from_entity(row)
    }

    async fn update(&self, product: Product) -> StoreResult<Product> {
        let id = product.id.clone();
        let active = ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            price: Set(product.price),
            description: Set(product.description),
            images: Set(product.images.into()),
            available: Set(product.available),
            created_at: NotSet,
        };
        let row = match active.update(&self.conn).await {
            Ok(row) => row,
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                return Err(StoreError::NotFound(id));
            }
            Err(err) => return Err(err.into()),
        };
        debug!(product_id = %row.id, "updated product row");
        product_from_entity(row)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = Products::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!(product_id = %id, "deleted product row");
        Ok(())
    }
}

fn product_from_entity(model: ProductModel) -> StoreResult<Product> {
    let images: Vec<String> =
        serde_json::from_value(model.images).map_err(|err| StoreError::InvalidRow {
            id: model.id.clone(),
            reason: format!("images: {err}"),
        })?;
    Ok(Product {
        id: model.id,
        name: model.name,
        price: model.price,
        description: model.description,
        images,
        available: model.available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::json;

    fn row(id: &str, name: &str) -> ProductModel {
        ProductModel {
            id: id.into(),
            name: name.into(),
            price: 49.99,
            description: "desc".into(),
            images: json!(["u1", "u2"]),
            available: true,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn load_all_maps_rows_in_order() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("a", "First"), row("b", "Second")]])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        let products = store.load_all().await.unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(products[0].images, ["u1", "u2"]);
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("generated", "Test Dress")]])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        let created = store
            .create(NewProduct {
                name: "Test Dress".into(),
                price: 49.99,
                description: "desc".into(),
                images: vec!["u1".into(), "u2".into()],
                available: true,
            })
            .await
            .unwrap();

        assert_eq!(created.id, "generated");
        assert_eq!(created.price, 49.99);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<ProductModel>::new()])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        let missing = Product {
            id: "gone".into(),
            name: "Gone".into(),
            price: 1.0,
            description: "d".into(),
            images: vec![],
            available: true,
        };
        assert!(matches!(store.update(missing).await, Err(StoreError::NotFound(id)) if id == "gone"));
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        store.delete("a").await.unwrap();
        assert!(matches!(store.delete("a").await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn malformed_images_column_is_rejected() {
        let mut bad = row("x", "Broken");
        bad.images = json!({"cover": "u1"});
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bad]])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        assert!(matches!(
            store.load_all().await,
            Err(StoreError::InvalidRow { id, .. }) if id == "x"
        ));
    }

    #[tokio::test]
    async fn backend_rejections_are_passed_up() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([
                DbErr::Custom("insert rejected".into()),
                DbErr::Custom("select rejected".into()),
            ])
            .append_exec_errors([DbErr::Custom("delete rejected".into())])
            .into_connection();
        let store = RemoteCatalogStore::new(conn);

        let created = store
            .create(NewProduct {
                name: "Test Dress".into(),
                price: 49.99,
                description: "desc".into(),
                images: vec!["u1".into()],
                available: true,
            })
            .await;
        assert!(matches!(created, Err(StoreError::Remote(_))));
        assert!(matches!(store.load_all().await, Err(StoreError::Remote(_))));
        assert!(matches!(store.delete("a").await, Err(StoreError::Remote(_))));
    }
}
