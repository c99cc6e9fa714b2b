use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{form::ProductForm, models::Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMode {
    /// Public listing: available products only, click selects for detail.
    Storefront,
    /// Management listing: everything, with edit and delete.
    Admin,
}

/// One grid entry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub cover_image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            available: product.available,
            cover_image: product.cover_image().to_string(),
        }
    }
}

/// A delete that is waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingDelete {
    id: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn confirm(self) -> DeleteIntent {
        DeleteIntent { id: self.id }
    }

    pub fn cancel(self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntent {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    mode: CatalogMode,
    products: Vec<Product>,
}

impl CatalogView {
    pub fn new(products: Vec<Product>, mode: CatalogMode) -> Self {
        let products = match mode {
            CatalogMode::Storefront => products.into_iter().filter(|p| p.available).collect(),
            CatalogMode::Admin => products,
        };
        Self { mode, products }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn cards(&self) -> Vec<ProductCard> {
        self.products.iter().map(ProductCard::from).collect()
    }

    fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn select(&self, id: &str) -> Option<&Product> {
        match self.mode {
            CatalogMode::Storefront => self.find(id),
            CatalogMode::Admin => None,
        }
    }

    pub fn request_edit(&self, id: &str) -> Option<ProductForm> {
        match self.mode {
            CatalogMode::Admin => self.find(id).map(ProductForm::edit),
            CatalogMode::Storefront => None,
        }
    }

    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        match self.mode {
            CatalogMode::Admin => self.find(id).map(|p| PendingDelete { id: p.id.clone() }),
            CatalogMode::Storefront => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_IMAGE;

    fn product(id: &str, available: bool, images: &[&str]) -> Product {
        Product {
            id: id.into(),
            name: format!("Dress {id}"),
            price: 10.0,
            description: "d".into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            available,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", true, &["a"]),
            product("2", false, &["b"]),
            product("3", true, &[]),
        ]
    }

    #[test]
    fn storefront_hides_unavailable_products() {
        let view = CatalogView::new(catalog(), CatalogMode::Storefront);
        let ids: Vec<_> = view.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(view.select("2").is_none());
        assert_eq!(view.select("3").map(|p| p.id.as_str()), Some("3"));
    }

    #[test]
    fn admin_sees_everything_but_cannot_select() {
        let view = CatalogView::new(catalog(), CatalogMode::Admin);
        assert_eq!(view.len(), 3);
        assert!(view.select("1").is_none());
    }

    #[test]
    fn edit_and_delete_are_admin_only() {
        let storefront = CatalogView::new(catalog(), CatalogMode::Storefront);
        assert!(storefront.request_edit("1").is_none());
        assert!(storefront.request_delete("1").is_none());

        let admin = CatalogView::new(catalog(), CatalogMode::Admin);
        let form = admin.request_edit("2").unwrap();
        assert_eq!(form.name, "Dress 2");
        let pending = admin.request_delete("2").unwrap();
        assert_eq!(pending.id(), "2");
        assert_eq!(pending.confirm(), DeleteIntent { id: "2".into() });
        assert!(admin.request_delete("missing").is_none());
    }

    #[test]
    fn cards_fall_back_to_placeholder() {
        let view = CatalogView::new(catalog(), CatalogMode::Admin);
        let covers: Vec<_> = view.cards().into_iter().map(|c| c.cover_image).collect();
        assert_eq!(covers, ["a", "b", PLACEHOLDER_IMAGE]);
    }
}
