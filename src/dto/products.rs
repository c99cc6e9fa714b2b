use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    contact::ContactConfig,
    form::ProductForm,
    images::ImageCollection,
    models::Product,
    views::{Carousel, ProductCard, ProductDetail},
};

/// Admin form submission. `price` is raw text and is parsed by the form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductFormRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl ProductFormRequest {
    /// Copies the submitted fields over `form`. Image references go through
    /// the editor, so blanks and duplicates are dropped.
    pub fn apply_to(self, form: &mut ProductForm) {
        form.name = self.name;
        form.price = self.price;
        form.description = self.description;
        form.available = self.available;
        let mut images = ImageCollection::default();
        for image in &self.images {
            images.add_from_url(image);
        }
        form.images = images;
    }
}

/// Draft values shown when the admin opens the editor.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductFormState {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub images: Vec<String>,
    pub available: bool,
}

impl ProductFormState {
    pub fn new(id: impl Into<String>, form: &ProductForm) -> Self {
        Self {
            id: id.into(),
            name: form.name.clone(),
            price: form.price.clone(),
            description: form.description.clone(),
            images: form.images.images().to_vec(),
            available: form.available,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductCardList {
    #[schema(value_type = Vec<ProductCard>)]
    pub items: Vec<ProductCard>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DetailQuery {
    /// Carousel position to open at.
    pub image: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetailResponse {
    pub product: Product,
    pub carousel: Carousel,
    pub current_image: String,
    pub contact_url: String,
}

impl ProductDetailResponse {
    pub fn new(detail: &ProductDetail, contact: &ContactConfig) -> Self {
        Self {
            product: detail.product().clone(),
            carousel: *detail.carousel(),
            current_image: detail.current_image().to_string(),
            contact_url: detail.contact_link(contact),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactLinkResponse {
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}
