use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    contact::{ContactConfig, contact_link},
    models::{PLACEHOLDER_IMAGE, Product},
};

/// Index into a product's image list, one image shown at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps straight to `index`. Positions past the end are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    carousel: Carousel,
}

impl ProductDetail {
    pub fn new(product: Product) -> Self {
        let carousel = Carousel::new(product.images.len());
        Self { product, carousel }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn current_image(&self) -> &str {
        self.product
            .images
            .get(self.carousel.current())
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn contact_link(&self, config: &ContactConfig) -> String {
        contact_link(config, &self.product)
    }
}
