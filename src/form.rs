//! Create/edit form for a single product draft.

use thiserror::Error;

use crate::{
    images::ImageCollection,
    models::{NewProduct, Product, format_price},
};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please fill in all fields and add at least one image")]
    MissingFields(Vec<&'static str>),

    #[error("Price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// What the form hands to its owner once a draft passes validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveIntent {
    Create(NewProduct),
    Update(Product),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    mode: FormMode,
    pub name: String,
    pub price: String,
    pub description: String,
    pub images: ImageCollection,
    pub available: bool,
}

impl ProductForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            images: ImageCollection::default(),
            available: true,
        }
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit {
                id: product.id.clone(),
            },
            name: product.name.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            images: ImageCollection::new(product.images.clone()),
            available: product.available,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Validates the draft. On failure the draft is left untouched so it can
    /// be corrected and submitted again.
    pub fn submit(&self) -> Result<SaveIntent, FormError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.price.trim().is_empty() {
            missing.push("price");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.images.is_empty() {
            missing.push("images");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let price = parse_price(&self.price)?;
        let draft = NewProduct {
            name: self.name.clone(),
            price,
            description: self.description.clone(),
            images: self.images.images().to_vec(),
            available: self.available,
        };

        Ok(match &self.mode {
            FormMode::Create => SaveIntent::Create(draft),
            FormMode::Edit { id } => SaveIntent::Update(Product::from_new(id.clone(), draft)),
        })
    }

    /// Throws the draft away.
    pub fn cancel(self) {}
}

fn parse_price(text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(FormError::InvalidPrice(trimmed.to_string())),
    }
}
