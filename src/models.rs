use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shown wherever a product has no images of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1566479179817-0e2f24d2a2b6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// URLs or `data:` payloads; the first entry is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// A product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Product {
    pub fn from_new(id: impl Into<String>, new: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            price: new.price,
            description: new.description,
            images: new.images,
            available: new.available,
        }
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Renders a price the way a browser prints a number: `299`, `49.99`,
/// and exponent form below `1e-6` or from `1e21` up (`1e-7`, `1e+21`).
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if magnitude != 0.0 && (magnitude < 1e-6 || magnitude >= 1e21) {
        let formatted = format!("{price:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{price}")
    }
}
