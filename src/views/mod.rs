pub mod catalog;
pub mod detail;

pub use catalog::{CatalogMode, CatalogView, DeleteIntent, PendingDelete, ProductCard};
pub use detail::{Carousel, ProductDetail};
