pub mod images;
pub mod products;
