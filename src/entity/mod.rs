pub mod products;

pub use products::Entity as Products;
