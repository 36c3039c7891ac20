// Service exports
pub mod catalog;

pub use catalog::{SpaceCatalog, StaticCatalog, CatalogError};
