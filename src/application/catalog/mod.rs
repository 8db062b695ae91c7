mod catalog_service;
mod errors;

pub use catalog_service::{CatalogDependencies, CatalogService};
pub use errors::{CatalogError, ErrorKind, Result};
