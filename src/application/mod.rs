pub mod catalog;
pub mod notifier;
pub mod search;

pub use catalog::{CatalogDependencies, CatalogError, CatalogService, ErrorKind};
pub use notifier::Notifier;
pub use search::{SearchEngine, SearchError, SearchStrategy};
