pub mod catalog_repository;

// パブリックに型を再エクスポート
pub use catalog_repository::{CatalogRepository as FileCatalogRepository, RepositoryInfo};
