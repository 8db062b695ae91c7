use crate::adapters::{file::FileCatalogRepository, memory::InMemoryCatalogRepository};
use crate::ports::{CatalogRepository, RepositoryError};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_STORAGE: &str = "LIBRARY_STORAGE";
pub const ENV_DATA_PATH: &str = "LIBRARY_DATA_PATH";
pub const ENV_NOTIFICATION_LOG: &str = "LIBRARY_NOTIFICATION_LOG";

const DEFAULT_DATA_PATH: &str = "library.json";
const DEFAULT_NOTIFICATION_LOG: &str = "notifications.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage kind '{0}' (expected 'file' or 'memory')")]
    UnknownStorage(String),
}

/// 永続化の方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageKind::File),
            "memory" => Ok(StorageKind::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

/// 実行時の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub storage: StorageKind,
    pub data_path: PathBuf,
    pub notification_log: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            notification_log: PathBuf::from(DEFAULT_NOTIFICATION_LOG),
        }
    }
}

impl CatalogConfig {
    /// 環境変数から読み込む。未設定の項目は既定値
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage = match lookup(ENV_STORAGE) {
            Some(value) => value.parse::<StorageKind>()?,
            None => defaults.storage,
        };

        Ok(Self {
            storage,
            data_path: lookup(ENV_DATA_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            notification_log: lookup(ENV_NOTIFICATION_LOG)
                .map(PathBuf::from)
                .unwrap_or(defaults.notification_log),
        })
    }

    /// 設定に従ってリポジトリを生成する
    pub fn open_repository(&self) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
        match self.storage {
            StorageKind::File => {
                let repo = FileCatalogRepository::open(&self.data_path)?;
                let info = repo.info();
                tracing::info!(kind = info.kind, path = %info.path.display(), "Using file repository");
                Ok(Box::new(repo))
            }
            StorageKind::Memory => {
                tracing::info!(kind = "memory", "Using in-memory repository");
                Ok(Box::new(InMemoryCatalogRepository::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.storage, StorageKind::File);
        assert_eq!(config.data_path, PathBuf::from("library.json"));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (ENV_STORAGE, "Memory"),
            (ENV_DATA_PATH, "/tmp/catalog.json"),
            (ENV_NOTIFICATION_LOG, "/tmp/notify.log"),
        ]))
        .unwrap();

        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.data_path, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(config.notification_log, PathBuf::from("/tmp/notify.log"));
    }

    #[test]
    fn test_unknown_storage() {
        let err = CatalogConfig::from_lookup(lookup_from(&[(ENV_STORAGE, "postgres")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownStorage("postgres".to_string()));
    }

    #[test]
    fn test_open_file_repository() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig {
            storage: StorageKind::File,
            data_path: dir.path().join("library.json"),
            notification_log: dir.path().join("notifications.log"),
        };

        let repo = config.open_repository().unwrap();

        assert!(config.data_path.exists());
        assert!(repo.load_all().is_some());
    }
}
