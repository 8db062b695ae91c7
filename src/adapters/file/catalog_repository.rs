use crate::ports::catalog_repository::{CatalogRepository as CatalogRepositoryTrait, Result, Snapshot};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Description of a file-backed repository, used for startup logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub kind: &'static str,
    pub path: PathBuf,
    pub exists: bool,
}

/// JSON file implementation of CatalogRepository
///
/// The whole snapshot is serialized first, written to a sibling temporary
/// file and then renamed over the target, so readers never see a partial
/// document. Each call opens and releases its own file handle.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    path: PathBuf,
}

impl CatalogRepository {
    /// Open the repository at `path`, creating it with an empty snapshot
    /// (and any missing parent directories) if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self { path: path.into() };

        if !repo.exists() {
            if let Some(parent) = repo.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            repo.write_snapshot(&Snapshot::empty())?;
            tracing::debug!(path = %repo.path.display(), "Initialized empty catalog file");
        }

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn info(&self) -> RepositoryInfo {
        RepositoryInfo {
            kind: "file",
            path: self.path.clone(),
            exists: self.exists(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();

        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            // 一時ファイルを残さない
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        Ok(())
    }
}

impl CatalogRepositoryTrait for CatalogRepository {
    fn save_all(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.write_snapshot(snapshot)?;
        tracing::debug!(
            path = %self.path.display(),
            books = snapshot.books.len(),
            loans = snapshot.loans.len(),
            "Saved catalog snapshot"
        );
        Ok(())
    }

    fn load_all(&self) -> Option<Snapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read catalog file: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to decode catalog file: {}", e);
                None
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.write_snapshot(&Snapshot::empty())
    }
}
