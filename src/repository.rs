//! Catalog repositories - where story catalogs come from
//!
//! The traversal engine itself only ever sees a constructed
//! [`StoryCatalog`]; these abstractions exist so hosts can pick catalogs by
//! id. The in-memory repository serves the compiled-in story; the
//! file-system repository reads JSON catalog documents, revalidating them
//! through the catalog constructor on every load.

use crate::content;
use crate::types::catalog::{CatalogError, StoryCatalog};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Unique identifier for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(String);

impl CatalogId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CatalogId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CatalogId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contract for catalog storage and retrieval, independent of where the
/// catalogs live.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load a catalog by its id.
    async fn load_catalog(&self, id: &CatalogId) -> Result<StoryCatalog, RepositoryError>;

    /// Check whether a catalog exists.
    async fn catalog_exists(&self, id: &CatalogId) -> Result<bool, RepositoryError>;

    /// List all available catalog ids.
    async fn list_catalogs(&self) -> Result<Vec<CatalogId>, RepositoryError>;
}

/// Repository errors.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("catalog not found: {id}")]
    NotFound { id: CatalogId },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("invalid catalog document: {message}")]
    InvalidFormat { message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// In-memory repository of pre-registered catalogs.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    catalogs: HashMap<CatalogId, StoryCatalog>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the built-in story under the id `love-story`.
    pub fn with_builtin() -> Self {
        let mut repository = Self::new();
        repository.register(CatalogId::from("love-story"), content::love_story());
        repository
    }

    pub fn register(&mut self, id: CatalogId, catalog: StoryCatalog) {
        self.catalogs.insert(id, catalog);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn load_catalog(&self, id: &CatalogId) -> Result<StoryCatalog, RepositoryError> {
        self.catalogs
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound { id: id.clone() })
    }

    async fn catalog_exists(&self, id: &CatalogId) -> Result<bool, RepositoryError> {
        Ok(self.catalogs.contains_key(id))
    }

    async fn list_catalogs(&self) -> Result<Vec<CatalogId>, RepositoryError> {
        Ok(self.catalogs.keys().cloned().collect())
    }
}

/// File-system repository reading `<base>/<id>.json` catalog documents.
pub struct FileCatalogRepository {
    base_path: PathBuf,
}

impl FileCatalogRepository {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn catalog_path(&self, id: &CatalogId) -> PathBuf {
        self.base_path.join(format!("{}.json", id.as_str()))
    }
}

#[async_trait]
impl CatalogRepository for FileCatalogRepository {
    async fn load_catalog(&self, id: &CatalogId) -> Result<StoryCatalog, RepositoryError> {
        let path = self.catalog_path(id);

        if !path.exists() {
            return Err(RepositoryError::NotFound { id: id.clone() });
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::Io {
                message: format!("failed to read catalog file {}: {e}", path.display()),
            })?;

        // Deserialization funnels through StoryCatalog::new, so a document
        // that parses is also a document that validates.
        serde_json::from_str(&content).map_err(|e| RepositoryError::InvalidFormat {
            message: format!("failed to parse {}: {e}", path.display()),
        })
    }

    async fn catalog_exists(&self, id: &CatalogId) -> Result<bool, RepositoryError> {
        Ok(self.catalog_path(id).exists())
    }

    async fn list_catalogs(&self) -> Result<Vec<CatalogId>, RepositoryError> {
        let mut catalogs = Vec::new();

        let mut entries =
            tokio::fs::read_dir(&self.base_path)
                .await
                .map_err(|e| RepositoryError::Io {
                    message: format!(
                        "failed to read directory {}: {e}",
                        self.base_path.display()
                    ),
                })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| RepositoryError::Io {
            message: format!("failed to read directory entry: {e}"),
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                catalogs.push(CatalogId::from(stem));
            }
        }

        Ok(catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_repository_serves_the_builtin_story() {
        let repository = InMemoryCatalogRepository::with_builtin();
        let id = CatalogId::from("love-story");

        assert!(repository.catalog_exists(&id).await.unwrap());
        let catalog = repository.load_catalog(&id).await.unwrap();
        assert_eq!(catalog.title(), "The Equation of Love");
        assert_eq!(repository.list_catalogs().await.unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn in_memory_repository_reports_missing_catalogs() {
        let repository = InMemoryCatalogRepository::new();
        let err = repository
            .load_catalog(&CatalogId::from("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn file_repository_loads_and_validates_documents() {
        let dir = std::env::temp_dir().join(format!("enredo-repo-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let catalog = crate::content::love_story();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        tokio::fs::write(dir.join("love-story.json"), json)
            .await
            .unwrap();

        let repository = FileCatalogRepository::new(&dir);
        let id = CatalogId::from("love-story");
        assert!(repository.catalog_exists(&id).await.unwrap());

        let loaded = repository.load_catalog(&id).await.unwrap();
        assert_eq!(loaded, catalog);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn file_repository_rejects_invalid_documents() {
        let dir = std::env::temp_dir().join(format!("enredo-bad-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        // Well-formed JSON, but the gate consults a tag nothing produces.
        let doc = r#"{
            "title": "broken",
            "scenes": [ { "id": 0, "body": "gated", "requires": "ignored" } ]
        }"#;
        tokio::fs::write(dir.join("broken.json"), doc).await.unwrap();

        let repository = FileCatalogRepository::new(&dir);
        let err = repository
            .load_catalog(&CatalogId::from("broken"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidFormat { .. }));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
