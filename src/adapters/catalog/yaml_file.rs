//! YAML catalog adapter reading from the filesystem.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::{CatalogDocument, StrategyCatalog};
use crate::ports::{SourceError, StrategySource};

/// Parses a YAML catalog document and validates it.
///
/// Syntax and schema problems map to `SourceError::Parse`; domain invariant
/// violations (duplicate ids, empty leverage) map to `SourceError::Invalid`.
pub fn parse_catalog_yaml(content: &str) -> Result<StrategyCatalog, SourceError> {
    let document: CatalogDocument =
        serde_yaml::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))?;
    Ok(StrategyCatalog::try_from(document)?)
}

/// Catalog stored as a YAML file: `{ strategies: [...] }`.
pub struct YamlFileStrategySource {
    path: PathBuf,
}

impl YamlFileStrategySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StrategySource for YamlFileStrategySource {
    async fn load(&self) -> Result<StrategyCatalog, SourceError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.display().to_string())
            } else {
                SourceError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            }
        })?;

        let catalog = parse_catalog_yaml(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            strategies = catalog.len(),
            "parsed catalog file"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
