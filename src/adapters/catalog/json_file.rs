//! Implements CatalogPort by reading a JSON data file.
//!
//! Same shape as the raw-data view (`Community` serialized with serde_json). The file is
//! validated as a whole; a single bad record rejects the file.

use crate::domain::{Community, DomainError};
use crate::ports::CatalogPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// JSON file-based community data.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(json: &str) -> Result<Community, DomainError> {
        let community: Community =
            serde_json::from_str(json).map_err(|e| DomainError::Catalog(e.to_string()))?;
        community.validate()?;
        Ok(community)
    }
}

#[async_trait::async_trait]
impl CatalogPort for JsonFileCatalog {
    async fn load(&self) -> Result<Community, DomainError> {
        let json = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Catalog(format!("read {}: {}", self.path.display(), e))
        })?;
        let community = Self::parse(&json)?;
        info!(
            path = %self.path.display(),
            locations = community.locations.len(),
            news = community.news.len(),
            "loaded community data file"
        );
        Ok(community)
    }
}
