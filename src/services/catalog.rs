use crate::models::StorageSpace;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading the space catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of storage spaces for matching
///
/// Implementations hand out read-only snapshots; callers copy before mutating.
pub trait SpaceCatalog: Send + Sync {
    /// Every listing in the catalog
    fn all_spaces(&self) -> &[StorageSpace];

    /// Listings that can currently be booked
    fn available_spaces(&self) -> &[StorageSpace];
}

/// Catalog loaded once at startup and never mutated afterwards
///
/// Cloning is cheap and shares the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    spaces: Arc<[StorageSpace]>,
}

impl StaticCatalog {
    pub fn from_spaces(spaces: Vec<StorageSpace>) -> Self {
        for space in &spaces {
            if !space.is_usable() {
                tracing::warn!(
                    "Storage space {} has missing or non-positive dimensions and will never match",
                    space.id
                );
            }
            if !space.has_valid_price() {
                tracing::warn!(
                    "Storage space {} has a negative monthly price ({})",
                    space.id,
                    space.price_per_month
                );
            }
        }

        Self {
            spaces: spaces.into(),
        }
    }

    pub fn empty() -> Self {
        Self {
            spaces: Arc::from(Vec::new()),
        }
    }

    /// Parse a JSON array of storage spaces
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let spaces: Vec<StorageSpace> = serde_json::from_str(json)?;
        Ok(Self::from_spaces(spaces))
    }

    /// Load a JSON listing file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} storage spaces from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpaceCatalog for StaticCatalog {
    fn all_spaces(&self) -> &[StorageSpace] {
        &self.spaces
    }

    fn available_spaces(&self) -> &[StorageSpace] {
        // No bookings are persisted, so every listing stays available
        self.all_spaces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LISTINGS: &str = r#"[
        {"id": "space-1", "type": "garage", "length": 20.0, "width": 10.0, "height": 8.0,
         "pricePerMonth": 150.0, "location": "Downtown", "features": ["covered"]},
        {"id": "space-2", "type": "carport", "length": 18.0, "width": 9.0, "height": 7.0,
         "pricePerMonth": 100.0, "location": "Midtown"}
    ]"#;

    #[test]
    fn test_from_json_str() {
        let catalog = StaticCatalog::from_json_str(LISTINGS).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all_spaces()[0].id, "space-1");
        assert_eq!(catalog.available_spaces().len(), catalog.all_spaces().len());
        assert!(catalog.all_spaces()[1].features.is_none());
    }

    #[test]
    fn test_invalid_json() {
        let err = StaticCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_unusable_space_is_kept() {
        let catalog = StaticCatalog::from_json_str(
            r#"[{"id": "broken", "type": "garage", "length": 20.0, "pricePerMonth": 10.0}]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.all_spaces()[0].is_usable());
    }

    #[test]
    fn test_negative_price_is_not_a_dimension_problem() {
        let catalog = StaticCatalog::from_json_str(
            r#"[{"id": "refund", "type": "garage", "length": 20.0, "width": 10.0,
                 "height": 8.0, "pricePerMonth": -5.0}]"#,
        )
        .unwrap();

        let space = &catalog.all_spaces()[0];
        assert!(space.is_usable());
        assert!(!space.has_valid_price());
    }

    #[test]
    fn test_clones_share_snapshot() {
        let catalog = StaticCatalog::from_json_str(LISTINGS).unwrap();
        let clone = catalog.clone();

        assert!(std::ptr::eq(catalog.all_spaces(), clone.all_spaces()));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LISTINGS.as_bytes()).unwrap();

        let catalog = StaticCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = StaticCatalog::load("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
