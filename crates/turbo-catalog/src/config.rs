//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::search::BothAvailability;

/// Products shown per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Catalog engine configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page. Must be at least one.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page links shown by the pager.
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Behaviour when both availability values are selected.
    #[serde(default)]
    pub both_availability: BothAvailability,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible_pages() -> usize {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
            both_availability: BothAvailability::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str::<Self>(&content)
                .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            toml::from_str::<Self>(&content)?
        };

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            page_size = config.page_size,
            "loaded catalog config"
        );
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the both-availability policy.
    pub fn with_both_availability(mut self, policy: BothAvailability) -> Self {
        self.both_availability = policy;
        self
    }
}
