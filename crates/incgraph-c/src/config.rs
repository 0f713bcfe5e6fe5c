//! Configuration for scanning a source tree.

use crate::error::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for which files a scan picks up and how it walks the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions treated as sources or headers (default: c, h, cpp, hpp)
    pub extensions: Vec<String>,

    /// Directory names pruned from the walk
    pub exclude_dirs: Vec<String>,

    /// Follow symbolic links while walking
    pub follow_links: bool,

    /// Maximum file size in bytes; larger files contribute no includes
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                "c".to_string(),
                "h".to_string(),
                "cpp".to_string(),
                "hpp".to_string(),
            ],
            exclude_dirs: vec![".git".to_string()],
            follow_links: false,
            max_file_size: 10 * 1024 * 1024, // 10MB default
        }
    }
}

impl ScanConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ConfigIo`] if the file can't be read,
    /// [`ResolveError::ConfigParse`] if it isn't valid JSON and
    /// [`ResolveError::InvalidConfig`] if it fails [`validate`](Self::validate).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ResolveError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| ResolveError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ResolveError::InvalidConfig(
                "extensions cannot be empty".to_string(),
            ));
        }

        if self
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ResolveError::InvalidConfig(
                "extensions cannot contain an empty entry".to_string(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(ResolveError::InvalidConfig(
                "max_file_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if a file extension should be scanned.
    ///
    /// Leading dots are ignored on both sides, so `".h"` and `"h"` are equivalent.
    pub fn should_scan_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.') == extension)
    }

    /// Check if a file should be scanned, judging by its extension.
    pub fn should_scan_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.should_scan_extension(ext))
    }

    /// Check if a directory should be skipped during the walk
    pub fn should_exclude_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|excluded| excluded == dir_name)
    }

    /// Replace the scanned extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add a directory name to skip
    pub fn with_excluded_dir(mut self, dir_name: impl Into<String>) -> Self {
        self.exclude_dirs.push(dir_name.into());
        self
    }

    /// Follow symbolic links while walking
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }
}
