use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_BASE_URL, DEFAULT_STORAGE_DIRECTORY};

use serde::Deserialize;

/// Object storage for certificate images.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for uploaded objects, relative to the config directory
    pub dir: String,
    /// Prefix of the publicly resolvable URL handed back after an upload
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIRECTORY),
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.is_empty()
            || std::path::Path::new(&self.dir).is_absolute()
            || self.dir.contains("..")
        {
            return Err(ConfigError::storage(
                "storage.dir must be a non-empty relative path without '..'",
            ));
        }

        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(ConfigError::storage(format!(
                "storage.public_base_url must be an http(s) URL, got '{}'",
                self.public_base_url
            )));
        }

        Ok(())
    }
}
