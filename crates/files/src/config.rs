//! Declarative folder store configuration

use serde::{Deserialize, Serialize};

use crate::{Error, Format, NormalizedPath, Result, WellKnownDirectory, WriteOptions};

/// Settings needed to build a [`FolderStore`](crate::FolderStore).
///
/// ```toml
/// kind = "caches"
/// subfolder = "thumbnails/v2"
/// format = "yaml"
/// atomic_writes = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub kind: WellKnownDirectory,
    pub subfolder: Option<String>,
    pub format: Format,
    pub atomic_writes: bool,
    pub overwrite: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: WellKnownDirectory::ApplicationSupport,
            subfolder: None,
            format: Format::default(),
            atomic_writes: false,
            overwrite: true,
        }
    }
}

impl StoreConfig {
    /// Load a configuration file directly from disk.
    ///
    /// The format is detected from the file extension (`toml`, `json`,
    /// `yaml`/`yml`).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        let format = Format::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })?;

        let native_path = path.to_native();
        let content = std::fs::read(&native_path).map_err(|e| Error::from_io(&native_path, e))?;

        format.decode(&content).map_err(|e| Error::ConfigParse {
            path: native_path,
            format: format.name().into(),
            message: e.to_string(),
        })
    }

    /// The write options implied by this configuration.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            atomic: self.atomic_writes,
            without_overwriting: !self.overwrite,
        }
    }
}
