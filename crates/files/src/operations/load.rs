use serde::de::DeserializeOwned;

use super::check_name;
use crate::format::CodecError;
use crate::{Directory, Error, File, FileSystemContext, Format};

/// Reads typed resources or raw bytes out of a directory.
#[derive(Debug)]
pub struct LoadResource<'a, C: ?Sized> {
    agent: &'a C,
    format: Format,
}

impl<'a, C: FileSystemContext + ?Sized> LoadResource<'a, C> {
    pub fn new(agent: &'a C) -> Self {
        Self {
            agent,
            format: Format::default(),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Read `name` from `folder` and decode it.
    pub fn load_resource<T, D>(&self, name: &str, folder: &D) -> Result<T, LoadError>
    where
        T: DeserializeOwned,
        D: Directory + ?Sized,
    {
        let data = self.load_data(name, folder)?;
        self.format
            .decode(&data)
            .map_err(|source| LoadError::DecodingFailed {
                key: name.to_string(),
                source,
            })
    }

    /// Read the raw bytes of `name` from `folder`.
    ///
    /// A zero-length payload is rejected with [`LoadError::EmptyFile`]: no
    /// typed resource encodes to nothing, so an empty file means a truncated
    /// or never-completed write.
    pub fn load_data<D>(&self, name: &str, folder: &D) -> Result<Vec<u8>, LoadError>
    where
        D: Directory + ?Sized,
    {
        let resource = File::new(name, folder);
        tracing::debug!(key = name, path = %resource.location(), "Loading resource");

        let data = check_name(name)
            .and_then(|()| resource.read(self.agent))
            .map_err(|source| {
                tracing::warn!(key = name, error = %source, "Loading resource failed");
                LoadError::ReadFailed {
                    key: name.to_string(),
                    source,
                }
            })?;

        if data.is_empty() {
            tracing::warn!(key = name, "Loaded resource is empty");
            return Err(LoadError::EmptyFile {
                key: name.to_string(),
            });
        }
        Ok(data)
    }
}

/// Failures while loading a resource.
///
/// Equality compares the variant and key only; the cause is diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("The file with key '{key}' is empty")]
    EmptyFile { key: String },

    #[error("Failed to decode the contents of the file with key '{key}'")]
    DecodingFailed {
        key: String,
        #[source]
        source: CodecError,
    },

    #[error("Failed to read the file with key '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: Error,
    },
}

impl LoadError {
    /// The storage key the failed load targeted.
    pub fn key(&self) -> &str {
        match self {
            Self::EmptyFile { key }
            | Self::DecodingFailed { key, .. }
            | Self::ReadFailed { key, .. } => key,
        }
    }
}

impl PartialEq for LoadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyFile { key: lhs }, Self::EmptyFile { key: rhs }) => lhs == rhs,
            (Self::DecodingFailed { key: lhs, .. }, Self::DecodingFailed { key: rhs, .. }) => {
                lhs == rhs
            }
            (Self::ReadFailed { key: lhs, .. }, Self::ReadFailed { key: rhs, .. }) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for LoadError {}
