use serde::Serialize;

use super::check_name;
use crate::format::CodecError;
use crate::{Directory, Error, FileSystemContext, Format, WriteOptions};

/// Writes typed resources or raw bytes into a directory.
#[derive(Debug)]
pub struct SaveResource<'a, C: ?Sized> {
    agent: &'a C,
    format: Format,
    options: WriteOptions,
}

impl<'a, C: FileSystemContext + ?Sized> SaveResource<'a, C> {
    pub fn new(agent: &'a C) -> Self {
        Self {
            agent,
            format: Format::default(),
            options: WriteOptions::default(),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Encode `resource` and write it as `name` inside `folder`.
    ///
    /// Encoding happens before any storage access, so an encoding failure
    /// leaves the file system untouched.
    pub fn save_resource<T, D>(&self, resource: &T, name: &str, folder: &D) -> Result<(), SaveError>
    where
        T: Serialize + ?Sized,
        D: Directory + ?Sized,
    {
        let data = self
            .format
            .encode(resource)
            .map_err(|source| SaveError::EncodingFailed {
                key: name.to_string(),
                source,
            })?;
        self.save_data(&data, name, folder)
    }

    /// Write raw bytes as `name` inside `folder`, creating the folder first
    /// if it is missing. An invalid name fails before any storage access.
    pub fn save_data<D>(&self, data: &[u8], name: &str, folder: &D) -> Result<(), SaveError>
    where
        D: Directory + ?Sized,
    {
        tracing::debug!(key = name, folder = %folder.location(), bytes = data.len(), "Saving resource");
        check_name(name)
            .and_then(|()| folder.create_resource(name, data, self.agent, self.options))
            .map_err(|source| {
                tracing::warn!(key = name, error = %source, "Saving resource failed");
                SaveError::WriteFailed {
                    key: name.to_string(),
                    source,
                }
            })
    }
}

/// Failures while saving a resource.
///
/// Equality compares the variant and key only; the cause is diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to encode resource with key '{key}'")]
    EncodingFailed {
        key: String,
        #[source]
        source: CodecError,
    },

    #[error("Failed to save file with key '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: Error,
    },
}

impl SaveError {
    /// The storage key the failed save targeted.
    pub fn key(&self) -> &str {
        match self {
            Self::EncodingFailed { key, .. } | Self::WriteFailed { key, .. } => key,
        }
    }
}

impl PartialEq for SaveError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EncodingFailed { key: lhs, .. }, Self::EncodingFailed { key: rhs, .. }) => {
                lhs == rhs
            }
            (Self::WriteFailed { key: lhs, .. }, Self::WriteFailed { key: rhs, .. }) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for SaveError {}
