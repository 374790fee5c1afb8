//! The file-system capability consumed by the location model and operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{NormalizedPath, Result, WellKnownDirectory};

/// Options forwarded verbatim to [`FileSystemContext::write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Write to a temporary sibling and rename over the target.
    #[serde(default)]
    pub atomic: bool,
    /// Fail instead of replacing an existing item.
    #[serde(default)]
    pub without_overwriting: bool,
}

impl WriteOptions {
    pub fn atomic() -> Self {
        Self {
            atomic: true,
            ..Self::default()
        }
    }

    pub fn without_overwriting() -> Self {
        Self {
            without_overwriting: true,
            ..Self::default()
        }
    }
}

/// Storage primitives the persistence layer requires from its environment.
///
/// Every operation is synchronous and scoped to the location it is given.
/// Nothing here is idempotent; idempotent create/delete is layered on top by
/// the provided methods.
pub trait FileSystemContext {
    /// Whether a regular file exists at `path`.
    fn file_exists(&self, path: &NormalizedPath) -> bool;

    /// Whether a directory exists at `path`.
    fn folder_exists(&self, path: &NormalizedPath) -> bool;

    /// Move the item at `from` to `to`.
    fn move_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()>;

    /// Copy the item at `from` to `to`.
    fn copy_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()>;

    /// Delete the item at `path`. Fails if nothing is there.
    fn delete_item(&self, path: &NormalizedPath) -> Result<()>;

    /// Create a directory at `path`.
    fn create_directory(&self, path: &NormalizedPath) -> Result<()>;

    /// Write `data` to `path`.
    fn write(&self, data: &[u8], path: &NormalizedPath, options: WriteOptions) -> Result<()>;

    /// Read the full contents of `path`. Fails if absent or unreadable.
    fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>>;

    /// Resolve a well-known directory kind to a concrete path.
    fn directory_path(&self, kind: WellKnownDirectory) -> Result<NormalizedPath>;

    /// Create the directory only when it does not exist yet.
    fn create_directory_if_necessary(&self, path: &NormalizedPath) -> Result<()> {
        if !self.folder_exists(path) {
            self.create_directory(path)?;
        }
        Ok(())
    }

    /// Delete the directory only when it exists.
    fn delete_directory_if_exists(&self, path: &NormalizedPath) -> Result<()> {
        if self.folder_exists(path) {
            self.delete_item(path)?;
        }
        Ok(())
    }
}

macro_rules! forward_context {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<T: FileSystemContext + ?Sized> FileSystemContext for $wrapper {
                fn file_exists(&self, path: &NormalizedPath) -> bool {
                    (**self).file_exists(path)
                }

                fn folder_exists(&self, path: &NormalizedPath) -> bool {
                    (**self).folder_exists(path)
                }

                fn move_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
                    (**self).move_item(from, to)
                }

                fn copy_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
                    (**self).copy_item(from, to)
                }

                fn delete_item(&self, path: &NormalizedPath) -> Result<()> {
                    (**self).delete_item(path)
                }

                fn create_directory(&self, path: &NormalizedPath) -> Result<()> {
                    (**self).create_directory(path)
                }

                fn write(
                    &self,
                    data: &[u8],
                    path: &NormalizedPath,
                    options: WriteOptions,
                ) -> Result<()> {
                    (**self).write(data, path, options)
                }

                fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
                    (**self).read(path)
                }

                fn directory_path(&self, kind: WellKnownDirectory) -> Result<NormalizedPath> {
                    (**self).directory_path(kind)
                }
            }
        )+
    };
}

forward_context!(&T, Box<T>, Arc<T>);
