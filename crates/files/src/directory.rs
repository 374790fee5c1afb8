//! Directories: root locations in the storage hierarchy.

use crate::{File, FileSystemContext, NormalizedPath, Result, WriteOptions};

/// A directory in the storage hierarchy.
///
/// Implementors only supply their location. Everything else is expressed in
/// terms of the [`FileSystemContext`] primitives passed to each call.
pub trait Directory {
    /// The absolute location this directory denotes.
    fn location(&self) -> &NormalizedPath;

    /// Whether a folder exists at this location.
    fn exists<C: FileSystemContext + ?Sized>(&self, agent: &C) -> bool {
        agent.folder_exists(self.location())
    }

    /// Create this directory unless it already exists.
    fn create_if_necessary<C: FileSystemContext + ?Sized>(&self, agent: &C) -> Result<()> {
        agent.create_directory_if_necessary(self.location())
    }

    /// Delete this directory if it exists.
    fn delete_if_exists<C: FileSystemContext + ?Sized>(&self, agent: &C) -> Result<()> {
        agent.delete_directory_if_exists(self.location())
    }

    /// A fresh handle to the file named `filename` inside this directory.
    fn resource(&self, filename: impl Into<String>) -> File<Self>
    where
        Self: Clone + Sized,
    {
        File::new(filename, self.clone())
    }

    /// Ensure this directory exists, then write `data` to `filename` in it.
    fn create_resource<C: FileSystemContext + ?Sized>(
        &self,
        filename: &str,
        data: &[u8],
        agent: &C,
        options: WriteOptions,
    ) -> Result<()> {
        self.create_if_necessary(agent)?;
        File::new(filename, self).write(data, agent, options)
    }

    /// Where `file` would live if it were placed in this directory.
    fn resource_location<D>(&self, file: &File<D>) -> NormalizedPath {
        self.location().join(file.filename())
    }
}

/// A plain directory value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Folder {
    location: NormalizedPath,
}

impl Folder {
    pub fn new(location: impl Into<NormalizedPath>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// A folder nested under this one. `path` may span several levels.
    pub fn subfolder(&self, path: &str) -> Folder {
        Folder {
            location: self.location.join(path),
        }
    }
}

impl Directory for Folder {
    fn location(&self) -> &NormalizedPath {
        &self.location
    }
}

impl<D: Directory + ?Sized> Directory for &D {
    fn location(&self) -> &NormalizedPath {
        (**self).location()
    }
}
