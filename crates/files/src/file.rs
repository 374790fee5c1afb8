//! Files: single-use handles to one storage slot inside a directory.

use crate::{Directory, FileSystemContext, NormalizedPath, Result, WriteOptions};

/// A named slot inside an enclosing [`Directory`].
///
/// A `File` is neither `Clone` nor `Copy`. [`move_to`](File::move_to) and
/// [`delete`](File::delete) consume the handle; after either call, build a
/// new handle against the destination if you need one.
///
/// Every method here is a pass-through to the capability. Failures are
/// returned unmodified and nothing is retried.
#[derive(Debug, PartialEq, Eq)]
pub struct File<D> {
    filename: String,
    enclosing_folder: D,
}

impl<D> File<D> {
    pub fn new(filename: impl Into<String>, enclosing_folder: D) -> Self {
        Self {
            filename: filename.into(),
            enclosing_folder,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn enclosing_folder(&self) -> &D {
        &self.enclosing_folder
    }
}

impl<D: Directory> File<D> {
    /// Derived location: the enclosing folder's location plus the name.
    pub fn location(&self) -> NormalizedPath {
        self.enclosing_folder.resource_location(self)
    }

    pub fn exists<C: FileSystemContext + ?Sized>(&self, agent: &C) -> bool {
        agent.file_exists(&self.location())
    }

    pub fn read<C: FileSystemContext + ?Sized>(&self, agent: &C) -> Result<Vec<u8>> {
        agent.read(&self.location())
    }

    pub fn write<C: FileSystemContext + ?Sized>(
        &self,
        data: &[u8],
        agent: &C,
        options: WriteOptions,
    ) -> Result<()> {
        agent.write(data, &self.location(), options)
    }

    /// Copy into `folder` under the same name. The handle stays usable.
    pub fn copy_to<T, C>(&self, folder: &T, agent: &C) -> Result<()>
    where
        T: Directory + ?Sized,
        C: FileSystemContext + ?Sized,
    {
        let destination = folder.resource_location(self);
        agent.copy_item(&self.location(), &destination)
    }

    /// Move into `folder` under the same name, consuming the handle.
    pub fn move_to<T, C>(self, folder: &T, agent: &C) -> Result<()>
    where
        T: Directory + ?Sized,
        C: FileSystemContext + ?Sized,
    {
        let destination = folder.resource_location(&self);
        agent.move_item(&self.location(), &destination)
    }

    /// Delete the underlying item, consuming the handle.
    pub fn delete<C: FileSystemContext + ?Sized>(self, agent: &C) -> Result<()> {
        agent.delete_item(&self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folder;

    #[test]
    fn location_is_derived_from_enclosing_folder() {
        let file = File::new("a.txt", Folder::new("/root"));
        assert_eq!(file.location().as_str(), "/root/a.txt");
    }

    #[test]
    fn handles_with_same_name_and_folder_are_equal() {
        let a = File::new("a.txt", Folder::new("/root"));
        let b = File::new("a.txt", Folder::new("/root/"));
        assert_eq!(a, b);
        assert_ne!(a, File::new("b.txt", Folder::new("/root")));
    }
}
