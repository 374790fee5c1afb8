//! Uniform persistence API over one `(agent, folder)` pair.

use serde::{Serialize, de::DeserializeOwned};

use crate::operations::{
    DeleteError, DeleteResource, LoadError, LoadResource, SaveError, SaveResource, UpdateError,
    UpdateResource,
};
use crate::{Directory, File, FileSystemContext, Format, WriteOptions};

/// Binds a capability and a directory to the four resource operations.
///
/// Every method forwards to the matching utility in
/// [`operations`](crate::operations); errors come back unmodified.
#[derive(Debug)]
pub struct ResourceOperations<'a, C: ?Sized, D: ?Sized> {
    agent: &'a C,
    folder: &'a D,
    format: Format,
    options: WriteOptions,
}

impl<'a, C, D> ResourceOperations<'a, C, D>
where
    C: FileSystemContext + ?Sized,
    D: Directory + ?Sized,
{
    pub fn new(agent: &'a C, folder: &'a D) -> Self {
        Self {
            agent,
            folder,
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

    pub fn agent(&self) -> &'a C {
        self.agent
    }

    pub fn folder(&self) -> &'a D {
        self.folder
    }

    /// Whether the bound folder currently exists.
    pub fn folder_exists(&self) -> bool {
        self.folder.exists(self.agent)
    }

    pub fn save<T: Serialize + ?Sized>(&self, resource: &T, name: &str) -> Result<(), SaveError> {
        self.saver().save_resource(resource, name, self.folder)
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        LoadResource::new(self.agent)
            .with_format(self.format)
            .load_resource(name, self.folder)
    }

    pub fn delete(&self, name: &str) -> Result<(), DeleteError> {
        DeleteResource::new(self.agent).delete_resource(name, self.folder)
    }

    pub fn update<T, F>(&self, name: &str, modify: F) -> Result<(), UpdateError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        UpdateResource::new(self.agent)
            .with_format(self.format)
            .with_options(self.options)
            .update_resource(name, self.folder, modify)
    }

    pub fn save_data(&self, data: &[u8], name: &str) -> Result<(), SaveError> {
        self.saver().save_data(data, name, self.folder)
    }

    pub fn load_data(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        LoadResource::new(self.agent).load_data(name, self.folder)
    }

    /// An unconsumed handle to `name` for direct file operations.
    pub fn resource(&self, name: &str) -> File<&'a D> {
        File::new(name, self.folder)
    }

    fn saver(&self) -> SaveResource<'a, C> {
        SaveResource::new(self.agent)
            .with_format(self.format)
            .with_options(self.options)
    }
}
