use super::check_name;
use crate::{Directory, Error, File, FileSystemContext};

/// Removes a named resource from a directory.
#[derive(Debug)]
pub struct DeleteResource<'a, C: ?Sized> {
    agent: &'a C,
}

impl<'a, C: FileSystemContext + ?Sized> DeleteResource<'a, C> {
    pub fn new(agent: &'a C) -> Self {
        Self { agent }
    }

    pub fn delete_resource<D>(&self, name: &str, folder: &D) -> Result<(), DeleteError>
    where
        D: Directory + ?Sized,
    {
        let resource = File::new(name, folder);
        tracing::debug!(key = name, path = %resource.location(), "Deleting resource");

        check_name(name)
            .and_then(|()| resource.delete(self.agent))
            .map_err(|source| {
                tracing::warn!(key = name, error = %source, "Deleting resource failed");
                DeleteError::DeleteFailed {
                    key: name.to_string(),
                    source,
                }
            })
    }
}

/// Failures while deleting a resource.
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("Failed to delete the file named '{key}': {source}")]
    DeleteFailed {
        key: String,
        #[source]
        source: Error,
    },
}

impl DeleteError {
    pub fn key(&self) -> &str {
        match self {
            Self::DeleteFailed { key, .. } => key,
        }
    }
}

impl PartialEq for DeleteError {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DeleteError {}
