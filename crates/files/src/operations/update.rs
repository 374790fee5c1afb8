use serde::{Serialize, de::DeserializeOwned};

use super::{LoadError, LoadResource, SaveError, SaveResource};
use crate::{Directory, FileSystemContext, Format, WriteOptions};

/// Load, mutate in place and save a typed resource.
///
/// The sequence is not atomic. Another writer acting between the load and
/// the save is silently overwritten (last writer wins); callers that mutate
/// the same key concurrently must serialize externally.
#[derive(Debug)]
pub struct UpdateResource<'a, C: ?Sized> {
    agent: &'a C,
    format: Format,
    options: WriteOptions,
}

impl<'a, C: FileSystemContext + ?Sized> UpdateResource<'a, C> {
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

    /// Issues exactly one read and, if that succeeds, exactly one write
    /// against `name`. `modify` has no error channel and cannot abort.
    pub fn update_resource<T, D, F>(&self, name: &str, folder: &D, modify: F) -> Result<(), UpdateError>
    where
        T: Serialize + DeserializeOwned,
        D: Directory + ?Sized,
        F: FnOnce(&mut T),
    {
        let loader = LoadResource::new(self.agent).with_format(self.format);
        let saver = SaveResource::new(self.agent)
            .with_format(self.format)
            .with_options(self.options);

        tracing::debug!(key = name, folder = %folder.location(), "Updating resource");
        let mut resource: T = loader.load_resource(name, folder)?;
        modify(&mut resource);
        saver.save_resource(&resource, name, folder)?;
        Ok(())
    }
}

/// Failures during a load-modify-save sequence.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Update failed due to a load error: {0}")]
    Load(#[from] LoadError),

    #[error("Update failed due to a save error: {0}")]
    Save(#[from] SaveError),

    /// A cause that is neither a load nor a save failure.
    ///
    /// [`UpdateResource`] never produces this itself; it exists for callers
    /// that compose their own update sequences on top of the same taxonomy.
    #[error("Update of '{key}' failed with an unexpected error: {source}")]
    Unexpected {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl UpdateError {
    pub fn unexpected(
        key: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Unexpected {
            key: key.into(),
            source: source.into(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Load(error) => error.key(),
            Self::Save(error) => error.key(),
            Self::Unexpected { key, .. } => key,
        }
    }
}

impl PartialEq for UpdateError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Load(lhs), Self::Load(rhs)) => lhs == rhs,
            (Self::Save(lhs), Self::Save(rhs)) => lhs == rhs,
            (
                Self::Unexpected {
                    key: lhs_key,
                    source: lhs,
                },
                Self::Unexpected {
                    key: rhs_key,
                    source: rhs,
                },
            ) => lhs_key == rhs_key && lhs.to_string() == rhs.to_string(),
            _ => false,
        }
    }
}

impl Eq for UpdateError {}
