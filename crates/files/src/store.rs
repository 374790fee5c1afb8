//! Folder stores: a capability bound to one resolved root directory.

use crate::{
    Directory, FileSystemContext, Folder, Format, ResourceOperations, Result, StoreConfig,
    WellKnownDirectory, WriteOptions,
};

/// A capability bound to a resolved, existing root folder.
///
/// Construction resolves the well-known directory, appends the optional
/// subfolder and creates the result if it is missing, so the root exists
/// as soon as the store does.
#[derive(Debug, Clone)]
pub struct FolderStore<C> {
    agent: C,
    folder: Folder,
    kind: WellKnownDirectory,
    format: Format,
    options: WriteOptions,
}

impl<C: FileSystemContext> FolderStore<C> {
    /// Store rooted directly at the directory for `kind`.
    pub fn new(agent: C, kind: WellKnownDirectory) -> Result<Self> {
        Self::with_subfolder(agent, kind, None)
    }

    /// Store rooted at `subfolder` (which may span several levels, like
    /// `a/b/c`) beneath the directory for `kind`.
    pub fn with_subfolder(
        agent: C,
        kind: WellKnownDirectory,
        subfolder: Option<&str>,
    ) -> Result<Self> {
        let base = Folder::new(agent.directory_path(kind)?);
        let folder = match subfolder {
            Some(path) => base.subfolder(path),
            None => base,
        };
        Self::from_folder(agent, folder, kind)
    }

    /// Build a store from a declarative configuration.
    pub fn from_config(agent: C, config: &StoreConfig) -> Result<Self> {
        let store = Self::with_subfolder(agent, config.kind, config.subfolder.as_deref())?;
        Ok(store
            .with_format(config.format)
            .with_write_options(config.write_options()))
    }

    /// Store rooted at an already-resolved `folder`, created if missing.
    ///
    /// `kind` records which scope the folder belongs to; it is not resolved.
    pub fn from_folder(agent: C, folder: Folder, kind: WellKnownDirectory) -> Result<Self> {
        folder.create_if_necessary(&agent)?;
        tracing::debug!(%kind, root = %folder.location(), "Folder store ready");

        Ok(Self {
            agent,
            folder,
            kind,
            format: Format::default(),
            options: WriteOptions::default(),
        })
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn agent(&self) -> &C {
        &self.agent
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    pub fn kind(&self) -> WellKnownDirectory {
        self.kind
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// The persistence facade for this store's root folder.
    pub fn resources(&self) -> ResourceOperations<'_, C, Folder> {
        ResourceOperations::new(&self.agent, &self.folder)
            .with_format(self.format)
            .with_options(self.options)
    }
}

impl WellKnownDirectory {
    /// Resolve this kind through `agent` and bind a store to it.
    pub fn folder_store<C: FileSystemContext>(self, agent: C) -> Result<FolderStore<C>> {
        FolderStore::new(agent, self)
    }
}
