//! Typed resource persistence over a pluggable file-system capability
//!
//! The location model ([`Directory`], [`Folder`], [`File`]) describes where
//! resources live. All I/O goes through a [`FileSystemContext`], which
//! [`LocalFileSystem`] implements for the real disk. The
//! [`operations`] utilities save, load, update and delete resources with
//! typed errors, and [`FolderStore`] / [`ResourceOperations`] bind them to a
//! resolved root folder.

pub mod config;
pub mod context;
pub mod directory;
pub mod error;
pub mod file;
pub mod format;
pub mod kind;
pub mod local;
pub mod logging;
pub mod operations;
pub mod path;
pub mod resources;
pub mod store;

pub use config::StoreConfig;
pub use context::{FileSystemContext, WriteOptions};
pub use directory::{Directory, Folder};
pub use error::{Error, Result};
pub use file::File;
pub use format::{CodecError, Format};
pub use kind::WellKnownDirectory;
pub use local::LocalFileSystem;
pub use operations::{DeleteError, LoadError, SaveError, UpdateError};
pub use path::NormalizedPath;
pub use resources::ResourceOperations;
pub use store::FolderStore;
