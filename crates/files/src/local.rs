//! A [`FileSystemContext`] backed by the real file system.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use fs2::FileExt;

use crate::{Error, FileSystemContext, NormalizedPath, Result, WellKnownDirectory, WriteOptions};

/// Disambiguates temp files written concurrently by one process.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// OS-backed capability.
///
/// By default well-known directories resolve to the platform locations
/// (documents, cache, data and the OS temp dir). A sandboxed instance
/// resolves every kind beneath a single root instead, which keeps tests and
/// embedded uses out of the user's real directories.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    sandbox: Option<PathBuf>,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every well-known directory to `root/<kind>`.
    pub fn sandboxed(root: impl Into<PathBuf>) -> Self {
        Self {
            sandbox: Some(root.into()),
        }
    }

    pub fn sandbox_root(&self) -> Option<&Path> {
        self.sandbox.as_deref()
    }
}

impl FileSystemContext for LocalFileSystem {
    fn file_exists(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_file()
    }

    fn folder_exists(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_dir()
    }

    fn move_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        tracing::debug!(%from, %to, "Moving item");
        let source = from.to_native();
        if !source.exists() {
            return Err(Error::NotFound { path: source });
        }
        fs::rename(&source, to.to_native()).map_err(|e| Error::from_io(to.to_native(), e))
    }

    fn copy_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        tracing::debug!(%from, %to, "Copying item");
        fs::copy(from.to_native(), to.to_native())
            .map(|_| ())
            .map_err(|e| Error::from_io(from.to_native(), e))
    }

    fn delete_item(&self, path: &NormalizedPath) -> Result<()> {
        tracing::debug!(%path, "Deleting item");
        let native_path = path.to_native();
        let metadata =
            fs::symlink_metadata(&native_path).map_err(|e| Error::from_io(&native_path, e))?;

        if metadata.is_dir() {
            fs::remove_dir_all(&native_path)
        } else {
            fs::remove_file(&native_path)
        }
        .map_err(|e| Error::from_io(&native_path, e))
    }

    fn create_directory(&self, path: &NormalizedPath) -> Result<()> {
        tracing::debug!(%path, "Creating directory");
        let native_path = path.to_native();
        fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
    }

    fn write(&self, data: &[u8], path: &NormalizedPath, options: WriteOptions) -> Result<()> {
        let native_path = path.to_native();
        match (options.atomic, options.without_overwriting) {
            (true, false) => write_atomic(&native_path, data),
            (true, true) => write_atomic_new(&native_path, data),
            (false, false) => {
                fs::write(&native_path, data).map_err(|e| Error::from_io(&native_path, e))
            }
            (false, true) => OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&native_path)
                .and_then(|mut file| file.write_all(data))
                .map_err(|e| Error::from_io(&native_path, e)),
        }
    }

    fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        let native_path = path.to_native();
        fs::read(&native_path).map_err(|e| Error::from_io(&native_path, e))
    }

    fn directory_path(&self, kind: WellKnownDirectory) -> Result<NormalizedPath> {
        let resolved = match (&self.sandbox, kind) {
            (Some(root), kind) => root.join(kind.as_str()),
            (None, WellKnownDirectory::Temporary) => std::env::temp_dir(),
            (None, kind) => kind
                .search_path()
                .ok_or(Error::DirectoryUnavailable { kind })?,
        };
        Ok(NormalizedPath::new(dunce::simplified(&resolved)))
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial write.
/// The temp file lives in the target's directory to stay on one filesystem,
/// and holds an exclusive advisory lock while it is being filled.
pub fn write_atomic(native_path: &Path, content: &[u8]) -> Result<()> {
    stage_then(native_path, content, |temp_path| fs::rename(temp_path, native_path))
}

/// Like [`write_atomic`], but fails with [`Error::AlreadyExists`] rather than
/// replace an existing target.
///
/// The staged file is hard-linked into place, which fails if the target
/// exists, so two racing writers can never both succeed.
pub fn write_atomic_new(native_path: &Path, content: &[u8]) -> Result<()> {
    stage_then(native_path, content, |temp_path| {
        fs::hard_link(temp_path, native_path)?;
        let _ = fs::remove_file(temp_path);
        Ok(())
    })
}

/// Fill a locked temp sibling of `native_path`, then hand it to `commit`.
/// The temp file is removed if any step fails.
fn stage_then<F>(native_path: &Path, content: &[u8], commit: F) -> Result<()>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = fill_temp_file(&temp_path, native_path, content)
        .and_then(|()| commit(&temp_path).map_err(|e| Error::from_io(native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn fill_temp_file(temp_path: &Path, native_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::from_io(temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })
}
