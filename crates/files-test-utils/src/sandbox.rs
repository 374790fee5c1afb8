//! [`Sandbox`]: a temporary on-disk root for live file-system tests.

use std::fs;
use std::path::{Path, PathBuf};

use files::{LocalFileSystem, WellKnownDirectory};
use predicates::prelude::*;
use tempfile::TempDir;

/// A temporary directory with a [`LocalFileSystem`] confined to it.
///
/// Every well-known directory resolves to `<root>/<kind>`, so stores built
/// on [`Sandbox::agent`] never touch the user's real directories. The tree is
/// removed when the sandbox is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use files::{FolderStore, WellKnownDirectory};
/// use files_test_utils::Sandbox;
///
/// let sandbox = Sandbox::new();
/// let store = FolderStore::new(sandbox.agent(), WellKnownDirectory::Caches).unwrap();
/// store.resources().save_data(b"hello", "greeting.txt").unwrap();
/// sandbox.assert_stored(WellKnownDirectory::Caches, "greeting.txt", "hello");
/// ```
pub struct Sandbox {
    temp_dir: TempDir,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A capability that resolves every well-known directory under the root.
    pub fn agent(&self) -> LocalFileSystem {
        LocalFileSystem::sandboxed(self.root())
    }

    /// Where `kind` resolves inside this sandbox.
    pub fn kind_root(&self, kind: WellKnownDirectory) -> PathBuf {
        self.root().join(kind.as_str())
    }

    /// Write `content` to `path` (relative to the root), creating parents.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Where `path` lands under the sandboxed directory for `kind`.
    pub fn resource_path(&self, kind: WellKnownDirectory, path: &str) -> PathBuf {
        self.kind_root(kind).join(path)
    }

    /// Assert that a resource is stored at `path` under `kind` and that its
    /// content contains `expected`.
    ///
    /// # Panics
    /// Panics if nothing readable is stored there or the content differs.
    pub fn assert_stored(&self, kind: WellKnownDirectory, path: &str, expected: &str) {
        let location = self.resource_path(kind, path);
        let content = fs::read_to_string(&location).unwrap_or_else(|e| {
            panic!("Nothing readable stored at {kind}/{path} ({}): {e}", location.display())
        });
        let predicate = predicate::str::contains(expected);
        assert!(
            predicate.eval(&content),
            "Resource {kind}/{path} failed {predicate}\nActual: {content}"
        );
    }

    /// Assert that nothing is stored at `path` under `kind`.
    ///
    /// # Panics
    /// Panics if a file or folder exists there.
    pub fn assert_absent(&self, kind: WellKnownDirectory, path: &str) {
        let location = self.resource_path(kind, path);
        assert!(
            predicate::path::missing().eval(&location),
            "Expected nothing at {kind}/{path}, found {}",
            location.display()
        );
    }
}
