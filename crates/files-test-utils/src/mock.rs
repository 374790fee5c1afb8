//! [`MockContext`]: an in-memory capability that records every call.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use files::{Error, FileSystemContext, NormalizedPath, Result, WellKnownDirectory, WriteOptions};

/// The capability primitives a [`MockContext`] records.
///
/// Directory resolution is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FileExists,
    FolderExists,
    MoveItem,
    CopyItem,
    DeleteItem,
    CreateDirectory,
    Write,
    Read,
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<NormalizedPath, Vec<u8>>,
    folders: BTreeSet<NormalizedPath>,
    calls: Vec<Endpoint>,
    writes: Vec<(NormalizedPath, WriteOptions)>,
    failures: HashSet<Endpoint>,
    roots: HashMap<WellKnownDirectory, NormalizedPath>,
    unavailable: HashSet<WellKnownDirectory>,
}

/// In-memory file system with call recording and failure injection.
///
/// Behaves like a strict disk: writes need an existing parent folder,
/// reads and deletes of absent items fail, and creating a directory creates
/// its ancestors. Seeding helpers (`with_*`) and inspection helpers
/// (`file`, `has_folder`, `calls`) do not record calls.
///
/// # Example
///
/// ```rust
/// use files::{Folder, ResourceOperations};
/// use files_test_utils::{Endpoint, MockContext};
///
/// let agent = MockContext::new().with_folder("/root");
/// let folder = Folder::new("/root");
/// ResourceOperations::new(&agent, &folder).save_data(b"hi", "a.txt").unwrap();
/// assert_eq!(agent.calls(), vec![Endpoint::FolderExists, Endpoint::Write]);
/// ```
#[derive(Debug, Default)]
pub struct MockContext {
    state: Mutex<State>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a folder (and its ancestors).
    pub fn with_folder(self, path: impl Into<NormalizedPath>) -> Self {
        insert_folder(&mut self.lock(), path.into());
        self
    }

    /// Seed a file, creating its parent folder.
    pub fn with_file(self, path: impl Into<NormalizedPath>, data: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        {
            let mut state = self.lock();
            if let Some(parent) = path.parent() {
                insert_folder(&mut state, parent);
            }
            state.files.insert(path, data.into());
        }
        self
    }

    /// Resolve `kind` to `path` instead of the default `/mock/<kind>`.
    pub fn with_root(self, kind: WellKnownDirectory, path: impl Into<NormalizedPath>) -> Self {
        self.lock().roots.insert(kind, path.into());
        self
    }

    /// Make resolution of `kind` fail.
    pub fn with_unavailable(self, kind: WellKnownDirectory) -> Self {
        self.lock().unavailable.insert(kind);
        self
    }

    /// Make every call to `endpoint` fail with an injected I/O error.
    pub fn failing(self, endpoint: Endpoint) -> Self {
        self.lock().failures.insert(endpoint);
        self
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.lock().calls.clone()
    }

    /// How many times `endpoint` was called.
    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.lock().calls.iter().filter(|&&c| c == endpoint).count()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Paths and options of every write that reached storage, in order.
    pub fn writes(&self) -> Vec<(NormalizedPath, WriteOptions)> {
        self.lock().writes.clone()
    }

    /// Current content stored at `path`.
    pub fn file(&self, path: impl Into<NormalizedPath>) -> Option<Vec<u8>> {
        self.lock().files.get(&path.into()).cloned()
    }

    pub fn has_folder(&self, path: impl Into<NormalizedPath>) -> bool {
        self.lock().folders.contains(&path.into())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Record the call and return the guarded state, or the injected failure.
    fn enter(&self, endpoint: Endpoint, path: &NormalizedPath) -> Result<MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(endpoint);
        if state.failures.contains(&endpoint) {
            return Err(Error::io(
                path.to_native(),
                std::io::Error::other(format!("injected {endpoint:?} failure")),
            ));
        }
        Ok(state)
    }
}

fn insert_folder(state: &mut State, path: NormalizedPath) {
    let mut current = Some(path);
    while let Some(folder) = current {
        current = folder.parent();
        state.folders.insert(folder);
    }
}

fn not_found(path: &NormalizedPath) -> Error {
    Error::NotFound {
        path: path.to_native(),
    }
}

/// Where `path` lands when the tree at `from` moves to `to`.
fn relocate(path: &NormalizedPath, from: &NormalizedPath, to: &NormalizedPath) -> NormalizedPath {
    let suffix = &path.as_str()[from.as_str().len()..];
    NormalizedPath::new(format!("{}{}", to.as_str(), suffix))
}

impl FileSystemContext for MockContext {
    fn file_exists(&self, path: &NormalizedPath) -> bool {
        let mut state = self.lock();
        state.calls.push(Endpoint::FileExists);
        state.files.contains_key(path)
    }

    fn folder_exists(&self, path: &NormalizedPath) -> bool {
        let mut state = self.lock();
        state.calls.push(Endpoint::FolderExists);
        state.folders.contains(path)
    }

    fn move_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        let mut state = self.enter(Endpoint::MoveItem, from)?;
        if let Some(data) = state.files.remove(from) {
            state.files.insert(to.clone(), data);
            return Ok(());
        }
        if !state.folders.contains(from) {
            return Err(not_found(from));
        }

        let folders: Vec<_> = state
            .folders
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for folder in folders {
            state.folders.remove(&folder);
            state.folders.insert(relocate(&folder, from, to));
        }

        let files: Vec<_> = state
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for path in files {
            if let Some(data) = state.files.remove(&path) {
                state.files.insert(relocate(&path, from, to), data);
            }
        }
        Ok(())
    }

    fn copy_item(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        let mut state = self.enter(Endpoint::CopyItem, from)?;
        let data = state.files.get(from).cloned().ok_or_else(|| not_found(from))?;
        state.files.insert(to.clone(), data);
        Ok(())
    }

    fn delete_item(&self, path: &NormalizedPath) -> Result<()> {
        let mut state = self.enter(Endpoint::DeleteItem, path)?;
        if state.files.remove(path).is_some() {
            return Ok(());
        }
        if !state.folders.contains(path) {
            return Err(not_found(path));
        }
        state.folders.retain(|p| !p.starts_with(path));
        state.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_directory(&self, path: &NormalizedPath) -> Result<()> {
        let mut state = self.enter(Endpoint::CreateDirectory, path)?;
        insert_folder(&mut state, path.clone());
        Ok(())
    }

    fn write(&self, data: &[u8], path: &NormalizedPath, options: WriteOptions) -> Result<()> {
        let mut state = self.enter(Endpoint::Write, path)?;
        let parent_exists = path.parent().is_some_and(|p| state.folders.contains(&p));
        if !parent_exists {
            return Err(not_found(path));
        }
        if options.without_overwriting && state.files.contains_key(path) {
            return Err(Error::AlreadyExists {
                path: path.to_native(),
            });
        }
        state.files.insert(path.clone(), data.to_vec());
        state.writes.push((path.clone(), options));
        Ok(())
    }

    fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        let state = self.enter(Endpoint::Read, path)?;
        state.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn directory_path(&self, kind: WellKnownDirectory) -> Result<NormalizedPath> {
        let state = self.lock();
        if state.unavailable.contains(&kind) {
            return Err(Error::DirectoryUnavailable { kind });
        }
        Ok(state
            .roots
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| NormalizedPath::new(format!("/mock/{}", kind.as_str()))))
    }
}
