//! Normalized path handling for location composition

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Separators are unified to `/`, repeated separators collapse and trailing
/// separators are dropped. The root `/` and a leading `//` network prefix
/// survive normalization. Conversion to a platform-native path happens only
/// at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    ///
    /// The segment may itself contain separators (`a/b/c`), in which case
    /// every component is appended in order. A leading separator on the
    /// segment does not reset the path to the root.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self {
                inner: clean(segment.trim_start_matches(['/', '\\'])),
            };
        }
        Self {
            inner: clean(&format!("{}/{}", self.inner, segment)),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) if idx > 0 && !self.is_network_root(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Check if this appears to be a network path (`//server/share`).
    pub fn is_network_path(&self) -> bool {
        self.inner.starts_with("//")
    }

    /// Whether this path is absolute.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Whether `self` lies at or beneath `base`, compared component-wise.
    pub fn starts_with(&self, base: &NormalizedPath) -> bool {
        if base.inner == "/" {
            return self.is_absolute();
        }
        self.inner == base.inner
            || self
                .inner
                .strip_prefix(&base.inner)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    fn is_network_root(&self, idx: usize) -> bool {
        self.is_network_path() && idx == 1
    }
}

/// Unify separators, collapse repeats and drop trailing separators.
fn clean(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let prefix = if unified.starts_with("//") && !unified.starts_with("///") {
        "//"
    } else if unified.starts_with('/') {
        "/"
    } else {
        ""
    };

    let body = unified
        .split('/')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    format!("{prefix}{body}")
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
