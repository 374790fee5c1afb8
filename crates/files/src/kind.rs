//! Well-known directory kinds.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A semantic category of root location.
///
/// Each kind resolves to exactly one concrete directory through
/// [`FileSystemContext::directory_path`](crate::FileSystemContext::directory_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellKnownDirectory {
    /// User-visible documents
    Documents,
    /// Recreatable cache data
    Caches,
    /// Internal support data owned by the application
    ApplicationSupport,
    /// Ephemeral scratch space
    Temporary,
}

impl WellKnownDirectory {
    /// Every kind, in declaration order.
    pub const ALL: [WellKnownDirectory; 4] = [
        Self::Documents,
        Self::Caches,
        Self::ApplicationSupport,
        Self::Temporary,
    ];

    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Caches => "caches",
            Self::ApplicationSupport => "application_support",
            Self::Temporary => "temporary",
        }
    }

    /// The platform search path backing this kind.
    ///
    /// `Temporary` has no search path and returns `None`; it resolves to a
    /// scratch directory directly. The other kinds return `None` only when
    /// the platform cannot supply the directory.
    pub fn search_path(&self) -> Option<PathBuf> {
        match self {
            Self::Documents => dirs::document_dir(),
            Self::Caches => dirs::cache_dir(),
            Self::ApplicationSupport => dirs::data_dir(),
            Self::Temporary => None,
        }
    }
}

impl std::fmt::Display for WellKnownDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporary_has_no_search_path() {
        assert_eq!(WellKnownDirectory::Temporary.search_path(), None);
    }

    #[test]
    fn serde_names_match_display() {
        for kind in WellKnownDirectory::ALL {
            let encoded = serde_json::to_string(&kind).unwrap();
            assert_eq!(encoded, format!("\"{}\"", kind));
        }
    }
}
