//! Resource-level transactions built on the capability.
//!
//! Each utility performs one transaction and maps capability failures into
//! its own typed error. None of them retries or swallows a failure, and none
//! holds state beyond the borrowed agent and its encoding settings.

mod delete;
mod load;
mod save;
mod update;

pub use delete::{DeleteError, DeleteResource};
pub use load::{LoadError, LoadResource};
pub use save::{SaveError, SaveResource};
pub use update::{UpdateError, UpdateResource};

use crate::Error;

/// A resource name addresses one slot directly inside its folder, so it may
/// not be empty, a traversal component, or contain a separator.
fn check_name(name: &str) -> crate::Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
