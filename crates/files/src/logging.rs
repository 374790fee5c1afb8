//! Tracing setup for processes embedding the persistence layer.
//!
//! Every resource transaction emits a `debug` event carrying its key and
//! location, and every failure a `warn` event carrying the cause, all under
//! the `files` target.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter applied when `RUST_LOG` is unset: failures only.
pub const DEFAULT_DIRECTIVE: &str = "files=warn";

/// Install a global subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_DIRECTIVE`] when the variable is unset.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with(DEFAULT_DIRECTIVE)
}

/// Like [`init`], with `fallback` used when `RUST_LOG` is unset, e.g.
/// `"files=debug"` to trace every save, load, update and delete.
///
/// Fails if `fallback` does not parse or a global subscriber is already set.
pub fn init_with(fallback: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).without_time().compact())
        .try_init()?;

    Ok(())
}
