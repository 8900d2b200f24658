//! Framework error type.
//!
//! The visualization core has no recoverable runtime errors — invalid input
//! is clamped, a lost surface stops the loop silently.  What remains are
//! API-contract violations (misuse of the lifecycle) and host-side config
//! plumbing.  Sub-crates define their own enums and either convert into
//! `NavError` via `From` or stay separate; both patterns are acceptable.

use thiserror::Error;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
