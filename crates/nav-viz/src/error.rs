use thiserror::Error;

/// Lifecycle-contract violations.
///
/// These are the only errors the loop can produce: runtime conditions
/// (lost surface, degenerate config) are absorbed by clamping or by the
/// silent stop path instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VizError {
    #[error("visualization is already running")]
    AlreadyRunning,

    #[error("visualization has stopped; mount a new one to restart")]
    Stopped,
}

pub type VizResult<T> = Result<T, VizError>;
