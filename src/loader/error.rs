//! Error handling for the dashboard loader

use crate::consts::dashboard_consts::loading::LOAD_FAILURE_MESSAGE;
use thiserror::Error;

/// Failure of a single resolution step.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The decision source could not produce an answer.
    #[error("Decision source unavailable: {0}")]
    Unavailable(String),

    /// The resolution task panicked or was torn down before finishing.
    #[error("Resolution task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The only error kind the loader surfaces to the screen.
///
/// Its display text is the user-facing message; the cause is kept for logging.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}", LOAD_FAILURE_MESSAGE)]
    TransientLoadFailure(#[from] ResolveError),
}
