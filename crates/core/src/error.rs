//! Core error types

use thiserror::Error;

use crate::nid::Nid;

/// Errors raised by host-framework objects (key handles, digest contexts).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Key handle already carries a body
    #[error("Key already assigned as {0}")]
    AlreadyAssigned(Nid),

    /// Output buffer smaller than the digest
    #[error("Digest output buffer too small: need {needed}, got {got}")]
    OutputTooSmall { needed: usize, got: usize },

    /// Digest finalized before a key was installed
    #[error("Digest key not set")]
    KeyNotSet,
}

/// Result type for host-framework operations.
pub type CoreResult<T> = Result<T, CoreError>;
