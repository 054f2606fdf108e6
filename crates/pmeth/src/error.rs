//! Error types for the GOST key methods.

use gostpk_core::{CoreError, Nid};
use thiserror::Error;

use crate::backend::BackendError;

/// Errors that can occur in key method operations.
#[derive(Debug, Error)]
pub enum PmethError {
    #[error("Memory allocation failed: {0}")]
    AllocationFailure(String),

    #[error("Invalid digest type")]
    InvalidDigestType,

    #[error("Invalid parameter set")]
    InvalidParamSet,

    #[error("Invalid MAC key length")]
    InvalidMacKeyLength,

    #[error("No parameters set")]
    NoParametersSet,

    #[error("MAC key not set")]
    MacKeyNotSet,

    /// The request is not handled by this method.
    #[error("Control call failed")]
    ControlCallFailed,

    #[error("Operation context not initialized")]
    MissingContext,

    #[error("No key attached to the operation")]
    MissingKey,

    #[error("Unsupported key type: {0}")]
    UnsupportedKey(Nid),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Nid),

    #[error("Unknown method name: {0}")]
    UnknownMethodName(String),

    #[error("Operation not supported by this method")]
    OperationNotSupported,

    #[error("Output buffer too small: need {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("Signature component does not fit in {half_width} bytes")]
    SignatureOverflow { half_width: usize },

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl PmethError {
    /// True for the "this handler does not apply" outcome, as opposed to an
    /// applicable request that failed.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, PmethError::ControlCallFailed)
    }
}

/// Result type for key method operations.
pub type PmethResult<T> = Result<T, PmethError>;

/// Reports a failure through the structured log and hands it back, so call
/// sites can write `return Err(report("ctrl", err))`.
pub(crate) fn report(function: &'static str, err: PmethError) -> PmethError {
    tracing::warn!(function, reason = %err, "key method call failed");
    err
}
