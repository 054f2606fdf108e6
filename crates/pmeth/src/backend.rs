//! Seam to the algorithm library.
//!
//! The key methods never do the number theory themselves. Parameter tables,
//! key pair generation and the raw GOST R 34.10 sign/verify primitives are
//! consumed through [`GostBackend`], one implementation per library.

use gostpk_core::{KeyBody, Nid, SignaturePair};
use thiserror::Error;

/// Shape of the key body a family works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// GOST R 34.10-94 (modular, DSA-like)
    Dsa,
    /// GOST R 34.10-2001 / 2012 (elliptic curve)
    Ec,
}

/// Failures reported by the algorithm library.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Unknown parameter set: {0}")]
    UnknownParamSet(Nid),

    #[error("Key body does not match the primitive")]
    KeyMismatch,

    #[error("Key has no {0}")]
    MissingComponent(&'static str),

    #[error("Primitive failed: {0}")]
    Primitive(String),
}

/// Algorithm library consumed by the key methods.
pub trait GostBackend: Send + Sync {
    /// Materialize domain parameters for `param_set` into a fresh key body.
    fn fill_params(&self, kind: KeyKind, param_set: Nid) -> Result<KeyBody, BackendError>;

    /// Fill secret and public values into a body holding domain parameters.
    fn generate_key(&self, body: &mut KeyBody) -> Result<(), BackendError>;

    /// Raw sign over an already computed digest.
    fn sign(&self, digest: &[u8], body: &KeyBody) -> Result<SignaturePair, BackendError>;

    /// Raw verify over an already computed digest.
    fn verify(&self, digest: &[u8], signature: &SignaturePair, body: &KeyBody) -> bool;
}
