//! Host-framework types for the GOST public-key method workspace.
//!
//! This crate provides what a public-key framework hands to a key method:
//! object identifiers and the textual name registry, key handles, digest
//! descriptors and digest contexts. It also carries the shared ambient
//! pieces (error type, logging initialization, configuration).

pub mod config;
pub mod digest;
pub mod error;
pub mod key;
pub mod logging;
pub mod nid;

pub use config::{LoggingConfig, PmethConfig};
pub use digest::{DigestCtx, MessageDigest};
pub use error::{CoreError, CoreResult};
pub use key::{
    DsaKey, DsaParams, EcGroup, EcKey, KeyBody, MacKey, PKey, SecretBytes, SignaturePair,
};
pub use nid::{NameRegistry, Nid, ObjectRegistry};
