//! GOST public-key methods.
//!
//! This crate is the control plane a public-key framework drives for the
//! GOST algorithm family: per-operation contexts, the control channel,
//! parameter-set resolution, parameter and key generation, signature
//! packing, and the MAC variants.
//!
//! # Methods
//!
//! - **GOST R 34.10-94**: modular (DSA-like) signatures
//! - **GOST R 34.10-2001**: elliptic-curve signatures on 256-bit curves
//! - **GOST R 34.10-2012**: elliptic-curve signatures, 256 and 512 bit
//! - **GOST 28147-89 MAC**: keyed MAC, plus its 2012 variant
//!
//! The number theory is not done here. Parameter tables, key pair generation
//! and raw sign/verify come from an algorithm library behind
//! [`GostBackend`]; digest state lives behind
//! [`gostpk_core::DigestCtx`].
//!
//! # Security Principles
//!
//! - Secrets are zeroized when their owner drops
//! - Secrets are never logged
//! - A cloned operation never shares the key agreement UKM
//! - Malformed signatures are indistinguishable from invalid ones

pub mod backend;
pub mod context;
pub mod ctrl;
pub mod error;
pub mod family;
pub mod keygen;
pub mod mac;
pub mod method;
pub mod params;
pub mod sign;

#[cfg(any(test, feature = "mock-backend"))]
pub mod mock;

pub use backend::{BackendError, GostBackend, KeyKind};
pub use context::{GostPmethData, PeerKeyUsage};
pub use ctrl::{Ctrl, CtrlReply, PeerKeyOp};
pub use error::{PmethError, PmethResult};
pub use family::{family_of, key_tag_for, Family, FAMILIES};
pub use mac::{MacPmethData, HEXKEY_CTRL, KEY_CTRL, MAC_KEY_LEN, MAC_TAG_LEN};
pub use method::{
    register_all, register_pmeth, GostMacMethod, GostPkeyMethod, PkeyCtx, PkeyMethod,
    RegisteredMethod,
};
pub use params::{resolve_param_set, Handled, PARAM_CTRL};
pub use sign::{pack_signature, unpack_signature};
