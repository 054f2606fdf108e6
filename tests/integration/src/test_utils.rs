//! Test utilities for key method integration tests

use gostpk_core::logging;
use gostpk_core::{LoggingConfig, NameRegistry, Nid, ObjectRegistry, PKey};
use gostpk_pmeth::mock::MockBackend;
use gostpk_pmeth::{GostBackend, GostMacMethod, GostPkeyMethod, PkeyCtx};
use rand::RngCore;
use std::sync::Arc;

/// 32-byte MAC key as 64 hex characters.
pub const SAMPLE_HEX_KEY: &str =
    "8182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9fa0";

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = logging::init_with(&test_logging());
}

/// Logging settings used by the test suite
pub fn test_logging() -> LoggingConfig {
    LoggingConfig {
        level: "debug".to_string(),
        json: false,
    }
}

pub fn mock_backend() -> Arc<dyn GostBackend> {
    Arc::new(MockBackend::new())
}

pub fn builtin_registry() -> Arc<dyn NameRegistry> {
    Arc::new(ObjectRegistry::builtin())
}

/// Random digest of `len` bytes
pub fn random_digest(len: usize) -> Vec<u8> {
    let mut digest = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut digest);
    digest
}

/// Fresh asymmetric operation with no key attached
pub fn gost_ctx(algorithm: Nid) -> PkeyCtx<GostPkeyMethod> {
    let method = GostPkeyMethod::new(algorithm, mock_backend()).expect("asymmetric method");
    PkeyCtx::new(method, None).expect("context init")
}

/// Fresh MAC operation
pub fn mac_ctx(algorithm: Nid) -> PkeyCtx<GostMacMethod> {
    let method = GostMacMethod::new(algorithm).expect("mac method");
    PkeyCtx::new(method, None).expect("context init")
}

/// Generate a key pair through the string control, the way a host would
pub fn generate_key(algorithm: Nid, paramset: &str) -> PKey {
    let mut ctx = gost_ctx(algorithm);
    ctx.paramgen_init().expect("paramgen_init");
    ctx.ctrl_str("paramset", Some(paramset)).expect("paramset");
    let key = ctx.keygen().expect("keygen");
    tracing::debug!(%algorithm, paramset, "test key generated");
    key
}

/// Signing operation with `key` attached
pub fn signing_ctx(key: PKey) -> PkeyCtx<GostPkeyMethod> {
    let method = GostPkeyMethod::new(key.base_id(), mock_backend()).expect("asymmetric method");
    PkeyCtx::new(method, Some(key)).expect("context init")
}
