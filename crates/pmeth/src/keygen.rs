//! Parameter and key generation for the asymmetric methods.

use gostpk_core::PKey;

use crate::backend::GostBackend;
use crate::context::GostPmethData;
use crate::error::{report, PmethError, PmethResult};
use crate::family::{family_of, key_tag_for, Family};

/// Builds a key holding only the domain parameters selected on `data`.
///
/// The key is tagged by parameter set, not by the calling family: 512-bit
/// sets give GOST R 34.10-2012 (512) keys and every 2001 curve gives a
/// GOST R 34.10-2012 (256) key.
pub fn paramgen(
    family: &Family,
    data: &GostPmethData,
    backend: &dyn GostBackend,
) -> PmethResult<PKey> {
    let param_set = data
        .param_set()
        .ok_or_else(|| report("paramgen", PmethError::NoParametersSet))?;

    let body = backend
        .fill_params(family.kind, param_set)
        .map_err(|e| report("paramgen", e.into()))?;

    let tag = key_tag_for(param_set)
        .filter(|tag| family_of(*tag).is_some_and(|f| f.kind == family.kind))
        .ok_or_else(|| report("paramgen", PmethError::InvalidParamSet))?;

    let mut key = PKey::new();
    key.assign(tag, body)?;
    tracing::debug!(%param_set, algorithm = %tag, "parameters generated");
    Ok(key)
}

/// Generates a full key pair on the selected parameter set.
pub fn keygen(
    family: &Family,
    data: &GostPmethData,
    backend: &dyn GostBackend,
) -> PmethResult<PKey> {
    let mut key = paramgen(family, data, backend)?;
    let body = key
        .body_mut()
        .ok_or_else(|| report("keygen", PmethError::MissingKey))?;
    backend
        .generate_key(body)
        .map_err(|e| report("keygen", e.into()))?;
    tracing::debug!(algorithm = %key.base_id(), "key pair generated");
    Ok(key)
}
