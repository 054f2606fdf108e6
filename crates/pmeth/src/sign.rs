//! Signing and verification with fixed-width signature packing.
//!
//! A GOST R 34.10 signature on the wire is `s || r`, each component a
//! big-endian unsigned integer left-padded with zeros to the family's
//! half-width (32 bytes, or 64 for 2012-512 keys).

use gostpk_core::{PKey, SignaturePair};
use num_bigint::BigUint;

use crate::backend::GostBackend;
use crate::error::{report, PmethError, PmethResult};
use crate::family::family_of;

/// Writes `value` big-endian into `out`, zero-padded on the left.
fn store_component(value: &BigUint, out: &mut [u8]) -> PmethResult<()> {
    let bytes = value.to_bytes_be();
    // to_bytes_be gives [0] for zero; a zero component is all padding.
    let bytes: &[u8] = if value.bits() == 0 { &[] } else { &bytes };
    if bytes.len() > out.len() {
        return Err(PmethError::SignatureOverflow {
            half_width: out.len(),
        });
    }
    let pad = out.len() - bytes.len();
    out[..pad].fill(0);
    out[pad..].copy_from_slice(bytes);
    Ok(())
}

/// Packs `signature` into `out`, returning the encoded length.
pub fn pack_signature(
    signature: &SignaturePair,
    half_width: usize,
    out: &mut [u8],
) -> PmethResult<usize> {
    let needed = 2 * half_width;
    if out.len() < needed {
        return Err(PmethError::BufferTooSmall {
            needed,
            got: out.len(),
        });
    }
    let (s_part, r_part) = out[..needed].split_at_mut(half_width);
    store_component(&signature.s, s_part)?;
    store_component(&signature.r, r_part)?;
    Ok(needed)
}

/// Splits an encoded signature. `None` unless `bytes` is exactly
/// `2 * half_width` long.
pub fn unpack_signature(bytes: &[u8], half_width: usize) -> Option<SignaturePair> {
    if half_width == 0 || bytes.len() != 2 * half_width {
        return None;
    }
    let (s_part, r_part) = bytes.split_at(half_width);
    Some(SignaturePair {
        r: BigUint::from_bytes_be(r_part),
        s: BigUint::from_bytes_be(s_part),
    })
}

/// Signs a digest with the key attached to the operation.
///
/// With `out == None` only the signature length is returned and no
/// cryptography is performed.
pub fn sign(
    key: Option<&PKey>,
    backend: &dyn GostBackend,
    out: Option<&mut [u8]>,
    digest: &[u8],
) -> PmethResult<usize> {
    let key = key.ok_or_else(|| report("sign", PmethError::MissingKey))?;
    let family = family_of(key.base_id())
        .ok_or_else(|| report("sign", PmethError::UnsupportedKey(key.base_id())))?;
    let needed = family.signature_len();

    let Some(out) = out else {
        return Ok(needed);
    };
    if out.len() < needed {
        return Err(report(
            "sign",
            PmethError::BufferTooSmall {
                needed,
                got: out.len(),
            },
        ));
    }

    let body = key
        .body()
        .ok_or_else(|| report("sign", PmethError::MissingKey))?;
    let signature = backend
        .sign(digest, body)
        .map_err(|e| report("sign", e.into()))?;

    pack_signature(&signature, family.half_width, out).map_err(|e| report("sign", e))
}

/// Verifies an encoded signature over a digest.
///
/// A missing or mis-sized signature is reported exactly like a signature
/// that does not verify.
pub fn verify(
    key: Option<&PKey>,
    backend: &dyn GostBackend,
    signature: Option<&[u8]>,
    digest: &[u8],
) -> bool {
    let Some((key, signature)) = key.zip(signature) else {
        return false;
    };
    let Some(family) = family_of(key.base_id()) else {
        return false;
    };
    let Some(body) = key.body() else {
        return false;
    };
    match unpack_signature(signature, family.half_width) {
        Some(pair) => backend.verify(digest, &pair, body),
        None => false,
    }
}
