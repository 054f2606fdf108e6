//! Key handles.
//!
//! A [`PKey`] is the host's opaque key object: an algorithm tag plus an
//! optional body. Key methods read the tag to pick a family and the body to
//! reach domain parameters; the algorithm library fills the secret and
//! public parts.

use num_bigint::BigUint;
use std::fmt;
use zeroize::Zeroizing;

use crate::error::{CoreError, CoreResult};
use crate::nid::Nid;

/// Secret big-endian value, zeroized on drop and redacted in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretBytes(Zeroizing<Vec<u8>>);

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.0.len())
    }
}

/// Raw signature as produced by the sign primitive: the pair `(r, s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    pub r: BigUint,
    pub s: BigUint,
}

impl SignaturePair {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }
}

/// Domain parameters of a GOST R 34.10-94 key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaParams {
    /// Parameter set these values were loaded from.
    pub param_set: Nid,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub a: Vec<u8>,
}

/// GOST R 34.10-94 key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaKey {
    pub params: DsaParams,
    pub private_key: Option<SecretBytes>,
    pub public_key: Option<Vec<u8>>,
}

impl DsaKey {
    pub fn new(params: DsaParams) -> Self {
        Self {
            params,
            private_key: None,
            public_key: None,
        }
    }

    /// Parameter set identifier embedded in the domain parameters.
    pub fn param_set(&self) -> Nid {
        self.params.param_set
    }
}

/// Curve a GOST elliptic-curve key lives on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcGroup {
    curve_name: Nid,
    field_bytes: usize,
}

impl EcGroup {
    pub fn new(curve_name: Nid, field_bytes: usize) -> Self {
        Self {
            curve_name,
            field_bytes,
        }
    }

    /// Registered name of the curve.
    pub fn curve_name(&self) -> Nid {
        self.curve_name
    }

    /// Byte width of field elements and of the group order.
    pub fn field_bytes(&self) -> usize {
        self.field_bytes
    }
}

/// GOST R 34.10-2001 / 2012 key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EcKey {
    pub group: Option<EcGroup>,
    pub private_key: Option<SecretBytes>,
    pub public_key: Option<Vec<u8>>,
}

impl EcKey {
    pub fn with_group(group: EcGroup) -> Self {
        Self {
            group: Some(group),
            ..Self::default()
        }
    }

    pub fn curve_name(&self) -> Option<Nid> {
        self.group.as_ref().map(EcGroup::curve_name)
    }
}

/// 32-byte symmetric key for GOST 28147-89 MAC.
#[derive(Clone, PartialEq, Eq)]
pub struct MacKey(Zeroizing<[u8; 32]>);

impl MacKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MacKey([REDACTED])")
    }
}

/// Algorithm-specific key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBody {
    Dsa(DsaKey),
    Ec(EcKey),
    Mac(MacKey),
}

/// Host key handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PKey {
    algorithm: Nid,
    body: Option<KeyBody>,
}

impl PKey {
    /// Empty handle, to be filled by paramgen or keygen.
    pub fn new() -> Self {
        Self {
            algorithm: Nid::UNDEF,
            body: None,
        }
    }

    pub fn from_body(algorithm: Nid, body: KeyBody) -> Self {
        Self {
            algorithm,
            body: Some(body),
        }
    }

    /// Attach a body and tag it. An already populated handle is left untouched.
    pub fn assign(&mut self, algorithm: Nid, body: KeyBody) -> CoreResult<()> {
        if self.body.is_some() {
            return Err(CoreError::AlreadyAssigned(self.algorithm));
        }
        self.algorithm = algorithm;
        self.body = Some(body);
        Ok(())
    }

    /// Algorithm tag, `Nid::UNDEF` for an empty handle.
    pub fn base_id(&self) -> Nid {
        self.algorithm
    }

    pub fn body(&self) -> Option<&KeyBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut KeyBody> {
        self.body.as_mut()
    }

    pub fn dsa(&self) -> Option<&DsaKey> {
        match &self.body {
            Some(KeyBody::Dsa(key)) => Some(key),
            _ => None,
        }
    }

    pub fn ec(&self) -> Option<&EcKey> {
        match &self.body {
            Some(KeyBody::Ec(key)) => Some(key),
            _ => None,
        }
    }

    pub fn mac(&self) -> Option<&MacKey> {
        match &self.body {
            Some(KeyBody::Mac(key)) => Some(key),
            _ => None,
        }
    }
}

impl Default for PKey {
    fn default() -> Self {
        Self::new()
    }
}
