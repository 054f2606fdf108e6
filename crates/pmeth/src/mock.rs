//! Deterministic stand-ins for the algorithm library and digest engine.
//!
//! ⚠️ NOT A SIGNATURE SCHEME ⚠️
//!
//! [`MockBackend`] derives "signatures" from the public key with BLAKE3, so
//! anyone holding the public key can forge them. It exists so the key
//! methods can be exercised end to end without the GOST number theory.

use blake3::Hasher;
use gostpk_core::digest::MessageDigest;
use gostpk_core::key::SecretBytes;
use gostpk_core::{
    CoreError, CoreResult, DigestCtx, DsaKey, DsaParams, EcGroup, EcKey, KeyBody, Nid,
    SignaturePair,
};
use num_bigint::BigUint;
use rand::RngCore;

use crate::backend::{BackendError, GostBackend, KeyKind};
use crate::family::key_tag_for;

/// Mock algorithm library.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    fail_keygen: bool,
    fail_sign: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `generate_key` call fails.
    pub fn with_failing_keygen(mut self) -> Self {
        self.fail_keygen = true;
        self
    }

    /// Every `sign` call fails.
    pub fn with_failing_sign(mut self) -> Self {
        self.fail_sign = true;
        self
    }

    fn width(body: &KeyBody) -> Result<usize, BackendError> {
        match body {
            KeyBody::Dsa(dsa) => Ok(dsa.params.q.len()),
            KeyBody::Ec(ec) => ec
                .group
                .as_ref()
                .map(EcGroup::field_bytes)
                .ok_or(BackendError::MissingComponent("group")),
            KeyBody::Mac(_) => Err(BackendError::KeyMismatch),
        }
    }

    fn public(body: &KeyBody) -> Result<&[u8], BackendError> {
        let public = match body {
            KeyBody::Dsa(dsa) => dsa.public_key.as_deref(),
            KeyBody::Ec(ec) => ec.public_key.as_deref(),
            KeyBody::Mac(_) => return Err(BackendError::KeyMismatch),
        };
        public.ok_or(BackendError::MissingComponent("public key"))
    }

    fn component(label: &str, public: &[u8], digest: &[u8], width: usize) -> BigUint {
        let mut hasher = Hasher::new_derive_key("gostpk mock signature component");
        hasher.update(label.as_bytes());
        hasher.update(public);
        hasher.update(digest);
        let mut out = vec![0u8; width];
        hasher.finalize_xof().fill(&mut out);
        BigUint::from_bytes_be(&out)
    }
}

impl GostBackend for MockBackend {
    fn fill_params(&self, kind: KeyKind, param_set: Nid) -> Result<KeyBody, BackendError> {
        match (kind, key_tag_for(param_set)) {
            (KeyKind::Dsa, Some(Nid::GOSTR3410_94)) => {
                let seed = blake3::hash(&param_set.as_raw().to_be_bytes());
                let mut p = vec![0xffu8; 128];
                p[96..].copy_from_slice(seed.as_bytes());
                Ok(KeyBody::Dsa(DsaKey::new(DsaParams {
                    param_set,
                    p,
                    q: seed.as_bytes().to_vec(),
                    a: vec![0x02],
                })))
            }
            (KeyKind::Ec, Some(Nid::GOSTR3410_2012_256)) => {
                Ok(KeyBody::Ec(EcKey::with_group(EcGroup::new(param_set, 32))))
            }
            (KeyKind::Ec, Some(Nid::GOSTR3410_2012_512)) => {
                Ok(KeyBody::Ec(EcKey::with_group(EcGroup::new(param_set, 64))))
            }
            _ => Err(BackendError::UnknownParamSet(param_set)),
        }
    }

    fn generate_key(&self, body: &mut KeyBody) -> Result<(), BackendError> {
        if self.fail_keygen {
            return Err(BackendError::Primitive("keygen disabled".to_string()));
        }
        let width = Self::width(body)?;
        let mut secret = vec![0u8; width];
        rand::thread_rng().fill_bytes(&mut secret);

        let mut public = vec![0u8; width];
        let mut hasher = Hasher::new_derive_key("gostpk mock public key");
        hasher.update(&secret);
        hasher.finalize_xof().fill(&mut public);

        match body {
            KeyBody::Dsa(dsa) => {
                dsa.private_key = Some(SecretBytes::new(secret));
                dsa.public_key = Some(public);
            }
            KeyBody::Ec(ec) => {
                ec.private_key = Some(SecretBytes::new(secret));
                ec.public_key = Some(public);
            }
            KeyBody::Mac(_) => return Err(BackendError::KeyMismatch),
        }
        Ok(())
    }

    fn sign(&self, digest: &[u8], body: &KeyBody) -> Result<SignaturePair, BackendError> {
        if self.fail_sign {
            return Err(BackendError::Primitive("sign disabled".to_string()));
        }
        let width = Self::width(body)?;
        let public = Self::public(body)?;
        Ok(SignaturePair::new(
            Self::component("r", public, digest, width),
            Self::component("s", public, digest, width),
        ))
    }

    fn verify(&self, digest: &[u8], signature: &SignaturePair, body: &KeyBody) -> bool {
        let (Ok(width), Ok(public)) = (Self::width(body), Self::public(body)) else {
            return false;
        };
        signature.r == Self::component("r", public, digest, width)
            && signature.s == Self::component("s", public, digest, width)
    }
}

/// Keyed digest context producing BLAKE3-based tags of the descriptor's size.
pub struct MockMacDigest {
    md: &'static MessageDigest,
    key: Option<[u8; 32]>,
    data: Vec<u8>,
}

impl MockMacDigest {
    pub fn new(md: &'static MessageDigest) -> Self {
        Self {
            md,
            key: None,
            data: Vec::new(),
        }
    }

    pub fn key(&self) -> Option<&[u8; 32]> {
        self.key.as_ref()
    }
}

impl DigestCtx for MockMacDigest {
    fn md(&self) -> &'static MessageDigest {
        self.md
    }

    fn update(&mut self, data: &[u8]) -> CoreResult<()> {
        self.data.extend_from_slice(data);
        Ok(())
    }

    fn set_key(&mut self, key: &[u8; 32]) -> CoreResult<()> {
        self.key = Some(*key);
        Ok(())
    }

    fn finalize(&mut self, out: &mut [u8]) -> CoreResult<usize> {
        let key = self.key.as_ref().ok_or(CoreError::KeyNotSet)?;
        let size = self.md.size();
        if out.len() < size {
            return Err(CoreError::OutputTooSmall {
                needed: size,
                got: out.len(),
            });
        }
        let tag = blake3::keyed_hash(key, &self.data);
        out[..size].copy_from_slice(&tag.as_bytes()[..size]);
        self.data.clear();
        Ok(size)
    }
}
