//! Per-operation state of the asymmetric GOST key methods.

use gostpk_core::{KeyBody, MessageDigest, Nid, PKey};
use std::fmt;
use zeroize::Zeroizing;

use crate::backend::KeyKind;
use crate::error::{report, PmethError, PmethResult};
use crate::family::family_of;

/// Whether the peer key of a key agreement has been consumed.
///
/// The control channel only moves the flag from `Unset` to `Used`:
/// announcing a peer key leaves it untouched. `NotUsed` is reserved for
/// hosts that record an explicit "peer key present but unused" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeerKeyUsage {
    #[default]
    Unset,
    NotUsed,
    Used,
}

/// State threaded through control, generation and sign/verify calls.
///
/// The shared secret (UKM) is owned exclusively by one context: it is
/// zeroized when the context drops and never carried over by
/// [`GostPmethData::duplicate`].
pub struct GostPmethData {
    pub(crate) md: Option<&'static MessageDigest>,
    pub(crate) sign_param_nid: Option<Nid>,
    pub(crate) shared_ukm: Option<Zeroizing<Vec<u8>>>,
    pub(crate) peer_key_used: PeerKeyUsage,
}

impl GostPmethData {
    /// Creates the state for a new operation.
    ///
    /// With a key attached, the parameter set is taken from it: the
    /// parameter id embedded in 94 domain parameters, or the curve name of
    /// an elliptic-curve key. Keys of any other algorithm, and curve keys
    /// without a group, are refused.
    pub fn new(key: Option<&PKey>) -> PmethResult<Self> {
        let mut data = Self {
            md: None,
            sign_param_nid: None,
            shared_ukm: None,
            peer_key_used: PeerKeyUsage::Unset,
        };

        let Some((algorithm, body)) = key.and_then(|k| k.body().map(|b| (k.base_id(), b))) else {
            return Ok(data);
        };

        let param_set = match (family_of(algorithm).map(|f| f.kind), body) {
            (Some(KeyKind::Dsa), KeyBody::Dsa(dsa)) => Some(dsa.param_set()),
            (Some(KeyKind::Ec), KeyBody::Ec(ec)) => ec.curve_name(),
            _ => None,
        };

        match param_set {
            Some(nid) => {
                data.sign_param_nid = (!nid.is_undef()).then_some(nid);
                tracing::debug!(%algorithm, param_set = %nid, "context created from key");
                Ok(data)
            }
            None => Err(report("init", PmethError::UnsupportedKey(algorithm))),
        }
    }

    /// Copies the scalar state into a fresh context. The shared secret
    /// stays with `self`.
    pub fn duplicate(&self) -> PmethResult<Self> {
        let mut dst = Self::new(None)?;
        dst.md = self.md;
        dst.sign_param_nid = self.sign_param_nid;
        dst.peer_key_used = self.peer_key_used;
        Ok(dst)
    }

    pub fn digest(&self) -> Option<&'static MessageDigest> {
        self.md
    }

    pub fn param_set(&self) -> Option<Nid> {
        self.sign_param_nid
    }

    pub fn shared_ukm(&self) -> Option<&[u8]> {
        self.shared_ukm.as_deref().map(Vec::as_slice)
    }

    pub fn peer_key_usage(&self) -> PeerKeyUsage {
        self.peer_key_used
    }
}

impl fmt::Debug for GostPmethData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GostPmethData")
            .field("md", &self.md.map(MessageDigest::nid))
            .field("sign_param_nid", &self.sign_param_nid)
            .field("shared_ukm_len", &self.shared_ukm.as_ref().map(|u| u.len()))
            .field("peer_key_used", &self.peer_key_used)
            .finish()
    }
}
