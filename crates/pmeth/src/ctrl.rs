//! Control requests.
//!
//! The host drives a key method through typed [`Ctrl`] requests. Every
//! method matches the full request set; anything it does not handle comes
//! back as [`PmethError::ControlCallFailed`], the "not applicable" outcome.

use gostpk_core::{DigestCtx, MessageDigest, Nid, PKey};
use zeroize::Zeroizing;

use crate::context::{GostPmethData, PeerKeyUsage};
use crate::error::{report, PmethError, PmethResult};
use crate::family::family_of;

/// Peer key bookkeeping for key agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerKeyOp {
    /// A peer key is being set on the operation.
    Set,
    /// Has the peer key been used?
    Query,
    /// The peer key has been used.
    MarkUsed,
}

/// A control request.
pub enum Ctrl<'a> {
    /// Select the digest used with the key.
    SetDigest(&'static MessageDigest),
    GetDigest,
    /// Select the parameter set for paramgen/keygen.
    SetParamSet(Nid),
    /// Install the shared secret (UKM) for key agreement.
    SetSharedSecret(&'a [u8]),
    PeerKey(PeerKeyOp),
    /// Raw MAC key.
    SetMacKey(&'a [u8]),
    /// A digest context is being set up for this key.
    DigestInit(&'a mut dyn DigestCtx),
    Pkcs7Encrypt,
    Pkcs7Decrypt,
    Pkcs7Sign,
    CmsEncrypt,
    CmsDecrypt,
    CmsSign,
}

impl Ctrl<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Ctrl::SetDigest(_) => "set_digest",
            Ctrl::GetDigest => "get_digest",
            Ctrl::SetParamSet(_) => "set_param_set",
            Ctrl::SetSharedSecret(_) => "set_shared_secret",
            Ctrl::PeerKey(_) => "peer_key",
            Ctrl::SetMacKey(_) => "set_mac_key",
            Ctrl::DigestInit(_) => "digest_init",
            Ctrl::Pkcs7Encrypt => "pkcs7_encrypt",
            Ctrl::Pkcs7Decrypt => "pkcs7_decrypt",
            Ctrl::Pkcs7Sign => "pkcs7_sign",
            Ctrl::CmsEncrypt => "cms_encrypt",
            Ctrl::CmsDecrypt => "cms_decrypt",
            Ctrl::CmsSign => "cms_sign",
        }
    }
}

/// Successful outcome of a control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlReply {
    Done,
    Digest(Option<&'static MessageDigest>),
    PeerKeyUsed(bool),
}

impl GostPmethData {
    /// Dispatches a control request against this context. `key` is the key
    /// attached to the operation, if any.
    pub fn ctrl(&mut self, key: Option<&PKey>, request: Ctrl<'_>) -> PmethResult<CtrlReply> {
        tracing::debug!(request = request.name(), "gost ctrl");

        match request {
            Ctrl::SetDigest(md) => {
                let family = key.and_then(|k| family_of(k.base_id()));
                if family.is_some_and(|f| f.accepts_digest(md.nid())) {
                    self.md = Some(md);
                    Ok(CtrlReply::Done)
                } else {
                    Err(report("ctrl", PmethError::InvalidDigestType))
                }
            }
            Ctrl::GetDigest => Ok(CtrlReply::Digest(self.md)),
            Ctrl::SetParamSet(nid) => {
                self.sign_param_nid = (!nid.is_undef()).then_some(nid);
                Ok(CtrlReply::Done)
            }
            Ctrl::SetSharedSecret(ukm) => {
                self.shared_ukm = None;
                let mut buf = Vec::new();
                buf.try_reserve_exact(ukm.len()).map_err(|e| {
                    report("ctrl", PmethError::AllocationFailure(e.to_string()))
                })?;
                buf.extend_from_slice(ukm);
                self.shared_ukm = Some(Zeroizing::new(buf));
                Ok(CtrlReply::Done)
            }
            Ctrl::PeerKey(PeerKeyOp::Set) => Ok(CtrlReply::Done),
            Ctrl::PeerKey(PeerKeyOp::Query) => Ok(CtrlReply::PeerKeyUsed(
                self.peer_key_used == PeerKeyUsage::Used,
            )),
            Ctrl::PeerKey(PeerKeyOp::MarkUsed) => {
                self.peer_key_used = PeerKeyUsage::Used;
                Ok(CtrlReply::PeerKeyUsed(true))
            }
            Ctrl::DigestInit(_)
            | Ctrl::Pkcs7Encrypt
            | Ctrl::Pkcs7Decrypt
            | Ctrl::Pkcs7Sign
            | Ctrl::CmsEncrypt
            | Ctrl::CmsDecrypt
            | Ctrl::CmsSign => Ok(CtrlReply::Done),
            Ctrl::SetMacKey(_) => Err(report("ctrl", PmethError::ControlCallFailed)),
        }
    }
}
