//! Key method state for the GOST 28147-89 MAC algorithms.

use gostpk_core::{DigestCtx, KeyBody, MacKey, MessageDigest, Nid, PKey};
use std::fmt;
use zeroize::Zeroizing;

use crate::ctrl::{Ctrl, CtrlReply};
use crate::error::{report, PmethError, PmethResult};
use crate::params::Handled;

/// MAC key length in bytes.
pub const MAC_KEY_LEN: usize = 32;

/// Length of the produced MAC tag.
pub const MAC_TAG_LEN: usize = 4;

/// Raw key string control.
pub const KEY_CTRL: &str = "key";

/// Hex key string control.
pub const HEXKEY_CTRL: &str = "hexkey";

/// Per-operation MAC state.
pub struct MacPmethData {
    md: Option<&'static MessageDigest>,
    key: Zeroizing<[u8; MAC_KEY_LEN]>,
    key_set: bool,
}

impl MacPmethData {
    pub fn new() -> Self {
        Self {
            md: None,
            key: Zeroizing::new([0u8; MAC_KEY_LEN]),
            key_set: false,
        }
    }

    /// Copies the whole state, key included.
    pub fn duplicate(&self) -> Self {
        Self {
            md: self.md,
            key: self.key.clone(),
            key_set: self.key_set,
        }
    }

    pub fn digest(&self) -> Option<&'static MessageDigest> {
        self.md
    }

    pub fn is_key_set(&self) -> bool {
        self.key_set
    }

    pub fn set_key(&mut self, key: &[u8]) -> PmethResult<()> {
        let key: &[u8; MAC_KEY_LEN] = key
            .try_into()
            .map_err(|_| report("mac_ctrl", PmethError::InvalidMacKeyLength))?;
        self.key.copy_from_slice(key);
        self.key_set = true;
        Ok(())
    }

    /// Hex-decodes `text` (`:` separators allowed) and installs the result.
    pub fn set_key_hex(&mut self, text: &str) -> PmethResult<()> {
        let digits: String = text.chars().filter(|c| *c != ':').collect();
        let decoded = hex::decode(digits)
            .map(Zeroizing::new)
            .map_err(|_| report("mac_ctrl_str", PmethError::InvalidMacKeyLength))?;
        self.set_key(&decoded)
    }

    /// Dispatches a control request. `key` is the key attached to the
    /// operation, if any.
    pub fn ctrl(&mut self, key: Option<&PKey>, request: Ctrl<'_>) -> PmethResult<CtrlReply> {
        tracing::debug!(request = request.name(), "mac ctrl");

        match request {
            Ctrl::SetDigest(md) => {
                if md.nid() == Nid::GOST28147_89_MAC || md.nid() == Nid::GOST_MAC_12 {
                    self.md = Some(md);
                    Ok(CtrlReply::Done)
                } else {
                    Err(report("mac_ctrl", PmethError::InvalidDigestType))
                }
            }
            Ctrl::GetDigest => Ok(CtrlReply::Digest(self.md)),
            Ctrl::Pkcs7Encrypt | Ctrl::Pkcs7Decrypt | Ctrl::Pkcs7Sign => Ok(CtrlReply::Done),
            Ctrl::SetMacKey(bytes) => {
                self.set_key(bytes)?;
                Ok(CtrlReply::Done)
            }
            Ctrl::DigestInit(mctx) => {
                let attached = key.and_then(PKey::mac).map(MacKey::as_bytes);
                let mac_key = if self.key_set {
                    &*self.key
                } else {
                    attached.ok_or_else(|| report("mac_ctrl", PmethError::MacKeyNotSet))?
                };
                mctx.set_key(mac_key)?;
                Ok(CtrlReply::Done)
            }
            Ctrl::SetParamSet(_)
            | Ctrl::SetSharedSecret(_)
            | Ctrl::PeerKey(_)
            | Ctrl::CmsEncrypt
            | Ctrl::CmsDecrypt
            | Ctrl::CmsSign => Err(report("mac_ctrl", PmethError::ControlCallFailed)),
        }
    }

    /// String control entry point for the MAC methods.
    pub fn ctrl_str(&mut self, name: &str, value: Option<&str>) -> PmethResult<Handled> {
        match name {
            KEY_CTRL => {
                let value =
                    value.ok_or_else(|| report("mac_ctrl_str", PmethError::InvalidMacKeyLength))?;
                self.set_key(value.as_bytes())?;
            }
            HEXKEY_CTRL => {
                let value =
                    value.ok_or_else(|| report("mac_ctrl_str", PmethError::InvalidMacKeyLength))?;
                self.set_key_hex(value)?;
            }
            _ => return Ok(Handled::NotApplicable),
        }
        Ok(Handled::Applied)
    }

    /// Wraps the installed key into a key handle tagged `mac_algorithm`.
    pub fn keygen(&self, mac_algorithm: Nid) -> PmethResult<PKey> {
        if !self.key_set {
            return Err(report("mac_keygen", PmethError::MacKeyNotSet));
        }
        let mut key = PKey::new();
        key.assign(mac_algorithm, KeyBody::Mac(MacKey::new(*self.key)))?;
        Ok(key)
    }

    /// Produces the MAC tag by finalizing `mctx`. With `out == None` only
    /// the tag length is returned.
    pub fn signctx(&self, out: Option<&mut [u8]>, mctx: &mut dyn DigestCtx) -> PmethResult<usize> {
        let Some(out) = out else {
            return Ok(MAC_TAG_LEN);
        };
        if out.len() < MAC_TAG_LEN {
            return Err(report(
                "mac_signctx",
                PmethError::BufferTooSmall {
                    needed: MAC_TAG_LEN,
                    got: out.len(),
                },
            ));
        }
        let written = mctx
            .finalize(&mut out[..MAC_TAG_LEN])
            .map_err(|e| report("mac_signctx", e.into()))?;
        Ok(written)
    }
}

impl Default for MacPmethData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MacPmethData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacPmethData")
            .field("md", &self.md.map(MessageDigest::nid))
            .field("key_set", &self.key_set)
            .finish_non_exhaustive()
    }
}
