//! Digest descriptors and digest contexts.
//!
//! A [`MessageDigest`] is a static descriptor, the way a framework exposes
//! its digest tables: key methods store `&'static` references to them and
//! never copy. A [`DigestCtx`] is a running digest computation driven by the
//! host; MAC key methods install their key through its keyed-mode control
//! and produce tags by finalizing it.

use crate::error::CoreResult;
use crate::nid::Nid;

/// Static digest descriptor.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageDigest {
    nid: Nid,
    size: usize,
}

impl MessageDigest {
    pub const fn new(nid: Nid, size: usize) -> Self {
        Self { nid, size }
    }

    pub fn nid(&self) -> Nid {
        self.nid
    }

    /// Output size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// GOST R 34.11-94.
pub static MD_GOST94: MessageDigest = MessageDigest::new(Nid::GOSTR3411_94, 32);
/// GOST R 34.11-2012, 256-bit output.
pub static MD_GOST12_256: MessageDigest = MessageDigest::new(Nid::GOSTR3411_2012_256, 32);
/// GOST R 34.11-2012, 512-bit output.
pub static MD_GOST12_512: MessageDigest = MessageDigest::new(Nid::GOSTR3411_2012_512, 64);
/// GOST 28147-89 MAC, 4-byte tag.
pub static GOST_MAC: MessageDigest = MessageDigest::new(Nid::GOST28147_89_MAC, 4);
/// GOST 28147-89 MAC in the 2012 profile, 4-byte tag.
pub static GOST_MAC_12: MessageDigest = MessageDigest::new(Nid::GOST_MAC_12, 4);
pub static SHA256: MessageDigest = MessageDigest::new(Nid::SHA256, 32);

/// Running digest computation owned by the host.
pub trait DigestCtx {
    /// Descriptor of the algorithm being computed.
    fn md(&self) -> &'static MessageDigest;

    /// Feed data.
    fn update(&mut self, data: &[u8]) -> CoreResult<()>;

    /// Keyed-mode control: install a 32-byte key.
    fn set_key(&mut self, key: &[u8; 32]) -> CoreResult<()>;

    /// Finalize into `out`, returning the number of bytes written.
    fn finalize(&mut self, out: &mut [u8]) -> CoreResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_sizes() {
        assert_eq!(MD_GOST94.size(), 32);
        assert_eq!(MD_GOST12_512.size(), 64);
        assert_eq!(GOST_MAC.size(), 4);
        assert_eq!(GOST_MAC_12.nid(), Nid::GOST_MAC_12);
    }

    #[test]
    fn test_statics_are_distinct_references() {
        assert!(!std::ptr::eq(&MD_GOST12_256, &MD_GOST12_512));
        assert_ne!(MD_GOST12_256, MD_GOST12_512);
    }
}
