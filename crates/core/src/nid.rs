//! Object identifiers and the textual name registry.
//!
//! Every algorithm, digest and parameter set the key methods deal with is
//! addressed by a [`Nid`]. The [`NameRegistry`] trait is the lookup surface
//! used to turn user supplied names (short name, long name or dotted OID)
//! into identifiers; [`ObjectRegistry`] is the built-in table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nid(u32);

impl Nid {
    /// The "undefined" identifier.
    pub const UNDEF: Nid = Nid(0);

    // Public key algorithms
    pub const GOSTR3410_94: Nid = Nid(1);
    pub const GOSTR3410_2001: Nid = Nid(2);
    pub const GOSTR3410_2012_256: Nid = Nid(3);
    pub const GOSTR3410_2012_512: Nid = Nid(4);
    pub const GOST28147_89_MAC: Nid = Nid(5);
    pub const GOST_MAC_12: Nid = Nid(6);

    // Digests
    pub const GOSTR3411_94: Nid = Nid(10);
    pub const GOSTR3411_2012_256: Nid = Nid(11);
    pub const GOSTR3411_2012_512: Nid = Nid(12);

    // GOST R 34.10-94 parameter sets
    pub const GOSTR3410_94_TEST_PARAMSET: Nid = Nid(20);
    pub const GOSTR3410_94_CRYPTOPRO_A_PARAMSET: Nid = Nid(21);
    pub const GOSTR3410_94_CRYPTOPRO_B_PARAMSET: Nid = Nid(22);
    pub const GOSTR3410_94_CRYPTOPRO_C_PARAMSET: Nid = Nid(23);
    pub const GOSTR3410_94_CRYPTOPRO_D_PARAMSET: Nid = Nid(24);
    pub const GOSTR3410_94_CRYPTOPRO_XCHA_PARAMSET: Nid = Nid(25);
    pub const GOSTR3410_94_CRYPTOPRO_XCHB_PARAMSET: Nid = Nid(26);
    pub const GOSTR3410_94_CRYPTOPRO_XCHC_PARAMSET: Nid = Nid(27);

    // GOST R 34.10-2001 curves (shared with 2012 256-bit keys)
    pub const GOSTR3410_2001_TEST_PARAMSET: Nid = Nid(30);
    pub const GOSTR3410_2001_CRYPTOPRO_A_PARAMSET: Nid = Nid(31);
    pub const GOSTR3410_2001_CRYPTOPRO_B_PARAMSET: Nid = Nid(32);
    pub const GOSTR3410_2001_CRYPTOPRO_C_PARAMSET: Nid = Nid(33);
    pub const GOSTR3410_2001_CRYPTOPRO_XCHA_PARAMSET: Nid = Nid(34);
    pub const GOSTR3410_2001_CRYPTOPRO_XCHB_PARAMSET: Nid = Nid(35);

    // GOST R 34.10-2012 512-bit curves
    pub const TC26_GOST_3410_2012_512_PARAMSET_A: Nid = Nid(40);
    pub const TC26_GOST_3410_2012_512_PARAMSET_B: Nid = Nid(41);

    // Objects from outside the GOST family
    pub const SHA256: Nid = Nid(90);
    pub const X9_62_PRIME256V1: Nid = Nid(91);
    pub const RSA_ENCRYPTION: Nid = Nid(92);

    pub const fn from_raw(raw: u32) -> Self {
        Nid(raw)
    }

    pub const fn as_raw(self) -> u32 {
        self.0
    }

    pub fn is_undef(self) -> bool {
        self == Nid::UNDEF
    }

    /// Short name from the built-in table, if the identifier is known.
    pub fn short_name(self) -> Option<&'static str> {
        BUILTIN_OBJECTS
            .iter()
            .find(|entry| entry.nid == self)
            .map(|entry| entry.short_name)
    }
}

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "nid#{}", self.0),
        }
    }
}

/// A registered object: identifier plus its textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectEntry {
    pub nid: Nid,
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub oid: Option<&'static str>,
}

impl ObjectEntry {
    pub const fn new(
        nid: Nid,
        short_name: &'static str,
        long_name: &'static str,
        oid: Option<&'static str>,
    ) -> Self {
        Self {
            nid,
            short_name,
            long_name,
            oid,
        }
    }
}

/// Lookup from textual identifiers to [`Nid`]s.
pub trait NameRegistry: Send + Sync {
    /// Resolve a short name, long name or dotted OID.
    fn txt2nid(&self, text: &str) -> Option<Nid>;

    /// Short name of a registered identifier.
    fn nid2sn(&self, nid: Nid) -> Option<&str>;
}

/// Built-in object table.
static BUILTIN_OBJECTS: &[ObjectEntry] = &[
    ObjectEntry::new(Nid::GOSTR3410_94, "gost94", "GOST R 34.10-94", Some("1.2.643.2.2.20")),
    ObjectEntry::new(Nid::GOSTR3410_2001, "gost2001", "GOST R 34.10-2001", Some("1.2.643.2.2.19")),
    ObjectEntry::new(
        Nid::GOSTR3410_2012_256,
        "gost2012_256",
        "GOST R 34.10-2012 with 256 bit modulus",
        Some("1.2.643.7.1.1.1.1"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2012_512,
        "gost2012_512",
        "GOST R 34.10-2012 with 512 bit modulus",
        Some("1.2.643.7.1.1.1.2"),
    ),
    ObjectEntry::new(
        Nid::GOST28147_89_MAC,
        "gost-mac",
        "GOST 28147-89 MAC",
        Some("1.2.643.2.2.22"),
    ),
    ObjectEntry::new(Nid::GOST_MAC_12, "gost-mac-12", "GOST 28147-89 MAC 12", None),
    ObjectEntry::new(Nid::GOSTR3411_94, "md_gost94", "GOST R 34.11-94", Some("1.2.643.2.2.9")),
    ObjectEntry::new(
        Nid::GOSTR3411_2012_256,
        "md_gost12_256",
        "GOST R 34.11-2012 with 256 bit hash",
        Some("1.2.643.7.1.1.2.2"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3411_2012_512,
        "md_gost12_512",
        "GOST R 34.11-2012 with 512 bit hash",
        Some("1.2.643.7.1.1.2.3"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_TEST_PARAMSET,
        "id-GostR3410-94-TestParamSet",
        "id-GostR3410-94-TestParamSet",
        Some("1.2.643.2.2.32.0"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_A_PARAMSET,
        "id-GostR3410-94-CryptoPro-A-ParamSet",
        "id-GostR3410-94-CryptoPro-A-ParamSet",
        Some("1.2.643.2.2.32.2"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_B_PARAMSET,
        "id-GostR3410-94-CryptoPro-B-ParamSet",
        "id-GostR3410-94-CryptoPro-B-ParamSet",
        Some("1.2.643.2.2.32.3"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_C_PARAMSET,
        "id-GostR3410-94-CryptoPro-C-ParamSet",
        "id-GostR3410-94-CryptoPro-C-ParamSet",
        Some("1.2.643.2.2.32.4"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_D_PARAMSET,
        "id-GostR3410-94-CryptoPro-D-ParamSet",
        "id-GostR3410-94-CryptoPro-D-ParamSet",
        Some("1.2.643.2.2.32.5"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_XCHA_PARAMSET,
        "id-GostR3410-94-CryptoPro-XchA-ParamSet",
        "id-GostR3410-94-CryptoPro-XchA-ParamSet",
        Some("1.2.643.2.2.33.1"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_XCHB_PARAMSET,
        "id-GostR3410-94-CryptoPro-XchB-ParamSet",
        "id-GostR3410-94-CryptoPro-XchB-ParamSet",
        Some("1.2.643.2.2.33.2"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_94_CRYPTOPRO_XCHC_PARAMSET,
        "id-GostR3410-94-CryptoPro-XchC-ParamSet",
        "id-GostR3410-94-CryptoPro-XchC-ParamSet",
        Some("1.2.643.2.2.33.3"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_TEST_PARAMSET,
        "id-GostR3410-2001-TestParamSet",
        "id-GostR3410-2001-TestParamSet",
        Some("1.2.643.2.2.35.0"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_CRYPTOPRO_A_PARAMSET,
        "id-GostR3410-2001-CryptoPro-A-ParamSet",
        "id-GostR3410-2001-CryptoPro-A-ParamSet",
        Some("1.2.643.2.2.35.1"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_CRYPTOPRO_B_PARAMSET,
        "id-GostR3410-2001-CryptoPro-B-ParamSet",
        "id-GostR3410-2001-CryptoPro-B-ParamSet",
        Some("1.2.643.2.2.35.2"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_CRYPTOPRO_C_PARAMSET,
        "id-GostR3410-2001-CryptoPro-C-ParamSet",
        "id-GostR3410-2001-CryptoPro-C-ParamSet",
        Some("1.2.643.2.2.35.3"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_CRYPTOPRO_XCHA_PARAMSET,
        "id-GostR3410-2001-CryptoPro-XchA-ParamSet",
        "id-GostR3410-2001-CryptoPro-XchA-ParamSet",
        Some("1.2.643.2.2.36.0"),
    ),
    ObjectEntry::new(
        Nid::GOSTR3410_2001_CRYPTOPRO_XCHB_PARAMSET,
        "id-GostR3410-2001-CryptoPro-XchB-ParamSet",
        "id-GostR3410-2001-CryptoPro-XchB-ParamSet",
        Some("1.2.643.2.2.36.1"),
    ),
    ObjectEntry::new(
        Nid::TC26_GOST_3410_2012_512_PARAMSET_A,
        "id-tc26-gost-3410-2012-512-paramSetA",
        "GOST R 34.10-2012 (512 bit) ParamSet A",
        Some("1.2.643.7.1.2.1.2.1"),
    ),
    ObjectEntry::new(
        Nid::TC26_GOST_3410_2012_512_PARAMSET_B,
        "id-tc26-gost-3410-2012-512-paramSetB",
        "GOST R 34.10-2012 (512 bit) ParamSet B",
        Some("1.2.643.7.1.2.1.2.2"),
    ),
    ObjectEntry::new(Nid::SHA256, "SHA256", "sha256", Some("2.16.840.1.101.3.4.2.1")),
    ObjectEntry::new(
        Nid::X9_62_PRIME256V1,
        "prime256v1",
        "prime256v1",
        Some("1.2.840.10045.3.1.7"),
    ),
    ObjectEntry::new(
        Nid::RSA_ENCRYPTION,
        "rsaEncryption",
        "rsaEncryption",
        Some("1.2.840.113549.1.1.1"),
    ),
];

/// In-memory object registry seeded with the built-in table.
#[derive(Debug, Clone)]
pub struct ObjectRegistry {
    entries: Vec<ObjectEntry>,
}

impl ObjectRegistry {
    /// Registry holding every built-in object.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_OBJECTS.to_vec(),
        }
    }

    /// Adds an object. Returns `false` if the identifier or short name is taken.
    pub fn register(&mut self, entry: ObjectEntry) -> bool {
        let clash = self
            .entries
            .iter()
            .any(|e| e.nid == entry.nid || e.short_name == entry.short_name);
        if clash {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NameRegistry for ObjectRegistry {
    fn txt2nid(&self, text: &str) -> Option<Nid> {
        // Short names win over long names, which win over dotted OIDs.
        self.entries
            .iter()
            .find(|e| e.short_name == text)
            .or_else(|| self.entries.iter().find(|e| e.long_name == text))
            .or_else(|| self.entries.iter().find(|e| e.oid == Some(text)))
            .map(|e| e.nid)
    }

    fn nid2sn(&self, nid: Nid) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.nid == nid)
            .map(|e| e.short_name)
    }
}
