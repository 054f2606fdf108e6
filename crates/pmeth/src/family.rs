//! Per-family data for the asymmetric GOST algorithms.
//!
//! Everything that differs between GOST R 34.10-94, -2001, -2012 (256) and
//! -2012 (512) lives in [`FAMILIES`]: compatible digest, signature
//! half-width, canonical parameter-set table and the short codes accepted by
//! the `paramset` string control. Adding a family is one more entry here
//! (plus its key tag in [`KEY_TAGS`]).

use gostpk_core::Nid;

use crate::backend::KeyKind;

/// Static description of one asymmetric family.
#[derive(Debug)]
pub struct Family {
    /// Algorithm tag of keys in this family.
    pub algorithm: Nid,
    pub kind: KeyKind,
    /// The only digest a key of this family may be used with.
    pub digest: Nid,
    /// Byte width of each signature component.
    pub half_width: usize,
    /// Canonical parameter sets, checked after a registry lookup.
    pub param_sets: &'static [Nid],
    /// Single-letter `paramset` codes.
    pub letter_codes: &'static [(char, Nid)],
    /// `X` + letter `paramset` codes.
    pub exchange_codes: &'static [(char, Nid)],
}

impl Family {
    /// Encoded signature length.
    pub fn signature_len(&self) -> usize {
        2 * self.half_width
    }

    pub fn accepts_digest(&self, digest: Nid) -> bool {
        self.digest == digest
    }

    pub fn has_param_set(&self, param_set: Nid) -> bool {
        self.param_sets.contains(&param_set)
    }

    pub fn letter_code(&self, code: char) -> Option<Nid> {
        lookup_code(self.letter_codes, code)
    }

    pub fn exchange_code(&self, code: char) -> Option<Nid> {
        lookup_code(self.exchange_codes, code)
    }
}

fn lookup_code(table: &[(char, Nid)], code: char) -> Option<Nid> {
    let code = code.to_ascii_uppercase();
    table.iter().find(|(c, _)| *c == code).map(|(_, nid)| *nid)
}

const GOST94_PARAM_SETS: &[Nid] = &[
    Nid::GOSTR3410_94_TEST_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_A_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_B_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_C_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_D_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_XCHA_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_XCHB_PARAMSET,
    Nid::GOSTR3410_94_CRYPTOPRO_XCHC_PARAMSET,
];

const CURVE_256_PARAM_SETS: &[Nid] = &[
    Nid::GOSTR3410_2001_TEST_PARAMSET,
    Nid::GOSTR3410_2001_CRYPTOPRO_A_PARAMSET,
    Nid::GOSTR3410_2001_CRYPTOPRO_B_PARAMSET,
    Nid::GOSTR3410_2001_CRYPTOPRO_C_PARAMSET,
    Nid::GOSTR3410_2001_CRYPTOPRO_XCHA_PARAMSET,
    Nid::GOSTR3410_2001_CRYPTOPRO_XCHB_PARAMSET,
];

const CURVE_512_PARAM_SETS: &[Nid] = &[
    Nid::TC26_GOST_3410_2012_512_PARAMSET_A,
    Nid::TC26_GOST_3410_2012_512_PARAMSET_B,
];

const GOST94_LETTERS: &[(char, Nid)] = &[
    ('A', Nid::GOSTR3410_94_CRYPTOPRO_A_PARAMSET),
    ('B', Nid::GOSTR3410_94_CRYPTOPRO_B_PARAMSET),
    ('C', Nid::GOSTR3410_94_CRYPTOPRO_C_PARAMSET),
    ('D', Nid::GOSTR3410_94_CRYPTOPRO_D_PARAMSET),
];

const GOST94_EXCHANGE: &[(char, Nid)] = &[
    ('A', Nid::GOSTR3410_94_CRYPTOPRO_XCHA_PARAMSET),
    ('B', Nid::GOSTR3410_94_CRYPTOPRO_XCHB_PARAMSET),
    ('C', Nid::GOSTR3410_94_CRYPTOPRO_XCHC_PARAMSET),
];

const CURVE_256_LETTERS: &[(char, Nid)] = &[
    ('A', Nid::GOSTR3410_2001_CRYPTOPRO_A_PARAMSET),
    ('B', Nid::GOSTR3410_2001_CRYPTOPRO_B_PARAMSET),
    ('C', Nid::GOSTR3410_2001_CRYPTOPRO_C_PARAMSET),
    ('0', Nid::GOSTR3410_2001_TEST_PARAMSET),
];

const CURVE_256_EXCHANGE: &[(char, Nid)] = &[
    ('A', Nid::GOSTR3410_2001_CRYPTOPRO_XCHA_PARAMSET),
    ('B', Nid::GOSTR3410_2001_CRYPTOPRO_XCHB_PARAMSET),
];

const CURVE_512_LETTERS: &[(char, Nid)] = &[
    ('A', Nid::TC26_GOST_3410_2012_512_PARAMSET_A),
    ('B', Nid::TC26_GOST_3410_2012_512_PARAMSET_B),
];

/// The four asymmetric families.
pub static FAMILIES: [Family; 4] = [
    Family {
        algorithm: Nid::GOSTR3410_94,
        kind: KeyKind::Dsa,
        digest: Nid::GOSTR3411_94,
        half_width: 32,
        param_sets: GOST94_PARAM_SETS,
        letter_codes: GOST94_LETTERS,
        exchange_codes: GOST94_EXCHANGE,
    },
    Family {
        algorithm: Nid::GOSTR3410_2001,
        kind: KeyKind::Ec,
        digest: Nid::GOSTR3411_94,
        half_width: 32,
        param_sets: CURVE_256_PARAM_SETS,
        letter_codes: CURVE_256_LETTERS,
        exchange_codes: CURVE_256_EXCHANGE,
    },
    Family {
        algorithm: Nid::GOSTR3410_2012_256,
        kind: KeyKind::Ec,
        digest: Nid::GOSTR3411_2012_256,
        half_width: 32,
        param_sets: CURVE_256_PARAM_SETS,
        letter_codes: CURVE_256_LETTERS,
        exchange_codes: CURVE_256_EXCHANGE,
    },
    Family {
        algorithm: Nid::GOSTR3410_2012_512,
        kind: KeyKind::Ec,
        digest: Nid::GOSTR3411_2012_512,
        half_width: 64,
        param_sets: CURVE_512_PARAM_SETS,
        letter_codes: CURVE_512_LETTERS,
        exchange_codes: &[],
    },
];

/// Tag given to a key materialized from a parameter set. 2001 curves are
/// always tagged as 2012 (256) keys.
pub static KEY_TAGS: [(&[Nid], Nid); 3] = [
    (GOST94_PARAM_SETS, Nid::GOSTR3410_94),
    (CURVE_256_PARAM_SETS, Nid::GOSTR3410_2012_256),
    (CURVE_512_PARAM_SETS, Nid::GOSTR3410_2012_512),
];

/// Family of a key algorithm tag.
pub fn family_of(algorithm: Nid) -> Option<&'static Family> {
    FAMILIES.iter().find(|f| f.algorithm == algorithm)
}

/// Algorithm tag for a key built from `param_set`, if the set is known.
pub fn key_tag_for(param_set: Nid) -> Option<Nid> {
    KEY_TAGS
        .iter()
        .find(|(sets, _)| sets.contains(&param_set))
        .map(|(_, tag)| *tag)
}
