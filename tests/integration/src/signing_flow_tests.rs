//! End-to-end parameter generation, key generation, sign and verify

use crate::test_utils::*;
use gostpk_core::digest::{MD_GOST12_256, MD_GOST12_512, MD_GOST94};
use gostpk_core::Nid;
use gostpk_pmeth::{Ctrl, CtrlReply, PmethError};

#[test]
fn test_512_paramset_a_full_flow() {
    init_tracing();

    let mut ctx = gost_ctx(Nid::GOSTR3410_2012_512);
    ctx.paramgen_init().unwrap();
    ctx.ctrl_str("paramset", Some("A")).unwrap();
    let params = ctx.paramgen().unwrap();
    assert_eq!(params.base_id(), Nid::GOSTR3410_2012_512);
    assert!(params.ec().unwrap().private_key.is_none());

    let key = ctx.keygen().unwrap();
    assert_eq!(key.base_id(), Nid::GOSTR3410_2012_512);
    assert_eq!(
        key.ec().unwrap().curve_name(),
        Some(Nid::TC26_GOST_3410_2012_512_PARAMSET_A)
    );

    let mut signer = signing_ctx(key);
    signer.ctrl(Ctrl::SetDigest(&MD_GOST12_512)).unwrap();

    let digest = random_digest(64);
    let len = signer.sign(None, &digest).unwrap();
    assert_eq!(len, 128);

    let mut signature = vec![0u8; len];
    assert_eq!(signer.sign(Some(&mut signature), &digest).unwrap(), 128);
    assert!(signer.verify(Some(&signature), &digest).unwrap());

    signature[5] ^= 0x01;
    assert!(!signer.verify(Some(&signature), &digest).unwrap());
}

#[test]
fn test_every_family_signs_and_verifies() {
    init_tracing();

    let cases = [
        (Nid::GOSTR3410_94, "A", &MD_GOST94),
        (Nid::GOSTR3410_94, "XB", &MD_GOST94),
        (Nid::GOSTR3410_2012_256, "C", &MD_GOST12_256),
        (Nid::GOSTR3410_2012_256, "XA", &MD_GOST12_256),
        (Nid::GOSTR3410_2012_512, "B", &MD_GOST12_512),
    ];

    for (algorithm, paramset, md) in cases {
        let key = generate_key(algorithm, paramset);
        let mut signer = signing_ctx(key);
        signer.ctrl(Ctrl::SetDigest(md)).unwrap();
        assert_eq!(
            signer.ctrl(Ctrl::GetDigest).unwrap(),
            CtrlReply::Digest(Some(md))
        );

        let digest = random_digest(md.size());
        let len = signer.sign(None, &digest).unwrap();
        let mut signature = vec![0u8; len];
        signer.sign(Some(&mut signature), &digest).unwrap();
        assert!(signer.verify(Some(&signature), &digest).unwrap(), "{algorithm} {paramset}");
    }
}

#[test]
fn test_2001_method_issues_2012_keys() {
    let key = generate_key(Nid::GOSTR3410_2001, "B");
    assert_eq!(key.base_id(), Nid::GOSTR3410_2012_256);

    // The key now belongs to the 2012 family and takes its digest.
    let mut signer = signing_ctx(key);
    assert!(signer.ctrl(Ctrl::SetDigest(&MD_GOST12_256)).is_ok());
    assert!(matches!(
        signer.ctrl(Ctrl::SetDigest(&MD_GOST94)),
        Err(PmethError::InvalidDigestType)
    ));
}

#[test]
fn test_context_from_key_inherits_param_set() {
    let key = generate_key(Nid::GOSTR3410_2012_256, "XB");
    let signer = signing_ctx(key);
    assert_eq!(
        signer.data().unwrap().param_set(),
        Some(Nid::GOSTR3410_2001_CRYPTOPRO_XCHB_PARAMSET)
    );
}

#[test]
fn test_keygen_without_paramset_fails() {
    let mut ctx = gost_ctx(Nid::GOSTR3410_2012_512);
    ctx.paramgen_init().unwrap();
    assert!(matches!(ctx.paramgen(), Err(PmethError::NoParametersSet)));
    assert!(matches!(ctx.keygen(), Err(PmethError::NoParametersSet)));
}

#[test]
fn test_signature_from_other_key_rejected() {
    let alice = generate_key(Nid::GOSTR3410_2012_256, "A");
    let bob = generate_key(Nid::GOSTR3410_2012_256, "A");
    let digest = random_digest(32);

    let alice_ctx = signing_ctx(alice);
    let mut signature = vec![0u8; 64];
    alice_ctx.sign(Some(&mut signature), &digest).unwrap();

    let bob_ctx = signing_ctx(bob);
    assert!(!bob_ctx.verify(Some(&signature), &digest).unwrap());
    assert!(alice_ctx.verify(Some(&signature), &digest).unwrap());
}

#[test]
fn test_verify_rejects_wrong_width() {
    let key = generate_key(Nid::GOSTR3410_2012_512, "A");
    let signer = signing_ctx(key);
    let digest = random_digest(64);

    let mut signature = vec![0u8; 128];
    signer.sign(Some(&mut signature), &digest).unwrap();
    assert!(!signer.verify(Some(&signature[..64]), &digest).unwrap());
    assert!(!signer.verify(None, &digest).unwrap());
}
