//! MAC key installation, keyed digest setup and tag production

use crate::test_utils::*;
use gostpk_core::digest::{GOST_MAC, GOST_MAC_12, MD_GOST94};
use gostpk_core::{DigestCtx, Nid};
use gostpk_pmeth::mock::MockMacDigest;
use gostpk_pmeth::{Ctrl, Handled, PmethError, MAC_TAG_LEN};

fn tag(key: &[u8], message: &[u8]) -> [u8; 4] {
    let mut ctx = mac_ctx(Nid::GOST28147_89_MAC);
    ctx.ctrl(Ctrl::SetMacKey(key)).unwrap();

    let mut mctx = MockMacDigest::new(&GOST_MAC);
    ctx.signctx_init(&mut mctx).unwrap();
    ctx.ctrl(Ctrl::DigestInit(&mut mctx)).unwrap();
    mctx.update(message).unwrap();

    let mut out = [0u8; 4];
    assert_eq!(ctx.signctx(Some(&mut out), &mut mctx).unwrap(), MAC_TAG_LEN);
    out
}

#[test]
fn test_mac_hexkey_keygen_and_tag() {
    init_tracing();

    let mut ctx = mac_ctx(Nid::GOST_MAC_12);
    ctx.ctrl(Ctrl::SetDigest(&GOST_MAC_12)).unwrap();
    assert_eq!(ctx.ctrl_str("hexkey", Some(SAMPLE_HEX_KEY)).unwrap(), Handled::Applied);

    let key = ctx.keygen().unwrap();
    assert_eq!(key.base_id(), Nid::GOST_MAC_12);
    assert_eq!(
        key.mac().unwrap().as_bytes().to_vec(),
        hex::decode(SAMPLE_HEX_KEY).unwrap()
    );

    // A fresh operation on the generated key picks the key up at digest init.
    let mut signer = mac_ctx(Nid::GOST_MAC_12);
    signer.attach_key(key);
    let mut mctx = MockMacDigest::new(&GOST_MAC_12);
    signer.ctrl(Ctrl::DigestInit(&mut mctx)).unwrap();
    mctx.update(b"payload").unwrap();

    assert_eq!(signer.signctx(None, &mut mctx).unwrap(), 4);
    let mut out = [0u8; 4];
    signer.signctx(Some(&mut out), &mut mctx).unwrap();

    let raw: [u8; 32] = hex::decode(SAMPLE_HEX_KEY).unwrap().try_into().unwrap();
    assert_eq!(out, tag(&raw, b"payload"));
}

#[test]
fn test_mac_tags_depend_on_key_and_message() {
    assert_eq!(tag(&[1u8; 32], b"m"), tag(&[1u8; 32], b"m"));
    assert_ne!(tag(&[1u8; 32], b"m"), tag(&[2u8; 32], b"m"));
    assert_ne!(tag(&[1u8; 32], b"m"), tag(&[1u8; 32], b"n"));
}

#[test]
fn test_mac_key_validation() {
    let mut ctx = mac_ctx(Nid::GOST28147_89_MAC);
    assert!(matches!(
        ctx.ctrl(Ctrl::SetMacKey(&[0u8; 31])),
        Err(PmethError::InvalidMacKeyLength)
    ));
    assert!(matches!(
        ctx.ctrl_str("hexkey", Some("not hex at all")),
        Err(PmethError::InvalidMacKeyLength)
    ));
    assert!(matches!(
        ctx.ctrl_str("key", Some("too short")),
        Err(PmethError::InvalidMacKeyLength)
    ));
    assert!(matches!(ctx.keygen(), Err(PmethError::MacKeyNotSet)));
    assert_eq!(ctx.ctrl_str("paramset", Some("A")).unwrap(), Handled::NotApplicable);
}

#[test]
fn test_mac_rejects_signature_digests() {
    let mut ctx = mac_ctx(Nid::GOST28147_89_MAC);
    assert!(matches!(
        ctx.ctrl(Ctrl::SetDigest(&MD_GOST94)),
        Err(PmethError::InvalidDigestType)
    ));
    assert!(ctx.ctrl(Ctrl::SetDigest(&GOST_MAC)).is_ok());
}

#[test]
fn test_mac_digest_init_without_key() {
    let mut ctx = mac_ctx(Nid::GOST28147_89_MAC);
    let mut mctx = MockMacDigest::new(&GOST_MAC);
    assert!(matches!(
        ctx.ctrl(Ctrl::DigestInit(&mut mctx)),
        Err(PmethError::MacKeyNotSet)
    ));

    let mut out = [0u8; 4];
    assert!(ctx.signctx(Some(&mut out), &mut mctx).is_err());
}

#[test]
fn test_mac_clone_keeps_key() {
    let mut ctx = mac_ctx(Nid::GOST28147_89_MAC);
    ctx.ctrl_str("key", Some("abcdefghijklmnopqrstuvwxyz012345")).unwrap();
    let copy = ctx.try_clone().unwrap();
    assert_eq!(
        copy.keygen().unwrap().mac().unwrap().as_bytes(),
        b"abcdefghijklmnopqrstuvwxyz012345"
    );
}
