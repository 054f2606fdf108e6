//! Operation cloning and ownership of the key agreement UKM

use crate::test_utils::*;
use gostpk_core::digest::MD_GOST12_256;
use gostpk_core::Nid;
use gostpk_pmeth::{Ctrl, CtrlReply, PeerKeyOp, PeerKeyUsage, PmethError};

#[test]
fn test_clone_leaves_ukm_with_source() {
    init_tracing();

    let key = generate_key(Nid::GOSTR3410_2012_256, "A");
    let mut src = signing_ctx(key);
    src.ctrl(Ctrl::SetDigest(&MD_GOST12_256)).unwrap();
    src.ctrl(Ctrl::SetSharedSecret(&[0x11; 8])).unwrap();
    src.ctrl(Ctrl::PeerKey(PeerKeyOp::MarkUsed)).unwrap();

    let dst = src.try_clone().unwrap();
    let (s, d) = (src.data().unwrap(), dst.data().unwrap());

    assert!(d.shared_ukm().is_none());
    assert_eq!(s.shared_ukm(), Some(&[0x11u8; 8][..]));
    assert_eq!(d.param_set(), s.param_set());
    assert_eq!(d.peer_key_usage(), PeerKeyUsage::Used);
    assert!(std::ptr::eq(d.digest().unwrap(), &MD_GOST12_256));
    assert_eq!(dst.key(), src.key());
}

#[test]
fn test_clone_is_independent() {
    let mut src = gost_ctx(Nid::GOSTR3410_94);
    src.ctrl_str("paramset", Some("B")).unwrap();

    let mut dst = src.try_clone().unwrap();
    dst.ctrl_str("paramset", Some("C")).unwrap();
    dst.ctrl(Ctrl::SetSharedSecret(&[7u8; 8])).unwrap();

    assert_eq!(
        src.data().unwrap().param_set(),
        Some(Nid::GOSTR3410_94_CRYPTOPRO_B_PARAMSET)
    );
    assert!(src.data().unwrap().shared_ukm().is_none());
    assert_eq!(
        dst.data().unwrap().param_set(),
        Some(Nid::GOSTR3410_94_CRYPTOPRO_C_PARAMSET)
    );
}

#[test]
fn test_shared_secret_replacement() {
    let mut ctx = gost_ctx(Nid::GOSTR3410_2012_512);
    ctx.ctrl(Ctrl::SetSharedSecret(&[1u8; 8])).unwrap();
    ctx.ctrl(Ctrl::SetSharedSecret(&[2u8; 32])).unwrap();
    assert_eq!(ctx.data().unwrap().shared_ukm(), Some(&[2u8; 32][..]));
}

#[test]
fn test_peer_key_usage_survives_key_attach() {
    let mut ctx = gost_ctx(Nid::GOSTR3410_2012_256);
    ctx.ctrl(Ctrl::PeerKey(PeerKeyOp::Set)).unwrap();
    ctx.ctrl(Ctrl::PeerKey(PeerKeyOp::MarkUsed)).unwrap();

    ctx.attach_key(generate_key(Nid::GOSTR3410_2012_256, "B"));
    assert_eq!(
        ctx.ctrl(Ctrl::PeerKey(PeerKeyOp::Query)).unwrap(),
        CtrlReply::PeerKeyUsed(true)
    );
}

#[test]
fn test_cleanup_then_use() {
    let mut ctx = gost_ctx(Nid::GOSTR3410_2012_256);
    ctx.ctrl(Ctrl::SetSharedSecret(&[9u8; 8])).unwrap();
    ctx.cleanup();
    ctx.cleanup();

    assert!(matches!(ctx.ctrl(Ctrl::GetDigest), Err(PmethError::MissingContext)));
    assert!(matches!(ctx.sign(None, &[0u8; 32]), Err(PmethError::MissingContext)));
    assert!(matches!(ctx.try_clone(), Err(PmethError::MissingContext)));
}
