//! Configuration-driven method registration

use crate::test_utils::*;
use gostpk_core::{Nid, PmethConfig};
use gostpk_pmeth::{register_all, PkeyCtx, PmethError, RegisteredMethod};

#[test]
fn test_register_from_toml() {
    init_tracing();

    let config = PmethConfig::from_toml_str(
        r#"
            methods = ["gost2012_512", "gost-mac"]

            [logging]
            level = "debug"
            json = true
        "#,
    )
    .unwrap();
    assert!(config.logging.json);
    assert_eq!(config.logging.level, "debug");

    // The suite subscriber is already in place, so the parsed section is refused.
    assert!(!gostpk_core::logging::init_with(&config.logging));
    assert!(!gostpk_core::logging::init_with(&test_logging()));

    let methods = register_all(&config, mock_backend(), builtin_registry()).unwrap();
    let ids: Vec<Nid> = methods.iter().map(RegisteredMethod::id).collect();
    assert_eq!(ids, vec![Nid::GOSTR3410_2012_512, Nid::GOST28147_89_MAC]);

    // The registered asymmetric method is usable as is.
    let RegisteredMethod::Asymmetric(method) = methods[0].clone() else {
        panic!("expected an asymmetric method");
    };
    let mut ctx = PkeyCtx::new(method, None).unwrap();
    ctx.ctrl_str("paramset", Some("id-tc26-gost-3410-2012-512-paramSetB"))
        .unwrap();
    assert_eq!(ctx.keygen().unwrap().base_id(), Nid::GOSTR3410_2012_512);
}

#[test]
fn test_default_config_registers_everything() {
    let methods = register_all(
        &PmethConfig::default_config(),
        mock_backend(),
        builtin_registry(),
    )
    .unwrap();
    assert_eq!(methods.len(), 6);
    let macs = methods
        .iter()
        .filter(|m| matches!(m, RegisteredMethod::Mac(_)))
        .count();
    assert_eq!(macs, 2);
}

#[test]
fn test_unknown_and_unsupported_names() {
    let config = PmethConfig {
        methods: vec!["gost-no-such".to_string()],
        ..PmethConfig::default()
    };
    assert!(matches!(
        register_all(&config, mock_backend(), builtin_registry()),
        Err(PmethError::UnknownMethodName(_))
    ));

    // Known to the registry, but not a GOST key method.
    let config = PmethConfig {
        methods: vec!["SHA256".to_string()],
        ..PmethConfig::default()
    };
    assert!(matches!(
        register_all(&config, mock_backend(), builtin_registry()),
        Err(PmethError::UnsupportedMethod(Nid::SHA256))
    ));
}
