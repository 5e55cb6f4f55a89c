//! Cross-crate composition through the facade

use keyspec::ec::standard;
use keyspec::params::traditional::{ec, rsa};
use keyspec::prelude::*;

#[test]
fn ec_key_pair_on_standard_curve() {
    let params = standard::by_name(ec::SECP256R1).unwrap();
    let private = EcPrivateKeySpec::new(BigInt::from(42), params.clone());
    let public = EcPublicKeySpec::new(params.generator().clone(), params.clone()).unwrap();

    assert_eq!(private.params(), public.params());
    assert!(format!("{:?}", private).starts_with("EcPrivateKeySpec { s: \"[REDACTED]\""));

    let err = EcPublicKeySpec::new(CurvePoint::infinity(), params).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn named_parameters_as_algorithm_parameters() {
    let x25519: AlgorithmParameters = NamedParameters::X25519.into();
    assert_eq!(x25519.as_named().map(NamedParameters::name), Some("X25519"));

    let gen: AlgorithmParameters = EcGenParameterSpec::new("secp256r1").unwrap().into();
    assert_eq!(gen.as_named(), None);

    let custom = NamedParameters::new(String::from("brainpoolP256r1")).unwrap();
    assert_eq!(custom.to_string(), "brainpoolP256r1");
    assert!(NamedParameters::new("").unwrap_err().is_invalid_argument());
}

#[test]
fn edwards_and_montgomery_keys() {
    let y = BigInt::from(4);
    let public = EdPublicKeySpec::new(NamedParameters::ED25519, EdwardsPoint::new(true, y.clone()));
    assert!(public.point().is_x_odd());
    assert_eq!(public.point().y(), &y);

    let u = XecPublicKeySpec::new(NamedParameters::X448, BigInt::from(5));
    assert_eq!(u.u(), &BigInt::from(5));
    assert_eq!(u.params().as_named(), Some(&NamedParameters::X448));
}

#[test]
fn encoded_key_formats() {
    let x509 = X509EncodedKeySpec::with_algorithm(&[0x30, 0x00], "RSA").unwrap();
    let pkcs8 = Pkcs8EncodedKeySpec::new(&[0x30, 0x00]);

    let specs: [&dyn EncodedKeySpec; 2] = [&x509, &pkcs8];
    let formats: Vec<_> = specs.iter().map(|s| s.format()).collect();
    assert_eq!(formats, ["X.509", "PKCS#8"]);
    assert_eq!(specs[0].algorithm(), Some("RSA"));
    assert_eq!(specs[1].algorithm(), None);
}

#[test]
fn pem_through_the_facade() {
    let spec = X509EncodedKeySpec::new(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]);
    let pem = spec.to_pem();
    assert_eq!(
        pem,
        "-----BEGIN PUBLIC KEY-----\nMAYCAQECAQI=\n-----END PUBLIC KEY-----\n"
    );
    assert_eq!(X509EncodedKeySpec::from_pem(&pem).unwrap(), spec);
}

#[test]
fn rsa_exponent_constants() {
    assert_eq!(RsaKeyGenParameterSpec::f0(), BigInt::from(rsa::RSA_EXPONENT_F0));
    assert_eq!(RsaKeyGenParameterSpec::f4(), BigInt::from(rsa::RSA_EXPONENT_F4));
}

#[test]
fn error_messages() {
    let err = DsaGenParameterSpec::new(1024, 224).unwrap_err();
    assert!(err.to_string().starts_with("DsaGenParameterSpec: "));

    let err = Error::null("curve");
    assert_eq!(err.to_string(), "curve must be present");
}
