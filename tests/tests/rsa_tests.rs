//! RSA key specification layering and multi-prime handling

use keyspec::prelude::*;
use keyspec_tests::{toy_other_prime, toy_rsa_builder};

fn modulus_of<K: RsaPrivateKey>(key: &K) -> &BigInt {
    key.modulus()
}

#[test]
fn empty_other_prime_info_rejected() {
    let err = toy_rsa_builder()
        .other_prime_info(Vec::new())
        .build_multi_prime()
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let crt = toy_rsa_builder().build().unwrap();
    let err = RsaMultiPrimePrivateCrtKeySpec::new(crt, Some(Vec::new())).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn absent_other_prime_info_accepted() {
    let key = toy_rsa_builder().build_multi_prime().unwrap();
    assert_eq!(key.other_prime_info(), None);
    assert_eq!(key.prime_count(), 2);
}

#[test]
fn other_prime_info_is_copied() {
    let input = vec![toy_other_prime()];
    let key = toy_rsa_builder()
        .other_prime_info(input.clone())
        .build_multi_prime()
        .unwrap();

    let returned = key.other_prime_info().unwrap();
    assert_eq!(returned, input);
    assert_ne!(returned.as_ptr(), input.as_ptr());
    assert_eq!(key.prime_count(), 3);

    // the caller owns what it was given back
    let mut returned = returned;
    returned.clear();
    assert_eq!(key.other_prime_info().unwrap().len(), 1);
}

#[test]
fn every_private_form_exposes_plain_fields() {
    let plain = RsaPrivateKeySpec::new(BigInt::from(3233), BigInt::from(2753));
    let crt = toy_rsa_builder().build().unwrap();
    let multi = RsaMultiPrimePrivateCrtKeySpec::new(crt.clone(), Some(vec![toy_other_prime()]))
        .unwrap();

    assert_eq!(modulus_of(&plain), modulus_of(&crt));
    assert_eq!(modulus_of(&crt), modulus_of(&multi));
    assert_eq!(crt.as_private_key_spec(), &plain);
    assert_eq!(multi.as_crt_key_spec(), &crt);
    assert_eq!(multi.private_exponent(), &BigInt::from(2753));
}

#[test]
fn builder_names_first_missing_field() {
    let err = RsaPrivateCrtKeySpec::builder()
        .modulus(BigInt::from(3233))
        .build()
        .unwrap_err();
    assert_eq!(err, Error::NullArgument { name: "public_exponent" });
    assert_eq!(err.to_string(), "public_exponent must be present");
}

#[test]
fn pss_parameters_attach_to_keys() {
    let pss = PssParameterSpec::mgf1(Mgf1ParameterSpec::SHA256, 32);
    let key = toy_rsa_builder().params(pss.clone()).build().unwrap();
    assert_eq!(key.params(), Some(&AlgorithmParameters::Pss(pss)));

    let public = RsaPublicKeySpec::with_params(
        BigInt::from(3233),
        BigInt::from(17),
        PssParameterSpec::default(),
    );
    match public.params() {
        Some(AlgorithmParameters::Pss(pss)) => {
            assert_eq!(pss.digest_algorithm(), "SHA-1");
            assert_eq!(pss.salt_length(), 20);
            assert_eq!(pss.trailer_field(), PssParameterSpec::TRAILER_FIELD_BC);
        }
        other => panic!("unexpected parameters: {:?}", other),
    }
}

#[test]
fn key_generation_request() {
    let request = RsaKeyGenParameterSpec::new(2048, RsaKeyGenParameterSpec::f4());
    assert_eq!(request.key_size(), 2048);
    assert_eq!(request.public_exponent(), &BigInt::from(65537));
    assert_eq!(request.key_params(), None);
}

#[test]
fn private_values_not_printed() {
    let crt = toy_rsa_builder().build().unwrap();
    let debug = format!("{:?}", crt);
    assert!(!debug.contains("2753"));
}
