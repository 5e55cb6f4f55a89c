//! Curve, point and domain-parameter integration tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use keyspec::ec::standard;
use keyspec::prelude::*;
use keyspec_tests::{int, toy_curve};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn prime_field_coefficients_must_be_reduced() {
    let field = PrimeField::new(BigInt::from(23)).unwrap();

    assert!(EllipticCurve::new(field.clone(), BigInt::from(1), BigInt::from(1)).is_ok());
    assert!(EllipticCurve::new(field.clone(), BigInt::from(22), BigInt::from(0)).is_ok());

    let err = EllipticCurve::new(field.clone(), BigInt::from(23), BigInt::from(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = EllipticCurve::new(field.clone(), BigInt::from(-1), BigInt::from(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = EllipticCurve::new(field, BigInt::from(1), BigInt::from(23)).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn binary_field_coefficients_must_fit() {
    let field = BinaryField::from_mid_terms(5, &[2]).unwrap();
    assert!(EllipticCurve::new(field.clone(), BigInt::from(0b11111), BigInt::from(1)).is_ok());
    assert!(EllipticCurve::new(field, BigInt::from(0b100000), BigInt::from(1)).is_err());
}

#[test]
fn non_positive_prime_rejected() {
    assert!(PrimeField::new(BigInt::from(0)).unwrap_err().is_invalid_argument());
    assert!(PrimeField::new(BigInt::from(-7)).unwrap_err().is_invalid_argument());
}

#[test]
fn equal_points_hash_equally() {
    let a = CurvePoint::new(BigInt::from(3), BigInt::from(10));
    let b = CurvePoint::new(BigInt::from(3), BigInt::from(10));
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, CurvePoint::new(BigInt::from(10), BigInt::from(3)));
}

#[test]
fn infinity_equals_only_infinity() {
    let infinity = CurvePoint::infinity();
    let zero = CurvePoint::new(BigInt::from(0), BigInt::from(0));

    assert_ne!(infinity, zero);
    assert_ne!(zero, infinity);

    // every Infinity value is the same value, whichever way it was produced
    assert_eq!(infinity, CurvePoint::Infinity);
    assert_eq!(infinity.clone(), CurvePoint::infinity());
    assert_eq!(hash_of(&infinity), hash_of(&CurvePoint::Infinity));

    assert!(infinity.is_infinity());
    assert_eq!(infinity.x(), None);
    assert_eq!(infinity.y(), None);
}

#[test]
fn curve_seed_does_not_affect_equality() {
    let field = PrimeField::new(BigInt::from(23)).unwrap();
    let seeded =
        EllipticCurve::with_seed(field, BigInt::from(1), BigInt::from(1), &[1, 2, 3]).unwrap();
    let plain = toy_curve();
    assert_eq!(seeded, plain);
    assert_eq!(hash_of(&seeded), hash_of(&plain));
    assert_eq!(seeded.seed(), Some(vec![1, 2, 3]));
    assert_eq!(plain.seed(), None);
}

#[test]
fn domain_parameters_on_toy_curve() {
    let params = DomainParameters::builder()
        .curve(toy_curve())
        .generator(CurvePoint::new(BigInt::from(3), BigInt::from(10)))
        .order(BigInt::from(7))
        .cofactor(4)
        .build()
        .unwrap();
    assert_eq!(params.order(), &BigInt::from(7));
    assert_eq!(params.cofactor(), 4);
    assert_eq!(params.curve().field().field_size(), 5);
}

#[test]
fn domain_parameters_reject_non_positive_values() {
    let generator = CurvePoint::new(BigInt::from(3), BigInt::from(10));
    assert!(DomainParameters::new(toy_curve(), generator.clone(), BigInt::from(0), 1).is_err());
    assert!(DomainParameters::new(toy_curve(), generator.clone(), BigInt::from(-7), 1).is_err());
    assert!(DomainParameters::new(toy_curve(), generator, BigInt::from(7), 0).is_err());
}

#[test]
fn domain_parameters_builder_reports_missing_field() {
    let err = DomainParameters::builder()
        .curve(toy_curve())
        .order(BigInt::from(7))
        .cofactor(1)
        .build()
        .unwrap_err();
    assert_eq!(err, Error::NullArgument { name: "generator" });
}

#[test]
fn standard_curves() {
    let p256 = standard::secp256r1();
    assert_eq!(p256.curve().field().field_size(), 256);
    assert_eq!(
        p256.order(),
        &int("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551")
    );
    assert!(p256.curve().seed().is_some());

    let k283 = standard::sect283k1();
    let field = k283.curve().field().as_binary().unwrap();
    assert_eq!(field.m(), 283);
    assert_eq!(field.mid_terms(), Some(&[12, 7, 5][..]));
    assert_eq!(k283.cofactor(), 4);

    assert_eq!(standard::by_name("secp256r1"), Some(p256));
    assert_eq!(standard::by_name("curve25519"), None);
}
