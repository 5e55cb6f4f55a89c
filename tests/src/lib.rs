//! Shared fixtures for the keyspec integration tests

use keyspec::ec::{EllipticCurve, PrimeField};
use keyspec::keys::{RsaOtherPrimeInfo, RsaPrivateCrtKeySpec, RsaPrivateCrtKeySpecBuilder};
use num_bigint::BigInt;

/// The textbook curve `y^2 = x^3 + x + 1` over `F_23`
pub fn toy_curve() -> EllipticCurve {
    let field = PrimeField::new(BigInt::from(23)).unwrap();
    EllipticCurve::new(field, BigInt::from(1), BigInt::from(1)).unwrap()
}

/// Builder pre-filled with the toy RSA key `p = 61, q = 53, e = 17`
pub fn toy_rsa_builder() -> RsaPrivateCrtKeySpecBuilder {
    RsaPrivateCrtKeySpec::builder()
        .modulus(BigInt::from(3233))
        .public_exponent(BigInt::from(17))
        .private_exponent(BigInt::from(2753))
        .prime_p(BigInt::from(61))
        .prime_q(BigInt::from(53))
        .prime_exponent_p(BigInt::from(53))
        .prime_exponent_q(BigInt::from(49))
        .crt_coefficient(BigInt::from(38))
}

/// A third prime for multi-prime keys built on the toy key
pub fn toy_other_prime() -> RsaOtherPrimeInfo {
    RsaOtherPrimeInfo::new(BigInt::from(67), BigInt::from(5), BigInt::from(7))
}

/// Decode a big-endian hex string into a positive integer
pub fn int(hex_digits: &str) -> BigInt {
    BigInt::parse_bytes(hex_digits.as_bytes(), 16).unwrap()
}
