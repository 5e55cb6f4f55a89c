//! Built-in standard domain parameters (SEC 2)

use keyspec_params::traditional::ec;
use num_bigint::{BigInt, Sign};

use super::DomainParameters;
use crate::curve::EllipticCurve;
use crate::field::{BinaryField, PrimeField};
use crate::point::CurvePoint;

fn int(hex_digits: &str) -> BigInt {
    let bytes = hex::decode(hex_digits).expect("standard curve constants must be valid hex");
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}

/// NIST P-256 over the prime field `2^256 - 2^224 + 2^192 + 2^96 - 1`
pub fn secp256r1() -> DomainParameters {
    let field = PrimeField::new(int(ec::SECP256R1_P)).expect("P-256 prime must be positive");
    let seed = hex::decode(ec::SECP256R1_SEED).expect("P-256 seed must be valid hex");
    let curve = EllipticCurve::with_seed(field, int(ec::SECP256R1_A), int(ec::SECP256R1_B), &seed)
        .expect("P-256 coefficients must lie in the field");
    let generator = CurvePoint::new(int(ec::SECP256R1_GX), int(ec::SECP256R1_GY));
    DomainParameters::new(curve, generator, int(ec::SECP256R1_N), ec::SECP256R1_H)
        .expect("P-256 order and cofactor must be positive")
}

/// Koblitz curve sect283k1 over `GF(2^283)` with reduction polynomial
/// `x^283 + x^12 + x^7 + x^5 + 1`
pub fn sect283k1() -> DomainParameters {
    let field = BinaryField::from_mid_terms(ec::SECT283K1_M, &ec::SECT283K1_KS)
        .expect("sect283k1 pentanomial must be well formed");
    let curve = EllipticCurve::new(
        field,
        BigInt::from(ec::SECT283K1_A),
        BigInt::from(ec::SECT283K1_B),
    )
    .expect("sect283k1 coefficients must fit in the field");
    let generator = CurvePoint::new(int(ec::SECT283K1_GX), int(ec::SECT283K1_GY));
    DomainParameters::new(curve, generator, int(ec::SECT283K1_N), ec::SECT283K1_H)
        .expect("sect283k1 order and cofactor must be positive")
}

/// Look up built-in domain parameters by standard name
pub fn by_name(name: &str) -> Option<DomainParameters> {
    match name {
        ec::SECP256R1 => Some(secp256r1()),
        ec::SECT283K1 => Some(sect283k1()),
        _ => None,
    }
}
