//! Weierstrass curves

use core::hash::{Hash, Hasher};

use keyspec_api::error::validate;
use keyspec_api::Result;
use num_bigint::{BigInt, Sign};

use crate::field::Field;

/// An elliptic curve in Weierstrass form over a prime or binary field
///
/// Over `F_p` the curve is `y^2 = x^3 + ax + b`; over `GF(2^m)` it is
/// `y^2 + xy = x^3 + ax^2 + b`. The optional seed records how the
/// coefficients were generated and takes no part in equality.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EllipticCurveRepr"))]
pub struct EllipticCurve {
    field: Field,
    a: BigInt,
    b: BigInt,
    seed: Option<Vec<u8>>,
}

impl EllipticCurve {
    /// Create a curve with coefficients `a` and `b`
    ///
    /// Over `F_p` each coefficient must lie in `[0, p)`. Over `GF(2^m)` each
    /// must be non-negative with bit length at most `m`.
    pub fn new<F: Into<Field>>(field: F, a: BigInt, b: BigInt) -> Result<Self> {
        let field = field.into();
        check_coefficient(&field, &a, "EllipticCurve coefficient a")?;
        check_coefficient(&field, &b, "EllipticCurve coefficient b")?;
        Ok(Self {
            field,
            a,
            b,
            seed: None,
        })
    }

    /// Create a curve that records the seed its coefficients were generated from
    ///
    /// The seed is copied; later changes to `seed` do not affect the curve.
    pub fn with_seed<F: Into<Field>>(field: F, a: BigInt, b: BigInt, seed: &[u8]) -> Result<Self> {
        let mut curve = Self::new(field, a, b)?;
        curve.seed = Some(seed.to_vec());
        Ok(curve)
    }

    /// The underlying field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Coefficient `a`
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// A fresh copy of the generation seed, if one was supplied
    pub fn seed(&self) -> Option<Vec<u8>> {
        self.seed.clone()
    }
}

fn check_coefficient(field: &Field, c: &BigInt, context: &'static str) -> Result<()> {
    validate::non_negative(c.sign() == Sign::Minus, context)?;
    match field {
        Field::Prime(f) => validate::parameter(c < f.prime(), context, "must be less than p"),
        Field::Binary(f) => validate::parameter(
            c.bits() <= f.m() as u64,
            context,
            "bit length must not exceed m",
        ),
    }
}

impl PartialEq for EllipticCurve {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.a == other.a && self.b == other.b
    }
}

impl Eq for EllipticCurve {}

impl Hash for EllipticCurve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.a.hash(state);
        self.b.hash(state);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EllipticCurveRepr {
    field: Field,
    a: BigInt,
    b: BigInt,
    seed: Option<Vec<u8>>,
}

#[cfg(feature = "serde")]
impl TryFrom<EllipticCurveRepr> for EllipticCurve {
    type Error = keyspec_api::Error;

    fn try_from(repr: EllipticCurveRepr) -> Result<Self> {
        match repr.seed {
            Some(seed) => Self::with_seed(repr.field, repr.a, repr.b, &seed),
            None => Self::new(repr.field, repr.a, repr.b),
        }
    }
}
