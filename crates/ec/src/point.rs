//! Points on an elliptic curve
//!
//! Neither point type carries a field: range checking of coordinates is the
//! responsibility of whoever consumes the point.

use num_bigint::BigInt;

/// A point on a Weierstrass curve in affine coordinates
///
/// The point at infinity has no coordinates at all and is modelled as its own
/// variant. All `Infinity` values are equal to each other and unequal to
/// every affine point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CurvePoint {
    /// The identity element
    Infinity,
    /// An affine point `(x, y)`
    Affine {
        /// Affine x-coordinate
        x: BigInt,
        /// Affine y-coordinate
        y: BigInt,
    },
}

impl CurvePoint {
    /// Create an affine point
    pub fn new(x: BigInt, y: BigInt) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// The point at infinity
    pub const fn infinity() -> Self {
        CurvePoint::Infinity
    }

    /// True for the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// Affine x-coordinate, absent at infinity
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            CurvePoint::Affine { x, .. } => Some(x),
            CurvePoint::Infinity => None,
        }
    }

    /// Affine y-coordinate, absent at infinity
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            CurvePoint::Affine { y, .. } => Some(y),
            CurvePoint::Infinity => None,
        }
    }
}

/// A point on an Edwards curve in compressed form
///
/// Only `y` and the parity of `x` are stored; recovering `x` is left to the
/// signature or key-agreement algorithm that consumes the point, which may
/// reject a `y` outside the field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdwardsPoint {
    x_odd: bool,
    y: BigInt,
}

impl EdwardsPoint {
    /// Create a compressed Edwards point
    pub fn new(x_odd: bool, y: BigInt) -> Self {
        Self { x_odd, y }
    }

    /// Whether the x-coordinate is odd
    pub fn is_x_odd(&self) -> bool {
        self.x_odd
    }

    /// The y-coordinate
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
