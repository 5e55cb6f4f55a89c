//! Elliptic-curve parameter specifications
//!
//! This crate models the *description* of an elliptic-curve group, never its
//! arithmetic:
//!
//! - [`PrimeField`] and [`BinaryField`]: the underlying finite field
//! - [`CurvePoint`] and [`EdwardsPoint`]: affine and compressed Edwards points
//! - [`EllipticCurve`]: a Weierstrass curve with coefficients checked against its field
//! - [`DomainParameters`]: curve, generator, order and cofactor
//! - [`NamedParameters`]: a registered curve name standing in for implicit parameters
//!
//! All values are validated once, at construction, and are immutable afterwards.

pub mod curve;
pub mod field;
pub mod params;
pub mod point;

pub use curve::EllipticCurve;
pub use field::{BinaryField, EcField, Field, PrimeField};
pub use params::named::{EcGenParameterSpec, NamedParameters};
pub use params::standard;
pub use params::{DomainParameters, DomainParametersBuilder};
pub use point::{CurvePoint, EdwardsPoint};

// Arbitrary-precision integer types used throughout the public API
pub use num_bigint::{BigInt, BigUint};
