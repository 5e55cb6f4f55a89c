//! Elliptic-curve domain parameters
//!
//! [`DomainParameters`] spell out a group in full. [`named::NamedParameters`]
//! stand in for a parameter set the consumer already knows by name.

pub mod named;
pub mod standard;

use keyspec_api::error::validate;
use keyspec_api::Result;
use num_bigint::{BigInt, Sign};

use crate::curve::EllipticCurve;
use crate::point::CurvePoint;

/// A curve together with a generator, the generator's order and the cofactor
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DomainParametersRepr"))]
pub struct DomainParameters {
    curve: EllipticCurve,
    generator: CurvePoint,
    order: BigInt,
    cofactor: u32,
}

impl DomainParameters {
    /// Create domain parameters
    ///
    /// Fails with `InvalidArgument` unless `order > 0` and `cofactor > 0`.
    pub fn new(
        curve: EllipticCurve,
        generator: CurvePoint,
        order: BigInt,
        cofactor: u32,
    ) -> Result<Self> {
        validate::positive(order.sign() == Sign::Plus, "DomainParameters order")?;
        validate::positive(cofactor > 0, "DomainParameters cofactor")?;
        Ok(Self {
            curve,
            generator,
            order,
            cofactor,
        })
    }

    /// Start a builder; every field must be set before [`DomainParametersBuilder::build`]
    pub fn builder() -> DomainParametersBuilder {
        DomainParametersBuilder::default()
    }

    /// The curve
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// The generator (base point)
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// Order of the generator
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Cofactor
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }
}

/// Incremental construction of [`DomainParameters`]
///
/// Useful when the parts arrive separately, e.g. while decoding. A field that
/// was never set is reported as `NullArgument` naming that field.
#[derive(Clone, Debug, Default)]
pub struct DomainParametersBuilder {
    curve: Option<EllipticCurve>,
    generator: Option<CurvePoint>,
    order: Option<BigInt>,
    cofactor: Option<u32>,
}

impl DomainParametersBuilder {
    /// Set the curve
    pub fn curve(mut self, curve: EllipticCurve) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Set the generator
    pub fn generator(mut self, generator: CurvePoint) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set the order of the generator
    pub fn order(mut self, order: BigInt) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the cofactor
    pub fn cofactor(mut self, cofactor: u32) -> Self {
        self.cofactor = Some(cofactor);
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<DomainParameters> {
        let curve = validate::present(self.curve, "curve")?;
        let generator = validate::present(self.generator, "generator")?;
        let order = validate::present(self.order, "order")?;
        let cofactor = validate::present(self.cofactor, "cofactor")?;
        DomainParameters::new(curve, generator, order, cofactor)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DomainParametersRepr {
    curve: EllipticCurve,
    generator: CurvePoint,
    order: BigInt,
    cofactor: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<DomainParametersRepr> for DomainParameters {
    type Error = keyspec_api::Error;

    fn try_from(repr: DomainParametersRepr) -> Result<Self> {
        Self::new(repr.curve, repr.generator, repr.order, repr.cofactor)
    }
}
