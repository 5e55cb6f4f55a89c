//! Prime field `F_p`

use keyspec_api::error::validate;
use keyspec_api::Result;
use num_bigint::{BigInt, Sign};

use super::EcField;

/// The field of integers modulo `p`
///
/// Only `p > 0` is checked. Primality is *not* verified: a consumer that needs
/// a genuine prime must test it itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PrimeFieldRepr"))]
pub struct PrimeField {
    p: BigInt,
}

impl PrimeField {
    /// Create a prime field with modulus `p`
    ///
    /// Fails with `InvalidArgument` unless `p > 0`.
    pub fn new(p: BigInt) -> Result<Self> {
        validate::positive(p.sign() == Sign::Plus, "PrimeField modulus")?;
        Ok(Self { p })
    }

    /// The modulus `p`
    pub fn prime(&self) -> &BigInt {
        &self.p
    }
}

impl EcField for PrimeField {
    fn field_size(&self) -> usize {
        self.p.bits() as usize
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PrimeFieldRepr {
    p: BigInt,
}

#[cfg(feature = "serde")]
impl TryFrom<PrimeFieldRepr> for PrimeField {
    type Error = keyspec_api::Error;

    fn try_from(repr: PrimeFieldRepr) -> Result<Self> {
        Self::new(repr.p)
    }
}
