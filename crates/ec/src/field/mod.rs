//! Finite fields underlying an elliptic curve
//!
//! A curve is defined either over the integers modulo a prime `p`
//! ([`PrimeField`]) or over the characteristic-2 field `GF(2^m)`
//! ([`BinaryField`]). [`Field`] is the sum of the two.

mod binary;
mod prime;

pub use binary::BinaryField;
pub use prime::PrimeField;

/// Common trait for finite fields
pub trait EcField {
    /// Field size in bits
    ///
    /// For a prime field this is the bit length of `p`, for `GF(2^m)` it is `m`.
    fn field_size(&self) -> usize;
}

/// The field a curve is defined over
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Integers modulo a prime
    Prime(PrimeField),
    /// Characteristic-2 field `GF(2^m)`
    Binary(BinaryField),
}

impl Field {
    /// The prime field, if this is one
    pub fn as_prime(&self) -> Option<&PrimeField> {
        match self {
            Field::Prime(field) => Some(field),
            Field::Binary(_) => None,
        }
    }

    /// The binary field, if this is one
    pub fn as_binary(&self) -> Option<&BinaryField> {
        match self {
            Field::Binary(field) => Some(field),
            Field::Prime(_) => None,
        }
    }
}

impl EcField for Field {
    fn field_size(&self) -> usize {
        match self {
            Field::Prime(field) => field.field_size(),
            Field::Binary(field) => field.field_size(),
        }
    }
}

impl From<PrimeField> for Field {
    fn from(field: PrimeField) -> Self {
        Field::Prime(field)
    }
}

impl From<BinaryField> for Field {
    fn from(field: BinaryField) -> Self {
        Field::Binary(field)
    }
}
