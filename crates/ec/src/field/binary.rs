//! Characteristic-2 field `GF(2^m)`

use keyspec_api::error::validate;
use keyspec_api::Result;
use num_bigint::BigUint;
use num_traits::Zero;

use super::EcField;

const CONTEXT: &str = "BinaryField";

fn check_degree(m: usize) -> Result<()> {
    validate::positive(m > 0, "BinaryField degree m")?;
    validate::parameter(
        m <= BinaryField::MAX_DEGREE,
        CONTEXT,
        "degree m exceeds i32::MAX",
    )
}

/// How field elements are represented
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
enum Basis {
    Normal,
    /// Middle exponents of the reduction polynomial, strictly descending
    Polynomial(Vec<usize>),
}

/// The field `GF(2^m)`
///
/// A polynomial-basis field is reduced modulo a trinomial `x^m + x^k + 1` or
/// a pentanomial `x^m + x^k1 + x^k2 + x^k3 + 1`. The polynomial can be given
/// as a coefficient bit-set or as its middle exponents; the exponent list is
/// stored and the bit-set is derived from it, so the two views always agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BinaryFieldRepr"))]
pub struct BinaryField {
    m: usize,
    basis: Basis,
}

impl BinaryField {
    /// Largest accepted degree `m`; every constructor rejects anything above it
    pub const MAX_DEGREE: usize = i32::MAX as usize;

    /// Create a normal-basis field with `2^m` elements
    pub fn normal_basis(m: usize) -> Result<Self> {
        check_degree(m)?;
        Ok(Self {
            m,
            basis: Basis::Normal,
        })
    }

    /// Create a polynomial-basis field from the coefficient bit-set `rp`
    ///
    /// Bit `i` of `rp` is the coefficient of `x^i`. Bits `0` and `m` must be
    /// set, no bit above `m` may be set, and exactly three or five bits may
    /// be set in total.
    pub fn from_reduction_polynomial(m: usize, rp: &BigUint) -> Result<Self> {
        check_degree(m)?;
        let top = m as u64;
        validate::parameter(rp.bit(0), CONTEXT, "reduction polynomial must have a constant term")?;
        validate::parameter(rp.bit(top), CONTEXT, "reduction polynomial must have degree m")?;
        validate::parameter(
            rp.bits() == top + 1,
            CONTEXT,
            "reduction polynomial has a term above x^m",
        )?;
        let weight = rp.count_ones();
        validate::parameter(
            weight == 3 || weight == 5,
            CONTEXT,
            "reduction polynomial must be a trinomial or pentanomial",
        )?;

        let mut rest = rp.clone();
        rest.set_bit(0, false);
        rest.set_bit(top, false);

        // Lowest set bit first, then reversed into descending order
        let mut ks = Vec::with_capacity(weight as usize - 2);
        while let Some(k) = rest.trailing_zeros() {
            ks.push(k as usize);
            rest.set_bit(k, false);
        }
        ks.reverse();

        Ok(Self {
            m,
            basis: Basis::Polynomial(ks),
        })
    }

    /// Create a polynomial-basis field from the middle exponents `ks`
    ///
    /// `ks` holds one exponent (trinomial) or three (pentanomial), each in
    /// `[1, m-1]`, strictly descending.
    pub fn from_mid_terms(m: usize, ks: &[usize]) -> Result<Self> {
        check_degree(m)?;
        validate::parameter(
            ks.len() == 1 || ks.len() == 3,
            CONTEXT,
            "reduction polynomial needs 1 or 3 middle terms",
        )?;
        validate::parameter(
            ks.iter().all(|&k| k >= 1 && k < m),
            CONTEXT,
            "middle term exponents must lie in [1, m-1]",
        )?;
        validate::parameter(
            ks.windows(2).all(|pair| pair[0] > pair[1]),
            CONTEXT,
            "middle term exponents must be strictly descending",
        )?;

        Ok(Self {
            m,
            basis: Basis::Polynomial(ks.to_vec()),
        })
    }

    /// The degree `m`; the field has `2^m` elements
    pub fn m(&self) -> usize {
        self.m
    }

    /// True when no reduction polynomial is used
    pub fn is_normal_basis(&self) -> bool {
        matches!(self.basis, Basis::Normal)
    }

    /// Middle exponents of the reduction polynomial, strictly descending
    ///
    /// `None` for a normal-basis field.
    pub fn mid_terms(&self) -> Option<&[usize]> {
        match &self.basis {
            Basis::Normal => None,
            Basis::Polynomial(ks) => Some(ks),
        }
    }

    /// The reduction polynomial as a coefficient bit-set
    ///
    /// `None` for a normal-basis field.
    pub fn reduction_polynomial(&self) -> Option<BigUint> {
        let ks = self.mid_terms()?;
        let mut rp = BigUint::zero();
        rp.set_bit(self.m as u64, true);
        rp.set_bit(0, true);
        for &k in ks {
            rp.set_bit(k as u64, true);
        }
        Some(rp)
    }
}

impl EcField for BinaryField {
    fn field_size(&self) -> usize {
        self.m
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BinaryFieldRepr {
    m: usize,
    basis: Basis,
}

#[cfg(feature = "serde")]
impl TryFrom<BinaryFieldRepr> for BinaryField {
    type Error = keyspec_api::Error;

    fn try_from(repr: BinaryFieldRepr) -> Result<Self> {
        match repr.basis {
            Basis::Normal => Self::normal_basis(repr.m),
            Basis::Polynomial(ks) => Self::from_mid_terms(repr.m, &ks),
        }
    }
}
