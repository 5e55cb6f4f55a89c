//! Property-based tests for characteristic-2 field descriptions

use keyspec::ec::{BinaryField, BigUint, EcField};
use proptest::prelude::*;

/// Degree `m` together with a trinomial middle exponent `1 <= k < m`
fn trinomial() -> impl Strategy<Value = (usize, usize)> {
    (2usize..=1024).prop_flat_map(|m| (Just(m), 1..m))
}

/// Degree `m` together with three strictly descending exponents in `[1, m-1]`
fn pentanomial() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (4usize..=1024).prop_flat_map(|m| {
        (Just(m), prop::sample::subsequence((1..m).collect::<Vec<_>>(), 3)).prop_map(
            |(m, mut ks)| {
                ks.reverse();
                (m, ks)
            },
        )
    })
}

fn set_bits(value: &BigUint) -> Vec<u64> {
    (0..value.bits()).filter(|&i| value.bit(i)).collect()
}

proptest! {
    #[test]
    fn trinomial_bit_set_has_exactly_three_terms((m, k) in trinomial()) {
        let field = BinaryField::from_mid_terms(m, &[k]).unwrap();
        let rp = field.reduction_polynomial().unwrap();
        prop_assert_eq!(set_bits(&rp), vec![0, k as u64, m as u64]);
        prop_assert_eq!(field.field_size(), m);
    }

    #[test]
    fn trinomial_bit_set_round_trip((m, k) in trinomial()) {
        let field = BinaryField::from_mid_terms(m, &[k]).unwrap();
        let rp = field.reduction_polynomial().unwrap();

        let again = BinaryField::from_reduction_polynomial(m, &rp).unwrap();
        prop_assert_eq!(again.mid_terms(), Some(&[k][..]));
        prop_assert_eq!(again.reduction_polynomial(), Some(rp));
        prop_assert_eq!(again, field);
    }

    #[test]
    fn pentanomial_round_trip((m, ks) in pentanomial()) {
        let field = BinaryField::from_mid_terms(m, &ks).unwrap();
        let rp = field.reduction_polynomial().unwrap();
        prop_assert_eq!(rp.count_ones(), 5);

        let again = BinaryField::from_reduction_polynomial(m, &rp).unwrap();
        prop_assert_eq!(again.mid_terms(), Some(&ks[..]));
    }

    #[test]
    fn out_of_range_exponent_rejected(m in 2usize..=512, extra in 0usize..64) {
        let err = BinaryField::from_mid_terms(m, &[m + extra]).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }
}

#[test]
fn zero_degree_rejected_by_every_constructor() {
    assert!(BinaryField::normal_basis(0).unwrap_err().is_invalid_argument());
    assert!(BinaryField::from_mid_terms(0, &[1])
        .unwrap_err()
        .is_invalid_argument());
    assert!(BinaryField::from_reduction_polynomial(0, &BigUint::from(0b111u32))
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn normal_basis_has_no_polynomial() {
    let field = BinaryField::normal_basis(163).unwrap();
    assert!(field.is_normal_basis());
    assert_eq!(field.mid_terms(), None);
    assert_eq!(field.reduction_polynomial(), None);
    assert_eq!(field.field_size(), 163);
}
