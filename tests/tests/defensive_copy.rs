//! Byte-bearing specs never alias caller-owned buffers

use keyspec::ec::standard;
use keyspec::prelude::*;
use proptest::prelude::*;

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

fn flip(buf: &mut [u8]) {
    buf.iter_mut().for_each(|b| *b = !*b);
}

proptest! {
    #[test]
    fn ed_private_key_copies(original in bytes()) {
        let mut input = original.clone();
        let spec = EdPrivateKeySpec::new(NamedParameters::ED25519, &input);
        flip(&mut input);
        prop_assert_eq!(&spec.bytes()[..], &original[..]);

        let mut out = spec.bytes();
        flip(&mut out);
        prop_assert_eq!(&spec.bytes()[..], &original[..]);
    }

    #[test]
    fn xec_private_key_copies(original in bytes()) {
        let mut input = original.clone();
        let spec = XecPrivateKeySpec::new(NamedParameters::X25519, &input);
        flip(&mut input);
        prop_assert_eq!(&spec.scalar()[..], &original[..]);

        let mut out = spec.scalar();
        flip(&mut out);
        prop_assert_eq!(&spec.scalar()[..], &original[..]);
    }

    #[test]
    fn encoded_keys_copy(original in bytes()) {
        let mut input = original.clone();
        let x509 = X509EncodedKeySpec::new(&input);
        let pkcs8 = Pkcs8EncodedKeySpec::new(&input);
        flip(&mut input);
        prop_assert_eq!(&x509.encoded()[..], &original[..]);
        prop_assert_eq!(&pkcs8.encoded()[..], &original[..]);

        let mut out = pkcs8.encoded();
        flip(&mut out);
        prop_assert_eq!(&pkcs8.encoded()[..], &original[..]);
    }

    #[test]
    fn curve_seed_copies(original in bytes()) {
        let field = PrimeField::new(BigInt::from(23)).unwrap();
        let mut input = original.clone();
        let curve =
            EllipticCurve::with_seed(field, BigInt::from(1), BigInt::from(1), &input).unwrap();
        flip(&mut input);
        prop_assert_eq!(curve.seed(), Some(original.clone()));

        let mut out = curve.seed().unwrap();
        flip(&mut out);
        prop_assert_eq!(curve.seed(), Some(original));
    }

    #[test]
    fn zeroize_keeps_length_and_earlier_copies(original in bytes()) {
        let mut spec = Pkcs8EncodedKeySpec::new(&original);
        let before = spec.encoded();
        spec.zeroize();

        prop_assert_eq!(&before[..], &original[..]);
        prop_assert_eq!(spec.encoded().len(), original.len());
        prop_assert!(spec.encoded().iter().all(|&b| b == 0));
    }
}

#[test]
fn clones_do_not_share_storage() {
    let original = [7u8; 32];
    let mut first = X509EncodedKeySpec::new(&original);
    let second = first.clone();
    first.zeroize();
    assert_eq!(&second.encoded()[..], &original[..]);
}

#[test]
fn standard_seed_is_fresh_each_time() {
    let params = standard::secp256r1();
    let mut seed = params.curve().seed().unwrap();
    seed[0] ^= 0xff;
    assert_ne!(params.curve().seed().unwrap(), seed);
}
