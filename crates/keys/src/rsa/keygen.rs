//! RSA key-pair generation requests

use num_bigint::BigInt;

use keyspec_params::traditional::rsa;

use crate::params::AlgorithmParameters;

/// A request to generate an RSA key pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKeyGenParameterSpec {
    key_size: usize,
    public_exponent: BigInt,
    key_params: Option<Box<AlgorithmParameters>>,
}

impl RsaKeyGenParameterSpec {
    /// Public exponent F0 = 3
    pub fn f0() -> BigInt {
        BigInt::from(rsa::RSA_EXPONENT_F0)
    }

    /// Public exponent F4 = 65537
    pub fn f4() -> BigInt {
        BigInt::from(rsa::RSA_EXPONENT_F4)
    }

    /// Request a `key_size`-bit modulus with public exponent `public_exponent`
    pub fn new(key_size: usize, public_exponent: BigInt) -> Self {
        Self {
            key_size,
            public_exponent,
            key_params: None,
        }
    }

    /// Request a key bound to extra algorithm parameters
    pub fn with_params<P: Into<AlgorithmParameters>>(
        key_size: usize,
        public_exponent: BigInt,
        key_params: P,
    ) -> Self {
        Self {
            key_size,
            public_exponent,
            key_params: Some(Box::new(key_params.into())),
        }
    }

    /// Modulus size in bits
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// The public exponent
    pub fn public_exponent(&self) -> &BigInt {
        &self.public_exponent
    }

    /// Extra algorithm parameters for the generated key
    pub fn key_params(&self) -> Option<&AlgorithmParameters> {
        self.key_params.as_deref()
    }
}
