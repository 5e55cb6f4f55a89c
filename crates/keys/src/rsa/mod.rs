//! RSA key and parameter specifications
//!
//! The private key forms layer by composition: an [`RsaPrivateCrtKeySpec`]
//! embeds an [`RsaPrivateKeySpec`], and an [`RsaMultiPrimePrivateCrtKeySpec`]
//! embeds an [`RsaPrivateCrtKeySpec`]. All three implement [`RsaPrivateKey`],
//! so code that only needs the modulus and private exponent accepts any of them.

mod crt;
mod keygen;
mod pss;

pub use crt::{
    RsaMultiPrimePrivateCrtKeySpec, RsaOtherPrimeInfo, RsaPrivateCrtKeySpec,
    RsaPrivateCrtKeySpecBuilder,
};
pub use keygen::RsaKeyGenParameterSpec;
pub use pss::{Mgf1ParameterSpec, PssParameterSpec};

use core::fmt;

use num_bigint::BigInt;

use crate::params::AlgorithmParameters;

/// The fields every RSA private key form provides
pub trait RsaPrivateKey {
    /// The modulus `n`
    fn modulus(&self) -> &BigInt;

    /// The private exponent `d`
    fn private_exponent(&self) -> &BigInt;

    /// Extra algorithm parameters, e.g. for RSASSA-PSS keys
    fn params(&self) -> Option<&AlgorithmParameters>;
}

/// An RSA public key: modulus and public exponent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKeySpec {
    modulus: BigInt,
    public_exponent: BigInt,
    params: Option<AlgorithmParameters>,
}

impl RsaPublicKeySpec {
    /// Create an RSA public key spec
    pub fn new(modulus: BigInt, public_exponent: BigInt) -> Self {
        Self {
            modulus,
            public_exponent,
            params: None,
        }
    }

    /// Create an RSA public key spec bound to extra algorithm parameters
    pub fn with_params<P: Into<AlgorithmParameters>>(
        modulus: BigInt,
        public_exponent: BigInt,
        params: P,
    ) -> Self {
        Self {
            modulus,
            public_exponent,
            params: Some(params.into()),
        }
    }

    /// The modulus `n`
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// The public exponent `e`
    pub fn public_exponent(&self) -> &BigInt {
        &self.public_exponent
    }

    /// Extra algorithm parameters, if any
    pub fn params(&self) -> Option<&AlgorithmParameters> {
        self.params.as_ref()
    }
}

/// An RSA private key in its plain `(n, d)` form
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKeySpec {
    modulus: BigInt,
    private_exponent: BigInt,
    params: Option<AlgorithmParameters>,
}

impl RsaPrivateKeySpec {
    /// Create an RSA private key spec
    pub fn new(modulus: BigInt, private_exponent: BigInt) -> Self {
        Self {
            modulus,
            private_exponent,
            params: None,
        }
    }

    /// Create an RSA private key spec bound to extra algorithm parameters
    pub fn with_params<P: Into<AlgorithmParameters>>(
        modulus: BigInt,
        private_exponent: BigInt,
        params: P,
    ) -> Self {
        Self {
            modulus,
            private_exponent,
            params: Some(params.into()),
        }
    }

    pub(crate) fn from_parts(
        modulus: BigInt,
        private_exponent: BigInt,
        params: Option<AlgorithmParameters>,
    ) -> Self {
        Self {
            modulus,
            private_exponent,
            params,
        }
    }
}

impl RsaPrivateKey for RsaPrivateKeySpec {
    fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    fn private_exponent(&self) -> &BigInt {
        &self.private_exponent
    }

    fn params(&self) -> Option<&AlgorithmParameters> {
        self.params.as_ref()
    }
}

impl fmt::Debug for RsaPrivateKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKeySpec")
            .field("modulus", &self.modulus)
            .field("private_exponent", &"[REDACTED]")
            .field("params", &self.params)
            .finish()
    }
}
