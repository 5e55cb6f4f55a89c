//! Chinese-Remainder-Theorem forms of the RSA private key

use core::fmt;

use keyspec_api::error::validate;
use keyspec_api::Result;
use num_bigint::BigInt;

use super::{RsaPrivateKey, RsaPrivateKeySpec};
use crate::params::AlgorithmParameters;

/// An RSA private key with the CRT values for its two primes `p` and `q`
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateCrtKeySpec {
    key: RsaPrivateKeySpec,
    public_exponent: BigInt,
    prime_p: BigInt,
    prime_q: BigInt,
    prime_exponent_p: BigInt,
    prime_exponent_q: BigInt,
    crt_coefficient: BigInt,
}

impl RsaPrivateCrtKeySpec {
    /// Start a builder; see [`RsaPrivateCrtKeySpecBuilder`]
    pub fn builder() -> RsaPrivateCrtKeySpecBuilder {
        RsaPrivateCrtKeySpecBuilder::default()
    }

    /// The plain `(n, d)` view of this key
    pub fn as_private_key_spec(&self) -> &RsaPrivateKeySpec {
        &self.key
    }

    /// The public exponent `e`
    pub fn public_exponent(&self) -> &BigInt {
        &self.public_exponent
    }

    /// The prime `p`
    pub fn prime_p(&self) -> &BigInt {
        &self.prime_p
    }

    /// The prime `q`
    pub fn prime_q(&self) -> &BigInt {
        &self.prime_q
    }

    /// `d mod (p - 1)`
    pub fn prime_exponent_p(&self) -> &BigInt {
        &self.prime_exponent_p
    }

    /// `d mod (q - 1)`
    pub fn prime_exponent_q(&self) -> &BigInt {
        &self.prime_exponent_q
    }

    /// `q^-1 mod p`
    pub fn crt_coefficient(&self) -> &BigInt {
        &self.crt_coefficient
    }
}

impl RsaPrivateKey for RsaPrivateCrtKeySpec {
    fn modulus(&self) -> &BigInt {
        self.key.modulus()
    }

    fn private_exponent(&self) -> &BigInt {
        self.key.private_exponent()
    }

    fn params(&self) -> Option<&AlgorithmParameters> {
        self.key.params()
    }
}

impl AsRef<RsaPrivateKeySpec> for RsaPrivateCrtKeySpec {
    fn as_ref(&self) -> &RsaPrivateKeySpec {
        &self.key
    }
}

impl fmt::Debug for RsaPrivateCrtKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateCrtKeySpec")
            .field("modulus", self.key.modulus())
            .field("public_exponent", &self.public_exponent)
            .field("params", &self.key.params())
            .finish_non_exhaustive()
    }
}

/// CRT values for one prime beyond `p` and `q` (PKCS #1 `OtherPrimeInfo`)
#[derive(Clone, PartialEq, Eq)]
pub struct RsaOtherPrimeInfo {
    prime: BigInt,
    exponent: BigInt,
    crt_coefficient: BigInt,
}

impl RsaOtherPrimeInfo {
    /// Create an other-prime triple `(r_i, d_i, t_i)`
    pub fn new(prime: BigInt, exponent: BigInt, crt_coefficient: BigInt) -> Self {
        Self {
            prime,
            exponent,
            crt_coefficient,
        }
    }

    /// The prime `r_i`
    pub fn prime(&self) -> &BigInt {
        &self.prime
    }

    /// `d mod (r_i - 1)`
    pub fn exponent(&self) -> &BigInt {
        &self.exponent
    }

    /// The CRT coefficient `t_i`
    pub fn crt_coefficient(&self) -> &BigInt {
        &self.crt_coefficient
    }
}

impl fmt::Debug for RsaOtherPrimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RsaOtherPrimeInfo([REDACTED])")
    }
}

/// An RSA private key in CRT form with optional additional primes
///
/// `None` for the other-prime list means the key has exactly two primes. An
/// empty list is rejected rather than treated the same way.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaMultiPrimePrivateCrtKeySpec {
    key: RsaPrivateCrtKeySpec,
    other_prime_info: Option<Vec<RsaOtherPrimeInfo>>,
}

impl RsaMultiPrimePrivateCrtKeySpec {
    /// Extend a CRT key with additional primes
    ///
    /// Fails with `InvalidArgument` if `other_prime_info` is `Some` but empty.
    pub fn new(
        key: RsaPrivateCrtKeySpec,
        other_prime_info: Option<Vec<RsaOtherPrimeInfo>>,
    ) -> Result<Self> {
        if let Some(others) = &other_prime_info {
            validate::parameter(
                !others.is_empty(),
                "RsaMultiPrimePrivateCrtKeySpec",
                "other prime info, when present, must not be empty",
            )?;
        }
        Ok(Self {
            key,
            other_prime_info,
        })
    }

    /// The two-prime CRT view of this key
    pub fn as_crt_key_spec(&self) -> &RsaPrivateCrtKeySpec {
        &self.key
    }

    /// A fresh copy of the additional prime triples, if any
    pub fn other_prime_info(&self) -> Option<Vec<RsaOtherPrimeInfo>> {
        self.other_prime_info.clone()
    }

    /// Total number of primes in the modulus
    pub fn prime_count(&self) -> usize {
        2 + self.other_prime_info.as_ref().map_or(0, Vec::len)
    }
}

impl RsaPrivateKey for RsaMultiPrimePrivateCrtKeySpec {
    fn modulus(&self) -> &BigInt {
        self.key.modulus()
    }

    fn private_exponent(&self) -> &BigInt {
        self.key.private_exponent()
    }

    fn params(&self) -> Option<&AlgorithmParameters> {
        self.key.params()
    }
}

impl AsRef<RsaPrivateCrtKeySpec> for RsaMultiPrimePrivateCrtKeySpec {
    fn as_ref(&self) -> &RsaPrivateCrtKeySpec {
        &self.key
    }
}

impl fmt::Debug for RsaMultiPrimePrivateCrtKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaMultiPrimePrivateCrtKeySpec")
            .field("key", &self.key)
            .field("prime_count", &self.prime_count())
            .finish()
    }
}

/// Builder for the CRT private key forms
///
/// Every CRT value is required; [`build`](Self::build) reports the first
/// unset one as `NullArgument`. Algorithm parameters and additional primes
/// are optional.
#[derive(Clone, Default)]
pub struct RsaPrivateCrtKeySpecBuilder {
    modulus: Option<BigInt>,
    public_exponent: Option<BigInt>,
    private_exponent: Option<BigInt>,
    prime_p: Option<BigInt>,
    prime_q: Option<BigInt>,
    prime_exponent_p: Option<BigInt>,
    prime_exponent_q: Option<BigInt>,
    crt_coefficient: Option<BigInt>,
    params: Option<AlgorithmParameters>,
    other_prime_info: Option<Vec<RsaOtherPrimeInfo>>,
}

macro_rules! builder_setter {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, $field: BigInt) -> Self {
                self.$field = Some($field);
                self
            }
        )*
    };
}

impl RsaPrivateCrtKeySpecBuilder {
    builder_setter! {
        /// Set the modulus `n`
        modulus,
        /// Set the public exponent `e`
        public_exponent,
        /// Set the private exponent `d`
        private_exponent,
        /// Set the prime `p`
        prime_p,
        /// Set the prime `q`
        prime_q,
        /// Set `d mod (p - 1)`
        prime_exponent_p,
        /// Set `d mod (q - 1)`
        prime_exponent_q,
        /// Set `q^-1 mod p`
        crt_coefficient,
    }

    /// Bind the key to extra algorithm parameters
    pub fn params<P: Into<AlgorithmParameters>>(mut self, params: P) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Add primes beyond `p` and `q`; only used by [`build_multi_prime`](Self::build_multi_prime)
    pub fn other_prime_info(mut self, other_prime_info: Vec<RsaOtherPrimeInfo>) -> Self {
        self.other_prime_info = Some(other_prime_info);
        self
    }

    /// Validate and build the two-prime CRT form
    pub fn build(self) -> Result<RsaPrivateCrtKeySpec> {
        let modulus = validate::present(self.modulus, "modulus")?;
        let public_exponent = validate::present(self.public_exponent, "public_exponent")?;
        let private_exponent = validate::present(self.private_exponent, "private_exponent")?;
        let prime_p = validate::present(self.prime_p, "prime_p")?;
        let prime_q = validate::present(self.prime_q, "prime_q")?;
        let prime_exponent_p = validate::present(self.prime_exponent_p, "prime_exponent_p")?;
        let prime_exponent_q = validate::present(self.prime_exponent_q, "prime_exponent_q")?;
        let crt_coefficient = validate::present(self.crt_coefficient, "crt_coefficient")?;

        Ok(RsaPrivateCrtKeySpec {
            key: RsaPrivateKeySpec::from_parts(modulus, private_exponent, self.params),
            public_exponent,
            prime_p,
            prime_q,
            prime_exponent_p,
            prime_exponent_q,
            crt_coefficient,
        })
    }

    /// Validate and build the multi-prime CRT form
    pub fn build_multi_prime(mut self) -> Result<RsaMultiPrimePrivateCrtKeySpec> {
        let other_prime_info = self.other_prime_info.take();
        let key = self.build()?;
        RsaMultiPrimePrivateCrtKeySpec::new(key, other_prime_info)
    }
}

impl fmt::Debug for RsaPrivateCrtKeySpecBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateCrtKeySpecBuilder")
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}
