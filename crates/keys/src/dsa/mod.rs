//! DSA parameter and key specifications (FIPS 186)

use core::fmt;

use keyspec_api::error::validate;
use keyspec_api::Result;
use keyspec_params::traditional::dsa::dsa_subprime_lengths;
use num_bigint::BigInt;

const CONTEXT: &str = "DsaGenParameterSpec";

/// DSA domain parameters: prime `p`, sub-prime `q` and base `g`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DsaParameterSpec {
    p: BigInt,
    q: BigInt,
    g: BigInt,
}

impl DsaParameterSpec {
    /// Create DSA domain parameters
    pub fn new(p: BigInt, q: BigInt, g: BigInt) -> Self {
        Self { p, q, g }
    }

    /// The prime `p`
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// The sub-prime `q`
    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// The base `g`
    pub fn g(&self) -> &BigInt {
        &self.g
    }
}

/// A request to generate DSA domain parameters of the given sizes
///
/// Only the `(L, N)` pairs of FIPS 186-4 are accepted: (1024, 160),
/// (2048, 224), (2048, 256) and (3072, 256). The seed must be at least `N`
/// bits long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DsaGenParameterSpec {
    prime_p_len: usize,
    subprime_q_len: usize,
    seed_len: usize,
}

impl DsaGenParameterSpec {
    /// Request parameters with a seed as long as the sub-prime
    pub fn new(prime_p_len: usize, subprime_q_len: usize) -> Result<Self> {
        Self::with_seed_len(prime_p_len, subprime_q_len, subprime_q_len)
    }

    /// Request parameters with an explicit seed length
    pub fn with_seed_len(
        prime_p_len: usize,
        subprime_q_len: usize,
        seed_len: usize,
    ) -> Result<Self> {
        let legal = dsa_subprime_lengths(prime_p_len).unwrap_or(&[]);
        validate::parameter(!legal.is_empty(), CONTEXT, "unsupported prime length")?;
        validate::parameter(
            legal.contains(&subprime_q_len),
            CONTEXT,
            "sub-prime length does not match prime length",
        )?;
        validate::parameter(
            seed_len >= subprime_q_len,
            CONTEXT,
            "seed length must not be shorter than the sub-prime length",
        )?;

        Ok(Self {
            prime_p_len,
            subprime_q_len,
            seed_len,
        })
    }

    /// Length of `p` in bits
    pub fn prime_p_length(&self) -> usize {
        self.prime_p_len
    }

    /// Length of `q` in bits
    pub fn subprime_q_length(&self) -> usize {
        self.subprime_q_len
    }

    /// Length of the domain-parameter seed in bits
    pub fn seed_length(&self) -> usize {
        self.seed_len
    }
}

/// A DSA private key `x` with its domain parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DsaPrivateKeySpec {
    x: BigInt,
    params: DsaParameterSpec,
}

impl DsaPrivateKeySpec {
    /// Create a DSA private key spec
    pub fn new(x: BigInt, p: BigInt, q: BigInt, g: BigInt) -> Self {
        Self {
            x,
            params: DsaParameterSpec::new(p, q, g),
        }
    }

    /// The private key `x`
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The domain parameters
    pub fn params(&self) -> &DsaParameterSpec {
        &self.params
    }

    /// The prime `p`
    pub fn p(&self) -> &BigInt {
        self.params.p()
    }

    /// The sub-prime `q`
    pub fn q(&self) -> &BigInt {
        self.params.q()
    }

    /// The base `g`
    pub fn g(&self) -> &BigInt {
        self.params.g()
    }
}

impl fmt::Debug for DsaPrivateKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaPrivateKeySpec")
            .field("x", &"[REDACTED]")
            .field("params", &self.params)
            .finish()
    }
}

/// A DSA public key `y` with its domain parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaPublicKeySpec {
    y: BigInt,
    params: DsaParameterSpec,
}

impl DsaPublicKeySpec {
    /// Create a DSA public key spec
    pub fn new(y: BigInt, p: BigInt, q: BigInt, g: BigInt) -> Self {
        Self {
            y,
            params: DsaParameterSpec::new(p, q, g),
        }
    }

    /// The public key `y`
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The domain parameters
    pub fn params(&self) -> &DsaParameterSpec {
        &self.params
    }

    /// The prime `p`
    pub fn p(&self) -> &BigInt {
        self.params.p()
    }

    /// The sub-prime `q`
    pub fn q(&self) -> &BigInt {
        self.params.q()
    }

    /// The base `g`
    pub fn g(&self) -> &BigInt {
        self.params.g()
    }
}
