//! Elliptic-curve key specifications

use core::fmt;

use keyspec_api::error::validate;
use keyspec_api::Result;
use keyspec_ec::{CurvePoint, DomainParameters};
use num_bigint::BigInt;

/// An EC private key: scalar `s` with its domain parameters
#[derive(Clone, PartialEq, Eq)]
pub struct EcPrivateKeySpec {
    s: BigInt,
    params: DomainParameters,
}

impl EcPrivateKeySpec {
    /// Create an EC private key spec
    pub fn new(s: BigInt, params: DomainParameters) -> Self {
        Self { s, params }
    }

    /// The private scalar
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// The domain parameters
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }
}

impl fmt::Debug for EcPrivateKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKeySpec")
            .field("s", &"[REDACTED]")
            .field("params", &self.params)
            .finish()
    }
}

/// An EC public key: point `w` with its domain parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcPublicKeySpec {
    w: CurvePoint,
    params: DomainParameters,
}

impl EcPublicKeySpec {
    /// Create an EC public key spec
    ///
    /// Fails with `InvalidArgument` if `w` is the point at infinity.
    pub fn new(w: CurvePoint, params: DomainParameters) -> Result<Self> {
        validate::parameter(
            !w.is_infinity(),
            "EcPublicKeySpec",
            "public point must not be the point at infinity",
        )?;
        Ok(Self { w, params })
    }

    /// The public point
    pub fn w(&self) -> &CurvePoint {
        &self.w
    }

    /// The domain parameters
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }
}
