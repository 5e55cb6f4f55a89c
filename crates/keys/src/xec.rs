//! Montgomery-curve (X25519 / X448) key specifications

use keyspec_common::SecretVec;
use num_bigint::BigInt;
use zeroize::Zeroizing;

use crate::params::AlgorithmParameters;

/// A Montgomery private key: the raw, unpruned scalar bytes
///
/// The bytes are copied in and every read returns a fresh copy; the stored
/// copy is wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XecPrivateKeySpec {
    params: AlgorithmParameters,
    scalar: SecretVec,
}

impl XecPrivateKeySpec {
    /// Create a Montgomery private key spec from a copy of `scalar`
    pub fn new<P: Into<AlgorithmParameters>>(params: P, scalar: &[u8]) -> Self {
        Self {
            params: params.into(),
            scalar: SecretVec::from_slice(scalar),
        }
    }

    /// The algorithm parameters
    pub fn params(&self) -> &AlgorithmParameters {
        &self.params
    }

    /// A fresh copy of the scalar bytes
    pub fn scalar(&self) -> Zeroizing<Vec<u8>> {
        self.scalar.to_zeroizing_vec()
    }
}

/// A Montgomery public key: the u-coordinate
///
/// `u` is not reduced or range-checked; any integer is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XecPublicKeySpec {
    params: AlgorithmParameters,
    u: BigInt,
}

impl XecPublicKeySpec {
    /// Create a Montgomery public key spec
    pub fn new<P: Into<AlgorithmParameters>>(params: P, u: BigInt) -> Self {
        Self {
            params: params.into(),
            u,
        }
    }

    /// The algorithm parameters
    pub fn params(&self) -> &AlgorithmParameters {
        &self.params
    }

    /// The u-coordinate
    pub fn u(&self) -> &BigInt {
        &self.u
    }
}
