//! Edwards-curve (EdDSA) key specifications

use keyspec_common::SecretVec;
use keyspec_ec::{EdwardsPoint, NamedParameters};
use zeroize::Zeroizing;

/// An Edwards private key: the raw, unpruned key bytes
///
/// The bytes are copied in and every read returns a fresh copy; the stored
/// copy is wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdPrivateKeySpec {
    params: NamedParameters,
    bytes: SecretVec,
}

impl EdPrivateKeySpec {
    /// Create an Edwards private key spec from a copy of `bytes`
    pub fn new(params: NamedParameters, bytes: &[u8]) -> Self {
        Self {
            params,
            bytes: SecretVec::from_slice(bytes),
        }
    }

    /// The curve
    pub fn params(&self) -> &NamedParameters {
        &self.params
    }

    /// A fresh copy of the private key bytes
    pub fn bytes(&self) -> Zeroizing<Vec<u8>> {
        self.bytes.to_zeroizing_vec()
    }
}

/// An Edwards public key: a compressed point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdPublicKeySpec {
    params: NamedParameters,
    point: EdwardsPoint,
}

impl EdPublicKeySpec {
    /// Create an Edwards public key spec
    pub fn new(params: NamedParameters, point: EdwardsPoint) -> Self {
        Self { params, point }
    }

    /// The curve
    pub fn params(&self) -> &NamedParameters {
        &self.params
    }

    /// The public point
    pub fn point(&self) -> &EdwardsPoint {
        &self.point
    }
}
