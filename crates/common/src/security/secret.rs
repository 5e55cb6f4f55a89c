//! Secret byte buffer with guaranteed zeroization
//!
//! `SecretVec` owns its bytes outright: construction copies the caller's
//! slice and every read hands back a fresh copy, so no caller-held buffer
//! ever aliases the stored secret.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::constant_time::ct_eq;

/// Variable-size secret vector that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Constant-time equality
/// - A `Debug` implementation that hides the contents
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector, taking ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector from a copy of `slice`
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Return an owned copy that is itself wiped on drop
    pub fn to_zeroizing_vec(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.clone())
    }

    /// Overwrite every byte with zero, keeping the length
    ///
    /// Unlike [`Zeroize::zeroize`], which also truncates the vector, the
    /// wiped buffer still reports its original length afterwards.
    pub fn wipe(&mut self) {
        self.data.as_mut_slice().zeroize();
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for SecretVec {
    fn from(slice: &[u8]) -> Self {
        Self::from_slice(slice)
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
