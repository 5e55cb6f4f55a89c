//! Encoded key specifications
//!
//! An encoded key is an opaque byte blob (DER in practice) tagged with the
//! name of its format and, optionally, of its key algorithm. The bytes are
//! copied in on construction and out on every read. [`Zeroize::zeroize`]
//! overwrites the stored bytes with zeros in place; the value stays usable and
//! later reads return zero-filled copies of the original length.

mod pem;

use keyspec_api::error::validate;
use keyspec_api::Result;
use keyspec_common::SecretVec;
use keyspec_params::utils::encoding;
use zeroize::{Zeroize, Zeroizing};

/// Common interface of the encoded key forms
pub trait EncodedKeySpec {
    /// Name of the encoding format, e.g. `"X.509"`
    fn format(&self) -> &'static str;

    /// A fresh copy of the encoded bytes
    fn encoded(&self) -> Zeroizing<Vec<u8>>;

    /// Name of the key algorithm, if one was given
    fn algorithm(&self) -> Option<&str>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EncodedKey {
    bytes: SecretVec,
    algorithm: Option<String>,
}

impl EncodedKey {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: SecretVec::from_slice(bytes),
            algorithm: None,
        }
    }

    fn with_algorithm(bytes: &[u8], algorithm: &str, context: &'static str) -> Result<Self> {
        validate::non_empty(algorithm, context)?;
        Ok(Self {
            bytes: SecretVec::from_slice(bytes),
            algorithm: Some(algorithm.to_owned()),
        })
    }

    fn wipe(&mut self, format: &'static str) {
        self.bytes.wipe();
        tracing::trace!(format, len = self.bytes.len(), "encoded key material zeroized");
    }
}

/// A DER-encoded `SubjectPublicKeyInfo` (X.509 public key)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct X509EncodedKeySpec {
    inner: EncodedKey,
}

impl X509EncodedKeySpec {
    /// Wrap a copy of `encoded`
    pub fn new(encoded: &[u8]) -> Self {
        Self {
            inner: EncodedKey::new(encoded),
        }
    }

    /// Wrap a copy of `encoded`, tagged with the key algorithm
    ///
    /// Fails with `InvalidArgument` if `algorithm` is empty.
    pub fn with_algorithm(encoded: &[u8], algorithm: &str) -> Result<Self> {
        Ok(Self {
            inner: EncodedKey::with_algorithm(encoded, algorithm, "X509EncodedKeySpec algorithm")?,
        })
    }

    /// Armour as PEM with the `PUBLIC KEY` label
    pub fn to_pem(&self) -> String {
        pem::encode(encoding::PEM_LABEL_PUBLIC_KEY, self.inner.bytes.as_slice())
    }

    /// Parse a `PUBLIC KEY` PEM document
    pub fn from_pem(document: &str) -> Result<Self> {
        let der = pem::decode(encoding::PEM_LABEL_PUBLIC_KEY, document)?;
        Ok(Self::new(&der))
    }
}

impl EncodedKeySpec for X509EncodedKeySpec {
    fn format(&self) -> &'static str {
        encoding::FORMAT_X509
    }

    fn encoded(&self) -> Zeroizing<Vec<u8>> {
        self.inner.bytes.to_zeroizing_vec()
    }

    fn algorithm(&self) -> Option<&str> {
        self.inner.algorithm.as_deref()
    }
}

impl Zeroize for X509EncodedKeySpec {
    fn zeroize(&mut self) {
        self.inner.wipe(encoding::FORMAT_X509);
    }
}

/// A DER-encoded `PrivateKeyInfo` (PKCS #8 private key)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pkcs8EncodedKeySpec {
    inner: EncodedKey,
}

impl Pkcs8EncodedKeySpec {
    /// Wrap a copy of `encoded`
    pub fn new(encoded: &[u8]) -> Self {
        Self {
            inner: EncodedKey::new(encoded),
        }
    }

    /// Wrap a copy of `encoded`, tagged with the key algorithm
    ///
    /// Fails with `InvalidArgument` if `algorithm` is empty.
    pub fn with_algorithm(encoded: &[u8], algorithm: &str) -> Result<Self> {
        Ok(Self {
            inner: EncodedKey::with_algorithm(encoded, algorithm, "Pkcs8EncodedKeySpec algorithm")?,
        })
    }

    /// Armour as PEM with the `PRIVATE KEY` label
    pub fn to_pem(&self) -> Zeroizing<String> {
        Zeroizing::new(pem::encode(
            encoding::PEM_LABEL_PRIVATE_KEY,
            self.inner.bytes.as_slice(),
        ))
    }

    /// Parse a `PRIVATE KEY` PEM document
    pub fn from_pem(document: &str) -> Result<Self> {
        let der = Zeroizing::new(pem::decode(encoding::PEM_LABEL_PRIVATE_KEY, document)?);
        Ok(Self::new(&der))
    }
}

impl EncodedKeySpec for Pkcs8EncodedKeySpec {
    fn format(&self) -> &'static str {
        encoding::FORMAT_PKCS8
    }

    fn encoded(&self) -> Zeroizing<Vec<u8>> {
        self.inner.bytes.to_zeroizing_vec()
    }

    fn algorithm(&self) -> Option<&str> {
        self.inner.algorithm.as_deref()
    }
}

impl Zeroize for Pkcs8EncodedKeySpec {
    fn zeroize(&mut self) {
        self.inner.wipe(encoding::FORMAT_PKCS8);
    }
}
