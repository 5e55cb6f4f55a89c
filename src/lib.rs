//! # keyspec
//!
//! Validated, immutable descriptions of cryptographic keys and algorithm
//! parameters.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyspec = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: serialization of fields, curves, points and domain parameters.
//!   Deserialized values are re-validated.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keyspec-api`]: the error type and shared validation helpers
//! - [`keyspec-common`]: secret byte buffers and constant-time comparison
//! - [`keyspec-params`]: standard constants (curve names, key sizes, digests)
//! - [`keyspec-ec`]: finite fields, curves, points and domain parameters
//! - [`keyspec-keys`]: key material and encoded key specifications
//!
//! ## Example
//!
//! ```
//! use keyspec::prelude::*;
//! use keyspec::ec::standard;
//!
//! let params = standard::secp256r1();
//! let public = EcPublicKeySpec::new(params.generator().clone(), params.clone()).unwrap();
//! assert_eq!(public.params().cofactor(), 1);
//!
//! // The point at infinity is never a valid public key
//! assert!(EcPublicKeySpec::new(CurvePoint::infinity(), params).is_err());
//! ```

pub use keyspec_api as api;
pub use keyspec_common as common;
pub use keyspec_ec as ec;
pub use keyspec_keys as keys;
pub use keyspec_params as params;

/// Common imports for keyspec users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Capability traits
    pub use crate::ec::EcField;
    pub use crate::keys::{EncodedKeySpec, RsaPrivateKey};
    pub use zeroize::Zeroize;

    // Elliptic-curve descriptions
    pub use crate::ec::{
        BinaryField, CurvePoint, DomainParameters, EcGenParameterSpec, EdwardsPoint,
        EllipticCurve, Field, NamedParameters, PrimeField,
    };

    // Key material
    pub use crate::keys::{
        AlgorithmParameters, DsaGenParameterSpec, DsaParameterSpec, DsaPrivateKeySpec,
        DsaPublicKeySpec, EcPrivateKeySpec, EcPublicKeySpec, EdPrivateKeySpec, EdPublicKeySpec,
        Mgf1ParameterSpec, Pkcs8EncodedKeySpec, PssParameterSpec, RsaKeyGenParameterSpec,
        RsaMultiPrimePrivateCrtKeySpec, RsaOtherPrimeInfo, RsaPrivateCrtKeySpec,
        RsaPrivateKeySpec, RsaPublicKeySpec, X509EncodedKeySpec, XecPrivateKeySpec,
        XecPublicKeySpec,
    };

    pub use num_bigint::{BigInt, BigUint};
}
