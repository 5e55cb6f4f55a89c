//! Key material specifications
//!
//! Each type here pairs raw key material with the parameters that give it
//! meaning:
//!
//! - EC: [`EcPrivateKeySpec`], [`EcPublicKeySpec`]
//! - Edwards (EdDSA): [`EdPrivateKeySpec`], [`EdPublicKeySpec`]
//! - Montgomery (X25519/X448): [`XecPrivateKeySpec`], [`XecPublicKeySpec`]
//! - RSA: [`rsa`] plain, CRT and multi-prime private keys, public keys,
//!   key-generation and PSS parameters
//! - DSA: [`dsa`] domain parameters, generation requests and keys
//! - Encoded blobs: [`X509EncodedKeySpec`], [`Pkcs8EncodedKeySpec`]
//!
//! Raw private bytes are copied in on construction, copied out on every read,
//! and wiped when the value is dropped.

pub mod dsa;
pub mod ec;
pub mod edec;
pub mod encoded;
pub mod params;
pub mod rsa;
pub mod xec;

pub use dsa::{DsaGenParameterSpec, DsaParameterSpec, DsaPrivateKeySpec, DsaPublicKeySpec};
pub use ec::{EcPrivateKeySpec, EcPublicKeySpec};
pub use edec::{EdPrivateKeySpec, EdPublicKeySpec};
pub use encoded::{EncodedKeySpec, Pkcs8EncodedKeySpec, X509EncodedKeySpec};
pub use params::AlgorithmParameters;
pub use rsa::{
    Mgf1ParameterSpec, PssParameterSpec, RsaKeyGenParameterSpec, RsaMultiPrimePrivateCrtKeySpec,
    RsaOtherPrimeInfo, RsaPrivateCrtKeySpec, RsaPrivateCrtKeySpecBuilder, RsaPrivateKey,
    RsaPrivateKeySpec, RsaPublicKeySpec,
};
pub use xec::{XecPrivateKeySpec, XecPublicKeySpec};
