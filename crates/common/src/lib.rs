//! Common implementations and shared functionality for the keyspec library
//!
//! This crate provides the secret-holding buffer used by every specification
//! type that carries raw private key material.

pub mod security;

// Re-export core security types
pub use security::{ct_eq, SecretVec};
