//! Public error surface for the keyspec library
//!
//! Every specification type in the keyspec ecosystem validates its inputs
//! once, at construction. This crate provides the single error type those
//! constructors return and the validation helpers they share.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
