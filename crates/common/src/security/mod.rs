//! Security primitives for handling raw key material
//!
//! Byte buffers holding private scalars or encoded private keys are wiped
//! when dropped, compared in constant time, and never printed.

pub mod constant_time;
pub mod secret;

pub use constant_time::ct_eq;
pub use secret::SecretVec;
