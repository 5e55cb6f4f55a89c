//! Constants shared across algorithm families

pub mod encoding;
pub mod hash;
