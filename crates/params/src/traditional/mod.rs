//! Constants for traditional public-key algorithms

pub mod dsa;
pub mod ec;
pub mod edwards;
pub mod rsa;
