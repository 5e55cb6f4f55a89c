//! Constant values for keyspec specification types
//!
//! Standard curve names and constants, DSA length tables, RSA exponents,
//! digest names and encoding format tags. Nothing in this crate allocates or
//! validates; the specification crates build their values from these.

#![no_std]

pub mod traditional;
pub mod utils;
