//! Constants for the RSA algorithm

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: usize = 2048;

/// RSA with 3072-bit modulus
pub const RSA_MODULUS_3072: usize = 3072;

/// RSA with 4096-bit modulus
pub const RSA_MODULUS_4096: usize = 4096;

/// Public exponent F0 (3)
pub const RSA_EXPONENT_F0: u32 = 3;

/// Public exponent F4 (65537)
pub const RSA_EXPONENT_F4: u32 = 65537;

/// Trailer field value for RSASSA-PSS (`0xBC`)
pub const PSS_TRAILER_FIELD_BC: u32 = 1;

/// Name of the only mask generation function defined for RSASSA-PSS
pub const MGF1: &str = "MGF1";

/// Salt length used by the legacy SHA-1 PSS defaults
pub const PSS_DEFAULT_SALT_LENGTH: usize = 20;
