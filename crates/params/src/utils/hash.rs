//! Standard message digest names

/// SHA-1
pub const SHA1: &str = "SHA-1";

/// SHA-224
pub const SHA224: &str = "SHA-224";

/// SHA-256
pub const SHA256: &str = "SHA-256";

/// SHA-384
pub const SHA384: &str = "SHA-384";

/// SHA-512
pub const SHA512: &str = "SHA-512";

/// SHA-512/224
pub const SHA512_224: &str = "SHA-512/224";

/// SHA-512/256
pub const SHA512_256: &str = "SHA-512/256";

/// SHA3-224
pub const SHA3_224: &str = "SHA3-224";

/// SHA3-256
pub const SHA3_256: &str = "SHA3-256";

/// SHA3-384
pub const SHA3_384: &str = "SHA3-384";

/// SHA3-512
pub const SHA3_512: &str = "SHA3-512";
