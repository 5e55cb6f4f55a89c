//! Identifiers for the Montgomery and Edwards curve families

/// Montgomery curve X25519 (RFC 7748)
pub const X25519: &str = "X25519";

/// Montgomery curve X448 (RFC 7748)
pub const X448: &str = "X448";

/// Edwards curve Ed25519 (RFC 8032)
pub const ED25519: &str = "Ed25519";

/// Edwards curve Ed448 (RFC 8032)
pub const ED448: &str = "Ed448";

/// Size of an X25519 private scalar in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an X448 private scalar in bytes
pub const X448_PRIVATE_KEY_SIZE: usize = 56;

/// Size of an Ed25519 private key in bytes
pub const ED25519_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an Ed448 private key in bytes
pub const ED448_PRIVATE_KEY_SIZE: usize = 57;
