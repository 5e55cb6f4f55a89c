//! Encoding format tags and PEM armour labels

/// Format tag of a DER `SubjectPublicKeyInfo`
pub const FORMAT_X509: &str = "X.509";

/// Format tag of a DER `PrivateKeyInfo`
pub const FORMAT_PKCS8: &str = "PKCS#8";

/// PEM label for an X.509 `SubjectPublicKeyInfo`
pub const PEM_LABEL_PUBLIC_KEY: &str = "PUBLIC KEY";

/// PEM label for a PKCS#8 `PrivateKeyInfo`
pub const PEM_LABEL_PRIVATE_KEY: &str = "PRIVATE KEY";

/// Width at which PEM bodies are wrapped
pub const PEM_LINE_WIDTH: usize = 64;
