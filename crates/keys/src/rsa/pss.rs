//! RSASSA-PSS and MGF1 parameters (PKCS #1 v2.2)

use std::borrow::Cow;

use keyspec_api::error::validate;
use keyspec_api::Result;
use keyspec_params::traditional::rsa;
use keyspec_params::utils::hash;

/// Parameters of the MGF1 mask generation function: its message digest
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mgf1ParameterSpec {
    digest: Cow<'static, str>,
}

impl Mgf1ParameterSpec {
    /// MGF1 with SHA-1
    pub const SHA1: Self = Self::from_static(hash::SHA1);
    /// MGF1 with SHA-224
    pub const SHA224: Self = Self::from_static(hash::SHA224);
    /// MGF1 with SHA-256
    pub const SHA256: Self = Self::from_static(hash::SHA256);
    /// MGF1 with SHA-384
    pub const SHA384: Self = Self::from_static(hash::SHA384);
    /// MGF1 with SHA-512
    pub const SHA512: Self = Self::from_static(hash::SHA512);
    /// MGF1 with SHA-512/224
    pub const SHA512_224: Self = Self::from_static(hash::SHA512_224);
    /// MGF1 with SHA-512/256
    pub const SHA512_256: Self = Self::from_static(hash::SHA512_256);
    /// MGF1 with SHA3-224
    pub const SHA3_224: Self = Self::from_static(hash::SHA3_224);
    /// MGF1 with SHA3-256
    pub const SHA3_256: Self = Self::from_static(hash::SHA3_256);
    /// MGF1 with SHA3-384
    pub const SHA3_384: Self = Self::from_static(hash::SHA3_384);
    /// MGF1 with SHA3-512
    pub const SHA3_512: Self = Self::from_static(hash::SHA3_512);

    const fn from_static(digest: &'static str) -> Self {
        Self {
            digest: Cow::Borrowed(digest),
        }
    }

    /// MGF1 with the digest `digest`, which must not be empty
    pub fn new<D: Into<Cow<'static, str>>>(digest: D) -> Result<Self> {
        let digest = digest.into();
        validate::non_empty(&digest, "Mgf1ParameterSpec digest")?;
        Ok(Self { digest })
    }

    /// Name of the digest
    pub fn digest_algorithm(&self) -> &str {
        &self.digest
    }
}

/// RSASSA-PSS signature parameters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PssParameterSpec {
    digest: Cow<'static, str>,
    mgf: Cow<'static, str>,
    mgf_params: Option<Mgf1ParameterSpec>,
    salt_len: usize,
    trailer_field: u32,
}

impl PssParameterSpec {
    /// The trailer field `0xBC`, the only value PKCS #1 defines
    pub const TRAILER_FIELD_BC: u32 = rsa::PSS_TRAILER_FIELD_BC;

    /// Create PSS parameters
    ///
    /// The digest and MGF names must not be empty.
    pub fn new<D, M>(
        digest: D,
        mgf: M,
        mgf_params: Option<Mgf1ParameterSpec>,
        salt_len: usize,
        trailer_field: u32,
    ) -> Result<Self>
    where
        D: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        let digest = digest.into();
        let mgf = mgf.into();
        validate::non_empty(&digest, "PssParameterSpec digest")?;
        validate::non_empty(&mgf, "PssParameterSpec mask generation function")?;
        Ok(Self {
            digest,
            mgf,
            mgf_params,
            salt_len,
            trailer_field,
        })
    }

    /// SHA-1 / MGF1-SHA-1 parameters with the given salt length
    pub fn with_salt_length(salt_len: usize) -> Self {
        Self {
            digest: Cow::Borrowed(hash::SHA1),
            mgf: Cow::Borrowed(rsa::MGF1),
            mgf_params: Some(Mgf1ParameterSpec::SHA1),
            salt_len,
            trailer_field: Self::TRAILER_FIELD_BC,
        }
    }

    /// Convenience constructor for MGF1 with the same digest as the signature
    pub fn mgf1(digest: Mgf1ParameterSpec, salt_len: usize) -> Self {
        Self {
            digest: digest.digest.clone(),
            mgf: Cow::Borrowed(rsa::MGF1),
            mgf_params: Some(digest),
            salt_len,
            trailer_field: Self::TRAILER_FIELD_BC,
        }
    }

    /// Name of the message digest
    pub fn digest_algorithm(&self) -> &str {
        &self.digest
    }

    /// Name of the mask generation function
    pub fn mgf_algorithm(&self) -> &str {
        &self.mgf
    }

    /// Parameters of the mask generation function
    pub fn mgf_parameters(&self) -> Option<&Mgf1ParameterSpec> {
        self.mgf_params.as_ref()
    }

    /// Salt length in bytes
    pub fn salt_length(&self) -> usize {
        self.salt_len
    }

    /// Trailer field
    pub fn trailer_field(&self) -> u32 {
        self.trailer_field
    }
}

impl Default for PssParameterSpec {
    fn default() -> Self {
        Self::with_salt_length(rsa::PSS_DEFAULT_SALT_LENGTH)
    }
}
