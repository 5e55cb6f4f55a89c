//! Parameter sets identified by name

use std::borrow::Cow;
use std::fmt;

use keyspec_api::error::validate;
use keyspec_api::Result;
use keyspec_params::traditional::edwards;

/// A standard parameter set identified only by its name
///
/// The name is not resolved here; whoever consumes the value decides whether
/// it recognises it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct NamedParameters {
    name: Cow<'static, str>,
}

impl NamedParameters {
    /// Montgomery curve X25519
    pub const X25519: Self = Self::from_static(edwards::X25519);

    /// Montgomery curve X448
    pub const X448: Self = Self::from_static(edwards::X448);

    /// Edwards curve Ed25519
    pub const ED25519: Self = Self::from_static(edwards::ED25519);

    /// Edwards curve Ed448
    pub const ED448: Self = Self::from_static(edwards::ED448);

    const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Create a named parameter set
    ///
    /// Fails with `InvalidArgument` if `name` is empty.
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Result<Self> {
        let name = name.into();
        validate::non_empty(&name, "NamedParameters name")?;
        Ok(Self { name })
    }

    /// The standard name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for NamedParameters {
    type Error = keyspec_api::Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<NamedParameters> for String {
    fn from(params: NamedParameters) -> Self {
        params.name.into_owned()
    }
}

/// A request to generate an EC key pair on a curve known by name
///
/// The name (for example `"secp256r1"`) is resolved by the key generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcGenParameterSpec {
    curve: NamedParameters,
}

impl EcGenParameterSpec {
    /// Create a generation request for the curve `name`
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Result<Self> {
        let curve = NamedParameters::new(name).map_err(|e| e.with_context("EcGenParameterSpec"))?;
        Ok(Self { curve })
    }

    /// The standard curve name
    pub fn name(&self) -> &str {
        self.curve.name()
    }

    /// The curve name as a [`NamedParameters`]
    pub fn as_named(&self) -> &NamedParameters {
        &self.curve
    }
}
