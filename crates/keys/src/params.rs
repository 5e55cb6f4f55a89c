//! Algorithm parameters that can accompany key material

use keyspec_ec::{DomainParameters, EcGenParameterSpec, NamedParameters};

use crate::dsa::{DsaGenParameterSpec, DsaParameterSpec};
use crate::rsa::{Mgf1ParameterSpec, PssParameterSpec, RsaKeyGenParameterSpec};

/// Any parameter specification a key spec may carry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmParameters {
    /// A standard parameter set known by name
    Named(NamedParameters),
    /// Request to generate EC keys on a named curve
    EcGen(EcGenParameterSpec),
    /// Explicit EC domain parameters
    Ec(DomainParameters),
    /// DSA domain parameters
    Dsa(DsaParameterSpec),
    /// Request to generate DSA domain parameters
    DsaGen(DsaGenParameterSpec),
    /// RSASSA-PSS parameters
    Pss(PssParameterSpec),
    /// MGF1 mask generation parameters
    Mgf1(Mgf1ParameterSpec),
    /// Request to generate an RSA key pair
    RsaKeyGen(RsaKeyGenParameterSpec),
}

impl AlgorithmParameters {
    /// The named parameter set, if this is one
    pub fn as_named(&self) -> Option<&NamedParameters> {
        match self {
            AlgorithmParameters::Named(named) => Some(named),
            _ => None,
        }
    }
}

macro_rules! impl_from_params {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AlgorithmParameters {
                fn from(params: $ty) -> Self {
                    AlgorithmParameters::$variant(params)
                }
            }
        )*
    };
}

impl_from_params! {
    Named => NamedParameters,
    EcGen => EcGenParameterSpec,
    Ec => DomainParameters,
    Dsa => DsaParameterSpec,
    DsaGen => DsaGenParameterSpec,
    Pss => PssParameterSpec,
    Mgf1 => Mgf1ParameterSpec,
    RsaKeyGen => RsaKeyGenParameterSpec,
}
