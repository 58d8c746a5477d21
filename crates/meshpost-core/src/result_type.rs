//! Selectable result types

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A scalar result quantity that can be painted onto the mesh.
///
/// Each variant corresponds to one per-node scalar derived from the solver
/// output, together with the physical unit used when displaying statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultType {
    /// No result selected; node colors are cleared
    #[default]
    None,
    /// Absolute displacement magnitude (Uabs)
    DisplacementAbs,
    /// Displacement X component (U1)
    DisplacementX,
    /// Displacement Y component (U2)
    DisplacementY,
    /// Displacement Z component (U3)
    DisplacementZ,
    /// Nodal temperature
    Temperature,
    /// Von Mises equivalent stress (Sabs)
    VonMises,
    /// Maximum principal stress
    PrincipalMax,
    /// Minimum principal stress
    PrincipalMin,
    /// Maximum shear stress
    MaxShear,
    /// Result of a user-supplied formula
    UserDefined,
}

impl ResultType {
    /// All selectable result types, in presentation order
    pub const ALL: [ResultType; 11] = [
        ResultType::None,
        ResultType::DisplacementAbs,
        ResultType::DisplacementX,
        ResultType::DisplacementY,
        ResultType::DisplacementZ,
        ResultType::Temperature,
        ResultType::VonMises,
        ResultType::PrincipalMax,
        ResultType::PrincipalMin,
        ResultType::MaxShear,
        ResultType::UserDefined,
    ];

    /// Unit label used when formatting statistics for this type
    pub fn unit(&self) -> &'static str {
        match self {
            ResultType::None => "mm",
            ResultType::DisplacementAbs
            | ResultType::DisplacementX
            | ResultType::DisplacementY
            | ResultType::DisplacementZ => "mm",
            ResultType::Temperature => "K",
            ResultType::VonMises
            | ResultType::PrincipalMax
            | ResultType::PrincipalMin
            | ResultType::MaxShear => "MPa",
            ResultType::UserDefined => "",
        }
    }

    /// Short key used in persisted settings and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ResultType::None => "None",
            ResultType::DisplacementAbs => "Uabs",
            ResultType::DisplacementX => "U1",
            ResultType::DisplacementY => "U2",
            ResultType::DisplacementZ => "U3",
            ResultType::Temperature => "Temp",
            ResultType::VonMises => "Sabs",
            ResultType::PrincipalMax => "MaxPrin",
            ResultType::PrincipalMin => "MinPrin",
            ResultType::MaxShear => "MaxShear",
            ResultType::UserDefined => "user",
        }
    }

    /// True for the displacement component/magnitude types
    pub fn is_displacement(&self) -> bool {
        matches!(
            self,
            ResultType::DisplacementAbs
                | ResultType::DisplacementX
                | ResultType::DisplacementY
                | ResultType::DisplacementZ
        )
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ResultType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultType::ALL
            .into_iter()
            .find(|rt| rt.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownResultType(s.to_string()))
    }
}
