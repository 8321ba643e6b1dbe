// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated surface attributes.

use std::str::FromStr;

use crate::error::Error;

/// What lies on the far side of a surface.
///
/// Parsed from the usual outside-boundary-condition strings. Anything the
/// network builder does not care about (adiabatic, foundation, other side
/// coefficients, ...) is kept verbatim in [`BoundaryCondition::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BoundaryCondition {
    /// Ambient outdoor air.
    #[default]
    Outdoors,
    /// Another surface of the model (interior partition).
    Surface,
    /// Ground contact.
    Ground,
    /// Any other boundary condition.
    Other(String),
}

impl BoundaryCondition {
    /// Parses a boundary condition string. Never fails: unrecognized text
    /// becomes [`BoundaryCondition::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "Outdoors" => BoundaryCondition::Outdoors,
            "Surface" => BoundaryCondition::Surface,
            "Ground" => BoundaryCondition::Ground,
            other => BoundaryCondition::Other(other.to_string()),
        }
    }

    /// Returns the boundary condition as a string.
    pub fn as_str(&self) -> &str {
        match self {
            BoundaryCondition::Outdoors => "Outdoors",
            BoundaryCondition::Surface => "Surface",
            BoundaryCondition::Ground => "Ground",
            BoundaryCondition::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of planar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Wall,
    Floor,
    RoofCeiling,
}

impl SurfaceType {
    /// Returns the surface type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceType::Wall => "Wall",
            SurfaceType::Floor => "Floor",
            SurfaceType::RoofCeiling => "RoofCeiling",
        }
    }
}

impl FromStr for SurfaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Wall" => Ok(SurfaceType::Wall),
            "Floor" => Ok(SurfaceType::Floor),
            "RoofCeiling" => Ok(SurfaceType::RoofCeiling),
            other => Err(Error::UnknownSurfaceType(other.to_string())),
        }
    }
}

impl std::fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_condition_parse() {
        assert_eq!(BoundaryCondition::parse("Outdoors"), BoundaryCondition::Outdoors);
        assert_eq!(BoundaryCondition::parse("Surface"), BoundaryCondition::Surface);
        assert_eq!(BoundaryCondition::parse("Ground"), BoundaryCondition::Ground);
        assert_eq!(
            BoundaryCondition::parse("Adiabatic"),
            BoundaryCondition::Other("Adiabatic".to_string())
        );
    }

    #[test]
    fn boundary_condition_keeps_unknown_text() {
        let bc = BoundaryCondition::parse("OtherSideCoefficients");
        assert_eq!(bc.as_str(), "OtherSideCoefficients");
        assert_eq!(bc.to_string(), "OtherSideCoefficients");
    }

    #[test]
    fn surface_type_from_str() {
        assert_eq!("Wall".parse::<SurfaceType>().unwrap(), SurfaceType::Wall);
        assert_eq!("RoofCeiling".parse::<SurfaceType>().unwrap(), SurfaceType::RoofCeiling);
        assert!("Ceiling".parse::<SurfaceType>().is_err());
    }
}
