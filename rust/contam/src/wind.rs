// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wind pressure modifiers from the power-law boundary layer profile.

use serde::{Deserialize, Serialize};

use crate::elements::RHO_AIR;

/// Exponent of the meteorological station's terrain.
const MET_EXPONENT: f64 = 0.14;
/// Boundary layer thickness at the meteorological station, m.
const MET_THICKNESS: f64 = 270.0;
/// Anemometer height, m.
const MET_HEIGHT: f64 = 10.0;

/// Terrain around the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Terrain {
    /// Flat open country.
    Country,
    /// Suburbs, towns, wooded areas.
    #[default]
    Suburbs,
    /// City centres.
    City,
    /// Flat unobstructed areas facing open water.
    Ocean,
}

impl Terrain {
    /// Profile exponent and boundary layer thickness (m).
    pub fn profile(&self) -> (f64, f64) {
        match self {
            Terrain::Country => (0.14, 270.0),
            Terrain::Suburbs => (0.22, 370.0),
            Terrain::City => (0.33, 460.0),
            Terrain::Ocean => (0.10, 210.0),
        }
    }
}

/// Converts the squared station wind speed into the dynamic pressure at
/// building height `height` (m).
pub fn pressure_modifier(terrain: Terrain, height: f64) -> f64 {
    let (alpha, delta) = terrain.profile();
    let ratio = (MET_THICKNESS / MET_HEIGHT).powf(MET_EXPONENT) * (height / delta).powf(alpha);
    0.5 * RHO_AIR * ratio * ratio
}
