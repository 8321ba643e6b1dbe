// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Leakage elements: the standard library and custom power-law elements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::index_model::{AirflowElement, IndexModel};

/// Density of standard air, kg/m³.
pub const RHO_AIR: f64 = 1.20410;
/// Square root of [`RHO_AIR`].
pub const SQRT_RHO_AIR: f64 = 1.097315;
/// Dynamic viscosity of standard air, Pa·s.
pub const MU_AIR: f64 = 1.81625e-5;
/// Reynolds number of the laminar/turbulent transition.
const RE_TRANSITION: f64 = 30.0;
/// Smallest transition pressure drop, Pa.
const DP_TRANSITION_MIN: f64 = 1.0e-10;

/// Envelope airtightness grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AirtightnessLevel {
    Leaky,
    #[default]
    Average,
    Tight,
}

impl AirtightnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AirtightnessLevel::Leaky => "Leaky",
            AirtightnessLevel::Average => "Average",
            AirtightnessLevel::Tight => "Tight",
        }
    }

    /// Suffix used by the standard element names.
    fn suffix(&self) -> &'static str {
        match self {
            AirtightnessLevel::Leaky => "Leaky",
            AirtightnessLevel::Average => "Avg",
            AirtightnessLevel::Tight => "Tight",
        }
    }

    /// Standard element names for this grade.
    pub fn element_names(&self) -> ElementNames {
        let s = self.suffix();
        ElementNames {
            exterior: format!("ExtWall{s}"),
            interior: format!("IntWall{s}"),
            floor: format!("Floor{s}"),
            roof: format!("Roof{s}"),
        }
    }
}

impl fmt::Display for AirtightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown airtightness grade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown airtightness level '{0}'")]
pub struct UnknownAirtightness(pub String);

impl FromStr for AirtightnessLevel {
    type Err = UnknownAirtightness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Leaky" => Ok(AirtightnessLevel::Leaky),
            "Average" => Ok(AirtightnessLevel::Average),
            "Tight" => Ok(AirtightnessLevel::Tight),
            other => Err(UnknownAirtightness(other.to_string())),
        }
    }
}

/// Element names per surface role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNames {
    pub exterior: String,
    pub interior: String,
    pub floor: String,
    pub roof: String,
}

/// Element numbers assigned to each surface role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementSet {
    pub exterior: usize,
    pub interior: usize,
    pub floor: usize,
    pub roof: usize,
}

impl ElementSet {
    /// Resolves the names against the element table.
    pub fn resolve(model: &IndexModel, names: &ElementNames) -> Option<Self> {
        Some(Self {
            exterior: model.airflow_element_nr_by_name(&names.exterior)?,
            interior: model.airflow_element_nr_by_name(&names.interior)?,
            floor: model.airflow_element_nr_by_name(&names.floor)?,
            roof: model.airflow_element_nr_by_name(&names.roof)?,
        })
    }
}

/// (name, laminar, turbulent, exponent, ΔP, flow) of the standard elements.
const STANDARD_ELEMENTS: [(&str, f64, f64, f64, f64, f64); 12] = [
    ("ExtWallAvg", 6.13696e-8, 0.000499082, 0.65, 75.0, 0.00906345),
    ("ExtWallLeaky", 1.288e-7, 0.000895033, 0.65, 75.0, 0.016254),
    ("ExtWallTight", 8.29484e-9, 0.000103131, 0.65, 75.0, 0.00187289),
    ("FloorAvg", 1.47921e-7, 0.000998165, 0.65, 75.0, 0.0181269),
    ("FloorLeaky", 3.1045e-7, 0.00179007, 0.65, 75.0, 0.032508),
    ("FloorTight", 1.99933e-8, 0.000206263, 0.65, 75.0, 0.00374578),
    ("IntWallAvg", 1.47921e-7, 0.000998165, 0.65, 75.0, 0.0181269),
    ("IntWallLeaky", 3.1045e-7, 0.00179007, 0.65, 75.0, 0.032508),
    ("IntWallTight", 1.99933e-8, 0.000206263, 0.65, 75.0, 0.00374578),
    ("RoofAvg", 6.13696e-8, 0.000499083, 0.65, 75.0, 0.00906345),
    ("RoofLeaky", 1.288e-7, 0.000895033, 0.65, 75.0, 0.016254),
    ("RoofTight", 8.29484e-9, 0.000103131, 0.65, 75.0, 0.00187289),
];

/// Adds the standard leakage library to an element table.
pub fn install_standard_elements(model: &mut IndexModel) {
    for (name, laminar, turbulent, exponent, delta_p, flow) in STANDARD_ELEMENTS {
        model.add_element(AirflowElement {
            nr: 0,
            name: name.to_string(),
            laminar,
            turbulent,
            exponent,
            delta_p,
            flow,
        });
    }
}

/// Laminar coefficient of a power-law element with turbulent coefficient
/// `ct` and exponent `x`, from the laminar/turbulent transition at Re = 30.
pub fn laminar_coefficient(ct: f64, x: f64) -> f64 {
    let area = ct / (0.6 * std::f64::consts::SQRT_2);
    let diameter = area.sqrt();
    // Re = ρVD/μ and F = ρVA
    let flow = MU_AIR * RE_TRANSITION * area / diameter;
    // F = Ct·√ρ·ΔP^x
    let dp = (flow / (ct * SQRT_RHO_AIR)).powf(1.0 / x).max(DP_TRANSITION_MIN);
    // F = Cl·(ρ/μ)·ΔP
    MU_AIR * flow / (RHO_AIR * dp)
}

/// A measured envelope leakage: volume flow at a test pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExteriorFlow {
    /// Volume flow in m³/h.
    pub flow: f64,
    /// Flow exponent.
    pub exponent: f64,
    /// Test pressure difference in Pa.
    pub delta_p: f64,
}

impl ExteriorFlow {
    /// Returns `None` unless all three values are positive.
    pub fn new(flow: f64, exponent: f64, delta_p: f64) -> Option<Self> {
        (flow > 0.0 && exponent > 0.0 && delta_p > 0.0).then_some(Self {
            flow,
            exponent,
            delta_p,
        })
    }

    /// Builds a power-law element passing `flow` m³/h at this test pressure.
    pub fn element(&self, name: &str, flow: f64) -> AirflowElement {
        let mass_flow = RHO_AIR * flow / 3600.0;
        let turbulent = mass_flow / (SQRT_RHO_AIR * self.delta_p.powf(self.exponent));
        AirflowElement {
            nr: 0,
            name: name.to_string(),
            laminar: laminar_coefficient(turbulent, self.exponent),
            turbulent,
            exponent: self.exponent,
            delta_p: self.delta_p,
            flow: mass_flow,
        }
    }

    /// Adds the four custom elements and returns their numbers. Partitions
    /// and floors get twice the envelope flow.
    pub fn install(&self, model: &mut IndexModel) -> ElementSet {
        ElementSet {
            exterior: model.add_element(self.element("CustomExterior", self.flow)),
            roof: model.add_element(self.element("CustomRoof", self.flow)),
            interior: model.add_element(self.element("CustomInterior", 2.0 * self.flow)),
            floor: model.add_element(self.element("CustomFloor", 2.0 * self.flow)),
        }
    }
}
