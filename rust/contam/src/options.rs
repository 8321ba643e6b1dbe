// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation options.

use serde::{Deserialize, Serialize};

use crate::elements::ExteriorFlow;
use crate::wind::Terrain;

/// How envelope and partition leakage is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leakage {
    /// Standard elements of an airtightness grade. Unknown grades fall back
    /// to `Average` with a warning.
    Airtightness(String),
    /// Custom power-law elements from a measured envelope flow.
    ExteriorFlow(ExteriorFlow),
}

impl Default for Leakage {
    fn default() -> Self {
        Leakage::Airtightness("Average".to_string())
    }
}

/// Options controlling [`crate::ContamTranslator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorOptions {
    pub leakage: Leakage,
    /// Create air handling systems from air loops.
    pub translate_hvac: bool,
    /// Return flow as a fraction of supply flow. Always non-negative.
    pub return_supply_ratio: f64,
    pub terrain: Terrain,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            leakage: Leakage::default(),
            translate_hvac: true,
            return_supply_ratio: 1.0,
            terrain: Terrain::default(),
        }
    }
}

impl TranslatorOptions {
    /// Selects a standard airtightness grade, replacing any custom flow.
    pub fn set_airtightness_level(&mut self, level: impl Into<String>) {
        self.leakage = Leakage::Airtightness(level.into());
    }

    /// The selected airtightness grade, if one is selected.
    pub fn airtightness_level(&self) -> Option<&str> {
        match &self.leakage {
            Leakage::Airtightness(level) => Some(level),
            Leakage::ExteriorFlow(_) => None,
        }
    }

    /// Selects a custom envelope flow, replacing any airtightness grade.
    /// Returns `false` and changes nothing unless all values are positive.
    pub fn set_exterior_flow_rate(&mut self, flow: f64, exponent: f64, delta_p: f64) -> bool {
        match ExteriorFlow::new(flow, exponent, delta_p) {
            Some(f) => {
                self.leakage = Leakage::ExteriorFlow(f);
                true
            }
            None => false,
        }
    }

    pub fn exterior_flow(&self) -> Option<&ExteriorFlow> {
        match &self.leakage {
            Leakage::ExteriorFlow(f) => Some(f),
            Leakage::Airtightness(_) => None,
        }
    }

    pub fn set_return_supply_ratio(&mut self, ratio: f64) {
        self.return_supply_ratio = ratio.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TranslatorOptions::default();
        assert_eq!(options.airtightness_level(), Some("Average"));
        assert!(options.translate_hvac);
        assert_eq!(options.return_supply_ratio, 1.0);
    }

    #[test]
    fn leakage_modes_exclude_each_other() {
        let mut options = TranslatorOptions::default();
        assert!(options.set_exterior_flow_rate(120.0, 0.65, 50.0));
        assert!(options.airtightness_level().is_none());

        assert!(!options.set_exterior_flow_rate(-1.0, 0.65, 50.0));
        assert!(options.exterior_flow().is_some());

        options.set_airtightness_level("Tight");
        assert!(options.exterior_flow().is_none());
        assert_eq!(options.airtightness_level(), Some("Tight"));
    }

    #[test]
    fn ratio_is_stored_as_magnitude() {
        let mut options = TranslatorOptions::default();
        options.set_return_supply_ratio(-0.9);
        assert_eq!(options.return_supply_ratio, 0.9);
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: TranslatorOptions =
            serde_json::from_str(r#"{"translate_hvac": false, "terrain": "City"}"#).unwrap();
        assert!(!options.translate_hvac);
        assert_eq!(options.terrain, Terrain::City);
        assert_eq!(options.airtightness_level(), Some("Average"));

        let custom: TranslatorOptions = serde_json::from_str(
            r#"{"leakage": {"exterior_flow": {"flow": 100.0, "exponent": 0.65, "delta_p": 75.0}}}"#,
        )
        .unwrap();
        assert_eq!(custom.exterior_flow().map(|f| f.flow), Some(100.0));
    }
}
