// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The multizone network tables produced by a translation.
//!
//! Every table numbers its rows from 1 in insertion order (`nr`), and rows
//! refer to each other by those numbers. A path end of `None` is the
//! ambient (outdoor) node.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A building level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Level {
    pub nr: usize,
    pub name: String,
    /// Reference (floor) elevation in m.
    pub refht: f64,
    /// Height to the next level in m.
    pub delht: f64,
}

/// A well-mixed airflow zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub nr: usize,
    pub name: String,
    /// Name of the thermal zone this node stands for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Level number.
    pub level: usize,
    /// Volume in m³.
    pub volume: f64,
    /// Initial temperature in K.
    pub t0: f64,
    pub variable_pressure: bool,
    pub variable_contaminants: bool,
    /// Air handling system supply or return node.
    pub system: bool,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            nr: 0,
            name: String::new(),
            source: None,
            level: 1,
            volume: 0.0,
            t0: DEFAULT_T0,
            variable_pressure: false,
            variable_contaminants: false,
            system: false,
        }
    }
}

/// Initial zone temperature (20 °C).
pub const DEFAULT_T0: f64 = 293.15;

/// What an airflow path represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathKind {
    /// Leakage through an envelope or partition surface.
    #[default]
    Surface,
    /// Supply or return duct between a zone and an air handling system.
    System,
    Recirculation,
    OutsideAir,
    Exhaust,
}

/// A directed airflow path between two zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirflowPath {
    pub nr: usize,
    pub kind: PathKind,
    /// Zone the positive flow leaves (`None` = ambient).
    pub from_zone: Option<usize>,
    /// Zone the positive flow enters (`None` = ambient).
    pub to_zone: Option<usize>,
    /// Level number.
    pub level: usize,
    /// Airflow element number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<usize>,
    /// Height relative to the level, in m.
    pub rel_ht: f64,
    /// Multiplier; the leakage area in m² for surface paths.
    pub mult: f64,
    /// Wall azimuth in degrees.
    pub azimuth: f64,
    pub wind_pressure: bool,
    /// Wind pressure modifier.
    pub wp_mod: f64,
    /// Wind pressure profile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_profile: Option<u32>,
    /// Air handling system number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ahs: Option<usize>,
    /// Air handling system flow in kg/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_flow: Option<f64>,
}

impl Default for AirflowPath {
    fn default() -> Self {
        Self {
            nr: 0,
            kind: PathKind::Surface,
            from_zone: None,
            to_zone: None,
            level: 1,
            element: None,
            rel_ht: 0.0,
            mult: 1.0,
            azimuth: 0.0,
            wind_pressure: false,
            wp_mod: 0.0,
            wind_profile: None,
            ahs: None,
            supply_flow: None,
        }
    }
}

/// A one-point power-law leakage element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirflowElement {
    pub nr: usize,
    pub name: String,
    /// Laminar flow coefficient.
    pub laminar: f64,
    /// Turbulent flow coefficient.
    pub turbulent: f64,
    /// Flow exponent.
    pub exponent: f64,
    /// Test pressure difference in Pa.
    pub delta_p: f64,
    /// Mass flow at the test pressure in kg/s.
    pub flow: f64,
}

/// An air handling system and its two system zones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirHandlingSystem {
    pub nr: usize,
    pub name: String,
    pub return_zone: usize,
    pub supply_zone: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recirculation_path: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outside_air_path: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaust_path: Option<usize>,
}

/// A complete multizone network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexModel {
    pub description: String,
    /// Total building height used for wind pressure, in m.
    pub wind_h: f64,
    pub levels: Vec<Level>,
    pub zones: Vec<Zone>,
    pub elements: Vec<AirflowElement>,
    pub paths: Vec<AirflowPath>,
    pub systems: Vec<AirHandlingSystem>,
}

/// 1-based lookup into a table.
fn row<T>(table: &[T], nr: usize) -> Option<&T> {
    nr.checked_sub(1).and_then(|i| table.get(i))
}

fn row_mut<T>(table: &mut [T], nr: usize) -> Option<&mut T> {
    nr.checked_sub(1).and_then(move |i| table.get_mut(i))
}

impl IndexModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a level, assigning its number. Returns the number.
    pub fn add_level(&mut self, mut level: Level) -> usize {
        level.nr = self.levels.len() + 1;
        self.levels.push(level);
        self.levels.len()
    }

    pub fn add_zone(&mut self, mut zone: Zone) -> usize {
        zone.nr = self.zones.len() + 1;
        self.zones.push(zone);
        self.zones.len()
    }

    pub fn add_element(&mut self, mut element: AirflowElement) -> usize {
        element.nr = self.elements.len() + 1;
        self.elements.push(element);
        self.elements.len()
    }

    pub fn add_path(&mut self, mut path: AirflowPath) -> usize {
        path.nr = self.paths.len() + 1;
        self.paths.push(path);
        self.paths.len()
    }

    pub fn add_system(&mut self, mut system: AirHandlingSystem) -> usize {
        system.nr = self.systems.len() + 1;
        self.systems.push(system);
        self.systems.len()
    }

    pub fn level(&self, nr: usize) -> Option<&Level> {
        row(&self.levels, nr)
    }

    pub fn zone(&self, nr: usize) -> Option<&Zone> {
        row(&self.zones, nr)
    }

    pub fn element(&self, nr: usize) -> Option<&AirflowElement> {
        row(&self.elements, nr)
    }

    pub fn path(&self, nr: usize) -> Option<&AirflowPath> {
        row(&self.paths, nr)
    }

    pub fn path_mut(&mut self, nr: usize) -> Option<&mut AirflowPath> {
        row_mut(&mut self.paths, nr)
    }

    /// Number of the first element with the given name.
    pub fn airflow_element_nr_by_name(&self, name: &str) -> Option<usize> {
        self.elements.iter().find(|e| e.name == name).map(|e| e.nr)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_numbered_from_one() {
        let mut model = IndexModel::new();
        let a = model.add_zone(Zone {
            name: "Zone_1".into(),
            ..Zone::default()
        });
        let b = model.add_zone(Zone {
            name: "Zone_2".into(),
            ..Zone::default()
        });
        assert_eq!((a, b), (1, 2));
        assert_eq!(model.zone(2).map(|z| z.name.as_str()), Some("Zone_2"));
        assert_eq!(model.zone(2).map(|z| z.nr), Some(2));
        assert!(model.zone(0).is_none());
        assert!(model.zone(3).is_none());
    }

    #[test]
    fn element_lookup_by_name() {
        let mut model = IndexModel::new();
        for name in ["ExtWallAvg", "IntWallAvg"] {
            model.add_element(AirflowElement {
                nr: 0,
                name: name.into(),
                laminar: 0.0,
                turbulent: 0.0,
                exponent: 0.65,
                delta_p: 75.0,
                flow: 0.0,
            });
        }
        assert_eq!(model.airflow_element_nr_by_name("IntWallAvg"), Some(2));
        assert_eq!(model.airflow_element_nr_by_name("Missing"), None);
    }

    #[test]
    fn json_round_trip() {
        let mut model = IndexModel::new();
        model.description = "test".into();
        model.add_level(Level {
            name: "<1>".into(),
            refht: 0.0,
            delht: 3.0,
            ..Level::default()
        });
        model.add_path(AirflowPath {
            from_zone: Some(1),
            ..AirflowPath::default()
        });

        let json = model.to_json().unwrap();
        assert!(json.contains("\"to_zone\": null"));
        assert_eq!(IndexModel::from_json(&json).unwrap(), model);
    }
}
