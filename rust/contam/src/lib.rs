// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Airnet CONTAM
//!
//! Translates building models into CONTAM-style multizone airflow networks.
//!
//! [`ContamTranslator`] turns stories into levels and thermal zones into
//! well-mixed zones, then plugs itself into the surface network builder as
//! its emitter: each exterior surface becomes a leakage path to ambient with
//! wind pressure, each interzone partition becomes a path between two zones.
//! Leakage comes either from a standard airtightness grade or from a measured
//! envelope flow. Air loops can add air handling systems with supply, return,
//! recirculation, outside air and exhaust paths.
//!
//! The resulting [`IndexModel`] is plain serde data; writing the PRJ text
//! format is not part of this crate.

pub mod elements;
pub mod error;
pub mod index_model;
pub mod options;
pub mod translator;
pub mod wind;

pub use elements::{AirtightnessLevel, ElementSet, ExteriorFlow};
pub use error::{Error, Result};
pub use index_model::{
    AirHandlingSystem, AirflowElement, AirflowPath, IndexModel, Level, PathKind, Zone,
};
pub use options::{Leakage, TranslatorOptions};
pub use translator::ContamTranslator;
pub use wind::{pressure_modifier, Terrain};
