// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Airnet Model
//!
//! Building model facts for airflow network translation.
//!
//! This crate provides an arena-based building model where objects (thermal
//! zones, spaces, surfaces, sub-surfaces, stories, air loops) are stored in
//! slot maps and refer to each other by generational keys. A reference that
//! was never set and one that points at a removed object both read as `None`
//! through the relation accessors, which is what the network builder checks
//! when it reports unattached surfaces and unzoned spaces.
//!
//! The model is read-only from the point of view of the network builder.

pub mod error;
pub mod geometry;
pub mod keys;
pub mod model;
pub mod serialization;
pub mod types;

pub use error::{Error, Result};
pub use keys::{
    AirLoopKey, ObjectKey, ObjectType, SpaceKey, StoryKey, SubSurfaceKey, SurfaceKey,
    ThermalZoneKey,
};
pub use model::{
    AirLoopData, BuildingModel, SpaceData, StoryData, SubSurfaceData, SurfaceData,
    ThermalZoneData,
};
pub use serialization::ModelSnapshot;
pub use types::{BoundaryCondition, SurfaceType};
