// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model construction.

use crate::keys::{
    AirLoopKey, SpaceKey, StoryKey, SubSurfaceKey, SurfaceKey, ThermalZoneKey,
};

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Surface key not found in the arena.
    #[error("surface not found: {0:?}")]
    SurfaceNotFound(SurfaceKey),

    /// Sub-surface key not found in the arena.
    #[error("sub-surface not found: {0:?}")]
    SubSurfaceNotFound(SubSurfaceKey),

    /// Space key not found in the arena.
    #[error("space not found: {0:?}")]
    SpaceNotFound(SpaceKey),

    /// Thermal zone key not found in the arena.
    #[error("thermal zone not found: {0:?}")]
    ThermalZoneNotFound(ThermalZoneKey),

    /// Story key not found in the arena.
    #[error("building story not found: {0:?}")]
    StoryNotFound(StoryKey),

    /// Air loop key not found in the arena.
    #[error("air loop not found: {0:?}")]
    AirLoopNotFound(AirLoopKey),

    /// A planar surface needs at least three vertices.
    #[error("surface '{0}' has fewer than 3 vertices")]
    DegenerateSurface(String),

    /// A surface cannot be its own adjacent surface.
    #[error("surface '{0}' cannot be matched to itself")]
    SelfMatch(String),

    /// Unknown surface type string.
    #[error("unknown surface type '{0}'")]
    UnknownSurfaceType(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
