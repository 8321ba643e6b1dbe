// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defects found while building a surface network.
//!
//! None of these stop a build. Each one excludes the affected surface or
//! sub-surface from emission and is recorded in the build's diagnostics at
//! the level returned by [`Defect::level`].

use airnet_model::{SpaceKey, SubSurfaceKey, SurfaceKey};

use crate::diagnostics::LogLevel;

/// A model inconsistency that prevents a surface or sub-surface from being
/// linked into the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    /// The surface is not part of the model.
    #[error("Surface {surface:?} is not part of the model")]
    UnknownSurface { surface: SurfaceKey },

    /// The surface has no owning space.
    #[error("Unattached surface '{name}'")]
    UnattachedSurface { surface: SurfaceKey, name: String },

    /// The surface's space has no thermal zone.
    #[error("Unattached space '{name}'")]
    UnzonedSpace { space: SpaceKey, name: String },

    /// The boundary condition claims a pairing but no adjacent surface resolves.
    #[error("Unable to find adjacent surface for surface '{name}'")]
    NoAdjacentSurface { surface: SurfaceKey, name: String },

    /// The adjacent surface has no owning space.
    #[error("Unattached adjacent surface '{adjacent_name}' of surface '{name}'")]
    UnattachedAdjacentSurface {
        surface: SurfaceKey,
        name: String,
        adjacent_surface: SurfaceKey,
        adjacent_name: String,
    },

    /// The adjacent surface's space has no thermal zone.
    #[error("Unattached adjacent space '{adjacent_space_name}' of surface '{name}'")]
    UnzonedAdjacentSpace {
        surface: SurfaceKey,
        name: String,
        adjacent_space: SpaceKey,
        adjacent_space_name: String,
    },

    /// A sub-surface of an interior pair has no adjacent sub-surface.
    #[error("Unable to find adjacent sub-surface for sub-surface '{name}'")]
    NoAdjacentSubSurface { sub_surface: SubSurfaceKey, name: String },

    /// A sub-surface's adjacent sub-surface is hosted by the wrong surface.
    #[error(
        "Adjacent sub-surface '{adjacent_name}' of sub-surface '{name}' is not hosted by surface '{expected_surface_name}'"
    )]
    WrongAdjacentSurface {
        sub_surface: SubSurfaceKey,
        name: String,
        adjacent_sub_surface: SubSurfaceKey,
        adjacent_name: String,
        expected_surface: SurfaceKey,
        expected_surface_name: String,
    },
}

/// Fieldless discriminant of [`Defect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    UnknownSurface,
    UnattachedSurface,
    UnzonedSpace,
    NoAdjacentSurface,
    UnattachedAdjacentSurface,
    UnzonedAdjacentSpace,
    NoAdjacentSubSurface,
    WrongAdjacentSurface,
}

impl Defect {
    /// Returns the kind of this defect.
    pub fn kind(&self) -> DefectKind {
        match self {
            Defect::UnknownSurface { .. } => DefectKind::UnknownSurface,
            Defect::UnattachedSurface { .. } => DefectKind::UnattachedSurface,
            Defect::UnzonedSpace { .. } => DefectKind::UnzonedSpace,
            Defect::NoAdjacentSurface { .. } => DefectKind::NoAdjacentSurface,
            Defect::UnattachedAdjacentSurface { .. } => DefectKind::UnattachedAdjacentSurface,
            Defect::UnzonedAdjacentSpace { .. } => DefectKind::UnzonedAdjacentSpace,
            Defect::NoAdjacentSubSurface { .. } => DefectKind::NoAdjacentSubSurface,
            Defect::WrongAdjacentSurface { .. } => DefectKind::WrongAdjacentSurface,
        }
    }

    /// Returns the level at which this defect is reported.
    pub fn level(&self) -> LogLevel {
        match self.kind() {
            DefectKind::UnknownSurface
            | DefectKind::NoAdjacentSurface
            | DefectKind::UnattachedAdjacentSurface => LogLevel::Error,
            DefectKind::UnattachedSurface
            | DefectKind::UnzonedSpace
            | DefectKind::UnzonedAdjacentSpace
            | DefectKind::NoAdjacentSubSurface
            | DefectKind::WrongAdjacentSurface => LogLevel::Warn,
        }
    }
}
