// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-surface classification.
//!
//! Decides what the builder should do with one surface given the surfaces
//! already consumed. Classification is pure: it reads the model and the
//! visited set and returns a [`Disposition`]; recording the consumed side is
//! the caller's job.

use airnet_model::{BoundaryCondition, BuildingModel, SpaceKey, SurfaceKey, ThermalZoneKey};

use crate::emitter::{ExteriorLink, InteriorLink};
use crate::error::Defect;
use crate::visited::VisitedSet;

/// What to do with a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Outdoors surface with a resolvable space and zone.
    Exterior(ExteriorLink),
    /// Paired surface, not yet consumed, with every side resolvable.
    InteriorCandidate(InteriorLink),
    /// Paired surface already claimed as another surface's adjacent side.
    AlreadyConsumed,
    /// Boundary condition that plays no part in the airflow network.
    Other,
    /// The surface cannot be linked.
    Invalid(Defect),
}

impl Disposition {
    /// Returns the defect of an invalid disposition.
    pub fn defect(&self) -> Option<&Defect> {
        match self {
            Disposition::Invalid(d) => Some(d),
            _ => None,
        }
    }
}

/// Resolves the space and zone owning a surface.
fn owning_zone(
    model: &BuildingModel,
    surface: SurfaceKey,
) -> Result<(SpaceKey, ThermalZoneKey), Defect> {
    let space = model
        .surface_space(surface)
        .ok_or_else(|| Defect::UnattachedSurface {
            surface,
            name: model.display_name(surface),
        })?;
    let zone = model.space_zone(space).ok_or_else(|| Defect::UnzonedSpace {
        space,
        name: model.display_name(space),
    })?;
    Ok((space, zone))
}

fn classify_interior(model: &BuildingModel, surface: SurfaceKey) -> Result<InteriorLink, Defect> {
    let (space, zone) = owning_zone(model, surface)?;

    let adjacent_surface =
        model
            .adjacent_surface(surface)
            .ok_or_else(|| Defect::NoAdjacentSurface {
                surface,
                name: model.display_name(surface),
            })?;
    let adjacent_space =
        model
            .surface_space(adjacent_surface)
            .ok_or_else(|| Defect::UnattachedAdjacentSurface {
                surface,
                name: model.display_name(surface),
                adjacent_surface,
                adjacent_name: model.display_name(adjacent_surface),
            })?;
    let adjacent_zone =
        model
            .space_zone(adjacent_space)
            .ok_or_else(|| Defect::UnzonedAdjacentSpace {
                surface,
                name: model.display_name(surface),
                adjacent_space,
                adjacent_space_name: model.display_name(adjacent_space),
            })?;

    Ok(InteriorLink {
        zone,
        space,
        surface,
        adjacent_zone,
        adjacent_space,
        adjacent_surface,
    })
}

/// Classifies one surface.
///
/// Never panics and never fails: problems come back as
/// [`Disposition::Invalid`]. A consumed paired surface is skipped before any
/// of its relations are checked.
pub fn classify(model: &BuildingModel, surface: SurfaceKey, visited: &VisitedSet) -> Disposition {
    let Some(boundary) = model.boundary_condition(surface) else {
        return Disposition::Invalid(Defect::UnknownSurface { surface });
    };

    match boundary {
        BoundaryCondition::Outdoors => match owning_zone(model, surface) {
            Ok((space, zone)) => Disposition::Exterior(ExteriorLink {
                zone,
                space,
                surface,
            }),
            Err(defect) => Disposition::Invalid(defect),
        },
        BoundaryCondition::Surface => {
            if visited.is_consumed(surface) {
                return Disposition::AlreadyConsumed;
            }
            match classify_interior(model, surface) {
                Ok(link) => Disposition::InteriorCandidate(link),
                Err(defect) => Disposition::Invalid(defect),
            }
        }
        BoundaryCondition::Ground | BoundaryCondition::Other(_) => Disposition::Other,
    }
}
