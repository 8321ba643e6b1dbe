// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The emitter interface driven by the network builder.
//!
//! The builder only ever hands out links it has fully validated: every key
//! in a link record resolves in the model it was built from. What an emitter
//! does with a link (create an airflow path, log a line, nothing) is its own
//! business; the returned flag only tells the builder whether the link was
//! registered.

use airnet_model::{BuildingModel, SpaceKey, SubSurfaceKey, SurfaceKey, ThermalZoneKey};

/// An exterior surface and the zone/space it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExteriorLink {
    pub zone: ThermalZoneKey,
    pub space: SpaceKey,
    pub surface: SurfaceKey,
}

/// A matched interior surface pair, seen from its primary side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteriorLink {
    pub zone: ThermalZoneKey,
    pub space: SpaceKey,
    pub surface: SurfaceKey,
    pub adjacent_zone: ThermalZoneKey,
    pub adjacent_space: SpaceKey,
    pub adjacent_surface: SurfaceKey,
}

impl InteriorLink {
    /// `true` when both sides belong to the same thermal zone.
    pub fn is_same_zone(&self) -> bool {
        self.zone == self.adjacent_zone
    }

    /// Unordered identity of the pair: the two surface keys, smaller first.
    pub fn pair(&self) -> (SurfaceKey, SurfaceKey) {
        if self.surface <= self.adjacent_surface {
            (self.surface, self.adjacent_surface)
        } else {
            (self.adjacent_surface, self.surface)
        }
    }
}

/// A sub-surface of an exterior surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExteriorSubLink {
    pub link: ExteriorLink,
    pub sub_surface: SubSurfaceKey,
}

/// A sub-surface of an interior pair together with its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteriorSubLink {
    pub link: InteriorLink,
    pub sub_surface: SubSurfaceKey,
    pub adjacent_sub_surface: SubSurfaceKey,
}

/// One emitter call, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkRecord {
    Exterior(ExteriorLink),
    Interior(InteriorLink),
    ExteriorSub(ExteriorSubLink),
    InteriorSub(InteriorSubLink),
}

impl NetworkRecord {
    /// Human-readable one-line description using object names.
    pub fn describe(&self, model: &BuildingModel) -> String {
        let n = |k: airnet_model::ObjectKey| model.display_name(k);
        match self {
            NetworkRecord::Exterior(l) => format!(
                "Exterior surface '{}' of space '{}' in zone '{}'",
                n(l.surface.into()),
                n(l.space.into()),
                n(l.zone.into()),
            ),
            NetworkRecord::Interior(l) => format!(
                "Interior surface '{}' of space '{}' in zone '{}' to surface '{}' of space '{}' in zone '{}'",
                n(l.surface.into()),
                n(l.space.into()),
                n(l.zone.into()),
                n(l.adjacent_surface.into()),
                n(l.adjacent_space.into()),
                n(l.adjacent_zone.into()),
            ),
            NetworkRecord::ExteriorSub(l) => format!(
                "Exterior sub-surface '{}' of surface '{}' in zone '{}'",
                n(l.sub_surface.into()),
                n(l.link.surface.into()),
                n(l.link.zone.into()),
            ),
            NetworkRecord::InteriorSub(l) => format!(
                "Interior sub-surface '{}' of surface '{}' in zone '{}' to sub-surface '{}' of surface '{}' in zone '{}'",
                n(l.sub_surface.into()),
                n(l.link.surface.into()),
                n(l.link.zone.into()),
                n(l.adjacent_sub_surface.into()),
                n(l.link.adjacent_surface.into()),
                n(l.link.adjacent_zone.into()),
            ),
        }
    }
}

/// Receives validated links from [`crate::SurfaceNetworkBuilder`].
///
/// Each method returns `true` when the link was registered. A `false` is
/// treated as a soft failure: noted, counted, and otherwise ignored.
pub trait NetworkEmitter {
    fn link_exterior_surface(&mut self, model: &BuildingModel, link: &ExteriorLink) -> bool;

    fn link_interior_surface(&mut self, model: &BuildingModel, link: &InteriorLink) -> bool;

    fn link_exterior_sub_surface(&mut self, model: &BuildingModel, link: &ExteriorSubLink) -> bool;

    fn link_interior_sub_surface(&mut self, model: &BuildingModel, link: &InteriorSubLink) -> bool;

    /// Dispatches a tagged record to the matching method.
    fn emit(&mut self, model: &BuildingModel, record: &NetworkRecord) -> bool {
        match record {
            NetworkRecord::Exterior(l) => self.link_exterior_surface(model, l),
            NetworkRecord::Interior(l) => self.link_interior_surface(model, l),
            NetworkRecord::ExteriorSub(l) => self.link_exterior_sub_surface(model, l),
            NetworkRecord::InteriorSub(l) => self.link_interior_sub_surface(model, l),
        }
    }
}

impl<E: NetworkEmitter + ?Sized> NetworkEmitter for &mut E {
    fn link_exterior_surface(&mut self, model: &BuildingModel, link: &ExteriorLink) -> bool {
        (**self).link_exterior_surface(model, link)
    }

    fn link_interior_surface(&mut self, model: &BuildingModel, link: &InteriorLink) -> bool {
        (**self).link_interior_surface(model, link)
    }

    fn link_exterior_sub_surface(&mut self, model: &BuildingModel, link: &ExteriorSubLink) -> bool {
        (**self).link_exterior_sub_surface(model, link)
    }

    fn link_interior_sub_surface(&mut self, model: &BuildingModel, link: &InteriorSubLink) -> bool {
        (**self).link_interior_sub_surface(model, link)
    }
}
