// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for building model objects.
//!
//! The [`BuildingModel`] is the central owner of all model data. Every object
//! (surface, sub-surface, space, thermal zone, story, air loop) lives inside a
//! slot map with stable, generational keys. Objects refer to each other by
//! key; relation accessors only return a key when the referenced object is
//! still present, so a reference can be set, unset, or dangling.
//!
//! ## Adjacency
//!
//! An interior partition is modelled twice, once from each side: two surfaces
//! with the `Surface` boundary condition that name each other as adjacent
//! surface. Their sub-surfaces (doors in the partition) pair up the same way.
//! The model does not enforce symmetry; [`BuildingModel::match_surfaces`]
//! creates a consistent pair, [`BuildingModel::set_adjacent_surface`] sets a
//! single side.

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::keys::*;
use crate::types::{BoundaryCondition, SurfaceType};

/// Data stored for a surface.
#[derive(Debug, Clone)]
pub struct SurfaceData {
    pub name: String,
    pub surface_type: SurfaceType,
    pub boundary_condition: BoundaryCondition,
    pub space: Option<SpaceKey>,
    /// Only meaningful when the boundary condition is `Surface`.
    pub adjacent_surface: Option<SurfaceKey>,
    /// Outline in model coordinates. The winding defines the outward normal.
    pub vertices: Vec<Point3<f64>>,
    pub sub_surfaces: SmallVec<[SubSurfaceKey; 4]>,
}

/// Data stored for a sub-surface (window, door, ...).
#[derive(Debug, Clone)]
pub struct SubSurfaceData {
    pub name: String,
    pub sub_surface_type: String,
    pub surface: SurfaceKey,
    pub adjacent_sub_surface: Option<SubSurfaceKey>,
    pub vertices: Vec<Point3<f64>>,
}

/// Data stored for a space.
#[derive(Debug, Clone)]
pub struct SpaceData {
    pub name: String,
    pub zone: Option<ThermalZoneKey>,
    pub story: Option<StoryKey>,
    /// Air volume in m³, when known.
    pub volume: Option<f64>,
    pub surfaces: Vec<SurfaceKey>,
}

/// Data stored for a thermal zone.
#[derive(Debug, Clone)]
pub struct ThermalZoneData {
    pub name: String,
    /// Explicit zone volume in m³. Overrides the sum of space volumes.
    pub volume: Option<f64>,
}

/// Data stored for a building story.
#[derive(Debug, Clone)]
pub struct StoryData {
    pub name: String,
    pub nominal_z: Option<f64>,
    pub floor_to_floor_height: Option<f64>,
}

/// Data stored for an air loop.
#[derive(Debug, Clone)]
pub struct AirLoopData {
    pub name: String,
    pub zones: Vec<ThermalZoneKey>,
}

/// The arena that owns all building model objects.
///
/// # Example
///
/// ```
/// use airnet_model::{BoundaryCondition, BuildingModel, SurfaceType};
///
/// let mut model = BuildingModel::new();
/// let zone = model.add_zone("Zone 1");
/// let space = model.add_space("Space 1", Some(zone)).unwrap();
/// let wall = model
///     .add_surface(
///         "South Wall",
///         SurfaceType::Wall,
///         BoundaryCondition::Outdoors,
///         Some(space),
///         &[[0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 0.0, 3.0]],
///     )
///     .unwrap();
///
/// assert_eq!(model.surface_space(wall), Some(space));
/// assert_eq!(model.space_zone(space), Some(zone));
/// ```
#[derive(Debug, Default)]
pub struct BuildingModel {
    pub(crate) building_name: Option<String>,

    pub(crate) surfaces: SlotMap<SurfaceKey, SurfaceData>,
    pub(crate) sub_surfaces: SlotMap<SubSurfaceKey, SubSurfaceData>,
    pub(crate) spaces: SlotMap<SpaceKey, SpaceData>,
    pub(crate) zones: SlotMap<ThermalZoneKey, ThermalZoneData>,
    pub(crate) stories: SlotMap<StoryKey, StoryData>,
    pub(crate) air_loops: SlotMap<AirLoopKey, AirLoopData>,

    // Upward index: zone → spaces
    pub(crate) zone_to_spaces: FxHashMap<ThermalZoneKey, SmallVec<[SpaceKey; 4]>>,
}

fn to_points(coords: &[[f64; 3]]) -> Vec<Point3<f64>> {
    coords.iter().map(|c| Point3::new(c[0], c[1], c[2])).collect()
}

impl BuildingModel {
    /// Creates a new, empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the building name, if any.
    pub fn building_name(&self) -> Option<&str> {
        self.building_name.as_deref()
    }

    /// Sets the building name.
    pub fn set_building_name(&mut self, name: impl Into<String>) {
        self.building_name = Some(name.into());
    }

    // --- Thermal zones ---

    /// Adds a thermal zone.
    pub fn add_zone(&mut self, name: impl Into<String>) -> ThermalZoneKey {
        self.zones.insert(ThermalZoneData {
            name: name.into(),
            volume: None,
        })
    }

    /// Sets an explicit zone volume in m³.
    pub fn set_zone_volume(&mut self, zone: ThermalZoneKey, volume: f64) -> Result<()> {
        let data = self
            .zones
            .get_mut(zone)
            .ok_or(Error::ThermalZoneNotFound(zone))?;
        data.volume = Some(volume);
        Ok(())
    }

    /// Returns the thermal zone data for the given key.
    pub fn zone(&self, key: ThermalZoneKey) -> Option<&ThermalZoneData> {
        self.zones.get(key)
    }

    /// Iterates over all thermal zones in arena order.
    pub fn zones(&self) -> impl Iterator<Item = ThermalZoneKey> + '_ {
        self.zones.keys()
    }

    /// Returns the number of thermal zones.
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Returns the spaces assigned to a zone.
    pub fn zone_spaces(&self, zone: ThermalZoneKey) -> &[SpaceKey] {
        self.zone_to_spaces
            .get(&zone)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Removes a thermal zone. Spaces that referenced it keep a dangling key.
    pub fn remove_zone(&mut self, zone: ThermalZoneKey) -> Option<ThermalZoneData> {
        self.zone_to_spaces.remove(&zone);
        self.air_loops
            .values_mut()
            .for_each(|l| l.zones.retain(|&z| z != zone));
        self.zones.remove(zone)
    }

    // --- Stories ---

    /// Adds a building story.
    pub fn add_story(
        &mut self,
        name: impl Into<String>,
        nominal_z: Option<f64>,
        floor_to_floor_height: Option<f64>,
    ) -> StoryKey {
        self.stories.insert(StoryData {
            name: name.into(),
            nominal_z,
            floor_to_floor_height,
        })
    }

    /// Returns the story data for the given key.
    pub fn story(&self, key: StoryKey) -> Option<&StoryData> {
        self.stories.get(key)
    }

    /// Iterates over all stories in arena order.
    pub fn stories(&self) -> impl Iterator<Item = StoryKey> + '_ {
        self.stories.keys()
    }

    // --- Spaces ---

    /// Adds a space, optionally assigned to a thermal zone.
    pub fn add_space(
        &mut self,
        name: impl Into<String>,
        zone: Option<ThermalZoneKey>,
    ) -> Result<SpaceKey> {
        if let Some(z) = zone {
            if !self.zones.contains_key(z) {
                return Err(Error::ThermalZoneNotFound(z));
            }
        }
        let key = self.spaces.insert(SpaceData {
            name: name.into(),
            zone,
            story: None,
            volume: None,
            surfaces: Vec::new(),
        });
        if let Some(z) = zone {
            self.zone_to_spaces.entry(z).or_default().push(key);
        }
        Ok(key)
    }

    /// Reassigns a space to a different zone (or to none).
    pub fn set_space_zone(&mut self, space: SpaceKey, zone: Option<ThermalZoneKey>) -> Result<()> {
        if let Some(z) = zone {
            if !self.zones.contains_key(z) {
                return Err(Error::ThermalZoneNotFound(z));
            }
        }
        let data = self.spaces.get_mut(space).ok_or(Error::SpaceNotFound(space))?;
        if let Some(old) = data.zone.take() {
            if let Some(list) = self.zone_to_spaces.get_mut(&old) {
                list.retain(|s| *s != space);
            }
        }
        data.zone = zone;
        if let Some(z) = zone {
            self.zone_to_spaces.entry(z).or_default().push(space);
        }
        Ok(())
    }

    /// Assigns a space to a building story.
    pub fn set_space_story(&mut self, space: SpaceKey, story: Option<StoryKey>) -> Result<()> {
        if let Some(s) = story {
            if !self.stories.contains_key(s) {
                return Err(Error::StoryNotFound(s));
            }
        }
        let data = self.spaces.get_mut(space).ok_or(Error::SpaceNotFound(space))?;
        data.story = story;
        Ok(())
    }

    /// Sets the air volume of a space in m³.
    pub fn set_space_volume(&mut self, space: SpaceKey, volume: f64) -> Result<()> {
        let data = self.spaces.get_mut(space).ok_or(Error::SpaceNotFound(space))?;
        data.volume = Some(volume);
        Ok(())
    }

    /// Returns the space data for the given key.
    pub fn space(&self, key: SpaceKey) -> Option<&SpaceData> {
        self.spaces.get(key)
    }

    /// Iterates over all spaces in arena order.
    pub fn spaces(&self) -> impl Iterator<Item = SpaceKey> + '_ {
        self.spaces.keys()
    }

    /// Returns the surfaces owned by a space.
    pub fn space_surfaces(&self, space: SpaceKey) -> &[SurfaceKey] {
        self.spaces
            .get(space)
            .map(|s| s.surfaces.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the thermal zone of a space, if it resolves.
    pub fn space_zone(&self, space: SpaceKey) -> Option<ThermalZoneKey> {
        self.spaces
            .get(space)?
            .zone
            .filter(|z| self.zones.contains_key(*z))
    }

    /// Returns the building story of a space, if it resolves.
    pub fn space_story(&self, space: SpaceKey) -> Option<StoryKey> {
        self.spaces
            .get(space)?
            .story
            .filter(|s| self.stories.contains_key(*s))
    }

    /// Removes a space. Surfaces that referenced it keep a dangling key.
    pub fn remove_space(&mut self, space: SpaceKey) -> Option<SpaceData> {
        let data = self.spaces.remove(space)?;
        if let Some(z) = data.zone {
            if let Some(list) = self.zone_to_spaces.get_mut(&z) {
                list.retain(|s| *s != space);
            }
        }
        Some(data)
    }

    // --- Surfaces ---

    /// Adds a surface. The space, when given, must exist.
    pub fn add_surface(
        &mut self,
        name: impl Into<String>,
        surface_type: SurfaceType,
        boundary_condition: BoundaryCondition,
        space: Option<SpaceKey>,
        vertices: &[[f64; 3]],
    ) -> Result<SurfaceKey> {
        let name = name.into();
        if vertices.len() < 3 {
            return Err(Error::DegenerateSurface(name));
        }
        if let Some(s) = space {
            if !self.spaces.contains_key(s) {
                return Err(Error::SpaceNotFound(s));
            }
        }
        let key = self.surfaces.insert(SurfaceData {
            name,
            surface_type,
            boundary_condition,
            space,
            adjacent_surface: None,
            vertices: to_points(vertices),
            sub_surfaces: SmallVec::new(),
        });
        if let Some(s) = space {
            if let Some(data) = self.spaces.get_mut(s) {
                data.surfaces.push(key);
            }
        }
        Ok(key)
    }

    /// Returns the surface data for the given key.
    pub fn surface(&self, key: SurfaceKey) -> Option<&SurfaceData> {
        self.surfaces.get(key)
    }

    /// Iterates over all surfaces in arena order.
    ///
    /// The order is stable for a given model but carries no spatial or
    /// alphabetical meaning.
    pub fn surfaces(&self) -> impl Iterator<Item = SurfaceKey> + '_ {
        self.surfaces.keys()
    }

    /// Returns the number of surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns the boundary condition of a surface.
    pub fn boundary_condition(&self, key: SurfaceKey) -> Option<&BoundaryCondition> {
        self.surfaces.get(key).map(|s| &s.boundary_condition)
    }

    /// Returns the type of a surface.
    pub fn surface_type(&self, key: SurfaceKey) -> Option<SurfaceType> {
        self.surfaces.get(key).map(|s| s.surface_type)
    }

    /// Returns the vertices of a surface.
    pub fn surface_vertices(&self, key: SurfaceKey) -> &[Point3<f64>] {
        self.surfaces
            .get(key)
            .map(|s| s.vertices.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the owning space of a surface, if it resolves.
    pub fn surface_space(&self, surface: SurfaceKey) -> Option<SpaceKey> {
        self.surfaces
            .get(surface)?
            .space
            .filter(|s| self.spaces.contains_key(*s))
    }

    /// Returns the adjacent surface, if it resolves.
    pub fn adjacent_surface(&self, surface: SurfaceKey) -> Option<SurfaceKey> {
        self.surfaces
            .get(surface)?
            .adjacent_surface
            .filter(|s| self.surfaces.contains_key(*s))
    }

    /// Returns the sub-surfaces hosted by a surface, in insertion order.
    pub fn surface_sub_surfaces(&self, surface: SurfaceKey) -> &[SubSurfaceKey] {
        self.surfaces
            .get(surface)
            .map(|s| s.sub_surfaces.as_slice())
            .unwrap_or(&[])
    }

    /// Sets the boundary condition of a surface.
    pub fn set_boundary_condition(
        &mut self,
        surface: SurfaceKey,
        boundary_condition: BoundaryCondition,
    ) -> Result<()> {
        let data = self
            .surfaces
            .get_mut(surface)
            .ok_or(Error::SurfaceNotFound(surface))?;
        data.boundary_condition = boundary_condition;
        Ok(())
    }

    /// Pairs two surfaces as the two sides of one interior partition.
    ///
    /// Both boundary conditions become `Surface` and each side names the
    /// other as adjacent surface.
    pub fn match_surfaces(&mut self, a: SurfaceKey, b: SurfaceKey) -> Result<()> {
        if a == b {
            let name = self
                .surfaces
                .get(a)
                .map(|s| s.name.clone())
                .ok_or(Error::SurfaceNotFound(a))?;
            return Err(Error::SelfMatch(name));
        }
        if !self.surfaces.contains_key(b) {
            return Err(Error::SurfaceNotFound(b));
        }
        for (this, other) in [(a, b), (b, a)] {
            let data = self
                .surfaces
                .get_mut(this)
                .ok_or(Error::SurfaceNotFound(this))?;
            data.boundary_condition = BoundaryCondition::Surface;
            data.adjacent_surface = Some(other);
        }
        Ok(())
    }

    /// Sets (or clears) the adjacent surface of one side only.
    pub fn set_adjacent_surface(
        &mut self,
        surface: SurfaceKey,
        adjacent: Option<SurfaceKey>,
    ) -> Result<()> {
        if let Some(adj) = adjacent {
            if adj == surface {
                let name = self
                    .surfaces
                    .get(surface)
                    .map(|s| s.name.clone())
                    .ok_or(Error::SurfaceNotFound(surface))?;
                return Err(Error::SelfMatch(name));
            }
            if !self.surfaces.contains_key(adj) {
                return Err(Error::SurfaceNotFound(adj));
            }
        }
        let data = self
            .surfaces
            .get_mut(surface)
            .ok_or(Error::SurfaceNotFound(surface))?;
        data.adjacent_surface = adjacent;
        Ok(())
    }

    /// Removes a surface and its sub-surfaces. Surfaces and sub-surfaces that
    /// referenced them keep dangling keys.
    pub fn remove_surface(&mut self, surface: SurfaceKey) -> Option<SurfaceData> {
        let data = self.surfaces.remove(surface)?;
        if let Some(space) = data.space.and_then(|s| self.spaces.get_mut(s)) {
            space.surfaces.retain(|s| *s != surface);
        }
        for &sub in &data.sub_surfaces {
            self.sub_surfaces.remove(sub);
        }
        Some(data)
    }

    // --- Sub-surfaces ---

    /// Adds a sub-surface to a host surface.
    pub fn add_sub_surface(
        &mut self,
        surface: SurfaceKey,
        name: impl Into<String>,
        sub_surface_type: impl Into<String>,
        vertices: &[[f64; 3]],
    ) -> Result<SubSurfaceKey> {
        let name = name.into();
        if vertices.len() < 3 {
            return Err(Error::DegenerateSurface(name));
        }
        if !self.surfaces.contains_key(surface) {
            return Err(Error::SurfaceNotFound(surface));
        }
        let key = self.sub_surfaces.insert(SubSurfaceData {
            name,
            sub_surface_type: sub_surface_type.into(),
            surface,
            adjacent_sub_surface: None,
            vertices: to_points(vertices),
        });
        if let Some(host) = self.surfaces.get_mut(surface) {
            host.sub_surfaces.push(key);
        }
        Ok(key)
    }

    /// Returns the sub-surface data for the given key.
    pub fn sub_surface(&self, key: SubSurfaceKey) -> Option<&SubSurfaceData> {
        self.sub_surfaces.get(key)
    }

    /// Returns the number of sub-surfaces.
    pub fn sub_surface_count(&self) -> usize {
        self.sub_surfaces.len()
    }

    /// Returns the host surface of a sub-surface, if it resolves.
    pub fn sub_surface_surface(&self, sub_surface: SubSurfaceKey) -> Option<SurfaceKey> {
        self.sub_surfaces
            .get(sub_surface)
            .map(|s| s.surface)
            .filter(|s| self.surfaces.contains_key(*s))
    }

    /// Returns the adjacent sub-surface, if it resolves.
    pub fn adjacent_sub_surface(&self, sub_surface: SubSurfaceKey) -> Option<SubSurfaceKey> {
        self.sub_surfaces
            .get(sub_surface)?
            .adjacent_sub_surface
            .filter(|s| self.sub_surfaces.contains_key(*s))
    }

    /// Pairs two sub-surfaces (e.g. both sides of an interior door).
    pub fn match_sub_surfaces(&mut self, a: SubSurfaceKey, b: SubSurfaceKey) -> Result<()> {
        if !self.sub_surfaces.contains_key(b) {
            return Err(Error::SubSurfaceNotFound(b));
        }
        for (this, other) in [(a, b), (b, a)] {
            let data = self
                .sub_surfaces
                .get_mut(this)
                .ok_or(Error::SubSurfaceNotFound(this))?;
            data.adjacent_sub_surface = Some(other);
        }
        Ok(())
    }

    /// Sets (or clears) the adjacent sub-surface of one side only.
    pub fn set_adjacent_sub_surface(
        &mut self,
        sub_surface: SubSurfaceKey,
        adjacent: Option<SubSurfaceKey>,
    ) -> Result<()> {
        if let Some(adj) = adjacent {
            if !self.sub_surfaces.contains_key(adj) {
                return Err(Error::SubSurfaceNotFound(adj));
            }
        }
        let data = self
            .sub_surfaces
            .get_mut(sub_surface)
            .ok_or(Error::SubSurfaceNotFound(sub_surface))?;
        data.adjacent_sub_surface = adjacent;
        Ok(())
    }

    // --- Air loops ---

    /// Adds an air loop serving the given zones.
    pub fn add_air_loop(
        &mut self,
        name: impl Into<String>,
        zones: &[ThermalZoneKey],
    ) -> Result<AirLoopKey> {
        if let Some(&missing) = zones.iter().find(|z| !self.zones.contains_key(**z)) {
            return Err(Error::ThermalZoneNotFound(missing));
        }
        Ok(self.air_loops.insert(AirLoopData {
            name: name.into(),
            zones: zones.to_vec(),
        }))
    }

    /// Returns the air loop data for the given key.
    pub fn air_loop(&self, key: AirLoopKey) -> Option<&AirLoopData> {
        self.air_loops.get(key)
    }

    /// Iterates over all air loops in arena order.
    pub fn air_loops(&self) -> impl Iterator<Item = AirLoopKey> + '_ {
        self.air_loops.keys()
    }

    // --- Names ---

    /// Returns the name of any model object.
    pub fn name(&self, key: impl Into<ObjectKey>) -> Option<&str> {
        match key.into() {
            ObjectKey::Surface(k) => self.surfaces.get(k).map(|d| d.name.as_str()),
            ObjectKey::SubSurface(k) => self.sub_surfaces.get(k).map(|d| d.name.as_str()),
            ObjectKey::Space(k) => self.spaces.get(k).map(|d| d.name.as_str()),
            ObjectKey::ThermalZone(k) => self.zones.get(k).map(|d| d.name.as_str()),
            ObjectKey::Story(k) => self.stories.get(k).map(|d| d.name.as_str()),
            ObjectKey::AirLoop(k) => self.air_loops.get(k).map(|d| d.name.as_str()),
        }
    }

    /// Returns the name of any model object, or a placeholder for objects
    /// that no longer exist. Used when formatting messages.
    pub fn display_name(&self, key: impl Into<ObjectKey>) -> String {
        let key = key.into();
        match self.name(key) {
            Some(name) => name.to_string(),
            None => format!("<missing {}>", key.object_type()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: [[f64; 3]; 4] = [
        [0.0, 0.0, 3.0],
        [0.0, 0.0, 0.0],
        [4.0, 0.0, 0.0],
        [4.0, 0.0, 3.0],
    ];

    #[test]
    fn add_space_registers_in_zone() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        let a = model.add_space("A", Some(zone)).unwrap();
        let b = model.add_space("B", Some(zone)).unwrap();

        assert_eq!(model.zone_spaces(zone), &[a, b]);
        assert_eq!(model.space_zone(a), Some(zone));
    }

    #[test]
    fn reassign_space_zone_updates_index() {
        let mut model = BuildingModel::new();
        let z1 = model.add_zone("Z1");
        let z2 = model.add_zone("Z2");
        let s = model.add_space("S", Some(z1)).unwrap();

        model.set_space_zone(s, Some(z2)).unwrap();
        assert!(model.zone_spaces(z1).is_empty());
        assert_eq!(model.zone_spaces(z2), &[s]);

        model.set_space_zone(s, None).unwrap();
        assert!(model.zone_spaces(z2).is_empty());
        assert_eq!(model.space_zone(s), None);
    }

    #[test]
    fn add_surface_rejects_degenerate() {
        let mut model = BuildingModel::new();
        let result = model.add_surface(
            "Sliver",
            SurfaceType::Wall,
            BoundaryCondition::Outdoors,
            None,
            &QUAD[..2],
        );
        assert!(matches!(result, Err(Error::DegenerateSurface(_))));
    }

    #[test]
    fn add_surface_registers_in_space() {
        let mut model = BuildingModel::new();
        let space = model.add_space("S", None).unwrap();
        let wall = model
            .add_surface("W", SurfaceType::Wall, BoundaryCondition::Outdoors, Some(space), &QUAD)
            .unwrap();

        assert_eq!(model.space_surfaces(space), &[wall]);
        assert_eq!(model.surface_space(wall), Some(space));
        assert_eq!(model.surface_count(), 1);
    }

    #[test]
    fn match_surfaces_is_symmetric() {
        let mut model = BuildingModel::new();
        let a = model
            .add_surface("A", SurfaceType::Wall, BoundaryCondition::Outdoors, None, &QUAD)
            .unwrap();
        let b = model
            .add_surface("B", SurfaceType::Wall, BoundaryCondition::Outdoors, None, &QUAD)
            .unwrap();

        model.match_surfaces(a, b).unwrap();
        assert_eq!(model.adjacent_surface(a), Some(b));
        assert_eq!(model.adjacent_surface(b), Some(a));
        assert_eq!(model.boundary_condition(a), Some(&BoundaryCondition::Surface));
        assert_eq!(model.boundary_condition(b), Some(&BoundaryCondition::Surface));
    }

    #[test]
    fn match_surface_to_itself_fails() {
        let mut model = BuildingModel::new();
        let a = model
            .add_surface("A", SurfaceType::Wall, BoundaryCondition::Surface, None, &QUAD)
            .unwrap();
        assert!(matches!(model.match_surfaces(a, a), Err(Error::SelfMatch(_))));
        assert!(matches!(
            model.set_adjacent_surface(a, Some(a)),
            Err(Error::SelfMatch(_))
        ));
    }

    #[test]
    fn removed_objects_leave_dangling_references() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        let space = model.add_space("S", Some(zone)).unwrap();
        let a = model
            .add_surface("A", SurfaceType::Wall, BoundaryCondition::Surface, Some(space), &QUAD)
            .unwrap();
        let b = model
            .add_surface("B", SurfaceType::Wall, BoundaryCondition::Surface, Some(space), &QUAD)
            .unwrap();
        model.match_surfaces(a, b).unwrap();

        model.remove_surface(b);
        assert_eq!(model.adjacent_surface(a), None);
        assert!(model.surface(a).unwrap().adjacent_surface.is_some());

        model.remove_zone(zone);
        assert_eq!(model.space_zone(space), None);

        model.remove_space(space);
        assert_eq!(model.surface_space(a), None);
        assert!(model.surface(a).unwrap().space.is_some());
    }

    #[test]
    fn sub_surfaces_follow_host() {
        let mut model = BuildingModel::new();
        let wall = model
            .add_surface("W", SurfaceType::Wall, BoundaryCondition::Outdoors, None, &QUAD)
            .unwrap();
        let window = model.add_sub_surface(wall, "Win", "FixedWindow", &QUAD).unwrap();

        assert_eq!(model.surface_sub_surfaces(wall), &[window]);
        assert_eq!(model.sub_surface_surface(window), Some(wall));

        model.remove_surface(wall);
        assert!(model.sub_surface(window).is_none());
        assert_eq!(model.sub_surface_count(), 0);
    }

    #[test]
    fn air_loop_requires_existing_zones() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        model.remove_zone(zone);
        assert!(matches!(
            model.add_air_loop("AHU", &[zone]),
            Err(Error::ThermalZoneNotFound(_))
        ));
    }

    #[test]
    fn display_name_for_missing_object() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        assert_eq!(model.display_name(zone), "Z");
        model.remove_zone(zone);
        assert_eq!(model.display_name(zone), "<missing ThermalZone>");
    }
}
