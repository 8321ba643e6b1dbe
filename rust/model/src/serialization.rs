// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for building models.
//!
//! Objects reference each other by sequential integer ids (their position in
//! the corresponding list), boundary conditions and surface types are stored
//! as their usual strings. Optional references are simply omitted.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::keys::*;
use crate::model::BuildingModel;
use crate::types::{BoundaryCondition, SurfaceType};

/// Serializable representation of a full building model.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(default)]
    pub stories: Vec<StorySnapshot>,
    #[serde(default)]
    pub zones: Vec<ZoneSnapshot>,
    #[serde(default)]
    pub spaces: Vec<SpaceSnapshot>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceSnapshot>,
    #[serde(default)]
    pub sub_surfaces: Vec<SubSurfaceSnapshot>,
    #[serde(default)]
    pub air_loops: Vec<AirLoopSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorySnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_to_floor_height: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpaceSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub name: String,
    pub surface_type: String,
    pub boundary_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent_surface: Option<usize>,
    pub vertices: Vec<[f64; 3]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubSurfaceSnapshot {
    pub name: String,
    #[serde(default = "default_sub_surface_type")]
    pub sub_surface_type: String,
    pub surface: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent_sub_surface: Option<usize>,
    pub vertices: Vec<[f64; 3]>,
}

fn default_sub_surface_type() -> String {
    "FixedWindow".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AirLoopSnapshot {
    pub name: String,
    #[serde(default)]
    pub zones: Vec<usize>,
}

fn resolve<K: Copy>(keys: &[K], id: usize, what: &str, owner: &str) -> Result<K> {
    keys.get(id).copied().ok_or_else(|| {
        Error::Serialization(format!("{owner} references unknown {what} id {id}"))
    })
}

impl BuildingModel {
    /// Serializes the model to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let snapshot = self.to_snapshot();
        serde_json::to_string_pretty(&snapshot).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Creates a serializable snapshot of the model.
    ///
    /// SlotMap keys are mapped to sequential ids. References that no longer
    /// resolve are dropped.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        let story_ids: FxHashMap<StoryKey, usize> =
            self.stories.keys().enumerate().map(|(i, k)| (k, i)).collect();
        let zone_ids: FxHashMap<ThermalZoneKey, usize> =
            self.zones.keys().enumerate().map(|(i, k)| (k, i)).collect();
        let space_ids: FxHashMap<SpaceKey, usize> =
            self.spaces.keys().enumerate().map(|(i, k)| (k, i)).collect();
        let surface_ids: FxHashMap<SurfaceKey, usize> =
            self.surfaces.keys().enumerate().map(|(i, k)| (k, i)).collect();
        let sub_surface_ids: FxHashMap<SubSurfaceKey, usize> = self
            .sub_surfaces
            .keys()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();

        let points = |v: &[nalgebra::Point3<f64>]| -> Vec<[f64; 3]> {
            v.iter().map(|p| [p.x, p.y, p.z]).collect()
        };

        ModelSnapshot {
            building_name: self.building_name.clone(),
            stories: self
                .stories
                .values()
                .map(|s| StorySnapshot {
                    name: s.name.clone(),
                    nominal_z: s.nominal_z,
                    floor_to_floor_height: s.floor_to_floor_height,
                })
                .collect(),
            zones: self
                .zones
                .values()
                .map(|z| ZoneSnapshot {
                    name: z.name.clone(),
                    volume: z.volume,
                })
                .collect(),
            spaces: self
                .spaces
                .values()
                .map(|s| SpaceSnapshot {
                    name: s.name.clone(),
                    zone: s.zone.and_then(|z| zone_ids.get(&z).copied()),
                    story: s.story.and_then(|st| story_ids.get(&st).copied()),
                    volume: s.volume,
                })
                .collect(),
            surfaces: self
                .surfaces
                .values()
                .map(|s| SurfaceSnapshot {
                    name: s.name.clone(),
                    surface_type: s.surface_type.to_string(),
                    boundary_condition: s.boundary_condition.to_string(),
                    space: s.space.and_then(|sp| space_ids.get(&sp).copied()),
                    adjacent_surface: s.adjacent_surface.and_then(|a| surface_ids.get(&a).copied()),
                    vertices: points(&s.vertices),
                })
                .collect(),
            sub_surfaces: self
                .sub_surfaces
                .values()
                .filter_map(|s| {
                    Some(SubSurfaceSnapshot {
                        name: s.name.clone(),
                        sub_surface_type: s.sub_surface_type.clone(),
                        surface: surface_ids.get(&s.surface).copied()?,
                        adjacent_sub_surface: s
                            .adjacent_sub_surface
                            .and_then(|a| sub_surface_ids.get(&a).copied()),
                        vertices: points(&s.vertices),
                    })
                })
                .collect(),
            air_loops: self
                .air_loops
                .values()
                .map(|l| AirLoopSnapshot {
                    name: l.name.clone(),
                    zones: l.zones.iter().filter_map(|z| zone_ids.get(z).copied()).collect(),
                })
                .collect(),
        }
    }

    /// Deserializes a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ModelSnapshot =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::from_snapshot(&snapshot)
    }

    /// Reconstructs a model from a snapshot.
    pub fn from_snapshot(snap: &ModelSnapshot) -> Result<Self> {
        let mut model = BuildingModel::new();
        model.building_name = snap.building_name.clone();

        let stories: Vec<StoryKey> = snap
            .stories
            .iter()
            .map(|s| model.add_story(s.name.clone(), s.nominal_z, s.floor_to_floor_height))
            .collect();

        let mut zones = Vec::with_capacity(snap.zones.len());
        for zs in &snap.zones {
            let zk = model.add_zone(zs.name.clone());
            if let Some(v) = zs.volume {
                model.set_zone_volume(zk, v)?;
            }
            zones.push(zk);
        }

        let mut spaces = Vec::with_capacity(snap.spaces.len());
        for ss in &snap.spaces {
            let owner = format!("space '{}'", ss.name);
            let zone = ss
                .zone
                .map(|id| resolve(&zones, id, "zone", &owner))
                .transpose()?;
            let sk = model.add_space(ss.name.clone(), zone)?;
            if let Some(id) = ss.story {
                model.set_space_story(sk, Some(resolve(&stories, id, "story", &owner)?))?;
            }
            if let Some(v) = ss.volume {
                model.set_space_volume(sk, v)?;
            }
            spaces.push(sk);
        }

        let mut surfaces = Vec::with_capacity(snap.surfaces.len());
        for fs in &snap.surfaces {
            let owner = format!("surface '{}'", fs.name);
            let surface_type: SurfaceType = fs.surface_type.parse()?;
            let space = fs
                .space
                .map(|id| resolve(&spaces, id, "space", &owner))
                .transpose()?;
            let fk = model.add_surface(
                fs.name.clone(),
                surface_type,
                BoundaryCondition::parse(&fs.boundary_condition),
                space,
                &fs.vertices,
            )?;
            surfaces.push(fk);
        }
        // Adjacency is one-sided in the snapshot, wire it after all surfaces exist.
        for (fs, &fk) in snap.surfaces.iter().zip(&surfaces) {
            if let Some(id) = fs.adjacent_surface {
                let owner = format!("surface '{}'", fs.name);
                let adjacent = resolve(&surfaces, id, "surface", &owner)?;
                model.set_adjacent_surface(fk, Some(adjacent))?;
            }
        }

        let mut sub_surfaces = Vec::with_capacity(snap.sub_surfaces.len());
        for ss in &snap.sub_surfaces {
            let owner = format!("sub-surface '{}'", ss.name);
            let host = resolve(&surfaces, ss.surface, "surface", &owner)?;
            let sk = model.add_sub_surface(
                host,
                ss.name.clone(),
                ss.sub_surface_type.clone(),
                &ss.vertices,
            )?;
            sub_surfaces.push(sk);
        }
        for (ss, &sk) in snap.sub_surfaces.iter().zip(&sub_surfaces) {
            if let Some(id) = ss.adjacent_sub_surface {
                let owner = format!("sub-surface '{}'", ss.name);
                let adjacent = resolve(&sub_surfaces, id, "sub-surface", &owner)?;
                model.set_adjacent_sub_surface(sk, Some(adjacent))?;
            }
        }

        for ls in &snap.air_loops {
            let owner = format!("air loop '{}'", ls.name);
            let served = ls
                .zones
                .iter()
                .map(|&id| resolve(&zones, id, "zone", &owner))
                .collect::<Result<Vec<_>>>()?;
            model.add_air_loop(ls.name.clone(), &served)?;
        }

        Ok(model)
    }
}
