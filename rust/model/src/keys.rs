// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based model storage.
//!
//! Every model object gets a unique, type-safe key. Keys are created by
//! `slotmap::SlotMap` and remain valid even after other objects are removed
//! (generational indices). A key whose object has been removed simply stops
//! resolving, which is how the model represents dangling references.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a surface (wall, floor or roof/ceiling polygon).
    pub struct SurfaceKey;

    /// Key for a sub-surface (window, door, skylight) hosted by a surface.
    pub struct SubSurfaceKey;

    /// Key for a space (a room bounded by surfaces).
    pub struct SpaceKey;

    /// Key for a thermal zone (one or more spaces forming one airflow node).
    pub struct ThermalZoneKey;

    /// Key for a building story.
    pub struct StoryKey;

    /// Key for an air loop (central air handling system).
    pub struct AirLoopKey;
}

/// A key that can reference any model object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKey {
    Surface(SurfaceKey),
    SubSurface(SubSurfaceKey),
    Space(SpaceKey),
    ThermalZone(ThermalZoneKey),
    Story(StoryKey),
    AirLoop(AirLoopKey),
}

impl ObjectKey {
    /// Returns the object type of this key.
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKey::Surface(_) => ObjectType::Surface,
            ObjectKey::SubSurface(_) => ObjectType::SubSurface,
            ObjectKey::Space(_) => ObjectType::Space,
            ObjectKey::ThermalZone(_) => ObjectType::ThermalZone,
            ObjectKey::Story(_) => ObjectType::Story,
            ObjectKey::AirLoop(_) => ObjectType::AirLoop,
        }
    }
}

/// Discriminant for model object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Surface,
    SubSurface,
    Space,
    ThermalZone,
    Story,
    AirLoop,
}

impl ObjectType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Surface => "Surface",
            ObjectType::SubSurface => "SubSurface",
            ObjectType::Space => "Space",
            ObjectType::ThermalZone => "ThermalZone",
            ObjectType::Story => "BuildingStory",
            ObjectType::AirLoop => "AirLoopHVAC",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SurfaceKey> for ObjectKey {
    fn from(k: SurfaceKey) -> Self {
        ObjectKey::Surface(k)
    }
}

impl From<SubSurfaceKey> for ObjectKey {
    fn from(k: SubSurfaceKey) -> Self {
        ObjectKey::SubSurface(k)
    }
}

impl From<SpaceKey> for ObjectKey {
    fn from(k: SpaceKey) -> Self {
        ObjectKey::Space(k)
    }
}

impl From<ThermalZoneKey> for ObjectKey {
    fn from(k: ThermalZoneKey) -> Self {
        ObjectKey::ThermalZone(k)
    }
}

impl From<StoryKey> for ObjectKey {
    fn from(k: StoryKey) -> Self {
        ObjectKey::Story(k)
    }
}

impl From<AirLoopKey> for ObjectKey {
    fn from(k: AirLoopKey) -> Self {
        ObjectKey::AirLoop(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn object_type_names() {
        assert_eq!(ObjectType::Surface.as_str(), "Surface");
        assert_eq!(ObjectType::SubSurface.as_str(), "SubSurface");
        assert_eq!(ObjectType::Space.as_str(), "Space");
        assert_eq!(ObjectType::ThermalZone.as_str(), "ThermalZone");
        assert_eq!(ObjectType::Story.to_string(), "BuildingStory");
        assert_eq!(ObjectType::AirLoop.to_string(), "AirLoopHVAC");
    }

    #[test]
    fn object_key_discrimination() {
        let mut surfaces: SlotMap<SurfaceKey, ()> = SlotMap::with_key();
        let mut zones: SlotMap<ThermalZoneKey, ()> = SlotMap::with_key();
        let s = ObjectKey::from(surfaces.insert(()));
        let z = ObjectKey::from(zones.insert(()));

        assert_eq!(s.object_type(), ObjectType::Surface);
        assert_eq!(z.object_type(), ObjectType::ThermalZone);
        assert_ne!(s, z);
    }
}
