// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small model builders shared by the unit tests.

use airnet_model::{
    BoundaryCondition, BuildingModel, SpaceKey, SubSurfaceKey, SurfaceKey, SurfaceType,
    ThermalZoneKey,
};

pub const QUAD: [[f64; 3]; 4] = [
    [0.0, 0.0, 3.0],
    [0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0],
    [4.0, 0.0, 3.0],
];

pub const DOOR: [[f64; 3]; 4] = [
    [1.0, 0.0, 2.0],
    [1.0, 0.0, 0.0],
    [2.0, 0.0, 0.0],
    [2.0, 0.0, 2.0],
];

pub struct Fixture {
    pub model: BuildingModel,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            model: BuildingModel::new(),
        }
    }

    pub fn zoned_space(&mut self, zone: &str, space: &str) -> (ThermalZoneKey, SpaceKey) {
        let z = self.model.add_zone(zone);
        let s = self.model.add_space(space, Some(z)).unwrap();
        (z, s)
    }

    pub fn wall(
        &mut self,
        name: &str,
        boundary: BoundaryCondition,
        space: Option<SpaceKey>,
    ) -> SurfaceKey {
        self.model
            .add_surface(name, SurfaceType::Wall, boundary, space, &QUAD)
            .unwrap()
    }

    /// Two walls matched to each other.
    pub fn pair(
        &mut self,
        a: &str,
        a_space: SpaceKey,
        b: &str,
        b_space: SpaceKey,
    ) -> (SurfaceKey, SurfaceKey) {
        let ka = self.wall(a, BoundaryCondition::Surface, Some(a_space));
        let kb = self.wall(b, BoundaryCondition::Surface, Some(b_space));
        self.model.match_surfaces(ka, kb).unwrap();
        (ka, kb)
    }

    pub fn door(&mut self, host: SurfaceKey, name: &str) -> SubSurfaceKey {
        self.model.add_sub_surface(host, name, "Door", &DOOR).unwrap()
    }
}
