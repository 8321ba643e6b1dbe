// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric queries on surfaces, spaces and zones.
//!
//! Areas and normals use Newell's method, so any planar polygon works
//! (convex or concave). Azimuth follows the building convention: measured
//! clockwise from north (+y) in the horizontal plane.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};

use crate::keys::*;
use crate::model::BuildingModel;
use crate::types::SurfaceType;

/// Newell normal of a polygon. The length equals twice the polygon area.
fn newell(points: &[Point3<f64>]) -> Vector3<f64> {
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    let n = points.len();

    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }

    normal
}

/// Unit normal of a polygon, or `None` if it is degenerate.
pub fn polygon_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    if points.len() < 3 {
        return None;
    }
    let normal = newell(points);
    let len = normal.norm();
    if len < 1e-15 {
        return None;
    }
    Some(normal / len)
}

/// Area of a planar polygon.
pub fn polygon_area(points: &[Point3<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    0.5 * newell(points).norm()
}

/// Azimuth of a direction in radians, clockwise from +y, in `[0, 2π)`.
pub fn azimuth(direction: &Vector3<f64>) -> f64 {
    let a = direction.x.atan2(direction.y);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

impl BuildingModel {
    /// Returns the outward unit normal of a surface.
    pub fn surface_normal(&self, key: SurfaceKey) -> Option<Vector3<f64>> {
        polygon_normal(&self.surface(key)?.vertices)
    }

    /// Returns the gross area of a surface (sub-surfaces not subtracted).
    pub fn surface_gross_area(&self, key: SurfaceKey) -> Option<f64> {
        Some(polygon_area(&self.surface(key)?.vertices))
    }

    /// Returns the mean z coordinate of a surface's vertices.
    pub fn surface_average_z(&self, key: SurfaceKey) -> Option<f64> {
        let vertices = &self.surface(key)?.vertices;
        if vertices.is_empty() {
            return None;
        }
        Some(vertices.iter().map(|p| p.z).sum::<f64>() / vertices.len() as f64)
    }

    /// Returns the azimuth of a surface's outward normal in radians.
    ///
    /// Horizontal surfaces have an undefined azimuth; their normal projects
    /// to the origin and this returns 0.
    pub fn surface_azimuth(&self, key: SurfaceKey) -> Option<f64> {
        let normal = self.surface_normal(key)?;
        if normal.x.abs() < 1e-12 && normal.y.abs() < 1e-12 {
            return Some(0.0);
        }
        Some(azimuth(&normal))
    }

    /// Returns the tilt of a surface in radians: 0 faces up, π faces down.
    pub fn surface_tilt(&self, key: SurfaceKey) -> Option<f64> {
        let normal = self.surface_normal(key)?;
        Some(normal.z.clamp(-1.0, 1.0).acos())
    }

    /// Returns the floor area of a space: the summed area of its floors.
    pub fn space_floor_area(&self, key: SpaceKey) -> f64 {
        self.space_surfaces(key)
            .iter()
            .filter(|&&s| self.surface_type(s) == Some(SurfaceType::Floor))
            .filter_map(|&s| self.surface_gross_area(s))
            .sum()
    }

    /// Returns the volume of a space, 0 when unknown.
    pub fn space_volume(&self, key: SpaceKey) -> f64 {
        self.space(key).and_then(|s| s.volume).unwrap_or(0.0)
    }

    /// Returns the floor area of a zone: the sum over its spaces.
    pub fn zone_floor_area(&self, key: ThermalZoneKey) -> f64 {
        self.zone_spaces(key)
            .iter()
            .map(|&s| self.space_floor_area(s))
            .sum()
    }

    /// Returns the volume of a zone.
    ///
    /// An explicit zone volume wins; otherwise the space volumes are summed.
    /// Returns `None` when neither gives a non-zero value.
    pub fn zone_volume(&self, key: ThermalZoneKey) -> Option<f64> {
        let zone = self.zone(key)?;
        if let Some(v) = zone.volume {
            return Some(v);
        }
        let total: f64 = self
            .zone_spaces(key)
            .iter()
            .map(|&s| self.space_volume(s))
            .sum();
        if total == 0.0 {
            None
        } else {
            Some(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundaryCondition;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn wall(model: &mut BuildingModel, coords: &[[f64; 3]]) -> SurfaceKey {
        model
            .add_surface("W", SurfaceType::Wall, BoundaryCondition::Outdoors, None, coords)
            .unwrap()
    }

    #[test]
    fn south_wall_area_and_azimuth() {
        let mut model = BuildingModel::new();
        // Counter-clockwise seen from the south: normal points to -y.
        let w = wall(
            &mut model,
            &[[0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 0.0, 3.0]],
        );

        assert_relative_eq!(model.surface_gross_area(w).unwrap(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(model.surface_azimuth(w).unwrap(), PI, epsilon = 1e-12);
        assert_relative_eq!(model.surface_tilt(w).unwrap(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(model.surface_average_z(w).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn east_wall_azimuth() {
        let mut model = BuildingModel::new();
        let w = wall(
            &mut model,
            &[[4.0, 0.0, 3.0], [4.0, 0.0, 0.0], [4.0, 5.0, 0.0], [4.0, 5.0, 3.0]],
        );
        assert_relative_eq!(model.surface_azimuth(w).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn roof_faces_up() {
        let mut model = BuildingModel::new();
        let r = wall(
            &mut model,
            &[[0.0, 0.0, 3.0], [4.0, 0.0, 3.0], [4.0, 5.0, 3.0], [0.0, 5.0, 3.0]],
        );
        assert_relative_eq!(model.surface_tilt(r).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(model.surface_azimuth(r).unwrap(), 0.0);
        assert_relative_eq!(model.surface_gross_area(r).unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn concave_polygon_area() {
        // L-shape: 2x2 square minus 1x1 corner = 3
        let points: Vec<Point3<f64>> = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
        ]
        .iter()
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect();
        assert_relative_eq!(polygon_area(&points), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_polygon_has_no_normal() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(polygon_normal(&points).is_none());
        assert_relative_eq!(polygon_area(&points), 0.0);
    }

    #[test]
    fn zone_volume_falls_back_to_spaces() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        let a = model.add_space("A", Some(zone)).unwrap();
        let b = model.add_space("B", Some(zone)).unwrap();
        assert_eq!(model.zone_volume(zone), None);

        model.set_space_volume(a, 30.0).unwrap();
        model.set_space_volume(b, 45.0).unwrap();
        assert_relative_eq!(model.zone_volume(zone).unwrap(), 75.0);

        model.set_zone_volume(zone, 100.0).unwrap();
        assert_relative_eq!(model.zone_volume(zone).unwrap(), 100.0);
    }

    #[test]
    fn floor_area_counts_only_floors() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Z");
        let space = model.add_space("S", Some(zone)).unwrap();
        model
            .add_surface(
                "Floor",
                SurfaceType::Floor,
                BoundaryCondition::Ground,
                Some(space),
                &[[0.0, 5.0, 0.0], [4.0, 5.0, 0.0], [4.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            )
            .unwrap();
        model
            .add_surface(
                "Wall",
                SurfaceType::Wall,
                BoundaryCondition::Outdoors,
                Some(space),
                &[[0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 0.0, 3.0]],
            )
            .unwrap();

        assert_relative_eq!(model.space_floor_area(space), 20.0, epsilon = 1e-12);
        assert_relative_eq!(model.zone_floor_area(zone), 20.0, epsilon = 1e-12);
    }
}
