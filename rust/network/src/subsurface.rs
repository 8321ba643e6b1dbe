// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sub-surface consistency for matched interior pairs.

use airnet_model::{BuildingModel, SubSurfaceKey, SurfaceKey};

use crate::error::Defect;

/// Result of checking one sub-surface of an interior pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubSurfaceOutcome {
    /// The adjacent sub-surface resolves and is hosted by the adjacent surface.
    Valid { adjacent_sub_surface: SubSurfaceKey },
    Invalid(Defect),
}

/// Checks every sub-surface of `surface` against `adjacent_surface`.
///
/// Results come back in the host's sub-surface order. A failed sub-surface
/// never affects its siblings or the host pair.
pub fn check_sub_surfaces(
    model: &BuildingModel,
    surface: SurfaceKey,
    adjacent_surface: SurfaceKey,
) -> Vec<(SubSurfaceKey, SubSurfaceOutcome)> {
    model
        .surface_sub_surfaces(surface)
        .iter()
        .map(|&sub| (sub, check_one(model, sub, adjacent_surface)))
        .collect()
}

fn check_one(
    model: &BuildingModel,
    sub_surface: SubSurfaceKey,
    adjacent_surface: SurfaceKey,
) -> SubSurfaceOutcome {
    let Some(adjacent) = model.adjacent_sub_surface(sub_surface) else {
        return SubSurfaceOutcome::Invalid(Defect::NoAdjacentSubSurface {
            sub_surface,
            name: model.display_name(sub_surface),
        });
    };
    if model.sub_surface_surface(adjacent) != Some(adjacent_surface) {
        return SubSurfaceOutcome::Invalid(Defect::WrongAdjacentSurface {
            sub_surface,
            name: model.display_name(sub_surface),
            adjacent_sub_surface: adjacent,
            adjacent_name: model.display_name(adjacent),
            expected_surface: adjacent_surface,
            expected_surface_name: model.display_name(adjacent_surface),
        });
    }
    SubSurfaceOutcome::Valid {
        adjacent_sub_surface: adjacent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DefectKind;
    use crate::fixtures::*;

    fn kinds(outcomes: &[(SubSurfaceKey, SubSurfaceOutcome)]) -> Vec<Option<DefectKind>> {
        outcomes
            .iter()
            .map(|(_, o)| match o {
                SubSurfaceOutcome::Valid { .. } => None,
                SubSurfaceOutcome::Invalid(d) => Some(d.kind()),
            })
            .collect()
    }

    #[test]
    fn matched_doors_are_valid() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let (_, s2) = f.zoned_space("Z2", "S2");
        let (a, b) = f.pair("A", s1, "B", s2);
        let da = f.door(a, "Door A");
        let db = f.door(b, "Door B");
        f.model.match_sub_surfaces(da, db).unwrap();

        let outcomes = check_sub_surfaces(&f.model, a, b);
        assert_eq!(
            outcomes,
            vec![(
                da,
                SubSurfaceOutcome::Valid {
                    adjacent_sub_surface: db
                }
            )]
        );
    }

    #[test]
    fn failures_do_not_affect_siblings() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let (_, s2) = f.zoned_space("Z2", "S2");
        let (_, s3) = f.zoned_space("Z3", "S3");
        let (a, b) = f.pair("A", s1, "B", s2);
        let c = f.wall("C", airnet_model::BoundaryCondition::Outdoors, Some(s3));

        let lonely = f.door(a, "Lonely");
        let good = f.door(a, "Good");
        let stray = f.door(a, "Stray");
        let partner = f.door(b, "Partner");
        let elsewhere = f.door(c, "Elsewhere");
        f.model.match_sub_surfaces(good, partner).unwrap();
        f.model.set_adjacent_sub_surface(stray, Some(elsewhere)).unwrap();

        let outcomes = check_sub_surfaces(&f.model, a, b);
        let keys: Vec<_> = outcomes.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [lonely, good, stray]);
        assert_eq!(
            kinds(&outcomes),
            [
                Some(DefectKind::NoAdjacentSubSurface),
                None,
                Some(DefectKind::WrongAdjacentSurface)
            ]
        );
        let SubSurfaceOutcome::Invalid(defect) = &outcomes[2].1 else {
            panic!("expected a defect");
        };
        assert_eq!(
            defect.to_string(),
            "Adjacent sub-surface 'Elsewhere' of sub-surface 'Stray' is not hosted by surface 'B'"
        );
    }

    #[test]
    fn surface_without_sub_surfaces() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let (_, s2) = f.zoned_space("Z2", "S2");
        let (a, b) = f.pair("A", s1, "B", s2);
        assert!(check_sub_surfaces(&f.model, a, b).is_empty());
    }
}
