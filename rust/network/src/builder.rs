// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The surface network builder.
//!
//! One `build` call walks every surface of a model exactly once, in arena
//! order. Each surface is classified, matched interior pairs are deduplicated
//! through a [`VisitedSet`], sub-surfaces of interior pairs are checked, and
//! every link that survives is handed to the emitter. Nothing here is fatal:
//! defects are recorded in the report and the affected surface is left out.

use airnet_model::BuildingModel;
use serde::Serialize;

use crate::classify::{classify, Disposition};
use crate::diagnostics::{Diagnostics, LogMessage};
use crate::emitter::*;
use crate::progress::{NullProgress, ProgressSink};
use crate::subsurface::{check_sub_surfaces, SubSurfaceOutcome};
use crate::visited::VisitedSet;

/// Label of the progress phase driven by [`SurfaceNetworkBuilder::build`].
pub const PROGRESS_LABEL: &str = "Translating Surfaces";

/// Counters gathered during one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Surfaces visited.
    pub surfaces: usize,
    pub exterior_links: usize,
    pub interior_links: usize,
    pub exterior_sub_links: usize,
    pub interior_sub_links: usize,
    /// Matched pairs whose two sides share a thermal zone.
    pub same_zone_partitions: usize,
    /// Surfaces skipped because their pair was already processed.
    pub already_consumed: usize,
    /// Surfaces whose boundary condition plays no part in the network.
    pub skipped: usize,
    pub invalid_surfaces: usize,
    pub invalid_sub_surfaces: usize,
    /// Links the emitter declined to register.
    pub failed_links: usize,
}

/// Outcome of one build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub diagnostics: Diagnostics,
    pub stats: BuildStats,
}

impl BuildReport {
    /// `true` when no message at Warn or above was recorded.
    pub fn success(&self) -> bool {
        self.diagnostics.is_clean()
    }

    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.diagnostics.warnings()
    }

    pub fn errors(&self) -> Vec<&LogMessage> {
        self.diagnostics.errors()
    }
}

/// Walks a building model and drives a [`NetworkEmitter`].
///
/// The builder keeps nothing between calls except its progress sink.
#[derive(Debug, Default)]
pub struct SurfaceNetworkBuilder<P = NullProgress> {
    progress: P,
}

impl SurfaceNetworkBuilder<NullProgress> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ProgressSink> SurfaceNetworkBuilder<P> {
    pub fn with_progress(progress: P) -> Self {
        Self { progress }
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn into_progress(self) -> P {
        self.progress
    }

    /// Builds the network for `model`, sending every validated link to
    /// `emitter`.
    pub fn build<E>(&mut self, model: &BuildingModel, emitter: &mut E) -> BuildReport
    where
        E: NetworkEmitter + ?Sized,
    {
        let surfaces: Vec<_> = model.surfaces().collect();
        self.progress.init(surfaces.len(), PROGRESS_LABEL);

        let mut ctx = BuildContext {
            model,
            emitter,
            visited: VisitedSet::new(),
            diagnostics: Diagnostics::new(),
            stats: BuildStats::default(),
        };

        for (i, &surface) in surfaces.iter().enumerate() {
            ctx.stats.surfaces += 1;
            match classify(model, surface, &ctx.visited) {
                Disposition::Exterior(link) => ctx.exterior(link),
                Disposition::InteriorCandidate(link) => ctx.interior(link),
                Disposition::AlreadyConsumed => ctx.stats.already_consumed += 1,
                Disposition::Other => ctx.stats.skipped += 1,
                Disposition::Invalid(defect) => {
                    ctx.stats.invalid_surfaces += 1;
                    ctx.diagnostics.record(&defect);
                }
            }
            self.progress.set_value(i + 1);
        }

        tracing::debug!(
            surfaces = ctx.stats.surfaces,
            exterior = ctx.stats.exterior_links,
            interior = ctx.stats.interior_links,
            same_zone = ctx.stats.same_zone_partitions,
            invalid = ctx.stats.invalid_surfaces,
            "surface network built"
        );

        BuildReport {
            diagnostics: ctx.diagnostics,
            stats: ctx.stats,
        }
    }
}

/// State scoped to a single build.
struct BuildContext<'a, E: ?Sized> {
    model: &'a BuildingModel,
    emitter: &'a mut E,
    visited: VisitedSet,
    diagnostics: Diagnostics,
    stats: BuildStats,
}

impl<E: NetworkEmitter + ?Sized> BuildContext<'_, E> {
    fn exterior(&mut self, link: ExteriorLink) {
        if self.emit(NetworkRecord::Exterior(link)) {
            self.stats.exterior_links += 1;
        }
        let model = self.model;
        for &sub_surface in model.surface_sub_surfaces(link.surface) {
            let record = NetworkRecord::ExteriorSub(ExteriorSubLink { link, sub_surface });
            if self.emit(record) {
                self.stats.exterior_sub_links += 1;
            }
        }
    }

    fn interior(&mut self, link: InteriorLink) {
        let outcomes = check_sub_surfaces(self.model, link.surface, link.adjacent_surface);
        self.visited.mark_consumed(link.adjacent_surface);

        for (_, outcome) in &outcomes {
            if let SubSurfaceOutcome::Invalid(defect) = outcome {
                self.stats.invalid_sub_surfaces += 1;
                self.diagnostics.record(defect);
            }
        }

        if link.is_same_zone() {
            tracing::debug!(
                surface = %self.model.display_name(link.surface),
                "same-zone partition, no path"
            );
            self.stats.same_zone_partitions += 1;
            return;
        }

        if self.emit(NetworkRecord::Interior(link)) {
            self.stats.interior_links += 1;
        }
        for (sub_surface, outcome) in outcomes {
            if let SubSurfaceOutcome::Valid {
                adjacent_sub_surface,
            } = outcome
            {
                let record = NetworkRecord::InteriorSub(InteriorSubLink {
                    link,
                    sub_surface,
                    adjacent_sub_surface,
                });
                if self.emit(record) {
                    self.stats.interior_sub_links += 1;
                }
            }
        }
    }

    /// Sends one record to the emitter. A refusal is noted at Info level.
    fn emit(&mut self, record: NetworkRecord) -> bool {
        if self.emitter.emit(self.model, &record) {
            return true;
        }
        self.stats.failed_links += 1;
        self.diagnostics
            .info(format!("Link not registered: {}", record.describe(self.model)));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use crate::logging::LoggingEmitter;
    use airnet_model::BoundaryCondition;

    /// Emitter that refuses everything.
    struct Refuse;

    impl NetworkEmitter for Refuse {
        fn link_exterior_surface(&mut self, _: &BuildingModel, _: &ExteriorLink) -> bool {
            false
        }
        fn link_interior_surface(&mut self, _: &BuildingModel, _: &InteriorLink) -> bool {
            false
        }
        fn link_exterior_sub_surface(&mut self, _: &BuildingModel, _: &ExteriorSubLink) -> bool {
            false
        }
        fn link_interior_sub_surface(&mut self, _: &BuildingModel, _: &InteriorSubLink) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct Ticks {
        range: usize,
        label: String,
        values: Vec<usize>,
    }

    impl ProgressSink for Ticks {
        fn init(&mut self, range: usize, label: &str) {
            self.range = range;
            self.label = label.to_string();
        }
        fn set_value(&mut self, value: usize) {
            self.values.push(value);
        }
    }

    #[test]
    fn refused_links_are_soft_failures() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let wall = f.wall("W", BoundaryCondition::Outdoors, Some(s1));
        f.door(wall, "D");

        let report = SurfaceNetworkBuilder::new().build(&f.model, &mut Refuse);
        assert!(report.success());
        assert_eq!(report.stats.failed_links, 2);
        assert_eq!(report.stats.exterior_links, 0);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.diagnostics.messages()[0]
            .message
            .starts_with("Link not registered: Exterior surface 'W'"));
    }

    #[test]
    fn progress_ticks_once_per_surface() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let (_, s2) = f.zoned_space("Z2", "S2");
        f.pair("A", s1, "B", s2);
        f.wall("C", BoundaryCondition::Ground, Some(s1));

        let mut builder = SurfaceNetworkBuilder::with_progress(Ticks::default());
        builder.build(&f.model, &mut LoggingEmitter::new());
        let ticks = builder.into_progress();
        assert_eq!(ticks.range, 3);
        assert_eq!(ticks.label, PROGRESS_LABEL);
        assert_eq!(ticks.values, [1, 2, 3]);
    }

    #[test]
    fn builds_are_independent() {
        let mut f = Fixture::new();
        let (_, s1) = f.zoned_space("Z1", "S1");
        let (_, s2) = f.zoned_space("Z2", "S2");
        f.pair("A", s1, "B", s2);
        f.wall("Orphan", BoundaryCondition::Outdoors, None);

        let mut builder = SurfaceNetworkBuilder::new();
        let first = builder.build(&f.model, &mut LoggingEmitter::new());
        let second = builder.build(&f.model, &mut LoggingEmitter::new());
        assert_eq!(first.stats, second.stats);
        assert_eq!(second.stats.interior_links, 1);
        assert_eq!(second.warnings().len(), 1);
    }

    #[test]
    fn same_zone_pair_still_reports_sub_surface_defects() {
        let mut f = Fixture::new();
        let zone = f.model.add_zone("Z1");
        let s1 = f.model.add_space("S1", Some(zone)).unwrap();
        let s2 = f.model.add_space("S2", Some(zone)).unwrap();
        let (a, _) = f.pair("A", s1, "B", s2);
        f.door(a, "Unpaired");

        let mut emitter = LoggingEmitter::new();
        let report = SurfaceNetworkBuilder::new().build(&f.model, &mut emitter);
        assert!(emitter.messages().is_empty());
        assert_eq!(report.stats.same_zone_partitions, 1);
        assert_eq!(report.stats.already_consumed, 1);
        assert_eq!(report.warnings().len(), 1);
        assert!(!report.success());
    }
}
