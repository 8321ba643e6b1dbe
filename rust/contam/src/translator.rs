// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building model to multizone network translation.
//!
//! Stories become levels, thermal zones become zones, and the surface
//! network builder drives this translator as its emitter to create one
//! leakage path per exterior surface and per interzone partition. Air loops
//! optionally become air handling systems with their own supply and return
//! zones.

use airnet_model::{AirLoopKey, BuildingModel, StoryKey, SurfaceKey, SurfaceType, ThermalZoneKey};
use airnet_network::{
    BuildStats, Diagnostics, ExteriorLink, ExteriorSubLink, InteriorLink, InteriorSubLink,
    LogMessage, NetworkEmitter, ProgressSink, SurfaceNetworkBuilder, TracingProgress,
};
use rustc_hash::FxHashMap;

use crate::elements::{
    install_standard_elements, AirtightnessLevel, ElementSet, ExteriorFlow, RHO_AIR,
};
use crate::error::{Error, Result};
use crate::index_model::*;
use crate::options::{Leakage, TranslatorOptions};
use crate::wind::pressure_modifier;

/// Supply mass flow per floor area (1 scfm/ft²), kg/(s·m²).
const SUPPLY_FLOW_PER_AREA: f64 = 0.00508 * RHO_AIR;

/// Wind pressure profile of walls in the standard template.
const WALL_PROFILE: u32 = 4;
/// Wind pressure profile of roofs in the standard template.
const ROOF_PROFILE: u32 = 5;

/// Translates a [`BuildingModel`] into an [`IndexModel`].
///
/// The translator keeps the lookup tables of its last translation so paths
/// can be traced back to the surfaces and air loops they came from.
#[derive(Debug, Default)]
pub struct ContamTranslator {
    options: TranslatorOptions,
    index: IndexModel,
    elements: Option<ElementSet>,
    level_map: FxHashMap<StoryKey, usize>,
    zone_map: FxHashMap<ThermalZoneKey, usize>,
    surface_map: FxHashMap<SurfaceKey, usize>,
    path_surfaces: FxHashMap<usize, SurfaceKey>,
    /// Supply and return path of each served zone.
    zone_system_paths: FxHashMap<ThermalZoneKey, (usize, usize)>,
    path_map: FxHashMap<String, usize>,
    system_map: FxHashMap<AirLoopKey, usize>,
    diagnostics: Diagnostics,
    stats: BuildStats,
}

impl ContamTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TranslatorOptions {
        &mut self.options
    }

    /// Drops everything produced by the last translation.
    pub fn clear(&mut self) {
        self.index = IndexModel::new();
        self.elements = None;
        self.level_map.clear();
        self.zone_map.clear();
        self.surface_map.clear();
        self.path_surfaces.clear();
        self.zone_system_paths.clear();
        self.path_map.clear();
        self.system_map.clear();
        self.diagnostics.clear();
        self.stats = BuildStats::default();
    }

    /// Translates `model`.
    ///
    /// Defects in the surface network only produce diagnostics. Missing
    /// story data, zones without a level, or unusable leakage settings abort
    /// the translation; the error is also recorded in [`Self::errors`].
    pub fn translate(&mut self, model: &BuildingModel) -> Result<IndexModel> {
        self.translate_with_progress(model, &mut TracingProgress::default())
    }

    /// Translates `model`, reporting each phase (zones, surfaces, air loops,
    /// system connections) to `progress`.
    pub fn translate_with_progress<P: ProgressSink>(
        &mut self,
        model: &BuildingModel,
        progress: &mut P,
    ) -> Result<IndexModel> {
        self.clear();
        match self.run(model, progress) {
            Ok(()) => {
                tracing::info!(
                    levels = self.index.levels.len(),
                    zones = self.index.zones.len(),
                    paths = self.index.paths.len(),
                    systems = self.index.systems.len(),
                    warnings = self.warnings().len(),
                    "translation finished"
                );
                Ok(self.index.clone())
            }
            Err(e) => {
                self.diagnostics.error(e.to_string());
                Err(e)
            }
        }
    }

    fn run<P: ProgressSink>(&mut self, model: &BuildingModel, progress: &mut P) -> Result<()> {
        self.apply_leakage()?;

        self.index.description = match model.building_name() {
            Some(name) => format!("Automatically generated from \"{name}\" OpenStudio model"),
            None => "Automatically generated OpenStudio model".to_string(),
        };

        self.translate_levels(model)?;
        self.translate_zones(model, progress)?;

        let report = SurfaceNetworkBuilder::with_progress(&mut *progress).build(model, self);
        self.stats = report.stats;
        self.diagnostics.extend(report.diagnostics);

        if self.options.translate_hvac {
            self.translate_air_loops(model, progress);
        }
        Ok(())
    }

    fn apply_leakage(&mut self) -> Result<()> {
        install_standard_elements(&mut self.index);
        let set = match self.options.leakage.clone() {
            Leakage::Airtightness(text) => {
                let level = text.parse::<AirtightnessLevel>().unwrap_or_else(|e| {
                    self.diagnostics.warn(format!("{e}, defaulting to 'Average'"));
                    AirtightnessLevel::Average
                });
                ElementSet::resolve(&self.index, &level.element_names())
                    .ok_or(Error::ElementsUnavailable("airtightness level"))?
            }
            Leakage::ExteriorFlow(flow) => {
                ExteriorFlow::new(flow.flow, flow.exponent, flow.delta_p)
                    .ok_or(Error::ElementsUnavailable("exterior flow rate"))?
                    .install(&mut self.index)
            }
        };
        self.elements = Some(set);
        Ok(())
    }

    fn translate_levels(&mut self, model: &BuildingModel) -> Result<()> {
        let mut stories = Vec::new();
        for key in model.stories() {
            let Some(story) = model.story(key) else {
                continue;
            };
            let z = story
                .nominal_z
                .ok_or_else(|| Error::StoryWithoutElevation(story.name.clone()))?;
            let height = story
                .floor_to_floor_height
                .ok_or_else(|| Error::StoryWithoutHeight(story.name.clone()))?;
            stories.push((key, z, height));
        }
        if stories.is_empty() {
            return Err(Error::NoStories);
        }
        stories.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut total_height = 0.0;
        for (key, z, height) in stories {
            total_height += height;
            let nr = self.index.add_level(Level {
                nr: 0,
                name: format!("<{}>", self.index.levels.len() + 1),
                refht: z,
                delht: height,
            });
            self.level_map.insert(key, nr);
        }
        self.index.wind_h = total_height;
        Ok(())
    }

    fn translate_zones<P: ProgressSink>(
        &mut self,
        model: &BuildingModel,
        progress: &mut P,
    ) -> Result<()> {
        let zones: Vec<_> = model.zones().collect();
        progress.init(zones.len(), "Translating Zones");
        for (i, key) in zones.into_iter().enumerate() {
            let name = model.display_name(key);
            let volume = model.zone_volume(key).unwrap_or_else(|| {
                self.diagnostics
                    .warn(format!("Failed to compute volume for Zone '{name}'"));
                0.0
            });
            let level = model
                .zone_spaces(key)
                .iter()
                .find_map(|&space| model.space_story(space))
                .and_then(|story| self.level_map.get(&story).copied())
                .ok_or_else(|| Error::ZoneWithoutLevel(name.clone()))?;

            let nr = self.index.add_zone(Zone {
                name: format!("Zone_{}", self.index.zones.len() + 1),
                source: Some(name),
                level,
                volume,
                variable_pressure: true,
                variable_contaminants: true,
                ..Zone::default()
            });
            self.zone_map.insert(key, nr);
            progress.set_value(i + 1);
        }
        Ok(())
    }

    fn translate_air_loops<P: ProgressSink>(&mut self, model: &BuildingModel, progress: &mut P) {
        let air_loops: Vec<_> = model.air_loops().collect();
        progress.init(air_loops.len(), "Translating AirLoops");
        for (i, key) in air_loops.into_iter().enumerate() {
            progress.set_value(i + 1);
            let Some(air_loop) = model.air_loop(key) else {
                continue;
            };
            let served: Vec<_> = air_loop
                .zones
                .iter()
                .filter_map(|z| self.zone_map.get(z).map(|&nr| (*z, nr)))
                .collect();
            if served.is_empty() {
                continue;
            }

            let nr = self.index.systems.len() + 1;
            let name = format!("AHS_{nr}");
            let system_zone = |suffix: &str| Zone {
                name: format!("{name}({suffix})"),
                level: 1,
                variable_contaminants: true,
                system: true,
                ..Zone::default()
            };
            let return_zone = self.index.add_zone(system_zone("Rec"));
            let supply_zone = self.index.add_zone(system_zone("Sup"));

            for (zone, zone_nr) in served {
                let zone_name = model.display_name(zone);
                let supply = self.index.add_path(AirflowPath {
                    kind: PathKind::System,
                    from_zone: Some(supply_zone),
                    to_zone: Some(zone_nr),
                    ahs: Some(nr),
                    ..AirflowPath::default()
                });
                self.path_map.insert(format!("{zone_name} supply"), supply);
                let ret = self.index.add_path(AirflowPath {
                    kind: PathKind::System,
                    from_zone: Some(zone_nr),
                    to_zone: Some(return_zone),
                    ahs: Some(nr),
                    ..AirflowPath::default()
                });
                self.path_map.insert(format!("{zone_name} return"), ret);
                self.zone_system_paths.insert(zone, (supply, ret));
            }

            self.index.add_system(AirHandlingSystem {
                name,
                return_zone,
                supply_zone,
                ..AirHandlingSystem::default()
            });
            self.system_map.insert(key, nr);
        }

        progress.init(self.index.systems.len(), "Connecting AHS to zones");
        for i in 0..self.index.systems.len() {
            let system = self.index.systems[i].clone();
            let recirculation = self.index.add_path(AirflowPath {
                kind: PathKind::Recirculation,
                from_zone: Some(system.return_zone),
                to_zone: Some(system.supply_zone),
                ..AirflowPath::default()
            });
            let outside_air = self.index.add_path(AirflowPath {
                kind: PathKind::OutsideAir,
                from_zone: None,
                to_zone: Some(system.supply_zone),
                ..AirflowPath::default()
            });
            let exhaust = self.index.add_path(AirflowPath {
                kind: PathKind::Exhaust,
                from_zone: Some(system.return_zone),
                to_zone: None,
                ..AirflowPath::default()
            });
            self.path_map
                .insert(format!("{} recirculation", system.name), recirculation);
            self.path_map.insert(format!("{} oa", system.name), outside_air);
            self.path_map.insert(format!("{} exhaust", system.name), exhaust);

            let row = &mut self.index.systems[i];
            row.recirculation_path = Some(recirculation);
            row.outside_air_path = Some(outside_air);
            row.exhaust_path = Some(exhaust);
            progress.set_value(i + 1);
        }

        if !self.index.systems.is_empty() {
            self.estimate_supply_flows(model);
        }
    }

    /// Sets supply and return flows from floor area.
    fn estimate_supply_flows(&mut self, model: &BuildingModel) {
        self.diagnostics
            .warn("Simulation results not available, using 1 scfm/ft^2 to set supply flows");
        let ratio = self.options.return_supply_ratio.abs();

        for zone in model.zones() {
            let Some(&(supply, ret)) = self.zone_system_paths.get(&zone) else {
                continue;
            };
            let area = model.zone_floor_area(zone);
            if area == 0.0 {
                self.diagnostics.warn(format!(
                    "Failed to compute floor area for Zone '{}'",
                    model.display_name(zone)
                ));
                continue;
            }
            let flow = area * SUPPLY_FLOW_PER_AREA;
            if let Some(path) = self.index.path_mut(supply) {
                path.supply_flow = Some(flow);
            }
            if let Some(path) = self.index.path_mut(ret) {
                path.supply_flow = Some(ratio * flow);
            }
        }
    }

    /// Zone number, level number and level reference height of a zone.
    fn zone_context(
        &mut self,
        model: &BuildingModel,
        zone: ThermalZoneKey,
    ) -> Option<(usize, usize, f64)> {
        let Some(&nr) = self.zone_map.get(&zone) else {
            self.diagnostics.warn(format!(
                "Unable to look up zone '{}' in the zone table",
                model.display_name(zone)
            ));
            return None;
        };
        let level = self.index.zone(nr)?.level;
        let refht = self.index.level(level)?.refht;
        Some((nr, level, refht))
    }

    // --- Results of the last translation ---

    pub fn index_model(&self) -> &IndexModel {
        &self.index
    }

    /// All messages of the last translation, network defects included.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.diagnostics.warnings()
    }

    pub fn errors(&self) -> Vec<&LogMessage> {
        self.diagnostics.errors()
    }

    /// Surface network statistics of the last translation.
    pub fn network_stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Elements used for exterior, interior, floor and roof paths.
    pub fn element_set(&self) -> Option<ElementSet> {
        self.elements
    }

    pub fn level_nr(&self, story: StoryKey) -> Option<usize> {
        self.level_map.get(&story).copied()
    }

    pub fn zone_nr(&self, zone: ThermalZoneKey) -> Option<usize> {
        self.zone_map.get(&zone).copied()
    }

    /// Path created for a surface (the primary side of an interior pair).
    pub fn surface_path(&self, surface: SurfaceKey) -> Option<usize> {
        self.surface_map.get(&surface).copied()
    }

    /// Surface a path was created for.
    pub fn path_surface(&self, path: usize) -> Option<SurfaceKey> {
        self.path_surfaces.get(&path).copied()
    }

    /// Supply and return path numbers of a zone served by an air loop.
    pub fn zone_system_paths(&self, zone: ThermalZoneKey) -> Option<(usize, usize)> {
        self.zone_system_paths.get(&zone).copied()
    }

    /// Path by lookup name: "<zone> supply", "<zone> return",
    /// "AHS_<n> recirculation", "AHS_<n> oa" or "AHS_<n> exhaust". Zones that
    /// share a name resolve to the last one; see [`Self::zone_system_paths`].
    pub fn named_path(&self, name: &str) -> Option<usize> {
        self.path_map.get(name).copied()
    }

    pub fn system_nr(&self, air_loop: AirLoopKey) -> Option<usize> {
        self.system_map.get(&air_loop).copied()
    }
}

impl NetworkEmitter for ContamTranslator {
    fn link_exterior_surface(&mut self, model: &BuildingModel, link: &ExteriorLink) -> bool {
        let Some(elements) = self.elements else {
            return false;
        };
        let Some((zone, level, refht)) = self.zone_context(model, link.zone) else {
            return false;
        };
        let (Some(area), Some(z), Some(azimuth)) = (
            model.surface_gross_area(link.surface),
            model.surface_average_z(link.surface),
            model.surface_azimuth(link.surface),
        ) else {
            return false;
        };
        let (element, profile) = match model.surface_type(link.surface) {
            Some(SurfaceType::RoofCeiling) => (elements.roof, ROOF_PROFILE),
            _ => (elements.exterior, WALL_PROFILE),
        };

        let nr = self.index.add_path(AirflowPath {
            kind: PathKind::Surface,
            from_zone: Some(zone),
            to_zone: None,
            level,
            element: Some(element),
            rel_ht: z - refht,
            mult: area,
            azimuth: azimuth.to_degrees(),
            wind_pressure: true,
            wp_mod: pressure_modifier(self.options.terrain, self.index.wind_h),
            wind_profile: Some(profile),
            ..AirflowPath::default()
        });
        self.surface_map.insert(link.surface, nr);
        self.path_surfaces.insert(nr, link.surface);
        true
    }

    fn link_interior_surface(&mut self, model: &BuildingModel, link: &InteriorLink) -> bool {
        let Some(elements) = self.elements else {
            return false;
        };
        let Some((zone, level, refht)) = self.zone_context(model, link.zone) else {
            return false;
        };
        let Some((adjacent_zone, _, _)) = self.zone_context(model, link.adjacent_zone) else {
            return false;
        };
        let (Some(area), Some(adjacent_area), Some(z)) = (
            model.surface_gross_area(link.surface),
            model.surface_gross_area(link.adjacent_surface),
            model.surface_average_z(link.surface),
        ) else {
            return false;
        };
        let element = match model.surface_type(link.surface) {
            Some(SurfaceType::Floor | SurfaceType::RoofCeiling) => elements.floor,
            _ => elements.interior,
        };

        let nr = self.index.add_path(AirflowPath {
            kind: PathKind::Surface,
            from_zone: Some(zone),
            to_zone: Some(adjacent_zone),
            level,
            element: Some(element),
            rel_ht: z - refht,
            mult: 0.5 * (area + adjacent_area),
            ..AirflowPath::default()
        });
        self.surface_map.insert(link.surface, nr);
        self.path_surfaces.insert(nr, link.surface);
        true
    }

    fn link_exterior_sub_surface(&mut self, model: &BuildingModel, link: &ExteriorSubLink) -> bool {
        // Openings share their host's leakage path.
        tracing::trace!(sub_surface = %model.display_name(link.sub_surface), "exterior opening");
        true
    }

    fn link_interior_sub_surface(&mut self, model: &BuildingModel, link: &InteriorSubLink) -> bool {
        tracing::trace!(sub_surface = %model.display_name(link.sub_surface), "interior opening");
        true
    }
}
