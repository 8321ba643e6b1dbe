// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An emitter that only records what it is asked to link.
//!
//! Handy for checking what a model would produce before running a real
//! translation, and for diagnosing adjacency problems.

use airnet_model::BuildingModel;

use crate::emitter::*;

/// Records one human-readable line per emitter call and accepts every link.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmitter {
    messages: Vec<String>,
}

impl LoggingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far, in call order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    fn record(&mut self, model: &BuildingModel, record: NetworkRecord) -> bool {
        let line = record.describe(model);
        tracing::debug!("{line}");
        self.messages.push(line);
        true
    }
}

impl NetworkEmitter for LoggingEmitter {
    fn link_exterior_surface(&mut self, model: &BuildingModel, link: &ExteriorLink) -> bool {
        self.record(model, NetworkRecord::Exterior(*link))
    }

    fn link_interior_surface(&mut self, model: &BuildingModel, link: &InteriorLink) -> bool {
        self.record(model, NetworkRecord::Interior(*link))
    }

    fn link_exterior_sub_surface(&mut self, model: &BuildingModel, link: &ExteriorSubLink) -> bool {
        self.record(model, NetworkRecord::ExteriorSub(*link))
    }

    fn link_interior_sub_surface(&mut self, model: &BuildingModel, link: &InteriorSubLink) -> bool {
        self.record(model, NetworkRecord::InteriorSub(*link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airnet_model::{BoundaryCondition, SurfaceType};

    #[test]
    fn records_named_lines() {
        let mut model = BuildingModel::new();
        let zone = model.add_zone("Office");
        let space = model.add_space("Office Space", Some(zone)).unwrap();
        let surface = model
            .add_surface(
                "South Wall",
                SurfaceType::Wall,
                BoundaryCondition::Outdoors,
                Some(space),
                &[[0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 0.0, 3.0]],
            )
            .unwrap();

        let mut emitter = LoggingEmitter::new();
        let link = ExteriorLink { zone, space, surface };
        assert!(emitter.link_exterior_surface(&model, &link));
        assert!(emitter.emit(&model, &NetworkRecord::Exterior(link)));

        assert_eq!(emitter.messages().len(), 2);
        assert_eq!(
            emitter.messages()[0],
            "Exterior surface 'South Wall' of space 'Office Space' in zone 'Office'"
        );
    }
}
