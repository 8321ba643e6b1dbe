// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Airnet Network
//!
//! Discovers which surfaces of a building model face each other across zone
//! boundaries and turns them into airflow network links.
//!
//! [`SurfaceNetworkBuilder::build`] walks the surfaces of a
//! [`BuildingModel`](airnet_model::BuildingModel) once. Exterior surfaces
//! become [`ExteriorLink`]s; matched interior pairs become a single
//! [`InteriorLink`] seen from whichever side is visited first, unless both
//! sides share a thermal zone. Sub-surfaces follow their host. Every
//! validated link is sent to a [`NetworkEmitter`]; every defect lands in the
//! returned [`BuildReport`] instead of aborting the walk.
//!
//! ```
//! use airnet_model::{BoundaryCondition, BuildingModel, SurfaceType};
//! use airnet_network::{LoggingEmitter, SurfaceNetworkBuilder};
//!
//! let mut model = BuildingModel::new();
//! let zone = model.add_zone("Office");
//! let space = model.add_space("Office Space", Some(zone)).unwrap();
//! model
//!     .add_surface(
//!         "South Wall",
//!         SurfaceType::Wall,
//!         BoundaryCondition::Outdoors,
//!         Some(space),
//!         &[[0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 0.0, 3.0]],
//!     )
//!     .unwrap();
//!
//! let mut emitter = LoggingEmitter::new();
//! let report = SurfaceNetworkBuilder::new().build(&model, &mut emitter);
//! assert!(report.success());
//! assert_eq!(emitter.messages().len(), 1);
//! ```

pub mod builder;
pub mod classify;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod progress;
pub mod subsurface;
pub mod visited;

#[cfg(test)]
mod fixtures;

pub use builder::{BuildReport, BuildStats, SurfaceNetworkBuilder, PROGRESS_LABEL};
pub use classify::{classify, Disposition};
pub use diagnostics::{Diagnostics, LogLevel, LogMessage};
pub use emitter::{
    ExteriorLink, ExteriorSubLink, InteriorLink, InteriorSubLink, NetworkEmitter, NetworkRecord,
};
pub use error::{Defect, DefectKind};
pub use logging::LoggingEmitter;
pub use progress::{NullProgress, ProgressSink, TracingProgress};
pub use subsurface::{check_sub_surfaces, SubSurfaceOutcome};
pub use visited::VisitedSet;
