// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surfaces already consumed as the far side of a matched pair.

use airnet_model::SurfaceKey;
use rustc_hash::FxHashSet;

/// Set of surfaces that were claimed as the adjacent side of a pair whose
/// primary side has already been processed. Lives for one build.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    consumed: FxHashSet<SurfaceKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a surface as consumed. Returns `false` if it already was.
    pub fn mark_consumed(&mut self, surface: SurfaceKey) -> bool {
        self.consumed.insert(surface)
    }

    pub fn is_consumed(&self, surface: SurfaceKey) -> bool {
        self.consumed.contains(&surface)
    }

    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
