// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Progress reporting.

/// Receives synchronous progress updates. Both methods default to no-ops.
pub trait ProgressSink {
    /// Starts a new phase with `range` steps.
    fn init(&mut self, _range: usize, _label: &str) {}

    /// Reports the number of steps completed in the current phase.
    fn set_value(&mut self, _value: usize) {}
}

/// Discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}

impl<P: ProgressSink + ?Sized> ProgressSink for &mut P {
    fn init(&mut self, range: usize, label: &str) {
        (**self).init(range, label);
    }

    fn set_value(&mut self, value: usize) {
        (**self).set_value(value);
    }
}

/// Reports progress as `tracing` debug events, one per tenth of the range.
#[derive(Debug, Clone, Default)]
pub struct TracingProgress {
    label: String,
    range: usize,
    last_decile: usize,
}

impl ProgressSink for TracingProgress {
    fn init(&mut self, range: usize, label: &str) {
        self.label = label.to_string();
        self.range = range;
        self.last_decile = 0;
        tracing::debug!(phase = %self.label, steps = range, "progress started");
    }

    fn set_value(&mut self, value: usize) {
        if self.range == 0 {
            return;
        }
        let decile = value.min(self.range) * 10 / self.range;
        if decile > self.last_decile {
            self.last_decile = decile;
            tracing::debug!(phase = %self.label, value, steps = self.range, "progress");
        }
    }
}
