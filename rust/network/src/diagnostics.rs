// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Leveled message collector.
//!
//! Every message is stored for later inspection and also mirrored to
//! `tracing`, so an application with a subscriber installed sees the same
//! trail live.

use serde::Serialize;

use crate::error::Defect;

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the level as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

/// Ordered collection of messages recorded during one translation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    messages: Vec<LogMessage>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message at the given level.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
        self.messages.push(LogMessage { level, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Records a defect at its own level.
    pub fn record(&mut self, defect: &Defect) {
        self.log(defect.level(), defect.to_string());
    }

    /// All messages in recording order.
    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    /// Messages at exactly the Warn level.
    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == LogLevel::Warn)
            .collect()
    }

    /// Messages above the Warn level.
    pub fn errors(&self) -> Vec<&LogMessage> {
        self.messages
            .iter()
            .filter(|m| m.level > LogLevel::Warn)
            .collect()
    }

    /// `true` when nothing at Warn or above has been recorded.
    pub fn is_clean(&self) -> bool {
        self.messages.iter().all(|m| m.level < LogLevel::Warn)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops all recorded messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Appends another collector's messages without re-emitting them.
    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_by_level() {
        let mut diag = Diagnostics::new();
        diag.info("translated 4 zones");
        diag.warn("Unattached surface 'A'");
        diag.error("Unable to find adjacent surface for surface 'B'");
        diag.warn("Unattached space 'C'");

        assert_eq!(diag.len(), 4);
        assert_eq!(diag.warnings().len(), 2);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].message, "Unable to find adjacent surface for surface 'B'");
        assert!(!diag.is_clean());
    }

    #[test]
    fn info_only_is_clean() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_clean());
        diag.info("nothing to see");
        assert!(diag.is_clean());
        diag.clear();
        assert!(diag.is_empty());
    }

    #[test]
    fn extend_keeps_order() {
        let mut a = Diagnostics::new();
        a.info("first");
        let mut b = Diagnostics::new();
        b.warn("second");
        a.extend(b);

        let texts: Vec<_> = a.messages().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(!a.is_clean());
    }

    #[test]
    fn serializes_to_json() {
        let mut diag = Diagnostics::new();
        diag.warn("w");
        let json = serde_json::to_string(&diag).unwrap();
        assert_eq!(json, r#"{"messages":[{"level":"Warn","message":"w"}]}"#);
    }
}
