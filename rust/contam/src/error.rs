// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for airflow network translation.
//!
//! Every variant aborts a translation. Problems that only degrade the result
//! are recorded as diagnostics instead.

/// Result type alias for translation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a translation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The configured leakage could not be mapped to airflow elements.
    #[error("Application of {0} failed.")]
    ElementsUnavailable(&'static str),

    /// A story has no nominal elevation.
    #[error("Story '{0}' has no elevation, translation aborted")]
    StoryWithoutElevation(String),

    /// A story has no nominal floor-to-floor height.
    #[error("Story '{0}' has no nominal floor-to-floor height, translation aborted")]
    StoryWithoutHeight(String),

    /// The model has no stories, so no levels can be created.
    #[error("Failed to find building stories in model, translation aborted")]
    NoStories,

    /// None of a zone's spaces is assigned to a story.
    #[error("Unable to set level for zone '{0}', translation aborted")]
    ZoneWithoutLevel(String),

    /// JSON output failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
