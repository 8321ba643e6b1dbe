// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translator defaults loaded from environment variables.

use airnet_contam::Terrain;

/// Defaults that command-line flags override.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Airtightness grade (`AIRNET_AIRTIGHTNESS`).
    pub airtightness: String,
    /// Create air handling systems from air loops (`AIRNET_TRANSLATE_HVAC`).
    pub translate_hvac: bool,
    /// Return to supply flow ratio (`AIRNET_RETURN_RATIO`).
    pub return_ratio: f64,
    /// Terrain around the building (`AIRNET_TERRAIN`).
    pub terrain: Terrain,
    /// Tracing filter directives (`AIRNET_LOG`, then `RUST_LOG`).
    pub log_filter: String,
    /// Emit logs as JSON lines (`AIRNET_LOG_JSON`).
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `var`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            airtightness: var("AIRNET_AIRTIGHTNESS").unwrap_or_else(|| "Average".into()),
            translate_hvac: var("AIRNET_TRANSLATE_HVAC")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            return_ratio: var("AIRNET_RETURN_RATIO")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(1.0),
            terrain: var("AIRNET_TERRAIN")
                .and_then(|v| parse_terrain(&v))
                .unwrap_or_default(),
            log_filter: var("AIRNET_LOG")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or_else(|| "info".into()),
            log_json: var("AIRNET_LOG_JSON")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a terrain name, ignoring case.
pub fn parse_terrain(value: &str) -> Option<Terrain> {
    match value.trim().to_ascii_lowercase().as_str() {
        "country" => Some(Terrain::Country),
        "suburbs" => Some(Terrain::Suburbs),
        "city" => Some(Terrain::City),
        "ocean" => Some(Terrain::Ocean),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);
        assert_eq!(config.airtightness, "Average");
        assert!(config.translate_hvac);
        assert_eq!(config.return_ratio, 1.0);
        assert_eq!(config.terrain, Terrain::Suburbs);
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn reads_variables() {
        let config = config(&[
            ("AIRNET_AIRTIGHTNESS", "Tight"),
            ("AIRNET_TRANSLATE_HVAC", "off"),
            ("AIRNET_RETURN_RATIO", " 0.85 "),
            ("AIRNET_TERRAIN", "CITY"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(config.airtightness, "Tight");
        assert!(!config.translate_hvac);
        assert_eq!(config.return_ratio, 0.85);
        assert_eq!(config.terrain, Terrain::City);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn own_log_variable_wins() {
        let config = config(&[("AIRNET_LOG", "airnet_network=trace"), ("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "airnet_network=trace");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config(&[
            ("AIRNET_TRANSLATE_HVAC", "maybe"),
            ("AIRNET_RETURN_RATIO", "lots"),
            ("AIRNET_TERRAIN", "moon"),
        ]);
        assert!(config.translate_hvac);
        assert_eq!(config.return_ratio, 1.0);
        assert_eq!(config.terrain, Terrain::Suburbs);
    }
}
