// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Airnet - translate a building model into a CONTAM airflow network.
//!
//! Reads a model snapshot (JSON), runs the CONTAM translator and writes the
//! resulting index model as JSON.
//!
//! ```bash
//! airnet building.json -o network.json --airtightness Tight
//! airnet building.json --exterior-flow 120,0.65,50 --no-hvac > network.json
//! AIRNET_LOG=airnet_network=debug airnet building.json
//! ```
//!
//! Environment variables supply defaults (see [`config::Config`]); flags win.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use airnet_contam::{ContamTranslator, ExteriorFlow, Terrain, TranslatorOptions};
use airnet_model::BuildingModel;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "airnet")]
#[command(about = "Translate a building model into a CONTAM airflow network", long_about = None)]
struct Cli {
    /// Building model snapshot (JSON)
    model: PathBuf,

    /// Output file for the index model (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Airtightness grade: Leaky, Average or Tight
    #[arg(long, conflicts_with = "exterior_flow")]
    airtightness: Option<String>,

    /// Measured envelope leakage as FLOW,N,DP (m³/h, exponent, Pa)
    #[arg(long, value_parser = parse_exterior_flow)]
    exterior_flow: Option<ExteriorFlow>,

    /// Skip air handling systems
    #[arg(long)]
    no_hvac: bool,

    /// Return to supply flow ratio
    #[arg(long, allow_negative_numbers = true)]
    return_ratio: Option<f64>,

    /// Terrain: Country, Suburbs, City or Ocean
    #[arg(long, value_parser = parse_terrain)]
    terrain: Option<Terrain>,

    /// Write translation messages and network statistics (JSON) here
    #[arg(long)]
    diagnostics: Option<PathBuf>,
}

impl Cli {
    /// Translator options from `config` overridden by flags.
    fn options(&self, config: &Config) -> TranslatorOptions {
        let mut options = TranslatorOptions {
            translate_hvac: config.translate_hvac && !self.no_hvac,
            terrain: self.terrain.unwrap_or(config.terrain),
            ..TranslatorOptions::default()
        };
        options.set_return_supply_ratio(self.return_ratio.unwrap_or(config.return_ratio));
        match self.exterior_flow {
            Some(flow) => {
                options.set_exterior_flow_rate(flow.flow, flow.exponent, flow.delta_p);
            }
            None => options.set_airtightness_level(
                self.airtightness
                    .clone()
                    .unwrap_or_else(|| config.airtightness.clone()),
            ),
        }
        options
    }
}

fn parse_exterior_flow(value: &str) -> Result<ExteriorFlow, String> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number: {e}"))?;
    match parts.as_slice() {
        [flow, exponent, delta_p] => ExteriorFlow::new(*flow, *exponent, *delta_p)
            .ok_or_else(|| "flow, exponent and pressure must all be positive".to_string()),
        _ => Err("expected FLOW,N,DP".to_string()),
    }
}

fn parse_terrain(value: &str) -> Result<Terrain, String> {
    config::parse_terrain(value).ok_or_else(|| format!("unknown terrain '{value}'"))
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let text = fs::read_to_string(&cli.model)
        .with_context(|| format!("Failed to read {}", cli.model.display()))?;
    let model = BuildingModel::from_json(&text)
        .with_context(|| format!("Failed to load model from {}", cli.model.display()))?;

    let mut translator = ContamTranslator::with_options(cli.options(config));
    let result = translator.translate(&model);

    if let Some(path) = &cli.diagnostics {
        let report = serde_json::json!({
            "messages": translator.diagnostics(),
            "network": translator.network_stats(),
        });
        fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let index = result.context("Translation aborted")?;
    tracing::info!(
        levels = index.levels.len(),
        zones = index.zones.len(),
        paths = index.paths.len(),
        systems = index.systems.len(),
        warnings = translator.warnings().len(),
        "Network written"
    );

    let json = index.to_json()?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    tracing::debug!(model = %cli.model.display(), ?config, "Starting Airnet");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_vars(|_| None)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("airnet").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_come_from_config() {
        let options = cli(&["model.json"]).options(&config());
        assert_eq!(options, TranslatorOptions::default());
    }

    #[test]
    fn flags_override_config() {
        let mut config = config();
        config.airtightness = "Leaky".into();
        config.return_ratio = 0.5;

        let options = cli(&[
            "model.json",
            "--airtightness",
            "Tight",
            "--no-hvac",
            "--return-ratio",
            "-0.8",
            "--terrain",
            "ocean",
        ])
        .options(&config);
        assert_eq!(options.airtightness_level(), Some("Tight"));
        assert!(!options.translate_hvac);
        assert_eq!(options.return_supply_ratio, 0.8);
        assert_eq!(options.terrain, Terrain::Ocean);

        let options = cli(&["model.json"]).options(&config);
        assert_eq!(options.airtightness_level(), Some("Leaky"));
        assert_eq!(options.return_supply_ratio, 0.5);
    }

    #[test]
    fn exterior_flow_replaces_grade() {
        let parsed = cli(&["model.json", "--exterior-flow", "120, 0.65, 50", "-o", "out.json"]);
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
        let options = parsed.options(&config());
        assert!(options.airtightness_level().is_none());
        assert_eq!(options.exterior_flow().map(|f| f.flow), Some(120.0));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_exterior_flow("120,0.65").is_err());
        assert!(parse_exterior_flow("120,abc,50").is_err());
        assert!(parse_exterior_flow("120,0.65,0").is_err());
        assert!(parse_terrain("moon").is_err());

        let conflict = Cli::try_parse_from([
            "airnet",
            "model.json",
            "--airtightness",
            "Tight",
            "--exterior-flow",
            "1,1,1",
        ]);
        assert!(conflict.is_err());
    }
}
