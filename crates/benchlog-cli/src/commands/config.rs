// Dweve Benchlog - Benchmark Log Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Expected-configuration loading.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! a YAML or JSON `--config` file, then command-line flags.

use crate::cli::ConfigArgs;
use crate::error::CliError;
use benchlog::{ExpectedConfiguration, ExpectedTrait, ParseOptions};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// On-disk configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub grid_width: Option<u32>,
    pub grid_height: Option<u32>,
    pub timesteps: Option<u32>,
    pub traits: Option<Vec<TraitSpec>>,
    pub library_tag: Option<String>,
    pub combined_tag: Option<String>,
}

/// One expected trait in a configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraitSpec {
    #[serde(default)]
    pub name: Option<String>,
    pub allowed_rules: Vec<String>,
}

impl ConfigFile {
    /// Parse by extension: `.json` as JSON, anything else as YAML.
    pub fn from_str_for(path: &Path, content: &str) -> Result<Self, CliError> {
        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    pub fn load(path: &str) -> Result<Self, CliError> {
        let content = super::read_file(path)?;
        Self::from_str_for(Path::new(path), &content)
    }
}

/// Resolved settings for one command run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub expected: ExpectedConfiguration,
    pub options: ParseOptions,
}

/// Parse a `WIDTHxHEIGHT` grid argument.
pub fn parse_grid(value: &str) -> Result<(u32, u32), CliError> {
    let invalid =
        || CliError::invalid_input(format!("grid must look like 3000x3000, got '{}'", value));
    let (w, h) = value
        .trim()
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;
    let w = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let h = h.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((w, h))
}

/// Merge defaults, the optional config file and flag overrides.
pub fn load_settings(args: &ConfigArgs) -> Result<Settings, CliError> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    resolve(file, args)
}

fn resolve(file: ConfigFile, args: &ConfigArgs) -> Result<Settings, CliError> {
    let defaults = ExpectedConfiguration::default();

    let (mut width, mut height) = (
        file.grid_width.unwrap_or(defaults.grid_width()),
        file.grid_height.unwrap_or(defaults.grid_height()),
    );
    if let Some(grid) = &args.grid {
        (width, height) = parse_grid(grid)?;
    }
    let timesteps = args
        .timesteps
        .or(file.timesteps)
        .unwrap_or(defaults.timesteps());

    let traits = match file.traits {
        Some(specs) => specs
            .iter()
            .map(|s| ExpectedTrait::new(s.name.as_deref(), s.allowed_rules.iter()))
            .collect::<Result<Vec<_>, _>>()?,
        None => defaults.traits().to_vec(),
    };

    let expected = ExpectedConfiguration::new(width, height, timesteps, traits)?;

    let mut builder = ParseOptions::builder();
    if let Some(tag) = args.library_tag.clone().or(file.library_tag) {
        builder = builder.library_tag(tag);
    }
    if let Some(tag) = args.combined_tag.clone().or(file.combined_tag) {
        builder = builder.combined_tag(tag);
    }
    let options = builder.build();
    if options.markers.library_tag == options.markers.combined_tag {
        return Err(CliError::config("library and combined tags must differ"));
    }

    debug!(grid = %expected.grid(), timesteps = expected.timesteps(), "expected configuration");
    Ok(Settings { expected, options })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ConfigArgs {
        ConfigArgs::default()
    }

    #[test]
    fn test_defaults() {
        let settings = load_settings(&args()).unwrap();
        assert_eq!(settings.expected, ExpectedConfiguration::default());
        assert_eq!(settings.options.markers.library_tag, "trait_ac");
    }

    #[test]
    fn test_parse_grid() {
        assert_eq!(parse_grid("3000x3000").unwrap(), (3000, 3000));
        assert_eq!(parse_grid(" 640X480 ").unwrap(), (640, 480));
        assert!(parse_grid("3000").is_err());
        assert!(parse_grid("ax3").is_err());
        assert!(parse_grid("-1x3").is_err());
    }

    #[test]
    fn test_yaml_config_file() {
        let yaml = "grid_width: 100\ngrid_height: 50\ntimesteps: 7\ntraits:\n  - name: Life\n    allowed_rules: [highlife]\n";
        let file = ConfigFile::from_str_for(Path::new("c.yaml"), yaml).unwrap();
        let settings = resolve(file, &args()).unwrap();
        assert_eq!(settings.expected.grid(), "100x50");
        assert_eq!(settings.expected.timesteps(), 7);
        assert_eq!(settings.expected.traits()[0].name(), Some("Life"));
    }

    #[test]
    fn test_json_config_file() {
        let json = r#"{"timesteps": 20, "library_tag": "core", "combined_tag": "core_gui"}"#;
        let file = ConfigFile::from_str_for(Path::new("c.JSON"), json).unwrap();
        let settings = resolve(file, &args()).unwrap();
        assert_eq!(settings.expected.timesteps(), 20);
        assert_eq!(settings.expected.grid(), "3000x3000");
        assert_eq!(settings.options.markers.combined_tag, "core_gui");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConfigFile::from_str_for(Path::new("c.yaml"), "grid: 3\n").unwrap_err();
        assert!(matches!(err, CliError::YamlFormat { .. }));
    }

    #[test]
    fn test_flags_override_file() {
        let file = ConfigFile {
            grid_width: Some(10),
            grid_height: Some(10),
            timesteps: Some(5),
            ..Default::default()
        };
        let overrides = ConfigArgs {
            grid: Some("20x30".to_string()),
            timesteps: Some(9),
            ..Default::default()
        };
        let settings = resolve(file, &overrides).unwrap();
        assert_eq!(settings.expected.grid(), "20x30");
        assert_eq!(settings.expected.timesteps(), 9);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = ConfigArgs {
            timesteps: Some(0),
            ..Default::default()
        };
        assert!(matches!(resolve(ConfigFile::default(), &zero), Err(CliError::Config(_))));

        let empty_rules = ConfigFile {
            traits: Some(vec![TraitSpec {
                name: None,
                allowed_rules: vec![],
            }]),
            ..Default::default()
        };
        assert!(matches!(resolve(empty_rules, &args()), Err(CliError::Config(_))));

        let same_tags = ConfigArgs {
            library_tag: Some("x".to_string()),
            combined_tag: Some("x".to_string()),
            ..Default::default()
        };
        assert!(matches!(resolve(ConfigFile::default(), &same_tags), Err(CliError::Config(_))));
    }
}
