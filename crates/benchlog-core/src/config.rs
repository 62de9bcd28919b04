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

//! Expected test configuration.
//!
//! The expected configuration is supplied by the caller and is never
//! derived from parsed data. Both types validate on construction.

use crate::error::{BenchlogError, BenchlogResult};

/// Expectation for one trait position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpectedTrait {
    name: Option<String>,
    allowed_rules: Vec<String>,
}

impl ExpectedTrait {
    /// Create an expectation. An absent or blank name accepts any name.
    ///
    /// Fails when no non-blank allowed rule is given.
    pub fn new<I, S>(name: Option<&str>, allowed_rules: I) -> BenchlogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_rules: Vec<String> = allowed_rules
            .into_iter()
            .map(|r| r.into().trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();

        if allowed_rules.is_empty() {
            return Err(BenchlogError::config(
                "expected trait must allow at least one rule",
            ));
        }

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            allowed_rules,
        })
    }

    /// Expectation accepting any trait name.
    pub fn any_name<I, S>(allowed_rules: I) -> BenchlogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(None, allowed_rules)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Allowed rules in their configured spelling.
    pub fn allowed_rules(&self) -> &[String] {
        &self.allowed_rules
    }

    /// Case-insensitive name check; always true when no name is expected.
    pub fn accepts_name(&self, name: &str) -> bool {
        match &self.name {
            Some(expected) => expected.to_lowercase() == name.to_lowercase(),
            None => true,
        }
    }

    /// Case-insensitive membership test against the allowed rules.
    pub fn allows_rule(&self, rule: &str) -> bool {
        let key = rule.trim().to_lowercase();
        self.allowed_rules.iter().any(|r| r.to_lowercase() == key)
    }

    /// Allowed rules as `a, b, c`.
    pub fn allowed_display(&self) -> String {
        self.allowed_rules.join(", ")
    }
}

/// The configuration every run is expected to have been measured with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpectedConfiguration {
    grid_width: u32,
    grid_height: u32,
    timesteps: u32,
    traits: Vec<ExpectedTrait>,
}

impl ExpectedConfiguration {
    /// Create a configuration, rejecting zero dimensions or timesteps.
    pub fn new(
        grid_width: u32,
        grid_height: u32,
        timesteps: u32,
        traits: Vec<ExpectedTrait>,
    ) -> BenchlogResult<Self> {
        if grid_width == 0 || grid_height == 0 {
            return Err(BenchlogError::config(format!(
                "grid dimensions must be positive, got {}x{}",
                grid_width, grid_height
            )));
        }
        if timesteps == 0 {
            return Err(BenchlogError::config("timestep count must be positive"));
        }
        Ok(Self {
            grid_width,
            grid_height,
            timesteps,
            traits,
        })
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn timesteps(&self) -> u32 {
        self.timesteps
    }

    /// Expected traits in positional order.
    pub fn traits(&self) -> &[ExpectedTrait] {
        &self.traits
    }

    /// Grid formatted as `WxH`.
    pub fn grid(&self) -> String {
        format!("{}x{}", self.grid_width, self.grid_height)
    }
}

impl Default for ExpectedConfiguration {
    /// 3000x3000 grid, 100 timesteps, one trait of any name running
    /// `conway` or `conway optimized`.
    fn default() -> Self {
        Self {
            grid_width: 3000,
            grid_height: 3000,
            timesteps: 100,
            traits: vec![ExpectedTrait {
                name: None,
                allowed_rules: vec!["conway".to_string(), "conway optimized".to_string()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_expected_trait_requires_rules() {
        let err = ExpectedTrait::any_name(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);

        let err = ExpectedTrait::any_name(["  ", ""]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_blank_name_means_any() {
        let t = ExpectedTrait::new(Some("   "), ["conway"]).unwrap();
        assert!(t.name().is_none());
        assert!(t.accepts_name("Whatever"));
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let t = ExpectedTrait::new(Some("Energy"), ["conway"]).unwrap();
        assert!(t.accepts_name("energy"));
        assert!(t.accepts_name("ENERGY"));
        assert!(!t.accepts_name("Charge"));
    }

    #[test]
    fn test_rule_match_is_case_insensitive() {
        let t = ExpectedTrait::any_name(["Conway", "conway optimized"]).unwrap();
        assert!(t.allows_rule("conway"));
        assert!(t.allows_rule("CONWAY OPTIMIZED"));
        assert!(!t.allows_rule("highlife"));
        assert_eq!(t.allowed_display(), "Conway, conway optimized");
    }

    #[test]
    fn test_configuration_rejects_zero_values() {
        assert!(ExpectedConfiguration::new(0, 10, 10, vec![]).is_err());
        assert!(ExpectedConfiguration::new(10, 0, 10, vec![]).is_err());
        assert!(ExpectedConfiguration::new(10, 10, 0, vec![]).is_err());
        assert!(ExpectedConfiguration::new(10, 10, 10, vec![]).is_ok());
    }

    #[test]
    fn test_default_configuration() {
        let config = ExpectedConfiguration::default();
        assert_eq!(config.grid(), "3000x3000");
        assert_eq!(config.timesteps(), 100);
        assert_eq!(config.traits().len(), 1);
        assert!(config.traits()[0].name().is_none());
        assert!(config.traits()[0].allows_rule("conway optimized"));
    }
}
