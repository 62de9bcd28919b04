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

//! Validator runner

use crate::discrepancy::{Discrepancy, DiscrepancyKind, Severity};
use crate::rules::{default_rules, RuleConfig, ValidationRule};
use benchlog_core::{ExpectedConfiguration, Run};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Maximum number of discrepancies collected in one pass.
const MAX_DISCREPANCIES: usize = 10_000;

/// Invalid validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("empty rule ID not allowed")]
    EmptyRuleId,
    #[error("unknown rule ID '{0}'")]
    UnknownRule(String),
    #[error("discrepancy limit must be positive")]
    ZeroLimit,
}

/// Configuration for the validator
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Rule configurations by rule ID
    pub rules: HashMap<String, RuleConfig>,
    /// Minimum severity to report
    pub min_severity: Severity,
    /// Maximum number of discrepancies to collect (default: 10,000)
    pub max_discrepancies: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            min_severity: Severity::Hint,
            max_discrepancies: MAX_DISCREPANCIES,
        }
    }
}

impl ValidatorConfig {
    /// Check rule IDs against the built-in rules and the limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_discrepancies == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        let known: Vec<String> = default_rules().iter().map(|r| r.id().to_string()).collect();
        for id in self.rules.keys() {
            if id.is_empty() {
                return Err(ConfigError::EmptyRuleId);
            }
            if !known.contains(id) {
                return Err(ConfigError::UnknownRule(id.clone()));
            }
        }
        Ok(())
    }

    /// Disable a specific rule
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: false,
                error: false,
            },
        );
    }

    /// Enable a specific rule
    pub fn enable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: false,
            },
        );
    }

    /// Set a rule to error level
    pub fn set_rule_error(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: true,
            },
        );
    }
}

/// Runs every enabled rule against runs.
pub struct Validator {
    config: ValidatorConfig,
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create a validator with the built-in rules
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Discrepancies of a single run, in rule order.
    pub fn check(&self, run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
        let mut found = Vec::new();
        for rule in &self.rules {
            let rule_config = self.config.rules.get(rule.id()).cloned().unwrap_or_default();
            if !rule_config.enabled {
                continue;
            }
            for mut d in rule.check(run, expected) {
                if rule_config.error && d.severity() == Severity::Warning {
                    d.escalate_to_error();
                }
                if d.severity() >= self.config.min_severity {
                    found.push(d);
                }
            }
        }
        found
    }

    /// Discrepancies of many runs, ordered by version then project.
    ///
    /// Collection stops at `max_discrepancies`; a final warning records the
    /// truncation.
    pub fn check_all(&self, runs: &[Run], expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
        let mut ordered: Vec<&Run> = runs.iter().collect();
        ordered.sort_by_key(|r| (r.version, r.project));

        let mut discrepancies = Vec::new();
        let mut limit_exceeded = false;

        'runs: for run in ordered {
            for d in self.check(run, expected) {
                if discrepancies.len() >= self.config.max_discrepancies {
                    limit_exceeded = true;
                    break 'runs;
                }
                discrepancies.push(d);
            }
        }

        if limit_exceeded {
            warn!(limit = self.config.max_discrepancies, "discrepancy limit reached");
            discrepancies.push(Discrepancy::warning(
                DiscrepancyKind::Custom("discrepancy-limit-exceeded".to_string()),
                format!(
                    "discrepancy limit of {} exceeded, further discrepancies suppressed",
                    self.config.max_discrepancies
                ),
                "validator",
            ));
        }

        discrepancies
    }

    /// Check if any errors were found
    pub fn has_errors(&self, discrepancies: &[Discrepancy]) -> bool {
        discrepancies.iter().any(|d| d.severity() == Severity::Error)
    }
}
