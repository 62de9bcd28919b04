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

//! Run Validation
//!
//! Compares parsed runs with the expected test configuration. Validation
//! never rejects a run: every finding is a [`Discrepancy`] reported
//! alongside the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use benchlog_core::{parse, ExpectedConfiguration};
//! use benchlog_validate::validate_outcome;
//!
//! let log = "\
//! ==================== CODE VERSION 1 ====================
//! ========== BENCHMARK trait_ac | VERSION 1 ==========
//! Grid: 1000x1000
//! Timesteps: 100
//! 0: Life (rule: conway)
//! Execution time: 1.2s
//! Performance: 83.3 timesteps/sec
//! Cells/sec: 83.3M
//! ";
//!
//! let outcome = parse(log).unwrap();
//! let found = validate_outcome(&outcome, &ExpectedConfiguration::default());
//! assert_eq!(found.len(), 1);
//! assert!(found[0].message().contains("expected 3000x3000, got 1000x1000"));
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use benchlog_validate::{validate_with_config, Severity, ValidatorConfig};
//! use benchlog_core::ExpectedConfiguration;
//!
//! let mut config = ValidatorConfig::default();
//! config.disable_rule("timesteps");
//! config.set_rule_error("traits");
//! config.min_severity = Severity::Warning;
//!
//! let found = validate_with_config(&[], &ExpectedConfiguration::default(), config);
//! assert!(found.is_empty());
//! ```

mod discrepancy;
mod rules;
mod runner;

pub use discrepancy::{Discrepancy, DiscrepancyKind, Severity};
pub use rules::{GridRule, RuleConfig, TimestepRule, TraitListRule, ValidationRule};
pub use runner::{ConfigError, Validator, ValidatorConfig};

use benchlog_core::{ExpectedConfiguration, ParseFailure, ParseOutcome, Run};

/// Check one run with the built-in rules.
pub fn validate(run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
    Validator::new(ValidatorConfig::default()).check(run, expected)
}

/// Check many runs with the built-in rules.
pub fn validate_all(runs: &[Run], expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
    Validator::new(ValidatorConfig::default()).check_all(runs, expected)
}

/// Check many runs with a custom configuration.
pub fn validate_with_config(
    runs: &[Run],
    expected: &ExpectedConfiguration,
    config: ValidatorConfig,
) -> Vec<Discrepancy> {
    Validator::new(config).check_all(runs, expected)
}

/// Rejected blocks as error-level discrepancies.
pub fn failure_discrepancies(failures: &[ParseFailure]) -> Vec<Discrepancy> {
    failures.iter().map(Discrepancy::from_failure).collect()
}

/// Rejected blocks followed by run discrepancies, as one list.
pub fn validate_outcome(outcome: &ParseOutcome, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
    validate_outcome_with_config(outcome, expected, ValidatorConfig::default())
}

/// [`validate_outcome`] with a custom configuration.
pub fn validate_outcome_with_config(
    outcome: &ParseOutcome,
    expected: &ExpectedConfiguration,
    config: ValidatorConfig,
) -> Vec<Discrepancy> {
    let mut all = failure_discrepancies(&outcome.failures);
    all.extend(validate_with_config(&outcome.runs, expected, config));
    all
}
