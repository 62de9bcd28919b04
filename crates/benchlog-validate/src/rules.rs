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

//! Validation rules

use crate::discrepancy::{Discrepancy, DiscrepancyKind};
use benchlog_core::{ExpectedConfiguration, Run};

/// Configuration for a single rule
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    pub enabled: bool,
    /// Whether to treat warnings as errors
    pub error: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            error: false,
        }
    }
}

/// Trait for validation rules
pub trait ValidationRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str;

    /// Compare one run with the expected configuration
    fn check(&self, run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy>;
}

/// Rule: grid dimensions
pub struct GridRule;

impl ValidationRule for GridRule {
    fn id(&self) -> &str {
        "grid"
    }

    fn description(&self) -> &str {
        "Grid width and height match the expected grid"
    }

    fn check(&self, run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
        if run.grid_width == expected.grid_width() && run.grid_height == expected.grid_height() {
            return Vec::new();
        }
        vec![Discrepancy::warning(
            DiscrepancyKind::GridMismatch,
            format!(
                "grid size mismatch - expected {}, got {}",
                expected.grid(),
                run.grid()
            ),
            self.id(),
        )
        .for_run(run)]
    }
}

/// Rule: timestep count
pub struct TimestepRule;

impl ValidationRule for TimestepRule {
    fn id(&self) -> &str {
        "timesteps"
    }

    fn description(&self) -> &str {
        "Timestep count matches the expected count"
    }

    fn check(&self, run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
        if run.timesteps == expected.timesteps() {
            return Vec::new();
        }
        vec![Discrepancy::warning(
            DiscrepancyKind::TimestepMismatch,
            format!(
                "timesteps mismatch - expected {}, got {}",
                expected.timesteps(),
                run.timesteps
            ),
            self.id(),
        )
        .for_run(run)]
    }
}

/// Rule: trait list
///
/// A count mismatch suppresses the positional checks, since positions no
/// longer line up.
pub struct TraitListRule;

impl ValidationRule for TraitListRule {
    fn id(&self) -> &str {
        "traits"
    }

    fn description(&self) -> &str {
        "Trait count, names and rules match the expected trait list"
    }

    fn check(&self, run: &Run, expected: &ExpectedConfiguration) -> Vec<Discrepancy> {
        let wanted = expected.traits();
        if run.traits.len() != wanted.len() {
            return vec![Discrepancy::warning(
                DiscrepancyKind::TraitCountMismatch,
                format!(
                    "trait count mismatch - expected {}, got {}",
                    wanted.len(),
                    run.traits.len()
                ),
                self.id(),
            )
            .for_run(run)];
        }

        let mut discrepancies = Vec::new();
        for (position, (parsed, exp)) in run.traits.iter().zip(wanted).enumerate() {
            if let Some(name) = exp.name() {
                if !exp.accepts_name(&parsed.name) {
                    discrepancies.push(
                        Discrepancy::warning(
                            DiscrepancyKind::TraitNameMismatch,
                            format!(
                                "trait {} name mismatch - expected '{}', got '{}' (declared as {})",
                                position, name, parsed.name, parsed.index
                            ),
                            self.id(),
                        )
                        .for_run(run),
                    );
                }
            }

            if !exp.allows_rule(&parsed.rule) {
                discrepancies.push(
                    Discrepancy::warning(
                        DiscrepancyKind::TraitRuleMismatch,
                        format!(
                            "trait {} ({}) rule mismatch - expected one of [{}], got '{}' (declared as {})",
                            position,
                            parsed.name,
                            exp.allowed_display(),
                            parsed.rule,
                            parsed.index
                        ),
                        self.id(),
                    )
                    .for_run(run),
                );
            }
        }
        discrepancies
    }
}

/// Built-in rules in reporting order.
pub(crate) fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(GridRule),
        Box::new(TimestepRule),
        Box::new(TraitListRule),
    ]
}
