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

//! Validate command - configuration checks for every run

use super::{load_settings, read_file};
use crate::cli::ConfigArgs;
use crate::error::CliError;
use benchlog::validate::Severity;
use benchlog::{analyze_with, validate::ValidatorConfig};
use colored::Colorize;

/// Check every run in `file` against the expected configuration.
///
/// # Output
///
/// **Text format**: one colored line per discrepancy and a summary.
///
/// **JSON format**: `{ file, runs, failures, discrepancies: [...] }`.
///
/// # Errors
///
/// Returns `Err` if any discrepancy has error severity (a block that could
/// not be parsed), or any warning when `warn_error` is set.
pub fn validate(
    file: &str,
    format: &str,
    warn_error: bool,
    config: &ConfigArgs,
) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let content = read_file(file)?;

    let mut validator_config = ValidatorConfig::default();
    if warn_error {
        for rule in ["grid", "timesteps", "traits"] {
            validator_config.set_rule_error(rule);
        }
    }

    let analysis = analyze_with(
        &content,
        &settings.options,
        &settings.expected,
        validator_config,
    )?;
    let discrepancies = &analysis.discrepancies;

    match format {
        "json" => {
            let json = serde_json::json!({
                "file": file,
                "runs": analysis.outcome.runs.len(),
                "failures": analysis.outcome.failures.len(),
                "discrepancies": discrepancies,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if discrepancies.is_empty() {
                println!(
                    "{} {} - {} runs, all conform to grid {}, {} timesteps",
                    "✓".green().bold(),
                    file,
                    analysis.outcome.runs.len(),
                    settings.expected.grid(),
                    settings.expected.timesteps()
                );
            } else {
                println!(
                    "{} {} - {} issue(s) found:",
                    "!".yellow().bold(),
                    file,
                    discrepancies.len()
                );
                for d in discrepancies {
                    let severity_str = match d.severity() {
                        Severity::Error => "error".red(),
                        Severity::Warning => "warning".yellow(),
                        Severity::Hint => "hint".blue(),
                    };
                    let line = d.line().map(|l| format!("line {}: ", l)).unwrap_or_default();
                    let subject = d.subject();
                    let subject = if subject.is_empty() {
                        subject
                    } else {
                        format!("{}: ", subject)
                    };
                    println!(
                        "  {}[{}] {}: {}{}",
                        line,
                        d.rule_id().dimmed(),
                        severity_str,
                        subject,
                        d.message()
                    );
                }
            }
        }
    }

    let errors = discrepancies
        .iter()
        .filter(|d| d.severity() == Severity::Error)
        .count();
    let warnings = discrepancies
        .iter()
        .filter(|d| d.severity() == Severity::Warning)
        .count();

    if errors > 0 || (warn_error && warnings > 0) {
        return Err(CliError::ValidationFailed { errors, warnings });
    }
    Ok(())
}
