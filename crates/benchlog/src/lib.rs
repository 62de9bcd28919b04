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

//! # Benchlog
//!
//! Parse benchmark logs produced by a version-by-version optimisation
//! campaign, check every run against the configuration it was supposed to
//! use, and derive speedups and UI overhead figures.
//!
//! ## Quick Start
//!
//! ```rust
//! use benchlog::{analyze, ExpectedConfiguration, ProjectTag};
//!
//! let log = benchlog_test::paired_log(&[(10.0, 15.0), (5.0, 8.0)]);
//! let analysis = analyze(&log, &ExpectedConfiguration::default()).unwrap();
//!
//! assert!(analysis.conforms());
//! let library = analysis.metrics.series(ProjectTag::Library);
//! assert_eq!(library.summary().unwrap().total.ratio(), 2.0);
//! ```
//!
//! ## Crates
//!
//! - `benchlog-core`: block extraction and field parsing
//! - `benchlog-validate`: configuration checks, re-exported as [`validate`]
//! - `benchlog-stats`: derived metrics, re-exported as [`stats`]
//! - `benchlog-report`: console, LaTeX and JSON output, re-exported as [`report`]

pub use benchlog_core::{
    extract, parse_with_options, BenchlogError, BenchlogResult, CommitInfo, ErrorKind,
    ExpectedConfiguration, ExpectedTrait, FailureCategory, Limits, Markers, ParseFailure,
    ParseOptions, ParseOptionsBuilder, ParseOutcome, ParsedTrait, ProjectTag, Run,
};

pub mod validate {
    //! Configuration checks
    pub use benchlog_validate::{
        failure_discrepancies, validate, validate_all, validate_outcome,
        validate_outcome_with_config, validate_with_config, ConfigError, Discrepancy,
        DiscrepancyKind, GridRule, RuleConfig, Severity, TimestepRule, TraitListRule,
        ValidationRule, Validator, ValidatorConfig,
    };
}

pub mod stats {
    //! Derived performance figures
    pub use benchlog_stats::{
        version_history, CrossReferenceGap, HistoryEntry, Metrics, OverheadBreakdown,
        OverheadPoint, OverheadSummary, Overview, Relative, Series, SeriesPoint, SeriesSummary,
        Throughput,
    };
}

pub mod report {
    //! Report rendering
    pub use benchlog_report::{
        console, default_output_path, export_json, export_latex, json, latex, Report,
    };
}

use benchlog_report::Report;
use benchlog_stats::Metrics;
use benchlog_validate::{Discrepancy, Severity, ValidatorConfig};
use tracing::debug;

/// Result of running the whole pipeline over one log.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Parsed runs and rejected blocks
    pub outcome: ParseOutcome,
    /// Rejected blocks followed by configuration mismatches
    pub discrepancies: Vec<Discrepancy>,
    /// Derived performance figures
    pub metrics: Metrics,
}

impl Analysis {
    /// True when every block parsed and every run matched the configuration.
    pub fn conforms(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// True when any discrepancy has error severity.
    pub fn has_errors(&self) -> bool {
        self.discrepancies
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    /// Bundle the analysis into a renderable report.
    pub fn into_report(self, title: impl Into<String>, expected: ExpectedConfiguration) -> Report {
        Report::new(title, expected, self.metrics, self.discrepancies)
    }
}

/// Parse `text`, check it against `expected` and compute metrics.
///
/// # Errors
///
/// Returns an error for empty input or input over the default size limit.
/// Malformed blocks are not errors; they appear in
/// [`Analysis::discrepancies`].
pub fn analyze(text: &str, expected: &ExpectedConfiguration) -> BenchlogResult<Analysis> {
    analyze_with(
        text,
        &ParseOptions::default(),
        expected,
        ValidatorConfig::default(),
    )
}

/// [`analyze`] with explicit parse options and validator configuration.
pub fn analyze_with(
    text: &str,
    options: &ParseOptions,
    expected: &ExpectedConfiguration,
    config: ValidatorConfig,
) -> BenchlogResult<Analysis> {
    config
        .validate()
        .map_err(|e| BenchlogError::config(e.to_string()))?;

    let outcome = parse_with_options(text, options)?;
    let discrepancies = benchlog_validate::validate_outcome_with_config(&outcome, expected, config);
    let metrics = Metrics::compute(&outcome.runs);

    debug!(
        runs = outcome.runs.len(),
        failures = outcome.failures.len(),
        discrepancies = discrepancies.len(),
        "analysis complete"
    );

    Ok(Analysis {
        outcome,
        discrepancies,
        metrics,
    })
}

/// Parse a log with default options.
#[inline]
pub fn parse(text: &str) -> BenchlogResult<ParseOutcome> {
    benchlog_core::parse(text)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_test::fixtures;

    #[test]
    fn test_analyze_clean_log() {
        let analysis = analyze(&fixtures::three_versions(), &ExpectedConfiguration::default()).unwrap();
        assert!(analysis.conforms());
        assert!(!analysis.has_errors());
        assert_eq!(analysis.outcome.runs.len(), 6);
        assert_eq!(analysis.metrics.library.len(), 3);
    }

    #[test]
    fn test_analyze_misconfigured_log() {
        let analysis = analyze(&fixtures::misconfigured(), &ExpectedConfiguration::default()).unwrap();
        assert!(!analysis.conforms());
        assert!(!analysis.has_errors());
    }

    #[test]
    fn test_analyze_rejected_block_is_error() {
        let analysis = analyze(&fixtures::with_gaps(), &ExpectedConfiguration::default()).unwrap();
        assert!(analysis.has_errors());
    }

    #[test]
    fn test_analyze_empty_input() {
        let err = analyze("  \n", &ExpectedConfiguration::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyInput);
    }

    #[test]
    fn test_analyze_rejects_invalid_validator_config() {
        let mut config = ValidatorConfig::default();
        config.max_discrepancies = 0;
        let err = analyze_with(
            &fixtures::three_versions(),
            &ParseOptions::default(),
            &ExpectedConfiguration::default(),
            config,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_into_report() {
        let expected = ExpectedConfiguration::default();
        let analysis = analyze(&fixtures::single_version(), &expected).unwrap();
        let report = analysis.into_report("Single", expected);
        assert_eq!(report.title, "Single");
        assert!(report.conforms());
    }
}
