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

//! The report model shared by every output format.

use benchlog_core::ExpectedConfiguration;
use benchlog_stats::Metrics;
use benchlog_validate::{Discrepancy, Severity};
use serde::Serialize;

/// Everything a reporter needs to render one analysed log.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Document title
    pub title: String,
    /// Input file the log was read from, if any
    pub source: Option<String>,
    /// Generation date as shown in the document
    pub generated: String,
    /// Configuration the runs were checked against
    pub expected: ExpectedConfiguration,
    /// Derived performance figures
    pub metrics: Metrics,
    /// Parse failures and configuration mismatches, in report order
    pub discrepancies: Vec<Discrepancy>,
}

impl Report {
    /// Create a report dated today.
    pub fn new(
        title: impl Into<String>,
        expected: ExpectedConfiguration,
        metrics: Metrics,
        discrepancies: Vec<Discrepancy>,
    ) -> Self {
        Self {
            title: title.into(),
            source: None,
            generated: chrono::Local::now().format("%B %d, %Y").to_string(),
            expected,
            metrics,
            discrepancies,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Override the generation date.
    pub fn with_generated(mut self, generated: impl Into<String>) -> Self {
        self.generated = generated.into();
        self
    }

    /// True when no discrepancy of any severity was recorded.
    pub fn conforms(&self) -> bool {
        self.discrepancies.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_test::library_series;
    use benchlog_validate::DiscrepancyKind;

    #[test]
    fn test_report_builders() {
        let report = Report::new(
            "Bench",
            ExpectedConfiguration::default(),
            Metrics::compute(&library_series(&[10.0, 5.0])),
            Vec::new(),
        )
        .with_source("bench.log")
        .with_generated("June 01, 2024");

        assert_eq!(report.title, "Bench");
        assert_eq!(report.source.as_deref(), Some("bench.log"));
        assert_eq!(report.generated, "June 01, 2024");
        assert!(report.conforms());
        assert_eq!(report.count(Severity::Warning), 0);
    }

    #[test]
    fn test_report_counts_by_severity() {
        let discrepancies = vec![
            Discrepancy::warning(DiscrepancyKind::GridMismatch, "grid size mismatch", "grid"),
            Discrepancy::warning(
                DiscrepancyKind::TimestepMismatch,
                "timesteps mismatch",
                "timesteps",
            ),
            Discrepancy::error(
                DiscrepancyKind::UnparsableBlock,
                "could not parse grid/timesteps",
                "block-fields",
            ),
        ];
        let report = Report::new(
            "Bench",
            ExpectedConfiguration::default(),
            Metrics::compute(&[]),
            discrepancies,
        );

        assert!(!report.conforms());
        assert_eq!(report.count(Severity::Warning), 2);
        assert_eq!(report.count(Severity::Error), 1);
        assert_eq!(report.count(Severity::Hint), 0);
    }
}
