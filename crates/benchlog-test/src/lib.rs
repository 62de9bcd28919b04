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

//! Shared test fixtures for benchlog crates.
//!
//! ```rust
//! use benchlog_test::fixtures::{self, builders::{LogBuilder, SectionBuilder, VersionBuilder}};
//!
//! // Canned logs
//! let log = fixtures::three_versions();
//!
//! // Custom logs
//! let log = LogBuilder::new()
//!     .version(
//!         VersionBuilder::new(1)
//!             .section(SectionBuilder::library().millis(1500.0))
//!             .section(SectionBuilder::combined().no_cells_per_sec()),
//!     )
//!     .build();
//! assert!(log.contains("Execution time: 1500ms"));
//! ```

pub mod fixtures;

pub use fixtures::builders::{paired_log, LogBuilder, SectionBuilder, VersionBuilder};
pub use fixtures::runs::{combined_series, library_series, run};

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_core::{parse, FailureCategory, ProjectTag};

    #[test]
    fn test_all_samples_parse() {
        for (name, log) in fixtures::all() {
            let outcome = parse(&log).unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert!(!outcome.runs.is_empty(), "{} produced no runs", name);
        }
    }

    #[test]
    fn test_three_versions_shape() {
        let outcome = parse(&fixtures::three_versions()).unwrap();
        assert!(outcome.is_clean());
        let lib: Vec<f64> = outcome
            .series(ProjectTag::Library)
            .iter()
            .map(|r| r.execution_time)
            .collect();
        assert_eq!(lib, vec![10.0, 5.0, 2.5]);
    }

    #[test]
    fn test_with_gaps_shape() {
        let outcome = parse(&fixtures::with_gaps()).unwrap();
        assert_eq!(outcome.series(ProjectTag::Library).len(), 1);
        assert_eq!(outcome.series(ProjectTag::Combined).len(), 3);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].category, FailureCategory::PerformanceMetrics);
    }

    #[test]
    fn test_single_failure_logs_keep_one_run() {
        for (name, log) in fixtures::errors::single_failure_logs() {
            let outcome = parse(&log).unwrap();
            assert_eq!(outcome.runs.len(), 1, "{}", name);
            assert_eq!(outcome.failures.len(), 1, "{}", name);
        }
    }

    #[test]
    fn test_run_helper() {
        let r = run(2, ProjectTag::Combined, 4.0);
        assert_eq!(r.version, 2);
        assert_eq!(r.execution_time, 4.0);
        assert_eq!(library_series(&[1.0, 2.0]).len(), 2);
    }
}
