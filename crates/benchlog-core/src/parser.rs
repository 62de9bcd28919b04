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

//! Parsing pipeline: text in, runs and failures out.
//!
//! [`parse`] extracts every project section, parses its fields and returns
//! the accepted [`Run`]s together with one [`ParseFailure`] per rejected
//! block. Only environment problems (empty or oversized input) are errors.
//!
//! A block is rejected for the first missing category, checked in order:
//!
//! 1. grid and timestep count
//! 2. at least one trait declaration
//! 3. execution time (positive), timesteps/sec and cells/sec
//!
//! Commit metadata comes from the version preamble and is best effort.

use crate::error::{BenchlogError, BenchlogResult};
use crate::extract::{extract, SectionBlock};
use crate::failure::{FailureCategory, ParseFailure};
use crate::fields::{parse_commit, scan_fields};
use crate::limits::Limits;
use crate::model::{CommitInfo, ProjectTag, Run};
use crate::scan::Markers;
use tracing::debug;

/// Parsing options: boundary markers and resource limits.
///
/// ```text
/// let opts = ParseOptions::builder()
///     .library_tag("core")
///     .combined_tag("core_ui")
///     .max_blocks(500)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub markers: Markers,
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    markers: Markers,
    limits: Limits,
}

impl ParseOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn library_tag(mut self, tag: impl Into<String>) -> Self {
        self.markers.library_tag = tag.into();
        self
    }

    pub fn combined_tag(mut self, tag: impl Into<String>) -> Self {
        self.markers.combined_tag = tag.into();
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    pub fn max_blocks(mut self, blocks: usize) -> Self {
        self.limits.max_blocks = blocks;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            markers: self.markers,
            limits: self.limits,
        }
    }
}

/// Accepted runs and per-block failures from one pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutcome {
    /// Runs in source order.
    pub runs: Vec<Run>,
    /// Rejected blocks ordered by line.
    pub failures: Vec<ParseFailure>,
}

impl ParseOutcome {
    /// Runs of one project ordered by version ascending.
    ///
    /// Runs sharing a version keep their source order.
    pub fn series(&self, project: ProjectTag) -> Vec<&Run> {
        let mut runs: Vec<&Run> = self.runs.iter().filter(|r| r.project == project).collect();
        runs.sort_by_key(|r| r.version);
        runs
    }

    /// Distinct version ids seen in accepted runs, ascending.
    pub fn versions(&self) -> Vec<u32> {
        let mut versions: Vec<u32> = self.runs.iter().map(|r| r.version).collect();
        versions.sort_unstable();
        versions.dedup();
        versions
    }

    /// True when every extracted block produced a run.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse a benchmark log with default options.
pub fn parse(text: &str) -> BenchlogResult<ParseOutcome> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse a benchmark log with custom options.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> BenchlogResult<ParseOutcome> {
    if text.len() > options.limits.max_input_size {
        return Err(BenchlogError::security(format!(
            "input is {} bytes, limit is {} bytes",
            text.len(),
            options.limits.max_input_size
        )));
    }
    if text.trim().is_empty() {
        return Err(BenchlogError::empty_input("benchmark log is empty"));
    }

    let extraction = extract(text, &options.markers, &options.limits);
    let mut failures = extraction.failures.clone();
    let mut runs = Vec::with_capacity(extraction.section_count());

    for version in &extraction.versions {
        let commit = parse_commit(version.preamble);
        for section in &version.sections {
            match build_run(section, &commit) {
                Ok(run) => {
                    debug!(
                        version = run.version,
                        project = %run.project,
                        seconds = run.execution_time,
                        "accepted run"
                    );
                    runs.push(run);
                }
                Err(failure) => {
                    debug!(%failure, "rejected block");
                    failures.push(failure);
                }
            }
        }
    }

    failures.sort_by_key(|f| f.line);
    Ok(ParseOutcome { runs, failures })
}

fn build_run(section: &SectionBlock<'_>, commit: &CommitInfo) -> Result<Run, ParseFailure> {
    let fields = scan_fields(section.body);
    let reject = |category: FailureCategory, missing: Vec<&str>| {
        ParseFailure::new(category, section.line)
            .with_version(section.version)
            .with_project(section.project)
            .with_missing(missing)
    };

    let (grid, timesteps) = match (fields.grid, fields.timesteps) {
        (Some(grid), Some(timesteps)) => (grid, timesteps),
        (grid, timesteps) => {
            let mut missing = Vec::new();
            if grid.is_none() {
                missing.push("grid");
            }
            if timesteps.is_none() {
                missing.push("timesteps");
            }
            return Err(reject(FailureCategory::GridOrTimesteps, missing));
        }
    };

    if fields.traits.is_empty() {
        return Err(reject(FailureCategory::Traits, vec!["traits"]));
    }

    match (
        fields.execution_time,
        fields.timesteps_per_sec,
        fields.mcells_per_sec,
    ) {
        (Some(seconds), Some(timesteps_per_sec), Some(mcells_per_sec)) => {
            if seconds <= 0.0 {
                return Err(reject(FailureCategory::PerformanceMetrics, vec![])
                    .with_detail(format!("non-positive execution time {}", seconds)));
            }
            Ok(Run {
                version: section.version,
                commit: commit.clone(),
                project: section.project,
                execution_time: seconds,
                timesteps_per_sec,
                mcells_per_sec,
                grid_width: grid.0,
                grid_height: grid.1,
                timesteps,
                traits: fields.traits,
                line: section.line,
            })
        }
        (seconds, timesteps_per_sec, mcells_per_sec) => {
            let mut missing = Vec::new();
            if seconds.is_none() {
                missing.push("execution time");
            }
            if timesteps_per_sec.is_none() {
                missing.push("timesteps/sec");
            }
            if mcells_per_sec.is_none() {
                missing.push("cells/sec");
            }
            Err(reject(FailureCategory::PerformanceMetrics, missing))
        }
    }
}
