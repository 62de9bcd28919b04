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

//! Per-project speedup series.

use crate::relative::Relative;
use benchlog_core::{CommitInfo, ProjectTag, Run};

/// One version of a project with its change against the first and the
/// previous version.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesPoint {
    pub version: u32,
    pub commit: CommitInfo,
    /// Execution time in seconds.
    pub execution_time: f64,
    pub timesteps_per_sec: f64,
    pub mcells_per_sec: f64,
    /// Change relative to the first point of the series.
    pub vs_base: Relative,
    /// Change relative to the preceding point.
    pub vs_prev: Relative,
}

/// Summary of a whole series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesSummary {
    pub baseline_version: u32,
    pub final_version: u32,
    pub baseline_time: f64,
    pub final_time: f64,
    /// Change of the final version relative to the baseline.
    pub total: Relative,
}

/// Runs of one project ordered by version.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub project: ProjectTag,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Build the series of `project` from runs in any order.
    ///
    /// Runs sharing a version keep their source order.
    pub fn from_runs(runs: &[Run], project: ProjectTag) -> Self {
        let mut ordered: Vec<&Run> = runs.iter().filter(|r| r.project == project).collect();
        ordered.sort_by_key(|r| r.version);

        let mut points: Vec<SeriesPoint> = Vec::with_capacity(ordered.len());
        let base_time = ordered.first().map(|r| r.execution_time);

        for (i, run) in ordered.iter().enumerate() {
            let (vs_base, vs_prev) = match (i, base_time) {
                (0, _) | (_, None) => (Relative::Baseline, Relative::Baseline),
                (_, Some(base)) => (
                    Relative::between(base, run.execution_time),
                    Relative::between(ordered[i - 1].execution_time, run.execution_time),
                ),
            };
            points.push(SeriesPoint {
                version: run.version,
                commit: run.commit.clone(),
                execution_time: run.execution_time,
                timesteps_per_sec: run.timesteps_per_sec,
                mcells_per_sec: run.mcells_per_sec,
                vs_base,
                vs_prev,
            });
        }

        Self { project, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Point for `version`; the last one when the version repeats.
    pub fn get(&self, version: u32) -> Option<&SeriesPoint> {
        self.points.iter().rev().find(|p| p.version == version)
    }

    /// First-to-last summary, `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let total = if self.points.len() == 1 {
            Relative::Baseline
        } else {
            Relative::between(first.execution_time, last.execution_time)
        };
        Some(SeriesSummary {
            baseline_version: first.version,
            final_version: last.version,
            baseline_time: first.execution_time,
            final_time: last.execution_time,
            total,
        })
    }
}
