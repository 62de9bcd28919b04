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

//! Overall comparison and version history.

use crate::overhead::{OverheadBreakdown, OverheadSummary};
use crate::series::{Series, SeriesSummary};
use benchlog_core::{CommitInfo, ProjectTag, Run};
use std::collections::BTreeMap;

/// Cell throughput of one library version.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throughput {
    pub version: u32,
    /// Millions of cells per second.
    pub mcells_per_sec: f64,
}

impl Throughput {
    /// Billions of cells per second.
    pub fn gcells_per_sec(&self) -> f64 {
        self.mcells_per_sec / 1000.0
    }
}

/// Headline numbers across both projects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overview {
    pub library: Option<SeriesSummary>,
    pub combined: Option<SeriesSummary>,
    pub overhead: Option<OverheadSummary>,
    /// Highest library cell rate across all versions.
    pub peak_throughput: Option<Throughput>,
}

impl Overview {
    pub fn compute(library: &Series, combined: &Series, overhead: &OverheadBreakdown) -> Self {
        let peak_throughput = library
            .points
            .iter()
            .map(|p| Throughput {
                version: p.version,
                mcells_per_sec: p.mcells_per_sec,
            })
            .fold(None, |best: Option<Throughput>, t| match best {
                Some(b) if b.mcells_per_sec >= t.mcells_per_sec => Some(b),
                _ => Some(t),
            });

        Self {
            library: library.summary(),
            combined: combined.summary(),
            overhead: overhead.summary(),
            peak_throughput,
        }
    }
}

/// Commit metadata of one version.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub version: u32,
    pub commit: CommitInfo,
}

/// One entry per distinct version, ascending.
///
/// Library runs are consulted before combined runs; within a project the
/// first run in source order wins.
pub fn version_history(runs: &[Run]) -> Vec<HistoryEntry> {
    let mut seen: BTreeMap<u32, &CommitInfo> = BTreeMap::new();
    let by_project = |project: ProjectTag| runs.iter().filter(move |r| r.project == project);
    for run in by_project(ProjectTag::Library).chain(by_project(ProjectTag::Combined)) {
        seen.entry(run.version).or_insert(&run.commit);
    }
    seen.into_iter()
        .map(|(version, commit)| HistoryEntry {
            version,
            commit: commit.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(version: u32, project: ProjectTag, seconds: f64, mcells: f64, commit: &str) -> Run {
        Run {
            version,
            commit: CommitInfo {
                id: commit.to_string(),
                ..CommitInfo::default()
            },
            project,
            execution_time: seconds,
            timesteps_per_sec: 1.0,
            mcells_per_sec: mcells,
            grid_width: 1,
            grid_height: 1,
            timesteps: 1,
            traits: vec![],
            line: 0,
        }
    }

    #[test]
    fn test_peak_throughput_is_highest_rate() {
        let runs = vec![
            run(1, ProjectTag::Library, 4.0, 200.0, "a"),
            run(2, ProjectTag::Library, 1.0, 1500.0, "b"),
            run(3, ProjectTag::Library, 2.0, 800.0, "c"),
        ];
        let library = Series::from_runs(&runs, ProjectTag::Library);
        let combined = Series::from_runs(&runs, ProjectTag::Combined);
        let overhead = OverheadBreakdown::compute(&library, &combined);
        let overview = Overview::compute(&library, &combined, &overhead);

        let peak = overview.peak_throughput.unwrap();
        assert_eq!(peak.version, 2);
        assert_eq!(peak.gcells_per_sec(), 1.5);
        assert_eq!(overview.library.unwrap().total.ratio(), 2.0);
        assert!(overview.combined.is_none());
        assert!(overview.overhead.is_none());
    }

    #[test]
    fn test_version_history_first_seen_wins() {
        let runs = vec![
            run(2, ProjectTag::Library, 1.0, 1.0, "lib2"),
            run(1, ProjectTag::Combined, 1.0, 1.0, "ui1"),
            run(2, ProjectTag::Combined, 1.0, 1.0, "ui2"),
        ];
        let history = version_history(&runs);
        let ids: Vec<(u32, &str)> = history
            .iter()
            .map(|h| (h.version, h.commit.id.as_str()))
            .collect();
        assert_eq!(ids, vec![(1, "ui1"), (2, "lib2")]);
    }

    #[test]
    fn test_version_history_prefers_library_commit() {
        let runs = vec![
            run(3, ProjectTag::Combined, 1.0, 1.0, "ui3"),
            run(3, ProjectTag::Library, 1.0, 1.0, "lib3"),
            run(3, ProjectTag::Library, 1.0, 1.0, "lib3-again"),
        ];
        let history = version_history(&runs);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].commit.id, "lib3");
    }
}
