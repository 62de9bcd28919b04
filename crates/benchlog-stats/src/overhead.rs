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

//! UI overhead breakdown.
//!
//! Each combined run is paired with the library run of the same version.
//! The difference is the time spent outside the library. Overhead is not
//! clamped: a library run slower than its combined run gives a negative
//! overhead, which is reported as measured.

use crate::relative::Relative;
use crate::series::Series;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Combined run split into library and overhead time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverheadPoint {
    pub version: u32,
    pub combined_time: f64,
    pub library_time: f64,
    /// `combined_time - library_time`.
    pub overhead: f64,
    /// Library share of the combined time, in percent.
    pub library_share: f64,
    /// Overhead share of the combined time, in percent.
    pub overhead_share: f64,
    /// Overhead change relative to the first matched version.
    pub vs_base: Relative,
    /// Overhead change relative to the preceding matched version.
    pub vs_prev: Relative,
}

/// A combined version with no library run to pair with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossReferenceGap {
    pub version: u32,
}

impl fmt::Display for CrossReferenceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no library benchmark for version {}", self.version)
    }
}

/// First-to-last overhead summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverheadSummary {
    pub first_version: u32,
    pub last_version: u32,
    pub first_overhead: f64,
    pub last_overhead: f64,
    pub improvement: Relative,
}

/// Overhead for every matched combined version.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverheadBreakdown {
    pub points: Vec<OverheadPoint>,
    /// Combined versions skipped for lack of a library run.
    pub gaps: Vec<CrossReferenceGap>,
}

impl OverheadBreakdown {
    /// Pair `combined` with `library` by version.
    pub fn compute(library: &Series, combined: &Series) -> Self {
        let library_times: HashMap<u32, f64> = library
            .points
            .iter()
            .map(|p| (p.version, p.execution_time))
            .collect();

        let mut breakdown = Self::default();
        for point in &combined.points {
            let Some(&library_time) = library_times.get(&point.version) else {
                warn!(version = point.version, "no library benchmark for combined version");
                breakdown.gaps.push(CrossReferenceGap {
                    version: point.version,
                });
                continue;
            };

            let combined_time = point.execution_time;
            let overhead = combined_time - library_time;
            let (library_share, overhead_share) = if combined_time > 0.0 {
                (
                    library_time / combined_time * 100.0,
                    overhead / combined_time * 100.0,
                )
            } else {
                (0.0, 0.0)
            };

            let (vs_base, vs_prev) = match (breakdown.points.first(), breakdown.points.last()) {
                (Some(first), Some(prev)) => (
                    Relative::between(first.overhead, overhead),
                    Relative::between(prev.overhead, overhead),
                ),
                _ => (Relative::Baseline, Relative::Baseline),
            };

            breakdown.points.push(OverheadPoint {
                version: point.version,
                combined_time,
                library_time,
                overhead,
                library_share,
                overhead_share,
                vs_base,
                vs_prev,
            });
        }
        breakdown
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `None` when no version could be matched.
    pub fn summary(&self) -> Option<OverheadSummary> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let improvement = if self.points.len() == 1 {
            Relative::Baseline
        } else {
            Relative::between(first.overhead, last.overhead)
        };
        Some(OverheadSummary {
            first_version: first.version,
            last_version: last.version,
            first_overhead: first.overhead,
            last_overhead: last.overhead,
            improvement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_core::{CommitInfo, ProjectTag, Run};

    fn runs(project: ProjectTag, timings: &[(u32, f64)]) -> Vec<Run> {
        timings
            .iter()
            .map(|&(version, seconds)| Run {
                version,
                commit: CommitInfo::default(),
                project,
                execution_time: seconds,
                timesteps_per_sec: 1.0,
                mcells_per_sec: 1.0,
                grid_width: 1,
                grid_height: 1,
                timesteps: 1,
                traits: vec![],
                line: 0,
            })
            .collect()
    }

    fn breakdown(lib: &[(u32, f64)], ui: &[(u32, f64)]) -> OverheadBreakdown {
        let library = Series::from_runs(&runs(ProjectTag::Library, lib), ProjectTag::Library);
        let combined = Series::from_runs(&runs(ProjectTag::Combined, ui), ProjectTag::Combined);
        OverheadBreakdown::compute(&library, &combined)
    }

    #[test]
    fn test_overhead_and_shares() {
        let b = breakdown(&[(1, 2.0)], &[(1, 5.0)]);
        let p = &b.points[0];
        assert_eq!(p.overhead, 3.0);
        assert_eq!(p.library_share, 40.0);
        assert_eq!(p.overhead_share, 60.0);
        assert!(p.vs_base.is_baseline());
        assert!(p.vs_prev.is_baseline());
    }

    #[test]
    fn test_overhead_speedups() {
        let b = breakdown(&[(1, 2.0), (2, 1.0), (3, 1.0)], &[(1, 10.0), (2, 5.0), (3, 3.0)]);
        let overheads: Vec<f64> = b.points.iter().map(|p| p.overhead).collect();
        assert_eq!(overheads, vec![8.0, 4.0, 2.0]);
        assert_eq!(b.points[1].vs_base.ratio(), 2.0);
        assert_eq!(b.points[2].vs_base.ratio(), 4.0);
        assert_eq!(b.points[2].vs_prev.ratio(), 2.0);
        let summary = b.summary().unwrap();
        assert_eq!(summary.improvement.ratio(), 4.0);
        assert_eq!((summary.first_version, summary.last_version), (1, 3));
    }

    #[test]
    fn test_zero_overhead_is_unbounded() {
        let b = breakdown(&[(1, 1.0), (2, 2.0)], &[(1, 3.0), (2, 2.0)]);
        assert_eq!(b.points[1].overhead, 0.0);
        assert!(b.points[1].vs_base.is_unbounded());
        assert!(b.points[1].vs_prev.is_unbounded());
        assert!(b.summary().unwrap().improvement.is_unbounded());
    }

    #[test]
    fn test_negative_overhead_is_not_clamped() {
        let b = breakdown(&[(1, 4.0)], &[(1, 3.0)]);
        assert_eq!(b.points[0].overhead, -1.0);
        assert!(b.points[0].overhead_share < 0.0);
    }

    #[test]
    fn test_missing_library_version_is_a_gap() {
        let b = breakdown(&[(1, 1.0), (3, 1.0)], &[(1, 4.0), (2, 3.0), (3, 2.0)]);
        assert_eq!(b.gaps, vec![CrossReferenceGap { version: 2 }]);
        let versions: Vec<u32> = b.points.iter().map(|p| p.version).collect();
        assert_eq!(versions, vec![1, 3]);
        assert_eq!(b.points[1].vs_prev.ratio(), 3.0);
        assert_eq!(b.gaps[0].to_string(), "no library benchmark for version 2");
    }

    #[test]
    fn test_no_matches() {
        let b = breakdown(&[], &[(1, 4.0)]);
        assert!(b.is_empty());
        assert!(b.summary().is_none());
        assert_eq!(b.gaps.len(), 1);
    }
}
