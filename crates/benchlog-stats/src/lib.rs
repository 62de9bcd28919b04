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

//! Speedup series and UI overhead breakdown.
//!
//! All figures are computed from accepted runs only. Every change value is
//! a [`Relative`], which carries the baseline and unbounded cases
//! explicitly instead of encoding them as magic numbers.
//!
//! ```rust
//! use benchlog_core::ProjectTag;
//! use benchlog_stats::Metrics;
//! use benchlog_test::{combined_series, library_series};
//!
//! let mut runs = library_series(&[10.0, 5.0, 2.5]);
//! runs.extend(combined_series(&[15.0, 8.0, 4.5]));
//!
//! let metrics = Metrics::compute(&runs);
//! assert_eq!(metrics.library.points[2].vs_base.ratio(), 4.0);
//! assert_eq!(metrics.overhead.points[0].overhead, 5.0);
//! ```

mod overhead;
mod overview;
mod relative;
mod series;

pub use overhead::{CrossReferenceGap, OverheadBreakdown, OverheadPoint, OverheadSummary};
pub use overview::{version_history, HistoryEntry, Overview, Throughput};
pub use relative::Relative;
pub use series::{Series, SeriesPoint, SeriesSummary};

use benchlog_core::{ProjectTag, Run};
use tracing::debug;

/// Every derived figure for one set of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub library: Series,
    pub combined: Series,
    pub overhead: OverheadBreakdown,
    pub overview: Overview,
    pub history: Vec<HistoryEntry>,
}

impl Metrics {
    pub fn compute(runs: &[Run]) -> Self {
        let library = Series::from_runs(runs, ProjectTag::Library);
        let combined = Series::from_runs(runs, ProjectTag::Combined);
        let overhead = OverheadBreakdown::compute(&library, &combined);
        let overview = Overview::compute(&library, &combined, &overhead);
        debug!(
            library = library.len(),
            combined = combined.len(),
            matched = overhead.points.len(),
            gaps = overhead.gaps.len(),
            "computed metrics"
        );
        Self {
            library,
            combined,
            overhead,
            overview,
            history: version_history(runs),
        }
    }

    /// Series for one project.
    pub fn series(&self, project: ProjectTag) -> &Series {
        match project {
            ProjectTag::Library => &self.library,
            ProjectTag::Combined => &self.combined,
        }
    }
}
