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

//! Metrics computed from parsed fixture logs.

use benchlog_core::{parse, ProjectTag};
use benchlog_stats::{CrossReferenceGap, Metrics, Relative, Series};
use benchlog_test::{fixtures, library_series};
use proptest::prelude::*;

#[test]
fn test_three_versions_metrics() {
    let outcome = parse(&fixtures::three_versions()).unwrap();
    let metrics = Metrics::compute(&outcome.runs);

    let lib_base: Vec<f64> = metrics.library.points.iter().map(|p| p.vs_base.ratio()).collect();
    assert_eq!(lib_base, vec![1.0, 2.0, 4.0]);

    let overheads: Vec<f64> = metrics.overhead.points.iter().map(|p| p.overhead).collect();
    assert_eq!(overheads, vec![5.0, 3.0, 2.0]);
    assert!(metrics.overhead.gaps.is_empty());

    let summary = metrics.overview.overhead.as_ref().unwrap();
    assert_eq!(summary.improvement.ratio(), 2.5);
    assert_eq!(metrics.history.len(), 3);
}

#[test]
fn test_gaps_skip_only_the_overhead() {
    let outcome = parse(&fixtures::with_gaps()).unwrap();
    let metrics = Metrics::compute(&outcome.runs);

    assert_eq!(metrics.series(ProjectTag::Combined).len(), 3);
    assert_eq!(metrics.series(ProjectTag::Library).len(), 1);
    assert_eq!(
        metrics.overhead.gaps,
        vec![
            CrossReferenceGap { version: 2 },
            CrossReferenceGap { version: 3 }
        ]
    );
    assert_eq!(metrics.overhead.points.len(), 1);
    assert!(metrics.overview.overhead.unwrap().improvement.is_baseline());
}

#[test]
fn test_empty_runs() {
    let metrics = Metrics::compute(&[]);
    assert!(metrics.library.is_empty());
    assert!(metrics.overhead.is_empty());
    assert!(metrics.overview.library.is_none());
    assert!(metrics.overview.peak_throughput.is_none());
    assert!(metrics.history.is_empty());
}

proptest! {
    /// Property: vs-base ratios chain the vs-prev ratios.
    #[test]
    fn prop_base_ratio_is_product_of_prev_ratios(
        times in prop::collection::vec(0.01f64..1000.0, 1..30)
    ) {
        let series = Series::from_runs(&library_series(&times), ProjectTag::Library);
        let mut product = 1.0;
        for point in &series.points {
            product *= point.vs_prev.ratio();
            let base = point.vs_base.ratio();
            prop_assert!((product - base).abs() <= 1e-9 * base.max(1.0), "{} vs {}", product, base);
        }
    }

    /// Property: only the first point is the baseline.
    #[test]
    fn prop_only_first_point_is_baseline(times in prop::collection::vec(0.01f64..1000.0, 1..30)) {
        let series = Series::from_runs(&library_series(&times), ProjectTag::Library);
        for (i, point) in series.points.iter().enumerate() {
            prop_assert_eq!(point.vs_base == Relative::Baseline, i == 0);
        }
    }
}
