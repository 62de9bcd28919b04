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

//! End-to-end tests: raw log text through to rendered reports.

use benchlog::report::{console, json, latex};
use benchlog::stats::Relative;
use benchlog::validate::{DiscrepancyKind, Severity};
use benchlog::{analyze, analyze_with, ExpectedConfiguration, ExpectedTrait, ParseOptions, ProjectTag};
use benchlog_test::{fixtures, LogBuilder, SectionBuilder, VersionBuilder};
use proptest::prelude::*;

fn default_expected() -> ExpectedConfiguration {
    ExpectedConfiguration::default()
}

// ==================== Pipeline tests ====================

#[test]
fn test_three_versions_speedups() {
    let analysis = analyze(&fixtures::three_versions(), &default_expected()).unwrap();

    let library = analysis.metrics.series(ProjectTag::Library);
    let ratios: Vec<f64> = library.points.iter().map(|p| p.vs_prev.ratio()).collect();
    assert_eq!(ratios, vec![1.0, 2.0, 2.0]);
    assert!(library.points[0].vs_base.is_baseline());

    let overhead = &analysis.metrics.overhead;
    let pure: Vec<f64> = overhead.points.iter().map(|p| p.overhead).collect();
    assert_eq!(pure, vec![5.0, 3.0, 2.0]);
    assert!(overhead.gaps.is_empty());

    let summary = overhead.summary().unwrap();
    assert_eq!(summary.improvement.ratio(), 2.5);
}

#[test]
fn test_noisy_log_normalises_units() {
    let analysis = analyze(&fixtures::noisy(), &default_expected()).unwrap();
    assert!(analysis.conforms());

    let library = analysis.metrics.series(ProjectTag::Library);
    assert_eq!(library.points[0].execution_time, 4.0);
    assert_eq!(library.points[1].vs_prev.ratio(), 2.0);
}

#[test]
fn test_gaps_surface_in_discrepancies_and_overhead() {
    let analysis = analyze(&fixtures::with_gaps(), &default_expected()).unwrap();

    let errors: Vec<_> = analysis
        .discrepancies
        .iter()
        .filter(|d| d.severity() == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &DiscrepancyKind::UnparsableBlock);
    assert_eq!(errors[0].version(), Some(3));

    let gap_versions: Vec<u32> = analysis
        .metrics
        .overhead
        .gaps
        .iter()
        .map(|g| g.version)
        .collect();
    assert_eq!(gap_versions, vec![2, 3]);
}

#[test]
fn test_custom_expected_configuration() {
    let log = LogBuilder::new()
        .version(
            VersionBuilder::new(1)
                .section(
                    SectionBuilder::library()
                        .grid(500, 500)
                        .timesteps(10)
                        .traits([(0, "Life", "highlife")]),
                )
                .combined_secs(2.0),
        )
        .build();
    let expected = ExpectedConfiguration::new(
        500,
        500,
        10,
        vec![ExpectedTrait::new(Some("Life"), ["highlife"]).unwrap()],
    )
    .unwrap();

    let analysis = analyze(&log, &expected).unwrap();
    let library_issues: Vec<_> = analysis
        .discrepancies
        .iter()
        .filter(|d| d.project() == Some(ProjectTag::Library))
        .collect();
    assert!(library_issues.is_empty());

    // the combined run used the default grid
    assert!(analysis
        .discrepancies
        .iter()
        .any(|d| d.project() == Some(ProjectTag::Combined) && d.kind() == &DiscrepancyKind::GridMismatch));
}

#[test]
fn test_custom_markers() {
    let log = LogBuilder::new()
        .version(
            VersionBuilder::new(1)
                .section(SectionBuilder::tagged("engine").secs(4.0))
                .section(SectionBuilder::tagged("engine_gui").secs(6.0)),
        )
        .build();
    let options = ParseOptions::builder()
        .library_tag("engine")
        .combined_tag("engine_gui")
        .build();

    let analysis = analyze_with(&log, &options, &default_expected(), Default::default()).unwrap();
    assert_eq!(analysis.metrics.overhead.points[0].overhead, 2.0);
}

#[test]
fn test_zero_time_is_unbounded_not_panic() {
    let log = LogBuilder::new()
        .version(VersionBuilder::new(1).library_secs(2.0).combined_secs(3.0))
        .version(
            VersionBuilder::new(2)
                .section(SectionBuilder::library().secs(1.0))
                .section(SectionBuilder::combined().secs(1.0)),
        )
        .build();
    let analysis = analyze(&log, &default_expected()).unwrap();
    let last = analysis.metrics.overhead.points.last().unwrap();
    assert_eq!(last.overhead, 0.0);
    assert_eq!(last.vs_base, Relative::Unbounded);
    assert!(console::render(&analysis.into_report("Zero", default_expected())).contains("unbounded"));
}

// ==================== Report tests ====================

#[test]
fn test_all_renderers_accept_every_fixture() {
    for (name, log) in fixtures::all() {
        let report = analyze(&log, &default_expected())
            .unwrap()
            .into_report(name, default_expected());

        assert!(console::render(&report).contains("OVERALL"), "{}", name);
        assert!(latex::render(&report).ends_with("\\end{document}\n"), "{}", name);
        let value: serde_json::Value = serde_json::from_str(&json::render(&report).unwrap()).unwrap();
        assert_eq!(value["title"], name, "{}", name);
    }
}

// ==================== Property tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_library_speedup_matches_time_ratio(
        times in prop::collection::vec(0.1f64..100.0, 1..8)
    ) {
        let pairs: Vec<(f64, f64)> = times.iter().map(|&t| (t, t + 1.0)).collect();
        let log = benchlog_test::paired_log(&pairs);
        let analysis = analyze(&log, &default_expected()).unwrap();

        prop_assert!(analysis.conforms());
        let library = analysis.metrics.series(ProjectTag::Library);
        prop_assert_eq!(library.len(), times.len());

        let first = library.points[0].execution_time;
        for point in &library.points[1..] {
            let expected = first / point.execution_time;
            prop_assert!((point.vs_base.ratio() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_constant_overhead(
        times in prop::collection::vec(0.5f64..50.0, 1..6)
    ) {
        let pairs: Vec<(f64, f64)> = times.iter().map(|&t| (t, t + 2.0)).collect();
        let analysis = analyze(&benchlog_test::paired_log(&pairs), &default_expected()).unwrap();
        for point in &analysis.metrics.overhead.points {
            prop_assert!((point.overhead - 2.0).abs() < 1e-6);
        }
    }
}
