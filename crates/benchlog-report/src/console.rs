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

//! Plain-text console report.

use crate::format::{first_line, relative_plain, speedup_plain, truncate};
use crate::Report;
use benchlog_core::ProjectTag;
use benchlog_stats::{OverheadBreakdown, Series};

const WIDTH: usize = 80;

/// Print the full report to stdout.
pub fn print_report(report: &Report) {
    print!("{}", render(report));
}

/// Render the full report.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&render_header(report));
    out.push_str(&render_conformance(report));
    for project in ProjectTag::ALL {
        out.push_str(&render_series(report.metrics.series(project)));
    }
    out.push_str(&render_overhead(&report.metrics.overhead));
    out.push_str(&render_overall(report));
    out
}

fn banner(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", title));
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
}

/// Title banner and the expected configuration.
pub fn render_header(report: &Report) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("BENCHMARK REPORT: {}", report.title));
    if let Some(source) = &report.source {
        out.push_str(&format!("Source:    {}\n", source));
    }
    out.push_str(&format!("Generated: {}\n", report.generated));

    let expected = &report.expected;
    out.push_str(&format!(
        "Expected:  grid {}, {} timesteps\n",
        expected.grid(),
        expected.timesteps()
    ));
    for (position, t) in expected.traits().iter().enumerate() {
        out.push_str(&format!(
            "           trait {}: {} with rule one of [{}]\n",
            position,
            t.name().unwrap_or("any name"),
            t.allowed_display()
        ));
    }
    out
}

/// Discrepancy list, or a conformance note when there is none.
pub fn render_conformance(report: &Report) -> String {
    let mut out = String::new();
    section(&mut out, "CONFIGURATION CHECK");
    if report.conforms() {
        out.push_str("All versions conform to the expected configuration\n");
        return out;
    }
    for discrepancy in &report.discrepancies {
        out.push_str(&format!("  {}\n", discrepancy));
    }
    out.push_str(&format!("{} discrepancies found\n", report.discrepancies.len()));
    out
}

/// Per-version table for one project.
pub fn render_series(series: &Series) -> String {
    let mut out = String::new();
    section(
        &mut out,
        &format!("{} BENCHMARKS", series.project.title().to_uppercase()),
    );

    if series.is_empty() {
        out.push_str("No runs\n");
        return out;
    }

    out.push_str(&format!(
        "{:<8} {:<11} {:>10} {:>12} {:>11}  {:<18} {:<18}\n",
        "Version", "Date", "Time (s)", "Timesteps/s", "Cells/s (M)", "From base", "From prev"
    ));
    for point in &series.points {
        out.push_str(&format!(
            "{:<8} {:<11} {:>10.3} {:>12.2} {:>11.2}  {:<18} {:<18}\n",
            point.version,
            point.commit.short_date(),
            point.execution_time,
            point.timesteps_per_sec,
            point.mcells_per_sec,
            relative_plain(&point.vs_base),
            relative_plain(&point.vs_prev)
        ));
    }

    if let Some(summary) = series.summary() {
        out.push_str(&format!(
            "\nVersion {} -> {}: {:.3}s -> {:.3}s, {}\n",
            summary.baseline_version,
            summary.final_version,
            summary.baseline_time,
            summary.final_time,
            relative_plain(&summary.total)
        ));
    }
    out
}

/// UI overhead table with cross-reference gaps.
pub fn render_overhead(overhead: &OverheadBreakdown) -> String {
    let mut out = String::new();
    section(&mut out, "UI OVERHEAD (combined - library)");

    if overhead.is_empty() && overhead.gaps.is_empty() {
        out.push_str("No combined runs\n");
        return out;
    }

    if !overhead.is_empty() {
        out.push_str(&format!(
            "{:<8} {:>12} {:>12} {:>12} {:>9} {:>9}  {:<18} {:<18}\n",
            "Version",
            "Combined (s)",
            "Library (s)",
            "Overhead (s)",
            "Library",
            "Overhead",
            "From base",
            "From prev"
        ));
        for point in &overhead.points {
            out.push_str(&format!(
                "{:<8} {:>12.3} {:>12.3} {:>12.3} {:>8.1}% {:>8.1}%  {:<18} {:<18}\n",
                point.version,
                point.combined_time,
                point.library_time,
                point.overhead,
                point.library_share,
                point.overhead_share,
                relative_plain(&point.vs_base),
                relative_plain(&point.vs_prev)
            ));
        }
    }

    for gap in &overhead.gaps {
        out.push_str(&format!("  ! {}\n", gap));
    }
    out
}

/// Headline speedups, peak throughput and version history.
pub fn render_overall(report: &Report) -> String {
    let mut out = String::new();
    banner(&mut out, "OVERALL");

    let overview = &report.metrics.overview;
    let mut any = false;
    for (label, summary) in [
        ("Library speedup", &overview.library),
        ("Combined speedup", &overview.combined),
    ] {
        if let Some(summary) = summary {
            any = true;
            out.push_str(&format!(
                "{:<18} {} (version {} -> {}, {})\n",
                format!("{}:", label),
                speedup_plain(&summary.total),
                summary.baseline_version,
                summary.final_version,
                relative_plain(&summary.total)
            ));
        }
    }
    if let Some(summary) = &overview.overhead {
        any = true;
        out.push_str(&format!(
            "{:<18} {} ({:.3}s -> {:.3}s)\n",
            "Overhead speedup:",
            speedup_plain(&summary.improvement),
            summary.first_overhead,
            summary.last_overhead
        ));
    }
    if let Some(peak) = &overview.peak_throughput {
        any = true;
        out.push_str(&format!(
            "{:<18} {:.2} M cells/s ({:.2} billion cells/s) at version {}\n",
            "Peak throughput:",
            peak.mcells_per_sec,
            peak.gcells_per_sec(),
            peak.version
        ));
    }
    if !any {
        out.push_str("No data\n");
    }

    if !report.metrics.history.is_empty() {
        section(&mut out, "VERSION HISTORY");
        for entry in &report.metrics.history {
            out.push_str(&format!(
                "{:<8} {:<8} {:<11} {}\n",
                entry.version,
                entry.commit.short_id(),
                entry.commit.short_date(),
                truncate(first_line(&entry.commit.message), 50)
            ));
        }
    }
    out
}
