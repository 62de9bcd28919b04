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

//! LaTeX document report.
//!
//! Produces a standalone `article` using `booktabs` tables. Every piece of
//! log-derived text passes through [`escape_latex`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::format::{escape_latex, first_line, relative_latex, speedup_latex, truncate};
use crate::Report;
use benchlog_core::ProjectTag;
use benchlog_stats::{OverheadBreakdown, Series};

/// Longest commit message shown in the version history table.
pub const MESSAGE_WIDTH: usize = 50;

/// Default output path for a given input log: `<stem>_report.tex` next to it.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "benchmark".to_string());
    input.with_file_name(format!("{}_report.tex", stem))
}

/// Write the document to `path`.
pub fn export_latex(report: &Report, path: &Path) -> io::Result<()> {
    fs::write(path, render(report))
}

/// Render the complete document.
pub fn render(report: &Report) -> String {
    let mut doc = String::new();
    doc.push_str(&preamble(report));
    doc.push_str(&configuration_section(report));
    for project in ProjectTag::ALL {
        doc.push_str(&series_section(report.metrics.series(project)));
    }
    doc.push_str(&overhead_section(&report.metrics.overhead));
    doc.push_str(&history_section(report));
    doc.push_str(&summary_section(report));
    doc.push_str("\\end{document}\n");
    doc
}

fn preamble(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("\\documentclass[11pt,a4paper]{article}\n");
    for package in [
        "[utf8]{inputenc}",
        "[T1]{fontenc}",
        "{booktabs}",
        "[margin=2.5cm]{geometry}",
        "{float}",
        "{hyperref}",
    ] {
        out.push_str(&format!("\\usepackage{}\n", package));
    }
    out.push('\n');
    out.push_str(&format!("\\title{{{}}}\n", escape_latex(&report.title)));
    out.push_str(&format!("\\date{{{}}}\n", escape_latex(&report.generated)));
    out.push_str("\n\\begin{document}\n\\maketitle\n\n");
    out
}

fn configuration_section(report: &Report) -> String {
    let expected = &report.expected;
    let cells = u64::from(expected.grid_width()) * u64::from(expected.grid_height());

    let mut out = String::new();
    out.push_str("\\section{Test Configuration}\n\n");
    if let Some(source) = &report.source {
        out.push_str(&format!("Source log: \\texttt{{{}}}\n\n", escape_latex(source)));
    }
    out.push_str("\\begin{itemize}\n");
    out.push_str(&format!(
        "    \\item \\textbf{{Grid Size:}} ${} \\times {}$ cells ({} total)\n",
        expected.grid_width(),
        expected.grid_height(),
        cells
    ));
    out.push_str(&format!("    \\item \\textbf{{Timesteps:}} {}\n", expected.timesteps()));
    out.push_str(&format!("    \\item \\textbf{{Traits:}} {}\n", expected.traits().len()));
    out.push_str("    \\begin{itemize}\n");
    for (position, t) in expected.traits().iter().enumerate() {
        out.push_str(&format!(
            "        \\item {}: {} (rule: {})\n",
            position,
            escape_latex(t.name().unwrap_or("any name")),
            escape_latex(&t.allowed_display())
        ));
    }
    out.push_str("    \\end{itemize}\n\\end{itemize}\n\n");

    if report.conforms() {
        out.push_str("\\subsection{Configuration Validation}\n\n");
        out.push_str("All versions were run with the expected configuration.\n\n");
    } else {
        out.push_str("\\subsection{Configuration Warnings}\n\n\\begin{itemize}\n");
        for discrepancy in &report.discrepancies {
            out.push_str(&format!("    \\item {}\n", escape_latex(&discrepancy.to_string())));
        }
        out.push_str("\\end{itemize}\n\n");
    }
    out
}

fn series_section(series: &Series) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\\section{{{} Performance (\\texttt{{{}}})}}\n\n",
        escape_latex(series.project.title()),
        series.project
    ));

    if series.is_empty() {
        out.push_str("No runs were recorded.\n\n");
        return out;
    }

    out.push_str("\\begin{table}[H]\n\\centering\n\\begin{tabular}{ccrrrrr}\n\\toprule\n");
    out.push_str(
        "\\textbf{Version} & \\textbf{Date} & \\textbf{Time (s)} & \\textbf{Steps/s} & \
         \\textbf{MCells/s} & \\textbf{vs Base} & \\textbf{vs Prev} \\\\\n\\midrule\n",
    );
    for point in &series.points {
        out.push_str(&format!(
            "{} & {} & {:.3} & {:.2} & {:.2} & {} & {} \\\\\n",
            point.version,
            escape_latex(point.commit.short_date()),
            point.execution_time,
            point.timesteps_per_sec,
            point.mcells_per_sec,
            relative_latex(&point.vs_base),
            relative_latex(&point.vs_prev)
        ));
    }
    out.push_str("\\bottomrule\n\\end{tabular}\n");
    out.push_str(&format!(
        "\\caption{{{} performance across versions}}\n\\end{{table}}\n\n",
        escape_latex(series.project.title())
    ));

    if let Some(summary) = series.summary() {
        out.push_str(&format!(
            "\\textbf{{Summary:}} version {} achieves a \\textbf{{{} speedup}} compared to \
             version {} ({:.3}s to {:.3}s).\n\n",
            summary.final_version,
            speedup_latex(&summary.total),
            summary.baseline_version,
            summary.baseline_time,
            summary.final_time
        ));
    }
    out
}

fn overhead_section(overhead: &OverheadBreakdown) -> String {
    let mut out = String::new();
    out.push_str("\\section{UI vs Library Time Breakdown}\n\n");

    if !overhead.is_empty() {
        out.push_str("\\begin{table}[H]\n\\centering\n\\begin{tabular}{crrrrrr}\n\\toprule\n");
        out.push_str(
            "\\textbf{Version} & \\textbf{UI Total (s)} & \\textbf{Lib (s)} & \
             \\textbf{Pure UI (s)} & \\textbf{Lib \\%} & \\textbf{UI \\%} & \
             \\textbf{Pure UI Speedup} \\\\\n\\midrule\n",
        );
        for point in &overhead.points {
            out.push_str(&format!(
                "{} & {:.3} & {:.3} & {:.3} & {:.1}\\% & {:.1}\\% & {} \\\\\n",
                point.version,
                point.combined_time,
                point.library_time,
                point.overhead,
                point.library_share,
                point.overhead_share,
                relative_latex(&point.vs_base)
            ));
        }
        out.push_str("\\bottomrule\n\\end{tabular}\n");
        out.push_str("\\caption{UI overhead breakdown by version}\n\\end{table}\n\n");
    } else {
        out.push_str("No version has both a combined and a library run.\n\n");
    }

    if !overhead.gaps.is_empty() {
        out.push_str("\\begin{itemize}\n");
        for gap in &overhead.gaps {
            out.push_str(&format!("    \\item {}\n", escape_latex(&gap.to_string())));
        }
        out.push_str("\\end{itemize}\n\n");
    }

    if let Some(summary) = overhead.summary() {
        out.push_str(&format!(
            "\\textbf{{Pure UI Overhead Improvement:}} {} speedup (from {:.3}s to {:.3}s).\n\n",
            speedup_latex(&summary.improvement),
            summary.first_overhead,
            summary.last_overhead
        ));
    }
    out
}

fn history_section(report: &Report) -> String {
    let history = &report.metrics.history;
    if history.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("\\section{Version History}\n\n");
    out.push_str("\\begin{table}[H]\n\\centering\n\\begin{tabular}{clll}\n\\toprule\n");
    out.push_str(
        "\\textbf{Version} & \\textbf{Commit} & \\textbf{Date} & \\textbf{Message} \\\\\n\\midrule\n",
    );
    for entry in history {
        out.push_str(&format!(
            "{} & \\texttt{{{}}} & {} & {} \\\\\n",
            entry.version,
            escape_latex(entry.commit.short_id()),
            escape_latex(entry.commit.short_date()),
            escape_latex(&truncate(first_line(&entry.commit.message), MESSAGE_WIDTH))
        ));
    }
    out.push_str("\\bottomrule\n\\end{tabular}\n");
    out.push_str("\\caption{Commit history for each version}\n\\end{table}\n\n");
    out
}

fn summary_section(report: &Report) -> String {
    let overview = &report.metrics.overview;
    let mut out = String::new();
    out.push_str("\\section{Overall Summary}\n\n");

    let rows: Vec<(&str, f64, String)> = [
        ("Library", overview.library.as_ref()),
        ("Combined", overview.combined.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, summary)| {
        summary.map(|s| (label, s.baseline_time, speedup_latex(&s.total)))
    })
    .chain(
        overview
            .overhead
            .as_ref()
            .map(|s| ("Pure UI overhead", s.first_overhead, speedup_latex(&s.improvement))),
    )
    .collect();

    if rows.is_empty() {
        out.push_str("No runs were recorded.\n\n");
        return out;
    }

    out.push_str("\\begin{center}\n\\begin{tabular}{lrr}\n\\toprule\n");
    out.push_str(
        "\\textbf{Component} & \\textbf{Baseline Time} & \\textbf{Final Speedup} \\\\\n\\midrule\n",
    );
    for (label, baseline, speedup) in rows {
        out.push_str(&format!("{} & {:.3}s & {} \\\\\n", label, baseline, speedup));
    }
    out.push_str("\\bottomrule\n\\end{tabular}\n\\end{center}\n\n");

    if let Some(peak) = &overview.peak_throughput {
        out.push_str(&format!(
            "Peak library throughput is \\textbf{{{:.2} billion cells/second}} \
             ({:.2} M cells/s, version {}).\n\n",
            peak.gcells_per_sec(),
            peak.mcells_per_sec,
            peak.version
        ));
    }
    out
}
