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

//! Report command - render an analysed log

use super::{load_settings, read_file, write_output};
use crate::cli::ConfigArgs;
use crate::error::CliError;
use benchlog::report::{console, default_output_path, json, latex};
use benchlog::{analyze_with, validate::ValidatorConfig};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Console,
    Latex,
    Json,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "text" => Ok(Self::Console),
            "latex" | "tex" => Ok(Self::Latex),
            "json" => Ok(Self::Json),
            other => Err(CliError::invalid_input(format!(
                "unknown report format '{}' (expected console, latex or json)",
                other
            ))),
        }
    }
}

/// Analyse `file` and render the report.
///
/// Console and JSON output go to stdout unless `output` is given. LaTeX
/// output always goes to a file, by default `<file stem>_report.tex`.
///
/// # Errors
///
/// Returns `Err` if the log or config cannot be read, the log is empty, or
/// the output cannot be written. Discrepancies do not fail this command.
pub fn report(
    file: &str,
    format: ReportFormat,
    output: Option<&str>,
    title: &str,
    config: &ConfigArgs,
) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let content = read_file(file)?;

    let analysis = analyze_with(
        &content,
        &settings.options,
        &settings.expected,
        ValidatorConfig::default(),
    )?;
    let report = analysis
        .into_report(title, settings.expected)
        .with_source(file);

    match format {
        ReportFormat::Console => write_output(&console::render(&report), output),
        ReportFormat::Json => {
            let mut rendered = json::render(&report)?;
            rendered.push('\n');
            write_output(&rendered, output)
        }
        ReportFormat::Latex => {
            let path = output
                .map(PathBuf::from)
                .unwrap_or_else(|| default_output_path(Path::new(file)));
            latex::export_latex(&report, &path).map_err(|e| CliError::io_error(&path, e))?;
            eprintln!("{} LaTeX report written to {}", "✓".green().bold(), path.display());
            Ok(())
        }
    }
}
