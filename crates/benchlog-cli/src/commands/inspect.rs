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

//! Inspect command - extracted blocks and parsed runs

use super::{load_settings, read_file};
use crate::cli::ConfigArgs;
use crate::error::CliError;
use benchlog::{extract, parse_with_options, Run};
use colored::Colorize;

/// Print the version and section blocks found in `file`, with the run
/// parsed from each section or the reason it was rejected.
pub fn inspect(file: &str, detailed: bool, config: &ConfigArgs) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let content = read_file(file)?;

    let outcome = parse_with_options(&content, &settings.options)?;
    let extraction = extract(&content, &settings.options.markers, &settings.options.limits);

    println!("{}", "Benchmark Log".bold().underline());
    println!();
    println!("{}  {}", "Versions:".cyan(), extraction.versions.len());
    println!("{}  {}", "Sections:".cyan(), extraction.section_count());
    println!("{}      {}", "Runs:".cyan(), outcome.runs.len());
    println!("{}  {}", "Rejected:".cyan(), outcome.failures.len());

    for version in &extraction.versions {
        println!();
        println!(
            "{} {} {}",
            "Version".cyan(),
            version.id.to_string().green(),
            format!("(line {})", version.line).dimmed()
        );
        if version.sections.is_empty() {
            println!("  (no sections)");
        }
        for section in &version.sections {
            let run = outcome.runs.iter().find(|r| r.line == section.line);
            match run {
                Some(run) => print_run(run, detailed),
                None => println!(
                    "  {:<9} {} {}",
                    section.project.label(),
                    format!("line {}", section.line).dimmed(),
                    "rejected".red()
                ),
            }
        }
    }

    if !outcome.failures.is_empty() {
        println!();
        println!("{}", "Rejected blocks:".cyan());
        for failure in &outcome.failures {
            println!("  {}", failure);
        }
    }

    Ok(())
}

fn print_run(run: &Run, detailed: bool) {
    println!(
        "  {:<9} {} {:>10.3}s  {}  {} steps  {} trait(s)",
        run.project.label(),
        format!("line {}", run.line).dimmed(),
        run.execution_time,
        run.grid(),
        run.timesteps,
        run.traits.len()
    );
    if !detailed {
        return;
    }
    println!(
        "    commit {} {} {}",
        run.commit.short_id().yellow(),
        run.commit.short_date(),
        run.commit.message.lines().next().unwrap_or("")
    );
    println!(
        "    {:.2} timesteps/s, {:.2} M cells/s",
        run.timesteps_per_sec, run.mcells_per_sec
    );
    for t in &run.traits {
        println!("    trait {}: {} (rule: {})", t.index, t.name, t.rule);
    }
}
