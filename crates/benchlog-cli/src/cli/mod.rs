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

//! CLI command definitions and argument parsing.

use crate::commands::{self, ReportFormat};
use crate::error::CliError;
use clap::{Args, Subcommand};

/// Options shared by every command that checks runs against an expected
/// configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Expected configuration file (YAML, or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Expected grid size, overriding the config file
    #[arg(long, value_name = "WxH")]
    pub grid: Option<String>,

    /// Expected timesteps, overriding the config file
    #[arg(long, value_name = "N")]
    pub timesteps: Option<u32>,

    /// Section tag of library-only runs
    #[arg(long, value_name = "TAG")]
    pub library_tag: Option<String>,

    /// Section tag of combined UI + library runs
    #[arg(long, value_name = "TAG")]
    pub combined_tag: Option<String>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a benchmark log and render a report
    ///
    /// Console output goes to stdout unless --output is given. LaTeX output
    /// defaults to `<log stem>_report.tex` next to the log.
    Report {
        /// Benchmark log file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format (console, latex, json)
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Report title
        #[arg(short, long, default_value = "Benchmark Performance Report")]
        title: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Check every run against the expected configuration
    ///
    /// Exits non-zero when a block could not be parsed, or on any warning
    /// with -W.
    Validate {
        /// Benchmark log file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(short = 'W', long)]
        warn_error: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print extracted blocks and parsed runs (debug)
    Inspect {
        /// Benchmark log file
        #[arg(value_name = "FILE")]
        file: String,

        /// Show traits and throughput of every run
        #[arg(short, long)]
        detailed: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` on I/O failures, invalid configuration, unreadable logs
    /// or failed validation.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                file,
                format,
                output,
                title,
                config,
            } => {
                let format = format.parse::<ReportFormat>()?;
                commands::report(&file, format, output.as_deref(), &title, &config)
            }
            Commands::Validate {
                file,
                format,
                warn_error,
                config,
            } => commands::validate(&file, &format, warn_error, &config),
            Commands::Inspect {
                file,
                detailed,
                config,
            } => commands::inspect(&file, detailed, &config),
        }
    }
}
