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

//! Benchlog CLI library.
//!
//! # Commands
//!
//! - **report**: render a console, LaTeX or JSON performance report
//! - **validate**: check runs against the expected configuration
//! - **inspect**: show extracted blocks and parsed runs
//!
//! # Examples
//!
//! ```no_run
//! use benchlog_cli::cli::ConfigArgs;
//! use benchlog_cli::commands::{report, validate, ReportFormat};
//!
//! # fn main() -> Result<(), benchlog_cli::error::CliError> {
//! let config = ConfigArgs::default();
//! validate("bench.log", "text", false, &config)?;
//! report("bench.log", ReportFormat::Latex, None, "Nightly", &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than 1 GB are rejected before reading
//! (configurable via `BENCHLOG_MAX_FILE_SIZE`).

pub mod cli;
pub mod commands;
pub mod error;
