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

//! Report rendering for analysed benchmark logs.
//!
//! A [`Report`] bundles the expected configuration, the derived metrics and
//! the discrepancy list. Three renderers consume it:
//!
//! - [`console`]: fixed-width text tables for the terminal
//! - [`latex`]: a standalone LaTeX article
//! - [`json`]: the whole report serialised with serde
//!
//! ```rust
//! use benchlog_core::{parse, ExpectedConfiguration};
//! use benchlog_report::{console, Report};
//! use benchlog_stats::Metrics;
//!
//! let log = benchlog_test::paired_log(&[(4.0, 6.0), (2.0, 3.5)]);
//! let outcome = parse(&log).unwrap();
//! let report = Report::new(
//!     "Nightly",
//!     ExpectedConfiguration::default(),
//!     Metrics::compute(&outcome.runs),
//!     Vec::new(),
//! );
//! assert!(console::render(&report).contains("BENCHMARK REPORT: Nightly"));
//! ```

pub mod console;
pub mod format;
pub mod json;
pub mod latex;
mod report;

pub use json::export_json;
pub use latex::{default_output_path, export_latex};
pub use report::Report;
