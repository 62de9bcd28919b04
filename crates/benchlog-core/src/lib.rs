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

//! Block extraction, field parsing and record model for benchmark logs.
//!
//! A benchmark log is a sequence of version blocks, each holding one
//! section per measured project:
//!
//! ```text
//! ==================== CODE VERSION 2 ====================
//! Commit: 1a2b3c4
//! Date: 2024-02-11 09:12:44 +0100
//! Msg: Cache neighbour offsets
//!
//! ========== BENCHMARK trait_ac | VERSION 2 ==========
//! Grid: 3000x3000
//! Timesteps: 100
//! 0: Life (rule: conway optimized)
//! Execution time: 1840ms
//! Performance: 54.35 timesteps/sec
//! Cells/sec: 489.13M
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use benchlog_core::{parse, ProjectTag};
//!
//! let log = "\
//! ==================== CODE VERSION 1 ====================
//! Commit: abc1234
//! ========== BENCHMARK trait_ac | VERSION 1 ==========
//! Grid: 10x10
//! Timesteps: 5
//! 0: Life (rule: conway)
//! Execution time: 20ms
//! Performance: 250.0 timesteps/sec
//! Cells/sec: 0.025M
//! ";
//!
//! let outcome = parse(log).unwrap();
//! assert_eq!(outcome.series(ProjectTag::Library).len(), 1);
//! assert!(outcome.failures.is_empty());
//! ```

mod config;
mod error;
mod extract;
mod failure;
pub mod fields;
mod limits;
mod model;
mod parser;
pub mod scan;

pub use config::{ExpectedConfiguration, ExpectedTrait};
pub use error::{BenchlogError, BenchlogResult, ErrorKind};
pub use extract::{extract, Extraction, SectionBlock, VersionBlock};
pub use failure::{FailureCategory, ParseFailure};
pub use limits::Limits;
pub use model::{CommitInfo, ParsedTrait, ProjectTag, Run, UNKNOWN};
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, ParseOutcome};
pub use scan::{Boundary, Markers};
