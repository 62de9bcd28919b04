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

//! Canonical benchmark-log fixtures.
//!
//! - **builders**: fluent builders for logs, versions and sections
//! - **samples**: canned healthy and partially broken logs
//! - **errors**: malformed inputs for failure paths
//! - **runs**: [`Run`](benchlog_core::Run) values built without parsing

pub mod builders;
pub mod errors;
pub mod runs;
mod samples;

pub use samples::*;

/// Returns all canned logs as (name, text) pairs.
pub fn all() -> Vec<(&'static str, String)> {
    vec![
        ("three_versions", three_versions()),
        ("single_version", single_version()),
        ("with_gaps", with_gaps()),
        ("misconfigured", misconfigured()),
        ("noisy", noisy()),
    ]
}
