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

//! Malformed logs for failure-path testing.

use super::builders::{LogBuilder, SectionBuilder, VersionBuilder};

/// Inputs that must be rejected before any parsing happens.
pub fn empty_inputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \t\n  "),
        ("newlines_only", "\n\n\n"),
    ]
}

/// Logs where exactly one block fails, paired with a short label.
///
/// Each log holds one healthy library section in version 1 followed by the
/// broken block, so one run must survive.
pub fn single_failure_logs() -> Vec<(&'static str, String)> {
    let broken: Vec<(&'static str, SectionBuilder)> = vec![
        ("no_grid", SectionBuilder::combined().no_grid()),
        ("no_timesteps", SectionBuilder::combined().no_timesteps()),
        ("no_traits", SectionBuilder::combined().no_traits()),
        ("no_execution_time", SectionBuilder::combined().no_execution_time()),
        ("unparsable_time", SectionBuilder::combined().raw_time("fast")),
        ("zero_time", SectionBuilder::combined().millis(0.0)),
        ("no_timesteps_per_sec", SectionBuilder::combined().no_timesteps_per_sec()),
        ("no_cells_per_sec", SectionBuilder::combined().no_cells_per_sec()),
    ];

    broken
        .into_iter()
        .map(|(name, section)| {
            let log = LogBuilder::new()
                .version(VersionBuilder::new(1).library_secs(1.0).section(section))
                .build();
            (name, log)
        })
        .collect()
}

/// Logs with boundary problems and the number of runs that survive.
pub fn structural_failure_logs() -> Vec<(&'static str, String, usize)> {
    vec![
        (
            "unknown_project_tag",
            LogBuilder::new()
                .version(
                    VersionBuilder::new(1)
                        .library_secs(1.0)
                        .section(SectionBuilder::tagged("trait_xyz")),
                )
                .build(),
            1,
        ),
        (
            "short_version_rule",
            LogBuilder::new()
                .raw("========== CODE VERSION 1 ==========")
                .raw(SectionBuilder::library().build(1))
                .build(),
            0,
        ),
        (
            "truncated_trailing_section",
            LogBuilder::new()
                .version(VersionBuilder::new(1).library_secs(1.0))
                .raw("========== BENCHMARK trait_ac_ui | VERSION 1 ==========")
                .build(),
            1,
        ),
        (
            "section_version_mismatch",
            LogBuilder::new()
                .version(
                    VersionBuilder::new(2)
                        .library_secs(1.0)
                        .section(SectionBuilder::combined().declared_version(1)),
                )
                .build(),
            1,
        ),
    ]
}
