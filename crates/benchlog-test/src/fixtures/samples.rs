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

//! Canned benchmark logs.

use super::builders::{LogBuilder, SectionBuilder, VersionBuilder};

/// Three versions with both projects, library halving each time.
///
/// | version | library | combined |
/// |---------|---------|----------|
/// | 1       | 10.0 s  | 15.0 s   |
/// | 2       | 5.0 s   | 8.0 s    |
/// | 3       | 2.5 s   | 4.5 s    |
pub fn three_versions() -> String {
    super::builders::paired_log(&[(10.0, 15.0), (5.0, 8.0), (2.5, 4.5)])
}

/// A single version measured once per project.
pub fn single_version() -> String {
    LogBuilder::new()
        .version(
            VersionBuilder::new(1)
                .commit("a1b2c3d4e5f6")
                .date("2024-06-01 08:30:00 +0200")
                .message("Initial import")
                .library_secs(2.0)
                .combined_secs(5.0),
        )
        .build()
}

/// Versions 1-3 where version 2 has no library section and version 3's
/// library section is missing its cell rate.
pub fn with_gaps() -> String {
    LogBuilder::new()
        .version(VersionBuilder::new(1).library_secs(8.0).combined_secs(12.0))
        .version(VersionBuilder::new(2).combined_secs(10.0))
        .version(
            VersionBuilder::new(3)
                .section(SectionBuilder::library().secs(4.0).no_cells_per_sec())
                .combined_secs(7.0),
        )
        .build()
}

/// Two versions where version 2 ran with the wrong grid and trait rule.
pub fn misconfigured() -> String {
    LogBuilder::new()
        .version(VersionBuilder::new(1).library_secs(3.0).combined_secs(4.0))
        .version(
            VersionBuilder::new(2)
                .section(
                    SectionBuilder::library()
                        .grid(1000, 1000)
                        .traits([(0, "Life", "highlife")])
                        .secs(1.0),
                )
                .combined_secs(2.0),
        )
        .build()
}

/// Log mixing millisecond and second timings with noise between blocks.
pub fn noisy() -> String {
    LogBuilder::new()
        .raw("Compiling simulation v0.4.0\n    Finished release [optimized] target(s)")
        .version(
            VersionBuilder::new(1)
                .section(SectionBuilder::library().millis(4000.0))
                .section(SectionBuilder::combined().millis(6500.0)),
        )
        .raw("==============================\nwarning: unused variable `x`")
        .version(
            VersionBuilder::new(2)
                .section(SectionBuilder::library().secs(2.0))
                .section(SectionBuilder::combined().secs(3.25)),
        )
        .build()
}
