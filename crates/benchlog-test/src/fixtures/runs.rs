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

//! Ready-made [`Run`] values for tests that skip parsing.

use benchlog_core::{CommitInfo, ParsedTrait, ProjectTag, Run};

/// Healthy run on the default configuration.
pub fn run(version: u32, project: ProjectTag, seconds: f64) -> Run {
    Run {
        version,
        commit: CommitInfo {
            id: format!("c0ffee{:04}", version),
            date: "2024-01-01 12:00:00 +0000".to_string(),
            message: format!("Optimisation pass {}", version),
        },
        project,
        execution_time: seconds,
        timesteps_per_sec: 100.0 / seconds,
        mcells_per_sec: 900.0 / seconds,
        grid_width: 3000,
        grid_height: 3000,
        timesteps: 100,
        traits: vec![ParsedTrait::new(0, "Life", "conway")],
        line: 0,
    }
}

/// Library runs numbered from 1 with the given times.
pub fn library_series(times: &[f64]) -> Vec<Run> {
    series(ProjectTag::Library, times)
}

/// Combined runs numbered from 1 with the given times.
pub fn combined_series(times: &[f64]) -> Vec<Run> {
    series(ProjectTag::Combined, times)
}

fn series(project: ProjectTag, times: &[f64]) -> Vec<Run> {
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| run(i as u32 + 1, project, t))
        .collect()
}
