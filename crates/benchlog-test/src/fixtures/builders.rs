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

//! Builders for synthetic benchmark logs.
//!
//! Every builder renders text in the exact shape the benchmark runner
//! prints, with sensible defaults so tests only spell out what they vary.

use benchlog_core::ProjectTag;
use std::fmt::Write;

/// How the execution time line is written.
#[derive(Debug, Clone, PartialEq)]
enum Duration {
    Seconds(f64),
    Millis(f64),
    Raw(String),
}

/// Builder for one `BENCHMARK <tag> | VERSION <n>` section.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::SectionBuilder;
///
/// let text = SectionBuilder::library().secs(2.5).build(7);
/// assert!(text.contains("BENCHMARK trait_ac | VERSION 7"));
/// assert!(text.contains("Execution time: 2.5s"));
/// ```
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    tag: String,
    declared_version: Option<u32>,
    grid: Option<(u32, u32)>,
    timesteps: Option<u32>,
    traits: Vec<(u32, String, String)>,
    duration: Option<Duration>,
    timesteps_per_sec: Option<f64>,
    mcells_per_sec: Option<f64>,
    extra: Vec<String>,
}

impl SectionBuilder {
    /// Section with an explicit tag and the default healthy contents.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            declared_version: None,
            grid: Some((3000, 3000)),
            timesteps: Some(100),
            traits: vec![(0, "Life".to_string(), "conway".to_string())],
            duration: Some(Duration::Seconds(1.0)),
            timesteps_per_sec: Some(100.0),
            mcells_per_sec: Some(900.0),
            extra: Vec::new(),
        }
    }

    pub fn library() -> Self {
        Self::tagged("trait_ac")
    }

    pub fn combined() -> Self {
        Self::tagged("trait_ac_ui")
    }

    pub fn project(project: ProjectTag) -> Self {
        match project {
            ProjectTag::Library => Self::library(),
            ProjectTag::Combined => Self::combined(),
        }
    }

    /// Write a different version number into the marker than the block's.
    pub fn declared_version(mut self, version: u32) -> Self {
        self.declared_version = Some(version);
        self
    }

    pub fn grid(mut self, width: u32, height: u32) -> Self {
        self.grid = Some((width, height));
        self
    }

    pub fn no_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    pub fn timesteps(mut self, timesteps: u32) -> Self {
        self.timesteps = Some(timesteps);
        self
    }

    pub fn no_timesteps(mut self) -> Self {
        self.timesteps = None;
        self
    }

    /// Replace the trait list.
    pub fn traits<I, N, R>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = (u32, N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        self.traits = traits
            .into_iter()
            .map(|(i, n, r)| (i, n.into(), r.into()))
            .collect();
        self
    }

    pub fn no_traits(mut self) -> Self {
        self.traits.clear();
        self
    }

    pub fn secs(mut self, seconds: f64) -> Self {
        self.duration = Some(Duration::Seconds(seconds));
        self
    }

    pub fn millis(mut self, millis: f64) -> Self {
        self.duration = Some(Duration::Millis(millis));
        self
    }

    /// Write the execution time value verbatim (e.g. `"fast"`).
    pub fn raw_time(mut self, raw: impl Into<String>) -> Self {
        self.duration = Some(Duration::Raw(raw.into()));
        self
    }

    pub fn no_execution_time(mut self) -> Self {
        self.duration = None;
        self
    }

    pub fn timesteps_per_sec(mut self, value: f64) -> Self {
        self.timesteps_per_sec = Some(value);
        self
    }

    pub fn no_timesteps_per_sec(mut self) -> Self {
        self.timesteps_per_sec = None;
        self
    }

    pub fn mcells_per_sec(mut self, value: f64) -> Self {
        self.mcells_per_sec = Some(value);
        self
    }

    pub fn no_cells_per_sec(mut self) -> Self {
        self.mcells_per_sec = None;
        self
    }

    /// Append an arbitrary line to the body.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.extra.push(line.into());
        self
    }

    /// Render the section for the given enclosing version.
    pub fn build(&self, version: u32) -> String {
        let mut out = String::new();
        let declared = self.declared_version.unwrap_or(version);
        let _ = writeln!(
            out,
            "========== BENCHMARK {} | VERSION {} ==========",
            self.tag, declared
        );
        if let Some((w, h)) = self.grid {
            let _ = writeln!(out, "Grid: {}x{}", w, h);
        }
        if let Some(t) = self.timesteps {
            let _ = writeln!(out, "Timesteps: {}", t);
        }
        if !self.traits.is_empty() {
            out.push_str("Traits:\n");
            for (index, name, rule) in &self.traits {
                let _ = writeln!(out, "  {}: {} (rule: {})", index, name, rule);
            }
        }
        match &self.duration {
            Some(Duration::Seconds(s)) => {
                let _ = writeln!(out, "Execution time: {}s", s);
            }
            Some(Duration::Millis(ms)) => {
                let _ = writeln!(out, "Execution time: {}ms", ms);
            }
            Some(Duration::Raw(raw)) => {
                let _ = writeln!(out, "Execution time: {}", raw);
            }
            None => {}
        }
        if let Some(p) = self.timesteps_per_sec {
            let _ = writeln!(out, "Performance: {:.2} timesteps/sec", p);
        }
        if let Some(c) = self.mcells_per_sec {
            let _ = writeln!(out, "Cells/sec: {:.2}M", c);
        }
        for line in &self.extra {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Builder for one `CODE VERSION <n>` block.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::VersionBuilder;
///
/// let text = VersionBuilder::new(3)
///     .commit("deadbeef")
///     .library_secs(4.0)
///     .combined_secs(6.0)
///     .build();
/// assert!(text.starts_with("===================="));
/// assert!(text.contains("Commit: deadbeef"));
/// ```
#[derive(Debug, Clone)]
pub struct VersionBuilder {
    id: u32,
    commit: Option<String>,
    date: Option<String>,
    message: Option<String>,
    sections: Vec<SectionBuilder>,
}

impl VersionBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            commit: Some(format!("c0ffee{:04}", id)),
            date: Some(format!("2024-01-{:02} 12:00:00 +0000", (id % 28) + 1)),
            message: Some(format!("Optimisation pass {}", id)),
            sections: Vec::new(),
        }
    }

    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Drop commit, date and message lines.
    pub fn no_metadata(mut self) -> Self {
        self.commit = None;
        self.date = None;
        self.message = None;
        self
    }

    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    /// Healthy library section with the given execution time.
    pub fn library_secs(self, seconds: f64) -> Self {
        self.section(SectionBuilder::library().secs(seconds))
    }

    /// Healthy combined section with the given execution time.
    pub fn combined_secs(self, seconds: f64) -> Self {
        self.section(SectionBuilder::combined().secs(seconds))
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "==================== CODE VERSION {} ====================",
            self.id
        );
        if let Some(ref c) = self.commit {
            let _ = writeln!(out, "Commit: {}", c);
        }
        if let Some(ref d) = self.date {
            let _ = writeln!(out, "Date: {}", d);
        }
        if let Some(ref m) = self.message {
            let _ = writeln!(out, "Msg: {}", m);
        }
        out.push('\n');
        for section in &self.sections {
            out.push_str(&section.build(self.id));
        }
        out
    }
}

/// Builder for a whole log.
///
/// # Examples
///
/// ```
/// use benchlog_test::fixtures::builders::{LogBuilder, VersionBuilder};
///
/// let log = LogBuilder::new()
///     .version(VersionBuilder::new(1).library_secs(10.0))
///     .version(VersionBuilder::new(2).library_secs(5.0))
///     .build();
/// assert_eq!(log.matches("CODE VERSION").count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    parts: Vec<Part>,
}

#[derive(Debug, Clone)]
enum Part {
    Version(VersionBuilder),
    Raw(String),
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: VersionBuilder) -> Self {
        self.parts.push(Part::Version(version));
        self
    }

    /// Append raw text between blocks.
    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Raw(text.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Version(v) => out.push_str(&v.build()),
                Part::Raw(text) => {
                    out.push_str(text);
                    if !text.ends_with('\n') {
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}

/// Log whose versions carry both projects with the given times.
///
/// `pairs[i]` is `(library_secs, combined_secs)` of version `i + 1`.
pub fn paired_log(pairs: &[(f64, f64)]) -> String {
    pairs
        .iter()
        .enumerate()
        .fold(LogBuilder::new(), |log, (i, &(lib, ui))| {
            log.version(
                VersionBuilder::new(i as u32 + 1)
                    .library_secs(lib)
                    .combined_secs(ui),
            )
        })
        .build()
}
