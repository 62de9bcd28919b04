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

//! Record model for parsed benchmark runs.

use std::fmt;

/// Placeholder used when commit metadata cannot be recovered.
pub const UNKNOWN: &str = "unknown";

/// Which build of the simulation a section measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectTag {
    /// The simulation library on its own.
    Library,
    /// The library driven through the user interface.
    Combined,
}

impl ProjectTag {
    /// Both tags, library first.
    pub const ALL: [ProjectTag; 2] = [ProjectTag::Library, ProjectTag::Combined];

    /// Lowercase label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Combined => "combined",
        }
    }

    /// Capitalised label used in report headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::Combined => "Combined (UI + library)",
        }
    }
}

impl fmt::Display for ProjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commit metadata taken from a version block preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitInfo {
    /// Commit hash or other identifier.
    pub id: String,
    /// Commit date as written in the log.
    pub date: String,
    /// Full commit message.
    pub message: String,
}

impl Default for CommitInfo {
    fn default() -> Self {
        Self {
            id: UNKNOWN.to_string(),
            date: UNKNOWN.to_string(),
            message: UNKNOWN.to_string(),
        }
    }
}

impl CommitInfo {
    /// First seven characters of the commit id.
    pub fn short_id(&self) -> &str {
        prefix(&self.id, 7)
    }

    /// Calendar part of the date (first ten characters).
    pub fn short_date(&self) -> &str {
        prefix(&self.date, 10)
    }
}

fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A trait declaration found in a section block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTrait {
    /// Index as declared in the log, kept verbatim for diagnostics.
    pub index: u32,
    /// Trait name, case preserved.
    pub name: String,
    /// Rule identifier, case preserved.
    pub rule: String,
}

impl ParsedTrait {
    pub fn new(index: u32, name: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            rule: rule.into().trim().to_string(),
        }
    }

    /// Lowercase rule identifier used for comparisons.
    pub fn rule_key(&self) -> String {
        self.rule.to_lowercase()
    }
}

/// One measured execution: a version of one project.
///
/// Runs are produced by the parser only when every required field was
/// found, so `execution_time` is always finite and positive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Version number from the enclosing version marker.
    pub version: u32,
    /// Commit metadata of that version.
    pub commit: CommitInfo,
    /// Which project the section measured.
    pub project: ProjectTag,
    /// Wall time in seconds.
    pub execution_time: f64,
    /// Timesteps per second.
    pub timesteps_per_sec: f64,
    /// Millions of cells updated per second.
    pub mcells_per_sec: f64,
    pub grid_width: u32,
    pub grid_height: u32,
    pub timesteps: u32,
    /// Trait declarations in source order.
    pub traits: Vec<ParsedTrait>,
    /// Line of the section marker (1-based).
    pub line: usize,
}

impl Run {
    /// Grid formatted as `WxH`.
    pub fn grid(&self) -> String {
        format!("{}x{}", self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_tag_labels() {
        assert_eq!(ProjectTag::Library.label(), "library");
        assert_eq!(ProjectTag::Combined.to_string(), "combined");
        assert!(ProjectTag::Library < ProjectTag::Combined);
    }

    #[test]
    fn test_commit_info_default_is_unknown() {
        let info = CommitInfo::default();
        assert_eq!(info.id, UNKNOWN);
        assert_eq!(info.date, UNKNOWN);
        assert_eq!(info.message, UNKNOWN);
    }

    #[test]
    fn test_commit_info_short_forms() {
        let info = CommitInfo {
            id: "a1b2c3d4e5f6".to_string(),
            date: "2024-03-01 12:30:00 +0100".to_string(),
            message: "Vectorise neighbour counts".to_string(),
        };
        assert_eq!(info.short_id(), "a1b2c3d");
        assert_eq!(info.short_date(), "2024-03-01");
    }

    #[test]
    fn test_commit_info_short_forms_on_short_values() {
        let info = CommitInfo::default();
        assert_eq!(info.short_id(), "unknown");
        assert_eq!(info.short_date(), "unknown");
    }

    #[test]
    fn test_parsed_trait_rule_key() {
        let t = ParsedTrait::new(0, "Life", " Conway Optimized ");
        assert_eq!(t.rule, "Conway Optimized");
        assert_eq!(t.rule_key(), "conway optimized");
    }

    #[test]
    fn test_run_grid() {
        let run = Run {
            version: 1,
            commit: CommitInfo::default(),
            project: ProjectTag::Library,
            execution_time: 1.0,
            timesteps_per_sec: 100.0,
            mcells_per_sec: 900.0,
            grid_width: 3000,
            grid_height: 2000,
            timesteps: 100,
            traits: vec![],
            line: 1,
        };
        assert_eq!(run.grid(), "3000x2000");
    }
}
