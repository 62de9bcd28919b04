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

//! Per-block parse failures.

use crate::model::ProjectTag;
use std::fmt;

/// Why a block produced no run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureCategory {
    /// Marker-like line that does not parse.
    MalformedMarker,
    /// Section marker seen before any version marker.
    SectionOutsideVersion,
    /// Section whose declared version differs from its enclosing block.
    VersionMismatch,
    /// Section with an empty or whitespace-only body.
    EmptySection,
    /// Section dropped because the block limit was reached.
    BlockLimit,
    /// Grid or timestep count missing.
    GridOrTimesteps,
    /// No trait declaration found.
    Traits,
    /// Execution time, throughput or cell rate missing or invalid.
    PerformanceMetrics,
}

impl FailureCategory {
    /// True for boundary-level failures, false for field-level ones.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedMarker
                | Self::SectionOutsideVersion
                | Self::VersionMismatch
                | Self::EmptySection
                | Self::BlockLimit
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedMarker => "malformed block marker",
            Self::SectionOutsideVersion => "section outside any version block",
            Self::VersionMismatch => "section version does not match its block",
            Self::EmptySection => "empty section",
            Self::BlockLimit => "block limit exceeded",
            Self::GridOrTimesteps => "could not parse grid/timesteps",
            Self::Traits => "could not parse any traits",
            Self::PerformanceMetrics => "could not parse performance metrics",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A block excluded from the parsed runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseFailure {
    pub category: FailureCategory,
    /// Enclosing version, when one was open.
    pub version: Option<u32>,
    /// Section project, when the marker named one.
    pub project: Option<ProjectTag>,
    /// Line of the offending marker (1-based).
    pub line: usize,
    /// Missing or invalid fields, for field-level failures.
    pub missing: Vec<String>,
    /// Extra detail such as the offending marker text.
    pub detail: Option<String>,
}

impl ParseFailure {
    pub fn new(category: FailureCategory, line: usize) -> Self {
        Self {
            category,
            version: None,
            project: None,
            line,
            missing: Vec::new(),
            detail: None,
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_project(mut self, project: ProjectTag) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_missing<I, S>(mut self, missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing = missing.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_structural(&self) -> bool {
        self.category.is_structural()
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match (self.version, self.project) {
            (Some(v), Some(p)) => write!(f, "Version {} ({}): ", v, p)?,
            (Some(v), None) => write!(f, "Version {}: ", v)?,
            (None, Some(p)) => write!(f, "({}): ", p)?,
            (None, None) => {}
        }
        write!(f, "{}", self.category)?;
        if !self.missing.is_empty() {
            write!(f, " (missing: {})", self.missing.join(", "))?;
        }
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}
