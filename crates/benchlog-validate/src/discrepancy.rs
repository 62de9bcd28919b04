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

//! Discrepancy types

use benchlog_core::{FailureCategory, ParseFailure, ProjectTag, Run};

/// Severity level for discrepancies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Informational hint
    Hint,
    /// Warning - the run was measured differently than expected
    Warning,
    /// Error - the block could not be used at all
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Kind of discrepancy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiscrepancyKind {
    /// Grid dimensions differ from the expected grid
    GridMismatch,
    /// Timestep count differs
    TimestepMismatch,
    /// Number of declared traits differs
    TraitCountMismatch,
    /// Trait name at a position differs
    TraitNameMismatch,
    /// Trait rule at a position is not allowed
    TraitRuleMismatch,
    /// Block rejected by the parser
    UnparsableBlock,
    /// Custom rule violation
    Custom(String),
}

impl DiscrepancyKind {
    pub fn label(&self) -> &str {
        match self {
            Self::GridMismatch => "grid mismatch",
            Self::TimestepMismatch => "timestep mismatch",
            Self::TraitCountMismatch => "trait count mismatch",
            Self::TraitNameMismatch => "trait name mismatch",
            Self::TraitRuleMismatch => "trait rule mismatch",
            Self::UnparsableBlock => "unparsable block",
            Self::Custom(name) => name,
        }
    }
}

/// A single finding about one run or one rejected block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discrepancy {
    severity: Severity,
    kind: DiscrepancyKind,
    message: String,
    version: Option<u32>,
    project: Option<ProjectTag>,
    line: Option<usize>,
    rule_id: String,
}

impl Discrepancy {
    fn new(
        severity: Severity,
        kind: DiscrepancyKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            version: None,
            project: None,
            line: None,
            rule_id: rule_id.into(),
        }
    }

    pub fn warning(
        kind: DiscrepancyKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, message, rule_id)
    }

    pub fn error(
        kind: DiscrepancyKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, kind, message, rule_id)
    }

    pub fn hint(
        kind: DiscrepancyKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Hint, kind, message, rule_id)
    }

    /// Convert a rejected block into an error-level discrepancy.
    pub fn from_failure(failure: &ParseFailure) -> Self {
        let mut message = failure.category.description().to_string();
        if !failure.missing.is_empty() {
            message.push_str(&format!(" (missing: {})", failure.missing.join(", ")));
        }
        if let Some(ref detail) = failure.detail {
            message.push_str(&format!(": {}", detail));
        }
        let rule_id = if failure.category.is_structural() {
            "block-structure"
        } else {
            "block-fields"
        };
        let mut discrepancy = Self::error(DiscrepancyKind::UnparsableBlock, message, rule_id)
            .with_line(failure.line);
        discrepancy.version = failure.version;
        discrepancy.project = failure.project;
        if failure.category == FailureCategory::BlockLimit {
            discrepancy.severity = Severity::Warning;
        }
        discrepancy
    }

    /// Attach version, project and line of a run.
    pub fn for_run(mut self, run: &Run) -> Self {
        self.version = Some(run.version);
        self.project = Some(run.project);
        self.line = Some(run.line).filter(|&l| l > 0);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    // Public getters
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &DiscrepancyKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn project(&self) -> Option<ProjectTag> {
        self.project
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// Escalate the severity to error level (used by the validator).
    pub fn escalate_to_error(&mut self) {
        self.severity = Severity::Error;
    }

    /// `Version 3 (library)` style subject, or empty when unknown.
    pub fn subject(&self) -> String {
        match (self.version, self.project) {
            (Some(v), Some(p)) => format!("Version {} ({})", v, p),
            (Some(v), None) => format!("Version {}", v),
            (None, Some(p)) => format!("({})", p),
            (None, None) => String::new(),
        }
    }
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }

        write!(f, "[{}] {}: ", self.rule_id, self.severity)?;

        let subject = self.subject();
        if !subject.is_empty() {
            write!(f, "{}: ", subject)?;
        }

        write!(f, "{}", self.message)
    }
}
