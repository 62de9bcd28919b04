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

//! Block extraction.
//!
//! Splits a log into version blocks and, within each, project sections.
//! Section bodies are borrowed from the input. Anything that prevents a
//! section from being handed to the field parser is recorded as a
//! structural [`ParseFailure`] and the pass continues.

use crate::failure::{FailureCategory, ParseFailure};
use crate::limits::Limits;
use crate::model::ProjectTag;
use crate::scan::{Boundary, Markers, Scanner};
use tracing::{debug, warn};

/// One project section of a version block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock<'a> {
    /// Enclosing version id.
    pub version: u32,
    pub project: ProjectTag,
    /// Version number written in the section marker itself.
    pub declared_version: u32,
    /// Line of the section marker (1-based).
    pub line: usize,
    /// Text between this marker and the next boundary.
    pub body: &'a str,
}

/// A version block with its preamble and sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBlock<'a> {
    pub id: u32,
    /// Line of the version marker (1-based).
    pub line: usize,
    /// Text between the version marker and its first boundary.
    pub preamble: &'a str,
    pub sections: Vec<SectionBlock<'a>>,
}

/// Result of a block extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Extraction<'a> {
    pub versions: Vec<VersionBlock<'a>>,
    pub failures: Vec<ParseFailure>,
}

impl<'a> Extraction<'a> {
    /// `(version id, project, section text)` in source order.
    pub fn triples(&self) -> impl Iterator<Item = (u32, ProjectTag, &'a str)> + '_ {
        self.versions
            .iter()
            .flat_map(|v| v.sections.iter().map(|s| (s.version, s.project, s.body)))
    }

    /// Total number of extracted sections.
    pub fn section_count(&self) -> usize {
        self.versions.iter().map(|v| v.sections.len()).sum()
    }
}

/// Extract version blocks and sections from `text`.
pub fn extract<'a>(text: &'a str, markers: &Markers, limits: &Limits) -> Extraction<'a> {
    let mut extractor = Extractor::new(text, limits);
    for marker in Scanner::new(text, markers, limits.max_line_length) {
        extractor.close_section(marker.start);
        match marker.boundary {
            Boundary::Version { id } => {
                extractor.close_version(marker.start);
                extractor.current = Some(VersionBlock {
                    id,
                    line: marker.line,
                    preamble: "",
                    sections: Vec::new(),
                });
                extractor.preamble_start = Some(marker.end);
            }
            Boundary::Section {
                project,
                declared_version,
            } => {
                extractor.end_preamble(marker.start);
                let rejected = match &extractor.current {
                    Some(version) if declared_version != version.id => {
                        warn!(
                            line = marker.line,
                            declared = declared_version,
                            enclosing = version.id,
                            "section declares a different version than its block"
                        );
                        let failure =
                            ParseFailure::new(FailureCategory::VersionMismatch, marker.line)
                                .with_version(version.id)
                                .with_project(project)
                                .with_detail(format!("declared VERSION {}", declared_version));
                        extractor.failures.push(failure);
                        true
                    }
                    Some(_) => false,
                    None => {
                        warn!(line = marker.line, "section before first version marker");
                        extractor.failures.push(
                            ParseFailure::new(FailureCategory::SectionOutsideVersion, marker.line)
                                .with_project(project),
                        );
                        true
                    }
                };
                extractor.open = Some(OpenSection {
                    project,
                    declared_version,
                    line: marker.line,
                    body_start: marker.end,
                    rejected,
                });
            }
            Boundary::Dangling { text: marker_text } => {
                extractor.end_preamble(marker.start);
                warn!(line = marker.line, marker = marker_text, "malformed block marker");
                let mut failure = ParseFailure::new(FailureCategory::MalformedMarker, marker.line)
                    .with_detail(marker_text);
                if let Some(version) = &extractor.current {
                    failure = failure.with_version(version.id);
                }
                extractor.failures.push(failure);
            }
        }
    }
    extractor.finish()
}

struct OpenSection {
    project: ProjectTag,
    declared_version: u32,
    line: usize,
    body_start: usize,
    /// Orphaned or version-mismatched; its body yields no block.
    rejected: bool,
}

struct Extractor<'a, 'l> {
    text: &'a str,
    limits: &'l Limits,
    versions: Vec<VersionBlock<'a>>,
    failures: Vec<ParseFailure>,
    current: Option<VersionBlock<'a>>,
    preamble_start: Option<usize>,
    open: Option<OpenSection>,
    sections_seen: usize,
    limit_reported: bool,
}

impl<'a, 'l> Extractor<'a, 'l> {
    fn new(text: &'a str, limits: &'l Limits) -> Self {
        Self {
            text,
            limits,
            versions: Vec::new(),
            failures: Vec::new(),
            current: None,
            preamble_start: None,
            open: None,
            sections_seen: 0,
            limit_reported: false,
        }
    }

    fn end_preamble(&mut self, at: usize) {
        if let Some(start) = self.preamble_start.take() {
            if let Some(version) = self.current.as_mut() {
                version.preamble = &self.text[start..at];
            }
        }
    }

    fn close_section(&mut self, at: usize) {
        let Some(open) = self.open.take() else {
            return;
        };
        if open.rejected {
            return;
        }
        let Some(version) = self.current.as_mut() else {
            return;
        };

        let body = &self.text[open.body_start..at];
        if body.trim().is_empty() {
            self.failures.push(
                ParseFailure::new(FailureCategory::EmptySection, open.line)
                    .with_version(version.id)
                    .with_project(open.project),
            );
            return;
        }

        if self.sections_seen >= self.limits.max_blocks {
            if !self.limit_reported {
                warn!(limit = self.limits.max_blocks, "block limit reached, dropping remaining sections");
                self.failures.push(
                    ParseFailure::new(FailureCategory::BlockLimit, open.line)
                        .with_version(version.id)
                        .with_project(open.project)
                        .with_detail(format!("at most {} sections are extracted", self.limits.max_blocks)),
                );
                self.limit_reported = true;
            }
            return;
        }

        self.sections_seen += 1;
        version.sections.push(SectionBlock {
            version: version.id,
            project: open.project,
            declared_version: open.declared_version,
            line: open.line,
            body,
        });
    }

    fn close_version(&mut self, at: usize) {
        self.end_preamble(at);
        if let Some(version) = self.current.take() {
            debug!(
                version = version.id,
                sections = version.sections.len(),
                "closed version block"
            );
            self.versions.push(version);
        }
    }

    fn finish(mut self) -> Extraction<'a> {
        let end = self.text.len();
        self.close_section(end);
        self.close_version(end);
        Extraction {
            versions: self.versions,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1: &str = "==================== CODE VERSION 1 ====================";
    const V2: &str = "==================== CODE VERSION 2 ====================";
    const LIB1: &str = "========== BENCHMARK trait_ac | VERSION 1 ==========";
    const UI1: &str = "========== BENCHMARK trait_ac_ui | VERSION 1 ==========";
    const LIB2: &str = "========== BENCHMARK trait_ac | VERSION 2 ==========";

    fn run(text: &str) -> Extraction<'_> {
        extract(text, &Markers::default(), &Limits::default())
    }

    fn join(lines: &[&str]) -> String {
        let mut s = lines.join("\n");
        s.push('\n');
        s
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let ex = run("");
        assert!(ex.versions.is_empty());
        assert!(ex.failures.is_empty());
        assert_eq!(ex.triples().count(), 0);
    }

    #[test]
    fn test_text_without_markers_yields_nothing() {
        let ex = run("just some output\nwith no markers\n");
        assert!(ex.versions.is_empty());
        assert!(ex.failures.is_empty());
    }

    #[test]
    fn test_sections_in_source_order() {
        let text = join(&[V1, "Commit: abc", LIB1, "body a", UI1, "body b", V2, LIB2, "body c"]);
        let ex = run(&text);
        let triples: Vec<_> = ex.triples().collect();
        assert_eq!(
            triples,
            vec![
                (1, ProjectTag::Library, "body a\n"),
                (1, ProjectTag::Combined, "body b\n"),
                (2, ProjectTag::Library, "body c\n"),
            ]
        );
        assert_eq!(ex.versions[0].preamble, "Commit: abc\n");
        assert_eq!(ex.versions[1].preamble, "");
        assert!(ex.failures.is_empty());
    }

    #[test]
    fn test_version_without_sections_is_not_an_error() {
        let text = join(&[V1, "Commit: abc", "build failed"]);
        let ex = run(&text);
        assert_eq!(ex.versions.len(), 1);
        assert_eq!(ex.section_count(), 0);
        assert!(ex.failures.is_empty());
    }

    #[test]
    fn test_truncated_trailing_section() {
        let text = join(&[V1, LIB1, "body a", UI1]);
        let ex = run(&text);
        assert_eq!(ex.section_count(), 1);
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].category, FailureCategory::EmptySection);
        assert_eq!(ex.failures[0].project, Some(ProjectTag::Combined));
        assert_eq!(ex.failures[0].version, Some(1));
    }

    #[test]
    fn test_dangling_marker_closes_section() {
        let text = join(&[
            V1,
            LIB1,
            "body a",
            "========== BENCHMARK trait_zz | VERSION 1 ==========",
            "orphaned text",
            UI1,
            "body b",
        ]);
        let ex = run(&text);
        let triples: Vec<_> = ex.triples().collect();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].2, "body a\n");
        assert_eq!(triples[1].2, "body b\n");
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].category, FailureCategory::MalformedMarker);
        assert_eq!(ex.failures[0].line, 4);
        assert_eq!(ex.failures[0].version, Some(1));
    }

    #[test]
    fn test_section_before_version_is_skipped() {
        let text = join(&[LIB1, "stray body", V1, LIB1, "body a"]);
        let ex = run(&text);
        assert_eq!(ex.section_count(), 1);
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].category, FailureCategory::SectionOutsideVersion);
        assert_eq!(ex.failures[0].line, 1);
    }

    #[test]
    fn test_mismatched_section_version_is_rejected() {
        let text = join(&[V2, LIB1, "body", LIB2, "kept"]);
        let ex = run(&text);
        let triples: Vec<_> = ex.triples().collect();
        assert_eq!(triples, vec![(2, ProjectTag::Library, "kept\n")]);
        assert_eq!(ex.failures.len(), 1);
        let failure = &ex.failures[0];
        assert_eq!(failure.category, FailureCategory::VersionMismatch);
        assert_eq!(failure.line, 2);
        assert_eq!(failure.version, Some(2));
        assert_eq!(failure.project, Some(ProjectTag::Library));
    }

    #[test]
    fn test_prefixed_version_marker_opens_block() {
        let text = join(&[
            V2,
            "Commit: two",
            "[run 3] ==================== CODE VERSION 3 ====================",
            "Commit: three",
            "========== BENCHMARK trait_ac | VERSION 3 ==========",
            "body",
        ]);
        let ex = run(&text);
        assert_eq!(ex.versions.len(), 2);
        assert_eq!(ex.versions[1].id, 3);
        assert_eq!(ex.versions[1].preamble, "Commit: three\n");
        assert_eq!(ex.triples().collect::<Vec<_>>(), vec![(3, ProjectTag::Library, "body\n")]);
        assert!(ex.failures.is_empty());
    }

    #[test]
    fn test_block_limit() {
        let text = join(&[V1, LIB1, "a", UI1, "b", V2, LIB2, "c"]);
        let limits = Limits {
            max_blocks: 2,
            ..Limits::default()
        };
        let ex = extract(&text, &Markers::default(), &limits);
        assert_eq!(ex.section_count(), 2);
        assert_eq!(ex.failures.len(), 1);
        assert_eq!(ex.failures[0].category, FailureCategory::BlockLimit);
    }

    #[test]
    fn test_body_without_trailing_newline() {
        let text = format!("{}\n{}\nGrid: 1x1", V1, LIB1);
        let ex = run(&text);
        assert_eq!(ex.triples().next().map(|t| t.2), Some("Grid: 1x1"));
    }
}
