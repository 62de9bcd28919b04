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

//! Line scanner recognising block boundaries.
//!
//! A boundary line is framed by runs of `=` on both sides and starts, inside
//! the frame, with either the version token or the section token:
//!
//! ```text
//! ==================== CODE VERSION 3 ====================
//! ========== BENCHMARK trait_ac_ui | VERSION 3 ==========
//! ```
//!
//! Framed lines that carry a token but fail to parse (rule too short,
//! unknown project tag, non-numeric version) become [`Boundary::Dangling`].
//! Framed lines without a token, and bare `=====` rules, are plain text.
//! A frame may sit after a prefix such as `[run 3] `.

use crate::model::ProjectTag;

/// Tokens and rule widths that identify boundary lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Token opening a version marker (default `CODE VERSION`).
    pub version_token: String,
    /// Token opening a section marker (default `BENCHMARK`).
    pub section_token: String,
    /// Token preceding the declared version in a section marker.
    pub section_version_token: String,
    /// Project tag of library-only sections (default `trait_ac`).
    pub library_tag: String,
    /// Project tag of combined sections (default `trait_ac_ui`).
    pub combined_tag: String,
    /// Minimum `=` run on each side of a version marker.
    pub version_rule_width: usize,
    /// Minimum `=` run on each side of a section marker.
    pub section_rule_width: usize,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            version_token: "CODE VERSION".to_string(),
            section_token: "BENCHMARK".to_string(),
            section_version_token: "VERSION".to_string(),
            library_tag: "trait_ac".to_string(),
            combined_tag: "trait_ac_ui".to_string(),
            version_rule_width: 20,
            section_rule_width: 10,
        }
    }
}

impl Markers {
    /// Map a section tag to its project.
    pub fn project_for(&self, tag: &str) -> Option<ProjectTag> {
        if tag == self.library_tag {
            Some(ProjectTag::Library)
        } else if tag == self.combined_tag {
            Some(ProjectTag::Combined)
        } else {
            None
        }
    }

    /// The tag written in section markers for a project.
    pub fn tag_for(&self, project: ProjectTag) -> &str {
        match project {
            ProjectTag::Library => &self.library_tag,
            ProjectTag::Combined => &self.combined_tag,
        }
    }
}

/// A recognised boundary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary<'a> {
    /// Start of a version block.
    Version { id: u32 },
    /// Start of a project section inside a version block.
    Section {
        project: ProjectTag,
        declared_version: u32,
    },
    /// A marker-like line that is not well formed.
    Dangling { text: &'a str },
}

/// A boundary together with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub boundary: Boundary<'a>,
    /// Line number (1-based).
    pub line: usize,
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Byte offset just past the line terminator.
    pub end: usize,
}

/// Iterator over the boundary lines of a text.
pub struct Scanner<'a> {
    text: &'a str,
    markers: &'a Markers,
    max_line_length: usize,
    offset: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, markers: &'a Markers, max_line_length: usize) -> Self {
        Self {
            text,
            markers,
            max_line_length,
            offset: 0,
            line: 0,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Marker<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.text.len() {
            let start = self.offset;
            let rest = &self.text[start..];
            let (raw, end) = match rest.find('\n') {
                Some(pos) => (&rest[..pos], start + pos + 1),
                None => (rest, self.text.len()),
            };
            self.offset = end;
            self.line += 1;

            if raw.len() > self.max_line_length {
                continue;
            }

            if let Some(boundary) = classify(raw, self.markers) {
                return Some(Marker {
                    boundary,
                    line: self.line,
                    start,
                    end,
                });
            }
        }
        None
    }
}

/// Classify a single line. Returns `None` for ordinary text.
///
/// The `=` frame may be preceded or followed by other text (a runner prefix
/// such as `[run 3]`). Such unanchored lines only count when they parse
/// cleanly; an anchored frame that fails to parse is dangling.
pub fn classify<'a>(raw: &'a str, markers: &Markers) -> Option<Boundary<'a>> {
    let trimmed = raw.trim();
    let first = trimmed.find('=')?;
    let last = trimmed.rfind('=')? + 1;
    let lead = trimmed[first..].bytes().take_while(|&b| b == b'=').count();
    let trail = trimmed[..last].bytes().rev().take_while(|&b| b == b'=').count();
    if first + lead >= last - trail {
        return None;
    }
    let inner = trimmed[first + lead..last - trail].trim();
    let rule = lead.min(trail);
    let anchored = first == 0 && last == trimmed.len();
    let dangling = || anchored.then_some(Boundary::Dangling { text: trimmed });

    if let Some(rest) = strip_token(inner, &markers.version_token) {
        return match parse_number(rest) {
            Some(id) if rule >= markers.version_rule_width => Some(Boundary::Version { id }),
            _ => dangling(),
        };
    }

    if let Some(rest) = strip_token(inner, &markers.section_token) {
        return match parse_section_header(rest, markers) {
            Some((project, declared_version)) if rule >= markers.section_rule_width => {
                Some(Boundary::Section {
                    project,
                    declared_version,
                })
            }
            _ => dangling(),
        };
    }

    None
}

/// Plain ASCII digits only; `+5` and `-0` are rejected.
fn parse_number(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Strip `token` only when it is followed by whitespace or nothing.
fn strip_token<'a>(inner: &'a str, token: &str) -> Option<&'a str> {
    let rest = inner.strip_prefix(token)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

// `<tag> | VERSION <n>`
fn parse_section_header(rest: &str, markers: &Markers) -> Option<(ProjectTag, u32)> {
    let (tag, tail) = rest.trim().split_once('|')?;
    let project = markers.project_for(tag.trim())?;
    let declared = parse_number(
        tail.trim()
            .strip_prefix(markers.section_version_token.as_str())?,
    )?;
    Some((project, declared))
}
