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

//! Field extraction from section and preamble text.
//!
//! Each field is located independently, so the order of lines within a
//! block does not matter. Patterns tolerate surrounding whitespace.

use crate::model::{CommitInfo, ParsedTrait, UNKNOWN};
use once_cell::sync::Lazy;
use regex::Regex;

static GRID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Grid:\s*(\d+)\s*x\s*(\d+)").expect("valid grid pattern"));
static TIMESTEPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Timesteps:\s*(\d+)").expect("valid timesteps pattern"));
static TRAIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*:\s*(\w+)\s*\(\s*rule\s*:\s*([^)]+?)\s*\)").expect("valid trait pattern")
});
static EXECUTION_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Execution time:\s*([\d.]+)\s*(ms|s)").expect("valid execution time pattern")
});
static PERFORMANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Performance:\s*([\d.]+)\s*timesteps/sec").expect("valid performance pattern")
});
static CELLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Cells/sec:\s*([\d.]+)\s*M").expect("valid cells pattern"));

static COMMIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Commit:\s*(\w+)").expect("valid commit pattern"));
static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Date:[ \t]*([\d\-:+ \t]+)").expect("valid date pattern"));
static MESSAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Msg:\s*(.+?)(?:\n[ \t]*\n|={10,}|\z)").expect("valid message pattern")
});

/// Raw field values found in one section body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionFields {
    pub grid: Option<(u32, u32)>,
    pub timesteps: Option<u32>,
    pub traits: Vec<ParsedTrait>,
    /// Execution time in seconds, as written (may be zero).
    pub execution_time: Option<f64>,
    pub timesteps_per_sec: Option<f64>,
    pub mcells_per_sec: Option<f64>,
}

/// Locate every known field in a section body.
pub fn scan_fields(body: &str) -> SectionFields {
    SectionFields {
        grid: parse_grid(body),
        timesteps: capture(&TIMESTEPS, body).and_then(|s| s.parse().ok()),
        traits: parse_traits(body),
        execution_time: parse_execution_time(body),
        timesteps_per_sec: capture(&PERFORMANCE, body).and_then(parse_number),
        mcells_per_sec: capture(&CELLS, body).and_then(parse_number),
    }
}

/// `Grid: WxH`
pub fn parse_grid(body: &str) -> Option<(u32, u32)> {
    let caps = GRID.captures(body)?;
    let width = caps.get(1)?.as_str().parse().ok()?;
    let height = caps.get(2)?.as_str().parse().ok()?;
    Some((width, height))
}

/// All `<index>: <name> (rule: <rule>)` declarations in source order.
pub fn parse_traits(body: &str) -> Vec<ParsedTrait> {
    TRAIT
        .captures_iter(body)
        .filter_map(|caps| {
            let index = caps.get(1)?.as_str().parse().ok()?;
            let name = caps.get(2)?.as_str();
            let rule = caps.get(3)?.as_str();
            Some(ParsedTrait::new(index, name, rule))
        })
        .collect()
}

/// `Execution time: <value>(ms|s)`, normalised to seconds.
pub fn parse_execution_time(body: &str) -> Option<f64> {
    let caps = EXECUTION_TIME.captures(body)?;
    let value = parse_number(caps.get(1)?.as_str())?;
    match caps.get(2)?.as_str() {
        "ms" => Some(value / 1000.0),
        _ => Some(value),
    }
}

/// Commit metadata from a version preamble. Missing pieces become `unknown`.
pub fn parse_commit(preamble: &str) -> CommitInfo {
    let pick = |re: &Regex| {
        capture(re, preamble)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string()
    };
    CommitInfo {
        id: pick(&COMMIT),
        date: pick(&DATE),
        message: pick(&MESSAGE),
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
Grid: 3000x3000
Timesteps: 100
Traits:
  0: Life (rule: Conway Optimized)
  1: Energy (rule: conway)
Execution time: 1500ms
Performance: 66.67 timesteps/sec
Cells/sec: 600.00M
";

    #[test]
    fn test_scan_all_fields() {
        let fields = scan_fields(BODY);
        assert_eq!(fields.grid, Some((3000, 3000)));
        assert_eq!(fields.timesteps, Some(100));
        assert_eq!(fields.traits.len(), 2);
        assert_eq!(fields.traits[0], ParsedTrait::new(0, "Life", "Conway Optimized"));
        assert_eq!(fields.traits[1].rule_key(), "conway");
        assert_eq!(fields.execution_time, Some(1.5));
        assert_eq!(fields.timesteps_per_sec, Some(66.67));
        assert_eq!(fields.mcells_per_sec, Some(600.0));
    }

    #[test]
    fn test_execution_time_units() {
        assert_eq!(parse_execution_time("Execution time: 1500ms"), Some(1.5));
        assert_eq!(parse_execution_time("Execution time: 1.5s"), Some(1.5));
        assert_eq!(parse_execution_time("Execution time:1.5 s"), Some(1.5));
        assert_eq!(parse_execution_time("Execution time: 250 ms"), Some(0.25));
        assert_eq!(parse_execution_time("Execution time: 0ms"), Some(0.0));
        assert_eq!(parse_execution_time("Execution time: fast"), None);
        assert_eq!(parse_execution_time("Execution time: 1.2.3s"), None);
    }

    #[test]
    fn test_grid_tolerates_whitespace() {
        assert_eq!(parse_grid("Grid:  640 x 480"), Some((640, 480)));
        assert_eq!(parse_grid("Grid: 640*480"), None);
    }

    #[test]
    fn test_traits_tolerate_whitespace() {
        let traits = parse_traits("3:Life( rule:   HighLife )\n 12:  Energy  (rule: conway)");
        assert_eq!(traits.len(), 2);
        assert_eq!(traits[0].index, 3);
        assert_eq!(traits[0].rule, "HighLife");
        assert_eq!(traits[1].index, 12);
        assert_eq!(traits[1].name, "Energy");

        let traits = parse_traits("0 : Life (rule : conway)\n1 :Energy(rule :HighLife  )");
        assert_eq!(traits.len(), 2);
        assert_eq!((traits[0].index, traits[0].name.as_str()), (0, "Life"));
        assert_eq!(traits[0].rule, "conway");
        assert_eq!((traits[1].index, traits[1].rule.as_str()), (1, "HighLife"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let fields = scan_fields("Grid: 10x10\n");
        assert_eq!(fields.grid, Some((10, 10)));
        assert!(fields.timesteps.is_none());
        assert!(fields.traits.is_empty());
        assert!(fields.execution_time.is_none());
        assert!(fields.mcells_per_sec.is_none());
    }

    #[test]
    fn test_parse_commit() {
        let preamble = "\
Commit: 9f8e7d6c5b4a
Date: 2024-05-02 14:03:11 +0200
Msg: Batch neighbour lookups
across rows

Building...
";
        let info = parse_commit(preamble);
        assert_eq!(info.id, "9f8e7d6c5b4a");
        assert_eq!(info.date, "2024-05-02 14:03:11 +0200");
        assert_eq!(info.message, "Batch neighbour lookups\nacross rows");
    }

    #[test]
    fn test_parse_commit_message_stops_at_rule() {
        let info = parse_commit("Msg: Tidy up ==========\nmore");
        assert_eq!(info.message, "Tidy up");
    }

    #[test]
    fn test_parse_commit_fallbacks() {
        let info = parse_commit("nothing useful here");
        assert_eq!(info, CommitInfo::default());
    }
}
