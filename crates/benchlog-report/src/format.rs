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

//! Shared number and text formatting.

use benchlog_stats::Relative;

/// Change column for console tables.
pub fn relative_plain(value: &Relative) -> String {
    match value {
        Relative::Baseline => "- (baseline)".to_string(),
        Relative::Finite { ratio, percent } => format!("{:+.1}% ({:.2}x)", percent, ratio),
        Relative::Unbounded => "unbounded".to_string(),
    }
}

/// Speedup factor alone, e.g. `4.00x`.
pub fn speedup_plain(value: &Relative) -> String {
    match value {
        Relative::Baseline => "1.00x".to_string(),
        Relative::Finite { ratio, .. } => format!("{:.2}x", ratio),
        Relative::Unbounded => "unbounded".to_string(),
    }
}

/// Change column for LaTeX tables.
pub fn relative_latex(value: &Relative) -> String {
    match value {
        Relative::Baseline => "---".to_string(),
        Relative::Finite { ratio, percent } => {
            format!("{:+.1}\\% ({:.2}$\\times$)", percent, ratio)
        }
        Relative::Unbounded => "$\\infty$".to_string(),
    }
}

/// Speedup factor for LaTeX prose.
pub fn speedup_latex(value: &Relative) -> String {
    match value {
        Relative::Baseline => "1.00$\\times$".to_string(),
        Relative::Finite { ratio, .. } => format!("{:.2}$\\times$", ratio),
        Relative::Unbounded => "$\\infty$".to_string(),
    }
}

/// Escape LaTeX special characters.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Shorten `text` to `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// First line of a possibly multi-line commit message.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_plain() {
        assert_eq!(relative_plain(&Relative::Baseline), "- (baseline)");
        assert_eq!(relative_plain(&Relative::between(4.0, 1.0)), "+300.0% (4.00x)");
        assert_eq!(relative_plain(&Relative::Unbounded), "unbounded");
    }

    #[test]
    fn test_relative_latex() {
        assert_eq!(relative_latex(&Relative::Baseline), "---");
        assert_eq!(
            relative_latex(&Relative::between(2.0, 1.0)),
            "+100.0\\% (2.00$\\times$)"
        );
        assert_eq!(relative_latex(&Relative::Unbounded), "$\\infty$");
    }

    #[test]
    fn test_speedups() {
        assert_eq!(speedup_plain(&Relative::between(9.0, 3.0)), "3.00x");
        assert_eq!(speedup_latex(&Relative::Baseline), "1.00$\\times$");
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("trait_ac & 50%"), "trait\\_ac \\& 50\\%");
        assert_eq!(escape_latex("a~b^c"), "a\\textasciitilde{}b\\textasciicircum{}c");
        assert_eq!(escape_latex("C:\\x"), "C:\\textbackslash{}x");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(60);
        let cut = truncate(&long, 50);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate(&"y".repeat(50), 50), "y".repeat(50));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("subject\nbody"), "subject");
        assert_eq!(first_line(""), "");
    }
}
