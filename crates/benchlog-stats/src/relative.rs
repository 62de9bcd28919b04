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

//! Relative change between two timings.

use std::fmt;

/// Change of a timing relative to a reference timing.
///
/// The ratio is `reference / current`, so values above 1 mean the current
/// timing is faster. The percentage is `(ratio - 1) * 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Relative {
    /// The point is the reference itself (ratio 1, percentage 0).
    Baseline,
    /// Ordinary ratio.
    Finite { ratio: f64, percent: f64 },
    /// The current timing was zero or negative.
    Unbounded,
}

impl Relative {
    /// Compare `current` against `reference`.
    pub fn between(reference: f64, current: f64) -> Self {
        if current <= 0.0 || !current.is_finite() {
            return Self::Unbounded;
        }
        let ratio = reference / current;
        Self::Finite {
            ratio,
            percent: (ratio - 1.0) * 100.0,
        }
    }

    /// Speedup factor; 1 for the baseline, infinity when unbounded.
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Baseline => 1.0,
            Self::Finite { ratio, .. } => *ratio,
            Self::Unbounded => f64::INFINITY,
        }
    }

    /// Percentage change; 0 for the baseline, infinity when unbounded.
    pub fn percent(&self) -> f64 {
        match self {
            Self::Baseline => 0.0,
            Self::Finite { percent, .. } => *percent,
            Self::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Finite { ratio, percent } => write!(f, "{:+.1}% ({:.2}x)", percent, ratio),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}
