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

//! Resource limits for log parsing.

/// Configurable limits for the parser.
///
/// Benchmark logs are small in practice, but the parser reads whatever it
/// is pointed at, so every pass is bounded.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 1GB).
    pub max_input_size: usize,
    /// Maximum line length in bytes (default: 1MB). Longer lines are never
    /// treated as block markers.
    pub max_line_length: usize,
    /// Maximum number of project sections extracted in one pass (default: 100k).
    pub max_blocks: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 1024 * 1024 * 1024, // 1GB
            max_line_length: 1024 * 1024,       // 1MB
            max_blocks: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_line_length: usize::MAX,
            max_blocks: usize::MAX,
        }
    }
}
