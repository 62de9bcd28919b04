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

//! Error types for benchmark log processing.
//!
//! Only environment problems surface as [`BenchlogError`]. Malformed blocks,
//! unparsable fields and configuration mismatches are reported as values
//! alongside the parsed runs and never abort a pass.

use std::fmt;
use thiserror::Error;

/// The kind of error that stopped processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was empty or contained only whitespace.
    EmptyInput,
    /// Security limit exceeded.
    Security,
    /// Invalid expected configuration.
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "EmptyInputError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Config => write!(f, "ConfigError"),
        }
    }
}

/// An error that prevented a report from being produced.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct BenchlogError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl BenchlogError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // Convenience constructors for each error kind
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyInput, message)
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Security, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

/// Result type for benchlog operations.
pub type BenchlogResult<T> = Result<T, BenchlogError>;
