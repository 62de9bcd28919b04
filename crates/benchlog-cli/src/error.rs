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

//! Structured error types for the benchlog CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchlog CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). Set BENCHLOG_MAX_FILE_SIZE to raise the limit")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The log could not be processed at all.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Expected configuration or option values are invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// YAML deserialization error.
    #[error("YAML format error: {message}")]
    YamlFormat { message: String },

    /// Validation found errors, or warnings with `-W`.
    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::YamlFormat {
            message: source.to_string(),
        }
    }
}

impl From<benchlog::BenchlogError> for CliError {
    fn from(source: benchlog::BenchlogError) -> Self {
        match source.kind {
            benchlog::ErrorKind::Config => Self::Config(source.message),
            _ => Self::Parse(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bench.log",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.log"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.log", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.log"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
        assert!(msg.contains("BENCHLOG_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = CliError::ValidationFailed {
            errors: 1,
            warnings: 3,
        };
        assert_eq!(err.to_string(), "Validation failed: 1 error(s), 3 warning(s)");
    }

    #[test]
    fn test_json_format_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(matches!(cli_err, CliError::JsonFormat { .. }));
    }

    #[test]
    fn test_yaml_format_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{ not: a list").unwrap_err();
        let cli_err: CliError = yaml_err.into();
        assert!(matches!(cli_err, CliError::YamlFormat { .. }));
    }

    #[test]
    fn test_benchlog_error_conversion() {
        let cli_err: CliError = benchlog::BenchlogError::empty_input("log is empty").into();
        assert!(matches!(cli_err, CliError::Parse(_)));
        assert!(cli_err.to_string().contains("log is empty"));

        let cli_err: CliError = benchlog::BenchlogError::config("bad grid").into();
        assert_eq!(cli_err.to_string(), "Configuration error: bad grid");
    }
}
