//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Pkz.
//! The Pkz project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Pkz Error Module
//!
//! This module defines the error types used throughout Pkz for consistent
//! error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Only structural problems are errors. A member with a broken email, an
//! incomplete address or a bad data matrix is an expected outcome that ends
//! up in a feedback table; it never surfaces as a [`PkzError`].
//!
//! - **Fatal loading**: an archive entry that cannot be parsed aborts the run
//! - **Schema**: a segment without a required column is rejected (or filled,
//!   depending on the configured policy)
//! - **Context-Rich**: errors carry the entry, segment or operator name
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors
//! - **Zip**: ZIP archive operation errors
//! - **Load**: An archive entry is not parsable as delimited text
//! - **MissingColumn**: A required column is absent from a segment
//! - **Consistency**: Loaded segments do not match the archive contents
//! - **Spreadsheet**: Failures while writing XLSX output
//! - **Config**: Invalid or unreadable configuration
//! - **Serde**: Serialization/deserialization errors
//! - **Operator**: Failures raised inside an operator

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::result::ZipError;

/// Convenience result type used throughout Pkz.
pub type Result<T> = std::result::Result<T, PkzError>;

/// Canonical error enumeration for Pkz.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum PkzError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors originating from ZIP file operations.
    #[error("zip error: {0}")]
    Zip(String),

    /// An archive entry could not be read as delimited text.
    #[error("could not read the file {entry}: {message}")]
    Load { entry: String, message: String },

    /// A required column is absent from a segment.
    #[error("segment '{segment}' is missing column '{column}'")]
    MissingColumn { segment: String, column: String },

    /// The loaded segments disagree with the archive contents.
    #[error("consistency violation: {0}")]
    Consistency(String),

    /// Failures raised by the spreadsheet writer.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Invalid configuration values or unreadable configuration files.
    #[error("config error: {message}")]
    Config { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any failure raised by an operator implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },
}

impl From<io::Error> for PkzError {
    fn from(err: io::Error) -> Self {
        PkzError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PkzError {
    fn from(err: serde_json::Error) -> Self {
        PkzError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for PkzError {
    fn from(err: serde_yaml::Error) -> Self {
        PkzError::Serde(err.to_string())
    }
}

impl From<ZipError> for PkzError {
    fn from(err: ZipError) -> Self {
        PkzError::Zip(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for PkzError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        PkzError::Spreadsheet(err.to_string())
    }
}

impl PkzError {
    /// Helper to construct load errors for an archive entry.
    pub fn load(entry: impl Into<String>, message: impl Into<String>) -> Self {
        PkzError::Load {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// Helper to construct missing column errors.
    pub fn missing_column(segment: impl Into<String>, column: impl Into<String>) -> Self {
        PkzError::MissingColumn {
            segment: segment.into(),
            column: column.into(),
        }
    }

    /// Helper to construct consistency errors.
    pub fn consistency<T: Into<String>>(message: T) -> Self {
        PkzError::Consistency(message.into())
    }

    /// Helper to construct configuration errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        PkzError::Config {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        PkzError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }
}
