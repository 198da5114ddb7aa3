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

use std::io::Read;

use csv::ReaderBuilder;

use crate::config::{PkzConfig, PkzMissingColumnPolicy};
use crate::errors::{PkzError, Result};
use crate::record::{PkzField, PkzRecord, PkzSchema, PkzSegment};

/// Parses one delimited text stream into a [`PkzSegment`].
///
/// The first row is the header. Every value is kept as text and empty cells
/// become `None`. Rows whose field count differs from the header are a load
/// error, as is a row without a member id.
#[derive(Clone, Debug)]
pub struct PkzSegmentReader {
    delimiter: u8,
    missing_columns: PkzMissingColumnPolicy,
}

impl Default for PkzSegmentReader {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            missing_columns: PkzMissingColumnPolicy::Fail,
        }
    }
}

impl PkzSegmentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PkzConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            missing_columns: config.missing_columns,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_missing_columns(mut self, policy: PkzMissingColumnPolicy) -> Self {
        self.missing_columns = policy;
        self
    }

    /// Reads a whole entry. `entry_name` names the segment and appears in
    /// every error raised for it.
    pub fn read<R: Read>(&self, entry_name: &str, reader: R) -> Result<PkzSegment> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| PkzError::load(entry_name, format!("header row: {e}")))?
            .iter()
            .map(|s| s.to_string())
            .collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(PkzError::load(entry_name, "no header row"));
        }

        let schema = PkzSchema::from_headers(headers);
        self.check_columns(entry_name, &schema)?;

        let mut records = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            // header is line 1
            let line = idx + 2;
            let row = result.map_err(|e| PkzError::load(entry_name, format!("line {line}: {e}")))?;
            let record = PkzRecord::from_cells(&schema, row.iter()).ok_or_else(|| {
                PkzError::load(entry_name, format!("line {line}: empty memberid"))
            })?;
            records.push(record);
        }

        log::debug!("Loaded {} records from {}", records.len(), entry_name);
        Ok(PkzSegment::new(entry_name, schema, records))
    }

    fn check_columns(&self, entry_name: &str, schema: &PkzSchema) -> Result<()> {
        let missing = schema.missing_fields();
        if missing.contains(&PkzField::MemberId) {
            return Err(PkzError::missing_column(
                entry_name,
                PkzField::MemberId.column_name(),
            ));
        }
        match (self.missing_columns, missing.first()) {
            (_, None) => Ok(()),
            (PkzMissingColumnPolicy::Fail, Some(field)) => {
                Err(PkzError::missing_column(entry_name, field.column_name()))
            }
            (PkzMissingColumnPolicy::FillEmpty, Some(_)) => {
                for field in &missing {
                    log::warn!(
                        "'{}' column not found in {}, treating it as empty",
                        field.column_name(),
                        entry_name
                    );
                }
                Ok(())
            }
        }
    }
}
