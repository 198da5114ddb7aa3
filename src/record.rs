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

//! # Pkz Record Module
//!
//! This module provides the data structures for member records and the
//! segments that group them. A [`PkzSegment`] is one delimited file from a
//! delivered archive; every row becomes a [`PkzRecord`].
//!
//! ## Design Principles
//!
//! - **Explicit schema**: the ten columns the checks depend on are typed
//!   fields, resolved once per segment by [`PkzSchema`]
//! - **Lossless**: columns the checks do not know about are carried along
//!   untouched so the print files keep the delivered layout
//! - **Text only**: every value stays a string; a zip code such as `01203`
//!   is never coerced to a number
//!
//! ## Usage Example
//!
//! ```rust
//! use pkz::record::{PkzField, PkzRecord};
//!
//! let record = PkzRecord::new("683415")
//!     .with(PkzField::ZipCity, "1203 Genève")
//!     .with(PkzField::Street, "Rue du Rhône 1");
//!
//! assert_eq!(record.get(PkzField::MemberId), Some("683415"));
//! assert_eq!(record.get(PkzField::PostBox), None);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Columns every segment is expected to deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PkzField {
    MemberId,
    Email,
    ZipCity,
    AddressLine1,
    PostBox,
    Street,
    DeviceId,
    DataMatrix,
    MemberName,
    MemberStatus,
}

impl PkzField {
    /// All required fields in canonical order.
    pub const ALL: [PkzField; 10] = [
        PkzField::MemberId,
        PkzField::Email,
        PkzField::ZipCity,
        PkzField::AddressLine1,
        PkzField::PostBox,
        PkzField::Street,
        PkzField::DeviceId,
        PkzField::DataMatrix,
        PkzField::MemberName,
        PkzField::MemberStatus,
    ];

    /// Header name of the column as it appears in the delivered files.
    pub fn column_name(self) -> &'static str {
        match self {
            PkzField::MemberId => "memberid",
            PkzField::Email => "Email",
            PkzField::ZipCity => "ZipCity",
            PkzField::AddressLine1 => "AddressLine1",
            PkzField::PostBox => "PostBox",
            PkzField::Street => "Street",
            PkzField::DeviceId => "DeviceID",
            PkzField::DataMatrix => "DataMatrix",
            PkzField::MemberName => "MemberName",
            PkzField::MemberStatus => "MemberStatus",
        }
    }

    /// Resolves a header name to a field. Matching is exact.
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.column_name() == name)
    }
}

/// Where a header column lands inside a [`PkzRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PkzColumn {
    /// One of the typed fields.
    Field(PkzField),
    /// Position inside [`PkzRecord::extra`].
    Extra(usize),
}

/// Column layout of one segment, built from its header row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkzSchema {
    headers: Vec<String>,
    columns: Vec<PkzColumn>,
}

impl PkzSchema {
    /// Builds the layout for a header row.
    ///
    /// The first occurrence of a required column name binds the typed field;
    /// every other header (including repeated names) becomes an extra column.
    pub fn from_headers(headers: Vec<String>) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        let mut bound: Vec<PkzField> = Vec::new();
        let mut extra = 0usize;

        for header in &headers {
            match PkzField::from_column_name(header) {
                Some(field) if !bound.contains(&field) => {
                    bound.push(field);
                    columns.push(PkzColumn::Field(field));
                }
                _ => {
                    columns.push(PkzColumn::Extra(extra));
                    extra += 1;
                }
            }
        }

        Self { headers, columns }
    }

    /// Header names in delivered order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column bindings aligned with [`PkzSchema::headers`].
    pub fn columns(&self) -> &[PkzColumn] {
        &self.columns
    }

    /// Whether the segment delivers the given field.
    pub fn has_field(&self, field: PkzField) -> bool {
        self.columns.contains(&PkzColumn::Field(field))
    }

    /// Required fields that the header row does not provide.
    pub fn missing_fields(&self) -> Vec<PkzField> {
        PkzField::ALL
            .iter()
            .copied()
            .filter(|field| !self.has_field(*field))
            .collect()
    }

    /// Number of columns carried as extras.
    pub fn extra_len(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| matches!(column, PkzColumn::Extra(_)))
            .count()
    }
}

/// One member row.
///
/// Empty cells are `None`. `member_id` is always present and never changes
/// after loading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkzRecord {
    pub member_id: String,
    pub email: Option<String>,
    pub zip_city: Option<String>,
    pub address_line1: Option<String>,
    pub post_box: Option<String>,
    pub street: Option<String>,
    pub device_id: Option<String>,
    pub data_matrix: Option<String>,
    pub member_name: Option<String>,
    pub member_status: Option<String>,
    /// Values of the columns the schema binds as extras, in schema order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Option<String>>,
}

impl PkzRecord {
    /// Constructs a record with only the member id set.
    pub fn new(member_id: impl Into<String>) -> Self {
        PkzRecord {
            member_id: member_id.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter; an empty value is stored as `None`.
    pub fn with(mut self, field: PkzField, value: impl Into<String>) -> Self {
        self.set(field, non_empty(value.into()));
        self
    }

    /// Builds a record from one delimited row laid out by `schema`.
    ///
    /// Returns `None` when the row has no member id.
    pub fn from_cells<'a, I>(schema: &PkzSchema, cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut record = PkzRecord {
            extra: vec![None; schema.extra_len()],
            ..Default::default()
        };
        let mut member_id = None;

        for (column, cell) in schema.columns().iter().zip(cells) {
            let value = non_empty(cell.to_string());
            match column {
                PkzColumn::Field(PkzField::MemberId) => member_id = value,
                PkzColumn::Field(field) => {
                    record.set(*field, value);
                }
                PkzColumn::Extra(idx) => record.extra[*idx] = value,
            }
        }

        record.member_id = member_id?;
        Some(record)
    }

    /// Reads a field.
    pub fn get(&self, field: PkzField) -> Option<&str> {
        match field {
            PkzField::MemberId => Some(self.member_id.as_str()),
            PkzField::Email => self.email.as_deref(),
            PkzField::ZipCity => self.zip_city.as_deref(),
            PkzField::AddressLine1 => self.address_line1.as_deref(),
            PkzField::PostBox => self.post_box.as_deref(),
            PkzField::Street => self.street.as_deref(),
            PkzField::DeviceId => self.device_id.as_deref(),
            PkzField::DataMatrix => self.data_matrix.as_deref(),
            PkzField::MemberName => self.member_name.as_deref(),
            PkzField::MemberStatus => self.member_status.as_deref(),
        }
    }

    /// Overwrites a field. The member id is immutable; attempting to set it
    /// returns `false` and leaves the record unchanged.
    pub fn set(&mut self, field: PkzField, value: Option<String>) -> bool {
        let slot = match field {
            PkzField::MemberId => return false,
            PkzField::Email => &mut self.email,
            PkzField::ZipCity => &mut self.zip_city,
            PkzField::AddressLine1 => &mut self.address_line1,
            PkzField::PostBox => &mut self.post_box,
            PkzField::Street => &mut self.street,
            PkzField::DeviceId => &mut self.device_id,
            PkzField::DataMatrix => &mut self.data_matrix,
            PkzField::MemberName => &mut self.member_name,
            PkzField::MemberStatus => &mut self.member_status,
        };
        *slot = value;
        true
    }

    /// Cell values in the column order of `schema`.
    pub fn cells<'a>(&'a self, schema: &PkzSchema) -> Vec<Option<&'a str>> {
        schema
            .columns()
            .iter()
            .map(|column| match column {
                PkzColumn::Field(field) => self.get(*field),
                PkzColumn::Extra(idx) => self.extra.get(*idx).and_then(|v| v.as_deref()),
            })
            .collect()
    }
}

/// Convenience alias for working on batches of records.
pub type PkzRecordBatch = Vec<PkzRecord>;

/// A named batch of member records loaded from one archive entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkzSegment {
    /// Entry file name without extension; used as report source.
    pub name: String,
    /// Entry name as stored in the archive.
    pub entry_name: String,
    pub schema: PkzSchema,
    pub records: PkzRecordBatch,
}

impl PkzSegment {
    /// Creates a segment, deriving its name from the entry name.
    pub fn new(entry_name: impl Into<String>, schema: PkzSchema, records: PkzRecordBatch) -> Self {
        let entry_name = entry_name.into();
        PkzSegment {
            name: segment_name(&entry_name),
            entry_name,
            schema,
            records,
        }
    }

    /// Replaces the records while keeping name and schema.
    pub fn with_records(self, records: PkzRecordBatch) -> Self {
        PkzSegment { records, ..self }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derives a segment name from an archive entry name: the file name
/// without directories and without its extension.
pub fn segment_name(entry_name: &str) -> String {
    Path::new(entry_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry_name.to_string())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
