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

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::{PkzField, PkzRecord};

/// What happened to a member listed in a feedback table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PkzAction {
    Deleted,
    NotDeleted,
}

impl PkzAction {
    pub fn label(self) -> &'static str {
        match self {
            PkzAction::Deleted => "DELETED",
            PkzAction::NotDeleted => "not deleted",
        }
    }
}

/// The feedback tables, in the order they appear in the feedback workbook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PkzCategory {
    InvalidMatrices,
    AddressNoZipCity,
    NoAddressAtAll,
    ZipCityNoAddress,
    ZipNoCity,
    CityNoZip,
    Employees,
}

impl PkzCategory {
    pub const ALL: [PkzCategory; 7] = [
        PkzCategory::InvalidMatrices,
        PkzCategory::AddressNoZipCity,
        PkzCategory::NoAddressAtAll,
        PkzCategory::ZipCityNoAddress,
        PkzCategory::ZipNoCity,
        PkzCategory::CityNoZip,
        PkzCategory::Employees,
    ];

    pub fn sheet_name(self) -> &'static str {
        match self {
            PkzCategory::InvalidMatrices => "invalid_matrices",
            PkzCategory::AddressNoZipCity => "address_no_zipCity",
            PkzCategory::NoAddressAtAll => "no_address_at_all",
            PkzCategory::ZipCityNoAddress => "zipCity_no_address",
            PkzCategory::ZipNoCity => "zip_no_city",
            PkzCategory::CityNoZip => "city_no_zip",
            PkzCategory::Employees => "employees",
        }
    }

    /// Record fields copied into the table between `memberid` and `source`.
    pub fn extra_fields(self) -> &'static [PkzField] {
        match self {
            PkzCategory::InvalidMatrices => &[PkzField::DataMatrix],
            PkzCategory::Employees => &[PkzField::MemberName, PkzField::MemberStatus],
            _ => &[],
        }
    }

    pub fn headers(self) -> Vec<&'static str> {
        let mut headers = vec![PkzField::MemberId.column_name()];
        headers.extend(self.extra_fields().iter().map(|f| f.column_name()));
        headers.push("source");
        headers.push("action");
        headers
    }

    /// Whether members listed in this table are removed from the print file.
    pub fn triggers_deletion(self) -> bool {
        matches!(
            self,
            PkzCategory::InvalidMatrices
                | PkzCategory::AddressNoZipCity
                | PkzCategory::NoAddressAtAll
        )
    }

    pub fn action(self) -> PkzAction {
        if self.triggers_deletion() {
            PkzAction::Deleted
        } else {
            PkzAction::NotDeleted
        }
    }
}

/// One line of a feedback table. Equality covers every column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PkzFeedbackRow {
    pub member_id: String,
    pub extras: Vec<Option<String>>,
    pub source: String,
    pub action: PkzAction,
}

impl PkzFeedbackRow {
    /// Builds the row `category` keeps for `record` found in segment `source`.
    pub fn new(category: PkzCategory, record: &PkzRecord, source: &str) -> Self {
        PkzFeedbackRow {
            member_id: record.member_id.clone(),
            extras: category
                .extra_fields()
                .iter()
                .map(|field| record.get(*field).map(str::to_string))
                .collect(),
            source: source.to_string(),
            action: category.action(),
        }
    }

    /// Cell texts in header order; absent values are empty.
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![self.member_id.as_str()];
        cells.extend(self.extras.iter().map(|v| v.as_deref().unwrap_or("")));
        cells.push(self.source.as_str());
        cells.push(self.action.label());
        cells
    }
}

/// Append-only table that drops rows identical to one already present.
#[derive(Clone, Debug)]
pub struct PkzFeedbackTable {
    category: PkzCategory,
    rows: Vec<PkzFeedbackRow>,
    seen: HashSet<PkzFeedbackRow>,
}

impl PkzFeedbackTable {
    pub fn new(category: PkzCategory) -> Self {
        PkzFeedbackTable {
            category,
            rows: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn category(&self) -> PkzCategory {
        self.category
    }

    /// Appends rows in order, skipping duplicates. Returns how many were new.
    pub fn append<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = PkzFeedbackRow>,
    {
        let before = self.rows.len();
        for row in rows {
            if self.seen.insert(row.clone()) {
                self.rows.push(row);
            }
        }
        self.rows.len() - before
    }

    pub fn rows(&self) -> &[PkzFeedbackRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
