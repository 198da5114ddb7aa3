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

//! # Feedback Report Module
//!
//! Accumulates what a run changed or removed, across all segments.
//!
//! - **feedback**: the seven feedback tables (one row per flagged or deleted
//!   member) with deduplication on insert
//! - **summary**: member counts per segment plus the `Total` row
//!
//! [`PkzReport`] owns both and is the only cross-segment state of a run.

pub mod feedback;
pub mod summary;

use serde::Serialize;

pub use feedback::{PkzAction, PkzCategory, PkzFeedbackRow, PkzFeedbackTable};
pub use summary::{PkzSummary, PkzSummaryRow};

#[derive(Clone, Debug)]
pub struct PkzReport {
    tables: Vec<PkzFeedbackTable>,
    summary: PkzSummary,
}

impl Default for PkzReport {
    fn default() -> Self {
        Self::new()
    }
}

impl PkzReport {
    pub fn new() -> Self {
        PkzReport {
            tables: PkzCategory::ALL
                .iter()
                .map(|category| PkzFeedbackTable::new(*category))
                .collect(),
            summary: PkzSummary::default(),
        }
    }

    /// Adds rows to the table of `category`. Returns how many were new.
    pub fn record<I>(&mut self, category: PkzCategory, rows: I) -> usize
    where
        I: IntoIterator<Item = PkzFeedbackRow>,
    {
        self.table_mut(category).append(rows)
    }

    /// Registers the load count of a segment.
    pub fn summary(&mut self, name: impl Into<String>, count: usize) {
        self.summary.add(name, count);
    }

    pub fn table(&self, category: PkzCategory) -> &PkzFeedbackTable {
        // tables are built from PkzCategory::ALL, whose order matches the enum
        &self.tables[category as usize]
    }

    fn table_mut(&mut self, category: PkzCategory) -> &mut PkzFeedbackTable {
        &mut self.tables[category as usize]
    }

    /// All tables in workbook order.
    pub fn tables(&self) -> &[PkzFeedbackTable] {
        &self.tables
    }

    pub fn summary_table(&self) -> &PkzSummary {
        &self.summary
    }

    /// Row counts per table, keyed by sheet name.
    pub fn counts(&self) -> Vec<PkzTableCount> {
        self.tables
            .iter()
            .map(|table| PkzTableCount {
                sheet: table.category().sheet_name(),
                rows: table.len(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PkzTableCount {
    pub sheet: &'static str,
    pub rows: usize,
}
