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

use serde::{Deserialize, Serialize};

pub const SUMMARY_SHEET: &str = "SUMMARY";
pub const SUMMARY_HEADERS: [&str; 2] = ["name", "n_members_at_load"];
pub const TOTAL_LABEL: &str = "Total";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkzSummaryRow {
    pub name: String,
    pub n_members_at_load: usize,
}

/// Member counts per segment, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkzSummary {
    rows: Vec<PkzSummaryRow>,
}

impl PkzSummary {
    pub fn add(&mut self, name: impl Into<String>, count: usize) {
        self.rows.push(PkzSummaryRow {
            name: name.into(),
            n_members_at_load: count,
        });
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.n_members_at_load).sum()
    }

    /// Per-segment rows followed by the aggregate `Total` row.
    pub fn rows_with_total(&self) -> Vec<PkzSummaryRow> {
        let mut rows = self.rows.clone();
        rows.push(PkzSummaryRow {
            name: TOTAL_LABEL.to_string(),
            n_members_at_load: self.total(),
        });
        rows
    }
}
