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

//! # Pkz Core Tests - Report
//!
//! Tests for the feedback tables and the load summary.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test report
//! ```

use pkz::record::{PkzField, PkzRecord};
use pkz::report::summary::TOTAL_LABEL;
use pkz::{PkzAction, PkzCategory, PkzFeedbackRow, PkzReport};

fn row(category: PkzCategory, member_id: &str, source: &str) -> PkzFeedbackRow {
    PkzFeedbackRow::new(category, &PkzRecord::new(member_id), source)
}

/// Tests that an identical row appended twice is kept once.
#[test]
fn test_identical_rows_are_deduplicated() {
    let mut report = PkzReport::new();
    let first = report.record(PkzCategory::CityNoZip, vec![row(PkzCategory::CityNoZip, "1", "seg")]);
    let second = report.record(PkzCategory::CityNoZip, vec![row(PkzCategory::CityNoZip, "1", "seg")]);

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(report.table(PkzCategory::CityNoZip).len(), 1);
}

/// Tests that rows differing in any column are all kept, in insertion order.
#[test]
fn test_distinct_rows_are_kept_in_order() {
    let mut report = PkzReport::new();
    report.record(
        PkzCategory::ZipNoCity,
        vec![
            row(PkzCategory::ZipNoCity, "2", "seg_a"),
            row(PkzCategory::ZipNoCity, "1", "seg_a"),
            row(PkzCategory::ZipNoCity, "1", "seg_b"),
            row(PkzCategory::ZipNoCity, "2", "seg_a"),
        ],
    );

    let ids: Vec<_> = report
        .table(PkzCategory::ZipNoCity)
        .rows()
        .iter()
        .map(|r| (r.member_id.as_str(), r.source.as_str()))
        .collect();
    assert_eq!(ids, vec![("2", "seg_a"), ("1", "seg_a"), ("1", "seg_b")]);
}

/// Tests that extra columns take part in the duplicate check.
#[test]
fn test_extras_distinguish_rows() {
    let mut report = PkzReport::new();
    let a = PkzRecord::new("7").with(PkzField::DataMatrix, "7A");
    let b = PkzRecord::new("7").with(PkzField::DataMatrix, "7B");
    report.record(
        PkzCategory::InvalidMatrices,
        vec![
            PkzFeedbackRow::new(PkzCategory::InvalidMatrices, &a, "seg"),
            PkzFeedbackRow::new(PkzCategory::InvalidMatrices, &b, "seg"),
        ],
    );
    assert_eq!(report.table(PkzCategory::InvalidMatrices).len(), 2);
}

/// Tests the column layout and action of every table.
#[test]
fn test_table_layouts() {
    assert_eq!(
        PkzCategory::InvalidMatrices.headers(),
        vec!["memberid", "DataMatrix", "source", "action"]
    );
    assert_eq!(
        PkzCategory::Employees.headers(),
        vec!["memberid", "MemberName", "MemberStatus", "source", "action"]
    );
    assert_eq!(
        PkzCategory::CityNoZip.headers(),
        vec!["memberid", "source", "action"]
    );

    let deleting: Vec<_> = PkzCategory::ALL
        .into_iter()
        .filter(|c| c.action() == PkzAction::Deleted)
        .collect();
    assert_eq!(
        deleting,
        vec![
            PkzCategory::InvalidMatrices,
            PkzCategory::AddressNoZipCity,
            PkzCategory::NoAddressAtAll
        ]
    );
    assert_eq!(PkzAction::Deleted.label(), "DELETED");
    assert_eq!(PkzAction::NotDeleted.label(), "not deleted");
}

/// Tests that employee rows carry name and status.
#[test]
fn test_employee_row_cells() {
    let record = PkzRecord::new("5")
        .with(PkzField::MemberName, "Anna Meier")
        .with(PkzField::MemberStatus, "Staff Employee");
    let row = PkzFeedbackRow::new(PkzCategory::Employees, &record, "seg");
    assert_eq!(
        row.cells(),
        vec!["5", "Anna Meier", "Staff Employee", "seg", "not deleted"]
    );
}

/// Tests that the summary ends with a total over all segments.
#[test]
fn test_summary_total() {
    let mut report = PkzReport::new();
    report.summary("Segment_A", 8);
    report.summary("Segment_B", 1);

    let rows = report.summary_table().rows_with_total();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Segment_A");
    assert_eq!(rows[2].name, TOTAL_LABEL);
    assert_eq!(rows[2].n_members_at_load, 9);
}

/// Tests the sheet order of the feedback workbook.
#[test]
fn test_sheet_order() {
    let report = PkzReport::new();
    let sheets: Vec<_> = report
        .tables()
        .iter()
        .map(|t| t.category().sheet_name())
        .collect();
    assert_eq!(
        sheets,
        vec![
            "invalid_matrices",
            "address_no_zipCity",
            "no_address_at_all",
            "zipCity_no_address",
            "zip_no_city",
            "city_no_zip",
            "employees"
        ]
    );
}
