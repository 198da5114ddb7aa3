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

//! # Pkz Operator Tests - Matrix
//!
//! Tests for data matrix validation.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test matrix
//! ```

use pkz::operators::matrix::is_valid_matrix;
use pkz::operators::PkzMatrixValidator;
use pkz::{PkzAction, PkzCategory, PkzField, PkzOperator, PkzRecord, PkzSchema, PkzSegment};

fn member(id: &str, device: &str, matrix: &str) -> PkzRecord {
    PkzRecord::new(id)
        .with(PkzField::DeviceId, device)
        .with(PkzField::DataMatrix, matrix)
}

fn segment(records: Vec<PkzRecord>) -> PkzSegment {
    let headers = PkzField::ALL.iter().map(|f| f.column_name().to_string()).collect();
    PkzSegment::new("seg.csv", PkzSchema::from_headers(headers), records)
}

/// Tests the three validity clauses.
#[test]
fn test_matrix_clauses() {
    assert!(is_valid_matrix("683415", Some("99"), Some("68341599")));
    assert!(!is_valid_matrix("683415", Some("99"), Some("6834159A")));
    assert!(!is_valid_matrix("683415", Some("99"), Some("")));
    assert!(!is_valid_matrix("683415", Some("99"), None));
    assert!(!is_valid_matrix("683415", Some("42"), Some("68341599")));
    assert!(!is_valid_matrix("683415", Some("99"), Some("99999999")));
}

/// Tests that unicode digits do not count as digits.
#[test]
fn test_only_ascii_digits() {
    assert!(!is_valid_matrix("1", Some("2"), Some("12٣")));
}

/// Tests the operator: invalid members are reported with their matrix and
/// excluded, valid members are untouched.
#[test]
fn test_validator_reports_and_excludes() {
    let records = vec![
        member("683415", "99", "68341599"),
        member("100008", "1", "1000081A"),
        member("100009", "19", "99999919"),
        PkzRecord::new("100010"),
    ];

    let output = PkzMatrixValidator::new().apply(segment(records)).unwrap();
    let rows = output.rows(PkzCategory::InvalidMatrices);
    let reported: Vec<_> = rows
        .iter()
        .map(|r| (r.member_id.as_str(), r.extras[0].as_deref()))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("100008", Some("1000081A")),
            ("100009", Some("99999919")),
            ("100010", None)
        ]
    );
    assert!(rows.iter().all(|r| r.action == PkzAction::Deleted && r.source == "seg"));
    assert_eq!(output.exclusions.len(), 3);
    assert!(!output.exclusions.contains("683415"));
    assert_eq!(output.segment.len(), 4);
}

/// Tests that every row of a member is reported once one of them is invalid.
#[test]
fn test_all_rows_of_invalid_member_are_reported() {
    let records = vec![member("5", "1", "51"), member("5", "1", "5X1")];
    let output = PkzMatrixValidator::new().apply(segment(records)).unwrap();
    assert_eq!(output.rows(PkzCategory::InvalidMatrices).len(), 2);
    assert_eq!(output.exclusions.len(), 1);
}
