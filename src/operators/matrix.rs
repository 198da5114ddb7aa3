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

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::operator::{PkzOperator, PkzStageOutput};
use crate::record::{PkzRecord, PkzSegment};
use crate::report::{PkzCategory, PkzFeedbackRow};

/// Whether a data matrix encodes the member id and the device id.
///
/// The matrix must be non-empty, made of ASCII digits only, and contain
/// both identifiers as substrings. A missing device id never validates.
pub fn is_valid_matrix(member_id: &str, device_id: Option<&str>, data_matrix: Option<&str>) -> bool {
    let (Some(device_id), Some(matrix)) = (device_id, data_matrix) else {
        return false;
    };
    !matrix.is_empty()
        && matrix.bytes().all(|b| b.is_ascii_digit())
        && matrix.contains(member_id)
        && matrix.contains(device_id)
}

fn record_has_valid_matrix(record: &PkzRecord) -> bool {
    is_valid_matrix(
        &record.member_id,
        record.device_id.as_deref(),
        record.data_matrix.as_deref(),
    )
}

/// Reports and excludes records whose `DataMatrix` fails [`is_valid_matrix`].
#[derive(Debug, Default)]
pub struct PkzMatrixValidator;

impl PkzMatrixValidator {
    pub fn new() -> Self {
        PkzMatrixValidator
    }
}

impl PkzOperator for PkzMatrixValidator {
    fn name(&self) -> &'static str {
        "matrix.validate"
    }

    fn apply(&self, segment: PkzSegment) -> Result<PkzStageOutput> {
        // a member is invalid as soon as one of its rows is, so every row of
        // that member is reported
        let invalid: BTreeSet<&str> = segment
            .records
            .iter()
            .filter(|record| !record_has_valid_matrix(record))
            .map(|record| record.member_id.as_str())
            .collect();
        let rows: Vec<PkzFeedbackRow> = segment
            .records
            .iter()
            .filter(|record| invalid.contains(record.member_id.as_str()))
            .map(|record| PkzFeedbackRow::new(PkzCategory::InvalidMatrices, record, &segment.name))
            .collect();

        let mut output = PkzStageOutput::new(segment);
        output.push_finding(PkzCategory::InvalidMatrices, rows);
        Ok(output)
    }
}
