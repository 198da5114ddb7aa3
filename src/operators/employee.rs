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

use crate::errors::Result;
use crate::operator::{PkzOperator, PkzStageOutput};
use crate::record::{PkzRecord, PkzSegment};
use crate::report::{PkzCategory, PkzFeedbackRow};

/// Status suffix marking staff members. Matching is case-sensitive.
pub const EMPLOYEE_SUFFIX: &str = "Employee";

pub fn is_employee(record: &PkzRecord) -> bool {
    record
        .member_status
        .as_deref()
        .is_some_and(|status| status.ends_with(EMPLOYEE_SUFFIX))
}

/// Lists employees in the feedback report. They stay in the print file.
#[derive(Debug, Default)]
pub struct PkzEmployeeTagger;

impl PkzEmployeeTagger {
    pub fn new() -> Self {
        PkzEmployeeTagger
    }
}

impl PkzOperator for PkzEmployeeTagger {
    fn name(&self) -> &'static str {
        "employee.tag"
    }

    fn apply(&self, segment: PkzSegment) -> Result<PkzStageOutput> {
        let rows: Vec<PkzFeedbackRow> = segment
            .records
            .iter()
            .filter(|record| is_employee(record))
            .map(|record| PkzFeedbackRow::new(PkzCategory::Employees, record, &segment.name))
            .collect();

        let mut output = PkzStageOutput::new(segment);
        output.push_finding(PkzCategory::Employees, rows);
        Ok(output)
    }
}
