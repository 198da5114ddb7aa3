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

//! # Pkz Operator Module
//!
//! This module defines the operator trait every segment check implements,
//! together with the value an operator hands back to the pipeline.
//!
//! ## Operator Design
//!
//! An operator receives a whole [`PkzSegment`] by value and returns a
//! [`PkzStageOutput`]: the (possibly rewritten) segment, the feedback rows
//! it produced, and the member ids it wants removed. Operators never touch
//! the report or the filesystem; the pipeline merges their findings.
//!
//! ```rust
//! use pkz::errors::Result;
//! use pkz::operator::{PkzOperator, PkzStageOutput};
//! use pkz::record::PkzSegment;
//!
//! #[derive(Debug)]
//! struct Passthrough;
//!
//! impl PkzOperator for Passthrough {
//!     fn name(&self) -> &'static str {
//!         "passthrough"
//!     }
//!
//!     fn apply(&self, segment: PkzSegment) -> Result<PkzStageOutput> {
//!         Ok(PkzStageOutput::new(segment))
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Per-record findings are data, not errors. An operator only fails on a
//! structural problem, and [`execute_operator`] tags that failure with the
//! operator name.

use std::collections::BTreeSet;

use crate::errors::{PkzError, Result};
use crate::record::PkzSegment;
use crate::report::{PkzCategory, PkzFeedbackRow};

/// Contract every segment check fulfills.
///
/// Operators are stateless and deterministic: the same segment always yields
/// the same output.
pub trait PkzOperator: std::fmt::Debug {
    /// Unique, human-readable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Runs the check over one segment.
    fn apply(&self, segment: PkzSegment) -> Result<PkzStageOutput>;
}

/// Feedback rows an operator produced for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkzFinding {
    pub category: PkzCategory,
    pub rows: Vec<PkzFeedbackRow>,
}

/// What an operator returns for one segment.
#[derive(Clone, Debug)]
pub struct PkzStageOutput {
    pub segment: PkzSegment,
    pub findings: Vec<PkzFinding>,
    /// Member ids this operator wants removed from the print file.
    pub exclusions: BTreeSet<String>,
    /// Number of records whose values the operator rewrote.
    pub rewritten: usize,
}

impl PkzStageOutput {
    pub fn new(segment: PkzSegment) -> Self {
        PkzStageOutput {
            segment,
            findings: Vec::new(),
            exclusions: BTreeSet::new(),
            rewritten: 0,
        }
    }

    /// Adds the rows of one category; deletion categories also feed the
    /// exclusion set.
    pub fn push_finding(&mut self, category: PkzCategory, rows: Vec<PkzFeedbackRow>) {
        if category.triggers_deletion() {
            self.exclusions
                .extend(rows.iter().map(|row| row.member_id.clone()));
        }
        self.findings.push(PkzFinding { category, rows });
    }

    /// Rows recorded for `category`, empty when the operator did not emit it.
    pub fn rows(&self, category: PkzCategory) -> &[PkzFeedbackRow] {
        self.findings
            .iter()
            .find(|finding| finding.category == category)
            .map(|finding| finding.rows.as_slice())
            .unwrap_or(&[])
    }
}

/// Runs an operator and tags any failure with its name.
pub fn execute_operator(operator: &dyn PkzOperator, segment: PkzSegment) -> Result<PkzStageOutput> {
    operator
        .apply(segment)
        .map_err(|err| PkzError::operator(operator.name(), err.to_string()))
}
