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

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::Result;
use crate::operator::{PkzOperator, PkzStageOutput};
use crate::record::PkzSegment;

const EMAIL_PATTERN: &str = r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Returns the first email address found in `value`, if any.
pub fn extract_email(value: &str) -> Option<&str> {
    email_regex().find(value).map(|m| m.as_str())
}

/// Reduces the `Email` column to its first email address.
///
/// Values without a match become empty. No other column is touched.
#[derive(Debug, Default)]
pub struct PkzEmailSanitizer;

impl PkzEmailSanitizer {
    pub fn new() -> Self {
        PkzEmailSanitizer
    }
}

impl PkzOperator for PkzEmailSanitizer {
    fn name(&self) -> &'static str {
        "email.sanitize"
    }

    fn apply(&self, mut segment: PkzSegment) -> Result<PkzStageOutput> {
        let mut rewritten = 0usize;
        for record in &mut segment.records {
            let cleaned = record
                .email
                .as_deref()
                .and_then(extract_email)
                .map(str::to_string);
            if cleaned != record.email {
                record.email = cleaned;
                rewritten += 1;
            }
        }
        let mut output = PkzStageOutput::new(segment);
        output.rewritten = rewritten;
        Ok(output)
    }
}
