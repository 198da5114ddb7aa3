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

use crate::logging::core::PkzLogRecord;

pub struct PkzJsonFormatter;

impl PkzJsonFormatter {
    pub fn format(record: &PkzLogRecord) -> String {
        record.to_json().to_string()
    }
}

/// `LEVEL - message`, the layout the print-file operators are used to.
pub struct PkzTextFormatter;

impl PkzTextFormatter {
    pub fn format(record: &PkzLogRecord) -> String {
        format!("{} - {}", record.level_name(), record.message)
    }
}
