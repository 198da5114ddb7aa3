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

//! Address checks.
//!
//! `ZipCity` is split into a digit-only `zip` and a letters-only `city`.
//! Together with the three address lines that gives every record exactly
//! one [`PkzAddressClass`]:
//!
//! | `ZipCity` | zip | city | any address line | class |
//! |-----------|-----|------|------------------|-------|
//! | absent    | -   | -    | yes              | `AddressNoZipCity` (deleted) |
//! | absent    | -   | -    | no               | `NoAddressAtAll` (deleted) |
//! | present   | no  | yes  | any              | `CityNoZip` |
//! | present   | yes | no   | any              | `ZipNoCity` |
//! | present   | yes | yes  | no               | `ZipCityNoAddress` |
//! | present   | yes | yes  | yes              | `Valid` |
//! | present   | no  | no   | any              | `Valid` |
//!
//! Deletion looks at `ZipCity` itself. A value that yields neither digits
//! nor letters (for example `"???"`) is present but unsplittable, so the
//! member is kept and not reported.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::Result;
use crate::operator::{PkzOperator, PkzStageOutput};
use crate::record::{PkzRecord, PkzSegment};
use crate::report::{PkzCategory, PkzFeedbackRow};

static NON_DIGIT_RE: OnceLock<Regex> = OnceLock::new();
static NON_CITY_RE: OnceLock<Regex> = OnceLock::new();

fn non_digit_regex() -> &'static Regex {
    NON_DIGIT_RE.get_or_init(|| Regex::new(r"[^0-9]").expect("zip pattern compiles"))
}

fn non_city_regex() -> &'static Regex {
    NON_CITY_RE.get_or_init(|| {
        Regex::new(r"[^\u{00C0}-\u{017F}A-Za-z\-\.'\s]").expect("city pattern compiles")
    })
}

/// Digits of a `ZipCity` value, `None` when there are none.
pub fn split_zip(zip_city: &str) -> Option<String> {
    blank_to_none(non_digit_regex().replace_all(zip_city, "").into_owned())
}

/// City part of a `ZipCity` value, trimmed. `None` when nothing remains.
pub fn split_city(zip_city: &str) -> Option<String> {
    let city = non_city_regex().replace_all(zip_city, "");
    blank_to_none(city.trim().to_string())
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn normalized(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Address view of one record with whitespace-only values removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkzAddress {
    pub zip_city: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub address_line1: Option<String>,
    pub post_box: Option<String>,
    pub street: Option<String>,
}

impl PkzAddress {
    pub fn derive(record: &PkzRecord) -> Self {
        let zip_city = normalized(record.zip_city.as_deref());
        PkzAddress {
            zip_city: zip_city.map(str::to_string),
            zip: zip_city.and_then(split_zip),
            city: zip_city.and_then(split_city),
            address_line1: normalized(record.address_line1.as_deref()).map(str::to_string),
            post_box: normalized(record.post_box.as_deref()).map(str::to_string),
            street: normalized(record.street.as_deref()).map(str::to_string),
        }
    }

    pub fn has_address_line(&self) -> bool {
        self.address_line1.is_some() || self.post_box.is_some() || self.street.is_some()
    }

    pub fn classify(&self) -> PkzAddressClass {
        if self.zip_city.is_none() {
            return if self.has_address_line() {
                PkzAddressClass::AddressNoZipCity
            } else {
                PkzAddressClass::NoAddressAtAll
            };
        }
        match (self.zip.is_some(), self.city.is_some(), self.has_address_line()) {
            (false, true, _) => PkzAddressClass::CityNoZip,
            (true, false, _) => PkzAddressClass::ZipNoCity,
            (true, true, false) => PkzAddressClass::ZipCityNoAddress,
            (true, true, true) | (false, false, _) => PkzAddressClass::Valid,
        }
    }
}

/// Address quality of one record. Exactly one variant holds per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PkzAddressClass {
    CityNoZip,
    ZipNoCity,
    ZipCityNoAddress,
    AddressNoZipCity,
    NoAddressAtAll,
    Valid,
}

impl PkzAddressClass {
    /// Feedback table the class is reported in; `Valid` is not reported.
    pub fn category(self) -> Option<PkzCategory> {
        match self {
            PkzAddressClass::CityNoZip => Some(PkzCategory::CityNoZip),
            PkzAddressClass::ZipNoCity => Some(PkzCategory::ZipNoCity),
            PkzAddressClass::ZipCityNoAddress => Some(PkzCategory::ZipCityNoAddress),
            PkzAddressClass::AddressNoZipCity => Some(PkzCategory::AddressNoZipCity),
            PkzAddressClass::NoAddressAtAll => Some(PkzCategory::NoAddressAtAll),
            PkzAddressClass::Valid => None,
        }
    }

    pub fn triggers_deletion(self) -> bool {
        self.category().is_some_and(PkzCategory::triggers_deletion)
    }
}

/// Classifies every record of a segment by address quality.
///
/// The segment passes through unchanged; members of the two deletion
/// classes end up in the exclusion set.
#[derive(Debug, Default)]
pub struct PkzAddressClassifier;

impl PkzAddressClassifier {
    pub fn new() -> Self {
        PkzAddressClassifier
    }

    /// Classes of all records, aligned with the segment order.
    pub fn classify_segment(segment: &PkzSegment) -> Vec<PkzAddressClass> {
        segment
            .records
            .iter()
            .map(|record| PkzAddress::derive(record).classify())
            .collect()
    }
}

const REPORTED: [PkzCategory; 5] = [
    PkzCategory::CityNoZip,
    PkzCategory::ZipNoCity,
    PkzCategory::ZipCityNoAddress,
    PkzCategory::AddressNoZipCity,
    PkzCategory::NoAddressAtAll,
];

impl PkzOperator for PkzAddressClassifier {
    fn name(&self) -> &'static str {
        "address.classify"
    }

    fn apply(&self, segment: PkzSegment) -> Result<PkzStageOutput> {
        let classes = Self::classify_segment(&segment);
        let mut buckets: Vec<Vec<PkzFeedbackRow>> = vec![Vec::new(); REPORTED.len()];

        for (record, class) in segment.records.iter().zip(&classes) {
            if let Some(category) = class.category() {
                if let Some(slot) = REPORTED.iter().position(|c| *c == category) {
                    buckets[slot].push(PkzFeedbackRow::new(category, record, &segment.name));
                }
            }
        }

        let mut output = PkzStageOutput::new(segment);
        for (category, rows) in REPORTED.into_iter().zip(buckets) {
            output.push_finding(category, rows);
        }
        Ok(output)
    }
}
