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

//! # Pkz Operator Tests - Address
//!
//! Tests for splitting `ZipCity` and classifying address quality.
//!
//! ## Test Categories
//!
//! - **Splitting**: zip and city extraction, including accented cities
//! - **Classification**: one case per class plus a property test over
//!   arbitrary field combinations
//! - **Operator**: feedback rows and exclusions for a segment
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test address
//! ```

use pkz::operators::address::{split_city, split_zip};
use pkz::operators::{PkzAddress, PkzAddressClass, PkzAddressClassifier};
use pkz::{PkzCategory, PkzField, PkzOperator, PkzRecord, PkzSchema, PkzSegment};
use proptest::prelude::*;

fn segment(records: Vec<PkzRecord>) -> PkzSegment {
    let headers = PkzField::ALL.iter().map(|f| f.column_name().to_string()).collect();
    PkzSegment::new("Segment_A.csv", PkzSchema::from_headers(headers), records)
}

fn class_of(record: &PkzRecord) -> PkzAddressClass {
    PkzAddress::derive(record).classify()
}

/// Tests the split of an accented city.
#[test]
fn test_split_geneve() {
    assert_eq!(split_zip("1203 Genève").as_deref(), Some("1203"));
    assert_eq!(split_city("1203 Genève").as_deref(), Some("Genève"));
    assert_eq!(split_city("8001 Zürich-Altstetten").as_deref(), Some("Zürich-Altstetten"));
    assert_eq!(split_zip("Lausanne"), None);
    assert_eq!(split_city("8000"), None);
}

/// Tests one record per class.
#[test]
fn test_each_class() {
    let base = |zip_city: &str| PkzRecord::new("683415").with(PkzField::ZipCity, zip_city);

    assert_eq!(
        class_of(&base("1203 Genève").with(PkzField::Street, "Rue 1")),
        PkzAddressClass::Valid
    );
    assert_eq!(class_of(&base("1203 Genève")), PkzAddressClass::ZipCityNoAddress);
    assert_eq!(class_of(&base("Genève")), PkzAddressClass::CityNoZip);
    assert_eq!(class_of(&base("1203")), PkzAddressClass::ZipNoCity);
    assert_eq!(
        class_of(&PkzRecord::new("1").with(PkzField::PostBox, "Postfach 3")),
        PkzAddressClass::AddressNoZipCity
    );
    assert_eq!(class_of(&PkzRecord::new("1")), PkzAddressClass::NoAddressAtAll);
}

/// Tests that whitespace-only values count as empty in every address field.
#[test]
fn test_whitespace_only_is_empty() {
    let record = PkzRecord::new("1")
        .with(PkzField::ZipCity, "  ")
        .with(PkzField::AddressLine1, "\t")
        .with(PkzField::PostBox, " ")
        .with(PkzField::Street, "   ");
    assert_eq!(class_of(&record), PkzAddressClass::NoAddressAtAll);
}

/// Tests that a non-empty `ZipCity` without digits or letters keeps the
/// member, while an empty one deletes it.
#[test]
fn test_unsplittable_zip_city_is_kept() {
    let records = vec![
        PkzRecord::new("1")
            .with(PkzField::ZipCity, "???")
            .with(PkzField::Street, "Main 1"),
        PkzRecord::new("2").with(PkzField::ZipCity, "#"),
        PkzRecord::new("3").with(PkzField::Street, "Main 3"),
    ];

    assert_eq!(class_of(&records[0]), PkzAddressClass::Valid);
    assert_eq!(class_of(&records[1]), PkzAddressClass::Valid);
    assert_eq!(class_of(&records[2]), PkzAddressClass::AddressNoZipCity);

    let output = PkzAddressClassifier::new().apply(segment(records)).unwrap();
    let excluded: Vec<_> = output.exclusions.iter().cloned().collect();
    assert_eq!(excluded, vec!["3"]);
    assert!(output.rows(PkzCategory::NoAddressAtAll).is_empty());
}

/// Tests that classifying the classifier's own output changes nothing.
#[test]
fn test_classifier_is_idempotent() {
    let records = vec![
        PkzRecord::new("1").with(PkzField::ZipCity, " 1203  Genève "),
        PkzRecord::new("2").with(PkzField::ZipCity, "8001 Zürich-Altstetten"),
        PkzRecord::new("3").with(PkzField::Street, "Hauptstrasse 3"),
    ];
    let classifier = PkzAddressClassifier::new();

    let first = classifier.apply(segment(records)).unwrap();
    let second = classifier.apply(first.segment.clone()).unwrap();
    assert_eq!(second.segment.records, first.segment.records);
    assert_eq!(second.findings, first.findings);
    assert_eq!(second.exclusions, first.exclusions);

    for record in &first.segment.records {
        let address = PkzAddress::derive(record);
        if let Some(zip) = address.zip {
            assert_eq!(split_zip(&zip), Some(zip));
        }
        if let Some(city) = address.city {
            assert_eq!(split_city(&city), Some(city));
        }
    }
}

/// Tests the operator output for a segment with every class.
#[test]
fn test_classifier_output() {
    let records = vec![
        PkzRecord::new("1").with(PkzField::ZipCity, "Lausanne"),
        PkzRecord::new("2").with(PkzField::ZipCity, "8000"),
        PkzRecord::new("3").with(PkzField::ZipCity, "3000 Bern"),
        PkzRecord::new("4").with(PkzField::Street, "Hauptstrasse 4"),
        PkzRecord::new("5"),
        PkzRecord::new("6")
            .with(PkzField::ZipCity, "1203 Genève")
            .with(PkzField::Street, "Rue 6"),
    ];

    let output = PkzAddressClassifier::new().apply(segment(records.clone())).unwrap();
    assert_eq!(output.segment.records, records);

    let ids = |category| -> Vec<String> {
        output
            .rows(category)
            .iter()
            .map(|r| r.member_id.clone())
            .collect()
    };
    assert_eq!(ids(PkzCategory::CityNoZip), vec!["1"]);
    assert_eq!(ids(PkzCategory::ZipNoCity), vec!["2"]);
    assert_eq!(ids(PkzCategory::ZipCityNoAddress), vec!["3"]);
    assert_eq!(ids(PkzCategory::AddressNoZipCity), vec!["4"]);
    assert_eq!(ids(PkzCategory::NoAddressAtAll), vec!["5"]);
    assert!(output.rows(PkzCategory::CityNoZip)[0].source == "Segment_A");

    let excluded: Vec<_> = output.exclusions.iter().cloned().collect();
    assert_eq!(excluded, vec!["4", "5"]);
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("   ".to_string())),
        "[0-9]{1,5}".prop_map(Some),
        "[A-Za-zéè' .-]{1,12}".prop_map(Some),
        "[0-9]{4} [A-Za-zü]{3,10}".prop_map(Some),
        "[?!#]{1,3}".prop_map(Some),
    ]
}

fn zip_city_text() -> impl Strategy<Value = String> {
    "[ \\t]{0,2}[0-9]{0,5}[ \\t]{0,3}[A-Za-zéèü' .-]{0,12}[ \\t?#]{0,3}"
}

proptest! {
    /// Splitting an already split zip or city yields it unchanged.
    #[test]
    fn test_split_is_idempotent(zip_city in zip_city_text()) {
        if let Some(zip) = split_zip(&zip_city) {
            prop_assert_eq!(split_zip(&zip), Some(zip));
        }
        if let Some(city) = split_city(&zip_city) {
            prop_assert_eq!(split_city(&city), Some(city));
        }
    }

    /// Every record lands in exactly one report table, or in none when valid,
    /// and deletion follows the class.
    #[test]
    fn test_classes_partition_records(
        zip_city in optional_text(),
        line1 in optional_text(),
        post_box in optional_text(),
        street in optional_text(),
    ) {
        let mut record = PkzRecord::new("1");
        record.zip_city = zip_city;
        record.address_line1 = line1;
        record.post_box = post_box;
        record.street = street;

        let output = PkzAddressClassifier::new().apply(segment(vec![record.clone()])).unwrap();
        let hits: Vec<_> = output
            .findings
            .iter()
            .filter(|f| !f.rows.is_empty())
            .map(|f| f.category)
            .collect();

        let class = class_of(&record);
        match class.category() {
            Some(category) => {
                prop_assert_eq!(hits, vec![category]);
            }
            None => {
                prop_assert!(hits.is_empty());
            }
        }
        prop_assert_eq!(output.exclusions.len(), usize::from(class.triggers_deletion()));
    }
}
