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

//! # Pkz Core Tests - Ingest
//!
//! Tests for loading segments out of the delivered zip archives.
//!
//! ## Test Categories
//!
//! - **Discovery**: only `*.zip` files are picked up, in sorted order
//! - **Parsing**: values stay text, segment names come from the entry names
//! - **Failures**: unparsable entries, missing columns and duplicate
//!   segments abort loading
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test ingest
//! ```

#[path = "../common/mod.rs"]
mod common;

use pkz::{PkzArchiveSource, PkzError, PkzMissingColumnPolicy, PkzSegmentReader};
use tempfile::TempDir;

/// Tests that every entry of every archive becomes one segment.
#[test]
fn test_load_dir_reads_all_archives() {
    let tmp = TempDir::new().unwrap();
    let input = common::standard_input(tmp.path());

    let segments = PkzArchiveSource::default().load_dir(&input).unwrap();
    let names: Vec<_> = segments.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Segment_A", "Segment_B"]);
    assert_eq!(segments[0].len(), 9);
    assert_eq!(segments[1].len(), 1);
}

/// Tests that numeric-looking values are not coerced.
///
/// The leading zero of the zip code must survive loading.
#[test]
fn test_values_stay_text() {
    let tmp = TempDir::new().unwrap();
    let input = common::standard_input(tmp.path());

    let segments = PkzArchiveSource::default().load_dir(&input).unwrap();
    let record = &segments[1].records[0];
    assert_eq!(record.member_id, "200001");
    assert_eq!(record.zip_city.as_deref(), Some("01203 Genève"));
    assert_eq!(record.extra, vec![Some("Frau".to_string())]);
}

/// Tests that only zip files directly inside the directory are considered.
#[test]
fn test_discover_ignores_other_files() {
    let tmp = TempDir::new().unwrap();
    let input = common::standard_input(tmp.path());
    std::fs::write(input.join("notes.txt"), "not an archive").unwrap();
    std::fs::write(input.join("log.log"), "").unwrap();

    let archives = PkzArchiveSource::discover(&input).unwrap();
    assert_eq!(archives.len(), 2);
    assert!(archives[0].ends_with("a_delivery.zip"));
    assert!(archives[1].ends_with("b_delivery.zip"));
}

/// Tests that several entries in one archive load in archive order and that
/// directory entries are skipped.
#[test]
fn test_archive_with_folder_and_several_entries() {
    let tmp = TempDir::new().unwrap();
    let a = common::segment_a();
    let b = common::segment_b();
    let path = common::write_zip(
        tmp.path(),
        "bundle.zip",
        &[("export/", ""), ("export/first.csv", &a), ("export/second.csv", &b)],
    );

    let segments = PkzArchiveSource::default().load_archive(&path).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].name, "first");
    assert_eq!(segments[0].entry_name, "export/first.csv");
    assert_eq!(segments[1].name, "second");
}

/// Tests that an unparsable entry aborts loading with a load error.
#[test]
fn test_ragged_entry_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let broken = format!("{}\n1|Herr|only three\n", common::HEADER);
    common::write_zip(tmp.path(), "broken.zip", &[("broken.csv", &broken)]);

    let err = PkzArchiveSource::default().load_dir(tmp.path()).unwrap_err();
    match err {
        PkzError::Load { entry, message } => {
            assert_eq!(entry, "broken.csv");
            assert!(message.contains("line 2"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Tests that a segment name appearing in two archives is rejected.
#[test]
fn test_duplicate_segment_names_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let a = common::segment_a();
    common::write_zip(tmp.path(), "one.zip", &[("Segment_A.csv", &a)]);
    common::write_zip(tmp.path(), "two.zip", &[("Segment_A.csv", &a)]);

    let err = PkzArchiveSource::default().load_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, PkzError::Consistency(_)));
}

/// Tests both missing-column policies.
///
/// `Fail` names the first missing column; `FillEmpty` loads the segment with
/// the column left empty.
#[test]
fn test_missing_column_policies() {
    let data = "memberid|Email|ZipCity|AddressLine1|PostBox|Street|DeviceID|DataMatrix|MemberName\n\
                1|a@b.ch|1000 Lausanne|||Rue 1|2|12|Anna\n";

    let err = PkzSegmentReader::new()
        .read("short.csv", data.as_bytes())
        .unwrap_err();
    assert!(
        matches!(err, PkzError::MissingColumn { ref column, .. } if column == "MemberStatus")
    );

    let segment = PkzSegmentReader::new()
        .with_missing_columns(PkzMissingColumnPolicy::FillEmpty)
        .read("short.csv", data.as_bytes())
        .unwrap();
    assert_eq!(segment.len(), 1);
    assert_eq!(segment.records[0].member_status, None);
}

/// Tests that an empty directory yields no segments rather than an error.
#[test]
fn test_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let segments = PkzArchiveSource::default().load_dir(tmp.path()).unwrap();
    assert!(segments.is_empty());
}
