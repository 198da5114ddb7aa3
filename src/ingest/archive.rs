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

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::errors::{PkzError, Result};
use crate::ingest::reader::PkzSegmentReader;
use crate::record::PkzSegment;

/// Loads every segment from the zip archives of an input directory.
#[derive(Clone, Debug, Default)]
pub struct PkzArchiveSource {
    reader: PkzSegmentReader,
}

impl PkzArchiveSource {
    pub fn new(reader: PkzSegmentReader) -> Self {
        Self { reader }
    }

    /// Lists the `*.zip` files directly inside `dir`, sorted by path.
    pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = Path::new(&escaped).join("*.zip");
        let mut archives = glob::glob(&pattern.to_string_lossy())
            .map_err(|e| PkzError::Io(format!("invalid archive pattern: {e}")))?
            .map(|entry| entry.map_err(|e| PkzError::Io(e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        archives.sort();
        Ok(archives)
    }

    /// Reads all file entries of one archive. Directory entries are skipped.
    ///
    /// The archive handle is released when this returns, on success and on
    /// failure alike.
    pub fn load_archive(&self, path: &Path) -> Result<Vec<PkzSegment>> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut segments = Vec::with_capacity(archive.len());
        let mut entry_names = HashSet::new();
        let mut file_entries = 0usize;

        for idx in 0..archive.len() {
            let entry = archive.by_index(idx)?;
            if entry.is_dir() {
                continue;
            }
            file_entries += 1;
            let name = entry.name().to_string();
            let segment = self.reader.read(&name, entry)?;
            if entry_names.insert(name) {
                segments.push(segment);
            }
        }

        if segments.len() != file_entries {
            return Err(PkzError::consistency(format!(
                "{} holds {} file entries but produced {} segments",
                path.display(),
                file_entries,
                segments.len()
            )));
        }
        Ok(segments)
    }

    /// Loads the segments of every archive in `dir`, archive by archive.
    ///
    /// Segment names must be unique across the whole directory since they
    /// name both the print files and the report sources.
    pub fn load_dir(&self, dir: &Path) -> Result<Vec<PkzSegment>> {
        let mut segments: Vec<PkzSegment> = Vec::new();
        let mut names = HashSet::new();

        for archive in Self::discover(dir)? {
            log::debug!("Reading archive {}", archive.display());
            for segment in self.load_archive(&archive)? {
                if !names.insert(segment.name.clone()) {
                    return Err(PkzError::consistency(format!(
                        "segment '{}' appears more than once (last seen in {})",
                        segment.name,
                        archive.display()
                    )));
                }
                segments.push(segment);
            }
        }
        Ok(segments)
    }
}
