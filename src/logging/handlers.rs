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

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

use crate::errors::Result;
use crate::logging::core::PkzLogRecord;
use crate::logging::formatters::{PkzJsonFormatter, PkzTextFormatter};

pub trait PkzLogHandler {
    fn threshold(&self) -> LevelFilter;
    fn handle(&self, record: &PkzLogRecord);
    fn flush(&self) {}
}

fn format_line(record: &PkzLogRecord, json: bool) -> String {
    if json {
        PkzJsonFormatter::format(record)
    } else {
        PkzTextFormatter::format(record)
    }
}

pub struct PkzStdoutHandler {
    threshold: LevelFilter,
    json: bool,
}

impl PkzStdoutHandler {
    pub fn new(threshold: LevelFilter, json: bool) -> Self {
        PkzStdoutHandler { threshold, json }
    }
}

impl PkzLogHandler for PkzStdoutHandler {
    fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    fn handle(&self, record: &PkzLogRecord) {
        if record.level > self.threshold {
            return;
        }
        println!("{}", format_line(record, self.json));
    }
}

/// Writes to a file that is truncated when the handler is created, so each
/// run leaves exactly its own trace behind.
pub struct PkzFileHandler {
    threshold: LevelFilter,
    json: bool,
    file: Mutex<File>,
}

impl PkzFileHandler {
    pub fn create(path: &Path, threshold: LevelFilter, json: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(PkzFileHandler {
            threshold,
            json,
            file: Mutex::new(file),
        })
    }
}

impl PkzLogHandler for PkzFileHandler {
    fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    fn handle(&self, record: &PkzLogRecord) {
        if record.level > self.threshold {
            return;
        }
        let line = format_line(record, self.json);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
