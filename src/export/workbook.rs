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

//! # Workbook Writer
//!
//! Writes the print files and the feedback report as `.xlsx` workbooks.
//!
//! Print files hold one sheet named after the segment, with the delivered
//! columns in their delivered order. Every value is written as text so that
//! zip codes and ids keep their leading zeros.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::Serialize;

use crate::config::PkzConfig;
use crate::errors::Result;
use crate::record::PkzSegment;
use crate::report::summary::{SUMMARY_HEADERS, SUMMARY_SHEET};
use crate::report::PkzReport;

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Outcome of writing one workbook.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PkzWriteStats {
    pub path: PathBuf,
    pub sheets: usize,
    /// Data rows written, headers excluded.
    pub rows_written: usize,
}

/// Writes segment and feedback workbooks.
#[derive(Clone, Debug)]
pub struct PkzWorkbookWriter {
    min_column_width: f64,
    feedback_column_width: f64,
    feedback_width_columns: u16,
}

impl Default for PkzWorkbookWriter {
    fn default() -> Self {
        PkzWorkbookWriter {
            min_column_width: 15.0,
            feedback_column_width: 35.0,
            feedback_width_columns: 5,
        }
    }
}

impl PkzWorkbookWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PkzConfig) -> Self {
        PkzWorkbookWriter {
            min_column_width: config.min_column_width,
            feedback_column_width: config.feedback_column_width,
            feedback_width_columns: config.feedback_width_columns,
        }
    }

    /// Writes `segment` into `dir` as `<segment name>.xlsx`.
    pub fn write_segment(&self, segment: &PkzSegment, dir: &Path) -> Result<PkzWriteStats> {
        let path = dir.join(segment_file_name(segment));
        let header_format = Format::new().set_bold();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(sanitize_sheet_name(&segment.name))?;

        for (col, header) in segment.schema.headers().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, header.as_str(), &header_format)?;
        }
        for (row, record) in segment.records.iter().enumerate() {
            for (col, cell) in record.cells(&segment.schema).into_iter().enumerate() {
                let text = print_value(cell);
                if !text.is_empty() {
                    sheet.write_string(row as u32 + 1, col as u16, text)?;
                }
            }
        }
        for (col, width) in column_widths(segment, self.min_column_width)
            .into_iter()
            .enumerate()
        {
            sheet.set_column_width(col as u16, width)?;
        }

        workbook.save(&path)?;
        log::debug!("Wrote {} rows to {}", segment.len(), path.display());
        Ok(PkzWriteStats {
            path,
            sheets: 1,
            rows_written: segment.len(),
        })
    }

    /// Writes the feedback report: `SUMMARY` first, then one sheet per table.
    pub fn write_feedback(&self, report: &PkzReport, path: &Path) -> Result<PkzWriteStats> {
        let header_format = Format::new().set_bold();
        let mut workbook = Workbook::new();
        let mut rows_written = 0usize;

        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        write_headers(sheet, &SUMMARY_HEADERS, &header_format)?;
        for (idx, row) in report.summary_table().rows_with_total().iter().enumerate() {
            let line = idx as u32 + 1;
            sheet.write_string(line, 0, row.name.as_str())?;
            sheet.write_number(line, 1, row.n_members_at_load as f64)?;
            rows_written += 1;
        }
        self.apply_feedback_widths(sheet)?;

        for table in report.tables() {
            let sheet = workbook.add_worksheet();
            sheet.set_name(table.category().sheet_name())?;
            write_headers(sheet, &table.category().headers(), &header_format)?;
            for (idx, row) in table.rows().iter().enumerate() {
                for (col, cell) in row.cells().into_iter().enumerate() {
                    if !cell.is_empty() {
                        sheet.write_string(idx as u32 + 1, col as u16, cell)?;
                    }
                }
                rows_written += 1;
            }
            self.apply_feedback_widths(sheet)?;
        }

        workbook.save(path)?;
        log::debug!("Wrote feedback report to {}", path.display());
        Ok(PkzWriteStats {
            path: path.to_path_buf(),
            sheets: report.tables().len() + 1,
            rows_written,
        })
    }

    fn apply_feedback_widths(&self, sheet: &mut Worksheet) -> Result<()> {
        for col in 0..self.feedback_width_columns {
            sheet.set_column_width(col, self.feedback_column_width)?;
        }
        Ok(())
    }
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

/// Text written to a print file cell. Absent values and a literal `nan`
/// become empty.
pub fn print_value(cell: Option<&str>) -> &str {
    match cell {
        Some("nan") | None => "",
        Some(text) => text,
    }
}

/// File name of the print file for `segment`.
pub fn segment_file_name(segment: &PkzSegment) -> String {
    format!("{}.xlsx", segment.name)
}

/// Column widths of a print file: the longest value plus one, at least
/// `min_width`. Lengths are counted in characters.
pub fn column_widths(segment: &PkzSegment, min_width: f64) -> Vec<f64> {
    let mut longest = vec![0usize; segment.schema.headers().len()];
    for record in &segment.records {
        for (col, cell) in record.cells(&segment.schema).into_iter().enumerate() {
            let len = print_value(cell).chars().count();
            if let Some(slot) = longest.get_mut(col) {
                *slot = (*slot).max(len);
            }
        }
    }
    longest
        .into_iter()
        .map(|len| min_width.max(len as f64 + 1.0))
        .collect()
}

/// Makes `name` acceptable as an Excel sheet name.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}
