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

//! # Data Export Module
//!
//! Spreadsheet output of a run.
//!
//! ## Module Components
//!
//! - **Workbook** ([workbook.rs](workbook/index.html)): print files, one per
//!   cleaned segment, and the feedback workbook with the `SUMMARY` sheet
//!
//! ## Usage Patterns
//!
//! ```rust
//! use pkz::export::PkzWorkbookWriter;
//!
//! let writer = PkzWorkbookWriter::from_config(&config);
//! let stats = writer.write_segment(&segment, &output_dir)?;
//! writer.write_feedback(&report, &config.feedback_path(&timestamp))?;
//! ```

pub mod workbook;

pub use workbook::{PkzWorkbookWriter, PkzWriteStats};
