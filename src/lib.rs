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

//! # Pkz Core Library
//!
//! Pkz turns the member exports of a marketing campaign into print files.
//! Each delivery is a folder of zip archives holding pipe-delimited files;
//! every file is a segment of members. Pkz cleans emails, checks addresses
//! and data matrix codes, removes members that cannot be printed, and writes
//! one spreadsheet per segment plus a feedback workbook listing everything
//! it changed or removed.
//!
//! ## Module Overview
//!
//! - **errors**: [`PkzError`] and the crate-wide [`Result`]
//! - **config**: run configuration and its file overlay
//! - **logging**: console and file log handlers behind the `log` facade
//! - **record**: member records, schemas and segments
//! - **ingest**: archive discovery and delimited-text parsing
//! - **operator**: the [`PkzOperator`] trait
//! - **operators**: the email, address, matrix, employee and deletion steps
//! - **report**: feedback tables and the load summary
//! - **metrics**: per-segment and per-run counters
//! - **export**: `.xlsx` output
//! - **pipeline**: the orchestrator tying it together
//!
//! ## Quick Start
//!
//! ```rust
//! use pkz::{PkzConfig, PkzPipeline};
//!
//! let config = PkzConfig::new("INM_TEST", "deliveries/2024-05");
//! let outcome = PkzPipeline::new(config).run()?;
//! println!("{} print files", outcome.segment_files.len());
//! ```
//!
//! ## Error Handling
//!
//! Loading problems abort the run. Bad member data never does: it ends up
//! in the feedback workbook.

pub mod config;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod operator;
pub mod operators;
pub mod pipeline;
pub mod record;
pub mod report;

pub use config::{PkzConfig, PkzConfigBuilder, PkzMissingColumnPolicy};
pub use errors::{PkzError, Result};
pub use export::{PkzWorkbookWriter, PkzWriteStats};
pub use ingest::{PkzArchiveSource, PkzSegmentReader};
pub use metrics::{PkzRunMetrics, PkzSegmentMetrics};
pub use operator::{execute_operator, PkzOperator, PkzStageOutput};
pub use pipeline::{PkzPipeline, PkzRunOutcome};
pub use record::{PkzField, PkzRecord, PkzRecordBatch, PkzSchema, PkzSegment};
pub use report::{PkzAction, PkzCategory, PkzFeedbackRow, PkzReport};
