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

//! # Data Ingestion Module
//!
//! This module turns the delivered zip archives into [`PkzSegment`]s.
//!
//! ## Module Components
//!
//! - **Reader** ([reader.rs](reader/index.html)): pipe-delimited parsing and
//!   schema validation of a single entry
//! - **Archive** ([archive.rs](archive/index.html)): archive discovery and
//!   per-entry loading with consistency checks
//!
//! ## Usage Patterns
//!
//! ```rust
//! use pkz::ingest::{PkzArchiveSource, PkzSegmentReader};
//!
//! let source = PkzArchiveSource::new(PkzSegmentReader::new());
//! let segments = source.load_dir(&input_dir)?;
//! ```
//!
//! Loading is all-or-nothing: the first entry that fails to parse aborts
//! the whole run.
//!
//! [`PkzSegment`]: crate::record::PkzSegment

pub mod archive;
pub mod reader;

pub use archive::PkzArchiveSource;
pub use reader::PkzSegmentReader;
