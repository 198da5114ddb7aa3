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

use serde::Serialize;

/// Counters gathered while processing one segment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PkzSegmentMetrics {
    pub segment: String,
    pub loaded: usize,
    /// Values rewritten by the stages; only email cleaning rewrites today.
    pub rewritten: usize,
    /// Rows added to the non-deleting feedback tables.
    pub flagged: usize,
    /// Distinct member ids in the exclusion set.
    pub excluded: usize,
    /// Rows removed from the segment.
    pub removed: usize,
    pub written: usize,
}

impl PkzSegmentMetrics {
    pub fn new(segment: impl Into<String>, loaded: usize) -> Self {
        PkzSegmentMetrics {
            segment: segment.into(),
            loaded,
            ..Default::default()
        }
    }
}

/// Totals over all segments of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PkzRunMetrics {
    pub segments: usize,
    pub loaded: usize,
    pub removed: usize,
    pub written: usize,
}

impl PkzRunMetrics {
    pub fn compute(segments: &[PkzSegmentMetrics]) -> Self {
        segments.iter().fold(
            PkzRunMetrics {
                segments: segments.len(),
                ..Default::default()
            },
            |mut acc, m| {
                acc.loaded += m.loaded;
                acc.removed += m.removed;
                acc.written += m.written;
                acc
            },
        )
    }
}
