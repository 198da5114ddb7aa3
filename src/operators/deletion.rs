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

//! Removal of excluded members from a segment.

use std::collections::BTreeSet;

use crate::record::PkzSegment;

/// Union of the member ids that must not be printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PkzExclusionSet {
    ids: BTreeSet<String>,
}

impl PkzExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the union of several id sets.
    pub fn union_of<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a BTreeSet<String>>,
    {
        let mut exclusion = Self::new();
        for set in sets {
            exclusion.extend(set.iter().cloned());
        }
        exclusion
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.ids.extend(ids);
    }

    pub fn contains(&self, member_id: &str) -> bool {
        self.ids.contains(member_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }
}

/// Filters excluded members out of a segment.
#[derive(Debug, Default)]
pub struct PkzDeletionResolver;

impl PkzDeletionResolver {
    pub fn new() -> Self {
        PkzDeletionResolver
    }

    /// Drops every record whose member id is excluded, keeping row order.
    ///
    /// Returns the cleaned segment and the number of removed rows.
    pub fn resolve(&self, segment: PkzSegment, exclusion: &PkzExclusionSet) -> (PkzSegment, usize) {
        let before = segment.records.len();
        let PkzSegment {
            name,
            entry_name,
            schema,
            records,
        } = segment;
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| !exclusion.contains(&record.member_id))
            .collect();
        let removed = before - kept.len();
        if removed > 0 {
            log::debug!("Removed {} members from segment {}", removed, name);
        }
        (
            PkzSegment {
                name,
                entry_name,
                schema,
                records: kept,
            },
            removed,
        )
    }
}
