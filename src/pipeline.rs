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

//! # Pipeline Module
//!
//! Sequences the segment checks over every loaded segment and writes the
//! results.
//!
//! Per segment the stages run in a fixed order: email cleaning, address
//! classification, matrix validation, employee tagging. Their findings go
//! into the [`PkzReport`]; their exclusion sets are merged and applied once
//! by the [`PkzDeletionResolver`]. Segments are processed one after another
//! and the report is the only state shared between them.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::PkzConfig;
use crate::errors::Result;
use crate::export::{PkzWorkbookWriter, PkzWriteStats};
use crate::ingest::{PkzArchiveSource, PkzSegmentReader};
use crate::metrics::{PkzRunMetrics, PkzSegmentMetrics};
use crate::operator::{execute_operator, PkzOperator};
use crate::operators::{
    PkzAddressClassifier, PkzDeletionResolver, PkzEmailSanitizer, PkzEmployeeTagger,
    PkzExclusionSet, PkzMatrixValidator,
};
use crate::record::PkzSegment;
use crate::report::PkzReport;

/// Timestamp layout of the feedback file name.
pub const FEEDBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// What a completed run produced.
#[derive(Debug, Serialize)]
pub struct PkzRunOutcome {
    pub output_dir: PathBuf,
    pub segment_files: Vec<PkzWriteStats>,
    pub feedback: PkzWriteStats,
    pub segments: Vec<PkzSegmentMetrics>,
    pub totals: PkzRunMetrics,
}

/// Linear pipeline over the segments of one campaign delivery.
#[derive(Debug)]
pub struct PkzPipeline {
    config: PkzConfig,
    stages: Vec<Box<dyn PkzOperator>>,
    resolver: PkzDeletionResolver,
}

impl PkzPipeline {
    /// Builds the pipeline with the standard stage order.
    pub fn new(config: PkzConfig) -> Self {
        Self::with_stages(
            config,
            vec![
                Box::new(PkzEmailSanitizer::new()),
                Box::new(PkzAddressClassifier::new()),
                Box::new(PkzMatrixValidator::new()),
                Box::new(PkzEmployeeTagger::new()),
            ],
        )
    }

    /// Builds the pipeline with custom stages, run in the given order.
    pub fn with_stages(config: PkzConfig, stages: Vec<Box<dyn PkzOperator>>) -> Self {
        PkzPipeline {
            config,
            stages,
            resolver: PkzDeletionResolver::new(),
        }
    }

    pub fn config(&self) -> &PkzConfig {
        &self.config
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Loads every segment of the input directory.
    pub fn load(&self) -> Result<Vec<PkzSegment>> {
        let source = PkzArchiveSource::new(PkzSegmentReader::from_config(&self.config));
        source.load_dir(&self.config.input_dir)
    }

    /// Runs all stages over one segment, records the findings in `report`
    /// and returns the cleaned segment.
    pub fn process_segment(
        &self,
        segment: PkzSegment,
        report: &mut PkzReport,
    ) -> Result<(PkzSegment, PkzSegmentMetrics)> {
        let mut metrics = PkzSegmentMetrics::new(segment.name.clone(), segment.len());
        let mut exclusion = PkzExclusionSet::new();
        let mut segment = segment;

        for stage in &self.stages {
            let output = execute_operator(stage.as_ref(), segment)?;
            metrics.rewritten += output.rewritten;
            for finding in output.findings {
                let added = report.record(finding.category, finding.rows);
                if !finding.category.triggers_deletion() {
                    metrics.flagged += added;
                }
                log::debug!(
                    "{}: {} new rows in {}",
                    stage.name(),
                    added,
                    finding.category.sheet_name()
                );
            }
            exclusion.extend(output.exclusions);
            segment = output.segment;
        }

        let (cleaned, removed) = self.resolver.resolve(segment, &exclusion);
        metrics.excluded = exclusion.len();
        metrics.removed = removed;
        metrics.written = cleaned.len();
        Ok((cleaned, metrics))
    }

    /// Runs the whole job, stamping the feedback file with the current time.
    pub fn run(&self) -> Result<PkzRunOutcome> {
        let timestamp = chrono::Local::now()
            .format(FEEDBACK_TIMESTAMP_FORMAT)
            .to_string();
        self.run_at(&timestamp)
    }

    /// Runs the whole job with a fixed feedback timestamp.
    pub fn run_at(&self, timestamp: &str) -> Result<PkzRunOutcome> {
        self.config.validate()?;

        let output_dir = self.config.output_dir();
        fs::create_dir_all(&output_dir)?;

        let segments = self.load()?;
        let mut report = PkzReport::new();
        for segment in &segments {
            report.summary(segment.name.clone(), segment.len());
        }
        log::info!("Success loading {} segment files.", segments.len());
        log::debug!("Stages: {}", self.stage_names().join(" -> "));

        let writer = PkzWorkbookWriter::from_config(&self.config);
        let mut segment_files = Vec::with_capacity(segments.len());
        let mut segment_metrics = Vec::with_capacity(segments.len());

        for segment in segments {
            log::info!("Processing segment {} ...", segment.name);
            let (cleaned, metrics) = self.process_segment(segment, &mut report)?;
            log::debug!(
                "Segment {}: loaded {}, emails rewritten {}, flagged {}, removed {}, written {}",
                metrics.segment,
                metrics.loaded,
                metrics.rewritten,
                metrics.flagged,
                metrics.removed,
                metrics.written
            );
            segment_files.push(writer.write_segment(&cleaned, &output_dir)?);
            segment_metrics.push(metrics);
        }

        let feedback = writer.write_feedback(&report, &self.config.feedback_path(timestamp))?;
        let totals = PkzRunMetrics::compute(&segment_metrics);

        Ok(PkzRunOutcome {
            output_dir,
            segment_files,
            feedback,
            segments: segment_metrics,
            totals,
        })
    }
}
