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

//! # Run Configuration
//!
//! [`PkzConfig`] carries everything a run needs: the campaign name, where the
//! archives live, how segments are parsed and how workbooks are laid out. It
//! is built once and handed to the pipeline; nothing is read from globals.
//!
//! Configuration files are optional. JSON and YAML files deserialize into a
//! [`PkzConfigBuilder`] whose unset options keep their defaults.
//!
//! ```yaml
//! missing_columns: fill_empty
//! min_column_width: 18
//! log:
//!   console_level: DEBUG
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PkzError, Result};
use crate::logging::{PkzLogConfig, PkzLogConfigBuilder};

/// What to do when a segment lacks one of the required columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PkzMissingColumnPolicy {
    /// Abort the run with [`PkzError::MissingColumn`].
    #[default]
    Fail,
    /// Log a warning and treat the column as entirely empty.
    FillEmpty,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PkzConfig {
    pub campaign_name: String,
    /// Directory holding the delivered zip archives.
    pub input_dir: PathBuf,
    /// Field delimiter of the segment files.
    pub delimiter: u8,
    pub missing_columns: PkzMissingColumnPolicy,
    /// Lower bound for auto-sized print file columns.
    pub min_column_width: f64,
    /// Fixed width of the leading feedback columns.
    pub feedback_column_width: f64,
    /// How many leading feedback columns receive the fixed width.
    pub feedback_width_columns: u16,
    pub log: PkzLogConfig,
}

impl PkzConfig {
    pub fn new(campaign_name: impl Into<String>, input_dir: impl Into<PathBuf>) -> Self {
        PkzConfig {
            campaign_name: campaign_name.into(),
            input_dir: input_dir.into(),
            delimiter: b'|',
            missing_columns: PkzMissingColumnPolicy::Fail,
            min_column_width: 15.0,
            feedback_column_width: 35.0,
            feedback_width_columns: 5,
            log: PkzLogConfig::default(),
        }
    }

    /// Directory receiving the print files: `<campaign>_druckfiles`, placed
    /// next to the input directory.
    pub fn output_dir(&self) -> PathBuf {
        let folder = format!("{}_druckfiles", self.campaign_name);
        match self.input_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(folder),
            _ => PathBuf::from(folder),
        }
    }

    /// Location of the feedback workbook for a `YYYY-MM-DD-HH-MM-SS` stamp.
    pub fn feedback_path(&self, timestamp: &str) -> PathBuf {
        self.input_dir.join(format!("feedback_{timestamp}.xlsx"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.campaign_name.trim().is_empty() {
            return Err(PkzError::config("campaign name may not be empty"));
        }
        if !self.input_dir.is_dir() {
            return Err(PkzError::config(format!(
                "input path '{}' is not a directory",
                self.input_dir.display()
            )));
        }
        let widths = [self.min_column_width, self.feedback_column_width];
        if widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(PkzError::config("column widths must be positive numbers"));
        }
        if self.feedback_width_columns == 0 {
            return Err(PkzError::config("feedback_width_columns may not be zero"));
        }
        Ok(())
    }

    /// Overlays options loaded from a `.json`, `.yaml` or `.yml` file.
    pub fn with_file(self, path: &Path) -> Result<Self> {
        PkzConfigBuilder::from_path(path)?.merge_into(self)
    }
}

/// Optional overrides for [`PkzConfig`], typically read from a file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PkzConfigBuilder {
    pub campaign_name: Option<String>,
    pub input_dir: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub missing_columns: Option<PkzMissingColumnPolicy>,
    pub min_column_width: Option<f64>,
    pub feedback_column_width: Option<f64>,
    pub feedback_width_columns: Option<u16>,
    pub log: Option<PkzLogConfigBuilder>,
}

impl PkzConfigBuilder {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            _ => Err(PkzError::config(format!(
                "unsupported config format: {}",
                path.display()
            ))),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn merge_into(self, base: PkzConfig) -> Result<PkzConfig> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => {
                return Err(PkzError::config(format!(
                    "delimiter '{c}' must be a single ASCII character"
                )))
            }
            None => base.delimiter,
        };
        Ok(PkzConfig {
            campaign_name: self.campaign_name.unwrap_or(base.campaign_name),
            input_dir: self.input_dir.unwrap_or(base.input_dir),
            delimiter,
            missing_columns: self.missing_columns.unwrap_or(base.missing_columns),
            min_column_width: self.min_column_width.unwrap_or(base.min_column_width),
            feedback_column_width: self
                .feedback_column_width
                .unwrap_or(base.feedback_column_width),
            feedback_width_columns: self
                .feedback_width_columns
                .unwrap_or(base.feedback_width_columns),
            log: match self.log {
                Some(log) => log.merge_into(base.log),
                None => base.log,
            },
        })
    }
}
