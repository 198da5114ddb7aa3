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

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Configuration for the PkzLogger: a console stream for operators watching
/// the run and a file in the input directory that keeps the full trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PkzLogConfig {
    pub console_enabled: bool,
    pub console_level: String,
    /// Whether file logging is enabled.
    pub file_enabled: bool,
    pub file_level: String,
    /// File name, created inside the input directory.
    pub file_name: String,
    /// Emit JSON lines instead of `LEVEL - message`.
    pub json_format: bool,
}

impl Default for PkzLogConfig {
    fn default() -> Self {
        PkzLogConfig {
            console_enabled: true,
            console_level: "INFO".to_string(),
            file_enabled: true,
            file_level: "DEBUG".to_string(),
            file_name: "log.log".to_string(),
            json_format: false,
        }
    }
}

impl PkzLogConfig {
    pub fn console_filter(&self) -> LevelFilter {
        parse_level(&self.console_level)
    }

    pub fn file_filter(&self) -> LevelFilter {
        parse_level(&self.file_level)
    }
}

/// Parses a level name. Unknown names fall back to INFO.
pub fn parse_level(s: &str) -> LevelFilter {
    match s.trim().to_ascii_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PkzLogConfigBuilder {
    pub console_enabled: Option<bool>,
    pub console_level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_level: Option<String>,
    pub file_name: Option<String>,
    pub json_format: Option<bool>,
}

impl PkzLogConfigBuilder {
    pub fn build(self) -> PkzLogConfig {
        self.merge_into(PkzLogConfig::default())
    }

    /// Applies the set options over an existing configuration.
    pub fn merge_into(self, base: PkzLogConfig) -> PkzLogConfig {
        PkzLogConfig {
            console_enabled: self.console_enabled.unwrap_or(base.console_enabled),
            console_level: self.console_level.unwrap_or(base.console_level),
            file_enabled: self.file_enabled.unwrap_or(base.file_enabled),
            file_level: self.file_level.unwrap_or(base.file_level),
            file_name: self.file_name.unwrap_or(base.file_name),
            json_format: self.json_format.unwrap_or(base.json_format),
        }
    }
}
