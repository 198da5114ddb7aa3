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

use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::{json, Map, Value};

use crate::errors::Result;
use crate::logging::config::PkzLogConfig;
use crate::logging::handlers::{PkzFileHandler, PkzLogHandler, PkzStdoutHandler};

#[derive(Clone, Debug)]
pub struct PkzLogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub timestamp: SystemTime,
}

impl PkzLogRecord {
    pub fn new(level: Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        PkzLogRecord {
            level,
            target: target.into(),
            message: message.into(),
            timestamp: SystemTime::now(),
        }
    }

    pub fn level_name(&self) -> &'static str {
        match self.level {
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    pub fn to_json(&self) -> Value {
        let ts = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        let mut data = Map::new();
        data.insert("level".into(), json!(self.level_name()));
        data.insert("target".into(), json!(self.target));
        data.insert("message".into(), json!(self.message));
        data.insert("timestamp_ms".into(), json!(ts));
        Value::Object(data)
    }
}

/// `log` backend fanning records out to the configured handlers.
pub struct PkzLogger {
    handlers: Vec<Box<dyn PkzLogHandler + Send + Sync>>,
}

static LOGGER: OnceLock<PkzLogger> = OnceLock::new();

impl PkzLogger {
    /// Builds a logger; the file handler is placed inside `log_dir`.
    pub fn new(config: &PkzLogConfig, log_dir: &Path) -> Result<Self> {
        let mut handlers: Vec<Box<dyn PkzLogHandler + Send + Sync>> = Vec::new();
        if config.console_enabled {
            handlers.push(Box::new(PkzStdoutHandler::new(
                config.console_filter(),
                config.json_format,
            )));
        }
        if config.file_enabled {
            handlers.push(Box::new(PkzFileHandler::create(
                &log_dir.join(&config.file_name),
                config.file_filter(),
                config.json_format,
            )?));
        }
        Ok(PkzLogger { handlers })
    }

    /// Most verbose level any handler wants to see.
    pub fn max_level(&self) -> LevelFilter {
        self.handlers
            .iter()
            .map(|h| h.threshold())
            .max()
            .unwrap_or(LevelFilter::Off)
    }

    /// Installs the global logger. Safe to call multiple times; the first
    /// call wins.
    pub fn init(config: &PkzLogConfig, log_dir: &Path) -> Result<()> {
        if LOGGER.get().is_some() {
            return Ok(());
        }
        let _ = LOGGER.set(PkzLogger::new(config, log_dir)?);
        if let Some(logger) = LOGGER.get() {
            if log::set_logger(logger).is_ok() {
                log::set_max_level(logger.max_level());
            }
        }
        Ok(())
    }

    pub fn dispatch(&self, record: &PkzLogRecord) {
        for handler in &self.handlers {
            handler.handle(record);
        }
    }
}

impl Log for PkzLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.dispatch(&PkzLogRecord::new(
            record.level(),
            record.target(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {
        for handler in &self.handlers {
            handler.flush();
        }
    }
}
