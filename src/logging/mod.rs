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

//! # Logging Module
//!
//! Backend for the `log` facade used across Pkz. Records go to stdout for
//! whoever runs the tool and to `log.log` inside the input directory.
//!
//! - **config**: thresholds, file name and output format
//! - **core**: the [`PkzLogger`] backend and its record type
//! - **handlers**: stdout and file sinks
//! - **formatters**: text and JSON line layouts

pub mod config;
pub mod core;
pub mod formatters;
pub mod handlers;

pub use self::config::{PkzLogConfig, PkzLogConfigBuilder};
pub use self::core::{PkzLogRecord, PkzLogger};
