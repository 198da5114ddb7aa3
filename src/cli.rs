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

//! Command-line interface of the `pkz` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pkz::config::PkzConfig;
use pkz::logging::PkzLogger;
use pkz::pipeline::PkzPipeline;

#[derive(Parser, Debug)]
#[command(name = "pkz")]
#[command(version)]
#[command(
    about = "Create XLSX print files for a campaign from the delivered CSV zip archives."
)]
pub struct Cli {
    /// Campaign name; names the `<campaign>_druckfiles` output folder.
    #[arg(short, long)]
    pub campaign: String,

    /// Folder containing the zip archives.
    #[arg(short, long)]
    pub path: PathBuf,

    /// Optional JSON or YAML file with further settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Console log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Builds the effective configuration. Command-line values win over the
/// settings file.
pub fn build_config(cli: &Cli) -> anyhow::Result<PkzConfig> {
    let mut config = PkzConfig::new(cli.campaign.clone(), cli.path.clone());
    if let Some(file) = &cli.config {
        config = config
            .with_file(file)
            .with_context(|| format!("failed to load settings from {}", file.display()))?;
        config.campaign_name = cli.campaign.clone();
        config.input_dir = cli.path.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log.console_level = level.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;
    PkzLogger::init(&config.log, &config.input_dir)
        .context("failed to initialise logging")?;

    log::debug!("{}", config.campaign_name.to_uppercase());
    log::debug!("{}", chrono::Local::now().format("%Y-%m-%d, %H-%M-%S"));

    let outcome = PkzPipeline::new(config).run()?;
    log::debug!(
        "Wrote {} print files to {}, feedback in {}",
        outcome.segment_files.len(),
        outcome.output_dir.display(),
        outcome.feedback.path.display()
    );
    log::info!("All complete!");
    Ok(())
}
