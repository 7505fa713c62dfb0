// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launches one DetectMate component process from a settings file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use detectmate_cli::{logging, registry};
use detectmate_core::Settings;
use detectmate_service::Service;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "detectmate-launcher", about = "Run one DetectMate component process")]
struct Args {
    /// Path to a settings YAML file. Environment variables prefixed
    /// `DETECTMATE_` are always applied on top, file present or not.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Overrides the configuration file the resolved processor reads,
    /// taking precedence over whatever `--settings` specified.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut settings = match Settings::load(args.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load settings: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(config) = args.config {
        settings.config_file = Some(config);
    }

    let _log_guard = match logging::init(&settings) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to initialize logging: {err}");
            return ExitCode::FAILURE;
        }
    };

    let registry = registry::builtin_registry();
    let service = match Service::build(settings, &registry).await {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, "failed to build service");
            return ExitCode::FAILURE;
        }
    };

    match service.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "service exited with an error");
            ExitCode::FAILURE
        }
    }
}
