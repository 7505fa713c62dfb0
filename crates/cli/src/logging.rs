// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_core::Settings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the process's tracing subscriber per `settings`'
/// `log_level`/`log_to_console`/`log_to_file`/`log_dir` fields.
///
/// Returns the file appender's [`WorkerGuard`], if file logging was
/// requested: dropping it flushes the background writer thread, so the
/// caller must hold it for the process lifetime.
pub fn init(settings: &Settings) -> std::io::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_lowercase()));

    let (file_layer, guard) = if settings.log_to_file {
        std::fs::create_dir_all(&settings.log_dir)?;
        let appender = tracing_appender::rolling::never(&settings.log_dir, "detectmate.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        (Some(fmt::layer().with_writer(non_blocking)), Some(guard))
    } else {
        (None, None)
    };

    let console_layer = settings.log_to_console.then(fmt::layer);

    tracing_subscriber::registry().with(filter).with(console_layer).with(file_layer).init();

    Ok(guard)
}
