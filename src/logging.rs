// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File logging.
//!
//! The terminal is owned by the UI, so log output goes to a daily rolling file
//! instead. The filter comes from `RUST_LOG` when set, otherwise from the
//! configuration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Installs the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped, so it must be
/// held until the application exits.
///
/// # Errors
///
/// Returns an error if the configured filter cannot be parsed or a global
/// subscriber is already installed.
pub(crate) fn init_logging(config: &LogConfig) -> Result<WorkerGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("Invalid log filter '{}'", config.filter))?,
    };

    let file_appender =
        tracing_appender::rolling::daily(Path::new(&config.directory), &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    info!(
        directory = %config.directory,
        file_name = %config.file_name,
        "Logging initialized"
    );

    Ok(guard)
}
