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

//! Background task processing.
//!
//! This module offloads the venue detail fetch from the UI thread. A
//! dedicated worker thread owns the places client and a single-threaded async
//! runtime, processes [`AppTask`] requests one at a time, and reports results
//! back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are better suited
//! to events.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};

use crate::{
    config::AppConfig,
    coordinator::RequestId,
    events::AppEvent,
    model::LocationId,
    places::PlacesClient,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchDetail {
        request: RequestId,
        location: LocationId,
        venue_id: String,
    },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut ctx = match TaskContext::new(&config, &event_tx) {
            Ok(ctx) => ctx,
            Err(e) => {
                error!("task worker failed to start: {e:#}");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
                return;
            }
        };
        info!("task worker started");

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    runtime: Runtime,
    places: PlacesClient,
}

impl<'a> TaskContext<'a> {
    fn new(config: &AppConfig, event_tx: &'a Sender<AppEvent>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create task runtime")?;
        let places = PlacesClient::new(&config.places).context("Failed to create places client")?;

        Ok(Self {
            event_tx,
            runtime,
            places,
        })
    }
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::FetchDetail {
            request,
            location,
            venue_id,
        } => fetch_detail(ctx, request, location, &venue_id),
    }
}

fn fetch_detail(
    ctx: &mut TaskContext,
    request: RequestId,
    location: LocationId,
    venue_id: &str,
) -> Result<()> {
    let result = ctx
        .runtime
        .block_on(ctx.places.fetch_detail(location, venue_id));

    let event = match result {
        Ok(detail) => AppEvent::DetailReady(request, detail),
        Err(e) => AppEvent::DetailFailed(request, e),
    };
    ctx.event_tx.send(event)?;

    Ok(())
}
