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

//! Background query processing.
//!
//! This module implements the command pattern used to keep query work off
//! the main UI thread. It provides a dedicated worker loop that runs
//! [`AppCommand`] requests against the catalog and broadcasts the results
//! back to the application via [`AppEvent`]s.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
    time::Duration,
};

use anyhow::Result;
use tracing::debug;

use carfinder::{catalog::Catalog, query::CarQuery};

use crate::actions::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AppCommand {
    Query { generation: u64, query: CarQuery },
}

/// Spawns a background thread to process application commands.
///
/// The worker owns a shared handle to the read-only catalog and enters a
/// blocking loop, listening for incoming [`AppCommand`]s until the sending
/// side hangs up.
///
/// # Arguments
///
/// * `catalog` - The catalog queries run against.
/// * `delay` - The perceived-loading delay applied before each query.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    catalog: Arc<Catalog>,
    delay: Duration,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            let request = latest_command(request, &command_rx);
            if let Err(e) = handle_command(&catalog, delay, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Skips over commands that were superseded while the worker was busy.
///
/// Every query replaces the previous one outright, so only the newest queued
/// command is worth running.
fn latest_command(mut request: AppCommand, command_rx: &Receiver<AppCommand>) -> AppCommand {
    while let Ok(next) = command_rx.try_recv() {
        debug!(superseded = ?request, "skipping superseded command");
        request = next;
    }
    request
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(
    catalog: &Catalog,
    delay: Duration,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Query { generation, query } => {
            if !delay.is_zero() {
                thread::sleep(delay);
            }

            let result = query.run(catalog);
            event_tx.send(AppEvent::QueryResults { generation, result })?;
        }
    }

    Ok(())
}
