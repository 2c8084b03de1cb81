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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! network calls from the main UI thread. A dedicated worker loop translates
//! [`AppCommand`] requests into catalog API calls and broadcasts the results
//! back to the application via [`AppEvent`]s.
//!
//! Catalog fetch failures are sent as their own events rather than the
//! generic error event because the UI renders them as a distinct empty/error
//! state. Detail fetch results always carry the request token allocated by
//! the detail loader so that late responses for superseded requests can be
//! discarded.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{actions::events::AppEvent, api::CatalogClient, config::AppConfig};

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// Fetch the full catalog. Sent once at startup and again only on an
    /// explicit user reload; interactions never refetch.
    LoadCatalog,
    /// Fetch a single record for the detail view. `request` is the token
    /// echoed back in [`AppEvent::DetailFetched`].
    LoadDetail { id: u32, request: u64 },
}

/// Spawns a background thread to process application commands.
///
/// The worker owns the HTTP client and enters a blocking loop, listening for
/// incoming [`AppCommand`]s until the command channel closes.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let client = CatalogClient::new(&config.api_url);

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&client, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Executes a single command and sends the result back through the
/// application event channel.
fn handle_command(
    client: &CatalogClient,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::LoadCatalog => match client.load_all() {
            Ok(beers) => event_tx.send(AppEvent::CatalogLoaded(beers))?,
            Err(e) => event_tx.send(AppEvent::CatalogFailed(e.to_string()))?,
        },

        AppCommand::LoadDetail { id, request } => {
            let result = client.load_one(id).map_err(|e| e.to_string());
            event_tx.send(AppEvent::DetailFetched { request, result })?;
        }
    }

    Ok(())
}
