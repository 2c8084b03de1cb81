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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background worker results (catalog and
//! detail fetches), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events arrive as [`AppEvent`]s over an mpsc channel.
//! 2. **Process**: [`process_events`] applies each event as a state
//!    transition on the [`App`] - filter text, sort state, page offset,
//!    detail loader - or dispatches commands to the background worker.
//! 3. **Render**: After each event the UI is re-drawn; the visible page is
//!    recomputed from the current state by the pure pipeline, so the view
//!    always reflects the latest filter/sort/offset at the time the event
//!    fired.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    actions::commands::AppCommand,
    model::Beer,
    pipeline::sort::Column,
    render::draw,
};

#[derive(Debug, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    None,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// The full catalog fetch completed.
    CatalogLoaded(Vec<Beer>),
    CatalogFailed(String),

    /// A single-record fetch completed. `request` echoes the token allocated
    /// when the detail view opened; stale tokens are dropped by the loader.
    DetailFetched {
        request: u64,
        result: Result<Beer, String>,
    },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::CatalogLoaded(beers) => {
                app.catalog = beers;
                app.loading = false;
                app.last_error = None;
                app.offset = 0;
                app.beer_table.reset();
            }

            AppEvent::CatalogFailed(message) => {
                // No partial-collection recovery, the old cache is dropped too.
                app.catalog.clear();
                app.loading = false;
                app.last_error = Some(message);
            }

            AppEvent::DetailFetched { request, result } => app.detail.commit(request, result),

            AppEvent::Error(message) => app.last_error = Some(message),

            AppEvent::Tick => {}

            // Handled before the match
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to state transitions and worker commands.
///
/// Routing depends on what currently owns the keyboard: an open detail
/// surface captures everything (and closes on Esc/q), a focused search input
/// consumes edits, otherwise keys drive the listing (cursor, pages, sort
/// toggles, detail opening).
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.main_view == MainView::Detail || app.detail.is_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.detail.close();
            app.main_view = MainView::Catalog;
        }
        return Ok(());
    }

    if app.focus == Focus::SearchInput {
        let event = Event::Key(key);
        if app.search.process_event(&event) {
            app.focus = Focus::None;
        }
        // A narrower filter can strand the offset past the filtered length;
        // the pipeline's re-clamped offset becomes the stored one.
        app.offset = app.current_view().offset;
        return Ok(());
    }

    process_list_key_event(app, key)
}

fn process_list_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') => app.focus = Focus::SearchInput,

        KeyCode::Char('r') => {
            app.loading = true;
            app.command_tx.send(AppCommand::LoadCatalog)?;
        }

        // Cursor within the current page
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.current_view().rows.len();
            app.beer_table.goto_next(rows);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let rows = app.current_view().rows.len();
            app.beer_table.goto_previous(rows);
        }

        // Page navigation
        KeyCode::Char('h') | KeyCode::Left => app.goto_previous_page(),
        KeyCode::Char('l') | KeyCode::Right => app.goto_next_page(),
        KeyCode::Char('g') => app.goto_page(0),
        KeyCode::Char('G') => {
            let last = app.current_view().page_count - 1;
            app.goto_page(last);
        }

        // Detail view, two surfaces over one loader
        KeyCode::Enter => open_detail(app, MainView::Catalog)?,
        KeyCode::Char('o') => open_detail(app, MainView::Detail)?,

        // Column sort toggles, the header-click analogue
        KeyCode::Char(c) => {
            if let Some(column) = Column::from_key(c) {
                app.sort.toggle(column);
            }
        }

        _ => {}
    }

    Ok(())
}

/// Opens the detail view for the cursor row, either as a modal over the
/// catalog or as the full-screen detail page.
fn open_detail(app: &mut App, surface: MainView) -> Result<()> {
    let view = app.current_view();
    let Some(beer) = view.rows.get(app.beer_table.selected()) else {
        return Ok(());
    };

    let request = app.detail.open(beer.id);
    app.command_tx.send(AppCommand::LoadDetail {
        id: beer.id,
        request,
    })?;
    app.main_view = surface;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, pipeline::sort::Direction};
    use crossterm::event::KeyModifiers;
    use std::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (App::new(AppConfig::default(), command_tx), command_rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_key_sends_the_exit_event_directly() {
        let (mut app, command_rx) = test_app();

        process_list_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();

        // Quit bypasses the worker entirely: the exit event goes straight to
        // the event loop and no command reaches the command channel.
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn sort_keys_toggle_the_matching_column() {
        let (mut app, _command_rx) = test_app();

        process_list_key_event(&mut app, key(KeyCode::Char('v'))).unwrap();
        assert_eq!(app.sort.direction_of(Column::Abv), Some(Direction::Ascending));

        process_list_key_event(&mut app, key(KeyCode::Char('v'))).unwrap();
        assert_eq!(app.sort.direction_of(Column::Abv), Some(Direction::Descending));
    }
}
