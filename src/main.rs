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

//! # Beer Catalog TUI.
//!
//! A terminal browser for a remote beer catalog: a searchable, sortable,
//! paginated listing with a lazily fetched detail view.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, and
//!   all derived-view computation (filter, sort, paginate), which runs
//!   synchronously on each interaction event.
//! * A **Background Worker** performs the blocking catalog API calls via
//!   asynchronous command processing; the full collection is fetched once at
//!   startup and interactions rederive from the in-memory cache without
//!   refetching.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod api;
mod components;
mod config;
mod detail;
mod model;
mod pipeline;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, Focus, process_events},
    },
    components::{BeerTableState, SearchInput},
    config::AppConfig,
    detail::DetailLoader,
    model::Beer,
    pipeline::{SortState, TableView, page},
    theme::Theme,
};

#[derive(Debug, PartialEq)]
enum MainView {
    Catalog,
    Detail,
}

/// Application state.
///
/// The derived table page is deliberately absent: it is a pure function of
/// `catalog`, the search text, `sort` and `offset`, recomputed on demand by
/// [`App::current_view`].
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    /// The raw collection, fetched once and read-only afterwards.
    pub catalog: Vec<Beer>,
    pub loading: bool,
    pub last_error: Option<String>,

    pub search: SearchInput,
    pub sort: SortState,
    /// Item offset into the filtered sequence, always a page start.
    pub offset: usize,

    pub beer_table: BeerTableState,
    pub detail: DetailLoader,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Catalog,
            focus: Focus::None,
            event_tx,
            event_rx,
            command_tx,
            catalog: vec![],
            loading: true,
            last_error: None,
            search: SearchInput::new(),
            sort: SortState::default(),
            offset: 0,
            beer_table: BeerTableState::new(),
            detail: DetailLoader::new(),
        }
    }

    /// The derived view for the current interaction state.
    pub(crate) fn current_view(&self) -> TableView {
        pipeline::compute(
            &self.catalog,
            self.search.value(),
            &self.sort,
            self.offset,
            self.config.page_size,
        )
    }

    /// Jumps to `page_index`, clamped against the current filtered length.
    pub(crate) fn goto_page(&mut self, page_index: usize) {
        let view = self.current_view();
        let requested = page::offset_for_page(page_index, self.config.page_size);
        self.offset = page::clamp_offset(requested, view.filtered_len, self.config.page_size);
        self.beer_table.reset();
    }

    pub(crate) fn goto_next_page(&mut self) {
        let view = self.current_view();
        if view.page_index + 1 < view.page_count {
            self.goto_page(view.page_index + 1);
        }
    }

    pub(crate) fn goto_previous_page(&mut self) {
        let view = self.current_view();
        if view.page_index > 0 {
            self.goto_page(view.page_index - 1);
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&app.theme.background_hex());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger: the one full-collection fetch for this list view's
    // lifetime. Every later interaction rederives from the cached catalog.
    app.command_tx.send(AppCommand::LoadCatalog)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
