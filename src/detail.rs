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

//! On-demand loading of a single record for the detail view.
//!
//! Both detail surfaces (the inline modal and the full-screen detail page)
//! drive this one state machine: `Idle` until a detail view opens, `Loading`
//! while the fetch is in flight, then `Loaded` or `Failed`. Closing the view
//! returns to `Idle` and discards the record or error; reopening refetches
//! rather than reusing a stale record.
//!
//! Fetches complete asynchronously on the command worker, so a close or
//! reopen can race an in-flight response. Every open allocates a fresh
//! request token that the completion event must echo; [`DetailLoader::commit`]
//! drops completions carrying a superseded token, which guarantees that
//! opening id X then quickly reopening with id Y never shows X's record.

use crate::model::Beer;

#[derive(Debug)]
pub(crate) enum DetailState {
    Idle,
    Loading { id: u32 },
    Loaded(Beer),
    Failed(String),
}

pub(crate) struct DetailLoader {
    state: DetailState,
    request: u64,
}

impl DetailLoader {
    pub(crate) fn new() -> Self {
        Self {
            state: DetailState::Idle,
            request: 0,
        }
    }

    pub(crate) fn state(&self) -> &DetailState {
        &self.state
    }

    /// Whether a detail view is currently open (in any non-idle state).
    pub(crate) fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Idle)
    }

    /// Begins loading `id` and returns the request token the fetch command
    /// must carry.
    pub(crate) fn open(&mut self, id: u32) -> u64 {
        self.request += 1;
        self.state = DetailState::Loading { id };
        self.request
    }

    /// Closes the detail view, discarding any record, error, or outstanding
    /// interest in an in-flight fetch.
    pub(crate) fn close(&mut self) {
        self.state = DetailState::Idle;
    }

    /// Commits a completed fetch.
    ///
    /// Only a response for the request currently in flight is committed; a
    /// late response for a superseded or closed request is ignored.
    pub(crate) fn commit(&mut self, request: u64, result: Result<Beer, String>) {
        if request != self.request || !matches!(self.state, DetailState::Loading { .. }) {
            return;
        }
        self.state = match result {
            Ok(beer) => DetailState::Loaded(beer),
            Err(message) => DetailState::Failed(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: u32, name: &str) -> Beer {
        Beer {
            id,
            name: name.to_string(),
            tagline: String::new(),
            first_brewed: "01/2007".to_string(),
            abv: 4.5,
        }
    }

    #[test]
    fn open_then_commit_loads_the_record() {
        let mut loader = DetailLoader::new();
        let request = loader.open(7);

        loader.commit(request, Ok(beer(7, "Buzz")));
        assert!(matches!(loader.state(), DetailState::Loaded(b) if b.id == 7));
    }

    #[test]
    fn failure_is_retained_for_display() {
        let mut loader = DetailLoader::new();
        let request = loader.open(7);

        loader.commit(request, Err("HTTP 500".to_string()));
        assert!(matches!(loader.state(), DetailState::Failed(m) if m == "HTTP 500"));
    }

    #[test]
    fn stale_response_for_a_superseded_request_is_ignored() {
        let mut loader = DetailLoader::new();
        let first = loader.open(1);
        let second = loader.open(2);

        // The fetch for id 1 resolves late, after id 2 was requested.
        loader.commit(first, Ok(beer(1, "Buzz")));
        assert!(matches!(loader.state(), DetailState::Loading { id: 2 }));

        loader.commit(second, Ok(beer(2, "Trashy Blonde")));
        assert!(matches!(loader.state(), DetailState::Loaded(b) if b.id == 2));
    }

    #[test]
    fn stale_error_for_a_superseded_request_is_ignored() {
        let mut loader = DetailLoader::new();
        let first = loader.open(1);
        let second = loader.open(2);

        loader.commit(first, Err("HTTP 500".to_string()));
        loader.commit(second, Err("no beer with id 2".to_string()));
        assert!(matches!(loader.state(), DetailState::Failed(m) if m == "no beer with id 2"));
    }

    #[test]
    fn response_arriving_after_close_is_ignored() {
        let mut loader = DetailLoader::new();
        let request = loader.open(7);
        loader.close();

        loader.commit(request, Ok(beer(7, "Buzz")));
        assert!(matches!(loader.state(), DetailState::Idle));
        assert!(!loader.is_open());
    }

    #[test]
    fn reopening_refetches_instead_of_reusing_the_old_record() {
        let mut loader = DetailLoader::new();
        let request = loader.open(7);
        loader.commit(request, Ok(beer(7, "Buzz")));
        loader.close();

        loader.open(7);
        assert!(matches!(loader.state(), DetailState::Loading { id: 7 }));
    }
}
