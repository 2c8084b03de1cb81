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

//! Remote catalog access.
//!
//! This module wraps the HTTP catalog API behind two operations: fetching the
//! entire collection in one round trip, and fetching a single record by id.
//! The full collection is fetched exactly once per list-view lifetime, at
//! startup; user interactions never refetch, they rederive from the cached
//! collection.
//!
//! # API oddity
//!
//! Single-item lookups (`GET /beers/{id}`) return a zero-or-one element array
//! rather than an object. [`CatalogClient::load_one`] unwraps this before
//! returning, mapping the empty array to [`CatalogError::NotFound`].

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};
use thiserror::Error;

use crate::model::Beer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures surfaced by the catalog API.
///
/// No retries are performed; callers surface these to the UI (empty/error
/// state for the list, a failed detail view for single records).
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog payload was malformed: {0}")]
    Parse(String),

    #[error("no beer with id {0}")]
    NotFound(u32),
}

/// Blocking HTTP client for the catalog API.
///
/// Lives on the background command worker thread, never on the UI thread.
pub(crate) struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetches the entire catalog in one round trip.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] on a connection failure or
    /// non-success status, [`CatalogError::Parse`] on a malformed payload.
    /// A failure discards any partial data.
    pub(crate) fn load_all(&self) -> Result<Vec<Beer>, CatalogError> {
        let url = format!("{}/beers", self.base_url);
        let response = self.get(&url)?;

        response
            .json::<Vec<Beer>>()
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Fetches a single record by id.
    ///
    /// Does not touch the list cache.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the id has no match (a 404
    /// status or an empty response array), otherwise the transport/parse
    /// failures of [`CatalogClient::load_all`].
    pub(crate) fn load_one(&self, id: u32) -> Result<Beer, CatalogError> {
        let url = format!("{}/beers/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !response.status().is_success() {
            return Err(CatalogError::Transport(format!("HTTP {}", response.status())));
        }

        let beers = response
            .json::<Vec<Beer>>()
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        unwrap_single(id, beers)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Transport(format!("HTTP {}", response.status())));
        }

        Ok(response)
    }
}

/// Unwraps the one-element array the API returns for single-item lookups.
fn unwrap_single(id: u32, mut beers: Vec<Beer>) -> Result<Beer, CatalogError> {
    if beers.is_empty() {
        return Err(CatalogError::NotFound(id));
    }
    Ok(beers.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: u32) -> Beer {
        Beer {
            id,
            name: "Buzz".to_string(),
            tagline: "A Real Bitter Experience.".to_string(),
            first_brewed: "09/2007".to_string(),
            abv: 4.5,
        }
    }

    #[test]
    fn unwraps_single_element_array() {
        let result = unwrap_single(7, vec![beer(7)]).unwrap();
        assert_eq!(result.id, 7);
    }

    #[test]
    fn empty_array_is_not_found() {
        let result = unwrap_single(7, vec![]);
        assert!(matches!(result, Err(CatalogError::NotFound(7))));
    }

    #[test]
    fn surplus_elements_keep_the_first() {
        let result = unwrap_single(7, vec![beer(7), beer(8)]).unwrap();
        assert_eq!(result.id, 7);
    }
}
