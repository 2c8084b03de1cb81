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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "brewui";

const DEFAULT_API_URL: &str = "https://api.punkapi.com/v2";
const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Base URL of the catalog API.
    pub api_url: String,
    /// Rows per table page.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn load_config() -> AppConfig {
    let mut config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    // A zero page size from a hand-edited file would wedge pagination.
    if config.page_size == 0 {
        config.page_size = DEFAULT_PAGE_SIZE;
    }
    config
}
