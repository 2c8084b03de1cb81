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

//! Search predicate over the catalog.
//!
//! A single case-insensitive substring test against the record name. The
//! search is deliberately single-field; the name is what users scan the
//! listing by.

use crate::model::Beer;

/// Whether `beer` matches the search `query`.
///
/// The empty query matches everything. Pure predicate: no state, no failure.
pub(crate) fn matches(beer: &Beer, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    beer.name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(name: &str) -> Beer {
        Beer {
            id: 0,
            name: name.to_string(),
            tagline: String::new(),
            first_brewed: "01/2007".to_string(),
            abv: 4.5,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&beer("Buzz"), ""));
        assert!(matches(&beer(""), ""));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let b = beer("Trashy Blonde");
        assert!(matches(&b, "blonde"));
        assert!(matches(&b, "TRASHY"));
        assert!(matches(&b, "shy bl"));
        assert!(!matches(&b, "stout"));
    }

    #[test]
    fn matching_is_independent_of_repetition() {
        let b = beer("Punk IPA");
        let first = matches(&b, "punk");
        for _ in 0..10 {
            assert_eq!(matches(&b, "punk"), first);
        }
    }

    #[test]
    fn query_is_tested_against_name_only() {
        let b = Beer {
            id: 0,
            name: "Buzz".to_string(),
            tagline: "A Real Bitter Experience.".to_string(),
            first_brewed: "09/2007".to_string(),
            abv: 4.5,
        };
        assert!(!matches(&b, "bitter"));
    }
}
