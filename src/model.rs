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

//! Catalog data model.
//!
//! The remote catalog returns records with far more fields than the listing
//! needs; only the fields the table and detail views display are kept, the
//! rest of the payload is ignored during deserialization.

use serde::Deserialize;

/// One catalog entry.
///
/// Records are immutable once fetched. The full collection is owned by the
/// application's catalog cache for the lifetime of the list view; derived
/// views clone from it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Beer {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) tagline: String,
    /// Month and year of first brewing, `MM/YYYY`.
    pub(crate) first_brewed: String,
    /// Alcohol by volume, percent.
    pub(crate) abv: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_record_ignoring_unknown_fields() {
        let payload = r#"{
            "id": 192,
            "name": "Punk IPA 2007 - 2010",
            "tagline": "Post Modern Classic. Spiky. Tropical. Hoppy.",
            "first_brewed": "04/2007",
            "description": "Our flagship beer that kick started the craft beer revolution.",
            "abv": 6.0,
            "ibu": 60.0,
            "food_pairing": ["Spicy carne asada"]
        }"#;

        let beer: Beer = serde_json::from_str(payload).unwrap();
        assert_eq!(beer.id, 192);
        assert_eq!(beer.name, "Punk IPA 2007 - 2010");
        assert_eq!(beer.first_brewed, "04/2007");
        assert_eq!(beer.abv, 6.0);
    }

    #[test]
    fn rejects_record_missing_required_fields() {
        let payload = r#"{"id": 1, "name": "Buzz"}"#;
        assert!(serde_json::from_str::<Beer>(payload).is_err());
    }
}
