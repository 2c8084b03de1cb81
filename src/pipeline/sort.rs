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

//! Single-column sort state and record comparison.
//!
//! At most one column governs the sort order at any time. The state is held
//! as `Option<(Column, Direction)>` so the exclusivity invariant cannot be
//! violated by construction; toggling a column deactivates every other one.
//!
//! Comparison never fails for any input: malformed `first_brewed` values
//! degrade to a defined ordering (after every parsable date, see
//! [`compare_brew_dates`]) and non-finite ABV values compare as equal.

use std::cmp::Ordering;

use crate::model::Beer;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Name,
    Tagline,
    FirstBrewed,
    Abv,
}

impl Column {
    /// Display order of the table columns.
    pub(crate) const ALL: [Column; 4] =
        [Column::Name, Column::Tagline, Column::FirstBrewed, Column::Abv];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Tagline => "Tagline",
            Column::FirstBrewed => "First Brewed",
            Column::Abv => "ABV",
        }
    }

    /// Key binding that toggles this column, the TUI analogue of clicking a
    /// column header.
    pub(crate) fn key(self) -> char {
        match self {
            Column::Name => 'n',
            Column::Tagline => 't',
            Column::FirstBrewed => 'b',
            Column::Abv => 'v',
        }
    }

    pub(crate) fn from_key(key: char) -> Option<Column> {
        Column::ALL.into_iter().find(|column| column.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

/// The exclusive single-active-column sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortState {
    active: Option<(Column, Direction)>,
}

impl Default for SortState {
    // The listing starts sorted by name, ascending.
    fn default() -> Self {
        Self {
            active: Some((Column::Name, Direction::Ascending)),
        }
    }
}

impl SortState {
    /// Toggles sorting on `column`, deactivating every other column.
    ///
    /// An inactive column activates ascending; an active column flips
    /// direction. Toggling never deactivates, so after the first toggle there
    /// is always exactly one active column.
    pub(crate) fn toggle(&mut self, column: Column) {
        let direction = match self.active {
            Some((active, Direction::Ascending)) if active == column => Direction::Descending,
            _ => Direction::Ascending,
        };
        self.active = Some((column, direction));
    }

    /// The direction of `column`, or `None` when it is inactive.
    pub(crate) fn direction_of(&self, column: Column) -> Option<Direction> {
        match self.active {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    /// Compares two records under the active column and direction.
    ///
    /// With no active column everything compares equal, which leaves a stable
    /// sort as the identity. No secondary key is applied; ties retain input
    /// order because the caller sorts with a stable primitive.
    pub(crate) fn compare(&self, a: &Beer, b: &Beer) -> Ordering {
        let Some((column, direction)) = self.active else {
            return Ordering::Equal;
        };

        let ordering = match column {
            Column::Name => compare_text(&a.name, &b.name),
            Column::Tagline => compare_text(&a.tagline, &b.tagline),
            Column::FirstBrewed => compare_brew_dates(&a.first_brewed, &b.first_brewed),
            Column::Abv => a.abv.partial_cmp(&b.abv).unwrap_or(Ordering::Equal),
        };

        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

// Case-insensitive Unicode comparison, the nearest portable equivalent of a
// locale-aware collation.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Chronological comparison of `MM/YYYY` brew dates.
///
/// Unparsable dates compare equal to each other and after every parsable
/// date, so a bad record sorts last under ascending order instead of
/// poisoning the sort.
fn compare_brew_dates(a: &str, b: &str) -> Ordering {
    match (parse_brew_date(a), parse_brew_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Day-of-month is irrelevant, (year, month) orders chronologically.
fn parse_brew_date(value: &str) -> Option<(u16, u8)> {
    let (month, year) = value.split_once('/')?;
    let month: u8 = month.trim().parse().ok()?;
    let year: u16 = year.trim().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(name: &str, tagline: &str, first_brewed: &str, abv: f64) -> Beer {
        Beer {
            id: 0,
            name: name.to_string(),
            tagline: tagline.to_string(),
            first_brewed: first_brewed.to_string(),
            abv,
        }
    }

    fn active_columns(state: &SortState) -> usize {
        Column::ALL
            .iter()
            .filter(|&&column| state.direction_of(column).is_some())
            .count()
    }

    #[test]
    fn toggle_cycles_ascending_descending_ascending() {
        let mut state = SortState { active: None };

        state.toggle(Column::Abv);
        assert_eq!(state.direction_of(Column::Abv), Some(Direction::Ascending));

        state.toggle(Column::Abv);
        assert_eq!(state.direction_of(Column::Abv), Some(Direction::Descending));

        state.toggle(Column::Abv);
        assert_eq!(state.direction_of(Column::Abv), Some(Direction::Ascending));
    }

    #[test]
    fn at_most_one_column_active_over_any_toggle_sequence() {
        let mut state = SortState::default();
        let sequence = [
            Column::Name,
            Column::Abv,
            Column::Abv,
            Column::FirstBrewed,
            Column::Tagline,
            Column::Name,
            Column::Name,
            Column::Abv,
        ];

        for column in sequence {
            state.toggle(column);
            assert_eq!(active_columns(&state), 1);
        }
    }

    #[test]
    fn toggling_another_column_resets_it_to_ascending() {
        let mut state = SortState::default();
        state.toggle(Column::Name); // name was active ascending, now descending
        state.toggle(Column::Abv);

        assert_eq!(state.direction_of(Column::Name), None);
        assert_eq!(state.direction_of(Column::Abv), Some(Direction::Ascending));
    }

    #[test]
    fn text_comparison_ignores_case() {
        let state = SortState::default();
        let a = beer("buzz", "", "01/2007", 4.5);
        let b = beer("Trashy Blonde", "", "04/2008", 4.1);
        assert_eq!(state.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn descending_reverses_the_ordering() {
        let mut state = SortState::default();
        state.toggle(Column::Name); // flip to descending

        let a = beer("Ace", "", "01/2007", 4.5);
        let b = beer("Buzz", "", "04/2008", 4.1);
        assert_eq!(state.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn brew_dates_compare_chronologically_not_lexically() {
        // Lexically "02/2008" < "11/2007"; chronologically the reverse.
        assert_eq!(compare_brew_dates("11/2007", "02/2008"), Ordering::Less);
        assert_eq!(compare_brew_dates("04/2007", "04/2007"), Ordering::Equal);
    }

    #[test]
    fn unparsable_brew_dates_sort_last_and_equal_to_each_other() {
        assert_eq!(compare_brew_dates("04/2007", "unknown"), Ordering::Less);
        assert_eq!(compare_brew_dates("unknown", "04/2007"), Ordering::Greater);
        assert_eq!(compare_brew_dates("unknown", "13/2007"), Ordering::Equal);
    }

    #[test]
    fn non_finite_abv_never_panics() {
        let mut state = SortState::default();
        state.toggle(Column::Abv);

        let a = beer("A", "", "01/2007", f64::NAN);
        let b = beer("B", "", "01/2007", 4.5);
        assert_eq!(state.compare(&a, &b), Ordering::Equal);
    }
}
