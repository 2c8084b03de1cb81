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

//! The list-transformation pipeline.
//!
//! The catalog is fetched once; everything the table shows is derived from it
//! here, on every interaction, in a fixed order:
//!
//! 1. **filter** - case-insensitive substring match on the name,
//! 2. **sort** - stable sort under the single active column,
//! 3. **paginate** - fixed-size window into the filtered sequence.
//!
//! Sorting before paginating is load-bearing: the reverse would only order
//! rows within a page. [`compute`] is a pure function of its inputs; there is
//! no hidden state and no caching of derived rows, recomputation is cheap
//! relative to the collection size.

pub(crate) mod filter;
pub(crate) mod page;
pub(crate) mod sort;

use crate::model::Beer;
use crate::pipeline::sort::{Column, Direction};

pub(crate) use crate::pipeline::sort::SortState;

/// Header descriptor for one table column: display label, sort indicator for
/// the active column, and the key that toggles it.
pub(crate) struct ColumnHeader {
    pub(crate) label: &'static str,
    pub(crate) key: char,
    pub(crate) direction: Option<Direction>,
}

/// The derived view consumed by the presentation surface.
///
/// `offset` is the input offset after re-clamping against the filtered
/// length, so it is always a valid page start.
pub(crate) struct TableView {
    pub(crate) rows: Vec<Beer>,
    pub(crate) offset: usize,
    pub(crate) page_index: usize,
    pub(crate) page_count: usize,
    pub(crate) filtered_len: usize,
}

/// Recomputes the visible page from the raw collection and the current
/// interaction state. Never fails, for any input.
pub(crate) fn compute(
    raw: &[Beer],
    filter_text: &str,
    sort: &SortState,
    offset: usize,
    page_size: usize,
) -> TableView {
    let page_size = page_size.max(1);

    let mut filtered: Vec<Beer> = raw
        .iter()
        .filter(|beer| filter::matches(beer, filter_text))
        .cloned()
        .collect();

    // Vec::sort_by is stable, ties retain input order.
    filtered.sort_by(|a, b| sort.compare(a, b));

    let offset = page::clamp_offset(offset, filtered.len(), page_size);
    let rows = page::window(&filtered, offset, page_size).to_vec();

    TableView {
        rows,
        offset,
        page_index: offset / page_size,
        page_count: page::page_count(filtered.len(), page_size),
        filtered_len: filtered.len(),
    }
}

/// Column headers with the current sort indicator, in display order.
pub(crate) fn headers(sort: &SortState) -> Vec<ColumnHeader> {
    Column::ALL
        .into_iter()
        .map(|column| ColumnHeader {
            label: column.label(),
            key: column.key(),
            direction: sort.direction_of(column),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer(id: u32, name: &str, abv: f64) -> Beer {
        Beer {
            id,
            name: name.to_string(),
            tagline: format!("{name} tagline"),
            first_brewed: "01/2010".to_string(),
            abv,
        }
    }

    fn names(view: &TableView) -> Vec<String> {
        view.rows.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn sorts_before_paginating() {
        let raw = vec![beer(1, "B", 5.0), beer(2, "A", 3.0)];
        let sort = SortState::default(); // name, ascending

        let page0 = compute(&raw, "", &sort, 0, 1);
        let page1 = compute(&raw, "", &sort, 1, 1);

        assert_eq!(names(&page0), ["A"]);
        assert_eq!(names(&page1), ["B"]);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_sequence() {
        let raw: Vec<Beer> = (0..23).map(|i| beer(i, &format!("Beer {i:02}"), 4.0)).collect();
        let sort = SortState::default();

        let first = compute(&raw, "", &sort, 0, 7);
        let mut seen = Vec::new();
        for page_index in 0..first.page_count {
            let view = compute(&raw, "", &sort, page::offset_for_page(page_index, 7), 7);
            seen.extend(view.rows.iter().map(|b| b.id));
        }

        assert_eq!(first.page_count, 4);
        assert_eq!(seen.len(), 23);
        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 23, "no gaps, no duplicates");
    }

    #[test]
    fn filter_then_paginate_end_to_end() {
        // 25 items, 12 of which match the query.
        let mut raw = Vec::new();
        for i in 0..12 {
            raw.push(beer(i, &format!("Pale Ale {i:02}"), 5.0));
        }
        for i in 12..25 {
            raw.push(beer(i, &format!("Stout {i:02}"), 7.0));
        }
        let sort = SortState::default();

        let page0 = compute(&raw, "pale", &sort, 0, 10);
        assert_eq!(page0.page_count, 2);
        assert_eq!(page0.filtered_len, 12);
        assert_eq!(page0.rows.len(), 10);

        let page1 = compute(&raw, "pale", &sort, page::offset_for_page(1, 10), 10);
        assert_eq!(page1.rows.len(), 2);

        let mut ids: Vec<u32> = page0.rows.iter().chain(page1.rows.iter()).map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
        assert!(ids.iter().all(|&id| id < 12), "only filter-matching rows");
    }

    #[test]
    fn empty_filtered_sequence_renders_a_single_empty_page() {
        let raw = vec![beer(1, "Buzz", 4.5)];
        let sort = SortState::default();

        let view = compute(&raw, "no such beer", &sort, 50, 10);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.offset, 0);
    }

    #[test]
    fn shrinking_filter_reclamps_a_stale_offset() {
        let raw: Vec<Beer> = (0..25).map(|i| beer(i, &format!("Beer {i:02}"), 4.0)).collect();
        let sort = SortState::default();

        // Page 2 of the unfiltered listing...
        let unfiltered = compute(&raw, "", &sort, 20, 10);
        assert_eq!(unfiltered.page_index, 2);

        // ...then a filter that matches only "Beer 0x" rows.
        let filtered = compute(&raw, "beer 0", &sort, 20, 10);
        assert_eq!(filtered.filtered_len, 10);
        assert_eq!(filtered.page_index, 0);
        assert_eq!(filtered.rows.len(), 10);
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let raw = vec![beer(1, "Buzz", 4.5), beer(2, "Trashy Blonde", 4.1)];
        let sort = SortState::default();

        let a = compute(&raw, "b", &sort, 0, 10);
        let b = compute(&raw, "b", &sort, 0, 10);
        assert_eq!(names(&a), names(&b));
        assert_eq!(a.page_count, b.page_count);
    }

    #[test]
    fn headers_flag_only_the_active_column() {
        let mut sort = SortState::default();
        sort.toggle(Column::Abv);

        let headers = headers(&sort);
        let flagged: Vec<&str> = headers
            .iter()
            .filter(|h| h.direction.is_some())
            .map(|h| h.label)
            .collect();
        assert_eq!(flagged, ["ABV"]);
    }
}
