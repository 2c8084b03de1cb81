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

//! Fixed-size windowing over the filtered sequence.
//!
//! Offsets and page counts are always computed against the FILTERED length,
//! never the raw collection length. When filtering shrinks the collection
//! below the current offset the offset must be re-clamped with
//! [`clamp_offset`]; out-of-range requests yield an empty window rather than
//! an error.
//!
//! All functions here tolerate `page_size == 0` by treating it as 1, so no
//! input can cause a division by zero or a panic.

/// At most `page_size` consecutive elements starting at `offset`.
///
/// An offset at or past the end returns an empty window.
pub(crate) fn window<T>(items: &[T], offset: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    if offset >= items.len() {
        return &[];
    }
    let end = items.len().min(offset.saturating_add(page_size));
    &items[offset..end]
}

/// Number of pages needed for `len` elements, minimum 1.
///
/// An empty sequence still renders a single empty page.
pub(crate) fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// The item offset a page selection maps to.
///
/// The result is unvalidated; callers clamp it against the current filtered
/// length with [`clamp_offset`].
pub(crate) fn offset_for_page(page_index: usize, page_size: usize) -> usize {
    page_index.saturating_mul(page_size.max(1))
}

/// Clamps `offset` to the start of the last valid page for `len` elements.
pub(crate) fn clamp_offset(offset: usize, len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    let last_page = page_count(len, page_size) - 1;
    offset.min(last_page * page_size)
}
