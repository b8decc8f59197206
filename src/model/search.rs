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

//! Location search and filtering.
//!
//! This module holds the search text typed by the user and the result derived
//! from it: the matching locations in dataset order, and the set of position
//! keys the map uses to decide which markers stay visible.
//!
//! Matching is by word prefix. A location matches a query when any
//! whitespace-separated word of its name starts with the query, ignoring
//! case. "Grand" matches "Cinnamon Grand Colombo", "inn" does not.

use std::collections::HashSet;

use crate::model::{Location, LocationId, PositionKey};

/// Position keys of the locations in a filter result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct VisibilityIndex(HashSet<PositionKey>);

impl VisibilityIndex {
    pub(crate) fn contains(&self, key: &PositionKey) -> bool {
        self.0.contains(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterResult {
    pub(crate) locations: Vec<LocationId>,
    pub(crate) visibility: VisibilityIndex,
}

pub(crate) struct SearchFilter {
    text: String,
    result: FilterResult,
}

impl SearchFilter {
    /// Creates a filter with empty search text, matching the whole dataset.
    pub(crate) fn new(dataset: &[Location]) -> Self {
        Self {
            text: String::new(),
            result: filter_locations(dataset, ""),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn result(&self) -> &FilterResult {
        &self.result
    }

    /// Replaces the search text and recomputes the result from scratch.
    pub(crate) fn set_search_text(&mut self, text: &str, dataset: &[Location]) -> &FilterResult {
        text.clone_into(&mut self.text);
        self.result = filter_locations(dataset, text);
        &self.result
    }
}

pub(crate) fn filter_locations(dataset: &[Location], query: &str) -> FilterResult {
    let mut result = FilterResult::default();

    for (idx, location) in dataset.iter().enumerate() {
        if matches_word_prefix(location.name(), query) {
            result.locations.push(LocationId(idx));
            result.visibility.0.insert(location.position().key());
        }
    }

    result
}

pub(crate) fn matches_word_prefix(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    name.split_whitespace()
        .any(|word| word.to_lowercase().starts_with(&query))
}
