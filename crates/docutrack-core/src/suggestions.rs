//! Search Suggestions
//!
//! Client-side suggestions over the contracts already loaded. Unlike the
//! main list, nothing here goes to the backend.

use std::collections::HashSet;

use crate::config::{MAX_SUGGESTIONS, MIN_SUGGESTION_QUERY_LEN};
use crate::models::Contract;

/// Strings a contract can be found by, in scan order
fn candidates(contract: &Contract) -> impl Iterator<Item = &str> {
    std::iter::once(contract.display_name())
        .chain(contract.variables.contract_type.as_deref())
        .chain(contract.variables.party_names().iter().map(String::as_str))
}

/// Up to five distinct strings containing `query` (case-insensitive), first-seen order
pub fn suggest(query: &str, contracts: &[Contract]) -> Vec<String> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for candidate in contracts.iter().flat_map(candidates) {
        if candidate.is_empty() || !candidate.to_lowercase().contains(&needle) {
            continue;
        }
        if seen.insert(candidate) {
            found.push(candidate.to_string());
            if found.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }
    found
}

/// Dropdown state next to the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionBox {
    items: Vec<String>,
    visible: bool,
}

impl SuggestionBox {
    /// Recompute for a new query; short queries clear and hide the dropdown
    pub fn update(&mut self, query: &str, contracts: &[Contract]) {
        self.items = suggest(query, contracts);
        self.visible = !self.items.is_empty();
    }

    /// Pick an entry: returns the text for the search box and hides the dropdown
    pub fn select(&mut self, index: usize) -> Option<String> {
        let picked = self.items.get(index).cloned();
        if picked.is_some() {
            self.visible = false;
        }
        picked
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
