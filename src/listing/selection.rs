//! Per-entry selection state for bulk actions.
//!
//! Each selectable entry is either unselected or selected, starting
//! unselected. Only `toggle` and `toggle_all` move between the two. A new
//! listing resets everything. Ids that do not belong to a selectable entry of
//! the current listing are ignored rather than rejected.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Serialize, Serializer};

use super::entry::Entry;

/// Aggregate state of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalSelected {
    None = 0,
    Partial = 1,
    All = 2,
}

// Serialized as the numeric value an indeterminate checkbox expects
impl Serialize for TotalSelected {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    /// Selectable ids in listing order
    order: Vec<String>,
    selectable: HashSet<String>,
    selected: HashSet<String>,
}

impl SelectionTracker {
    /// Everything unselected.
    pub fn new(entries: &[Entry]) -> Self {
        let mut selectable = HashSet::new();
        let order: Vec<String> = entries
            .iter()
            .filter(|e| e.is_selectable() && selectable.insert(e.id.clone()))
            .map(|e| e.id.clone())
            .collect();
        Self { order, selectable, selected: HashSet::new() }
    }

    /// Restores a caller-held selection map. Stale and unselectable ids are dropped.
    pub fn from_map(entries: &[Entry], map: &HashMap<String, bool>) -> Self {
        let mut tracker = Self::new(entries);
        let mut stale = 0usize;
        for (id, on) in map {
            if !*on {
                continue;
            }
            if tracker.selectable.contains(id) {
                tracker.selected.insert(id.clone());
            } else {
                stale += 1;
            }
        }
        if stale > 0 {
            tracing::debug!("Ignored {} stale selection ids", stale);
        }
        tracker
    }

    /// The listing changed: adopt its entries, nothing selected.
    pub fn reset(&mut self, entries: &[Entry]) {
        *self = Self::new(entries);
    }

    pub fn is_selectable(&self, id: &str) -> bool {
        self.selectable.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Flips one entry. Returns false (and changes nothing) for ids that are
    /// not selectable in this listing.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.selectable.contains(id) {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        true
    }

    /// Clears a fully selected listing, otherwise selects every selectable
    /// entry (a partial selection is completed, not inverted).
    pub fn toggle_all(&mut self) {
        if self.total_selected() == TotalSelected::All {
            self.selected.clear();
        } else {
            self.selected = self.selectable.clone();
        }
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn total_selected(&self) -> TotalSelected {
        match self.selected.len() {
            0 => TotalSelected::None,
            n if n == self.order.len() => TotalSelected::All,
            _ => TotalSelected::Partial,
        }
    }

    /// Selected ids in listing order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().filter(|id| self.selected.contains(*id)).map(String::as_str)
    }

    /// Every selectable id with its state.
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.order.iter().map(|id| (id.clone(), self.selected.contains(id))).collect()
    }
}
