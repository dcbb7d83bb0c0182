// SPDX-License-Identifier: MPL-2.0
//! Row selection tracked by identity.

use std::collections::HashSet;
use std::hash::Hash;

/// Tri-state of a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl CheckState {
    /// Derives the state from `selected` out of `total` rows.
    ///
    /// Zero rows is `Unchecked`: an empty table is never "all selected".
    #[must_use]
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckState::Unchecked
        } else if selected >= total {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    #[must_use]
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

/// A set of selected row identities.
#[derive(Debug, Clone)]
pub struct Selection<Id> {
    ids: HashSet<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> Selection<Id> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`; returns whether it is now selected.
    pub fn toggle(&mut self, id: &Id) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Replaces the selection with `ids`.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a Id>)
    where
        Id: 'a,
    {
        self.ids = ids.into_iter().cloned().collect();
    }

    /// Drops every id that `keep` rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(&Id) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
