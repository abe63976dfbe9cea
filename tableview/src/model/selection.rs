use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::RowId;

/// Set of selected row ids, as reported by the grid widget.
///
/// Ordered so that iteration and comparisons are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionModel {
    ids: BTreeSet<RowId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if the id was not already selected.
    pub fn insert(&mut self, id: RowId) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: &RowId) -> bool {
        self.ids.remove(id)
    }

    /// Flip the selection state of an id. Returns whether it is now selected.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }
}

impl<T: Into<RowId>> FromIterator<T> for SelectionModel {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
