use std::collections::BTreeSet;

use shared::domain::ArtworkId;

/// Row ids currently marked selected. Replaced wholesale on every
/// selection-change event and emptied whenever the rows are replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionSet {
    pub fn replace(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }

    /// Full selection after flipping `id`, for surfaces that report the whole
    /// set on every change.
    pub fn toggled(&self, id: ArtworkId) -> Vec<ArtworkId> {
        let mut next = self.ids.clone();
        if !next.remove(&id) {
            next.insert(id);
        }
        next.into_iter().collect()
    }
}
