//! Ordered, locally keyed collection of drafts

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::LocalId;

/// A draft item addressable by its editor key
pub trait Keyed {
    /// Prefix of generated keys (e.g., "col" yields `col_<uuid>`)
    const KEY_PREFIX: &'static str;

    fn local_id(&self) -> &LocalId;

    fn set_local_id(&mut self, local_id: LocalId);
}

/// Ordered collection keyed by `LocalId`
///
/// Items keep their insertion order; removal preserves the order of the
/// remaining items. Items arriving without a key, or with a key already in
/// use, get a freshly generated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftList<T> {
    entries: IndexMap<LocalId, T>,
}

impl<T> Default for DraftList<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Keyed> DraftList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an item and return its key
    pub fn insert(&mut self, mut item: T) -> LocalId {
        if item.local_id().is_empty() || self.entries.contains_key(item.local_id()) {
            let previous = item.local_id().clone();
            let generated = self.generate_key();
            if !previous.is_empty() {
                tracing::warn!(
                    duplicate = %previous,
                    assigned = %generated,
                    "Duplicate draft key, assigning a new one"
                );
            }
            item.set_local_id(generated);
        }

        let key = item.local_id().clone();
        self.entries.insert(key.clone(), item);
        key
    }

    pub fn get(&self, local_id: &str) -> Option<&T> {
        self.entries.get(local_id)
    }

    pub fn contains(&self, local_id: &str) -> bool {
        self.entries.contains_key(local_id)
    }

    /// Position of an item in display order
    pub fn position(&self, local_id: &str) -> Option<usize> {
        self.entries.get_index_of(local_id)
    }

    /// Mutate an item in place; returns `false` when the key is unknown
    ///
    /// The item keeps its key even if `edit` rewrites it.
    pub fn update(&mut self, local_id: &str, edit: impl FnOnce(&mut T)) -> bool {
        match self.entries.get_full_mut(local_id) {
            Some((_, key, item)) => {
                edit(item);
                item.set_local_id(key.clone());
                true
            }
            None => false,
        }
    }

    /// Remove an item, keeping the order of the others
    pub fn remove(&mut self, local_id: &str) -> Option<T> {
        self.entries.shift_remove(local_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LocalId> {
        self.entries.keys()
    }

    fn generate_key(&self) -> LocalId {
        loop {
            let key = LocalId::generate(T::KEY_PREFIX);
            if !self.entries.contains_key(&key) {
                return key;
            }
        }
    }
}

impl<T: Keyed> From<Vec<T>> for DraftList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Keyed> FromIterator<T> for DraftList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.insert(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a DraftList<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, LocalId, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<T: Serialize> Serialize for DraftList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for DraftList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
