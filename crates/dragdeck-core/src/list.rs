//! Ordered, id-unique lists and the reorder engine behind sortable lists.

use crate::error::{DeckError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// An entry that carries a stable identifier.
pub trait Identified {
    /// The entry's unique id.
    fn id(&self) -> &str;
}

impl Identified for String {
    fn id(&self) -> &str {
        self
    }
}

/// An ordered sequence whose entries have pairwise distinct ids.
///
/// Order is the only externally visible state. All transformations return
/// a new list and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> OrderedList<T> {
    /// Build a list, rejecting duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DeckError::DuplicateId {
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(Identified::id).collect()
    }

    /// Index of the entry with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Entry with `id`.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check if an entry with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Append an entry.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.contains(item.id()) {
            return Err(DeckError::DuplicateId {
                id: item.id().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Insert an entry at `index`, shifting later entries back.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.items.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if self.contains(item.id()) {
            return Err(DeckError::DuplicateId {
                id: item.id().to_string(),
            });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Remove and return the entry with `id`.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Consume the list, returning its entries.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Identified> TryFrom<Vec<T>> for OrderedList<T> {
    type Error = DeckError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

impl<'de, T: Identified + Deserialize<'de>> Deserialize<'de> for OrderedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

/// Move the entry at `from_index` to `to_index`.
///
/// `to_index` is read against the sequence after removal, so
/// `[a, b, c, d]` moved `0 -> 2` yields `[b, c, a, d]`.
pub fn reorder<T: Identified + Clone>(
    list: &OrderedList<T>,
    from_index: usize,
    to_index: usize,
) -> Result<OrderedList<T>> {
    let len = list.len();
    for index in [from_index, to_index] {
        if index >= len {
            return Err(DeckError::IndexOutOfRange { index, len });
        }
    }

    let mut items = list.items.clone();
    if from_index != to_index {
        let item = items.remove(from_index);
        items.insert(to_index, item);
    }
    Ok(OrderedList { items })
}

/// Resolve a sortable-list drop of `active_id` onto `over_id`.
///
/// Returns `Ok(None)` when the drop changes nothing, so the caller can skip
/// notifying observers.
pub fn reorder_by_id<T: Identified + Clone>(
    list: &OrderedList<T>,
    active_id: &str,
    over_id: &str,
) -> Result<Option<OrderedList<T>>> {
    if active_id == over_id {
        log::debug!("Dropped {} onto itself, order unchanged", active_id);
        return Ok(None);
    }

    let from = list.position(active_id).ok_or_else(|| DeckError::ItemNotFound {
        id: active_id.to_string(),
    })?;
    let to = list.position(over_id).ok_or_else(|| DeckError::ItemNotFound {
        id: over_id.to_string(),
    })?;

    reorder(list, from, to).map(Some)
}
