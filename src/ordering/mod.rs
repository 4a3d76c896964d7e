//! Generic ordered-collection primitive.
//!
//! Keeps a list of items whose `order` fields are always the contiguous
//! range `0..n-1`. Day-plan activities and packing-list items both run on
//! this engine; the store never mutates the underlying list directly.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Implemented by anything that can live in an [`OrderedList`].
pub trait OrderedItem {
    type Id: Copy + PartialEq + fmt::Debug;

    fn id(&self) -> Self::Id;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// A reorder sequence that is not a permutation of the current members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reorder sequence is not a permutation of the current members (container holds {expected} items, sequence names {given})")]
pub struct InvalidReorderError {
    pub expected: usize,
    pub given: usize,
}

/// A list of items with contiguous zero-based `order` indices.
///
/// The backing vector is kept sorted by `order`, so `items[i].order() == i`
/// holds between any two public calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct OrderedList<T: OrderedItem> {
    items: Vec<T>,
}

impl<T: OrderedItem> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: OrderedItem> OrderedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Append an item at the end of the sequence and return its id.
    pub fn append(&mut self, mut item: T) -> T::Id {
        item.set_order(self.items.len() as u32);
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Remove the item with the given id and recompact the survivors.
    /// Returns `None` (and changes nothing) when the id is not a member;
    /// removals are idempotent.
    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(index);
        self.recompact();
        Some(removed)
    }

    /// Rewrite the sequence to match `ids`.
    ///
    /// Fails closed: unless `ids` is exactly a permutation of the current
    /// member ids (no subset, no foreign ids, no duplicates) the list is
    /// left untouched and an [`InvalidReorderError`] is returned.
    pub fn reorder(&mut self, ids: &[T::Id]) -> Result<(), InvalidReorderError> {
        let error = InvalidReorderError {
            expected: self.items.len(),
            given: ids.len(),
        };
        if ids.len() != self.items.len() {
            return Err(error);
        }
        // Equal lengths plus every member named once implies a permutation:
        // a duplicate or foreign id would leave some member unnamed.
        for item in &self.items {
            if !ids.contains(&item.id()) {
                return Err(error);
            }
        }

        self.items.sort_by_key(|item| {
            ids.iter()
                .position(|&id| id == item.id())
                .unwrap_or(usize::MAX)
        });
        self.recompact();
        Ok(())
    }

    /// Move an item out of this list and into `target` at `target_index`
    /// (clamped to `[0, target.len()]`). Both lists are recompacted; either
    /// both sides update or neither does. Returns whether a move happened.
    pub fn move_into(&mut self, target: &mut Self, id: T::Id, target_index: usize) -> bool {
        let Some(item) = self.remove_by_id(id) else {
            return false;
        };
        target.insert_at(item, target_index);
        true
    }

    /// Remove an item and reinsert it at `target_index` within the same
    /// list. Returns whether the item was found.
    pub fn move_within(&mut self, id: T::Id, target_index: usize) -> bool {
        let Some(item) = self.remove_by_id(id) else {
            return false;
        };
        self.insert_at(item, target_index);
        true
    }

    fn insert_at(&mut self, item: T, index: usize) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.recompact();
    }

    fn recompact(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_order(index as u32);
        }
    }
}
