use alloc::vec::Vec;

use crate::key::{GridKey, KeyMap};
use crate::{GridError, GridResult};

/// Bidirectional mapping between item keys and slot orders.
///
/// `by_key` is the source of truth; `by_order` is kept alongside it so "which key holds order K"
/// is an index lookup instead of a scan. During a batch of `set_order` calls a slot may briefly
/// name a key that has already moved on; once the batch describes a full permutation both sides
/// agree again (see [`OrderMap::is_permutation`]).
#[derive(Clone, Debug)]
pub(crate) struct OrderMap<K> {
    by_key: KeyMap<K, usize>,
    by_order: Vec<Option<K>>,
}

impl<K: GridKey> OrderMap<K> {
    pub(crate) fn new() -> Self {
        Self {
            by_key: KeyMap::new(),
            by_order: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.by_key.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    pub(crate) fn get(&self, key: &K) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub(crate) fn key_at(&self, order: usize) -> Option<&K> {
        self.by_order.get(order).and_then(Option::as_ref)
    }

    pub(crate) fn insert(&mut self, key: K, order: usize) -> GridResult<()> {
        if self.by_key.contains_key(&key) {
            return Err(GridError::DuplicateKey);
        }
        self.place(key.clone(), order);
        self.by_key.insert(key, order);
        Ok(())
    }

    /// Removes `key` and returns the order it held.
    pub(crate) fn remove(&mut self, key: &K) -> GridResult<usize> {
        let order = self.by_key.remove(key).ok_or(GridError::UnknownKey)?;
        self.vacate(key, order);
        self.trim();
        Ok(order)
    }

    /// Moves `key` to `order` and returns its previous order.
    pub(crate) fn set_order(&mut self, key: &K, order: usize) -> GridResult<usize> {
        let slot = self.by_key.get_mut(key).ok_or(GridError::UnknownKey)?;
        let prev = core::mem::replace(slot, order);
        if prev != order {
            self.vacate(key, prev);
            self.place(key.clone(), order);
        }
        Ok(prev)
    }

    /// Keys in order `0..len`.
    pub(crate) fn iter_sorted(&self) -> impl Iterator<Item = &K> + '_ {
        self.by_order.iter().filter_map(Option::as_ref)
    }

    /// Whether the orders in use are exactly `0..len` and both directions agree.
    pub(crate) fn is_permutation(&self) -> bool {
        if self.by_order.len() != self.by_key.len() {
            return false;
        }
        self.by_order.iter().enumerate().all(|(order, key)| {
            key.as_ref()
                .is_some_and(|k| self.by_key.get(k).copied() == Some(order))
        })
    }

    fn place(&mut self, key: K, order: usize) {
        if self.by_order.len() <= order {
            self.by_order.resize(order + 1, None);
        }
        self.by_order[order] = Some(key);
    }

    fn vacate(&mut self, key: &K, order: usize) {
        if let Some(slot) = self.by_order.get_mut(order) {
            if slot.as_ref() == Some(key) {
                *slot = None;
            }
        }
    }

    fn trim(&mut self) {
        while matches!(self.by_order.last(), Some(None)) {
            self.by_order.pop();
        }
    }
}
