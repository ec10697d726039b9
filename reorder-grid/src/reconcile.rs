use alloc::vec::Vec;

use crate::key::{GridKey, KeyMap};
use crate::{DraggableGrid, GridError, GridResult};

/// What a reconciliation pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReconcileSummary {
    pub added: usize,
    pub removed: usize,
    /// Tracked items whose order changed (each one was tweened to its new slot).
    pub moved: usize,
}

impl ReconcileSummary {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.moved == 0
    }
}

impl<T, K: GridKey> DraggableGrid<T, K> {
    /// Replaces the external item collection.
    ///
    /// Before the first layout the collection is only stored (and `Ok(None)` is returned); it is
    /// reconciled as soon as `on_layout` reports a size. Collections that repeat a key are
    /// rejected without touching any state.
    pub fn set_data(
        &mut self,
        data: impl IntoIterator<Item = T>,
    ) -> GridResult<Option<ReconcileSummary>> {
        let data: Vec<T> = data.into_iter().collect();
        if self.layout.is_none() {
            self.check_unique(&data)?;
            gdebug!(len = data.len(), "set_data before layout; deferred");
            self.pending = Some(data);
            return Ok(None);
        }
        self.reconcile(data).map(Some)
    }

    fn check_unique(&self, data: &[T]) -> GridResult<KeyMap<K, usize>> {
        let mut seen = KeyMap::new();
        for (index, item) in data.iter().enumerate() {
            if seen.insert((self.options.get_key)(item), index).is_some() {
                gwarn!(index, "external collection repeats a key");
                return Err(GridError::DuplicateKey);
            }
        }
        Ok(seen)
    }

    /// Diffs `data` against the tracked items by key.
    ///
    /// Each item's order becomes its index in `data`. Known items that change order tween to
    /// their new slot and get the new payload in place; unknown items appear directly at their
    /// slot; items missing from `data` are dropped instantly. Untouched items keep whatever
    /// animation they were running.
    pub(crate) fn reconcile(&mut self, data: Vec<T>) -> GridResult<ReconcileSummary> {
        let seen = self.check_unique(&data)?;
        let mut summary = ReconcileSummary::default();
        let active = self.drag.as_ref().map(|s| s.key().clone());

        for (index, item) in data.into_iter().enumerate() {
            let key = (self.options.get_key)(&item);
            match self.orders.get(&key) {
                Some(order) => {
                    if order != index {
                        self.orders.set_order(&key, index)?;
                        // The dragged item follows the pointer and settles on release.
                        if active.as_ref() != Some(&key) {
                            self.animate_to_slot(&key)?;
                        }
                        summary.moved += 1;
                    }
                    self.registry.replace_item(&key, item)?;
                }
                None => {
                    self.add(key, index, item)?;
                    summary.added += 1;
                }
            }
        }

        let vanished: Vec<K> = self
            .registry
            .iter()
            .filter(|r| !seen.contains_key(&r.key))
            .map(|r| r.key.clone())
            .collect();
        for key in &vanished {
            self.remove(key)?;
            summary.removed += 1;
        }

        debug_assert!(
            self.orders.is_permutation(),
            "reconcile left a non-permutation"
        );
        gdebug!(
            added = summary.added,
            removed = summary.removed,
            moved = summary.moved,
            "reconcile"
        );
        Ok(summary)
    }
}
