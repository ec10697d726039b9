use alloc::vec::Vec;

use crate::key::{GridKey, KeyMap};
use crate::{GridError, GridResult, Point, Transition};

/// The live position of one item, as commanded by the engine.
///
/// The displayed position is `value + offset`. `offset` is only non-zero while the item is being
/// dragged: it translates raw gesture coordinates back into slot space.
///
/// Every command bumps `generation`, so an animation driver can tell a new command apart from one
/// it already started. `transition` describes how to reach `value` from wherever the item is
/// currently drawn: `None` jumps, `Some` tweens. Newer commands replace older ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatedPosition {
    value: Point,
    offset: Point,
    transition: Option<Transition>,
    generation: u64,
}

impl AnimatedPosition {
    pub fn new(value: Point) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Point {
        self.value
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// `value + offset`.
    pub fn displayed(&self) -> Point {
        self.value + self.offset
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Jumps to `value` with no tween.
    pub(crate) fn set_value(&mut self, value: Point) {
        self.value = value;
        self.transition = None;
        self.bump();
    }

    pub(crate) fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Folds `offset` into `value`; the displayed position does not change.
    pub(crate) fn flatten_offset(&mut self) {
        self.value = self.value + self.offset;
        self.offset = Point::ZERO;
    }

    pub(crate) fn animate_to(&mut self, to: Point, duration_ms: u64) {
        self.value = to;
        self.transition = Some(Transition { duration_ms });
        self.bump();
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[derive(Clone, Debug)]
pub struct ItemRecord<K, T> {
    pub(crate) key: K,
    pub(crate) item: T,
    pub(crate) position: AnimatedPosition,
}

impl<K, T> ItemRecord<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn position(&self) -> &AnimatedPosition {
        &self.position
    }
}

/// Tracked items in insertion (render) order, indexed by key.
#[derive(Clone, Debug)]
pub(crate) struct ItemRegistry<K, T> {
    records: Vec<ItemRecord<K, T>>,
    index: KeyMap<K, usize>,
}

impl<K: GridKey, T> ItemRegistry<K, T> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            index: KeyMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn get(&self, key: &K) -> Option<&ItemRecord<K, T>> {
        let i = *self.index.get(key)?;
        self.records.get(i)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut ItemRecord<K, T>> {
        let i = *self.index.get(key)?;
        self.records.get_mut(i)
    }

    pub(crate) fn position_mut(&mut self, key: &K) -> GridResult<&mut AnimatedPosition> {
        self.get_mut(key)
            .map(|r| &mut r.position)
            .ok_or(GridError::UnknownKey)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, ItemRecord<K, T>> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, ItemRecord<K, T>> {
        self.records.iter_mut()
    }

    pub(crate) fn push(&mut self, key: K, item: T, position: Point) -> GridResult<()> {
        if self.index.contains_key(&key) {
            return Err(GridError::DuplicateKey);
        }
        self.index.insert(key.clone(), self.records.len());
        self.records.push(ItemRecord {
            key,
            item,
            position: AnimatedPosition::new(position),
        });
        Ok(())
    }

    /// Swaps in a new payload. The position handle is left alone.
    pub(crate) fn replace_item(&mut self, key: &K, item: T) -> GridResult<T> {
        let record = self.get_mut(key).ok_or(GridError::UnknownKey)?;
        Ok(core::mem::replace(&mut record.item, item))
    }

    pub(crate) fn remove(&mut self, key: &K) -> GridResult<ItemRecord<K, T>> {
        let i = self.index.remove(key).ok_or(GridError::UnknownKey)?;
        let record = self.records.remove(i);
        for (j, r) in self.records.iter().enumerate().skip(i) {
            if let Some(slot) = self.index.get_mut(&r.key) {
                *slot = j;
            }
        }
        Ok(record)
    }
}
