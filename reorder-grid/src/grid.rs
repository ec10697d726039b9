use alloc::vec::Vec;

use crate::drag::DragSession;
use crate::geometry::{row_count, slot_position};
use crate::key::GridKey;
use crate::order::OrderMap;
use crate::registry::{ItemRecord, ItemRegistry};
use crate::{
    CellSize, GridError, GridLayout, GridOptions, GridResult, Point, RenderItem, SortedCallback,
};

/// A headless drag-to-reorder engine for a grid of fixed-size cells.
///
/// The engine holds no UI objects. Your adapter drives it with:
/// - the container's measured frame (`on_layout`)
/// - the full item collection whenever it changes (`set_data`)
/// - gesture events (`begin_drag`, `drag_move`, `release_drag`, `cancel_drag`)
///
/// and reads back per-item render descriptors plus the animation commands stored on each item's
/// [`crate::AnimatedPosition`]. See the `reorder-grid-adapter` crate for a tween driver.
pub struct DraggableGrid<T, K> {
    pub(crate) options: GridOptions<T, K>,
    pub(crate) layout: Option<GridLayout>,
    pub(crate) cell: CellSize,

    /// `positions[order]` is the slot position for `order`; length tracks the item count.
    pub(crate) positions: Vec<Point>,
    pub(crate) orders: OrderMap<K>,
    pub(crate) registry: ItemRegistry<K, T>,

    pub(crate) drag: Option<DragSession<T, K>>,
    /// Data supplied before the first layout; reconciled once it arrives.
    pub(crate) pending: Option<Vec<T>>,
}

impl<T, K: GridKey> DraggableGrid<T, K> {
    /// Creates an empty, unmeasured grid.
    pub fn new(options: GridOptions<T, K>) -> GridResult<Self> {
        if options.columns == 0 {
            gwarn!("DraggableGrid::new: zero columns");
            return Err(GridError::InvalidColumns);
        }
        gdebug!(
            columns = options.columns,
            item_height = ?options.item_height,
            "DraggableGrid::new"
        );
        Ok(Self {
            options,
            layout: None,
            cell: CellSize::default(),
            positions: Vec::new(),
            orders: OrderMap::new(),
            registry: ItemRegistry::new(),
            drag: None,
            pending: None,
        })
    }

    pub fn options(&self) -> &GridOptions<T, K> {
        &self.options
    }

    /// Replaces the options, recomputing geometry if columns or item height changed.
    pub fn set_options(&mut self, options: GridOptions<T, K>) -> GridResult<()> {
        if options.columns == 0 {
            gwarn!("set_options: zero columns");
            return Err(GridError::InvalidColumns);
        }
        let geometry_changed = options.columns != self.options.columns
            || options.item_height != self.options.item_height;
        self.options = options;
        if geometry_changed {
            if let Some(layout) = self.layout {
                self.apply_layout(layout);
            }
        }
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut GridOptions<T, K>)) -> GridResult<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Reports the container's measured frame.
    ///
    /// The first report sizes the cells and reconciles any data supplied earlier. Later reports
    /// only matter when the width changes, in which case every idle item is re-seated at its slot.
    pub fn on_layout(&mut self, layout: GridLayout) -> GridResult<()> {
        match self.layout {
            None => {
                gdebug!(width = layout.width, height = layout.height, "first layout");
                self.apply_layout(layout);
                if let Some(data) = self.pending.take() {
                    self.reconcile(data)?;
                }
            }
            Some(prev) if prev.width != layout.width => {
                gdebug!(from = prev.width, to = layout.width, "grid width changed");
                self.apply_layout(layout);
            }
            Some(_) => self.layout = Some(layout),
        }
        Ok(())
    }

    fn apply_layout(&mut self, layout: GridLayout) {
        let width = layout.width / self.options.columns as f32;
        let height = self.options.item_height.unwrap_or(width);
        self.layout = Some(layout);
        self.cell = CellSize { width, height };
        self.rebuild_positions();

        let active = self.drag.as_ref().map(|s| s.key().clone());
        for record in self.registry.iter_mut() {
            if active.as_ref() == Some(&record.key) {
                continue;
            }
            if let Some(order) = self.orders.get(&record.key) {
                let at = self.positions.get(order).copied().unwrap_or_default();
                record.position.set_value(at);
            }
        }
    }

    fn rebuild_positions(&mut self) {
        let n = self.orders.len();
        self.positions.clear();
        self.positions.reserve_exact(n);
        for order in 0..n {
            self.positions
                .push(slot_position(order, self.options.columns, self.cell));
        }
    }

    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    pub fn is_measured(&self) -> bool {
        self.layout.is_some()
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn columns(&self) -> usize {
        self.options.columns
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.len() == 0
    }

    /// Height the container should take to fit every row.
    pub fn content_height(&self) -> f32 {
        row_count(self.len(), self.options.columns) as f32 * self.cell.height
    }

    /// Slot position for `order`, from the cache when available.
    pub fn slot_position(&self, order: usize) -> Point {
        self.positions
            .get(order)
            .copied()
            .unwrap_or_else(|| slot_position(order, self.options.columns, self.cell))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.orders.contains(key)
    }

    pub fn order_of(&self, key: &K) -> GridResult<usize> {
        self.orders.get(key).ok_or(GridError::UnknownKey)
    }

    pub fn key_at_order(&self, order: usize) -> Option<&K> {
        self.orders.key_at(order)
    }

    /// The slot position of `key`'s current order.
    pub fn position_of(&self, key: &K) -> GridResult<Point> {
        let order = self.order_of(key)?;
        Ok(self.slot_position(order))
    }

    pub fn record(&self, key: &K) -> Option<&ItemRecord<K, T>> {
        self.registry.get(key)
    }

    /// Tracked items in render order (the order they were first seen).
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord<K, T>> + '_ {
        self.registry.iter()
    }

    /// Payloads sorted by current order.
    pub fn sorted_items(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each_sorted(|item| out.push(item));
        out
    }

    pub fn for_each_sorted<'a>(&'a self, mut f: impl FnMut(&'a T)) {
        for key in self.orders.iter_sorted() {
            if let Some(record) = self.registry.get(key) {
                f(&record.item);
            }
        }
    }

    /// Forwards a short tap on `key` to `on_item_press`.
    pub fn press(&self, key: &K) -> GridResult<()> {
        let record = self.registry.get(key).ok_or(GridError::UnknownKey)?;
        if let Some(cb) = &self.options.on_item_press {
            cb(&record.item);
        }
        Ok(())
    }

    /// Iterates render descriptors in render order without allocating.
    pub fn for_each_render_item<'a>(&'a self, mut f: impl FnMut(RenderItem<'a, K, T>)) {
        let active = self.drag.as_ref().map(DragSession::key);
        for record in self.registry.iter() {
            let Some(order) = self.orders.get(&record.key) else {
                continue;
            };
            let at = record.position.displayed();
            f(RenderItem {
                key: &record.key,
                item: &record.item,
                order,
                left: at.x,
                top: at.y,
                width: self.cell.width,
                height: self.cell.height,
                is_active: active == Some(&record.key),
            });
        }
    }

    /// Collects render descriptors into `out` (clears `out` first).
    pub fn collect_render_items<'a>(&'a self, out: &mut Vec<RenderItem<'a, K, T>>) {
        out.clear();
        self.for_each_render_item(|it| out.push(it));
    }

    pub(crate) fn emit_sorted(&self, cb: Option<&SortedCallback<T>>) {
        if let Some(cb) = cb {
            let sorted = self.sorted_items();
            cb(&sorted);
        }
    }

    /// Starts a tween of `key` toward its current slot.
    pub(crate) fn animate_to_slot(&mut self, key: &K) -> GridResult<()> {
        let to = self.position_of(key)?;
        let duration_ms = self.options.move_duration_ms;
        let position = self.registry.position_mut(key)?;
        position.flatten_offset();
        position.animate_to(to, duration_ms);
        Ok(())
    }

    /// Tracks a new item at `order`, seated directly at its slot.
    pub(crate) fn add(&mut self, key: K, order: usize, item: T) -> GridResult<()> {
        if self.orders.contains(&key) {
            gwarn!("add: duplicate key");
            return Err(GridError::DuplicateKey);
        }
        let len = self.positions.len();
        self.positions
            .push(slot_position(len, self.options.columns, self.cell));
        let at = self.slot_position(order);
        self.orders.insert(key.clone(), order)?;
        self.registry.push(key, item, at)?;
        debug_assert_eq!(self.registry.len(), self.orders.len());
        Ok(())
    }

    /// Stops tracking `key`. The last cached slot is dropped with it.
    pub(crate) fn remove(&mut self, key: &K) -> GridResult<T> {
        let record = self.registry.remove(key)?;
        self.orders.remove(key)?;
        self.positions.pop();
        debug_assert_eq!(self.registry.len(), self.orders.len());
        if self.drag.as_ref().is_some_and(|s| s.key() == key) {
            gdebug!("active item removed; ending drag");
            self.drag = None;
        }
        Ok(record.item)
    }
}

impl<T, K: core::fmt::Debug> core::fmt::Debug for DraggableGrid<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraggableGrid")
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("cell", &self.cell)
            .field("positions", &self.positions)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}
