use crate::key::GridKey;
use crate::{DraggableGrid, GestureState, GridError, GridResult, ItemPredicate, Point};

/// State of an active drag.
///
/// A session exists from `begin_drag` until `release_drag`/`cancel_drag` (or until the dragged
/// item disappears from the data). Only one session can exist at a time.
pub struct DragSession<T, K> {
    key: K,
    start: Point,
    offset: Point,
    position: Point,
    /// Reorder-eligibility predicate captured when the drag began.
    reorder_disabled: Option<ItemPredicate<T>>,
}

impl<T, K> DragSession<T, K> {
    /// Key of the item being dragged.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Where the gesture started.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Slot origin minus gesture start; adding it to a gesture point yields slot space.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Latest clamped gesture position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The dragged item's top-left corner in slot space.
    pub fn slot_space_position(&self) -> Point {
        self.position + self.offset
    }

    fn is_target(&self, item: &T) -> bool {
        !self.reorder_disabled.as_ref().is_some_and(|f| f(item))
    }
}

impl<T, K: core::fmt::Debug> core::fmt::Debug for DragSession<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragSession")
            .field("key", &self.key)
            .field("start", &self.start)
            .field("offset", &self.offset)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Clamps a raw gesture point so the dragged cell stays inside `[0, grid_width - cell_width]`
/// horizontally. The vertical axis is left alone.
pub fn clamp_drag_position(raw: Point, offset: Point, grid_width: f32, cell_width: f32) -> Point {
    let over = (offset.x + raw.x - (grid_width - cell_width)).max(0.0);
    let under = (offset.x + raw.x).min(0.0);
    Point::new(raw.x - over - under, raw.y)
}

impl<T, K: GridKey> DraggableGrid<T, K> {
    pub fn drag_session(&self) -> Option<&DragSession<T, K>> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active_key(&self) -> Option<&K> {
        self.drag.as_ref().map(DragSession::key)
    }

    /// Whether `key` may start a drag right now.
    pub fn can_drag(&self, key: &K) -> bool {
        self.drag.is_none()
            && self
                .registry
                .get(key)
                .is_some_and(|r| !self.options.drag_disabled(&r.item))
    }

    /// Arms a drag of `key` for a gesture that started at `gesture.x0/y0`.
    ///
    /// Returns `Ok(false)` when a drag is already active or the item is drag-disabled.
    pub fn begin_drag(&mut self, key: &K, gesture: GestureState) -> GridResult<bool> {
        if self.layout.is_none() {
            gwarn!("begin_drag before first layout");
            return Err(GridError::NotMeasured);
        }
        let record = self.registry.get(key).ok_or(GridError::UnknownKey)?;
        if self.drag.is_some() || self.options.drag_disabled(&record.item) {
            return Ok(false);
        }

        let origin = self.position_of(key)?;
        let start = gesture.start_point();
        let offset = origin - start;
        let position = gesture.move_point();

        let handle = self.registry.position_mut(key)?;
        handle.set_offset(offset);
        handle.set_value(position);

        self.drag = Some(DragSession {
            key: key.clone(),
            start,
            offset,
            position,
            reorder_disabled: self.options.is_reorder_disabled.clone(),
        });
        gdebug!(order = self.orders.get(key), "drag started");

        if let (Some(cb), Some(record)) = (&self.options.on_drag_start, self.registry.get(key)) {
            cb(&record.item);
        }
        Ok(true)
    }

    /// Follows the pointer and swaps the dragged item into the closest eligible slot.
    ///
    /// Returns `Ok(true)` when the order changed. Moves without an active drag are ignored.
    pub fn drag_move(&mut self, gesture: GestureState) -> GridResult<bool> {
        let (Some(session), Some(layout)) = (self.drag.as_mut(), self.layout) else {
            return Ok(false);
        };
        if let Some(cb) = &self.options.on_dragging {
            cb(&gesture);
        }

        let position = clamp_drag_position(
            gesture.move_point(),
            session.offset,
            layout.width,
            self.cell.width,
        );
        session.position = position;
        let key = session.key.clone();
        let probe = session.slot_space_position();
        gtrace!(x = position.x, y = position.y, "drag_move");

        self.registry.position_mut(&key)?.set_value(position);

        let Some(target) = self.closest_target(&key, probe)? else {
            return Ok(false);
        };
        self.reorder(&key, target)?;
        self.emit_sorted(self.options.on_reorder.as_ref());
        Ok(true)
    }

    /// Ends the drag: reports the final order and tweens the item into its slot.
    ///
    /// Returns `Ok(false)` when no drag was active.
    pub fn release_drag(&mut self) -> GridResult<bool> {
        let Some(session) = self.drag.take() else {
            return Ok(false);
        };
        gdebug!(order = self.orders.get(&session.key), "drag released");
        self.emit_sorted(self.options.on_drag_release.as_ref());
        self.animate_to_slot(&session.key)?;
        Ok(true)
    }

    /// Ends the drag without a release event; the item still settles into its slot.
    pub fn cancel_drag(&mut self) -> GridResult<bool> {
        let Some(session) = self.drag.take() else {
            return Ok(false);
        };
        gdebug!("drag cancelled");
        self.animate_to_slot(&session.key)?;
        Ok(true)
    }

    /// Order of the eligible item closest to `probe`, if it beats the dragged item's own slot and
    /// lies within one cell width. Ties keep the first item found in render order.
    fn closest_target(&self, key: &K, probe: Point) -> GridResult<Option<usize>> {
        let Some(session) = self.drag.as_ref() else {
            return Ok(None);
        };
        let own = self.order_of(key)?;
        let limit = self.cell.width * self.cell.width;
        let mut closest = probe.distance_squared(self.slot_position(own));
        let mut target = None;

        for record in self.registry.iter() {
            if &record.key == key || !session.is_target(&record.item) {
                continue;
            }
            let Some(order) = self.orders.get(&record.key) else {
                continue;
            };
            let d = probe.distance_squared(self.slot_position(order));
            if d < closest && d < limit {
                closest = d;
                target = Some(order);
            }
        }
        Ok(target)
    }

    /// Moves the dragged `key` to order `to`, shifting everything in between one step toward the
    /// vacated slot.
    ///
    /// Non-reorderable items keep their order; a run of them is jumped over, so the next movable
    /// item shifts by `run + 1`.
    pub(crate) fn reorder(&mut self, key: &K, to: usize) -> GridResult<()> {
        let from = self.order_of(key)?;
        if from == to {
            return Ok(());
        }
        let upward = from > to;
        let mut run = 0usize;

        for step in 1..=from.abs_diff(to) {
            let order = if upward { from - step } else { from + step };
            let Some(other) = self.orders.key_at(order).cloned() else {
                continue;
            };
            let movable = match (self.drag.as_ref(), self.registry.get(&other)) {
                (Some(session), Some(record)) => session.is_target(&record.item),
                (None, Some(record)) => !self.options.reorder_disabled(&record.item),
                (_, None) => true,
            };
            if !movable {
                run += 1;
                continue;
            }
            let next = if upward {
                order + run + 1
            } else {
                order - run - 1
            };
            run = 0;
            self.orders.set_order(&other, next)?;
            self.animate_to_slot(&other)?;
        }

        self.orders.set_order(key, to)?;
        debug_assert!(self.orders.is_permutation(), "reorder broke the permutation");
        gtrace!(from, to, "reorder");
        Ok(())
    }
}
