use alloc::vec::Vec;

use reorder_grid::{
    AnimatedPosition, DraggableGrid, GestureState, GridKey, GridLayout, GridOptions, GridResult,
    Point, ReconcileSummary,
};

use crate::key::KeyMap;
use crate::{Easing, PointTween, PressEnd, PressTracker, Tween};

/// What the adapter should draw for one item on the current frame.
#[derive(Debug)]
pub struct FrameItem<'a, K, T> {
    pub key: &'a K,
    pub item: &'a T,
    pub order: usize,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// 1.0 at rest; grows toward the lift scale while the item is being dragged.
    pub scale: f32,
    /// Draw above the other items.
    pub is_active: bool,
}

/// Per-item playback of the grid's position commands.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Motion {
    generation: u64,
    displayed: Point,
    tween: Option<PointTween>,
}

impl Motion {
    fn settled(pos: &AnimatedPosition) -> Self {
        Self {
            generation: pos.generation(),
            displayed: pos.displayed(),
            tween: None,
        }
    }

    fn follow(&mut self, pos: &AnimatedPosition, now_ms: u64, easing: Easing) {
        if self.generation != pos.generation() {
            self.generation = pos.generation();
            // A newer command replaces whatever was playing; tweens start from what is on screen.
            self.tween = pos.transition().map(|t| {
                PointTween::new(self.displayed, pos.displayed(), now_ms, t.duration_ms, easing)
            });
        }
        match self.tween {
            Some(tween) => {
                self.displayed = tween.sample(now_ms);
                if tween.is_done(now_ms) {
                    self.tween = None;
                }
            }
            None => self.displayed = pos.displayed(),
        }
    }
}

/// A framework-neutral controller that wraps a `reorder_grid::DraggableGrid` and turns raw
/// pointer events plus a clock into drags, taps and animated frames.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` / `set_data` when the container is measured or the collection changes
/// - `pointer_down` / `pointer_move` / `pointer_up` / `pointer_cancel` for touch or mouse input
/// - `tick(now_ms)` each frame (arms long presses, advances tweens)
///
/// and then draw what `for_each_frame_item` reports.
#[derive(Debug)]
pub struct Controller<T, K> {
    grid: DraggableGrid<T, K>,
    press: PressTracker<K>,
    gesture: Option<GestureState>,
    motions: KeyMap<K, Motion>,
    lift: Option<Tween>,
    easing: Easing,
    now_ms: u64,
}

impl<T, K: GridKey> Controller<T, K> {
    pub fn new(options: GridOptions<T, K>) -> GridResult<Self> {
        Ok(Self::from_grid(DraggableGrid::new(options)?))
    }

    pub fn from_grid(grid: DraggableGrid<T, K>) -> Self {
        let press = PressTracker::new(grid.options().long_press_delay_ms);
        Self {
            grid,
            press,
            gesture: None,
            motions: KeyMap::default(),
            lift: None,
            easing: Easing::EaseInOutCubic,
            now_ms: 0,
        }
    }

    pub fn grid(&self) -> &DraggableGrid<T, K> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DraggableGrid<T, K> {
        &mut self.grid
    }

    pub fn into_grid(self) -> DraggableGrid<T, K> {
        self.grid
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Easing used for tweens started after this call.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.motions.values().any(|m| m.tween.is_some())
            || self.lift.is_some_and(|t| !t.is_done(self.now_ms))
    }

    pub fn on_layout(&mut self, layout: GridLayout) -> GridResult<()> {
        self.grid.on_layout(layout)
    }

    pub fn set_data(
        &mut self,
        data: impl IntoIterator<Item = T>,
    ) -> GridResult<Option<ReconcileSummary>> {
        self.grid.set_data(data)
    }

    /// Starts a press on `key` at an absolute point. The drag arms on the first `tick` after the
    /// long-press delay.
    pub fn pointer_down(&mut self, key: K, x: f32, y: f32, now_ms: u64) {
        self.press.set_delay_ms(self.grid.options().long_press_delay_ms);
        self.press.press_in(key, Point::new(x, y), now_ms);
        self.gesture = Some(GestureState::start(x, y));
    }

    /// Feeds a pointer move. Returns `Ok(true)` when the grid order changed.
    pub fn pointer_move(&mut self, x: f32, y: f32, vx: f32, vy: f32) -> GridResult<bool> {
        let Some(gesture) = self.gesture else {
            return Ok(false);
        };
        let gesture = gesture.moved_to(x, y).with_velocity(vx, vy);
        self.gesture = Some(gesture);
        if self.grid.is_dragging() {
            self.grid.drag_move(gesture)
        } else {
            Ok(false)
        }
    }

    /// Ends the pointer gesture. A short press becomes an item press; an active drag is released.
    ///
    /// Returns `Ok(true)` when a drag was released.
    pub fn pointer_up(&mut self, now_ms: u64) -> GridResult<bool> {
        self.gesture = None;
        if let PressEnd::Tap(key) = self.press.press_out(now_ms) {
            if self.grid.contains(&key) {
                self.grid.press(&key)?;
            }
        }
        self.grid.release_drag()
    }

    /// Abandons the gesture (e.g. the platform stole it). An active drag settles without a
    /// release event.
    pub fn pointer_cancel(&mut self) -> GridResult<bool> {
        self.gesture = None;
        self.press.cancel();
        self.grid.cancel_drag()
    }

    /// Advances the controller.
    ///
    /// Arms a pending long press, then plays back any position commands the grid issued since the
    /// last tick. Returns whether anything is still animating.
    pub fn tick(&mut self, now_ms: u64) -> GridResult<bool> {
        self.now_ms = now_ms;

        if let (Some((key, _)), Some(gesture)) = (self.press.poll(now_ms), self.gesture) {
            if self.grid.is_measured() && self.grid.contains(&key) {
                self.arm_drag(&key, gesture, now_ms)?;
            }
        }
        if !self.grid.is_dragging() {
            self.lift = None;
        }

        self.sync(now_ms);
        Ok(self.is_animating())
    }

    fn arm_drag(&mut self, key: &K, gesture: GestureState, now_ms: u64) -> GridResult<()> {
        if self.grid.begin_drag(key, gesture)? {
            let options = self.grid.options();
            self.lift = Some(Tween::new(
                1.0,
                options.lift_scale,
                now_ms,
                options.lift_duration_ms,
                self.easing,
            ));
        }
        Ok(())
    }

    fn sync(&mut self, now_ms: u64) {
        let easing = self.easing;
        for record in self.grid.records() {
            let pos = record.position();
            self.motions
                .entry(record.key().clone())
                .or_insert_with(|| Motion::settled(pos))
                .follow(pos, now_ms, easing);
        }
        let grid = &self.grid;
        self.motions.retain(|key, _| grid.contains(key));
    }

    /// On-screen top-left corner of `key` as of the last tick.
    pub fn displayed_position(&self, key: &K) -> Option<Point> {
        match self.motions.get(key) {
            Some(m) => Some(m.displayed),
            None => self.grid.position_of(key).ok(),
        }
    }

    pub fn scale_of(&self, key: &K) -> f32 {
        if self.grid.active_key() != Some(key) {
            return 1.0;
        }
        self.lift.map_or(1.0, |t| t.sample(self.now_ms))
    }

    /// Iterates frame descriptors in render order without allocating.
    pub fn for_each_frame_item<'a>(&'a self, mut f: impl FnMut(FrameItem<'a, K, T>)) {
        self.grid.for_each_render_item(|it| {
            let at = self
                .motions
                .get(it.key)
                .map_or(Point::new(it.left, it.top), |m| m.displayed);
            let scale = if it.is_active {
                self.lift.map_or(1.0, |t| t.sample(self.now_ms))
            } else {
                1.0
            };
            f(FrameItem {
                key: it.key,
                item: it.item,
                order: it.order,
                left: at.x,
                top: at.y,
                width: it.width,
                height: it.height,
                scale,
                is_active: it.is_active,
            });
        });
    }

    /// Collects frame descriptors into `out` (clears `out` first).
    pub fn collect_frame_items<'a>(&'a self, out: &mut Vec<FrameItem<'a, K, T>>) {
        out.clear();
        self.for_each_frame_item(|it| out.push(it));
    }
}
