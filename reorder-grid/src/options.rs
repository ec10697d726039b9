use alloc::sync::Arc;

use crate::GestureState;

/// Extracts the stable identity of an item.
pub type GetKeyCallback<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// A per-item predicate (e.g. "drag disabled", "reorder disabled").
pub type ItemPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A callback that receives a single item (press, drag start).
pub type ItemCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A callback that receives the raw gesture on every drag move.
pub type DraggingCallback = Arc<dyn Fn(&GestureState) + Send + Sync>;

/// A callback that receives every payload sorted by current order.
pub type SortedCallback<T> = Arc<dyn Fn(&[&T]) + Send + Sync>;

pub const DEFAULT_LONG_PRESS_DELAY_MS: u64 = 300;
pub const DEFAULT_MOVE_DURATION_MS: u64 = 200;
pub const DEFAULT_LIFT_DURATION_MS: u64 = 100;
pub const DEFAULT_LIFT_SCALE: f32 = 1.1;

/// Configuration for [`crate::DraggableGrid`].
///
/// Like the engine itself, this type holds no UI objects. Closures are stored in `Arc`s so the
/// options are cheap to clone and tweak before handing them back via
/// `DraggableGrid::set_options`.
pub struct GridOptions<T, K> {
    /// Number of columns (must be at least 1).
    pub columns: usize,
    /// Fixed cell height. When `None`, cells are square (`width / columns`).
    pub item_height: Option<f32>,
    pub get_key: GetKeyCallback<T, K>,

    /// Items for which this returns `true` can't start a drag.
    pub is_drag_disabled: Option<ItemPredicate<T>>,
    /// Items for which this returns `true` are never displaced by a drag.
    pub is_reorder_disabled: Option<ItemPredicate<T>>,

    /// How long a press must be held before a drag is armed.
    pub long_press_delay_ms: u64,
    /// Duration of the tween used when an item settles into a new slot.
    pub move_duration_ms: u64,
    /// Duration of the scale-up applied to the item when a drag starts.
    pub lift_duration_ms: u64,
    /// Scale the dragged item is lifted to.
    pub lift_scale: f32,

    pub on_item_press: Option<ItemCallback<T>>,
    pub on_drag_start: Option<ItemCallback<T>>,
    pub on_dragging: Option<DraggingCallback>,
    /// Fired whenever a drag changes the order (a preview of the final result).
    pub on_reorder: Option<SortedCallback<T>>,
    pub on_drag_release: Option<SortedCallback<T>>,
}

impl<T, K> Clone for GridOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns,
            item_height: self.item_height,
            get_key: Arc::clone(&self.get_key),
            is_drag_disabled: self.is_drag_disabled.clone(),
            is_reorder_disabled: self.is_reorder_disabled.clone(),
            long_press_delay_ms: self.long_press_delay_ms,
            move_duration_ms: self.move_duration_ms,
            lift_duration_ms: self.lift_duration_ms,
            lift_scale: self.lift_scale,
            on_item_press: self.on_item_press.clone(),
            on_drag_start: self.on_drag_start.clone(),
            on_dragging: self.on_dragging.clone(),
            on_reorder: self.on_reorder.clone(),
            on_drag_release: self.on_drag_release.clone(),
        }
    }
}

impl<T, K> GridOptions<T, K> {
    /// Creates options for a grid with `columns` columns, keyed by `get_key`.
    pub fn new(columns: usize, get_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            columns,
            item_height: None,
            get_key: Arc::new(get_key),
            is_drag_disabled: None,
            is_reorder_disabled: None,
            long_press_delay_ms: DEFAULT_LONG_PRESS_DELAY_MS,
            move_duration_ms: DEFAULT_MOVE_DURATION_MS,
            lift_duration_ms: DEFAULT_LIFT_DURATION_MS,
            lift_scale: DEFAULT_LIFT_SCALE,
            on_item_press: None,
            on_drag_start: None,
            on_dragging: None,
            on_reorder: None,
            on_drag_release: None,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_item_height(mut self, item_height: Option<f32>) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_drag_disabled(
        mut self,
        f: Option<impl Fn(&T) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.is_drag_disabled = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_reorder_disabled(
        mut self,
        f: Option<impl Fn(&T) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.is_reorder_disabled = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_long_press_delay_ms(mut self, delay_ms: u64) -> Self {
        self.long_press_delay_ms = delay_ms;
        self
    }

    pub fn with_move_duration_ms(mut self, duration_ms: u64) -> Self {
        self.move_duration_ms = duration_ms;
        self
    }

    pub fn with_lift(mut self, scale: f32, duration_ms: u64) -> Self {
        self.lift_scale = scale;
        self.lift_duration_ms = duration_ms;
        self
    }

    pub fn with_on_item_press(mut self, f: Option<impl Fn(&T) + Send + Sync + 'static>) -> Self {
        self.on_item_press = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_start(mut self, f: Option<impl Fn(&T) + Send + Sync + 'static>) -> Self {
        self.on_drag_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_dragging(
        mut self,
        f: Option<impl Fn(&GestureState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_dragging = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_reorder(mut self, f: Option<impl Fn(&[&T]) + Send + Sync + 'static>) -> Self {
        self.on_reorder = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_drag_release(
        mut self,
        f: Option<impl Fn(&[&T]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_drag_release = f.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn drag_disabled(&self, item: &T) -> bool {
        self.is_drag_disabled.as_ref().is_some_and(|f| f(item))
    }

    pub(crate) fn reorder_disabled(&self, item: &T) -> bool {
        self.is_reorder_disabled.as_ref().is_some_and(|f| f(item))
    }
}

impl<T, K> core::fmt::Debug for GridOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("columns", &self.columns)
            .field("item_height", &self.item_height)
            .field("long_press_delay_ms", &self.long_press_delay_ms)
            .field("move_duration_ms", &self.move_duration_ms)
            .field("lift_duration_ms", &self.lift_duration_ms)
            .field("lift_scale", &self.lift_scale)
            .finish_non_exhaustive()
    }
}
