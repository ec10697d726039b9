/// A 2D pixel offset inside the grid container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance; cheaper than `distance` and monotonic with it.
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The measured frame of the grid container, as reported by the layout collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Size of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

/// Raw pointer gesture state delivered by the gesture collaborator.
///
/// `x0`/`y0` is where the gesture started, `move_x`/`move_y` is the latest absolute point.
/// `dx`/`dy` and `vx`/`vy` are passed through to `on_dragging` untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub x0: f32,
    pub y0: f32,
    pub move_x: f32,
    pub move_y: f32,
    pub dx: f32,
    pub dy: f32,
    pub vx: f32,
    pub vy: f32,
}

impl GestureState {
    /// A gesture that has just started at `(x, y)`.
    pub fn start(x: f32, y: f32) -> Self {
        Self {
            x0: x,
            y0: y,
            move_x: x,
            move_y: y,
            ..Self::default()
        }
    }

    /// The same gesture moved to an absolute point `(x, y)`.
    pub fn moved_to(self, x: f32, y: f32) -> Self {
        Self {
            move_x: x,
            move_y: y,
            dx: x - self.x0,
            dy: y - self.y0,
            ..self
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn start_point(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn move_point(&self) -> Point {
        Point::new(self.move_x, self.move_y)
    }
}

/// A timed move toward an item's position value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
}

/// What to draw for one tracked item.
#[derive(Debug)]
pub struct RenderItem<'a, K, T> {
    pub key: &'a K,
    pub item: &'a T,
    /// Current slot order, useful for caller-side numbering.
    pub order: usize,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Whether this item is being dragged (elevate/scale it).
    pub is_active: bool,
}
