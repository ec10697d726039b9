use reorder_grid::Point;

/// How a press ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressEnd<K> {
    /// Released before the long-press delay: a plain tap.
    Tap(K),
    /// Released after the long press fired.
    LongPress(K),
    /// There was no press in progress.
    None,
}

#[derive(Clone, Debug)]
struct Press<K> {
    key: K,
    at: Point,
    down_ms: u64,
    fired: bool,
}

/// Detects long presses from press-in/press-out events and a clock.
///
/// The adapter reports press events and calls `poll(now_ms)` every tick; nothing here owns a
/// timer.
#[derive(Clone, Debug)]
pub struct PressTracker<K> {
    delay_ms: u64,
    press: Option<Press<K>>,
}

impl<K: Clone> PressTracker<K> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            press: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Starts tracking a press on `key` at `at`. Any earlier press is forgotten.
    pub fn press_in(&mut self, key: K, at: Point, now_ms: u64) {
        self.press = Some(Press {
            key,
            at,
            down_ms: now_ms,
            fired: false,
        });
    }

    /// Returns the pressed key and press point once the press has been held for the delay.
    ///
    /// Fires at most once per press.
    pub fn poll(&mut self, now_ms: u64) -> Option<(K, Point)> {
        let press = self.press.as_mut()?;
        if press.fired || now_ms.saturating_sub(press.down_ms) < self.delay_ms {
            return None;
        }
        press.fired = true;
        Some((press.key.clone(), press.at))
    }

    pub fn press_out(&mut self, now_ms: u64) -> PressEnd<K> {
        let Some(press) = self.press.take() else {
            return PressEnd::None;
        };
        if press.fired || now_ms.saturating_sub(press.down_ms) >= self.delay_ms {
            PressEnd::LongPress(press.key)
        } else {
            PressEnd::Tap(press.key)
        }
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }
}
