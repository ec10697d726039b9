use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let t = (self.next_u64() % 10_000) as f32 / 10_000.0;
        start + (end - start) * t
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Tile {
    id: u32,
    locked: bool,
    pinned: bool,
}

fn tile(id: u32) -> Tile {
    Tile {
        id,
        locked: false,
        pinned: false,
    }
}

fn locked(id: u32) -> Tile {
    Tile {
        locked: true,
        ..tile(id)
    }
}

fn tile_options(columns: usize) -> GridOptions<Tile, u32> {
    GridOptions::new(columns, |t: &Tile| t.id)
        .with_reorder_disabled(Some(|t: &Tile| t.locked))
        .with_drag_disabled(Some(|t: &Tile| t.pinned))
}

fn layout(width: f32) -> GridLayout {
    GridLayout {
        width,
        height: 600.0,
        ..GridLayout::default()
    }
}

/// 3 columns, 300px wide => 100x100 cells.
fn measured(tiles: Vec<Tile>) -> DraggableGrid<Tile, u32> {
    let mut g = DraggableGrid::new(tile_options(3)).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data(tiles).unwrap();
    g
}

fn ids(g: &DraggableGrid<Tile, u32>) -> Vec<u32> {
    g.sorted_items().iter().map(|t| t.id).collect()
}

fn assert_permutation<T, K: GridKey>(g: &DraggableGrid<T, K>) {
    assert!(g.orders.is_permutation());
    assert_eq!(g.positions.len(), g.len());
    assert_eq!(g.registry.len(), g.len());
    let mut seen: Vec<usize> = g.records().map(|r| g.order_of(r.key()).unwrap()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..g.len()).collect::<Vec<_>>());
}

/// Grabs the item at `key` by its cell center and moves the pointer by `(dx, dy)`.
fn drag_by(g: &mut DraggableGrid<Tile, u32>, key: u32, dx: f32, dy: f32) -> bool {
    let origin = g.position_of(&key).unwrap();
    let start = GestureState::start(origin.x + 50.0, origin.y + 50.0);
    assert!(g.begin_drag(&key, start).unwrap());
    g.drag_move(start.moved_to(start.move_x + dx, start.move_y + dy))
        .unwrap()
}

#[test]
fn geometry_is_row_major() {
    let cell = CellSize {
        width: 100.0,
        height: 100.0,
    };
    assert_eq!(slot_position(0, 3, cell), Point::new(0.0, 0.0));
    assert_eq!(slot_position(2, 3, cell), Point::new(200.0, 0.0));
    assert_eq!(slot_position(4, 3, cell), Point::new(100.0, 100.0));

    let tall = CellSize {
        width: 50.0,
        height: 80.0,
    };
    assert_eq!(slot_position(5, 2, tall), Point::new(50.0, 160.0));
    assert_eq!(row_count(7, 3), 3);
    assert_eq!(row_count(0, 3), 0);
}

#[test]
fn zero_columns_is_rejected() {
    let err = DraggableGrid::new(GridOptions::new(0, |t: &Tile| t.id)).unwrap_err();
    assert_eq!(err, GridError::InvalidColumns);

    let mut g = measured((0..3).map(tile).collect());
    assert_eq!(
        g.update_options(|o| o.columns = 0),
        Err(GridError::InvalidColumns)
    );
    assert_eq!(g.columns(), 3);
}

#[test]
fn data_before_layout_is_deferred_until_measured() {
    let mut g = DraggableGrid::new(tile_options(3)).unwrap();
    assert_eq!(g.set_data((0..4).map(tile)).unwrap(), None);
    assert!(g.is_empty());
    assert!(!g.is_measured());

    g.on_layout(layout(300.0)).unwrap();
    assert_eq!(g.len(), 4);
    assert_eq!(g.cell_size(), CellSize { width: 100.0, height: 100.0 });
    assert_eq!(g.content_height(), 200.0);
    assert_permutation(&g);

    // First appearance is seated directly, without a tween.
    let r = g.record(&3).unwrap();
    assert_eq!(r.position().value(), Point::new(0.0, 100.0));
    assert_eq!(r.position().transition(), None);
}

#[test]
fn item_height_overrides_square_cells() {
    let mut g = DraggableGrid::new(tile_options(4).with_item_height(Some(40.0))).unwrap();
    g.on_layout(layout(200.0)).unwrap();
    g.set_data((0..5).map(tile)).unwrap();
    assert_eq!(g.cell_size(), CellSize { width: 50.0, height: 40.0 });
    assert_eq!(g.position_of(&4).unwrap(), Point::new(0.0, 40.0));
    assert_eq!(g.content_height(), 80.0);
}

#[test]
fn width_change_rebuilds_slots_and_reseats_items() {
    let mut g = measured((0..4).map(tile).collect());
    g.on_layout(layout(600.0)).unwrap();
    assert_eq!(g.cell_size().width, 200.0);
    assert_eq!(g.position_of(&3).unwrap(), Point::new(0.0, 200.0));
    assert_eq!(
        g.record(&2).unwrap().position().value(),
        Point::new(400.0, 0.0)
    );

    // Same width: nothing to redo.
    let generation = g.record(&2).unwrap().position().generation();
    g.on_layout(GridLayout {
        height: 10.0,
        ..layout(600.0)
    })
    .unwrap();
    assert_eq!(g.record(&2).unwrap().position().generation(), generation);
}

#[test]
fn changing_columns_recomputes_geometry() {
    let mut g = measured((0..4).map(tile).collect());
    g.update_options(|o| o.columns = 2).unwrap();
    assert_eq!(g.cell_size().width, 150.0);
    assert_eq!(g.position_of(&2).unwrap(), Point::new(0.0, 150.0));
    assert_permutation(&g);
}

#[test]
fn reconcile_adds_and_removes_by_key() {
    let mut g = DraggableGrid::new(GridOptions::new(3, |s: &String| s.clone())).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data(["A", "B", "C"].map(String::from)).unwrap();

    let summary = g
        .set_data(["A", "D", "C"].map(String::from))
        .unwrap()
        .unwrap();
    assert_eq!(
        summary,
        ReconcileSummary {
            added: 1,
            removed: 1,
            moved: 0
        }
    );
    assert_eq!(g.order_of(&"A".into()), Ok(0));
    assert_eq!(g.order_of(&"D".into()), Ok(1));
    assert_eq!(g.order_of(&"C".into()), Ok(2));
    assert!(!g.contains(&"B".into()));
    assert!(g.record(&"B".into()).is_none());
    assert_eq!(g.order_of(&"B".into()), Err(GridError::UnknownKey));
    assert_permutation(&g);

    let d = g.record(&"D".into()).unwrap();
    assert_eq!(d.position().value(), Point::new(100.0, 0.0));
    assert_eq!(d.position().transition(), None);
}

#[test]
fn reconcile_moves_known_items_with_a_tween() {
    let mut g = measured((0..4).map(tile).collect());
    let summary = g
        .set_data([3, 0, 1, 2].map(tile))
        .unwrap()
        .unwrap();
    assert_eq!(summary.moved, 4);
    assert_eq!(ids(&g), [3, 0, 1, 2]);

    let r = g.record(&3).unwrap();
    assert_eq!(r.position().value(), Point::new(0.0, 0.0));
    assert_eq!(
        r.position().transition(),
        Some(Transition {
            duration_ms: DEFAULT_MOVE_DURATION_MS
        })
    );
    // Render order is still first-seen order.
    let render: Vec<u32> = g.records().map(|r| *r.key()).collect();
    assert_eq!(render, [0, 1, 2, 3]);
}

#[test]
fn reconcile_replaces_payload_without_touching_position() {
    let mut g = measured((0..3).map(tile).collect());
    let before = *g.record(&1).unwrap().position();

    let mut next: Vec<Tile> = (0..3).map(tile).collect();
    next[1].locked = true;
    g.set_data(next).unwrap();

    let r = g.record(&1).unwrap();
    assert!(r.item().locked);
    assert_eq!(*r.position(), before);
}

#[test]
fn reconcile_twice_is_idempotent() {
    let data: Vec<Tile> = [4, 2, 0, 1, 3].map(tile).into();
    let mut g = measured((0..5).map(tile).collect());
    g.set_data(data.clone()).unwrap();
    let generations: Vec<u64> = g.records().map(|r| r.position().generation()).collect();

    let summary = g.set_data(data).unwrap().unwrap();
    assert!(summary.is_unchanged());
    let after: Vec<u64> = g.records().map(|r| r.position().generation()).collect();
    assert_eq!(generations, after);
}

#[test]
fn duplicate_keys_are_rejected_without_mutation() {
    let mut g = measured((0..3).map(tile).collect());
    let err = g.set_data([0, 5, 5].map(tile)).unwrap_err();
    assert_eq!(err, GridError::DuplicateKey);
    assert_eq!(ids(&g), [0, 1, 2]);
    assert!(!g.contains(&5));

    let mut unmeasured = DraggableGrid::new(tile_options(3)).unwrap();
    assert_eq!(
        unmeasured.set_data([1, 1].map(tile)),
        Err(GridError::DuplicateKey)
    );
}

#[test]
fn add_and_remove_enforce_key_contracts() {
    let mut g = measured((0..3).map(tile).collect());
    assert_eq!(g.add(1, 3, tile(1)), Err(GridError::DuplicateKey));
    assert_eq!(g.remove(&9).unwrap_err(), GridError::UnknownKey);

    assert_eq!(g.remove(&2).unwrap(), tile(2));
    assert_eq!(g.positions.len(), 2);
    assert_permutation(&g);
}

#[test]
fn shrinking_to_empty_and_growing_again() {
    let mut g = measured((0..5).map(tile).collect());
    g.set_data(Vec::new()).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.content_height(), 0.0);
    assert_permutation(&g);

    g.set_data([7, 8].map(tile)).unwrap();
    assert_eq!(ids(&g), [7, 8]);
    assert_permutation(&g);
}

#[test]
fn drag_requires_layout_and_known_key() {
    let mut g = DraggableGrid::new(tile_options(3)).unwrap();
    g.set_data((0..3).map(tile)).unwrap();
    assert_eq!(
        g.begin_drag(&0, GestureState::start(0.0, 0.0)),
        Err(GridError::NotMeasured)
    );

    let mut g = measured((0..3).map(tile).collect());
    assert_eq!(
        g.begin_drag(&42, GestureState::start(0.0, 0.0)),
        Err(GridError::UnknownKey)
    );
}

#[test]
fn stray_gestures_are_ignored() {
    let mut g = measured((0..3).map(tile).collect());
    let gesture = GestureState::start(10.0, 10.0).moved_to(250.0, 10.0);
    assert_eq!(g.drag_move(gesture), Ok(false));
    assert_eq!(g.release_drag(), Ok(false));
    assert_eq!(g.cancel_drag(), Ok(false));
    assert_eq!(ids(&g), [0, 1, 2]);
}

#[test]
fn drag_disabled_items_do_not_start() {
    let mut tiles: Vec<Tile> = (0..3).map(tile).collect();
    tiles[1].pinned = true;
    let mut g = measured(tiles);
    assert!(!g.can_drag(&1));
    assert_eq!(g.begin_drag(&1, GestureState::start(150.0, 50.0)), Ok(false));
    assert!(!g.is_dragging());
}

#[test]
fn second_drag_cannot_start_until_idle() {
    let mut g = measured((0..3).map(tile).collect());
    assert_eq!(g.begin_drag(&0, GestureState::start(50.0, 50.0)), Ok(true));
    assert!(!g.can_drag(&1));
    assert_eq!(g.begin_drag(&1, GestureState::start(150.0, 50.0)), Ok(false));
    assert_eq!(g.active_key(), Some(&0));

    g.release_drag().unwrap();
    assert_eq!(g.begin_drag(&1, GestureState::start(150.0, 50.0)), Ok(true));
}

#[test]
fn drag_start_translates_gesture_into_slot_space() {
    let mut g = measured((0..6).map(tile).collect());
    let start = GestureState::start(130.0, 170.0);
    g.begin_drag(&4, start).unwrap();

    let session = g.drag_session().unwrap();
    assert_eq!(session.offset(), Point::new(-30.0, -70.0));
    assert_eq!(session.slot_space_position(), Point::new(100.0, 100.0));

    // Grabbing does not move the item.
    let r = g.record(&4).unwrap();
    assert_eq!(r.position().displayed(), Point::new(100.0, 100.0));
    assert_eq!(r.position().transition(), None);
}

#[test]
fn dragging_down_shifts_intervening_items_up() {
    let mut g = measured((0..6).map(tile).collect());
    // Order 0 -> order 3 (directly below in a 3-column grid).
    assert!(drag_by(&mut g, 0, 0.0, 100.0));

    assert_eq!(ids(&g), [1, 2, 3, 0, 4, 5]);
    assert_eq!(g.order_of(&1), Ok(0));
    assert_eq!(g.order_of(&2), Ok(1));
    assert_eq!(g.order_of(&3), Ok(2));
    assert_eq!(g.order_of(&0), Ok(3));
    assert_permutation(&g);

    // Shifted items tween to their new slots; the dragged item tracks the pointer.
    let r = g.record(&3).unwrap();
    assert_eq!(r.position().value(), Point::new(200.0, 0.0));
    assert!(r.position().transition().is_some());
    let dragged = g.record(&0).unwrap();
    assert_eq!(dragged.position().displayed(), Point::new(0.0, 100.0));
    assert_eq!(dragged.position().transition(), None);
}

#[test]
fn dragging_up_shifts_intervening_items_down() {
    let mut g = measured((0..6).map(tile).collect());
    // Order 4 -> order 1 (directly above).
    assert!(drag_by(&mut g, 4, 0.0, -100.0));
    assert_eq!(ids(&g), [0, 4, 1, 2, 3, 5]);
    assert_permutation(&g);
}

#[test]
fn non_reorderable_item_keeps_its_order() {
    let mut g = measured(vec_of([tile(0), locked(1), tile(2), tile(3)]));
    // Order 0 -> order 2 across the locked item at order 1.
    assert!(drag_by(&mut g, 0, 200.0, 0.0));

    assert_eq!(g.order_of(&1), Ok(1));
    assert_eq!(g.order_of(&0), Ok(2));
    assert_eq!(g.order_of(&2), Ok(0));
    assert_eq!(ids(&g), [2, 1, 0, 3]);
    assert_eq!(g.record(&1).unwrap().position().transition(), None);
    assert_permutation(&g);
}

#[test]
fn run_of_non_reorderable_items_is_jumped_over_upward() {
    let mut g = measured(vec_of([
        tile(0),
        tile(1),
        locked(2),
        locked(3),
        tile(4),
        tile(5),
    ]));
    // Order 4 -> order 1; orders 2 and 3 are locked, so item 1 jumps to order 4.
    assert!(drag_by(&mut g, 4, 0.0, -100.0));
    assert_eq!(ids(&g), [0, 4, 2, 3, 1, 5]);
    assert_permutation(&g);
}

#[test]
fn locked_items_are_never_targets() {
    let mut g = measured(vec_of([tile(0), locked(1), tile(2)]));
    // Hovering right over the locked slot does nothing.
    assert!(!drag_by(&mut g, 0, 100.0, 0.0));
    assert_eq!(ids(&g), [0, 1, 2]);
}

#[test]
fn own_slot_wins_when_closest() {
    let mut g = measured((0..6).map(tile).collect());
    assert!(!drag_by(&mut g, 4, 20.0, -30.0));
    assert_eq!(ids(&g), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn targets_must_be_within_one_cell_width() {
    let mut g = DraggableGrid::new(tile_options(3).with_item_height(Some(300.0))).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data((0..6).map(tile)).unwrap();
    // Order 3 sits 300px below. At 190px it is closer than the own slot, but still 110px away,
    // which is more than one 100px cell width.
    assert!(!drag_by(&mut g, 0, 0.0, 190.0));
    assert_eq!(ids(&g), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn equidistant_candidates_keep_the_first_in_render_order() {
    let mut g = measured((0..6).map(tile).collect());
    // Swap 1 and 2 so render order (0,1,2,..) differs from slot order.
    g.set_data([0, 2, 1, 3, 4, 5].map(tile)).unwrap();

    let start = GestureState::start(10.0, 10.0);
    g.begin_drag(&0, start).unwrap();
    // Slot-space probe at (150, 50): orders 1, 2, 4 and 5 are all 50√2 away.
    assert!(g.drag_move(start.moved_to(160.0, 60.0)).unwrap());

    // Item 1 (order 2) is met first in render order, so it wins.
    assert_eq!(g.order_of(&0), Ok(2));
    assert_eq!(ids(&g), [2, 1, 0, 3, 4, 5]);
}

#[test]
fn drag_is_clamped_to_grid_width() {
    let mut g = measured((0..6).map(tile).collect());
    let start = GestureState::start(250.0, 50.0);
    g.begin_drag(&2, start).unwrap();
    g.drag_move(start.moved_to(400.0, 50.0)).unwrap();

    let mut items = Vec::new();
    g.collect_render_items(&mut items);
    let dragged = items.iter().find(|it| *it.key == 2).unwrap();
    assert_eq!(dragged.left, 200.0);
    assert!(dragged.is_active);
    g.release_drag().unwrap();

    let start = GestureState::start(50.0, 50.0);
    g.begin_drag(&0, start).unwrap();
    g.drag_move(start.moved_to(-100.0, 80.0)).unwrap();
    let r = g.record(&0).unwrap();
    assert_eq!(r.position().displayed(), Point::new(0.0, 30.0));
}

#[test]
fn clamp_leaves_vertical_axis_free() {
    let p = clamp_drag_position(
        Point::new(500.0, -900.0),
        Point::new(-50.0, -50.0),
        300.0,
        100.0,
    );
    assert_eq!(p, Point::new(250.0, -900.0));
}

#[test]
fn release_settles_the_dragged_item() {
    let mut g = measured((0..6).map(tile).collect());
    drag_by(&mut g, 0, 0.0, 100.0);
    assert!(g.release_drag().unwrap());
    assert!(!g.is_dragging());

    let r = g.record(&0).unwrap();
    assert_eq!(r.position().offset(), Point::ZERO);
    assert_eq!(r.position().value(), Point::new(0.0, 100.0));
    assert_eq!(
        r.position().transition(),
        Some(Transition {
            duration_ms: DEFAULT_MOVE_DURATION_MS
        })
    );
}

#[test]
fn events_follow_the_drag_lifecycle() {
    let log = Arc::new(Mutex::new(Vec::<String>::new()));
    let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
    let opts = tile_options(3)
        .with_on_drag_start(Some(move |t: &Tile| {
            a.lock().unwrap().push(std::format!("start {}", t.id));
        }))
        .with_on_dragging(Some(move |g: &GestureState| {
            b.lock().unwrap().push(std::format!("drag {} {}", g.dx, g.dy));
        }))
        .with_on_reorder(Some(move |sorted: &[&Tile]| {
            let ids: Vec<u32> = sorted.iter().map(|t| t.id).collect();
            c.lock().unwrap().push(std::format!("reorder {ids:?}"));
        }))
        .with_on_drag_release(Some(move |sorted: &[&Tile]| {
            let ids: Vec<u32> = sorted.iter().map(|t| t.id).collect();
            d.lock().unwrap().push(std::format!("release {ids:?}"));
        }));
    let mut g = DraggableGrid::new(opts).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data((0..4).map(tile)).unwrap();

    let start = GestureState::start(50.0, 50.0);
    g.begin_drag(&0, start).unwrap();
    g.drag_move(start.moved_to(50.0, 60.0)).unwrap();
    g.drag_move(start.moved_to(50.0, 150.0)).unwrap();
    g.drag_move(start.moved_to(50.0, 155.0)).unwrap();
    g.release_drag().unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        [
            "start 0",
            "drag 0 10",
            "drag 0 100",
            "reorder [1, 2, 3, 0]",
            "drag 0 105",
            "release [1, 2, 3, 0]",
        ]
    );
}

#[test]
fn cancel_settles_without_release_event() {
    let released = Arc::new(Mutex::new(0usize));
    let r = released.clone();
    let opts = tile_options(3).with_on_drag_release(Some(move |_: &[&Tile]| {
        *r.lock().unwrap() += 1;
    }));
    let mut g = DraggableGrid::new(opts).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data((0..4).map(tile)).unwrap();

    drag_by(&mut g, 0, 0.0, 100.0);
    assert!(g.cancel_drag().unwrap());
    assert_eq!(*released.lock().unwrap(), 0);
    assert_eq!(ids(&g), [1, 2, 3, 0]);
    assert_eq!(
        g.record(&0).unwrap().position().value(),
        Point::new(0.0, 100.0)
    );
}

#[test]
fn press_forwards_to_callback() {
    let pressed = Arc::new(Mutex::new(Vec::new()));
    let p = pressed.clone();
    let opts = tile_options(3).with_on_item_press(Some(move |t: &Tile| {
        p.lock().unwrap().push(t.id);
    }));
    let mut g = DraggableGrid::new(opts).unwrap();
    g.on_layout(layout(300.0)).unwrap();
    g.set_data((0..2).map(tile)).unwrap();

    g.press(&1).unwrap();
    assert_eq!(g.press(&7), Err(GridError::UnknownKey));
    assert_eq!(*pressed.lock().unwrap(), [1]);
}

#[test]
fn removing_the_dragged_item_ends_the_drag() {
    let mut g = measured((0..4).map(tile).collect());
    let start = GestureState::start(50.0, 50.0);
    g.begin_drag(&0, start).unwrap();
    g.set_data([1, 2, 3].map(tile)).unwrap();

    assert!(!g.is_dragging());
    assert_eq!(g.drag_move(start.moved_to(50.0, 150.0)), Ok(false));
    assert_eq!(ids(&g), [1, 2, 3]);
    assert_permutation(&g);
}

#[test]
fn reconcile_during_drag_leaves_the_dragged_item_on_the_pointer() {
    let mut g = measured((0..4).map(tile).collect());
    let start = GestureState::start(50.0, 50.0);
    g.begin_drag(&0, start).unwrap();
    g.set_data([1, 0, 2, 3].map(tile)).unwrap();

    assert_eq!(g.order_of(&0), Ok(1));
    let r = g.record(&0).unwrap();
    assert_eq!(r.position().transition(), None);
    assert_eq!(r.position().offset(), Point::new(-50.0, -50.0));
}

#[test]
fn render_items_report_order_and_geometry() {
    let mut g = measured((0..4).map(tile).collect());
    g.set_data([3, 2, 1, 0].map(tile)).unwrap();

    let mut items = Vec::new();
    g.collect_render_items(&mut items);
    assert_eq!(items.len(), 4);
    let it = &items[0];
    assert_eq!(*it.key, 0);
    assert_eq!(it.order, 3);
    assert_eq!((it.left, it.top), (0.0, 100.0));
    assert_eq!((it.width, it.height), (100.0, 100.0));
    assert!(!it.is_active);
}

#[test]
fn key_at_order_is_the_inverse_of_order_of() {
    let mut g = measured((0..6).map(tile).collect());
    drag_by(&mut g, 5, -200.0, -100.0);
    g.release_drag().unwrap();
    for order in 0..g.len() {
        let key = *g.key_at_order(order).unwrap();
        assert_eq!(g.order_of(&key), Ok(order));
    }
    assert_eq!(g.key_at_order(6), None);
}

#[test]
fn random_operations_preserve_the_permutation() {
    let mut rng = Lcg::new(0x5eed);
    let mut g = measured((0..8).map(tile).collect());

    for _ in 0..300 {
        match rng.gen_range_usize(0, 4) {
            0 => {
                // Random subset of keys 0..16 in random order, some locked.
                let mut keys: Vec<u32> = (0..16).filter(|_| rng.gen_bool()).collect();
                for i in (1..keys.len()).rev() {
                    let j = rng.gen_range_usize(0, i + 1);
                    keys.swap(i, j);
                }
                let tiles: Vec<Tile> = keys
                    .into_iter()
                    .map(|id| if id % 5 == 0 { locked(id) } else { tile(id) })
                    .collect();
                g.set_data(tiles).unwrap();
            }
            _ if !g.is_empty() => {
                let order = rng.gen_range_usize(0, g.len());
                let key = *g.key_at_order(order).unwrap();
                let origin = g.position_of(&key).unwrap();
                let start = GestureState::start(origin.x + 10.0, origin.y + 10.0);
                if g.begin_drag(&key, start).unwrap() {
                    for _ in 0..rng.gen_range_usize(1, 6) {
                        let x = rng.gen_f32(-100.0, 400.0);
                        let y = rng.gen_f32(-100.0, 700.0);
                        g.drag_move(start.moved_to(x, y)).unwrap();
                        assert_permutation(&g);
                    }
                    if rng.gen_bool() {
                        g.release_drag().unwrap();
                    } else {
                        g.cancel_drag().unwrap();
                    }
                }
            }
            _ => {}
        }
        assert_permutation(&g);
    }
}

#[test]
fn locked_items_never_move_during_drags() {
    let mut rng = Lcg::new(7);
    let tiles: Vec<Tile> = (0..12)
        .map(|id| if id % 4 == 1 { locked(id) } else { tile(id) })
        .collect();
    let mut g = measured(tiles);

    for _ in 0..100 {
        let key = loop {
            let k = rng.gen_range_usize(0, 12) as u32;
            if k % 4 != 1 {
                break k;
            }
        };
        let origin = g.position_of(&key).unwrap();
        let start = GestureState::start(origin.x + 50.0, origin.y + 50.0);
        g.begin_drag(&key, start).unwrap();
        let x = rng.gen_f32(0.0, 300.0);
        let y = rng.gen_f32(0.0, 400.0);
        g.drag_move(start.moved_to(x, y)).unwrap();
        g.release_drag().unwrap();

        for id in [1u32, 5, 9] {
            assert_eq!(g.order_of(&id), Ok(id as usize));
        }
    }
}

fn vec_of<const N: usize>(tiles: [Tile; N]) -> Vec<Tile> {
    tiles.into()
}
