use reorder_grid::{DraggableGrid, GestureState, GridLayout, GridOptions};

#[derive(Debug)]
struct Tile {
    id: u32,
    label: &'static str,
    pinned: bool,
}

fn main() {
    // Example: a 3-column grid where the last tile is pinned (never moves, never a drop target).
    //
    // An adapter would:
    // - report the measured container via on_layout
    // - forward the data (and every later change) via set_data
    // - arm a drag after a long press, then forward pointer moves and the release
    // - draw each item at the position reported by for_each_render_item
    let options = GridOptions::new(3, |t: &Tile| t.id)
        .with_reorder_disabled(Some(|t: &Tile| t.pinned))
        .with_drag_disabled(Some(|t: &Tile| t.pinned))
        .with_on_drag_release(Some(|items: &[&Tile]| {
            let labels: Vec<_> = items.iter().map(|t| t.label).collect();
            println!("released: {labels:?}");
        }));
    let mut grid = DraggableGrid::new(options).expect("valid options");

    grid.on_layout(GridLayout {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 200.0,
    })
    .expect("layout");

    let labels = ["alpha", "beta", "gamma", "delta", "epsilon", "pinned"];
    let tiles = labels.into_iter().enumerate().map(|(i, label)| Tile {
        id: i as u32,
        label,
        pinned: label == "pinned",
    });
    grid.set_data(tiles).expect("unique keys");
    println!(
        "cell={:?} content_height={}",
        grid.cell_size(),
        grid.content_height()
    );

    // Grab "alpha" at the middle of its cell and drag it across to the end of the second row.
    let start = GestureState::start(50.0, 50.0);
    grid.begin_drag(&0, start).expect("drag");
    for (x, y) in [(150.0, 60.0), (250.0, 80.0), (180.0, 150.0)] {
        let changed = grid.drag_move(start.moved_to(x, y)).expect("move");
        println!("move to ({x}, {y}): reordered={changed}");
    }
    grid.release_drag().expect("release");

    grid.for_each_render_item(|it| {
        println!(
            "{:>8} order={} at=({}, {}) transition={:?}",
            it.item.label,
            it.order,
            it.left,
            it.top,
            grid.record(it.key).and_then(|r| r.position().transition()),
        );
    });
}
