use reorder_grid::{GridLayout, GridOptions};
use reorder_grid_adapter::Controller;

fn main() {
    // Example: a controller turning raw pointer events and a frame clock into a drag.
    //
    // An adapter would:
    // - forward pointer down/move/up from its input system
    // - call tick(now_ms) in a frame loop / timer
    // - draw the frame items (position, scale, elevation) after each tick
    let options = GridOptions::new(2, |n: &u32| *n)
        .with_on_drag_start(Some(|n: &u32| println!("drag start: {n}")))
        .with_on_reorder(Some(|items: &[&u32]| println!("reorder: {items:?}")));
    let mut c = Controller::new(options).expect("valid options");
    c.on_layout(GridLayout {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 200.0,
    })
    .expect("layout");
    c.set_data(0..4u32).expect("unique keys");

    let mut now_ms = 0u64;
    c.pointer_down(0, 50.0, 50.0, now_ms);

    // Hold past the long-press delay, then sweep toward the bottom-right cell.
    let path = [(50.0, 50.0), (90.0, 90.0), (130.0, 130.0), (150.0, 150.0)];
    let mut step = 0;
    loop {
        now_ms += 16;
        if now_ms > 320 && step < path.len() {
            let (x, y) = path[step];
            c.pointer_move(x, y, 0.0, 0.0).expect("move");
            step += 1;
        }
        if step == path.len() && c.grid().is_dragging() {
            c.pointer_up(now_ms).expect("release");
        }

        let animating = c.tick(now_ms).expect("tick");
        if now_ms % 64 == 0 {
            c.for_each_frame_item(|it| {
                println!(
                    "t={now_ms} item={} at=({:.1}, {:.1}) scale={:.2} active={}",
                    it.key, it.left, it.top, it.scale, it.is_active
                );
            });
        }
        if step == path.len() && !animating {
            break;
        }
    }

    println!("final order: {:?}", c.grid().sorted_items());
}
