use crate::{CellSize, Point};

/// Pixel offset of the slot at `order` in a row-major grid.
///
/// `columns` of zero is treated as one column.
pub fn slot_position(order: usize, columns: usize, cell: CellSize) -> Point {
    let columns = columns.max(1);
    let column = order % columns;
    let row = order / columns;
    Point::new(column as f32 * cell.width, row as f32 * cell.height)
}

/// Number of rows needed for `count` items.
pub fn row_count(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}
