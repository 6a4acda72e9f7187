//! Translation helpers - pure shifts of a piece's cell set
//!
//! No grid awareness; validity of the result is the caller's concern.

use crate::types::Position;

fn translate(cells: &[Position; 4], dcol: i16, drow: i16) -> [Position; 4] {
    cells.map(|p| Position::new(p.col + dcol, p.row + drow))
}

/// Every cell shifted one row down, order preserved.
pub fn translate_down(cells: &[Position; 4]) -> [Position; 4] {
    translate(cells, 0, 1)
}

/// Every cell shifted one column left, order preserved.
pub fn translate_left(cells: &[Position; 4]) -> [Position; 4] {
    translate(cells, -1, 0)
}

/// Every cell shifted one column right, order preserved.
pub fn translate_right(cells: &[Position; 4]) -> [Position; 4] {
    translate(cells, 1, 0)
}
