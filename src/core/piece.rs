//! Piece module - the seven falling-block variants and their rotation tables
//!
//! Each rotating kind carries a fixed table of four (dcol, drow) offsets from
//! the piece center per orientation. The absolute cell set is always derived
//! from `(kind, center, orientation)`, so identical inputs give identical
//! cells. The O square has a single fixed shape and never rotates.

use crate::types::{Color, PieceKind, Position};

/// Four cell offsets from the piece center for one orientation.
pub type OffsetRow = [(i16, i16); 4];

const O_OFFSETS: OffsetRow = [(0, 0), (1, 0), (0, 1), (1, 1)];

const I_OFFSETS: [OffsetRow; 4] = [
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-2, 1), (-1, 1), (0, 1), (1, 1)],
    [(-1, -1), (-1, 0), (-1, 1), (-1, 2)],
    [(-2, -1), (-1, -1), (0, -1), (1, -1)],
];

const J_OFFSETS: [OffsetRow; 4] = [
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (1, -1), (0, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
];

const L_OFFSETS: [OffsetRow; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 0), (-1, 1), (0, 0), (1, 0)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
];

const Z_OFFSETS: [OffsetRow; 4] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    [(1, -1), (1, 0), (0, 0), (0, 1)],
];

const T_OFFSETS: [OffsetRow; 4] = [
    [(0, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (0, 1)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (-1, 0), (0, 0), (0, 1)],
];

const S_OFFSETS: [OffsetRow; 4] = [
    [(-1, 0), (0, 0), (0, -1), (1, -1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
];

/// Offset table row for a kind and orientation. Orientation wraps modulo 4;
/// O yields the same square for every orientation.
pub fn offsets(kind: PieceKind, orientation: u8) -> OffsetRow {
    let o = (orientation % 4) as usize;
    match kind {
        PieceKind::O => O_OFFSETS,
        PieceKind::I => I_OFFSETS[o],
        PieceKind::J => J_OFFSETS[o],
        PieceKind::L => L_OFFSETS[o],
        PieceKind::Z => Z_OFFSETS[o],
        PieceKind::T => T_OFFSETS[o],
        PieceKind::S => S_OFFSETS[o],
    }
}

fn cells_at(kind: PieceKind, center: Position, orientation: u8) -> [Position; 4] {
    offsets(kind, orientation).map(|(dc, dr)| Position::new(center.col + dc, center.row + dr))
}

/// The active falling piece.
///
/// A piece is created once per spawn and replaced, not reused, when the
/// previous one locks. Its cell set is kept in lockstep with `center` and
/// `orientation`: rotation re-derives cells from the table, translation
/// shifts cells and center together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    center: Position,
    orientation: u8,
    cells: [Position; 4],
}

impl Piece {
    /// Spawn a fresh piece near the top center of a grid `grid_width`
    /// columns wide, in orientation 0.
    pub fn spawn(kind: PieceKind, grid_width: u16) -> Self {
        let m = (grid_width as i16 - 1) / 2;
        let center = match kind {
            // The square and the Z sit flush with the top edge; the other
            // five hang one row below so their upward offsets stay in bounds.
            PieceKind::O | PieceKind::Z => Position::new(m, 0),
            _ => Position::new(m, 1),
        };
        Self::at(kind, center, 0)
    }

    fn at(kind: PieceKind, center: Position, orientation: u8) -> Self {
        Self {
            kind,
            center,
            orientation,
            cells: cells_at(kind, center, orientation),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn cells(&self) -> &[Position; 4] {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// The piece one orientation step ahead, cells re-derived from the table.
    ///
    /// Pure: `self` is unchanged. The engine commits the returned piece only
    /// when its cells validate, so a rejected rotation leaves orientation and
    /// cells consistent with each other.
    pub fn rotated(&self) -> Self {
        Self::at(self.kind, self.center, (self.orientation + 1) % 4)
    }

    /// Commit a validated translation, shifting the center the same way.
    pub(crate) fn apply_translation(&mut self, cells: [Position; 4], dcol: i16, drow: i16) {
        self.cells = cells;
        self.center.col += dcol;
        self.center.row += drow;
    }
}
