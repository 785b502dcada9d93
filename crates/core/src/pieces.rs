//! Pieces module - the tetromino catalog
//!
//! Every piece kind has four rotation states, each a 4x4 occupancy pattern with a
//! top-left origin. The patterns are written once below as row-major bit masks
//! (bit 15 is the top-left sub-cell) and decoded at compile time into offset
//! tables; nothing outside this module sees the masks.
//!
//! Rotations carry no kick data: a rotation either fits at the same anchor or
//! is rejected.

use crate::types::{CellState, PieceKind, Rotation, PIECE_BOX};

/// Offset of a single mino relative to the piece anchor, as (column, row)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor, row-major order
pub type PieceShape = [MinoOffset; 4];

/// 4x4 occupancy grid indexed [row][column]
pub type Pattern = [[bool; PIECE_BOX as usize]; PIECE_BOX as usize];

/// Number of filled sub-cells in every rotation state
pub const CELLS_PER_PIECE: usize = 4;

/// Rotation masks indexed by [kind][rotation], kinds in catalog order I J L O S T Z
const MASKS: [[u16; 4]; 7] = [
    [0x0f00, 0x2222, 0x00f0, 0x4444],
    [0x44c0, 0x8e00, 0x6440, 0x0e20],
    [0x4460, 0x0e80, 0xc440, 0x2e00],
    [0xcc00, 0xcc00, 0xcc00, 0xcc00],
    [0x06c0, 0x8c40, 0x6c00, 0x4620],
    [0x0e40, 0x4c40, 0x4e00, 0x4640],
    [0x0c60, 0x4c80, 0xc600, 0x2640],
];

const fn decode(mask: u16) -> PieceShape {
    let mut shape = [(0i8, 0i8); CELLS_PER_PIECE];
    let mut filled = 0;
    let mut bit = 0;
    while bit < 16 {
        if mask & (0x8000 >> bit) != 0 {
            assert!(filled < CELLS_PER_PIECE, "rotation pattern has too many cells");
            shape[filled] = ((bit % 4) as i8, (bit / 4) as i8);
            filled += 1;
        }
        bit += 1;
    }
    assert!(filled == CELLS_PER_PIECE, "rotation pattern has too few cells");
    shape
}

const fn build_catalog() -> [[PieceShape; 4]; 7] {
    let mut catalog = [[[(0i8, 0i8); CELLS_PER_PIECE]; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let mut rotation = 0;
        while rotation < 4 {
            catalog[kind][rotation] = decode(MASKS[kind][rotation]);
            rotation += 1;
        }
        kind += 1;
    }
    catalog
}

/// Decoded shapes indexed by [kind][rotation].
static CATALOG: [[PieceShape; 4]; 7] = build_catalog();

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    CATALOG[kind.index()][rotation.index()]
}

/// Absolute board cells covered by a piece anchored at (x, y)
pub fn footprint(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> PieceShape {
    get_shape(kind, rotation).map(|(dx, dy)| (x + dx, y + dy))
}

/// The occupancy grid for a rotation state
pub fn pattern(kind: PieceKind, rotation: Rotation) -> Pattern {
    let mut grid = [[false; PIECE_BOX as usize]; PIECE_BOX as usize];
    for (dx, dy) in get_shape(kind, rotation) {
        grid[dy as usize][dx as usize] = true;
    }
    grid
}

/// Board tag stamped for a committed piece of this kind
pub fn display_tag(kind: PieceKind) -> CellState {
    CellState::Piece(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_top_left_first() {
        assert_eq!(decode(0x8421), [(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(decode(0x000f), [(0, 3), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn every_rotation_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let shape = get_shape(kind, rotation);
                for (i, a) in shape.iter().enumerate() {
                    assert!((0..4).contains(&a.0) && (0..4).contains(&a.1));
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{:?} {:?} repeats a cell", kind, rotation);
                    }
                }
                let count: usize = pattern(kind, rotation)
                    .iter()
                    .map(|row| row.iter().filter(|&&c| c).count())
                    .sum();
                assert_eq!(count, CELLS_PER_PIECE);
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = get_shape(PieceKind::O, Rotation::North);
        for rotation in Rotation::ALL {
            assert_eq!(get_shape(PieceKind::O, rotation), north);
        }
        assert_eq!(north, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn footprint_offsets_by_anchor() {
        assert_eq!(
            footprint(PieceKind::O, Rotation::North, 4, 18),
            [(4, 18), (5, 18), (4, 19), (5, 19)]
        );
    }
}
