//! Grid geometry: the padded enumeration grid and its linear encoding.
//!
//! Figures grow on a conceptual `WIDTH x HEIGHT` grid addressed by a single
//! linear position `pos = x + WIDTH * y`. The margins are sized so that every
//! cell a figure can reach has all eight neighbors in bounds, which removes
//! border checks from the hot path.

/// Maximum figure size supported by this build.
///
/// Raising it requires a rebuild: every fixed array in the generator is sized
/// from this constant.
pub const NMAX: usize = 20;

/// Linear grid position. The grid is sized so every position fits.
pub type Pos = i16;

/// Grid width: `NMAX - 1` growth cells on either side of the origin column,
/// plus one margin column on each side.
pub const WIDTH: Pos = 2 * NMAX as Pos + 3;

/// Grid height: the figure cannot grow below the origin row, so one padded
/// row below and `NMAX - 1` growth rows plus margin above suffice.
pub const HEIGHT: Pos = NMAX as Pos + 4;

/// Total number of grid positions.
pub const GRID_SIZE: usize = WIDTH as usize * HEIGHT as usize;

const _: () = assert!(GRID_SIZE <= i16::MAX as usize, "positions must fit in i16");

/// The fixed origin cell: every generated figure has its bottom-row leftmost
/// cell here. Positions below it are poisoned at init so nothing can ever be
/// chosen with a smaller linear index.
pub const POS_ORIGIN: Pos = WIDTH / 2 + 2 * WIDTH;

// Directions as position offsets. Convention: bottom-left is (0, 0).

pub const RIGHT: Pos = 1;
pub const UP: Pos = WIDTH;
pub const LEFT: Pos = -1;
pub const DOWN: Pos = -WIDTH;

pub const UP_RIGHT: Pos = UP + RIGHT;
pub const UP_LEFT: Pos = UP + LEFT;
pub const DOWN_RIGHT: Pos = DOWN + RIGHT;
pub const DOWN_LEFT: Pos = DOWN + LEFT;

/// Neighbor offsets for 4-connectivity, in the fixed insertion order.
pub const NEIGHBORS4: [Pos; 4] = [RIGHT, UP, LEFT, DOWN];

/// Neighbor offsets for 8-connectivity, in the fixed insertion order.
pub const NEIGHBORS8: [Pos; 8] = [
    RIGHT, UP_RIGHT, UP, UP_LEFT, LEFT, DOWN_LEFT, DOWN, DOWN_RIGHT,
];

/// Upper bound on the candidate list length: chosen cells plus the discovered
/// frontier never exceed five slots per figure cell.
pub const MAX_CANDIDATES: usize = 5 * NMAX;

/// Decode a linear position into `(x, y)` grid coordinates.
#[inline]
pub fn coords(pos: Pos) -> (Pos, Pos) {
    (pos % WIDTH, pos / WIDTH)
}
