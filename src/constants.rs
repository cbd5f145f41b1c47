//! Constants for board geometry and search scoring.
//!
//! The board is a fixed 3x3 grid addressed by `(row, col)`. Winning lines
//! are listed in the order [`crate::board::Board::evaluate`] checks them.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Total number of cells.
pub const CELLS: usize = N * N;

/// Column labels used by the console notation ("A0" .. "C2").
pub const COLUMN_LETTERS: [char; N] = ['A', 'B', 'C'];

/// One winning line as three `(row, col)` coordinates.
pub type Line = [(usize, usize); N];

/// All 8 winning lines: rows first, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Scoring
// =============================================================================

/// Base score of a position where X has a complete line.
pub const X_WIN_SCORE: i32 = 10;

/// Base score of a position where O has a complete line.
pub const O_WIN_SCORE: i32 = -X_WIN_SCORE;

/// Score of a drawn or unfinished position.
pub const NEUTRAL_SCORE: i32 = 0;
