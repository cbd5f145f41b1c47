//! Tic-tac-toe board representation.
//!
//! The board is a fixed 3x3 grid of [`Cell`]s. Every mutation is a single
//! cell write; the search engine relies on this to place a trial mark and
//! revert it afterwards.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, COLUMN_LETTERS, LINES, N, NEUTRAL_SCORE, O_WIN_SCORE, X_WIN_SCORE};
use crate::error::BoardError;

/// State of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// The other player's mark.
    ///
    /// Only meaningful for `X` and `O`; the turn loops never pass `Empty`,
    /// which is returned unchanged.
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' | '.' | '-' => Ok(Cell::Empty),
            'X' | 'x' => Ok(Cell::X),
            'O' | 'o' => Ok(Cell::O),
            other => Err(BoardError::InvalidCellValue(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A target cell, guaranteed to be on the board.
///
/// Whether the cell is empty is a property of a particular [`Board`],
/// see [`Board::is_legal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, checking that both indices are in `0..N`.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Internal constructor for indices already known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse console notation: a column letter `A`-`C` followed by a row digit `0`-`2`.
    ///
    /// The letter is case-insensitive and surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidNotation(s.trim().to_string());

        let mut chars = s.trim().chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = COLUMN_LETTERS
            .iter()
            .position(|&l| l == letter.to_ascii_uppercase())
            .ok_or_else(invalid)?;
        let row = digit.to_digit(10).ok_or_else(invalid)? as usize;

        Move::new(row, col).map_err(|_| invalid())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col], self.row)
    }
}

/// Whole-game state derived from [`Board::evaluate`] and [`Board::has_empty_cell`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cell by raw indices.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Move::new(row, col).map(|mv| self.cell(mv))
    }

    /// Overwrite a cell by raw indices.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        let mv = Move::new(row, col)?;
        self.place(mv, value);
        Ok(())
    }

    /// Read the cell a move targets.
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Overwrite the cell a move targets. Writing `Cell::Empty` undoes a placement.
    #[inline]
    pub fn place(&mut self, mv: Move, value: Cell) {
        self.cells[mv.row][mv.col] = value;
    }

    /// True if the move targets an empty cell.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.cell(mv) == Cell::Empty
    }

    /// True if at least one cell is empty, i.e. moves remain.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == Cell::Empty)
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELLS);
        for row in 0..N {
            for col in 0..N {
                if self.cells[row][col] == Cell::Empty {
                    moves.push(Move::at(row, col));
                }
            }
        }
        moves
    }

    /// Score the position: `+10` if X owns a complete line, `-10` if O does, `0` otherwise.
    ///
    /// `0` covers both drawn and unfinished games; combine with
    /// [`Board::has_empty_cell`] (or use [`Board::status`]) to tell them apart.
    /// Lines are checked rows first, then columns, then diagonals.
    pub fn evaluate(&self) -> i32 {
        for &line in &LINES {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            if a == b && b == c {
                match a {
                    Cell::X => return X_WIN_SCORE,
                    Cell::O => return O_WIN_SCORE,
                    Cell::Empty => {}
                }
            }
        }
        NEUTRAL_SCORE
    }

    /// Current game status. A completed line wins even on a full board.
    pub fn status(&self) -> GameStatus {
        match self.evaluate() {
            X_WIN_SCORE => GameStatus::XWins,
            O_WIN_SCORE => GameStatus::OWins,
            _ if self.has_empty_cell() => GameStatus::InProgress,
            _ => GameStatus::Draw,
        }
    }

    /// Number of cells holding the given value.
    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == value).count()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse 9 cell characters in row-major order. `/` and line breaks
    /// between rows are ignored, so `"XOX/OXO/OXO"` and `"XOXOXOOXO"` are equal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !matches!(c, '/' | '\n' | '\r')).collect();
        if symbols.len() != CELLS {
            return Err(BoardError::InvalidLength {
                expected: CELLS,
                got: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in symbols.iter().enumerate() {
            board.cells[i / N][i % N] = Cell::try_from(c)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "  +-----+-----+-----+";

        let header = COLUMN_LETTERS.map(String::from).join("     ");
        writeln!(f, "     {header}")?;
        writeln!(f, "{separator}")?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{i} |")?;
            for cell in row {
                write!(f, "  {cell}  |")?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new();
        assert!(b.has_empty_cell());
        assert_eq!(b.empty_cells().len(), CELLS);
        assert_eq!(b.evaluate(), 0);
        assert_eq!(b.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut b = Board::new();
        assert_eq!(b.get(3, 0), Err(BoardError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(b.get(0, 3), Err(BoardError::OutOfRange { row: 0, col: 3 }));
        assert!(b.set(0, 7, Cell::X).is_err());
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_set_overwrites_one_cell() {
        let mut b = Board::new();
        b.set(1, 2, Cell::O).unwrap();
        assert_eq!(b.get(1, 2), Ok(Cell::O));
        assert_eq!(b.count(Cell::O), 1);
        assert_eq!(b.count(Cell::Empty), CELLS - 1);

        b.set(1, 2, Cell::Empty).unwrap();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_invalid_cell_value() {
        assert_eq!(Cell::try_from('Z'), Err(BoardError::InvalidCellValue('Z')));
        assert_eq!("XOX/OZO/OXO".parse::<Board>(), Err(BoardError::InvalidCellValue('Z')));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "XOX/OXO".parse::<Board>(),
            Err(BoardError::InvalidLength { expected: 9, got: 6 })
        );
    }

    #[test]
    fn test_evaluate_rows_columns_diagonals() {
        assert_eq!(board("XXX/OO./...").evaluate(), 10);
        assert_eq!(board("XX./OOO/X..").evaluate(), -10);
        assert_eq!(board("X.O/X.O/X..").evaluate(), 10);
        assert_eq!(board("X.O/XO./O.X").evaluate(), -10);
        assert_eq!(board("X.O/OX./..X").evaluate(), 10);
        assert_eq!(board("XO./OX./...").evaluate(), 0);
    }

    #[test]
    fn test_full_board_draw() {
        for pattern in ["XOX/OXO/OXO", "XOX/XOO/OXX"] {
            let b = board(pattern);
            assert_eq!(b.evaluate(), 0);
            assert!(!b.has_empty_cell());
            assert_eq!(b.status(), GameStatus::Draw);
        }
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let b = board("XXX/OOX/XOO");
        assert!(!b.has_empty_cell());
        assert_eq!(b.status(), GameStatus::XWins);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let b = board("X.O/.X./O..");
        let moves: Vec<(usize, usize)> = b.empty_cells().iter().map(|m| (m.row(), m.col())).collect();
        assert_eq!(moves, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_move_parse() {
        assert_eq!(Move::parse("A0"), Move::new(0, 0));
        assert_eq!(Move::parse(" c2\n"), Move::new(2, 2));
        assert_eq!(Move::parse("B1").unwrap().to_string(), "B1");
        assert!(Move::parse("D1").is_err());
        assert!(Move::parse("A3").is_err());
        assert!(Move::parse("1A").is_err());
        assert!(Move::parse("A").is_err());
        assert!(Move::parse("A12").is_err());
        assert!(Move::parse("").is_err());
    }

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Cell::X.opponent(), Cell::O);
        assert_eq!(Cell::O.opponent(), Cell::X);
        assert_eq!(Cell::Empty.opponent(), Cell::Empty);
    }

    #[test]
    fn test_display_grid() {
        let b = board("X../.O./...");
        let expected = concat!(
            "     A     B     C\n",
            "  +-----+-----+-----+\n",
            "0 |  X  |     |     |\n",
            "  +-----+-----+-----+\n",
            "1 |     |  O  |     |\n",
            "  +-----+-----+-----+\n",
            "2 |     |     |     |\n",
            "  +-----+-----+-----+\n",
        );
        assert_eq!(b.to_string(), expected);
    }
}
