//! Exhaustive minimax search.
//!
//! The engine plays X (the maximizer) against an O that is assumed to
//! reply optimally. There is no pruning: the 3x3 tree is small enough to
//! walk completely on every call.
//!
//! All exploration happens in place on the caller's [`Board`]. Each trial
//! mark is placed, scored and reverted before the next sibling is tried,
//! so the board is unchanged when a search returns.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Cell, Move};
use crate::constants::NEUTRAL_SCORE;

/// Summary of the spread of root candidate scores.
///
/// Classifies the signs of the lowest and highest candidate scores. It is
/// purely informational and plays no part in choosing the move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outlook {
    /// Every candidate wins for X.
    BothPositive,
    /// The worst candidate draws, the best wins.
    ZeroPositive,
    /// Every candidate draws.
    BothZero,
    /// The worst candidate loses, the best wins.
    NegativePositive,
    /// The worst candidate loses, the best draws.
    NegativeZero,
    /// Every candidate loses for X.
    BothNegative,
}

impl Outlook {
    /// Classify a `(min, max)` pair of candidate scores.
    pub fn classify(min: i32, max: i32) -> Self {
        match (min.signum(), max.signum()) {
            (1, _) => Outlook::BothPositive,
            (0, 1) => Outlook::ZeroPositive,
            (0, _) => Outlook::BothZero,
            (_, 1) => Outlook::NegativePositive,
            (_, 0) => Outlook::NegativeZero,
            _ => Outlook::BothNegative,
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outlook::BothPositive => "++",
            Outlook::ZeroPositive => "0+ You're done for!",
            Outlook::BothZero => "00 Still undecided.",
            Outlook::NegativePositive => "-+ Ah, that's a win!",
            Outlook::NegativeZero => "-0",
            Outlook::BothNegative => "--",
        };
        f.write_str(message)
    }
}

/// Result of a root search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move.
    pub best: Move,
    /// Minimax score of the chosen move (X's point of view).
    pub score: i32,
    /// Spread of all root candidate scores.
    pub outlook: Outlook,
}

/// Apply the depth penalty to a terminal score.
///
/// X wins lose one point per ply (`10 - depth`), O wins gain one
/// (`-10 + depth`), so the winning side always prefers the quickest win.
/// Neutral scores are left alone.
#[inline]
pub fn depth_adjusted(score: i32, depth: u32) -> i32 {
    score - score.signum() * depth as i32
}

/// Place `mark` on `mv`, run `f`, then clear the cell again.
fn with_trial<R>(board: &mut Board, mv: Move, mark: Cell, f: impl FnOnce(&mut Board) -> R) -> R {
    board.place(mv, mark);
    let result = f(board);
    board.place(mv, Cell::Empty);
    result
}

/// Score the position with `maximizing` telling whether X is to move.
///
/// A completed line is scored with [`depth_adjusted`]; a full board with
/// no line is a draw (`0`). Otherwise every empty cell is tried for the
/// side to move and the best score for that side is returned.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> i32 {
    let score = board.evaluate();
    if score != NEUTRAL_SCORE {
        return depth_adjusted(score, depth);
    }
    if !board.has_empty_cell() {
        return NEUTRAL_SCORE;
    }

    let mark = if maximizing { Cell::X } else { Cell::O };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in board.empty_cells() {
        let score = with_trial(board, mv, mark, |b| minimax(b, depth + 1, !maximizing));
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Choose X's move.
///
/// Returns `None` if the board has no empty cell.
pub fn find_best_move(board: &mut Board) -> Option<SearchResult> {
    best_move_for(board, Cell::X)
}

/// Choose the best move for `player`.
///
/// X takes the highest-scoring candidate and O the lowest. Candidates are
/// scanned in row-major order and the first one wins ties. Returns `None`
/// if there is no empty cell or `player` is [`Cell::Empty`].
pub fn best_move_for(board: &mut Board, player: Cell) -> Option<SearchResult> {
    if player == Cell::Empty {
        return None;
    }
    let maximizing = player == Cell::X;

    let mut best: Option<(Move, i32)> = None;
    let mut lowest = i32::MAX;
    let mut highest = i32::MIN;

    for mv in board.empty_cells() {
        let score = with_trial(board, mv, player, |b| minimax(b, 0, !maximizing));
        debug!(player = %player, mv = %mv, score, "root candidate");

        lowest = lowest.min(score);
        highest = highest.max(score);

        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let (best, score) = best?;
    let outlook = Outlook::classify(lowest, highest);
    debug!(player = %player, mv = %best, score, ?outlook, "best move");

    Some(SearchResult {
        best,
        score,
        outlook,
    })
}
