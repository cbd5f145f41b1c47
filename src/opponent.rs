//! Automated O players and engine-vs-opponent matches.
//!
//! Used by the `demo` command to show that the engine never loses:
//! against a perfect O every game is drawn, against a random O X either
//! wins or draws.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Cell, GameStatus, Move};
use crate::search::{best_move_for, find_best_move};

/// Something that can choose moves for O.
pub trait Opponent {
    /// Pick an empty cell for O, or `None` if the board is full.
    fn choose(&mut self, board: &mut Board) -> Option<Move>;
}

/// O played by the same exhaustive search as the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerfectOpponent;

impl Opponent for PerfectOpponent {
    fn choose(&mut self, board: &mut Board) -> Option<Move> {
        best_move_for(board, Cell::O).map(|result| result.best)
    }
}

/// O choosing uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: fastrand::Rng,
}

impl RandomOpponent {
    /// Create a random opponent with a fixed seed for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, board: &mut Board) -> Option<Move> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }
}

/// Play one game with the engine as X moving first. Returns the final status.
pub fn play_game(opponent: &mut dyn Opponent) -> GameStatus {
    let mut board = Board::new();
    let mut mark = Cell::X;

    loop {
        let mv = match mark {
            Cell::X => find_best_move(&mut board).map(|result| result.best),
            _ => opponent.choose(&mut board),
        };
        let Some(mv) = mv else {
            return board.status();
        };
        debug!(mark = %mark, mv = %mv, "move");
        board.place(mv, mark);

        let status = board.status();
        if status.is_over() {
            return status;
        }
        mark = mark.opponent();
    }
}

/// Win/draw/loss counts from the engine's point of view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWins => self.x_wins += 1,
            GameStatus::OWins => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, drawn {}",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Play `games` games against `opponent` and tally the results.
pub fn play_match(opponent: &mut dyn Opponent, games: u32) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(play_game(opponent));
    }
    info!(%tally, "match finished");
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_opponent_picks_empty_cell() {
        let mut board: Board = "XOX/O.X/OXO".parse().unwrap();
        let mut opponent = RandomOpponent::with_seed(7);
        assert_eq!(opponent.choose(&mut board), Some(Move::new(1, 1).unwrap()));

        let mut full: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(opponent.choose(&mut full), None);
    }

    #[test]
    fn test_random_opponent_is_reproducible() {
        let mut board = Board::new();
        let picks_a: Vec<_> = {
            let mut o = RandomOpponent::with_seed(42);
            (0..10).map(|_| o.choose(&mut board)).collect()
        };
        let picks_b: Vec<_> = {
            let mut o = RandomOpponent::with_seed(42);
            (0..10).map(|_| o.choose(&mut board)).collect()
        };
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::default();
        tally.record(GameStatus::XWins);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::InProgress);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "3 games: X won 1, O won 0, drawn 2");
    }
}
