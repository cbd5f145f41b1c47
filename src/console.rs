//! Text console game loop.
//!
//! The computer plays X and the human plays O. Moves are typed in a
//! letter-plus-digit notation (`A0` is the top-left cell, `C2` the
//! bottom-right). The loop is generic over its input and output so it
//! can be driven by stdin/stdout or by in-memory buffers.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use oxo_rust::console::{Console, GameOptions, GameOutcome};
//!
//! let input = Cursor::new("B0\nC0\nA1\n");
//! let mut output = Vec::new();
//! let outcome = Console::new(input, &mut output, GameOptions::default()).run().unwrap();
//! assert_eq!(outcome, GameOutcome::ComputerWon);
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::board::{Board, Cell, GameStatus, Move};
use crate::search::find_best_move;

const PROMPT: &str = "Position for O (letter + digit): ";
const RETRY: &str = "Invalid input or cell already occupied. Try again!";

/// How a console game ended, from the human's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    ComputerWon,
    HumanWon,
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GameOutcome::ComputerWon => "You lost!",
            GameOutcome::HumanWon => "You won!",
            GameOutcome::Draw => "Draw!",
        };
        f.write_str(message)
    }
}

/// Console game settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Print the search outlook before each computer move.
    pub show_outlook: bool,
    /// Let the human (O) make the first move.
    pub human_first: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            show_outlook: true,
            human_first: false,
        }
    }
}

/// One interactive game over a reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    options: GameOptions,
    board: Board,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: GameOptions) -> Self {
        Self {
            input,
            output,
            options,
            board: Board::new(),
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until someone wins or the board is full.
    ///
    /// Fails if the input ends before the game is over or on I/O errors.
    pub fn run(&mut self) -> Result<GameOutcome> {
        let mut human_turn = self.options.human_first;

        loop {
            if human_turn {
                let mv = self.read_human_move()?;
                self.board.place(mv, Cell::O);
            } else {
                self.play_computer_move()?;
            }
            writeln!(self.output, "{}", self.board)?;

            let outcome = match self.board.status() {
                GameStatus::InProgress => None,
                GameStatus::XWins => Some(GameOutcome::ComputerWon),
                GameStatus::OWins => Some(GameOutcome::HumanWon),
                GameStatus::Draw => Some(GameOutcome::Draw),
            };
            if let Some(outcome) = outcome {
                info!(?outcome, "game over");
                return Ok(outcome);
            }

            human_turn = !human_turn;
        }
    }

    fn play_computer_move(&mut self) -> Result<()> {
        writeln!(self.output, "My move:")?;
        let result = find_best_move(&mut self.board).context("no empty cell left for X")?;
        if self.options.show_outlook {
            writeln!(self.output, "{}", result.outlook)?;
        }
        debug!(mv = %result.best, score = result.score, "computer move");
        self.board.place(result.best, Cell::X);
        Ok(())
    }

    /// Prompt until the human enters a legal move.
    fn read_human_move(&mut self) -> Result<Move> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before the game finished");
            }

            match Move::parse(&line) {
                Ok(mv) if self.board.is_legal(mv) => return Ok(mv),
                Ok(mv) => debug!(mv = %mv, "cell already occupied"),
                Err(e) => debug!(error = %e, "unparseable move"),
            }
            writeln!(self.output, "{RETRY}")?;
        }
    }
}
