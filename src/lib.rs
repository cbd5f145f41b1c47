//! Oxo-Rust: noughts and crosses against a perfect-play engine.
//!
//! The computer plays X and picks its moves with an exhaustive minimax
//! search; a human plays O from the console.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines and scores
//! - [`board`] - Cells, moves and the 3x3 board
//! - [`search`] - Minimax move selection
//! - [`console`] - Interactive text game loop
//! - [`opponent`] - Automated O players for engine matches
//! - [`error`] - Board access and parse errors
//!
//! ## Example
//!
//! ```
//! use oxo_rust::board::{Board, Move};
//! use oxo_rust::search::find_best_move;
//!
//! // X to play with two in the top row
//! let mut board: Board = "XX./OO./...".parse().unwrap();
//!
//! let result = find_best_move(&mut board).unwrap();
//! assert_eq!(result.best, Move::new(0, 2).unwrap());
//! println!("Best move: {} ({})", result.best, result.outlook);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod opponent;
pub mod search;
