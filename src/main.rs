//! Oxo-Rust: noughts and crosses against a minimax engine.
//!
//! ## Usage
//!
//! - `oxo-rust` - Play a game against the computer
//! - `oxo-rust play --human-first` - Play, letting O move first
//! - `oxo-rust demo --opponent random --games 100` - Let the engine play automated games
//!
//! Set `RUST_LOG=oxo_rust=debug` to trace the search on stderr.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use oxo_rust::console::{Console, GameOptions};
use oxo_rust::opponent::{Opponent, PerfectOpponent, RandomOpponent, play_match};

/// Oxo-Rust: noughts and crosses against a perfect-play engine
#[derive(Parser)]
#[command(name = "oxo-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play O against the computer on the console
    Play {
        /// Move first instead of the computer
        #[arg(long)]
        human_first: bool,
        /// Do not print the search outlook before computer moves
        #[arg(long)]
        no_outlook: bool,
    },
    /// Let the engine play a series of games against an automated O
    Demo {
        /// Which automated O to play against
        #[arg(long, value_enum, default_value_t = OpponentKind::Random)]
        opponent: OpponentKind,
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OpponentKind {
    Perfect,
    Random,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            human_first,
            no_outlook,
        }) => run_game(GameOptions {
            show_outlook: !no_outlook,
            human_first,
        }),
        None => run_game(GameOptions::default()),
        Some(Commands::Demo {
            opponent,
            games,
            seed,
        }) => {
            run_demo(opponent, games, seed);
            Ok(())
        }
    }
}

fn run_game(options: GameOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), options);
    let outcome = console.run()?;
    println!("{outcome}");
    Ok(())
}

fn run_demo(kind: OpponentKind, games: u32, seed: u64) {
    println!("Engine (X) vs {kind:?} O");

    let mut opponent: Box<dyn Opponent> = match kind {
        OpponentKind::Perfect => Box::new(PerfectOpponent),
        OpponentKind::Random => Box::new(RandomOpponent::with_seed(seed)),
    };
    let tally = play_match(opponent.as_mut(), games);
    println!("{tally}");
}
