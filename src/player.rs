//! Players: who sits at each side of the board and, for computer players,
//! how they pick a move.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Stone, BOARD_SIZE};

/// Universal interface for everything that can take a seat.
pub trait Player {
    /// Display name
    fn name(&self) -> &str;

    /// Replace the display name
    fn set_name(&mut self, name: String);

    /// Propose a move given every stone played so far.
    ///
    /// Interactive players return `None`; their moves come from outside.
    /// A proposed move is not guaranteed to be legal.
    fn generate_move(&mut self, _history: &[Stone]) -> Option<Stone> {
        None
    }

    /// True when moves must be supplied by a person
    fn is_interactive(&self) -> bool;
}

/// A person entering moves at the console.
#[derive(Debug, Clone, Default)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

const RANDOM_NAMES: [&str; 8] = [
    "Bashful", "Doc", "Dopey", "Grumpy", "Happy", "Sleepy", "Sneezy", "Wheezy",
];

static RANDOM_PLAYER_SEQ: AtomicUsize = AtomicUsize::new(1);

/// A computer player that picks any cell uniformly at random.
///
/// Moves are drawn from the whole board without looking at which cells are
/// taken; the caller retries when `Game::place` rejects one.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Seeded player for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let seq = RANDOM_PLAYER_SEQ.fetch_add(1, Ordering::Relaxed);
        let base = RANDOM_NAMES[rng.random_range(0..RANDOM_NAMES.len())];
        Self {
            name: format!("{base} #{seq}"),
            rng,
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn generate_move(&mut self, history: &[Stone]) -> Option<Stone> {
        let size = BOARD_SIZE as i32;
        let row = self.rng.random_range(0..size);
        let col = self.rng.random_range(0..size);
        Some(Stone::new(row, col, Color::for_turn(history.len())))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
