//! Interactive console session
//!
//! The console owns its input and output handles; the game never reads or
//! writes anything itself.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::board_view::render_board;
use crate::error::ConsoleError;
use crate::game::{Game, GameStatus, PlaceResult};
use crate::player::{HumanPlayer, Player, RandomPlayer};
use crate::rules::winning_line;
use crate::Stone;

/// Console session settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleConfig {
    /// Seed for random players and the first-move coin flip
    pub seed: Option<u64>,
}

/// Console front end over any line-based input and writable output
pub struct Console<R, W> {
    input: R,
    output: W,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { input, output, rng }
    }

    /// Play games until the user declines a rematch.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            let mut game = self.setup()?;
            self.print_board(&game)?;

            let mut result = None;
            while !game.is_over() {
                result = Some(self.play(&mut game)?);
            }

            if let Some(result) = result {
                writeln!(self.output)?;
                writeln!(self.output, "{}", result.message())?;
            }
            self.print_winning_line(&game)?;

            if !self.play_again()? {
                break;
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Greet, seat two players and start a game.
    pub fn setup(&mut self) -> Result<Game, ConsoleError> {
        writeln!(self.output, "Welcome to Gomoku")?;
        writeln!(self.output, "=================")?;

        let player1 = self.get_player(1)?;
        let player2 = self.get_player(2)?;
        let game = Game::with_rng(player1, player2, &mut self.rng);

        writeln!(self.output)?;
        writeln!(self.output, "(Randomizing)")?;
        writeln!(self.output)?;
        writeln!(self.output, "{} goes first.", game.current().name())?;
        Ok(game)
    }

    /// Ask what kind of player takes a seat.
    pub fn get_player(&mut self, number: usize) -> Result<Box<dyn Player>, ConsoleError> {
        loop {
            writeln!(self.output, "Player {number} is:")?;
            writeln!(self.output, "1. Human")?;
            writeln!(self.output, "2. Random Player")?;
            let choice = self.read_line("Select [1-2]: ")?;

            match choice.trim().parse::<u32>() {
                Ok(1) => {
                    let prompt = format!("Player {number}, enter your name: ");
                    let name = self.read_required_string(&prompt)?;
                    return Ok(Box::new(HumanPlayer::new(name.trim())));
                }
                Ok(2) => {
                    let player = RandomPlayer::seeded(self.rng.random());
                    writeln!(self.output, "Player {number} is {}.", player.name())?;
                    return Ok(Box::new(player));
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    /// Take one turn: collect a stone from the current player and submit it.
    ///
    /// A failed placement prints its message and leaves the turn unchanged;
    /// the caller simply calls `play` again.
    pub fn play(&mut self, game: &mut Game) -> Result<PlaceResult, ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}'s turn.", game.current().name())?;

        let stone = match game.generate_move() {
            Some(stone) => {
                writeln!(
                    self.output,
                    "{} chooses row {}, column {}.",
                    game.current().name(),
                    stone.row() + 1,
                    stone.col() + 1
                )?;
                stone
            }
            None => {
                let row = self.read_int("Enter a row: ")?;
                let col = self.read_int("Enter a column: ")?;
                Stone::from_one_based(row, col, game.current_color())
            }
        };

        let result = game.place(stone);
        if !result.is_success() {
            writeln!(self.output, "{}", result.message())?;
        }
        self.print_board(game)?;
        Ok(result)
    }

    /// Print the current board
    pub fn print_board(&mut self, game: &Game) -> Result<(), ConsoleError> {
        write!(self.output, "{}", render_board(game.stones()))?;
        Ok(())
    }

    fn print_winning_line(&mut self, game: &Game) -> Result<(), ConsoleError> {
        if let (GameStatus::Won(color), Some(last)) = (game.status(), game.board().last()) {
            if let Some(line) = winning_line(game.board(), last) {
                if let (Some(first), Some(end)) = (line.first(), line.last()) {
                    writeln!(
                        self.output,
                        "{color} made {} in a row from ({}, {}) to ({}, {}).",
                        line.len(),
                        first.row() + 1,
                        first.col() + 1,
                        end.row() + 1,
                        end.col() + 1
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Ask whether to start another game
    pub fn play_again(&mut self) -> Result<bool, ConsoleError> {
        writeln!(self.output)?;
        let answer = self.read_required_string("Play Again? [y/n]: ")?;
        writeln!(self.output)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Prompt until a line with something other than whitespace is entered
    pub fn read_required_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }

    /// Prompt until a whole number is entered
    fn read_int(&mut self, prompt: &str) -> Result<i32, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(input = %line, "not a number");
                    writeln!(self.output, "Please enter a whole number.")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            info!("input closed");
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Hand back the output handle
    pub fn into_output(self) -> W {
        self.output
    }
}
