//! The multi-round session: prompts, rounds and the running tally.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::{RoundError, SessionError};
use crate::options::TableOptions;
use crate::round::Round;

const BANNER: [&str; 6] = [
    "############################################",
    "#                                          #",
    "#       Welcome to BlackJack!              #",
    "#           created by Benjamin Wong       #",
    "#                                          #",
    "############################################",
];

/// Games played and won during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds played.
    pub games: u32,
    /// Rounds the human won.
    pub wins: u32,
}

impl Tally {
    /// Whole-number win percentage, rounded down. Zero before any game.
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.games == 0 {
            return 0;
        }
        (u64::from(self.wins) * 100 / u64::from(self.games)) as u32
    }

    /// Closing remark for a win rate.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        match self.win_rate() {
            90.. => "You are Incredible!!!",
            50..=89 => "Nice!",
            25..=49 => "Better Luck Next Time!",
            10..=24 => "We Can't All Be Winners.",
            _ => "May you find better luck elsewhere.",
        }
    }
}

/// Drives repeated rounds for one human player.
pub struct Session<C> {
    console: C,
    options: TableOptions,
    rng: ChaCha8Rng,
    tally: Tally,
}

impl<C: Console> Session<C> {
    /// Creates a session. `seed` drives every round's shuffle and bot names.
    #[must_use]
    pub fn new(console: C, options: TableOptions, seed: u64) -> Self {
        Self {
            console,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            tally: Tally::default(),
        }
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the session and returns its console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        self.console
            .prompt(question)
            .ok_or(SessionError::InputClosed)
    }

    /// Asks a y/n question until answered. Returns `true` for yes.
    fn confirm(&mut self, question: &str, complaint: &str) -> Result<bool, SessionError> {
        loop {
            match self.ask(question)?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.console.line(complaint),
            }
        }
    }

    fn ask_name(&mut self) -> Result<String, SessionError> {
        loop {
            let name = self.ask("What is your name? ")?;
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.console.line("Please input a valid player name!\n");
        }
    }

    fn ask_bot_count(&mut self) -> Result<u8, SessionError> {
        let max = self.options.max_bots;
        loop {
            let answer = self.ask("How many additional AI players do you want? ")?;
            match answer.trim().parse::<i64>() {
                Err(err) => self
                    .console
                    .line(&format!("Error: {err} Please try again!\n")),
                Ok(count) if count < 0 => self.console.line("Please input a number 0 or more!"),
                Ok(count) if count > i64::from(max) => self
                    .console
                    .line(&format!("Maximum of {max} additional players allowed!\n")),
                Ok(count) => return Ok(count as u8),
            }
        }
    }

    fn play_game(&mut self, name: &str) -> Result<(), SessionError> {
        let game = self.tally.games + 1;
        self.console.line("\n=====================================");
        self.console.line(&format!("   === GAME {game} ==="));
        self.console.line("=====================================");
        self.console.line(&format!("\nWelcome, {name}!\n"));
        self.console
            .line("The game defaults to TWO players, You and the House.");

        let bots = self.ask_bot_count()?;
        self.console.line(&format!(
            "Starting a game with {bots} additional players...\n"
        ));

        let seed: u64 = self.rng.random();
        debug!(game, bots, seed, "starting round");
        let mut round = Round::new(name, bots, &self.options, seed)?;
        let outcome = round.play(&mut self.console)?;

        self.tally.games += 1;
        if outcome.human_won {
            self.tally.wins += 1;
        }
        if !outcome.abandoned {
            self.console.emit(&outcome.report());
        }
        Ok(())
    }

    fn farewell(&mut self, name: &str) {
        let tally = self.tally;
        self.console.line(&format!(
            "\nToday {name}, you won {} out of {} games.",
            tally.wins, tally.games
        ));
        self.console
            .emit(&format!("Thats a {}% win rate. ", tally.win_rate()));
        self.console.line(tally.verdict());
        self.console.line("Goodbye!");
        info!(games = tally.games, wins = tally.wins, "session finished");
    }

    /// Runs the session until the player declines another game.
    ///
    /// Input closing at any prompt ends the session early; the tally so far
    /// is still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails for a reason other than closed input.
    pub fn run(&mut self) -> Result<Tally, SessionError> {
        for line in BANNER {
            self.console.line(line);
        }
        self.console.line("");

        match self.run_games() {
            Ok(()) | Err(SessionError::InputClosed | SessionError::Round(RoundError::InputClosed)) => {
                Ok(self.tally)
            }
            Err(err) => Err(err),
        }
    }

    fn run_games(&mut self) -> Result<(), SessionError> {
        if !self.confirm(
            "Would you like to Play (y/n)? ",
            "Please input a valid response (y/n)!\n",
        )? {
            self.console.line("Goodbye!");
            return Ok(());
        }

        let name = self.ask_name()?;

        loop {
            self.play_game(&name)?;
            if !self.confirm(
                "\nWould you like to play another (y/n)? ",
                "Invalid response. Please input (y/n)!",
            )? {
                break;
            }
        }

        self.farewell(&name);
        Ok(())
    }
}
