//! A command-line blackjack game against the House and up to five computer
//! players.
//!
//! [`Round`] deals one round from a single shuffled deck, runs every seat's
//! turn and sorts the table into winners, busted players and everyone else.
//! It talks to the outside world only through a [`Console`]. [`Session`]
//! repeats rounds and keeps the tally, and [`Transcript`] is the console that
//! mirrors everything to a record file.
//!
//! # Example
//!
//! ```
//! use twentyone::{Round, ScriptedConsole, TableOptions};
//!
//! let mut round = Round::new("Ada", 1, &TableOptions::default(), 42).unwrap();
//! let mut console = ScriptedConsole::new(["n"]);
//! let outcome = round.play(&mut console).unwrap();
//! assert!(outcome.house_value > 0);
//! ```

pub mod card;
pub mod console;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;
pub mod transcript;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, ScriptedConsole};
pub use error::{RoundError, SessionError, ShoeError};
pub use hand::{BLACKJACK, Hand};
pub use options::{BOT_NAMES, TableOptions};
pub use participant::{Action, HOUSE_NAME, Participant, Policy, Role, SeatState};
pub use result::{ParticipantView, RoundOutcome};
pub use round::{Round, RoundState};
pub use session::{Session, Tally};
pub use shoe::Shoe;
pub use transcript::{DEFAULT_RECORD_PATH, Transcript};
