//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur while setting up or playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The human player has no name.
    #[error("player name is empty")]
    EmptyName,
    /// Bot count is outside the table limit.
    #[error("{requested} additional players requested, at most {max} allowed")]
    InvalidBotCount {
        /// Requested number of bots.
        requested: u8,
        /// Table limit.
        max: u8,
    },
    /// Not enough distinct bot names to seat everyone.
    #[error("bot name pool has {available} names, {needed} needed")]
    NamePoolTooSmall {
        /// Names in the pool.
        available: usize,
        /// Names needed to seat all bots without collisions.
        needed: usize,
    },
    /// The shoe ran out mid-round.
    #[error(transparent)]
    EmptyShoe(#[from] ShoeError),
    /// The decision source closed while waiting for the human.
    #[error("input closed while waiting for a decision")]
    InputClosed,
    /// The round has already been played.
    #[error("round already finished")]
    Finished,
}

/// Errors that end a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// The decision source closed at a session prompt.
    #[error("input closed")]
    InputClosed,
}
