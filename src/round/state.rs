//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Cards are dealt, nobody has acted.
    Dealt,
    /// Participants are taking their turns.
    Playing,
    /// The showdown is done and results are final.
    Finished,
}

/// How a turn leaves the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnFlow {
    /// Move on to the next seat.
    Continue,
    /// Skip every remaining seat and go to the showdown.
    EndTurns,
    /// The human quit after busting.
    Abandon,
}
