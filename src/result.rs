//! Round result types for the showdown.

use std::fmt::Write as _;

use crate::participant::{Participant, Role};

/// A participant's final standing, as reported at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    /// The participant's name.
    pub name: String,
    /// The seat's role.
    pub role: Role,
    /// True hand value.
    pub hand_value: u8,
    /// Status line with every card shown.
    pub display: String,
}

impl From<&Participant> for ParticipantView {
    fn from(seat: &Participant) -> Self {
        Self {
            name: seat.name().to_string(),
            role: seat.role(),
            hand_value: seat.hand().value(true),
            display: seat.hand().status(seat.name(), true),
        }
    }
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Whether the human is among the winners.
    pub human_won: bool,
    /// Whether the human left the round after busting.
    pub abandoned: bool,
    /// Participants who beat the House, or survived a House bust.
    pub winners: Vec<ParticipantView>,
    /// Participants who went over 21, the House included.
    pub busted: Vec<ParticipantView>,
    /// Everyone else except the House.
    pub others: Vec<ParticipantView>,
    /// The House's final hand value.
    pub house_value: u8,
}

fn write_section(out: &mut String, title: &str, seats: &[ParticipantView]) {
    let _ = writeln!(out, "=== {title} ===");
    if seats.is_empty() {
        out.push_str("None\n");
    }
    for seat in seats {
        let _ = writeln!(out, "{} (Hand: {})", seat.name, seat.hand_value);
    }
}

impl RoundOutcome {
    /// Whether the House went over 21.
    #[must_use]
    pub const fn house_busted(&self) -> bool {
        self.house_value > crate::hand::BLACKJACK
    }

    /// The results block shown at the end of a round.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("\n-------------------\n");
        out.push_str("----- RESULTS -----\n");
        out.push_str("-------------------\n\n");
        let _ = writeln!(
            out,
            "The House's hand was valued at {}!\n",
            self.house_value
        );

        write_section(&mut out, "Winners", &self.winners);
        out.push('\n');
        write_section(&mut out, "Busted Players", &self.busted);
        out.push('\n');
        write_section(&mut out, "Everyone Else", &self.others);
        out
    }
}
