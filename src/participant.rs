//! Seated participants and their decision policies.

use crate::card::Card;
use crate::hand::{BLACKJACK, Hand};

/// Name the dealer is seated under.
pub const HOUSE_NAME: &str = "The House";

/// Who occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The interactive player.
    Human,
    /// A computer-controlled player.
    Bot,
    /// The House.
    Dealer,
}

/// What a participant wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// How a seat decides between hitting and staying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Ask the decision source.
    Interactive,
    /// Hit while the true hand value is at or below `stand_above`.
    Threshold {
        /// Highest value that still draws.
        stand_above: u8,
    },
}

impl Policy {
    /// Picks the policy for a role.
    #[must_use]
    pub const fn for_role(role: Role, stand_above: u8) -> Self {
        match role {
            Role::Human => Self::Interactive,
            Role::Bot | Role::Dealer => Self::Threshold { stand_above },
        }
    }

    /// Decides for an automatic policy. Interactive policies return `None`.
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> Option<Action> {
        match *self {
            Self::Interactive => None,
            Self::Threshold { stand_above } => {
                if hand.value(true) > stand_above {
                    Some(Action::Stay)
                } else {
                    Some(Action::Hit)
                }
            }
        }
    }
}

/// Where a participant is in its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    /// Has not acted yet this round.
    Waiting,
    /// Currently taking its turn.
    Acting,
    /// Done, hand kept.
    Standing,
    /// Went over 21. Never cleared.
    Busted,
}

/// A participant seated at the table for one round.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    role: Role,
    policy: Policy,
    hand: Hand,
    state: SeatState,
}

impl Participant {
    /// Seats a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role, stand_above: u8) -> Self {
        Self {
            name: name.into(),
            role,
            policy: Policy::for_role(role, stand_above),
            hand: Hand::new(),
            state: SeatState::Waiting,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the decision policy.
    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the hand for dealing.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the turn state.
    #[must_use]
    pub const fn state(&self) -> SeatState {
        self.state
    }

    /// Returns whether the participant has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        matches!(self.state, SeatState::Busted)
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// The name used in hit narration: `You` for the human.
    #[must_use]
    pub fn narrator_name(&self) -> &str {
        match self.role {
            Role::Human => "You",
            Role::Bot | Role::Dealer => &self.name,
        }
    }

    /// Moves to a new turn state. Busted is terminal.
    pub const fn set_state(&mut self, state: SeatState) {
        if !self.is_busted() {
            self.state = state;
        }
    }

    /// Adds a drawn card and marks the seat busted if the true value is over 21.
    ///
    /// Returns whether the card busted the hand.
    pub fn take(&mut self, card: Card) -> bool {
        self.hand.add(card);
        if self.hand.value(true) > BLACKJACK {
            self.state = SeatState::Busted;
            true
        } else {
            false
        }
    }

    /// Status line as seen by the table.
    #[must_use]
    pub fn status(&self) -> String {
        self.hand.status(&self.name, false)
    }
}
