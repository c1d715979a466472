//! Hand representation and valuation.

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Sums the counted cards, aces at 11.
fn evaluate_cards(cards: &[Card], ignore_facing: bool) -> u8 {
    cards
        .iter()
        .filter(|card| card.is_face_up() || ignore_facing)
        .fold(0u8, |value, card| value.saturating_add(card.game_value()))
}

/// The cards a participant holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Value of the hand.
    ///
    /// With `ignore_facing` every card counts (the holder's view); without it
    /// only face-up cards count (what the rest of the table sees). A total
    /// over 21 loses 10 once if the hand holds an ace anywhere, face up or not.
    #[must_use]
    pub fn value(&self, ignore_facing: bool) -> u8 {
        let value = evaluate_cards(&self.cards, ignore_facing);
        if value > BLACKJACK && self.has_ace() {
            value - 10
        } else {
            value
        }
    }

    /// Returns whether the hand holds an ace, face up or not.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Comma-separated card names.
    #[must_use]
    pub fn describe(&self, ignore_facing: bool) -> String {
        self.cards
            .iter()
            .map(|card| card.display_name(ignore_facing))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line summary of the hand, e.g.
    /// `Kai's hand: Face down Card, Nine of Clubs (Visible Value: 9)`.
    #[must_use]
    pub fn status(&self, holder: &str, ignore_facing: bool) -> String {
        let value = self.value(ignore_facing);
        let shown = if value == 0 {
            String::from("Unknown")
        } else {
            value.to_string()
        };
        format!(
            "{holder}'s hand: {} (Visible Value: {shown})",
            self.describe(ignore_facing)
        )
    }

    /// Turns every card face down.
    pub fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.set_face_up(false);
        }
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.set_face_up(true);
        }
    }

    /// Turns the first card face up. Returns whether it was face down.
    pub fn reveal_hole(&mut self) -> bool {
        match self.cards.first_mut() {
            Some(card) if !card.is_face_up() => {
                card.flip();
                true
            }
            _ => false,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
