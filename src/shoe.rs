//! The single-deck shoe a round is dealt from.

use std::collections::VecDeque;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Swaps every position with a different, uniformly chosen position.
///
/// This is not Fisher-Yates: forcing each step to move its card skews the
/// permutation distribution. Slices shorter than two are left alone.
fn swap_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    if len < 2 {
        return;
    }

    for i in 0..len {
        let mut target = i;
        while target == i {
            target = rng.random_range(0..len);
        }
        items.swap(i, target);
    }
}

/// An ordered stack of cards, drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates a full deck in canonical order: suit by suit, Ace through King.
    #[must_use]
    pub fn new(face_up: bool) -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit, face_up));
            }
        }

        Self { cards }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(face_up: bool, rng: &mut R) -> Self {
        let mut shoe = Self::new(face_up);
        shoe.shuffle(rng);
        shoe
    }

    /// Creates a shoe that deals the given cards in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        swap_shuffle(self.cards.make_contiguous(), rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop_front().ok_or(ShoeError::Empty)
    }

    /// Draws `count` cards in order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] without drawing anything if fewer than
    /// `count` cards remain.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, ShoeError> {
        if self.cards.len() < count {
            return Err(ShoeError::Empty);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
