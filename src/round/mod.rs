//! Round engine: dealing, turn sequencing and the showdown.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::RoundError;
use crate::options::TableOptions;
use crate::participant::{HOUSE_NAME, Participant, Role};
use crate::shoe::Shoe;

mod showdown;
pub mod state;
mod turns;

pub use state::RoundState;

/// Cards each participant starts with.
const STARTING_CARDS: usize = 2;

/// One round of blackjack between the human, the bots and the House.
///
/// The round owns its shoe and every seat. Seating is fixed at construction:
/// the human first, then the bots in the order they sat down, then the House.
#[derive(Debug, Clone)]
pub struct Round {
    shoe: Shoe,
    seats: Vec<Participant>,
    state: RoundState,
}

impl Round {
    /// Seats everyone and deals from a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the bot count is above the table
    /// limit, or the name pool cannot seat every bot.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Round, TableOptions};
    ///
    /// let round = Round::new("Ada", 2, &TableOptions::default(), 7).unwrap();
    /// assert_eq!(round.seats().len(), 4);
    /// assert_eq!(round.cards_remaining(), 52 - 8);
    /// ```
    pub fn new(
        human_name: &str,
        bots: u8,
        options: &TableOptions,
        seed: u64,
    ) -> Result<Self, RoundError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(true, &mut rng);
        Self::deal(human_name, bots, options, shoe, &mut rng)
    }

    /// Seats everyone and deals from the given shoe, front card first.
    ///
    /// `seed` only drives bot name selection.
    ///
    /// # Errors
    ///
    /// Same as [`Round::new`], plus [`RoundError::EmptyShoe`] if the shoe
    /// cannot cover the opening deal.
    pub fn with_shoe(
        human_name: &str,
        bots: u8,
        options: &TableOptions,
        shoe: Shoe,
        seed: u64,
    ) -> Result<Self, RoundError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::deal(human_name, bots, options, shoe, &mut rng)
    }

    fn validate(human_name: &str, bots: u8, options: &TableOptions) -> Result<(), RoundError> {
        if human_name.trim().is_empty() {
            return Err(RoundError::EmptyName);
        }

        if bots > options.max_bots {
            return Err(RoundError::InvalidBotCount {
                requested: bots,
                max: options.max_bots,
            });
        }

        let mut usable: Vec<&str> = options
            .bot_names
            .iter()
            .map(String::as_str)
            .filter(|name| *name != human_name && *name != HOUSE_NAME)
            .collect();
        usable.sort_unstable();
        usable.dedup();

        if usable.len() < usize::from(bots) {
            return Err(RoundError::NamePoolTooSmall {
                available: usable.len(),
                needed: usize::from(bots),
            });
        }

        Ok(())
    }

    /// Draws names until one is free. `validate` guarantees one exists.
    fn pick_bot_name(
        pool: &[String],
        seats: &[Participant],
        rng: &mut ChaCha8Rng,
    ) -> Option<String> {
        loop {
            let name = pool.choose(rng)?;
            let taken =
                name == HOUSE_NAME || seats.iter().any(|seat| seat.name() == name.as_str());
            if !taken {
                return Some(name.clone());
            }
        }
    }

    fn deal(
        human_name: &str,
        bots: u8,
        options: &TableOptions,
        mut shoe: Shoe,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, RoundError> {
        Self::validate(human_name, bots, options)?;

        let mut seats = Vec::with_capacity(usize::from(bots) + 2);

        let mut human = Participant::new(human_name, Role::Human, options.stand_above);
        for card in shoe.draw_many(STARTING_CARDS)? {
            human.hand_mut().add(card);
        }
        seats.push(human);

        for _ in 0..bots {
            let name = Self::pick_bot_name(&options.bot_names, &seats, rng).ok_or(
                RoundError::NamePoolTooSmall {
                    available: options.bot_names.len(),
                    needed: usize::from(bots),
                },
            )?;
            let mut bot = Participant::new(name, Role::Bot, options.stand_above);
            for card in shoe.draw_many(STARTING_CARDS)? {
                bot.hand_mut().add(card);
            }
            bot.hand_mut().hide_all();
            seats.push(bot);
        }

        let mut house = Participant::new(HOUSE_NAME, Role::Dealer, options.stand_above);
        for (index, mut card) in shoe.draw_many(STARTING_CARDS)?.into_iter().enumerate() {
            card.set_face_up(index != 0);
            house.hand_mut().add(card);
        }
        seats.push(house);

        for seat in &seats {
            debug!(
                seat = seat.name(),
                role = ?seat.role(),
                hand = %seat.hand().describe(true),
                "dealt"
            );
        }

        Ok(Self {
            shoe,
            seats,
            state: RoundState::Dealt,
        })
    }

    /// Returns every seat in turn order.
    #[must_use]
    pub fn seats(&self) -> &[Participant] {
        &self.seats
    }

    /// Returns the human's seat.
    #[must_use]
    pub fn human(&self) -> &Participant {
        &self.seats[0]
    }

    /// Returns the House's seat.
    #[must_use]
    pub fn dealer(&self) -> &Participant {
        &self.seats[self.seats.len() - 1]
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Number of seats that have not busted.
    fn active_count(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.is_busted()).count()
    }
}
