use tracing::info;

use crate::hand::BLACKJACK;
use crate::participant::Role;
use crate::result::{ParticipantView, RoundOutcome};

use super::{Round, RoundState};

impl Round {
    /// Reveals the House's hole card and sorts every seat into winners,
    /// busted and everyone else.
    ///
    /// A seat that has not busted wins with a higher true value than the
    /// House, or whenever the House is over 21 (except the House itself).
    /// A standing House appears in no list.
    pub(super) fn showdown(&mut self, abandoned: bool) -> RoundOutcome {
        let last = self.seats.len() - 1;
        self.seats[last].hand_mut().reveal_hole();

        let house_value = self.dealer().hand().value(true);
        let house_busted = house_value > BLACKJACK;

        let mut winners = Vec::new();
        let mut busted = Vec::new();
        let mut others = Vec::new();

        for seat in &self.seats {
            let value = seat.hand().value(true);
            if seat.is_busted() {
                busted.push(ParticipantView::from(seat));
            } else if value > house_value || (house_busted && !seat.is_dealer()) {
                winners.push(ParticipantView::from(seat));
            } else if !seat.is_dealer() {
                others.push(ParticipantView::from(seat));
            }
        }

        let human_won = !abandoned && winners.iter().any(|view| view.role == Role::Human);
        self.state = RoundState::Finished;

        info!(
            house_value,
            winners = winners.len(),
            busted = busted.len(),
            human_won,
            abandoned,
            "round finished"
        );

        RoundOutcome {
            human_won,
            abandoned,
            winners,
            busted,
            others,
            house_value,
        }
    }
}
