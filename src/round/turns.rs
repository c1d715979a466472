use tracing::debug;

use crate::console::Console;
use crate::error::RoundError;
use crate::participant::{Action, Policy, SeatState};
use crate::result::RoundOutcome;

use super::state::TurnFlow;
use super::{Round, RoundState};

const HIT_PROMPT: &str = "\tWould you like to hit (y/n)? ";
const SPECTATE_PROMPT: &str = "\nWould you like to spectate the rest of this game (y/n)? ";

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

impl Round {
    /// Plays the round to completion and classifies every seat.
    ///
    /// Each seat gets one turn in seating order. The human answers through
    /// `console`; bots and the House follow the threshold rule. A bust by
    /// the House, or one that leaves a single seat standing, skips the
    /// remaining turns.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already played, the shoe runs out,
    /// or the console closes while the human is deciding.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError> {
        if self.state == RoundState::Finished {
            return Err(RoundError::Finished);
        }
        self.state = RoundState::Playing;

        console.line("--- House's Hand ---");
        console.line(&format!("\n\t{}\n", self.dealer().status()));

        let mut abandoned = false;
        for index in 0..self.seats.len() {
            if self.seats[index].is_busted() {
                continue;
            }

            let flow = match self.seats[index].policy() {
                Policy::Interactive => self.human_turn(index, console)?,
                Policy::Threshold { .. } => {
                    let flow = self.automatic_turn(index, console)?;
                    console.pause();
                    flow
                }
            };

            match flow {
                TurnFlow::Continue => {}
                TurnFlow::EndTurns => {
                    debug!(seat = self.seats[index].name(), "remaining turns skipped");
                    break;
                }
                TurnFlow::Abandon => {
                    abandoned = true;
                    break;
                }
            }
        }

        Ok(self.showdown(abandoned))
    }

    fn human_turn<C: Console + ?Sized>(
        &mut self,
        index: usize,
        console: &mut C,
    ) -> Result<TurnFlow, RoundError> {
        self.seats[index].set_state(SeatState::Acting);
        console.line("--- It is your turn. ---\n");
        console.line(&format!("\t{}\n", self.seats[index].status()));

        loop {
            let answer = console.prompt(HIT_PROMPT).ok_or(RoundError::InputClosed)?;
            match normalize(&answer).as_str() {
                "y" => {
                    if self.hit(index, console)? {
                        return Self::offer_spectate(console);
                    }
                }
                "n" => {
                    console.line("\tYou decided to stay.");
                    self.seats[index].set_state(SeatState::Standing);
                    return Ok(TurnFlow::Continue);
                }
                _ => console.line("\tInvalid input!\n"),
            }
        }
    }

    fn offer_spectate<C: Console + ?Sized>(console: &mut C) -> Result<TurnFlow, RoundError> {
        loop {
            let answer = console
                .prompt(SPECTATE_PROMPT)
                .ok_or(RoundError::InputClosed)?;
            match normalize(&answer).as_str() {
                "y" => return Ok(TurnFlow::Continue),
                "n" => return Ok(TurnFlow::Abandon),
                _ => {}
            }
        }
    }

    fn automatic_turn<C: Console + ?Sized>(
        &mut self,
        index: usize,
        console: &mut C,
    ) -> Result<TurnFlow, RoundError> {
        let name = self.seats[index].name().to_string();
        self.seats[index].set_state(SeatState::Acting);
        console.line(&format!("\n--- It is {name}'s turn. ---\n"));
        console.line(&format!("\t{}\n", self.seats[index].status()));

        loop {
            console.line(&format!("\t{name} is thinking..."));

            let seat = &self.seats[index];
            if seat.policy().decide(seat.hand()) != Some(Action::Hit) {
                console.line(&format!("\t{name} decided to stay."));
                self.seats[index].set_state(SeatState::Standing);
                return Ok(TurnFlow::Continue);
            }

            if self.hit(index, console)? {
                if self.seats[index].is_dealer() || self.active_count() <= 1 {
                    return Ok(TurnFlow::EndTurns);
                }
                return Ok(TurnFlow::Continue);
            }
        }
    }

    /// Deals one card to a seat and narrates it. Returns whether it busted.
    fn hit<C: Console + ?Sized>(
        &mut self,
        index: usize,
        console: &mut C,
    ) -> Result<bool, RoundError> {
        let card = self.shoe.draw()?;
        let seat = &mut self.seats[index];
        let who = seat.narrator_name().to_string();

        console.line(&format!("\t{who} decided to hit!"));
        let busted = seat.take(card);
        console.line(&format!(
            "\t{who} received the card: {}",
            card.display_name(false)
        ));
        console.line(&format!(
            "\tVisible Hand Value: {}\n",
            seat.hand().value(false)
        ));

        debug!(
            seat = seat.name(),
            card = %card,
            value = seat.hand().value(true),
            busted,
            "hit"
        );

        if busted {
            console.line(&format!("\t{who} busted!"));
        }
        Ok(busted)
    }
}
