//! # Turns Module
//!
//! Turn scheduling, dice and accusations. Exactly one seat acts at a time;
//! eliminated participants and placeholders are skipped.

use crate::{
    CluedoError, CluedoResult, GameWorld, IdentityId, LegalSteps, Participant, RoomId,
    SetupStage, TurnPhase, WeaponId,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Whether the game is still being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// A participant named the envelope correctly
    Solved { winner: usize },
    /// Every participant was eliminated by wrong accusations
    NoWinner,
}

impl GameWorld {
    /// Rolls two six-sided dice from the session source.
    pub fn roll_moves(&mut self) -> u8 {
        let roll = self.rng.roll_die(6) + self.rng.roll_die(6);
        debug!("Rolled {}", roll);
        roll
    }

    /// Seats of participants still in the game.
    pub fn active_seats(&self) -> Vec<usize> {
        self.occupants
            .iter()
            .enumerate()
            .filter_map(|(seat, occupant)| match occupant.as_human() {
                Some(participant) if !participant.is_out() => Some(seat),
                _ => None,
            })
            .collect()
    }

    /// Ends the current turn and hands the next one to the following active
    /// seat, wrapping around. Returns that seat.
    ///
    /// # Errors
    ///
    /// [`CluedoError::InvalidState`] before setup is complete, after the game
    /// has ended, or when nobody is left to play.
    pub fn advance_turn(&mut self) -> CluedoResult<usize> {
        self.expect_playing()?;
        if let Some(current) = self.current_turn {
            self.finish_turn(current);
        }

        let active = self.active_seats();
        let next = match self.current_turn {
            Some(current) => active
                .iter()
                .copied()
                .find(|&seat| seat > current)
                .or_else(|| active.first().copied()),
            None => active.first().copied(),
        }
        .ok_or_else(|| CluedoError::InvalidState("no active participants left".to_string()))?;

        self.current_turn = Some(next);
        self.turn_number += 1;
        debug!("Turn {} goes to seat {}", self.turn_number, next);
        Ok(next)
    }

    /// Starts movement for `seat` with a budget of `moves`.
    ///
    /// The trail is reset to the current cell. Returns the legal first steps;
    /// if there are none the participant is immediately done.
    ///
    /// # Errors
    ///
    /// [`CluedoError::Configuration`] when `moves` is outside 2..=12 (state is
    /// unchanged), [`CluedoError::InvalidState`] when it is not this seat's
    /// turn or movement already started.
    pub fn begin_turn(&mut self, seat: usize, moves: u8) -> CluedoResult<LegalSteps> {
        let participant = self.expect_turn(seat)?;
        if participant.phase() != TurnPhase::Idle {
            return Err(CluedoError::InvalidState(format!(
                "{} has already moved this turn",
                participant.name()
            )));
        }
        let start = participant.position().ok_or_else(|| {
            CluedoError::InvalidState(format!("{} has no token on the board", participant.name()))
        })?;

        let participant = self.seat_participant_mut(seat)?;
        participant.set_number_of_moves(moves)?;
        participant.clear_trail();
        participant.set_pos(start);
        participant.set_phase(TurnPhase::Moving);

        let steps = self.legal_steps(seat);
        if steps.is_empty() {
            self.seat_participant_mut(seat)?.set_phase(TurnPhase::Done);
        }
        Ok(steps)
    }

    /// Clears the trail and budget of `seat` and returns it to idle.
    pub fn end_turn(&mut self, seat: usize) -> CluedoResult<()> {
        self.expect_turn(seat)?;
        self.finish_turn(seat);
        Ok(())
    }

    /// Checks an accusation against the envelope.
    ///
    /// A correct accusation wins the game. A wrong one eliminates the accuser,
    /// whose token then stops blocking cells; if nobody is left the game ends
    /// without a winner.
    pub fn accuse(
        &mut self,
        seat: usize,
        room: RoomId,
        weapon: WeaponId,
        identity: IdentityId,
    ) -> CluedoResult<bool> {
        self.expect_turn(seat)?;
        let correct = self.envelope.matches(room, weapon, identity);
        self.finish_turn(seat);

        let participant = self.seat_participant_mut(seat)?;
        if correct {
            info!(
                "{} solved it: {} with the {} in the {}",
                participant.name(),
                identity,
                weapon,
                room
            );
            self.completion = GameCompletionState::Solved { winner: seat };
        } else {
            info!("{} accused wrongly and is out", participant.name());
            participant.set_out(true);
            if self.active_seats().is_empty() {
                info!("Every participant is out; the game has no winner");
                self.completion = GameCompletionState::NoWinner;
            }
        }
        Ok(correct)
    }

    /// Whether the game has finished.
    pub fn is_game_ended(&self) -> bool {
        self.completion != GameCompletionState::Playing
    }

    fn finish_turn(&mut self, seat: usize) {
        if let Some(participant) = self.participant_mut(seat) {
            participant.clear_trail();
            participant.clear_moves();
            participant.set_phase(TurnPhase::Idle);
        }
    }

    fn expect_playing(&self) -> CluedoResult<()> {
        if self.stage != SetupStage::Ready {
            return Err(CluedoError::InvalidState(format!(
                "setup is not complete (stage {:?})",
                self.stage
            )));
        }
        if self.is_game_ended() {
            return Err(CluedoError::InvalidState("the game is over".to_string()));
        }
        Ok(())
    }

    /// Checks that `seat` is a living participant whose turn it is.
    pub(crate) fn expect_turn(&self, seat: usize) -> CluedoResult<&Participant> {
        self.expect_playing()?;
        let participant = self
            .participant(seat)
            .ok_or_else(|| CluedoError::InvalidState(format!("seat {} is not played", seat)))?;
        if participant.is_out() {
            return Err(CluedoError::InvalidState(format!(
                "{} is out of the game",
                participant.name()
            )));
        }
        if self.current_turn != Some(seat) {
            return Err(CluedoError::InvalidState(format!(
                "it is not {}'s turn",
                participant.name()
            )));
        }
        Ok(participant)
    }
}
