//! # Participant Module
//!
//! Per-seat state. A seat is either a human [`Participant`] or a
//! [`Placeholder`] standing in for an identity nobody plays.
//!
//! This module owns the data only. Setup ([`crate::setup`]) and the movement
//! validator ([`crate::movement`]) are the only callers of the mutators.

use crate::config::{MAX_MOVES, MIN_MOVES, PLACEHOLDER_NAME};
use crate::{Card, CluedoError, CluedoResult, DoorId, IdentityId, Position, RoomId};
use serde::{Deserialize, Serialize};

/// Where a participant is within its own turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for a roll
    Idle,
    /// Budget set, stepping
    Moving,
    /// Budget spent, stopped voluntarily, or stuck
    Done,
}

/// A human player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    identity: IdentityId,
    hand: Vec<Card>,
    position: Option<Position>,
    /// Cells visited this turn, starting cell first
    trail: Vec<Position>,
    moves: u8,
    room: Option<RoomId>,
    /// Door used to enter the current room; None after a shortcut
    entry_door: Option<DoorId>,
    out: bool,
    phase: TurnPhase,
}

impl Participant {
    /// Creates a participant playing `identity`, with an empty hand and no
    /// token on the board yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{IdentityId, Participant, TurnPhase};
    ///
    /// let participant = Participant::new("Casey", IdentityId(0));
    /// assert_eq!(participant.name(), "Casey");
    /// assert_eq!(participant.phase(), TurnPhase::Idle);
    /// assert!(participant.hand().is_empty());
    /// ```
    pub fn new(name: impl Into<String>, identity: IdentityId) -> Self {
        Self {
            name: name.into(),
            identity,
            hand: Vec::new(),
            position: None,
            trail: Vec::new(),
            moves: 0,
            room: None,
            entry_door: None,
            out: false,
            phase: TurnPhase::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> IdentityId {
        self.identity
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Appends a card to the hand.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Puts the token on `pos` without touching the trail.
    pub(crate) fn place(&mut self, pos: Position) {
        self.position = Some(pos);
    }

    /// Records a step onto `pos` and appends it to the trail.
    pub(crate) fn set_pos(&mut self, pos: Position) {
        self.position = Some(pos);
        self.trail.push(pos);
    }

    /// Cells visited during the current turn.
    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    pub(crate) fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn number_of_moves(&self) -> u8 {
        self.moves
    }

    /// Sets the move budget for a turn.
    ///
    /// # Errors
    ///
    /// Returns [`CluedoError::Configuration`] unless `amount` is in 2..=12.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{IdentityId, Participant};
    ///
    /// let mut participant = Participant::new("Linus", IdentityId(1));
    /// assert!(participant.set_number_of_moves(7).is_ok());
    /// assert_eq!(participant.number_of_moves(), 7);
    /// assert!(participant.set_number_of_moves(13).is_err());
    /// assert_eq!(participant.number_of_moves(), 7);
    /// ```
    pub fn set_number_of_moves(&mut self, amount: u8) -> CluedoResult<()> {
        if !(MIN_MOVES..=MAX_MOVES).contains(&amount) {
            return Err(CluedoError::Configuration(format!(
                "a participant can only have {}-{} moves, got {}",
                MIN_MOVES, MAX_MOVES, amount
            )));
        }
        self.moves = amount;
        Ok(())
    }

    /// Spends one move.
    pub(crate) fn move_a_step(&mut self) {
        self.moves = self.moves.saturating_sub(1);
    }

    /// Forfeits whatever budget is left.
    pub(crate) fn clear_moves(&mut self) {
        self.moves = 0;
    }

    pub fn is_in_room(&self) -> bool {
        self.room.is_some()
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn entry_door(&self) -> Option<DoorId> {
        self.entry_door
    }

    pub(crate) fn enter_room(&mut self, room: RoomId, door: Option<DoorId>) {
        self.room = Some(room);
        self.entry_door = door;
    }

    pub(crate) fn leave_room(&mut self) {
        self.room = None;
        self.entry_door = None;
    }

    /// Whether the participant has been eliminated.
    pub fn is_out(&self) -> bool {
        self.out
    }

    pub(crate) fn set_out(&mut self, out: bool) {
        self.out = out;
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {}, Character Piece: {}", self.name, self.identity)
    }
}

/// An identity no human claimed. It has a token but never takes a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub identity: IdentityId,
    pub position: Option<Position>,
}

/// Whoever sits in a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Human(Participant),
    Unassigned(Placeholder),
}

impl Occupant {
    pub fn identity(&self) -> IdentityId {
        match self {
            Occupant::Human(participant) => participant.identity(),
            Occupant::Unassigned(placeholder) => placeholder.identity,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Occupant::Human(participant) => participant.position(),
            Occupant::Unassigned(placeholder) => placeholder.position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Occupant::Human(participant) => participant.name(),
            Occupant::Unassigned(_) => PLACEHOLDER_NAME,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Occupant::Human(_))
    }

    pub fn as_human(&self) -> Option<&Participant> {
        match self {
            Occupant::Human(participant) => Some(participant),
            Occupant::Unassigned(_) => None,
        }
    }

    pub(crate) fn as_human_mut(&mut self) -> Option<&mut Participant> {
        match self {
            Occupant::Human(participant) => Some(participant),
            Occupant::Unassigned(_) => None,
        }
    }

    /// The cell this token blocks, if any. Eliminated humans block nothing.
    pub fn blocking_position(&self) -> Option<Position> {
        match self {
            Occupant::Human(participant) if participant.is_out() => None,
            _ => self.position(),
        }
    }
}
