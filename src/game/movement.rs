//! # Movement Module
//!
//! Per-step validation for a participant's token. A step is legal when the
//! board allows the transition, the destination is not blocked by another
//! living token, the cell has not been visited earlier in the same turn, and
//! it does not leave a room through the door used to enter it.

use crate::{
    CluedoError, CluedoResult, Direction, GameWorld, Participant, Position, RoomId, Transition,
    TurnPhase,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a step was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Destination is off the board
    OutOfBounds,
    /// Destination is not one orthogonal step away
    NotAdjacent,
    /// Destination or origin is impassable
    Wall,
    /// Crossing a room edge anywhere but through a door
    NoDoor,
    /// Leaving through the door used to enter this room
    EntryDoor,
    /// Another living token is there
    Occupied,
    /// Cell was already visited this turn
    Retrace,
    /// Move budget is spent
    NoMovesLeft,
    /// Not standing in a room with stairs
    NoShortcut,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::OutOfBounds => "position is outside the board",
            MoveRejection::NotAdjacent => "position is not a single step away",
            MoveRejection::Wall => "position is blocked by a wall",
            MoveRejection::NoDoor => "rooms can only be entered or left through a door",
            MoveRejection::EntryDoor => "cannot leave through the door used to enter",
            MoveRejection::Occupied => "position is occupied",
            MoveRejection::Retrace => "position was already visited this turn",
            MoveRejection::NoMovesLeft => "no moves left this turn",
            MoveRejection::NoShortcut => "no stairs to take from here",
        };
        f.write_str(text)
    }
}

/// One unit of movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Move to the orthogonal neighbour
    Walk(Direction),
    /// Take the stairs to the linked room
    Shortcut,
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        Step::Walk(direction)
    }
}

/// Legal next steps from the current cell.
///
/// `candidates` follows [`Direction::cardinal`] order; refused cells are None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSteps {
    pub candidates: [Option<Position>; 4],
    /// Landing cell of the stairs, when they can be taken
    pub shortcut: Option<Position>,
}

impl LegalSteps {
    pub fn get(&self, direction: Direction) -> Option<Position> {
        self.candidates[direction.index()]
    }

    /// Whether no step at all is possible.
    pub fn is_empty(&self) -> bool {
        self.shortcut.is_none() && self.candidates.iter().all(Option::is_none)
    }

    /// Every reachable cell, walking candidates first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.candidates.iter().flatten().copied().chain(self.shortcut)
    }
}

/// Result of an accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub position: Position,
    pub remaining_moves: u8,
    pub transition: Transition,
    pub legal_next_steps: LegalSteps,
}

impl GameWorld {
    /// Whether the participant in `seat` could step onto `pos` right now.
    ///
    /// Placeholders, seats without a token and eliminated participants can
    /// never move, so the answer is false for them.
    pub fn valid_pos(&self, seat: usize, pos: Position) -> bool {
        match self.participant(seat) {
            Some(participant) if !participant.is_out() => participant
                .position()
                .map(|from| self.check_walk(seat, participant, from, pos).is_ok())
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Computes the four orthogonal candidates plus the stairs, if any.
    ///
    /// Empty unless the seat is mid-move with budget left.
    pub fn legal_steps(&self, seat: usize) -> LegalSteps {
        let participant = match self.participant(seat) {
            Some(participant)
                if !participant.is_out()
                    && participant.phase() == TurnPhase::Moving
                    && participant.number_of_moves() > 0 =>
            {
                participant
            }
            _ => return LegalSteps::default(),
        };
        let from = match participant.position() {
            Some(from) => from,
            None => return LegalSteps::default(),
        };

        let mut steps = LegalSteps::default();
        for (slot, to) in from.cardinal_adjacent_positions().into_iter().enumerate() {
            if self.check_walk(seat, participant, from, to).is_ok() {
                steps.candidates[slot] = Some(to);
            }
        }
        steps.shortcut = self
            .shortcut_target(seat, participant)
            .ok()
            .map(|(_, _, to)| to);
        steps
    }

    /// Takes one step for the participant whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`CluedoError::IllegalMove`] when the step is refused; nothing changes.
    /// - [`CluedoError::InvalidState`] when it is not this seat's turn, the
    ///   participant is eliminated, or the turn has not begun.
    pub fn move_player(&mut self, seat: usize, step: impl Into<Step>) -> CluedoResult<MoveOutcome> {
        let step = step.into();
        let participant = self.expect_turn(seat)?;
        if participant.phase() != TurnPhase::Moving {
            return Err(CluedoError::InvalidState(format!(
                "{} is not moving (phase {:?})",
                participant.name(),
                participant.phase()
            )));
        }
        let from = participant.position().ok_or_else(|| {
            CluedoError::InvalidState(format!("{} has no token on the board", participant.name()))
        })?;

        let planned = if participant.number_of_moves() == 0 {
            Err((from, MoveRejection::NoMovesLeft))
        } else {
            match step {
                Step::Walk(direction) => {
                    let to = from.step(direction);
                    self.check_walk(seat, participant, from, to)
                        .map(|transition| (to, transition))
                        .map_err(|reason| (to, reason))
                }
                Step::Shortcut => self
                    .shortcut_target(seat, participant)
                    .map(|(origin, target, to)| {
                        (to, Transition::Shortcut { from: origin, to: target })
                    })
                    .map_err(|reason| (from, reason)),
            }
        };

        let (to, transition) = match planned {
            Ok(accepted) => accepted,
            Err((to, reason)) => {
                warn!("{} cannot move to {}: {}", participant.name(), to, reason);
                return Err(CluedoError::IllegalMove { to, reason });
            }
        };

        self.apply_step(seat, to, transition)?;

        let legal_next_steps = self.legal_steps(seat);
        let participant = self.seat_participant_mut(seat)?;
        let remaining_moves = participant.number_of_moves();
        if remaining_moves == 0 || legal_next_steps.is_empty() {
            participant.set_phase(TurnPhase::Done);
        }
        debug!(
            "{} moved to {} ({:?}), {} moves left",
            participant.name(),
            to,
            transition,
            remaining_moves
        );

        Ok(MoveOutcome {
            position: to,
            remaining_moves,
            transition,
            legal_next_steps,
        })
    }

    /// Ends movement early; the rest of the budget is forfeited.
    pub fn stop_moving(&mut self, seat: usize) -> CluedoResult<()> {
        self.expect_turn(seat)?;
        let participant = self.seat_participant_mut(seat)?;
        if participant.phase() == TurnPhase::Moving {
            participant.clear_moves();
            participant.set_phase(TurnPhase::Done);
        }
        Ok(())
    }

    fn apply_step(&mut self, seat: usize, to: Position, transition: Transition) -> CluedoResult<()> {
        let participant = self.seat_participant_mut(seat)?;
        participant.set_pos(to);
        participant.move_a_step();
        match transition {
            Transition::Enter { room, door } => participant.enter_room(room, Some(door)),
            Transition::Shortcut { to: room, .. } => participant.enter_room(room, None),
            Transition::Leave { .. } => participant.leave_room(),
            Transition::Corridor | Transition::Within { .. } => {}
        }

        let identity = participant.identity();
        match transition {
            Transition::Enter { room, .. } | Transition::Shortcut { to: room, .. } => {
                self.relations.place_identity(identity, room);
            }
            Transition::Leave { .. } => self.relations.remove_identity(identity),
            Transition::Corridor | Transition::Within { .. } => {}
        }
        Ok(())
    }

    pub(crate) fn seat_participant_mut(&mut self, seat: usize) -> CluedoResult<&mut Participant> {
        self.participant_mut(seat)
            .ok_or_else(|| CluedoError::InvalidState(format!("seat {} is not played", seat)))
    }

    /// Validates a walk from `from` to `to` for `participant`.
    fn check_walk(
        &self,
        seat: usize,
        participant: &Participant,
        from: Position,
        to: Position,
    ) -> Result<Transition, MoveRejection> {
        let transition = self.board.transition(from, to)?;
        if let Transition::Leave { door, .. } = transition {
            if participant.entry_door() == Some(door) {
                return Err(MoveRejection::EntryDoor);
            }
        }
        self.check_destination(seat, participant, to)?;
        Ok(transition)
    }

    fn check_destination(
        &self,
        seat: usize,
        participant: &Participant,
        to: Position,
    ) -> Result<(), MoveRejection> {
        match self.occupant_at(to) {
            Some(other) if other != seat => return Err(MoveRejection::Occupied),
            _ => {}
        }
        if participant.trail().contains(&to) {
            return Err(MoveRejection::Retrace);
        }
        Ok(())
    }

    /// Finds where the stairs would land: the first interior cell of the
    /// linked room that passes the destination checks.
    fn shortcut_target(
        &self,
        seat: usize,
        participant: &Participant,
    ) -> Result<(RoomId, RoomId, Position), MoveRejection> {
        let origin = participant.room().ok_or(MoveRejection::NoShortcut)?;
        let target = origin.shortcut().ok_or(MoveRejection::NoShortcut)?;
        self.board
            .interior_cells(target)
            .find(|&to| self.check_destination(seat, participant, to).is_ok())
            .map(|to| (origin, target, to))
            .ok_or(MoveRejection::Occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DoorId, SetupConfig, HALL, KITCHEN, STUDY};

    const HALL_APPROACH: Position = Position::new(11, 17);

    /// Six humans so no placeholder sits in a room; seat 0 starts at `pos`
    /// and holds the turn.
    fn world_with_first_seat_at(pos: Position) -> GameWorld {
        let names = ["Casey", "Linus", "Ada", "Grace", "Alan", "Barbara"];
        let mut world = GameWorld::setup(&SetupConfig::new(42, names)).unwrap();
        world.participant_mut(0).unwrap().place(pos);
        assert_eq!(world.advance_turn().unwrap(), 0);
        world
    }

    fn rejection(result: CluedoResult<MoveOutcome>) -> MoveRejection {
        match result {
            Err(CluedoError::IllegalMove { reason, .. }) => reason,
            other => panic!("expected an illegal move, got {:?}", other),
        }
    }

    #[test]
    fn test_entering_hall_records_entry_door() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 6).unwrap();

        let outcome = world.move_player(0, Direction::South).unwrap();
        assert_eq!(outcome.position, Position::new(11, 18));
        assert_eq!(outcome.remaining_moves, 5);
        assert_eq!(
            outcome.transition,
            Transition::Enter {
                room: HALL,
                door: DoorId(13)
            }
        );

        let participant = world.participant(0).unwrap();
        assert_eq!(participant.room(), Some(HALL));
        assert_eq!(participant.entry_door(), Some(DoorId(13)));
        assert!(world.identities_in(HALL).contains(&participant.identity()));

        let steps = outcome.legal_next_steps;
        assert_eq!(steps.get(Direction::East), Some(Position::new(12, 18)));
        assert_eq!(steps.get(Direction::West), Some(Position::new(10, 18)));
        assert_eq!(steps.get(Direction::South), Some(Position::new(11, 19)));
        assert_eq!(steps.get(Direction::North), None);
        assert_eq!(steps.shortcut, None);
    }

    #[test]
    fn test_entry_door_stays_closed_for_the_whole_visit() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 6).unwrap();
        world.move_player(0, Direction::South).unwrap();

        let refused = world.move_player(0, Direction::North);
        assert_eq!(rejection(refused), MoveRejection::EntryDoor);
        assert_eq!(world.participant(0).unwrap().number_of_moves(), 5);

        // Go round the table back to seat 0
        for _ in 0..6 {
            world.advance_turn().unwrap();
        }
        assert_eq!(world.current_turn(), Some(0));
        world.begin_turn(0, 3).unwrap();
        assert!(!world.valid_pos(0, HALL_APPROACH));
        let refused = world.move_player(0, Direction::North);
        assert_eq!(rejection(refused), MoveRejection::EntryDoor);
    }

    #[test]
    fn test_leaving_through_another_door() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 6).unwrap();
        world.move_player(0, Direction::South).unwrap();

        let lateral = world.move_player(0, Direction::East).unwrap();
        assert_eq!(lateral.transition, Transition::Within { room: HALL });

        let out = world.move_player(0, Direction::North).unwrap();
        assert_eq!(out.position, Position::new(12, 17));
        assert_eq!(
            out.transition,
            Transition::Leave {
                room: HALL,
                door: DoorId(14)
            }
        );
        let participant = world.participant(0).unwrap();
        assert_eq!(participant.room(), None);
        assert_eq!(participant.entry_door(), None);
        assert!(!world.identities_in(HALL).contains(&participant.identity()));
    }

    #[test]
    fn test_retrace_is_refused() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 6).unwrap();
        world.move_player(0, Direction::East).unwrap();

        let refused = world.move_player(0, Direction::West);
        assert_eq!(rejection(refused), MoveRejection::Retrace);
        assert_eq!(
            world.participant(0).unwrap().position(),
            Some(Position::new(12, 17))
        );
    }

    #[test]
    fn test_living_tokens_block_and_eliminated_do_not() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.participant_mut(1).unwrap().place(Position::new(11, 16));
        world.begin_turn(0, 6).unwrap();

        let refused = world.move_player(0, Direction::North);
        assert_eq!(rejection(refused), MoveRejection::Occupied);

        world.participant_mut(1).unwrap().set_out(true);
        assert!(world.valid_pos(0, Position::new(11, 16)));
        assert!(world.move_player(0, Direction::North).is_ok());
    }

    #[test]
    fn test_walls_and_room_edges() {
        let mut world = world_with_first_seat_at(Position::new(12, 16));
        world.begin_turn(0, 6).unwrap();
        // Cellar sits directly north
        assert_eq!(
            rejection(world.move_player(0, Direction::North)),
            MoveRejection::Wall
        );

        world.end_turn(0).unwrap();
        world.participant_mut(0).unwrap().place(Position::new(10, 17));
        world.begin_turn(0, 6).unwrap();
        assert_eq!(
            rejection(world.move_player(0, Direction::South)),
            MoveRejection::NoDoor
        );
    }

    #[test]
    fn test_budget_runs_out() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 2).unwrap();
        let first = world.move_player(0, Direction::East).unwrap();
        assert_eq!(first.remaining_moves, 1);
        let second = world.move_player(0, Direction::East).unwrap();
        assert_eq!(second.remaining_moves, 0);
        assert!(second.legal_next_steps.is_empty());
        assert!(world.legal_steps(0).is_empty());

        let participant = world.participant(0).unwrap();
        assert_eq!(participant.phase(), TurnPhase::Done);
        assert_eq!(participant.trail().len(), 3);
        assert!(matches!(
            world.move_player(0, Direction::East),
            Err(CluedoError::InvalidState(_))
        ));
    }

    #[test]
    fn test_stop_moving_forfeits_budget() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 8).unwrap();
        world.move_player(0, Direction::East).unwrap();
        world.stop_moving(0).unwrap();
        assert!(world.legal_steps(0).is_empty());
        let participant = world.participant(0).unwrap();
        assert_eq!(participant.number_of_moves(), 0);
        assert_eq!(participant.phase(), TurnPhase::Done);
    }

    #[test]
    fn test_moves_outside_turn_are_refused() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        // Turn not begun
        assert!(matches!(
            world.move_player(0, Direction::East),
            Err(CluedoError::InvalidState(_))
        ));
        // Not this seat's turn
        assert!(matches!(
            world.move_player(1, Direction::East),
            Err(CluedoError::InvalidState(_))
        ));
        assert!(world.stop_moving(1).is_err());
    }

    #[test]
    fn test_shortcut_moves_between_linked_rooms() {
        let mut world = world_with_first_seat_at(Position::new(2, 3));
        let identity = {
            let participant = world.participant_mut(0).unwrap();
            participant.enter_room(KITCHEN, Some(DoorId(0)));
            participant.identity()
        };
        world.relations.place_identity(identity, KITCHEN);

        let steps = world.begin_turn(0, 4).unwrap();
        assert_eq!(steps.shortcut, Some(Position::new(18, 21)));

        let outcome = world.move_player(0, Step::Shortcut).unwrap();
        assert_eq!(outcome.position, Position::new(18, 21));
        assert_eq!(outcome.remaining_moves, 3);
        assert_eq!(
            outcome.transition,
            Transition::Shortcut {
                from: KITCHEN,
                to: STUDY
            }
        );

        let participant = world.participant(0).unwrap();
        assert_eq!(participant.room(), Some(STUDY));
        assert_eq!(participant.entry_door(), None);
        assert!(!world.identities_in(KITCHEN).contains(&identity));
        assert!(world.identities_in(STUDY).contains(&identity));
    }

    #[test]
    fn test_shortcut_needs_stairs() {
        let mut world = world_with_first_seat_at(HALL_APPROACH);
        world.begin_turn(0, 4).unwrap();
        assert_eq!(
            rejection(world.move_player(0, Step::Shortcut)),
            MoveRejection::NoShortcut
        );
        world.move_player(0, Direction::South).unwrap();
        assert_eq!(
            rejection(world.move_player(0, Step::Shortcut)),
            MoveRejection::NoShortcut
        );
    }

    #[test]
    fn test_placeholders_never_move() {
        let mut world = GameWorld::setup(&SetupConfig::new(42, ["Casey", "Linus"])).unwrap();
        assert!(world.legal_steps(3).is_empty());
        assert!(!world.valid_pos(3, Position::new(5, 7)));
        world.advance_turn().unwrap();
        assert!(world.move_player(3, Direction::East).is_err());
    }
}
