//! # Snapshot Module
//!
//! Serializable view of a session for inspection and logging. The envelope is
//! deliberately absent, so a snapshot can be shown to every participant.

use crate::{
    Card, CluedoError, CluedoResult, GameCompletionState, GameWorld, IdentityId, Occupant,
    Position, RoomId, SetupStage, TurnPhase, WeaponId,
};
use serde::{Deserialize, Serialize};

/// Contents of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub name: String,
    pub weapon: Option<WeaponId>,
    pub identities: Vec<IdentityId>,
}

/// State of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: usize,
    pub name: String,
    pub identity: IdentityId,
    pub human: bool,
    pub position: Option<Position>,
    pub room: Option<RoomId>,
    pub hand: Vec<Card>,
    pub out: bool,
    pub phase: Option<TurnPhase>,
}

/// Public state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub stage: SetupStage,
    pub turn_number: u64,
    pub current_turn: Option<usize>,
    pub completion: GameCompletionState,
    /// Rooms in shuffled order
    pub rooms: Vec<RoomSnapshot>,
    pub seats: Vec<SeatSnapshot>,
}

impl GameSnapshot {
    /// Parses a snapshot produced by [`GameWorld::snapshot_json`].
    pub fn from_json(json: &str) -> CluedoResult<Self> {
        serde_json::from_str(json).map_err(CluedoError::from)
    }

    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> CluedoResult<String> {
        serde_json::to_string_pretty(self).map_err(CluedoError::from)
    }
}

impl GameWorld {
    /// Captures the public state of the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{GameWorld, SetupConfig};
    ///
    /// let world = GameWorld::setup(&SetupConfig::new(42, ["Casey", "Linus"])).unwrap();
    /// let snapshot = world.snapshot();
    /// assert_eq!(snapshot.rooms.len(), 9);
    /// assert_eq!(snapshot.seats.len(), 6);
    /// assert_eq!(snapshot.seats.iter().filter(|seat| seat.human).count(), 2);
    /// ```
    pub fn snapshot(&self) -> GameSnapshot {
        let rooms = self
            .rooms
            .iter()
            .map(|room| RoomSnapshot {
                id: room.id,
                name: room.name.clone(),
                weapon: self.weapon_in(room.id),
                identities: self.identities_in(room.id),
            })
            .collect();

        let seats = self
            .occupants
            .iter()
            .enumerate()
            .map(|(seat, occupant)| match occupant {
                Occupant::Human(participant) => SeatSnapshot {
                    seat,
                    name: participant.name().to_string(),
                    identity: participant.identity(),
                    human: true,
                    position: participant.position(),
                    room: participant.room(),
                    hand: participant.hand().to_vec(),
                    out: participant.is_out(),
                    phase: Some(participant.phase()),
                },
                Occupant::Unassigned(placeholder) => SeatSnapshot {
                    seat,
                    name: occupant.name().to_string(),
                    identity: placeholder.identity,
                    human: false,
                    position: placeholder.position,
                    room: self.room_of_identity(placeholder.identity),
                    hand: Vec::new(),
                    out: false,
                    phase: None,
                },
            })
            .collect();

        GameSnapshot {
            seed: self.seed,
            stage: self.stage,
            turn_number: self.turn_number,
            current_turn: self.current_turn,
            completion: self.completion.clone(),
            rooms,
            seats,
        }
    }

    /// Saves the public state to JSON.
    pub fn snapshot_json(&self) -> CluedoResult<String> {
        self.snapshot().to_json()
    }
}
