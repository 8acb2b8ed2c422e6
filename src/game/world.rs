//! # World Module
//!
//! [`GameWorld`] is the single aggregate owning one game session: the board,
//! the shuffled catalogue lists, the card pools, the envelope, every seat and
//! the random source all setup and dice draws come from.
//!
//! Links between entities (which weapon lies in which room, which identity is
//! standing where) are kept as id-keyed maps in [`Relations`] rather than as
//! references stored on the entities themselves.

use crate::{
    Board, Card, Envelope, GameCompletionState, IdentityId, Occupant, Participant, Position,
    RandomSource, Room, RoomId, WeaponId,
};
use std::collections::{BTreeMap, BTreeSet};

/// How far setup has progressed. Each step must run exactly once, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum SetupStage {
    /// Catalogue shuffled, weapons placed, envelope sealed
    Initialized,
    /// Seats filled with humans and placeholders
    CharactersDistributed,
    /// Hands dealt to humans
    CardsDealt,
    /// Placeholders placed in rooms; turns may start
    Ready,
}

/// Two-way room links for weapons and identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    weapon_rooms: BTreeMap<WeaponId, RoomId>,
    room_weapons: BTreeMap<RoomId, WeaponId>,
    identity_rooms: BTreeMap<IdentityId, RoomId>,
    room_identities: BTreeMap<RoomId, BTreeSet<IdentityId>>,
}

impl Relations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `weapon` in `room`, replacing any previous link of either.
    pub fn place_weapon(&mut self, weapon: WeaponId, room: RoomId) {
        if let Some(previous) = self.weapon_rooms.insert(weapon, room) {
            self.room_weapons.remove(&previous);
        }
        if let Some(displaced) = self.room_weapons.insert(room, weapon) {
            if displaced != weapon {
                self.weapon_rooms.remove(&displaced);
            }
        }
    }

    pub fn weapon_in(&self, room: RoomId) -> Option<WeaponId> {
        self.room_weapons.get(&room).copied()
    }

    pub fn room_of_weapon(&self, weapon: WeaponId) -> Option<RoomId> {
        self.weapon_rooms.get(&weapon).copied()
    }

    /// Records `identity` as standing in `room`.
    pub fn place_identity(&mut self, identity: IdentityId, room: RoomId) {
        self.remove_identity(identity);
        self.identity_rooms.insert(identity, room);
        self.room_identities.entry(room).or_default().insert(identity);
    }

    /// Clears the room link of `identity`, if it has one.
    pub fn remove_identity(&mut self, identity: IdentityId) {
        if let Some(room) = self.identity_rooms.remove(&identity) {
            if let Some(inside) = self.room_identities.get_mut(&room) {
                inside.remove(&identity);
            }
        }
    }

    pub fn room_of_identity(&self, identity: IdentityId) -> Option<RoomId> {
        self.identity_rooms.get(&identity).copied()
    }

    /// Identities currently in `room`, ordered by id.
    pub fn identities_in(&self, room: RoomId) -> Vec<IdentityId> {
        self.room_identities
            .get(&room)
            .map(|inside| inside.iter().copied().collect())
            .unwrap_or_default()
    }
}

/// One game session.
#[derive(Debug)]
pub struct GameWorld {
    pub(crate) seed: u64,
    pub(crate) board: Board,
    pub(crate) rooms: Vec<Room>,
    pub(crate) weapons: Vec<WeaponId>,
    pub(crate) identities: Vec<IdentityId>,
    /// Combined shuffled pool with the envelope removed
    pub(crate) cards: Vec<Card>,
    pub(crate) room_cards: Vec<Card>,
    pub(crate) weapon_cards: Vec<Card>,
    pub(crate) identity_cards: Vec<Card>,
    pub(crate) envelope: Envelope,
    pub(crate) occupants: Vec<Occupant>,
    pub(crate) relations: Relations,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) stage: SetupStage,
    pub(crate) turn_number: u64,
    pub(crate) current_turn: Option<usize>,
    pub(crate) completion: GameCompletionState,
}

impl GameWorld {
    /// Seed the session was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stage(&self) -> SetupStage {
        self.stage
    }

    /// Rooms in their current shuffled order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Weapons in their current shuffled order.
    pub fn weapons(&self) -> &[WeaponId] {
        &self.weapons
    }

    /// Identities in their current shuffled order.
    pub fn identities(&self) -> &[IdentityId] {
        &self.identities
    }

    /// Room cards left after the envelope was sealed.
    pub fn room_cards(&self) -> &[Card] {
        &self.room_cards
    }

    pub fn weapon_cards(&self) -> &[Card] {
        &self.weapon_cards
    }

    pub fn identity_cards(&self) -> &[Card] {
        &self.identity_cards
    }

    /// All non-envelope cards in shuffled order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The secret solution. Meant for end-of-game verification only.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// All seats; humans first, then placeholders.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    pub fn occupant(&self, seat: usize) -> Option<&Occupant> {
        self.occupants.get(seat)
    }

    /// The human in `seat`, if that seat is played.
    pub fn participant(&self, seat: usize) -> Option<&Participant> {
        self.occupant(seat).and_then(Occupant::as_human)
    }

    pub(crate) fn participant_mut(&mut self, seat: usize) -> Option<&mut Participant> {
        self.occupants.get_mut(seat).and_then(Occupant::as_human_mut)
    }

    /// Human participants in seat order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.occupants.iter().filter_map(Occupant::as_human)
    }

    pub fn human_count(&self) -> usize {
        self.occupants.iter().filter(|occupant| occupant.is_human()).count()
    }

    pub fn weapon_in(&self, room: RoomId) -> Option<WeaponId> {
        self.relations.weapon_in(room)
    }

    pub fn room_of_weapon(&self, weapon: WeaponId) -> Option<RoomId> {
        self.relations.room_of_weapon(weapon)
    }

    /// Identities whose tokens are inside `room`.
    pub fn identities_in(&self, room: RoomId) -> Vec<IdentityId> {
        self.relations.identities_in(room)
    }

    pub fn room_of_identity(&self, identity: IdentityId) -> Option<RoomId> {
        self.relations.room_of_identity(identity)
    }

    /// Seat whose token blocks `pos`, if any.
    pub fn occupant_at(&self, pos: Position) -> Option<usize> {
        self.occupants
            .iter()
            .position(|occupant| occupant.blocking_position() == Some(pos))
    }

    /// First interior cell of `room`, in row order, no token blocks.
    pub fn free_cell_in(&self, room: RoomId) -> Option<Position> {
        self.board
            .interior_cells(room)
            .find(|&pos| self.occupant_at(pos).is_none())
    }

    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    /// Seat whose turn it is.
    pub fn current_turn(&self) -> Option<usize> {
        self.current_turn
    }

    pub fn completion(&self) -> &GameCompletionState {
        &self.completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HALL, KITCHEN, LOUNGE};

    #[test]
    fn test_weapon_relation_is_two_way() {
        let mut relations = Relations::new();
        relations.place_weapon(WeaponId(0), KITCHEN);
        assert_eq!(relations.weapon_in(KITCHEN), Some(WeaponId(0)));
        assert_eq!(relations.room_of_weapon(WeaponId(0)), Some(KITCHEN));

        relations.place_weapon(WeaponId(0), HALL);
        assert_eq!(relations.weapon_in(KITCHEN), None);
        assert_eq!(relations.weapon_in(HALL), Some(WeaponId(0)));
    }

    #[test]
    fn test_weapon_relation_displaces_previous_occupant() {
        let mut relations = Relations::new();
        relations.place_weapon(WeaponId(0), KITCHEN);
        relations.place_weapon(WeaponId(1), KITCHEN);
        assert_eq!(relations.weapon_in(KITCHEN), Some(WeaponId(1)));
        assert_eq!(relations.room_of_weapon(WeaponId(0)), None);
    }

    #[test]
    fn test_identity_relation_moves_between_rooms() {
        let mut relations = Relations::new();
        relations.place_identity(IdentityId(2), LOUNGE);
        relations.place_identity(IdentityId(4), LOUNGE);
        assert_eq!(relations.identities_in(LOUNGE), vec![IdentityId(2), IdentityId(4)]);

        relations.place_identity(IdentityId(2), HALL);
        assert_eq!(relations.identities_in(LOUNGE), vec![IdentityId(4)]);
        assert_eq!(relations.room_of_identity(IdentityId(2)), Some(HALL));

        relations.remove_identity(IdentityId(2));
        assert!(relations.identities_in(HALL).is_empty());
        assert_eq!(relations.room_of_identity(IdentityId(2)), None);
    }
}
