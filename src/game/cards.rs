//! # Cards Module
//!
//! Cards wrap catalogue entities one to one. The envelope holds the secret
//! solution: one card of each kind, chosen once during setup.

use crate::{IdentityId, RoomId, WeaponId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a card, in deal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Room,
    Weapon,
    Identity,
}

/// A single card. Equality and display follow the wrapped entity.
///
/// # Examples
///
/// ```
/// use cluedo::{Card, CardKind, KITCHEN};
///
/// let card = Card::Room(KITCHEN);
/// assert_eq!(card.kind(), CardKind::Room);
/// assert_eq!(card.to_string(), "Card: Kitchen");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Room(RoomId),
    Weapon(WeaponId),
    Identity(IdentityId),
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Room(_) => CardKind::Room,
            Card::Weapon(_) => CardKind::Weapon,
            Card::Identity(_) => CardKind::Identity,
        }
    }

    /// Name of the wrapped entity.
    pub fn name(&self) -> &'static str {
        match self {
            Card::Room(room) => room.name(),
            Card::Weapon(weapon) => weapon.name(),
            Card::Identity(identity) => identity.name(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card: {}", self.name())
    }
}

/// The hidden solution triple.
///
/// Fields are private so the envelope cannot change once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Envelope {
    room: RoomId,
    weapon: WeaponId,
    identity: IdentityId,
}

impl Envelope {
    pub fn new(room: RoomId, weapon: WeaponId, identity: IdentityId) -> Self {
        Self {
            room,
            weapon,
            identity,
        }
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn weapon(&self) -> WeaponId {
        self.weapon
    }

    pub fn identity(&self) -> IdentityId {
        self.identity
    }

    /// The three envelope cards as (room, weapon, identity).
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Room(self.room),
            Card::Weapon(self.weapon),
            Card::Identity(self.identity),
        ]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Whether an accusation names exactly this triple.
    pub fn matches(&self, room: RoomId, weapon: WeaponId, identity: IdentityId) -> bool {
        self.room == room && self.weapon == weapon && self.identity == identity
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with the {} in the {}", self.identity, self.weapon, self.room)
    }
}
