//! # Catalogue Module
//!
//! The fixed identity pool: nine rooms, six weapons and six identities, plus
//! the board furniture tied to them (doors, shortcut pairs, start cells).
//!
//! Catalogue entries never change during a game. Everything mutable about them
//! (which weapon sits in which room, who is standing where) lives in
//! [`crate::GameWorld`] as relations keyed by the ids defined here.

use crate::{Bounds, Direction, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a room; indexes [`ROOM_SPECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// Identifier of a weapon; indexes [`WEAPON_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeaponId(pub usize);

/// Identifier of a character identity; indexes [`IDENTITY_SPECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityId(pub usize);

/// Static description of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    /// Unique display name
    pub name: &'static str,
    /// Rectangle covered by the room, doors included
    pub bounds: Bounds,
    /// Whether the room has stairs leading to its shortcut partner
    pub has_stairs: bool,
}

/// Static description of a character identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentitySpec {
    /// Unique display name
    pub name: &'static str,
    /// Corridor cell the token starts on when a human plays this identity
    pub start: Position,
}

/// Static description of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSpec {
    /// Room the door belongs to
    pub room: RoomId,
    /// Door cell on the edge of the room
    pub position: Position,
    /// Side of the room the door opens onto
    pub facing: Direction,
}

pub const KITCHEN: RoomId = RoomId(0);
pub const DINING_ROOM: RoomId = RoomId(1);
pub const BALL_ROOM: RoomId = RoomId(2);
pub const CONSERVATORY: RoomId = RoomId(3);
pub const BILLIARD_ROOM: RoomId = RoomId(4);
pub const LIBRARY: RoomId = RoomId(5);
pub const STUDY: RoomId = RoomId(6);
pub const HALL: RoomId = RoomId(7);
pub const LOUNGE: RoomId = RoomId(8);

/// The nine rooms in catalogue order.
pub const ROOM_SPECS: [RoomSpec; 9] = [
    RoomSpec {
        name: "Kitchen",
        bounds: Bounds::new(0, 1, 6, 6),
        has_stairs: true,
    },
    RoomSpec {
        name: "Dining Room",
        bounds: Bounds::new(0, 9, 8, 7),
        has_stairs: false,
    },
    RoomSpec {
        name: "Ball Room",
        bounds: Bounds::new(8, 1, 8, 7),
        has_stairs: false,
    },
    RoomSpec {
        name: "Conservatory",
        bounds: Bounds::new(18, 1, 7, 5),
        has_stairs: true,
    },
    RoomSpec {
        name: "Billiard Room",
        bounds: Bounds::new(19, 8, 6, 5),
        has_stairs: false,
    },
    RoomSpec {
        name: "Library",
        bounds: Bounds::new(18, 14, 7, 5),
        has_stairs: false,
    },
    RoomSpec {
        name: "Study",
        bounds: Bounds::new(17, 21, 8, 4),
        has_stairs: true,
    },
    RoomSpec {
        name: "Hall",
        bounds: Bounds::new(9, 18, 6, 7),
        has_stairs: false,
    },
    RoomSpec {
        name: "Lounge",
        bounds: Bounds::new(0, 19, 7, 6),
        has_stairs: true,
    },
];

/// The six weapons in catalogue order.
pub const WEAPON_NAMES: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Spanner",
];

/// The six identities in catalogue order.
pub const IDENTITY_SPECS: [IdentitySpec; 6] = [
    IdentitySpec {
        name: "Miss Scarlett",
        start: Position::new(16, 24),
    },
    IdentitySpec {
        name: "Colonel Mustard",
        start: Position::new(24, 7),
    },
    IdentitySpec {
        name: "Mrs. White",
        start: Position::new(9, 0),
    },
    IdentitySpec {
        name: "The Reverend Green",
        start: Position::new(14, 0),
    },
    IdentitySpec {
        name: "Mrs. Peacock",
        start: Position::new(0, 17),
    },
    IdentitySpec {
        name: "Professor Plum",
        start: Position::new(0, 7),
    },
];

/// Room pairs joined by stairs. The relation is symmetric.
pub const SHORTCUT_PAIRS: [(RoomId, RoomId); 2] = [(KITCHEN, STUDY), (CONSERVATORY, LOUNGE)];

/// Every door on the board.
pub const DOOR_SPECS: [DoorSpec; 17] = [
    DoorSpec {
        room: KITCHEN,
        position: Position::new(4, 6),
        facing: Direction::South,
    },
    DoorSpec {
        room: DINING_ROOM,
        position: Position::new(7, 12),
        facing: Direction::East,
    },
    DoorSpec {
        room: DINING_ROOM,
        position: Position::new(6, 15),
        facing: Direction::South,
    },
    DoorSpec {
        room: BALL_ROOM,
        position: Position::new(8, 5),
        facing: Direction::West,
    },
    DoorSpec {
        room: BALL_ROOM,
        position: Position::new(15, 5),
        facing: Direction::East,
    },
    DoorSpec {
        room: BALL_ROOM,
        position: Position::new(10, 7),
        facing: Direction::South,
    },
    DoorSpec {
        room: BALL_ROOM,
        position: Position::new(13, 7),
        facing: Direction::South,
    },
    DoorSpec {
        room: CONSERVATORY,
        position: Position::new(19, 5),
        facing: Direction::South,
    },
    DoorSpec {
        room: BILLIARD_ROOM,
        position: Position::new(19, 9),
        facing: Direction::West,
    },
    DoorSpec {
        room: BILLIARD_ROOM,
        position: Position::new(22, 12),
        facing: Direction::South,
    },
    DoorSpec {
        room: LIBRARY,
        position: Position::new(18, 16),
        facing: Direction::West,
    },
    DoorSpec {
        room: LIBRARY,
        position: Position::new(21, 14),
        facing: Direction::North,
    },
    DoorSpec {
        room: STUDY,
        position: Position::new(17, 21),
        facing: Direction::North,
    },
    DoorSpec {
        room: HALL,
        position: Position::new(11, 18),
        facing: Direction::North,
    },
    DoorSpec {
        room: HALL,
        position: Position::new(12, 18),
        facing: Direction::North,
    },
    DoorSpec {
        room: HALL,
        position: Position::new(14, 20),
        facing: Direction::East,
    },
    DoorSpec {
        room: LOUNGE,
        position: Position::new(6, 19),
        facing: Direction::North,
    },
];

/// Impassable block in the middle of the board.
pub const CELLAR: Bounds = Bounds::new(10, 10, 5, 6);

impl RoomId {
    /// All rooms in catalogue order.
    pub fn all() -> impl Iterator<Item = RoomId> {
        (0..ROOM_SPECS.len()).map(RoomId)
    }

    /// Static data for this room.
    pub fn spec(self) -> &'static RoomSpec {
        &ROOM_SPECS[self.0]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// The room reachable by stairs from this one, if any.
    pub fn shortcut(self) -> Option<RoomId> {
        SHORTCUT_PAIRS.iter().find_map(|&(a, b)| {
            if a == self {
                Some(b)
            } else if b == self {
                Some(a)
            } else {
                None
            }
        })
    }
}

impl WeaponId {
    /// All weapons in catalogue order.
    pub fn all() -> impl Iterator<Item = WeaponId> {
        (0..WEAPON_NAMES.len()).map(WeaponId)
    }

    pub fn name(self) -> &'static str {
        WEAPON_NAMES[self.0]
    }
}

impl IdentityId {
    /// All identities in catalogue order.
    pub fn all() -> impl Iterator<Item = IdentityId> {
        (0..IDENTITY_SPECS.len()).map(IdentityId)
    }

    /// Static data for this identity.
    pub fn spec(self) -> &'static IdentitySpec {
        &IDENTITY_SPECS[self.0]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Start cell of the identity's token.
    pub fn start(self) -> Position {
        self.spec().start
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable view of a room during a game.
///
/// The weapon and occupant links are not stored here; query them through
/// [`crate::GameWorld::weapon_in`] and [`crate::GameWorld::identities_in`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub bounds: Bounds,
    pub has_stairs: bool,
    /// Partner room reached by stairs
    pub shortcut: Option<RoomId>,
}

impl Room {
    /// Builds the room entity for a catalogue id.
    pub fn from_catalogue(id: RoomId) -> Self {
        let spec = id.spec();
        Self {
            id,
            name: spec.name.to_string(),
            bounds: spec.bounds,
            has_stairs: spec.has_stairs,
            shortcut: id.shortcut(),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Room: {}]", self.name)
    }
}
