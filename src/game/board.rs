//! # Board Module
//!
//! The spatial model: every cell of the grid is a corridor, a wall, a room
//! interior cell or a door. Doors are the only way between corridors and rooms.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::{Direction, MoveRejection, Position, RoomId, CELLAR, DOOR_SPECS};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pos` lies inside the rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && pos.x < self.x + self.width as i32
            && pos.y < self.y + self.height as i32
    }

    /// All cells of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Bounds { x, y, width, height } = *self;
        (y..y + height as i32)
            .flat_map(move |row| (x..x + width as i32).map(move |col| Position::new(col, row)))
    }
}

/// Identifier of a door; indexes [`DOOR_SPECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorId(pub usize);

/// Classification of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Corridor,
    Wall,
    /// Interior cell of a room
    Room(RoomId),
    /// Door cell on the edge of a room
    Door(DoorId),
}

/// A door linking one room cell to the corridor cell in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub id: DoorId,
    pub room: RoomId,
    pub position: Position,
    pub facing: Direction,
}

impl Door {
    /// The corridor cell a token passes through to use this door.
    pub fn outside(&self) -> Position {
        self.position.step(self.facing)
    }
}

/// What a single accepted step does to the mover's room membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Corridor to corridor
    Corridor,
    /// Corridor onto a door cell
    Enter { room: RoomId, door: DoorId },
    /// Between two cells of the same room
    Within { room: RoomId },
    /// Door cell out to its corridor cell
    Leave { room: RoomId, door: DoorId },
    /// Stairs jump between linked rooms
    Shortcut { from: RoomId, to: RoomId },
}

/// The fixed game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    cells: Vec<Cell>,
    doors: Vec<Door>,
}

impl Board {
    /// Builds the standard board from the catalogue.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{Board, Cell, Position};
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Corridor));
    /// assert_eq!(board.cell(Position::new(-1, 0)), None);
    /// ```
    pub fn standard() -> Self {
        let mut board = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![Cell::Corridor; (BOARD_WIDTH * BOARD_HEIGHT) as usize],
            doors: Vec::with_capacity(DOOR_SPECS.len()),
        };

        for pos in CELLAR.cells() {
            board.set_cell(pos, Cell::Wall);
        }

        for room in RoomId::all() {
            for pos in room.spec().bounds.cells() {
                board.set_cell(pos, Cell::Room(room));
            }
        }

        for (index, spec) in DOOR_SPECS.iter().enumerate() {
            let door = Door {
                id: DoorId(index),
                room: spec.room,
                position: spec.position,
                facing: spec.facing,
            };
            board.set_cell(door.position, Cell::Door(door.id));
            board.doors.push(door);
        }

        board
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = cell;
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    /// Returns the cell at `pos`, or None when out of bounds.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Room owning `pos`, counting door cells as part of their room.
    pub fn room_at(&self, pos: Position) -> Option<RoomId> {
        match self.cell(pos)? {
            Cell::Room(room) => Some(room),
            Cell::Door(door) => self.door(door).map(|door| door.room),
            Cell::Corridor | Cell::Wall => None,
        }
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    pub fn door_at(&self, pos: Position) -> Option<&Door> {
        match self.cell(pos)? {
            Cell::Door(id) => self.door(id),
            _ => None,
        }
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn doors_of(&self, room: RoomId) -> impl Iterator<Item = &Door> {
        self.doors.iter().filter(move |door| door.room == room)
    }

    /// Interior cells of `room` in row order, door cells excluded.
    pub fn interior_cells(&self, room: RoomId) -> impl Iterator<Item = Position> + '_ {
        room.spec()
            .bounds
            .cells()
            .filter(move |&pos| self.cell(pos) == Some(Cell::Room(room)))
    }

    /// Classifies a single orthogonal step from `from` to `to`.
    ///
    /// Only the layout is considered here; occupancy, trails and entry doors
    /// are checked by the movement validator.
    pub fn transition(&self, from: Position, to: Position) -> Result<Transition, MoveRejection> {
        if Direction::from_delta(to - from).is_none() {
            return Err(MoveRejection::NotAdjacent);
        }
        let target = self.cell(to).ok_or(MoveRejection::OutOfBounds)?;
        let origin = self.cell(from).ok_or(MoveRejection::OutOfBounds)?;

        match (origin, target) {
            (_, Cell::Wall) | (Cell::Wall, _) => Err(MoveRejection::Wall),
            (Cell::Corridor, Cell::Corridor) => Ok(Transition::Corridor),
            (Cell::Corridor, Cell::Door(id)) => match self.door(id) {
                Some(door) if door.outside() == from => Ok(Transition::Enter {
                    room: door.room,
                    door: id,
                }),
                _ => Err(MoveRejection::NoDoor),
            },
            (Cell::Corridor, Cell::Room(_)) => Err(MoveRejection::NoDoor),
            (Cell::Door(id), Cell::Corridor) => match self.door(id) {
                Some(door) if door.outside() == to => Ok(Transition::Leave {
                    room: door.room,
                    door: id,
                }),
                _ => Err(MoveRejection::NoDoor),
            },
            (Cell::Room(_), Cell::Corridor) => Err(MoveRejection::NoDoor),
            (_, _) => match (self.room_at(from), self.room_at(to)) {
                (Some(a), Some(b)) if a == b => Ok(Transition::Within { room: a }),
                _ => Err(MoveRejection::NoDoor),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BALL_ROOM, BILLIARD_ROOM, HALL, IDENTITY_SPECS, KITCHEN};

    #[test]
    fn test_bounds_contains_and_cells() {
        let bounds = Bounds::new(2, 3, 2, 2);
        assert!(bounds.contains(Position::new(2, 3)));
        assert!(bounds.contains(Position::new(3, 4)));
        assert!(!bounds.contains(Position::new(4, 4)));
        let cells: Vec<_> = bounds.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(2, 4),
                Position::new(3, 4)
            ]
        );
    }

    #[test]
    fn test_standard_board_classification() {
        let board = Board::standard();
        assert_eq!(board.cell(Position::new(2, 2)), Some(Cell::Room(KITCHEN)));
        assert_eq!(board.cell(Position::new(12, 12)), Some(Cell::Wall));
        assert_eq!(board.cell(Position::new(17, 8)), Some(Cell::Corridor));
        assert_eq!(board.room_at(Position::new(11, 18)), Some(HALL));
        assert!(board.door_at(Position::new(11, 18)).is_some());
        assert_eq!(board.cell(Position::new(25, 0)), None);
    }

    #[test]
    fn test_every_door_opens_onto_a_corridor() {
        let board = Board::standard();
        assert_eq!(board.doors().len(), DOOR_SPECS.len());
        for door in board.doors() {
            assert_eq!(board.cell(door.outside()), Some(Cell::Corridor), "{:?}", door);
            assert_eq!(board.cell(door.position), Some(Cell::Door(door.id)));
        }
    }

    #[test]
    fn test_every_room_has_a_door() {
        let board = Board::standard();
        for room in RoomId::all() {
            assert!(board.doors_of(room).count() >= 1, "{} has no door", room);
        }
        assert_eq!(board.doors_of(BALL_ROOM).count(), 4);
    }

    #[test]
    fn test_identity_starts_are_corridors() {
        let board = Board::standard();
        for spec in IDENTITY_SPECS {
            assert_eq!(board.cell(spec.start), Some(Cell::Corridor), "{}", spec.name);
        }
    }

    #[test]
    fn test_interior_cells_exclude_doors() {
        let board = Board::standard();
        let interior: Vec<_> = board.interior_cells(HALL).collect();
        assert_eq!(interior.len(), 6 * 7 - 3);
        assert!(!interior.contains(&Position::new(11, 18)));
    }

    #[test]
    fn test_transition_through_door() {
        let board = Board::standard();
        let door = *board.door_at(Position::new(11, 18)).unwrap();

        assert_eq!(
            board.transition(Position::new(11, 17), Position::new(11, 18)),
            Ok(Transition::Enter { room: HALL, door: door.id })
        );
        assert_eq!(
            board.transition(Position::new(11, 18), Position::new(11, 17)),
            Ok(Transition::Leave { room: HALL, door: door.id })
        );
        assert_eq!(
            board.transition(Position::new(11, 18), Position::new(11, 19)),
            Ok(Transition::Within { room: HALL })
        );
    }

    #[test]
    fn test_transition_rejects_walls_and_room_edges() {
        let board = Board::standard();
        // Corridor straight into a room interior cell
        assert_eq!(
            board.transition(Position::new(10, 17), Position::new(10, 18)),
            Err(MoveRejection::NoDoor)
        );
        // Corner door cell sideways onto a corridor it does not face
        assert_eq!(
            board.transition(Position::new(17, 21), Position::new(16, 21)),
            Err(MoveRejection::NoDoor)
        );
        assert_eq!(
            board.transition(Position::new(9, 19), Position::new(8, 19)),
            Err(MoveRejection::NoDoor)
        );
        assert_eq!(
            board.transition(Position::new(0, 0), Position::new(2, 0)),
            Err(MoveRejection::NotAdjacent)
        );
        assert_eq!(
            board.transition(Position::new(9, 12), Position::new(10, 12)),
            Err(MoveRejection::Wall)
        );
        assert_eq!(
            board.transition(Position::new(0, 0), Position::new(-1, 0)),
            Err(MoveRejection::OutOfBounds)
        );
        // Billiard Room edge cell without a door
        assert_eq!(board.room_at(Position::new(19, 8)), Some(BILLIARD_ROOM));
        assert_eq!(
            board.transition(Position::new(18, 8), Position::new(19, 8)),
            Err(MoveRejection::NoDoor)
        );
    }
}
