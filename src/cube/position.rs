//! Grid positions, and the named slots of a 3×3×3 cube.
//!
//! The predicates and the slot enumerations here assume a 3-cube; [`Cube`]
//! itself works with positions of any size.

use crate::prelude::*;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

pub const CENTER_FRONT: Position = Position::new(1, 1, 0);
pub const CENTER_REAR: Position = Position::new(1, 1, 2);
pub const CENTER_TOP: Position = Position::new(1, 2, 1);
pub const CENTER_BOTTOM: Position = Position::new(1, 0, 1);
pub const CENTER_LEFT: Position = Position::new(0, 1, 1);
pub const CENTER_RIGHT: Position = Position::new(2, 1, 1);

pub const EDGE_FRONT_TOP: Position = Position::new(1, 2, 0);
pub const EDGE_FRONT_BOTTOM: Position = Position::new(1, 0, 0);
pub const EDGE_FRONT_LEFT: Position = Position::new(0, 1, 0);
pub const EDGE_FRONT_RIGHT: Position = Position::new(2, 1, 0);
pub const EDGE_MIDDLE_TOP_LEFT: Position = Position::new(0, 2, 1);
pub const EDGE_MIDDLE_TOP_RIGHT: Position = Position::new(2, 2, 1);
pub const EDGE_MIDDLE_BOTTOM_LEFT: Position = Position::new(0, 0, 1);
pub const EDGE_MIDDLE_BOTTOM_RIGHT: Position = Position::new(2, 0, 1);
pub const EDGE_REAR_TOP: Position = Position::new(1, 2, 2);
pub const EDGE_REAR_BOTTOM: Position = Position::new(1, 0, 2);
pub const EDGE_REAR_LEFT: Position = Position::new(0, 1, 2);
pub const EDGE_REAR_RIGHT: Position = Position::new(2, 1, 2);

pub const CORNER_FRONT_TOP_LEFT: Position = Position::new(0, 2, 0);
pub const CORNER_FRONT_TOP_RIGHT: Position = Position::new(2, 2, 0);
pub const CORNER_FRONT_BOTTOM_LEFT: Position = Position::new(0, 0, 0);
pub const CORNER_FRONT_BOTTOM_RIGHT: Position = Position::new(2, 0, 0);
pub const CORNER_REAR_TOP_LEFT: Position = Position::new(0, 2, 2);
pub const CORNER_REAR_TOP_RIGHT: Position = Position::new(2, 2, 2);
pub const CORNER_REAR_BOTTOM_LEFT: Position = Position::new(0, 0, 2);
pub const CORNER_REAR_BOTTOM_RIGHT: Position = Position::new(2, 0, 2);

const LOW: usize = 0;
const MIDDLE: usize = 1;
const HIGH: usize = 2;

impl Position {
    pub const fn new(x: usize, y: usize, z: usize) -> Position {
        Position { x, y, z }
    }

    /// The slot of a 3-cube that touches exactly `faces`. No faces is the core,
    /// one face its center, two an edge, three a corner.
    pub fn touching(faces: impl IntoIterator<Item = Face>) -> Position {
        faces
            .into_iter()
            .fold(Position::new(MIDDLE, MIDDLE, MIDDLE), |mut p, face| {
                let end = if face.is_positive() { HIGH } else { LOW };
                match face.axis() {
                    Axis::X => p.x = end,
                    Axis::Y => p.y = end,
                    Axis::Z => p.z = end,
                }
                p
            })
    }

    pub fn coordinate(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn is_on(&self, face: Face) -> bool {
        let end = if face.is_positive() { HIGH } else { LOW };
        self.coordinate(face.axis()) == end
    }

    /// Faces this slot touches, in [`Face`] order.
    pub fn faces(&self) -> SmallVec<[Face; 3]> {
        all_faces().filter(|f| self.is_on(*f)).collect()
    }

    pub fn is_in_column_left(&self) -> bool {
        self.x == LOW
    }

    pub fn is_in_column_middle(&self) -> bool {
        self.x == MIDDLE
    }

    pub fn is_in_column_right(&self) -> bool {
        self.x == HIGH
    }

    pub fn is_in_row_bottom(&self) -> bool {
        self.y == LOW
    }

    pub fn is_in_row_middle(&self) -> bool {
        self.y == MIDDLE
    }

    pub fn is_in_row_top(&self) -> bool {
        self.y == HIGH
    }

    pub fn is_in_face_front(&self) -> bool {
        self.z == LOW
    }

    pub fn is_in_face_middle(&self) -> bool {
        self.z == MIDDLE
    }

    pub fn is_in_face_rear(&self) -> bool {
        self.z == HIGH
    }
}

pub fn centers() -> impl Iterator<Item = Position> {
    all_faces().map(|f| Position::touching([f]))
}

pub fn edges() -> impl Iterator<Item = Position> {
    all_faces().flat_map(|a| {
        all_faces()
            .filter(move |b| !Face::same_axis(a, *b) && a < *b)
            .map(move |b| Position::touching([a, b]))
    })
}

pub fn corners() -> impl Iterator<Item = Position> {
    let pairs = || {
        all_faces().flat_map(|a| {
            all_faces()
                .filter(move |b| !Face::same_axis(a, *b) && a < *b)
                .map(move |b| (a, b))
        })
    };
    pairs().flat_map(|(a, b)| {
        all_faces()
            .filter(move |c| b < *c)
            .filter(move |c| !Face::same_axis(a, *c) && !Face::same_axis(b, *c))
            .map(move |c| Position::touching([a, b, c]))
    })
}

/// Every visible slot of a 3-cube: centers, then edges, then corners.
pub fn all() -> impl Iterator<Item = Position> {
    centers().chain(edges()).chain(corners())
}

fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}
