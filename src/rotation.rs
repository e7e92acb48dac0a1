use crate::prelude::*;

use enum_iterator::Sequence;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Axis {
    /// Columns, left to right.
    X,
    /// Rows, bottom to top.
    Y,
    /// Depth, front to rear.
    Z,
}

/// Sense of a quarter turn. X and Y are seen from their positive end (right,
/// top); Z is seen from the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A quarter turn of one slice. Carries no cube, so the same value can be
/// replayed against any cube of a large enough size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: Axis,
    pub section: usize,
    pub direction: Direction,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    #[error("Rotation section {section} is out of bounds for a cube of size {size}")]
    SectionOutOfBounds { section: usize, size: usize },
}

impl Rotation {
    pub fn new(axis: Axis, section: usize, direction: Direction) -> Rotation {
        Rotation {
            axis,
            section,
            direction,
        }
    }

    pub fn clockwise(axis: Axis, section: usize) -> Rotation {
        Rotation::new(axis, section, Direction::Clockwise)
    }

    pub fn counter_clockwise(axis: Axis, section: usize) -> Rotation {
        Rotation::new(axis, section, Direction::CounterClockwise)
    }

    pub fn reverse(self) -> Rotation {
        Rotation {
            direction: self.direction.reverse(),
            ..self
        }
    }

    /// Where the cubie at `position` ends up once this rotation is applied to a
    /// cube of `size`. Positions outside the slice are returned unchanged.
    pub fn map_position(&self, position: Position, size: usize) -> Position {
        if !self.contains(position) {
            return position;
        }

        let last = size - 1;
        let Position { x, y, z } = position;
        match (self.axis, self.direction) {
            (Axis::X, Direction::Clockwise) => Position::new(x, last - z, y),
            (Axis::X, Direction::CounterClockwise) => Position::new(x, z, last - y),
            (Axis::Y, Direction::Clockwise) => Position::new(z, y, last - x),
            (Axis::Y, Direction::CounterClockwise) => Position::new(last - z, y, x),
            (Axis::Z, Direction::Clockwise) => Position::new(y, last - x, z),
            (Axis::Z, Direction::CounterClockwise) => Position::new(last - y, x, z),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.coordinate(self.axis) == self.section
    }

    /// Every position of the slice this rotation turns.
    pub fn slice(&self, size: usize) -> impl Iterator<Item = Position> {
        let (axis, section) = (self.axis, self.section);
        (0..size).flat_map(move |a| {
            (0..size).map(move |b| match axis {
                Axis::X => Position::new(section, a, b),
                Axis::Y => Position::new(a, section, b),
                Axis::Z => Position::new(a, b, section),
            })
        })
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tick = match self.direction {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
        };
        write!(f, "{:?}{}{}", self.axis, self.section, tick)
    }
}
