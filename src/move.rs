//! Face-turn notation (`F B L R U D`, with `'` and `2`), lowered onto
//! [`Rotation`]s of a cube's outer slices.

use crate::prelude::*;

use enum_iterator::Sequence;
use smallvec::{smallvec, SmallVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

/// Quarter turns come first so that searches over amounts prefer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Amount {
    Single,
    Reverse,
    Double,
}

impl Move {
    pub fn new(face: Face, amount: Amount) -> Move {
        Move { face, amount }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>().flat_map(|face| {
            enum_iterator::all::<Amount>().map(move |amount| Move { face, amount })
        })
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn reverse(self) -> Move {
        let amount = match self.amount {
            Amount::Single => Amount::Reverse,
            Amount::Reverse => Amount::Single,
            Amount::Double => Amount::Double,
        };
        Move { amount, ..self }
    }

    /// The quarter turns this move makes on a cube of `size`. A face turn is
    /// clockwise as seen looking at that face.
    pub fn rotations(&self, size: usize) -> SmallVec<[Rotation; 2]> {
        let last = size - 1;
        let quarter = match self.face {
            Face::Front => Rotation::clockwise(Axis::Z, 0),
            Face::Rear => Rotation::counter_clockwise(Axis::Z, last),
            Face::Left => Rotation::counter_clockwise(Axis::X, 0),
            Face::Right => Rotation::clockwise(Axis::X, last),
            Face::Top => Rotation::clockwise(Axis::Y, last),
            Face::Bottom => Rotation::counter_clockwise(Axis::Y, 0),
        };

        match self.amount {
            Amount::Single => smallvec![quarter],
            Amount::Reverse => smallvec![quarter.reverse()],
            Amount::Double => smallvec![quarter, quarter],
        }
    }

    pub fn map_position(&self, position: Position, size: usize) -> Position {
        self.rotations(size)
            .iter()
            .fold(position, |p, r| r.map_position(p, size))
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' | 'f' => Face::Front,
            'B' | 'b' => Face::Rear,
            'L' | 'l' => Face::Left,
            'R' | 'r' => Face::Right,
            'U' | 'u' => Face::Top,
            'D' | 'd' => Face::Bottom,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let amount = match chars.next() {
            None => Amount::Single,
            Some('\'') => Amount::Reverse,
            Some('2') => Amount::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} in move {}", c, s));
        }

        Ok(Move { face, amount })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let face = match self.face {
            Face::Front => 'F',
            Face::Rear => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Top => 'U',
            Face::Bottom => 'D',
        };
        let suffix = match self.amount {
            Amount::Single => "",
            Amount::Reverse => "'",
            Amount::Double => "2",
        };
        write!(f, "{}{}", face, suffix)
    }
}
