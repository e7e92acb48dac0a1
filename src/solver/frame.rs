use crate::prelude::*;

/// Side faces in the order a clockwise turn of the rear face carries
/// stickers: top to left to bottom to right.
pub const SIDES: [Face; 4] = [Face::Top, Face::Left, Face::Bottom, Face::Right];

/// Point of view for the corrective sequences.
///
/// Sequences are written in ordinary notation as if the finished layer were
/// facing down and `front` were facing the solver. On the actual cube the
/// finished layer faces front, so `D` lands on the front face, `U` on the rear
/// face, and `F`/`L`/`B`/`R` on the four sides starting at `front`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    front: Face,
}

impl Frame {
    pub fn facing(front: Face) -> Frame {
        assert!(
            SIDES.contains(&front),
            "{:?} is not a side of the solving frame",
            front
        );
        Frame { front }
    }

    pub fn all() -> impl Iterator<Item = Frame> {
        SIDES.into_iter().map(Frame::facing)
    }

    /// The cube face playing the role of `relative` in this frame.
    pub fn face(&self, relative: Face) -> Face {
        match relative {
            Face::Top => Face::Rear,
            Face::Bottom => Face::Front,
            Face::Front => self.side(0),
            Face::Left => self.side(1),
            Face::Rear => self.side(2),
            Face::Right => self.side(3),
        }
    }

    pub fn orient(&self, move_: Move) -> Move {
        Move {
            face: self.face(move_.face),
            ..move_
        }
    }

    /// Position of the slot touching the `relative` faces of this frame.
    pub fn slot(&self, relative: &[Face]) -> Position {
        Position::touching(relative.iter().map(|f| self.face(*f)))
    }

    fn side(&self, steps: usize) -> Face {
        let start = SIDES.iter().position(|f| *f == self.front).unwrap_or(0);
        SIDES[(start + steps) % SIDES.len()]
    }
}
