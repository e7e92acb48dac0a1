//! Layer-by-layer solver for the 3×3×3.
//!
//! Phases run in a fixed order. Each one repeatedly finds the cubie its
//! current slot needs, classifies where that cubie sits, and applies the
//! corrective sequence for that case until the slot is solved. Every quarter
//! turn is recorded, so the solution replays onto the original cube.

use crate::prelude::*;

use enum_iterator::Sequence;
use smallvec::SmallVec;
use thiserror::Error;

mod algorithms;
mod first_layer;
mod frame;
mod last_layer;
mod middle_layer;

pub use frame::{Frame, SIDES};

/// Corrective sequences allowed per slot (or per last-layer step) before the
/// solver gives up on a cube.
const MAX_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Phase {
    Orient,
    FrontCross,
    FrontCorners,
    MiddleEdges,
    RearCross,
    RearEdges,
    RearCornerPosition,
    RearCornerOrientation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("No cubie shows exactly the colors {0:?}")]
    MissingCubie(Vec<Color>),
    #[error("No {face:?} turn carries {from:?} to {to:?}")]
    Unreachable {
        face: Face,
        from: Position,
        to: Position,
    },
    #[error("Cubie at {position:?} is outside every slot {phase:?} can handle")]
    Misplaced { phase: Phase, position: Position },
    #[error("{phase:?} made no progress after {attempts} corrective sequences")]
    NoProgress { phase: Phase, attempts: usize },
}

pub struct Solver {
    cube: Cube,
    rotations: Vec<Rotation>,
}

impl Solver {
    /// Takes ownership of `cube` and turns it as it solves; pass a copy to keep
    /// the scrambled state.
    pub fn new(cube: Cube) -> Solver {
        assert_eq!(cube.size(), 3, "The layer solver only handles 3x3x3 cubes");
        Solver {
            cube,
            rotations: Vec::new(),
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Rotations applied so far, in application order.
    pub fn solution(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Runs every phase. A cube that breaks the physical invariants stops the
    /// solve early; the rotations applied until then are still returned.
    pub fn solve(&mut self) -> Vec<Rotation> {
        if let Err(e) = self.try_solve() {
            log::warn!("Stopped solving: {}", e);
        }
        self.rotations.clone()
    }

    pub fn try_solve(&mut self) -> Result<Vec<Rotation>, SolveError> {
        let start = std::time::Instant::now();

        for phase in enum_iterator::all::<Phase>() {
            let before = self.rotations.len();
            self.run(phase)?;
            log::debug!(
                "{:?} finished with {} rotations",
                phase,
                self.rotations.len() - before
            );
        }

        log::info!(
            "Solved with {} rotations, took {:?}",
            self.rotations.len(),
            start.elapsed()
        );
        Ok(self.rotations.clone())
    }

    fn run(&mut self, phase: Phase) -> Result<(), SolveError> {
        match phase {
            Phase::Orient => self.orient(),
            Phase::FrontCross => self.front_cross(),
            Phase::FrontCorners => self.front_corners(),
            Phase::MiddleEdges => self.middle_edges(),
            Phase::RearCross => self.rear_cross(),
            Phase::RearEdges => self.rear_edges(),
            Phase::RearCornerPosition => self.rear_corner_position(),
            Phase::RearCornerOrientation => self.rear_corner_orientation(),
        }
    }

    fn rotate(&mut self, rotation: Rotation) {
        log::trace!("{}", rotation);
        self.cube.turn(rotation);
        self.rotations.push(rotation);
    }

    fn apply(&mut self, move_: Move) {
        for rotation in move_.rotations(self.cube.size()) {
            self.rotate(rotation);
        }
    }

    fn perform(&mut self, frame: Frame, moves: &[Move]) {
        for m in moves {
            self.apply(frame.orient(*m));
        }
    }

    fn locate(&self, colors: &[Color]) -> Result<Position, SolveError> {
        self.cube
            .find_cubie_with_colors(colors)
            .ok_or_else(|| SolveError::MissingCubie(colors.to_vec()))
    }

    /// Turns `face` so the cubie at `from` lands on `to`, using the first of a
    /// quarter, reverse quarter or half turn whose position map agrees.
    fn bring(&mut self, face: Face, from: Position, to: Position) -> Result<(), SolveError> {
        if from == to {
            return Ok(());
        }

        let size = self.cube.size();
        let m = enum_iterator::all::<Amount>()
            .map(|amount| Move::new(face, amount))
            .find(|m| m.map_position(from, size) == to)
            .ok_or(SolveError::Unreachable { face, from, to })?;
        self.apply(m);
        Ok(())
    }

    /// Repeats `step` until `slot` is solved.
    fn settle(
        &mut self,
        phase: Phase,
        frame: Frame,
        slot: Position,
        step: fn(&mut Solver, Frame) -> Result<(), SolveError>,
    ) -> Result<(), SolveError> {
        for _ in 0..MAX_ATTEMPTS {
            if self.cube.is_position_solved(slot) {
                return Ok(());
            }
            step(self, frame)?;
        }

        if self.cube.is_position_solved(slot) {
            Ok(())
        } else {
            Err(SolveError::NoProgress {
                phase,
                attempts: MAX_ATTEMPTS,
            })
        }
    }

    /// The side face an edge or corner touches besides `face`.
    fn side_of(position: Position, face: Face) -> Option<Face> {
        position
            .faces()
            .into_iter()
            .find(|f| *f != face && SIDES.contains(f))
    }

    /// The frame in which `position` is the slot touching `relative`.
    fn frame_holding(
        phase: Phase,
        position: Position,
        relative: &[Face],
    ) -> Result<Frame, SolveError> {
        Frame::all()
            .find(|f| f.slot(relative) == position)
            .ok_or(SolveError::Misplaced { phase, position })
    }

    fn colors_of(faces: &[Face]) -> SmallVec<[Color; 3]> {
        faces.iter().map(|f| Color::solved(*f)).collect()
    }
}
