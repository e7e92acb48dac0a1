use super::{algorithms::*, Frame, Phase, SolveError, Solver, SIDES};
use crate::prelude::*;

impl Solver {
    pub(super) fn middle_edges(&mut self) -> Result<(), SolveError> {
        for frame in Frame::all() {
            let slot = frame.slot(&[Face::Front, Face::Right]);
            self.settle(Phase::MiddleEdges, frame, slot, Solver::middle_step)?;
        }
        Ok(())
    }

    fn middle_step(&mut self, frame: Frame) -> Result<(), SolveError> {
        let colors = Solver::colors_of(&[frame.face(Face::Front), frame.face(Face::Right)]);
        let position = self.locate(&colors)?;
        let misplaced = SolveError::Misplaced {
            phase: Phase::MiddleEdges,
            position,
        };

        if position.is_in_face_front() {
            return Err(misplaced);
        }

        if position.is_in_face_middle() {
            // Swapping in whatever sits at UF pushes this edge up to the rear.
            let holding =
                Solver::frame_holding(Phase::MiddleEdges, position, &[Face::Front, Face::Right])?;
            self.perform(holding, &INSERT_RIGHT);
            return Ok(());
        }

        let side = Solver::side_of(position, Face::Rear).ok_or(misplaced.clone())?;
        let cubie = self.cube.cubie_at(position);
        let side_color = cubie.color(side);

        if side_color == Color::solved(side) {
            let frame = Frame::facing(side);
            if cubie.color(Face::Rear) == Color::solved(frame.face(Face::Right)) {
                self.perform(frame, &INSERT_RIGHT);
            } else {
                self.perform(frame, &INSERT_LEFT);
            }
        } else {
            let target = SIDES
                .into_iter()
                .find(|f| Color::solved(*f) == side_color)
                .ok_or(misplaced)?;
            let to = Frame::facing(target).slot(&[Face::Top, Face::Front]);
            self.bring(Face::Rear, position, to)?;
        }
        Ok(())
    }
}
