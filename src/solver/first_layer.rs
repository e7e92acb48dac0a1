//! Orientation, the white cross and the white corners.

use super::{algorithms::*, Frame, Phase, SolveError, Solver, MAX_ATTEMPTS};
use crate::prelude::*;

impl Solver {
    /// Turns the whole cube until white is in front and green on top.
    pub(super) fn orient(&mut self) -> Result<(), SolveError> {
        for _ in 0..MAX_ATTEMPTS {
            let white = self.locate(&[Color::White])?;
            let (axis, direction) = match Solver::center_face(white)? {
                Face::Front => break,
                Face::Top => (Axis::X, Direction::CounterClockwise),
                Face::Bottom | Face::Rear => (Axis::X, Direction::Clockwise),
                Face::Right => (Axis::Y, Direction::Clockwise),
                Face::Left => (Axis::Y, Direction::CounterClockwise),
            };
            self.turn_whole(axis, direction);
        }

        for _ in 0..MAX_ATTEMPTS {
            let green = self.locate(&[Color::Green])?;
            let direction = match Solver::center_face(green)? {
                Face::Top => break,
                Face::Left | Face::Bottom => Direction::Clockwise,
                Face::Right => Direction::CounterClockwise,
                Face::Front | Face::Rear => {
                    return Err(SolveError::Misplaced {
                        phase: Phase::Orient,
                        position: green,
                    })
                }
            };
            self.turn_whole(Axis::Z, direction);
        }

        if self.cube.center_color(Face::Front) == Color::White
            && self.cube.center_color(Face::Top) == Color::Green
        {
            Ok(())
        } else {
            Err(SolveError::NoProgress {
                phase: Phase::Orient,
                attempts: MAX_ATTEMPTS,
            })
        }
    }

    fn center_face(position: Position) -> Result<Face, SolveError> {
        match position.faces().as_slice() {
            [face] => Ok(*face),
            _ => Err(SolveError::Misplaced {
                phase: Phase::Orient,
                position,
            }),
        }
    }

    fn turn_whole(&mut self, axis: Axis, direction: Direction) {
        for section in 0..self.cube.size() {
            self.rotate(Rotation::new(axis, section, direction));
        }
    }

    pub(super) fn front_cross(&mut self) -> Result<(), SolveError> {
        for frame in Frame::all() {
            let slot = frame.slot(&[Face::Bottom, Face::Front]);
            self.settle(Phase::FrontCross, frame, slot, Solver::cross_step)?;
        }
        Ok(())
    }

    fn cross_step(&mut self, frame: Frame) -> Result<(), SolveError> {
        let colors = Solver::colors_of(&[Face::Front, frame.face(Face::Front)]);
        let position = self.locate(&colors)?;

        if position.is_in_face_front() {
            let holding = Solver::frame_holding(
                Phase::FrontCross,
                position,
                &[Face::Bottom, Face::Front],
            )?;
            self.perform(holding, &FLIP_OVER);
        } else if position.is_in_face_rear() {
            let above = frame.slot(&[Face::Top, Face::Front]);
            self.bring(Face::Rear, position, above)?;
            if self.cube.cubie_at(above).color(Face::Rear) == Color::White {
                self.perform(frame, &FLIP_OVER);
            } else {
                self.perform(frame, &DROP_SIDEWAYS);
            }
        } else {
            let holding =
                Solver::frame_holding(Phase::FrontCross, position, &[Face::Front, Face::Right])?;
            self.perform(holding, &LIFT);
        }
        Ok(())
    }

    pub(super) fn front_corners(&mut self) -> Result<(), SolveError> {
        for frame in Frame::all() {
            let slot = frame.slot(&[Face::Bottom, Face::Front, Face::Right]);
            self.settle(Phase::FrontCorners, frame, slot, Solver::corner_step)?;
        }
        Ok(())
    }

    fn corner_step(&mut self, frame: Frame) -> Result<(), SolveError> {
        let slot = frame.slot(&[Face::Bottom, Face::Front, Face::Right]);
        let above = frame.slot(&[Face::Top, Face::Front, Face::Right]);
        let colors = Solver::colors_of(&[
            Face::Front,
            frame.face(Face::Front),
            frame.face(Face::Right),
        ]);
        let position = self.locate(&colors)?;

        if position == slot || position == above {
            self.perform(frame, &CORNER_CYCLE);
        } else if position.is_in_face_front() {
            let holding = Solver::frame_holding(
                Phase::FrontCorners,
                position,
                &[Face::Bottom, Face::Front, Face::Right],
            )?;
            self.perform(holding, &LIFT);
        } else {
            self.bring(Face::Rear, position, above)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_layer_solved(cube: &Cube) -> bool {
        position::all()
            .filter(|p| p.is_in_face_front())
            .all(|p| cube.is_position_solved(p))
    }

    #[test]
    fn orients_any_whole_cube_turn() {
        for axis in enum_iterator::all::<Axis>() {
            for direction in enum_iterator::all::<Direction>() {
                let mut cube = Cube::new(3);
                for section in 0..3 {
                    cube.apply_rotation(Rotation::new(axis, section, direction))
                        .unwrap();
                }

                let mut solver = Solver::new(cube);
                solver.orient().unwrap();
                assert!(solver.cube().is_solved());
            }
        }
    }

    #[test]
    fn orients_upside_down() {
        let mut cube = Cube::new(3);
        for _ in 0..2 {
            for section in 0..3 {
                cube.apply_rotation(Rotation::clockwise(Axis::Z, section))
                    .unwrap();
            }
        }
        let mut solver = Solver::new(cube);
        solver.orient().unwrap();
        assert_eq!(solver.cube().center_color(Face::Top), Color::Green);
        assert_eq!(solver.solution().len(), 6);
    }

    #[test]
    fn cross_from_every_edge_slot() {
        // Sends the white-green edge through every slot and orientation.
        for setup in ["F", "F2", "F'", "U2 F", "L' U' F'", "B2 U2 F2", "R2 D2", "U F' L F"] {
            let mut solver = Solver::new(cube_with_moves(setup));
            solver.front_cross().unwrap();
            let cube = solver.cube();
            assert!(
                position::edges()
                    .filter(|p| p.is_in_face_front())
                    .all(|p| cube.is_position_solved(p)),
                "{}",
                setup
            );
        }
    }

    #[test]
    fn first_layer_of_random_cubes() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut solver = Solver::new(scrambled(&mut rng, 3, 60));
            solver.orient().unwrap();
            solver.front_cross().unwrap();
            solver.front_corners().unwrap();
            assert!(front_layer_solved(solver.cube()), "{}", solver.cube());
        }
    }

    #[test]
    fn solved_layer_is_left_alone() {
        let mut solver = Solver::new(cube_with_moves("B"));
        solver.orient().unwrap();
        solver.front_cross().unwrap();
        solver.front_corners().unwrap();
        assert!(solver.solution().is_empty());
    }
}
