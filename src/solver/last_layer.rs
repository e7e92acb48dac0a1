//! The yellow layer, solved without disturbing the first two.
//!
//! Edges are oriented into a cross, then permuted; corners are placed, then
//! twisted in place at the front-right slot of the green frame.

use super::{algorithms::*, Frame, Phase, SolveError, Solver, MAX_ATTEMPTS, SIDES};
use crate::prelude::*;

/// Twists beyond this bring the corner back to where it started.
const TWIST_LIMIT: usize = 6;

impl Solver {
    pub(super) fn rear_cross(&mut self) -> Result<(), SolveError> {
        for _ in 0..MAX_ATTEMPTS {
            let up = SIDES
                .into_iter()
                .filter(|side| self.shows_yellow(Position::touching([Face::Rear, *side])))
                .count();
            if up == SIDES.len() {
                return Ok(());
            }

            // An L goes to the back left, a line runs left to right.
            let frame = Frame::all()
                .find(|f| self.edge_up(*f, Face::Rear) && self.edge_up(*f, Face::Left))
                .or_else(|| {
                    Frame::all()
                        .find(|f| self.edge_up(*f, Face::Left) && self.edge_up(*f, Face::Right))
                })
                .unwrap_or_else(|| Frame::facing(Face::Top));
            self.perform(frame, &ORIENT_EDGES);
        }

        Err(SolveError::NoProgress {
            phase: Phase::RearCross,
            attempts: MAX_ATTEMPTS,
        })
    }

    pub(super) fn rear_edges(&mut self) -> Result<(), SolveError> {
        let relatives = [Face::Front, Face::Left, Face::Rear, Face::Right];
        let top = Frame::facing(Face::Top);

        for _ in 0..MAX_ATTEMPTS {
            self.align_rear();

            if relatives.iter().all(|r| self.edge_matches(top, *r)) {
                return Ok(());
            }

            // Two neighbours in place go to the back and right; otherwise
            // swap anything and align again.
            let frame = Frame::all()
                .find(|f| self.edge_matches(*f, Face::Rear) && self.edge_matches(*f, Face::Right))
                .unwrap_or(top);
            self.perform(frame, &SWAP_EDGES);
        }

        Err(SolveError::NoProgress {
            phase: Phase::RearEdges,
            attempts: MAX_ATTEMPTS,
        })
    }

    pub(super) fn rear_corner_position(&mut self) -> Result<(), SolveError> {
        for _ in 0..MAX_ATTEMPTS {
            if Frame::all().all(|f| self.corner_placed(f)) {
                return Ok(());
            }

            let frame = Frame::all()
                .find(|f| self.corner_placed(*f))
                .unwrap_or_else(|| Frame::facing(Face::Top));
            self.perform(frame, &CYCLE_CORNERS);
        }

        Err(SolveError::NoProgress {
            phase: Phase::RearCornerPosition,
            attempts: MAX_ATTEMPTS,
        })
    }

    /// The first two layers are scrambled while this runs and come back once
    /// every corner shows yellow.
    pub(super) fn rear_corner_orientation(&mut self) -> Result<(), SolveError> {
        let frame = Frame::facing(Face::Top);
        let corner = frame.slot(&[Face::Top, Face::Front, Face::Right]);

        for _ in 0..SIDES.len() {
            if self.rear_corners_oriented() {
                break;
            }

            let mut twists = 0;
            while !self.shows_yellow(corner) {
                if twists == TWIST_LIMIT {
                    return Err(SolveError::NoProgress {
                        phase: Phase::RearCornerOrientation,
                        attempts: twists,
                    });
                }
                self.perform(frame, &TWIST_CORNER);
                twists += 1;
            }
            self.perform(frame, &TURN_UP);
        }

        self.align_rear();
        if self.cube.is_solved() {
            Ok(())
        } else {
            Err(SolveError::NoProgress {
                phase: Phase::RearCornerOrientation,
                attempts: SIDES.len(),
            })
        }
    }

    /// Turns the rear face to line up as many edges with their centers as
    /// possible. Keeps the current turn on ties.
    fn align_rear(&mut self) {
        let mut best = (Solver::rear_edges_matched(&self.cube), None);

        for amount in enum_iterator::all::<Amount>() {
            let m = Move::new(Face::Rear, amount);
            let mut cube = self.cube.clone();
            cube.apply_move(m);
            let matched = Solver::rear_edges_matched(&cube);
            if matched > best.0 {
                best = (matched, Some(m));
            }
        }

        if let (_, Some(m)) = best {
            self.apply(m);
        }
    }

    fn rear_edges_matched(cube: &Cube) -> usize {
        SIDES
            .into_iter()
            .filter(|side| {
                let edge = cube.cubie_at(Position::touching([Face::Rear, *side]));
                edge.color(*side) == Color::solved(*side)
            })
            .count()
    }

    fn shows_yellow(&self, position: Position) -> bool {
        self.cube.cubie_at(position).color(Face::Rear) == Color::Yellow
    }

    fn edge_up(&self, frame: Frame, relative: Face) -> bool {
        self.shows_yellow(frame.slot(&[Face::Top, relative]))
    }

    fn edge_matches(&self, frame: Frame, relative: Face) -> bool {
        let face = frame.face(relative);
        self.cube.cubie_at(frame.slot(&[Face::Top, relative])).color(face) == Color::solved(face)
    }

    fn corner_placed(&self, frame: Frame) -> bool {
        let mut shown = self
            .cube
            .visible_colors(frame.slot(&[Face::Top, Face::Front, Face::Right]));
        let mut wanted = Solver::colors_of(&[
            Face::Rear,
            frame.face(Face::Front),
            frame.face(Face::Right),
        ]);
        shown.sort();
        wanted.sort();
        shown == wanted
    }

    fn rear_corners_oriented(&self) -> bool {
        position::corners()
            .filter(|p| p.is_in_face_rear())
            .all(|p| self.shows_yellow(p))
    }
}
