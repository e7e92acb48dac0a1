//! Corrective sequences, written with the finished layer facing down (see
//! [`Frame`](super::Frame)).

use crate::prelude::*;

lazy_static::lazy_static! {
    /// Carries the FR edge or the DFR corner up into the U layer. The other D
    /// pieces end where they started.
    pub static ref LIFT: Vec<Move> = parse("R U R'");

    /// Carries the DF edge straight up to UF, or down again.
    pub static ref FLIP_OVER: Vec<Move> = parse("F2");

    /// Drops a UF edge whose D color faces front into DF.
    pub static ref DROP_SIDEWAYS: Vec<Move> = parse("U' R' F R");

    /// Swaps UFR and DFR while twisting them; repeated until DFR is solved.
    pub static ref CORNER_CYCLE: Vec<Move> = parse("R U R' U'");

    /// Moves the UF edge into FR.
    pub static ref INSERT_RIGHT: Vec<Move> = parse("U R U' R' U' F' U F");

    /// Moves the UF edge into FL.
    pub static ref INSERT_LEFT: Vec<Move> = parse("U' L' U L U F U' F'");

    /// Flips U edges: dot to L, L (at UB and UL) to line, line (UL to UR) to cross.
    pub static ref ORIENT_EDGES: Vec<Move> = parse("F R U R' U' F'");

    /// Swaps UF and UL, keeping UB and UR.
    pub static ref SWAP_EDGES: Vec<Move> = parse("R U R' U R U2 R' U");

    /// Cycles UFL, UBL and UBR, keeping UFR.
    pub static ref CYCLE_CORNERS: Vec<Move> = parse("U R U' L' U R' U' L");

    /// Twists UFR in place; six repetitions restore the D layer.
    pub static ref TWIST_CORNER: Vec<Move> = parse("R' D' R D");

    pub static ref TURN_UP: Vec<Move> = parse("U");
}

fn parse(notation: &str) -> Vec<Move> {
    match Move::parse_sequence(notation) {
        Ok(moves) => moves,
        Err(e) => panic!("Bad built-in sequence {:?}: {}", notation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(frame: Frame, moves: &[Move]) -> Cube {
        let mut cube = Cube::new(3);
        for m in moves {
            cube.apply_move(frame.orient(*m));
        }
        cube
    }

    fn sorted_colors(cube: &Cube, p: Position) -> Vec<Color> {
        let mut colors = cube.visible_colors(p).to_vec();
        colors.sort();
        colors
    }

    #[test]
    fn last_layer_sequences_keep_the_first_two_layers() {
        for moves in [&*ORIENT_EDGES, &*SWAP_EDGES, &*CYCLE_CORNERS, &*TURN_UP] {
            let cube = run(Frame::facing(Face::Top), moves);
            assert!(position::all()
                .filter(|p| !p.is_in_face_rear())
                .all(|p| cube.is_position_solved(p)));
            assert!(!cube.is_solved());
        }
    }

    #[test]
    fn insertions_keep_the_first_layer() {
        for frame in Frame::all() {
            for moves in [&*INSERT_RIGHT, &*INSERT_LEFT] {
                let cube = run(frame, moves);
                assert!(position::all()
                    .filter(|p| p.is_in_face_front())
                    .all(|p| cube.is_position_solved(p)));
            }
        }
    }

    #[test]
    fn lifting_only_disturbs_the_lifted_corner() {
        let frame = Frame::facing(Face::Bottom);
        let lifted = frame.slot(&[Face::Bottom, Face::Front, Face::Right]);
        for moves in [&*LIFT, &*CORNER_CYCLE] {
            let cube = run(frame, moves);
            assert!(position::all()
                .filter(|p| p.is_in_face_front() && *p != lifted)
                .all(|p| cube.is_position_solved(p)));
            assert!(!cube.is_position_solved(lifted));
        }
    }

    #[test]
    fn six_twists_are_identity() {
        let twists = TWIST_CORNER.repeat(6);
        assert!(run(Frame::facing(Face::Left), &twists).is_solved());
    }

    #[test]
    fn swap_edges_swaps_front_and_left() {
        let frame = Frame::facing(Face::Top);
        let cube = run(frame, &SWAP_EDGES);
        let solved = Cube::new(3);

        let uf = frame.slot(&[Face::Top, Face::Front]);
        let ul = frame.slot(&[Face::Top, Face::Left]);
        assert!(cube.is_position_solved(frame.slot(&[Face::Top, Face::Rear])));
        assert!(cube.is_position_solved(frame.slot(&[Face::Top, Face::Right])));
        assert_eq!(sorted_colors(&cube, uf), sorted_colors(&solved, ul));
        assert_eq!(sorted_colors(&cube, ul), sorted_colors(&solved, uf));
    }

    #[test]
    fn cycle_corners_keeps_front_right() {
        let frame = Frame::facing(Face::Top);
        let cube = run(frame, &CYCLE_CORNERS);
        assert!(cube.is_position_solved(frame.slot(&[Face::Top, Face::Front, Face::Right])));
        assert!(!cube.is_position_solved(frame.slot(&[Face::Top, Face::Front, Face::Left])));
    }
}
