use crate::prelude::*;

use enum_iterator::Sequence;
use smallvec::SmallVec;

mod cubie;
mod net;
pub mod position;

pub use cubie::Cubie;
pub use position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Face {
    Front,
    Rear,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Top | Face::Bottom => Axis::Y,
            Face::Front | Face::Rear => Axis::Z,
        }
    }

    /// Whether the face sits at the high end of its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Face::Right | Face::Top | Face::Rear)
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Rear,
            Face::Rear => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        a.axis() == b.axis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// The color `face` shows on a solved cube.
    pub fn solved(face: Face) -> Color {
        match face {
            Face::Front => Color::White,
            Face::Rear => Color::Yellow,
            Face::Top => Color::Green,
            Face::Bottom => Color::Blue,
            Face::Left => Color::Red,
            Face::Right => Color::Orange,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        };
        write!(f, "{}", c)
    }
}

bitflags::bitflags! {
    /// Facelets of one grid position that lie on the outside of the cube.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaceletMask: u8 {
        const FRONT = 1 << 0;
        const REAR = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

impl From<Face> for FaceletMask {
    fn from(face: Face) -> Self {
        match face {
            Face::Front => FaceletMask::FRONT,
            Face::Rear => FaceletMask::REAR,
            Face::Left => FaceletMask::LEFT,
            Face::Right => FaceletMask::RIGHT,
            Face::Top => FaceletMask::TOP,
            Face::Bottom => FaceletMask::BOTTOM,
        }
    }
}

impl FaceletMask {
    pub fn shows(self, face: Face) -> bool {
        self.contains(face.into())
    }

    pub fn faces(self) -> impl Iterator<Item = Face> {
        enum_iterator::all::<Face>().filter(move |f| self.shows(*f))
    }
}

/// An N×N×N cube stored as a flat grid indexed by `(x, y, z)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    cubies: Vec<Cubie>,
}

impl Cube {
    pub fn new(size: usize) -> Cube {
        assert!(size > 0, "A cube needs at least one cubie per side");
        Cube {
            size,
            cubies: vec![Cubie::solved(); size * size * size],
        }
    }

    /// Wraps a grid laid out the way [`Cube::grid`] returns it.
    pub fn from_grid(size: usize, cubies: Vec<Cubie>) -> Cube {
        assert!(size > 0, "A cube needs at least one cubie per side");
        assert_eq!(cubies.len(), size * size * size);
        Cube { size, cubies }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grid(&self) -> &[Cubie] {
        &self.cubies
    }

    pub fn get_cubie(&self, x: usize, y: usize, z: usize) -> Cubie {
        self.cubie_at(Position::new(x, y, z))
    }

    pub fn cubie_at(&self, position: Position) -> Cubie {
        self.cubies[self.index(position)]
    }

    /// Which facelets at `(x, y, z)` are on the outside. Depends only on the
    /// position and the size, never on the cube's state.
    pub fn visible_facelets(&self, x: usize, y: usize, z: usize) -> FaceletMask {
        self.visible_at(Position::new(x, y, z))
    }

    pub fn visible_at(&self, position: Position) -> FaceletMask {
        let last = self.size - 1;
        enum_iterator::all::<Face>()
            .filter(|face| {
                let end = if face.is_positive() { last } else { 0 };
                position.coordinate(face.axis()) == end
            })
            .fold(FaceletMask::empty(), |mask, face| {
                mask | FaceletMask::from(face)
            })
    }

    /// Colors of the visible facelets at `position`, in [`Face`] order.
    pub fn visible_colors(&self, position: Position) -> SmallVec<[Color; 3]> {
        let cubie = self.cubie_at(position);
        self.visible_at(position)
            .faces()
            .map(|f| cubie.color(f))
            .collect()
    }

    /// Color of the middle facelet of `face`. Only meaningful for odd sizes.
    pub fn center_color(&self, face: Face) -> Color {
        let middle = self.size / 2;
        let end = if face.is_positive() { self.size - 1 } else { 0 };
        let mut p = Position::new(middle, middle, middle);
        match face.axis() {
            Axis::X => p.x = end,
            Axis::Y => p.y = end,
            Axis::Z => p.z = end,
        }
        self.cubie_at(p).color(face)
    }

    pub fn apply_rotation(&mut self, rotation: Rotation) -> Result<(), RotationError> {
        if rotation.section >= self.size {
            return Err(RotationError::SectionOutOfBounds {
                section: rotation.section,
                size: self.size,
            });
        }

        self.turn(rotation);
        Ok(())
    }

    /// Applies rotations in order, stopping at the first one that does not fit.
    pub fn apply_all(
        &mut self,
        rotations: impl IntoIterator<Item = Rotation>,
    ) -> Result<(), RotationError> {
        rotations
            .into_iter()
            .try_for_each(|r| self.apply_rotation(r))
    }

    pub fn apply_move(&mut self, move_: Move) {
        for rotation in move_.rotations(self.size) {
            self.turn(rotation);
        }
    }

    pub(crate) fn turn(&mut self, rotation: Rotation) {
        debug_assert!(rotation.section < self.size);

        let slice: SmallVec<[(Position, Cubie); 9]> = rotation
            .slice(self.size)
            .map(|p| (p, self.cubie_at(p)))
            .collect();

        for (from, cubie) in slice {
            let to = self.index(rotation.map_position(from, self.size));
            self.cubies[to] = cubie.turned(rotation.axis, rotation.direction);
        }
    }

    /// The position whose visible colors are exactly `colors`, in any order.
    pub fn find_cubie_with_colors(&self, colors: &[Color]) -> Option<Position> {
        let mut wanted: SmallVec<[Color; 3]> = colors.iter().copied().collect();
        wanted.sort();

        self.positions().find(|p| {
            let mut shown = self.visible_colors(*p);
            shown.sort();
            shown == wanted
        })
    }

    pub fn is_position_solved(&self, position: Position) -> bool {
        let cubie = self.cubie_at(position);
        self.visible_at(position)
            .faces()
            .all(|f| cubie.color(f) == Color::solved(f))
    }

    pub fn is_solved(&self) -> bool {
        self.positions().all(|p| self.is_position_solved(p))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |x| {
            (0..size).flat_map(move |y| (0..size).map(move |z| Position::new(x, y, z)))
        })
    }

    fn index(&self, position: Position) -> usize {
        let Position { x, y, z } = position;
        assert!(
            x < self.size && y < self.size && z < self.size,
            "{:?} is outside a cube of size {}",
            position,
            self.size
        );
        (x * self.size + y) * self.size + z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn solved_is_solved() {
        assert_eq!(Cube::new(3), Cube::new(3));
        assert!(Cube::new(3).is_solved());
    }

    #[test]
    fn single_move_is_not_solved() {
        let cube = cube_with_moves("F2");
        assert_ne!(cube, Cube::new(3));
        assert!(!cube.is_solved());
    }

    #[test]
    fn out_of_bounds_section_is_rejected() {
        for axis in enum_iterator::all::<Axis>() {
            let mut cube = cube_with_moves("R U F'");
            let before = cube.clone();
            assert_eq!(
                cube.apply_rotation(Rotation::clockwise(axis, 3)),
                Err(RotationError::SectionOutOfBounds {
                    section: 3,
                    size: 3
                })
            );
            assert_eq!(cube, before);
        }
    }

    #[test]
    fn left_column_turn() {
        let mut cube = Cube::new(3);
        cube.apply_rotation(Rotation::clockwise(Axis::X, 0)).unwrap();

        assert_eq!(cube.get_cubie(0, 1, 1).left, Color::Red);
        assert_eq!(cube.get_cubie(0, 2, 1).top, Color::White);
        assert_eq!(cube.get_cubie(0, 1, 2).rear, Color::Green);
        assert_eq!(cube.get_cubie(0, 0, 1).bottom, Color::Yellow);
        assert_eq!(cube.get_cubie(0, 1, 0).front, Color::Blue);
        assert!((0..3)
            .flat_map(|y| (0..3).map(move |z| (y, z)))
            .all(|(y, z)| cube.get_cubie(0, y, z).left == Color::Red));
        assert!(cube.positions().filter(|p| p.x > 0).all(|p| cube.is_position_solved(p)));
    }

    #[test]
    fn face_turns_move_the_expected_colors() {
        let cube = cube_with_moves("R");
        assert_eq!(cube.get_cubie(2, 2, 1).top, Color::White);

        let cube = cube_with_moves("U");
        assert_eq!(cube.get_cubie(0, 2, 1).left, Color::White);

        let cube = cube_with_moves("F");
        assert_eq!(cube.get_cubie(2, 1, 0).right, Color::Green);
    }

    #[test]
    fn visible_facelets_by_position() {
        let cube = Cube::new(3);
        assert_eq!(
            cube.visible_facelets(0, 0, 0),
            FaceletMask::LEFT | FaceletMask::BOTTOM | FaceletMask::FRONT
        );
        assert_eq!(
            cube.visible_facelets(2, 2, 2),
            FaceletMask::RIGHT | FaceletMask::TOP | FaceletMask::REAR
        );
        assert_eq!(
            cube.visible_facelets(1, 2, 0),
            FaceletMask::TOP | FaceletMask::FRONT
        );
        assert_eq!(cube.visible_facelets(1, 1, 2), FaceletMask::REAR);
        assert_eq!(cube.visible_facelets(1, 1, 1), FaceletMask::empty());

        let big = Cube::new(5);
        assert_eq!(big.visible_facelets(2, 3, 1), FaceletMask::empty());
        assert_eq!(big.visible_facelets(4, 3, 1), FaceletMask::RIGHT);
    }

    #[test]
    fn visible_colors_of_a_corner() {
        let cube = Cube::new(3);
        assert_eq!(
            cube.visible_colors(position::CORNER_FRONT_TOP_LEFT).as_slice(),
            &[Color::White, Color::Red, Color::Green]
        );
    }

    #[test]
    fn finds_cubies_by_colors() {
        let cube = Cube::new(3);
        assert_eq!(
            cube.find_cubie_with_colors(&[Color::Green, Color::White]),
            Some(position::EDGE_FRONT_TOP)
        );
        assert_eq!(
            cube.find_cubie_with_colors(&[Color::Yellow]),
            Some(position::CENTER_REAR)
        );
        assert_eq!(cube.find_cubie_with_colors(&[Color::White, Color::Yellow]), None);

        let cube = cube_with_moves("R");
        assert_eq!(
            cube.find_cubie_with_colors(&[Color::Orange, Color::Green, Color::White]),
            Some(position::CORNER_REAR_TOP_RIGHT)
        );
    }

    #[test]
    fn center_colors() {
        let mut cube = Cube::new(3);
        assert_eq!(cube.center_color(Face::Front), Color::White);
        cube.apply_rotation(Rotation::clockwise(Axis::X, 1)).unwrap();
        assert_eq!(cube.center_color(Face::Top), Color::White);
        assert_eq!(cube.center_color(Face::Front), Color::Blue);
    }

    #[test]
    fn from_grid_round_trip() {
        let cube = cube_with_moves("R U2 L' B");
        let copy = Cube::from_grid(cube.size(), cube.grid().to_vec());
        assert_eq!(copy, cube);
    }

    #[test]
    fn apply_all_stops_at_bad_rotation() {
        let mut cube = Cube::new(2);
        let result = cube.apply_all([
            Rotation::clockwise(Axis::Y, 0),
            Rotation::clockwise(Axis::Y, 2),
            Rotation::clockwise(Axis::X, 0),
        ]);
        assert!(result.is_err());

        let mut expected = Cube::new(2);
        expected
            .apply_rotation(Rotation::clockwise(Axis::Y, 0))
            .unwrap();
        assert_eq!(cube, expected);
    }

    #[quickcheck]
    fn four_turns_are_identity(scramble: Scramble, axis: Axis, section: usize, cw: bool) -> bool {
        let mut cube = scramble.cube();
        let before = cube.clone();
        let direction = if cw {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        let rotation = Rotation::new(axis, section % cube.size(), direction);
        for _ in 0..4 {
            cube.apply_rotation(rotation).unwrap();
        }
        cube == before
    }

    #[quickcheck]
    fn reverse_is_inverse(scramble: Scramble, axis: Axis, section: usize) -> bool {
        let mut cube = scramble.cube();
        let before = cube.clone();
        let rotation = Rotation::clockwise(axis, section % cube.size());
        cube.apply_rotation(rotation).unwrap();
        cube.apply_rotation(rotation.reverse()).unwrap();
        cube == before
    }

    #[quickcheck]
    fn disjoint_slices_commute(scramble: Scramble, axis: Axis, a: usize, b: usize) -> bool {
        let size = scramble.size;
        let a = Rotation::clockwise(axis, a % size);
        let b = Rotation::counter_clockwise(axis, b % size);

        let mut ab = scramble.cube();
        ab.apply_all([a, b]).unwrap();
        let mut ba = scramble.cube();
        ba.apply_all([b, a]).unwrap();
        ab == ba
    }

    #[quickcheck]
    fn turn_leaves_other_slices_alone(scramble: Scramble, rotation: Rotation) -> bool {
        let mut cube = scramble.cube();
        let rotation = Rotation {
            section: rotation.section % cube.size(),
            ..rotation
        };
        let before = cube.clone();
        cube.apply_rotation(rotation).unwrap();
        cube.positions()
            .filter(|p| !rotation.contains(*p))
            .all(|p| cube.cubie_at(p) == before.cubie_at(p))
    }

    #[quickcheck]
    fn visibility_ignores_history(scramble: Scramble) -> bool {
        let cube = scramble.cube();
        let solved = Cube::new(cube.size());
        cube.positions()
            .all(|p| cube.visible_at(p) == solved.visible_at(p))
    }

    #[quickcheck]
    fn colors_stay_unique(scramble: Scramble) -> bool {
        let cube = scramble.cube();
        if cube.size() != 3 {
            return true;
        }
        position::all().all(|p| {
            cube.find_cubie_with_colors(&cube.visible_colors(p)) == Some(p)
        })
    }
}
