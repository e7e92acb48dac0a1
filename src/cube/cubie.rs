use crate::prelude::*;

/// One unit cube. All six facelets are stored; which of them can be seen
/// depends on where the cubie sits (see [`Cube::visible_facelets`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    pub front: Color,
    pub rear: Color,
    pub top: Color,
    pub bottom: Color,
    pub left: Color,
    pub right: Color,
}

impl Default for Cubie {
    fn default() -> Self {
        Cubie::solved()
    }
}

impl Cubie {
    pub fn new(
        front: Color,
        rear: Color,
        top: Color,
        bottom: Color,
        left: Color,
        right: Color,
    ) -> Cubie {
        Cubie {
            front,
            rear,
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn solved() -> Cubie {
        Cubie {
            front: Color::solved(Face::Front),
            rear: Color::solved(Face::Rear),
            top: Color::solved(Face::Top),
            bottom: Color::solved(Face::Bottom),
            left: Color::solved(Face::Left),
            right: Color::solved(Face::Right),
        }
    }

    pub fn color(&self, face: Face) -> Color {
        match face {
            Face::Front => self.front,
            Face::Rear => self.rear,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
            Face::Left => self.left,
            Face::Right => self.right,
        }
    }

    /// The same cubie after a quarter turn about `axis`. Facelets parallel to
    /// the axis keep their labels, the other four move one step around it.
    pub fn turned(self, axis: Axis, direction: Direction) -> Cubie {
        let c = self;
        match (axis, direction) {
            (Axis::X, Direction::Clockwise) => Cubie {
                top: c.front,
                rear: c.top,
                bottom: c.rear,
                front: c.bottom,
                ..c
            },
            (Axis::X, Direction::CounterClockwise) => Cubie {
                front: c.top,
                top: c.rear,
                rear: c.bottom,
                bottom: c.front,
                ..c
            },
            (Axis::Y, Direction::Clockwise) => Cubie {
                front: c.right,
                left: c.front,
                rear: c.left,
                right: c.rear,
                ..c
            },
            (Axis::Y, Direction::CounterClockwise) => Cubie {
                right: c.front,
                front: c.left,
                left: c.rear,
                rear: c.right,
                ..c
            },
            (Axis::Z, Direction::Clockwise) => Cubie {
                top: c.left,
                right: c.top,
                bottom: c.right,
                left: c.bottom,
                ..c
            },
            (Axis::Z, Direction::CounterClockwise) => Cubie {
                left: c.top,
                top: c.right,
                right: c.bottom,
                bottom: c.left,
                ..c
            },
        }
    }
}
