use crate::prelude::*;

/// Unfolded net: top above, then left, front, right and rear side by side,
/// bottom below. Each face is drawn as seen from outside the cube.
impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.size();
        let indent = " ".repeat(n + 1);

        for row in 0..n {
            writeln!(f, "{}{}", indent, self.row(Face::Top, row))?;
        }

        for row in 0..n {
            let middle = [Face::Left, Face::Front, Face::Right, Face::Rear]
                .iter()
                .map(|face| self.row(*face, row))
                .collect::<Vec<_>>();
            writeln!(f, "{}", middle.join(" "))?;
        }

        for row in 0..n {
            writeln!(f, "{}{}", indent, self.row(Face::Bottom, row))?;
        }

        Ok(())
    }
}

impl Cube {
    fn row(&self, face: Face, row: usize) -> String {
        (0..self.size())
            .map(|col| {
                let p = self.facelet(face, row, col);
                self.cubie_at(p).color(face).to_string()
            })
            .collect()
    }

    /// Grid position of the facelet at `(row, col)` of `face`, rows counted
    /// from the top of the drawing.
    fn facelet(&self, face: Face, row: usize, col: usize) -> Position {
        let last = self.size() - 1;
        match face {
            Face::Front => Position::new(col, last - row, 0),
            Face::Rear => Position::new(last - col, last - row, last),
            Face::Left => Position::new(0, last - row, last - col),
            Face::Right => Position::new(last, last - row, col),
            Face::Top => Position::new(col, last, last - row),
            Face::Bottom => Position::new(col, 0, row),
        }
    }
}
