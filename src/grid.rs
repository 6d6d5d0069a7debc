use crate::{Coords, GridInt};

/// The playing field. Coordinates wrap on both axes, so the grid is a torus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: GridInt,
    height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Offsets `pos` by `(dx, dy)` cells, wrapping around the edges.
    pub fn wrap(&self, pos: Coords, (dx, dy): (i32, i32)) -> Coords {
        let x = (pos.0 as i32 + dx).rem_euclid(self.width as i32);
        let y = (pos.1 as i32 + dy).rem_euclid(self.height as i32);
        (x as GridInt, y as GridInt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(32, 24).center(), (16, 12));
        assert_eq!(Grid::new(5, 3).center(), (2, 1));
    }

    #[test]
    fn test_wrap_inside() {
        let grid = Grid::new(10, 8);
        assert_eq!(grid.wrap((4, 4), (1, 0)), (5, 4));
        assert_eq!(grid.wrap((4, 4), (0, -1)), (4, 3));
    }

    #[test]
    fn test_wrap_edges() {
        let grid = Grid::new(10, 8);
        assert_eq!(grid.wrap((9, 3), (1, 0)), (0, 3));
        assert_eq!(grid.wrap((0, 3), (-1, 0)), (9, 3));
        assert_eq!(grid.wrap((2, 7), (0, 1)), (2, 0));
        assert_eq!(grid.wrap((2, 0), (0, -1)), (2, 7));
    }
}
