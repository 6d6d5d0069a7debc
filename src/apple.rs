use anyhow::Result;
use rand::Rng;

use crate::draw::{Canvas, Drawable, APPLE_COLOR, BORDER_COLOR};
use crate::grid::Grid;
use crate::Coords;

pub struct Apple {
    grid: Grid,
    position: Coords,
}

impl Apple {
    /// Creates an apple somewhere other than the snake's spawn cell.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let mut apple = Apple { grid, position: (0, 0) };
        apple.randomize_position(rng);
        apple
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let center = self.grid.center();

        self.position = loop {
            let pos = self.random_cell(rng);
            if pos != center {
                break pos;
            }
        };
    }

    /// Moves the apple to a random cell outside `occupied`.
    /// Returns false, leaving the apple where it was, when no such cell exists.
    pub fn relocate_avoiding<R: Rng + ?Sized>(&mut self, occupied: &[Coords], rng: &mut R) -> bool {
        if self.drawable_cells().all(|pos| occupied.contains(&pos)) {
            return false;
        }

        self.position = loop {
            let pos = self.random_cell(rng);
            if !occupied.contains(&pos) {
                break pos;
            }
        };

        true
    }

    // The last row and column are never drawn from
    fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        let x = rng.gen_range(0..self.grid.width() - 1);
        let y = rng.gen_range(0..self.grid.height() - 1);
        (x, y)
    }

    fn drawable_cells(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.grid.width() - 1, self.grid.height() - 1);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

impl Drawable for Apple {
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.fill_cell(self.position, APPLE_COLOR, BORDER_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{Op, RecordingCanvas};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_initial_position_avoids_center() {
        // On a 3x3 grid the drawable area is 2x2 and includes the center (1, 1)
        let grid = Grid::new(3, 3);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let apple = Apple::new(grid, &mut rng);
            assert_ne!(apple.position(), grid.center());
        }
    }

    #[test]
    fn test_never_uses_last_row_or_column() {
        let grid = Grid::new(4, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut apple = Apple::new(grid, &mut rng);

        for _ in 0..500 {
            apple.randomize_position(&mut rng);
            let (x, y) = apple.position();
            assert!(x < 3 && y < 2);
        }
    }

    #[test]
    fn test_relocate_avoids_occupied() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::new(grid, &mut rng);

        // Leaves only (2, 2) free in the 3x3 drawable area
        let occupied: Vec<Coords> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|pos| *pos != (2, 2))
            .collect();

        for _ in 0..20 {
            assert!(apple.relocate_avoiding(&occupied, &mut rng));
            assert_eq!(apple.position(), (2, 2));
        }
    }

    #[test]
    fn test_relocate_with_no_free_cell() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(5);
        let mut apple = Apple::new(grid, &mut rng);
        let before = apple.position();

        let occupied = vec![(0, 0), (1, 0), (0, 1), (1, 1)];
        assert!(!apple.relocate_avoiding(&occupied, &mut rng));
        assert_eq!(apple.position(), before);
    }

    #[test]
    fn test_draw() {
        let mut rng = StdRng::seed_from_u64(9);
        let apple = Apple::new(Grid::new(10, 10), &mut rng);
        let mut canvas = RecordingCanvas::default();
        apple.draw(&mut canvas).unwrap();
        assert_eq!(canvas.ops, vec![Op::Cell(apple.position(), APPLE_COLOR, BORDER_COLOR)]);
    }
}
