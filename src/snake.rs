use anyhow::Result;
use rand::{seq::SliceRandom, Rng};

use crate::draw::{Canvas, Drawable, BORDER_COLOR, SNAKE_COLOR};
use crate::grid::Grid;
use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

pub const ALL_DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body segments with the head at index 0.
///
/// `length` is the target size. Eating bumps it, and the extra segment shows up
/// on the following moves because the tail stops being dropped.
pub struct Snake {
    grid: Grid,
    positions: Vec<Coords>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
}

impl Snake {
    pub fn new(grid: Grid) -> Self {
        Snake {
            grid,
            positions: vec![grid.center()],
            length: 1,
            direction: Right,
            next_direction: None,
        }
    }

    pub fn positions(&self) -> &[Coords] {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Buffers `dir` for the next move. Reversing onto the neck is ignored.
    pub fn set_pending_direction(&mut self, dir: Direction) {
        if dir == self.direction.opposite() {
            log::trace!("ignoring reversal from {:?} to {:?}", self.direction, dir);
            return;
        }

        self.next_direction = Some(dir);
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn advance(&mut self) {
        let new_head = self.grid.wrap(self.head_position(), self.direction.delta());
        self.positions.insert(0, new_head);

        if self.positions.len() > self.length {
            self.positions.pop();
        }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head_position(&self) -> Coords {
        self.positions[0]
    }

    pub fn detect_self_collision(&self) -> bool {
        self.positions[1..].contains(&self.head_position())
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.length = 1;
        self.positions = vec![self.grid.center()];
        self.direction = *ALL_DIRECTIONS.choose(rng).unwrap_or(&Right);
        self.next_direction = None;
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        for pos in &self.positions {
            canvas.fill_cell(*pos, SNAKE_COLOR, BORDER_COLOR)?;
        }
        Ok(())
    }
}
