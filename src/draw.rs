use anyhow::Result;

use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BOARD_BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

/// Something the board can be painted onto, one grid cell at a time.
pub trait Canvas {
    fn fill(&mut self, color: Rgb) -> Result<()>;
    fn fill_cell(&mut self, pos: Coords, body: Rgb, border: Rgb) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// A game entity that knows how to paint itself.
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()>;
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill(Rgb),
        Cell(Coords, Rgb, Rgb),
        Present,
    }

    /// Canvas that remembers every call, for checking what got drawn.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn cells_with(&self, color: Rgb) -> Vec<Coords> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Cell(pos, body, _) if *body == color => Some(*pos),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Rgb) -> Result<()> {
            self.ops.push(Op::Fill(color));
            Ok(())
        }

        fn fill_cell(&mut self, pos: Coords, body: Rgb, border: Rgb) -> Result<()> {
            self.ops.push(Op::Cell(pos, body, border));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }
}
