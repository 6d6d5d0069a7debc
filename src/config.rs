use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::grid::Grid;
use crate::GridInt;

/// Command line configuration. Defaults give a 640x480 board of 20px cells.
#[derive(Parser, Debug, Clone)]
#[command(name = "toroidal-snake")]
#[command(version, about = "Snake on a wrap-around grid, played in the terminal")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 32)]
    pub width: GridInt,

    /// Grid height in cells
    #[arg(long, default_value_t = 24)]
    pub height: GridInt,

    /// Game ticks per second
    #[arg(long, default_value_t = 10)]
    pub speed: u32,

    /// Write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config { width: 32, height: 24, speed: 10, log_file: None }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            bail!("Grid must be at least 2x2 cells, got {}x{}", self.width, self.height);
        }

        if self.speed == 0 {
            bail!("Speed must be at least one tick per second");
        }

        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }
}
