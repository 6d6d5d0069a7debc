mod apple;
mod clock;
mod config;
mod draw;
mod game;
mod grid;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context as _, Result};
use clap::Parser;
use env_logger::{Env, Target};

use crate::config::Config;

pub type GridInt = u16;
pub type Coords = (GridInt, GridInt);

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logger(&config)?;

    log::info!(
        "starting: grid {}x{}, {} ticks/s",
        config.width,
        config.height,
        config.speed
    );

    // Quitting is handled inside the loop, which restores the terminal first
    game::run(&config)
}

fn init_logger(config: &Config) -> Result<()> {
    // The game owns the terminal, so records only go somewhere when a file is given
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error creating log file {}", path.display()))?;
            let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder.try_init().context("Error initialising logger")
}
