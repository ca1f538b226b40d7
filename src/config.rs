use std::time::Duration;

use clap::Parser;

use crate::grid::DEFAULT_HEIGHT;
use crate::grid::DEFAULT_POPULATION;
use crate::grid::DEFAULT_WIDTH;
use crate::render::MAX_MULTIPLIER;

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "termlife", version)]
pub struct Args {
    /// Board width, in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height, in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of cells alive at the start
    #[arg(short, long, default_value_t = DEFAULT_POPULATION)]
    pub population: usize,

    /// Step on a timer until the board stops changing, instead of waiting for input
    #[arg(short, long)]
    pub auto: bool,

    /// Delay between generations in automatic mode
    #[arg(long, default_value_t = 200)]
    pub interval_ms: u64,

    /// Stop automatic mode after this many generations
    #[arg(long)]
    pub max_generations: Option<u64>,

    /// Repeat each cell this many times horizontally
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=MAX_MULTIPLIER as i64)
    )]
    pub multiplier: u16,

    /// Print frames one after the other instead of clearing the terminal
    #[arg(long)]
    pub no_clear: bool,

    /// Seed for the random starting population
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
