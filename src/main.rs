use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termlife::config::Args;
use termlife::grid::Grid;
use termlife::render::TextRenderer;
use termlife::screen::Crossterm;
use termlife::screen::Screen;
use termlife::screen::Scroll;
use termlife::shell::Shell;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let grid = match args.seed {
        Some(seed) => Grid::seeded(args.width, args.height, args.population, seed),
        None => Grid::new(args.width, args.height, args.population),
    }
    .context("Failed to create board")?;

    let screen: Box<dyn Screen> = if args.no_clear {
        Box::new(Scroll)
    } else {
        Box::new(Crossterm)
    };

    let renderer = TextRenderer::new(usize::from(args.multiplier));
    let mut shell = Shell::new(grid, renderer, screen, io::stdout().lock());

    if args.auto {
        let stop = shell
            .run_auto(args.interval(), args.max_generations)
            .context("Failed to draw board")?;

        info!(?stop, generation = shell.grid().generation(), "automatic play ended");
    } else {
        shell
            .run_manual(io::stdin().lock())
            .context("Failed to run interactive session")?;
    }

    Ok(())
}
