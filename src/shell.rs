use std::io;
use std::io::BufRead;
use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::info;
use tracing::warn;

use crate::command::Command;
use crate::grid::Grid;
use crate::render::TextRenderer;
use crate::screen::Screen;

pub const BANNER: &str = "Press enter to start. Type 'r' to reset, or 'q' to quit.";

/// Why automatic play ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// A step left the board unchanged
    Stable,

    /// The generation limit was reached
    Limit,
}

/// Drives a [`Grid`]: reads commands or waits on a timer, and draws every generation to `out`.
pub struct Shell<W: Write> {
    grid: Grid,
    renderer: TextRenderer,
    screen: Box<dyn Screen>,
    out: W,

    /// Printed under the next frame, so it survives the screen being cleared
    status: Option<String>,
}

impl<W: Write> Shell<W> {
    pub fn new(grid: Grid, renderer: TextRenderer, screen: Box<dyn Screen>, out: W) -> Self {
        Self {
            grid,
            renderer,
            screen,
            out,
            status: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Play one generation per line of `input`, until the player quits or input runs out.
    pub fn run_manual<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        self.out.flush()?;

        let mut lines = input.lines();

        if lines.next().transpose()?.is_none() {
            return Ok(());
        }

        loop {
            self.draw()?;

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Step) => {
                    self.grid.step();
                }
                Ok(Command::Reset(n)) => {
                    if let Err(e) = self.grid.reset(n) {
                        warn!("rejected reset: {e}");
                        self.status = Some(e.to_string());
                    }
                }
                Err(e) => {
                    warn!("rejected command {line:?}: {e}");
                    self.status = Some(e.to_string());
                }
            }
        }

        Ok(())
    }

    /// Step every `interval` until the board stops changing, or until `max_generations` is
    /// reached.
    ///
    /// An oscillator changes on every step, so without a limit it runs forever.
    pub fn run_auto(
        &mut self,
        interval: Duration,
        max_generations: Option<u64>,
    ) -> io::Result<Stop> {
        loop {
            self.draw()?;

            if max_generations.is_some_and(|max| self.grid.generation() >= max) {
                info!(generation = self.grid.generation(), "generation limit reached");
                return Ok(Stop::Limit);
            }

            thread::sleep(interval);

            if !self.grid.step() {
                self.draw()?;
                info!(generation = self.grid.generation(), "board stabilized");
                return Ok(Stop::Stable);
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        self.screen.clear(&mut self.out)?;

        let frame = self.renderer.render(&self.grid.view());
        self.out.write_all(frame.as_bytes())?;

        if let Some(status) = self.status.take() {
            writeln!(self.out, "{status}")?;
        }

        self.out.flush()
    }
}
