use std::io;
use std::io::Write;

use crossterm::QueueableCommand;
use crossterm::cursor;
use crossterm::terminal;

/// How the previous frame is gotten rid of before the next one is drawn
pub trait Screen {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Wipes the terminal and homes the cursor, so every frame is drawn in place
#[derive(Debug, Default)]
pub struct Crossterm;

impl Screen for Crossterm {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;

        Ok(())
    }
}

/// Leaves old frames in place. New frames are printed below them
#[derive(Debug, Default)]
pub struct Scroll;

impl Screen for Scroll {
    fn clear(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
