use crate::error::CommandError;
use crate::grid::DEFAULT_POPULATION;

/// What the player asked for on one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reseed the board with this many alive cells
    Reset(usize),

    /// Advance the board by one generation
    Step,

    /// Exit the application
    Quit,
}

impl Command {
    /// Parse one line of player input.
    ///
    /// Anything starting with `r` is a reset. Every digit in the line counts towards the number
    /// of cells to seed, so `r50`, `reset 50` and `r5 0` all mean 50. Without digits the
    /// population defaults to [`DEFAULT_POPULATION`]. `q` and `quit` exit, and any other input,
    /// including an empty line, steps the board.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim().to_lowercase();

        if input.starts_with('r') {
            let digits: String = input.chars().filter(char::is_ascii_digit).collect();

            if digits.is_empty() {
                return Ok(Command::Reset(DEFAULT_POPULATION));
            }

            return digits
                .parse()
                .map(Command::Reset)
                .map_err(|_| CommandError::CountOverflow { digits });
        }

        match input.as_str() {
            "q" | "quit" => Ok(Command::Quit),
            _ => Ok(Command::Step),
        }
    }
}
