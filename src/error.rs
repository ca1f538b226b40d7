use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid dimensions {width}x{height}, both sides must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cannot place {requested} alive cells on a board of {capacity} cells")]
    InvalidPopulation { requested: usize, capacity: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Reset count \"{digits}\" is too large")]
    CountOverflow { digits: String },
}
