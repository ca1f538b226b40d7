pub mod cell;
pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod rule;
pub mod screen;
pub mod shell;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use grid::GridView;
