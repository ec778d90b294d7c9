//! Maze grid and generator.

pub mod grid;
pub mod generator;

pub use grid::*;
pub use generator::*;
