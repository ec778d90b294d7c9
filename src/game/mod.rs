pub mod types;
pub mod state;
pub mod best_times;

pub mod entities;
pub mod grid;
pub mod systems;
pub mod demo;
