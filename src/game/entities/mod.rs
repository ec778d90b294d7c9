//! Game entities module.
//!
//! This module organizes player and coin entity logic.

pub mod player;
pub mod coin;

pub use player::*;
pub use coin::*;
