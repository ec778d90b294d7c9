// Demo module for the game. Provides the terminal game loop used by `--local`.
pub mod game_loop;
