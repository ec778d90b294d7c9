//! Standalone game loop for local play.
//!
//! This module provides an interactive loop for playing the maze in the terminal.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::game::GameSettings;
use crate::game::state::MazeSession;
use crate::game::systems::{render_ascii, render_status};
use crate::game::types::{Direction, MoveOutcome};

/// A line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    Move(Direction),
    Restart,
    NextLevel,
    Hint,
    Quit,
    Unknown,
}

/// Map a line of input to a command. Arrow keys arrive as ANSI escape sequences.
pub fn parse_command(input: &str) -> DemoCommand {
    match input.trim() {
        "\x1b[A" => DemoCommand::Move(Direction::Up),
        "\x1b[C" => DemoCommand::Move(Direction::Right),
        "\x1b[B" => DemoCommand::Move(Direction::Down),
        "\x1b[D" => DemoCommand::Move(Direction::Left),
        "r" | "R" => DemoCommand::Restart,
        "n" | "N" => DemoCommand::NextLevel,
        "h" | "H" => DemoCommand::Hint,
        "q" | "Q" => DemoCommand::Quit,
        other => match Direction::from_key(other) {
            Some(direction) => DemoCommand::Move(direction),
            None => DemoCommand::Unknown,
        },
    }
}

fn print_session(session: &MazeSession) {
    println!("{}", render_ascii(session));
    println!("{}", render_status(session));
}

/// Run the terminal game loop until the player quits or stdin closes.
pub fn run_game_loop(settings: GameSettings) -> io::Result<()> {
    let delay = Duration::from_millis(settings.level_advance_delay_ms);
    let mut session = MazeSession::new(settings);
    let stdin = io::stdin();

    println!("Maze runner! Move with w/a/s/d or arrows, r = restart, n = next level, h = hint, q = quit.");
    print_session(&session);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match parse_command(&input) {
            DemoCommand::Move(direction) => match session.try_move(direction) {
                MoveOutcome::Completed { .. } => {
                    print_session(&session);
                    println!(
                        "Level {} cleared in {:.1}s!",
                        session.level(),
                        session.elapsed().as_secs_f32()
                    );
                    thread::sleep(delay);
                    session.advance();
                }
                outcome if !outcome.changed_position() => {
                    println!("Blocked");
                    continue;
                }
                _ => {}
            },
            DemoCommand::Restart => session.reset(),
            DemoCommand::NextLevel => session.skip_level(),
            DemoCommand::Hint => {
                match session.hint().first() {
                    Some(direction) => println!("Hint: go {:?}", direction),
                    None => println!("Hint: you are already there"),
                }
                continue;
            }
            DemoCommand::Quit => break,
            DemoCommand::Unknown => {
                println!("Unknown command");
                continue;
            }
        }

        print_session(&session);
    }

    println!("Bye! Reached level {}.", session.level());
    Ok(())
}
