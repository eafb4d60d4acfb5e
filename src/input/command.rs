//! Text commands typed at the terminal
//!
//! Coordinates are `x y` pairs, file first, both zero-based.
//!
//! ```text
//! select 3 2        highlight legal moves of the piece on (3, 2)
//! clear             remove highlights
//! move 3 2 4 3      move the piece on (3, 2) to (4, 3)
//! click 3 2         select, or move the selected piece here
//! board | new | help | quit
//! ```

use std::str::FromStr;

use checkers_rules::Coord;
use thiserror::Error;

/// A parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Coord),
    Clear,
    Move { from: Coord, to: Coord },
    Click(Coord),
    Board,
    New,
    Help,
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("'{command}' takes {expected} numbers, got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("'{0}' is not a number")]
    BadNumber(String),
}

/// Result type alias for input parsing
pub type InputResult<T> = Result<T, InputError>;

pub const HELP: &str = "\
commands:
  select X Y        show legal moves for the piece on (X, Y)
  clear             hide move hints
  move X1 Y1 X2 Y2  move a piece
  click X Y         select a piece, or move the selected piece to (X, Y)
  board             redraw the board
  new               start a new game
  help              show this message
  quit              leave";

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> InputResult<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(InputError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "select" | "s" => {
                let [x, y] = numbers::<2>("select", &args)?;
                Command::Select(Coord::new(x, y))
            }
            "move" | "m" => {
                let [x1, y1, x2, y2] = numbers::<4>("move", &args)?;
                Command::Move {
                    from: Coord::new(x1, y1),
                    to: Coord::new(x2, y2),
                }
            }
            "click" | "c" => {
                let [x, y] = numbers::<2>("click", &args)?;
                Command::Click(Coord::new(x, y))
            }
            "clear" => no_args(Command::Clear, "clear", &args)?,
            "board" | "b" => no_args(Command::Board, "board", &args)?,
            "new" => no_args(Command::New, "new", &args)?,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn numbers<const N: usize>(command: &'static str, args: &[&str]) -> InputResult<[i32; N]> {
    if args.len() != N {
        return Err(InputError::WrongArity {
            command,
            expected: N,
            found: args.len(),
        });
    }
    let mut out = [0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| InputError::BadNumber(arg.to_string()))?;
    }
    Ok(out)
}

fn no_args(command: Command, name: &'static str, args: &[&str]) -> InputResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(InputError::WrongArity {
            command: name,
            expected: 0,
            found: args.len(),
        })
    }
}
