//! Command dispatch
//!
//! Applies a [`Command`] to a game session passed in explicitly. Mirrors
//! mouse play: `click` on a piece selects it, `click` on one of its
//! destinations moves there and drops the selection, and `click` on another
//! piece switches the selection to it.

use checkers_rules::{BoardQuery, Coord, MoveKind};
use tracing::debug;

use super::command::Command;
use crate::core::GameSettings;
use crate::game::{Game, GameError};
use crate::rendering::HintRenderer;

/// What a command did, for the front end to report
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// A piece was selected; hints are its legal destinations (empty when hints are off)
    Selected { at: Coord, hints: Vec<Coord> },
    /// Selection and highlights cleared
    Cleared,
    Moved(MoveKind),
    Rejected(GameError),
    /// Player input is currently disabled
    InputLocked,
    ShowBoard,
    NewGame,
    Help,
    Quit,
}

/// Apply `command` to `game`
pub fn handle_command<R: HintRenderer>(
    game: &mut Game<R>,
    settings: &GameSettings,
    command: Command,
) -> Response {
    let is_player_action = matches!(
        command,
        Command::Select(_) | Command::Move { .. } | Command::Click(_)
    );
    if is_player_action && !game.allow_player_input {
        debug!("[INPUT] Ignoring {:?}, input disabled", command);
        return Response::InputLocked;
    }

    match command {
        Command::Select(at) => select(game, settings, at),
        Command::Clear => {
            game.stop_hints();
            Response::Cleared
        }
        Command::Move { from, to } => play(game, from, to),
        Command::Click(at) => match game.selection().selected_position {
            Some(from) if from == at => {
                game.stop_hints();
                Response::Cleared
            }
            Some(from) if game.selection().is_destination(at) => play(game, from, at),
            Some(_) if !game.board().is_empty(at) => select(game, settings, at),
            Some(from) => play(game, from, at),
            None => select(game, settings, at),
        },
        Command::Board => Response::ShowBoard,
        Command::New => {
            game.start();
            Response::NewGame
        }
        Command::Help => Response::Help,
        Command::Quit => Response::Quit,
    }
}

fn select<R: HintRenderer>(game: &mut Game<R>, settings: &GameSettings, at: Coord) -> Response {
    if game.board().is_empty(at) {
        game.stop_hints();
        return Response::Rejected(GameError::PieceNotFound { at });
    }

    game.stop_hints();
    let hints = if settings.show_hints {
        game.start_hints(at)
    } else {
        game.select(at);
        Vec::new()
    };
    debug!("[INPUT] Selected {}", at);
    Response::Selected { at, hints }
}

fn play<R: HintRenderer>(game: &mut Game<R>, from: Coord, to: Coord) -> Response {
    let response = match game.play_move(from, to) {
        Ok(kind) => Response::Moved(kind),
        Err(e) => Response::Rejected(e),
    };
    game.stop_hints();
    response
}
