//! Game session - owns the board and drives the renderer
//!
//! The session is the only place the board is mutated. Everything that acts
//! on behalf of the player (the terminal input handler, tests) receives the
//! session as an explicit `&mut Game` rather than reaching for shared state.
//!
//! # Move Flow
//!
//! ```text
//! try_player_move(from, to)
//!   -> color at `from`        (no piece: refused)
//!   -> Move::check            (illegal: refused, board untouched)
//!   -> board.move_piece       (relocate)
//!   -> board.remove_piece     (jumps only: clear the captured piece)
//! ```
//!
//! No state is kept between requests apart from the board itself, the
//! current hint selection and the last applied move.

use checkers_rules::{
    possible_destinations, BoardMut, BoardQuery, CheckerBoard, Coord, Move, MoveKind,
};
use tracing::{debug, info};

use super::error::{GameError, GameResult};
use super::selection::Selection;
use crate::rendering::HintRenderer;

/// A single game of checkers rendered through `R`
#[derive(Debug)]
pub struct Game<R: HintRenderer> {
    /// Whether the front end should accept player commands
    pub allow_player_input: bool,

    board: CheckerBoard,
    renderer: R,
    selection: Selection,
    last_move: Option<Move>,
}

impl<R: HintRenderer> Game<R> {
    /// New session on an empty board; call [`Game::start`] to set up pieces
    pub fn new(renderer: R) -> Self {
        Self::with_board(renderer, CheckerBoard::new())
    }

    /// New session on an existing position
    pub fn with_board(renderer: R, board: CheckerBoard) -> Self {
        Self {
            allow_player_input: true,
            board,
            renderer,
            selection: Selection::default(),
            last_move: None,
        }
    }

    /// Put the pieces in the opening position
    pub fn start(&mut self) {
        self.board.setup();
        self.last_move = None;
        self.stop_hints();
        info!("[GAME] New game started");
    }

    pub fn board(&self) -> &CheckerBoard {
        &self.board
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Highlight every legal destination of the piece on `at`
    ///
    /// Destinations are highlighted in enumeration order. Returns them as well
    /// so callers can report them.
    pub fn start_hints(&mut self, at: Coord) -> Vec<Coord> {
        let destinations = self.select(at);
        debug!("[GAME] Hints for {}: {:?}", at, destinations);

        for &end in &destinations {
            self.renderer.highlight_tile(end);
        }
        destinations
    }

    /// Record `at` as the selected piece without highlighting anything
    pub fn select(&mut self, at: Coord) -> Vec<Coord> {
        let destinations = possible_destinations(&self.board, at);
        self.selection.select(at, destinations.clone());
        destinations
    }

    /// Clear all highlights
    pub fn stop_hints(&mut self) {
        self.selection.clear();
        self.renderer.clear_highlights();
    }

    /// Attempt a player move, applying it only if it is legal
    ///
    /// A refused move leaves the board exactly as it was.
    pub fn try_player_move(&mut self, from: Coord, to: Coord) -> bool {
        match self.play_move(from, to) {
            Ok(_) => true,
            Err(e) => {
                debug!("[GAME] Refused {} -> {}: {}", from, to, e);
                false
            }
        }
    }

    /// Like [`Game::try_player_move`], but says what happened
    pub fn play_move(&mut self, from: Coord, to: Coord) -> GameResult<MoveKind> {
        let mover = self
            .board
            .color_at(from)
            .ok_or(GameError::PieceNotFound { at: from })?;

        let player_move = Move::new(from, to, mover);
        let kind = player_move.check(&self.board)?;

        self.board.move_piece(from, to)?;
        if let MoveKind::Jump { captured } = kind {
            self.board.remove_piece(captured)?;
            info!("[GAME] {} jumped {} -> {}, captured {}", mover, from, to, captured);
        } else {
            info!("[GAME] {} moved {} -> {}", mover, from, to);
        }

        self.last_move = Some(player_move);
        Ok(kind)
    }
}
