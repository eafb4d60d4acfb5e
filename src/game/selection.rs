//! Selection state for tracking the selected piece

use checkers_rules::Coord;

/// The currently selected piece and its legal destinations
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_position: Option<Coord>,
    pub possible_moves: Vec<Coord>,
}

impl Selection {
    pub fn select(&mut self, at: Coord, possible_moves: Vec<Coord>) {
        self.selected_position = Some(at);
        self.possible_moves = possible_moves;
    }

    pub fn clear(&mut self) {
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_position.is_some()
    }

    /// Whether `at` is one of the selected piece's legal destinations
    pub fn is_destination(&self, at: Coord) -> bool {
        self.possible_moves.contains(&at)
    }
}
