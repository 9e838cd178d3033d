use alloc::string::String;

use crate::board::Board;
use crate::ship::Ship;

/// A named participant owning one board.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
}

impl Player {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn ships(&self) -> &[Ship] {
        self.board.ships()
    }

    /// Number of placed ships that still have hit points.
    pub fn ships_alive(&self) -> usize {
        self.ships().iter().filter(|s| !s.destroyed()).count()
    }

    /// Number of placed ships of the given type.
    pub fn count_ships(&self, kind: &str) -> usize {
        self.ships().iter().filter(|s| s.kind() == kind).count()
    }
}
