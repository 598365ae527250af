//! Player model owned by the world.

use labyrinth_core::Position;

/// Holds the player's current grid position.
///
/// The player performs no validation; movement legality is decided by the
/// world against the maze before a new position is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player {
    position: Position,
}

impl Player {
    /// Cell currently occupied by the player.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Moves the player to the provided cell.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
