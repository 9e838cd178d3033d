//! Crate-wide error type.

use alloc::string::String;

use crate::coordinate::Coordinate;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by board, game and AI operations.
///
/// Every command either succeeds completely or fails with one of these
/// without touching game state. The only exception is [`Error::Listener`]:
/// the command's mutation is already committed when a listener fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Coordinate text is not a letter followed by a row number.
    #[error("cannot parse coordinate {0:?}")]
    IncorrectCoordinate(String),
    /// Column or row lies outside the board.
    #[error("cell {0} is out of range")]
    CellOutOfRange(String),
    /// Cell already carries a ship.
    #[error("cell {0} already has a ship")]
    CellTaken(Coordinate),
    /// Cell was already shot.
    #[error("cell {0} was already shot")]
    CellAlreadyShot(Coordinate),
    /// Number of cells doesn't match the ship's hit points.
    #[error("cannot place {hp} HP ship onto {cells} cells")]
    ShipDoesntFitCells { hp: usize, cells: usize },
    /// Cells don't form one straight line without gaps.
    #[error("position is not a straight contiguous line")]
    InvalidPosition,
    /// Ship would touch another one while the no-adjacent-ships rule is on.
    #[error("ships can't touch each other")]
    ShipsAdjacent,
    /// Roster has no item with this id or type.
    #[error("ship {0} is not in the roster")]
    ShipNotFound(String),
    /// Player already has every ship of this type the roster allows.
    #[error("only {limit} ships of type {kind} are allowed")]
    ShipLimitExceeded { kind: String, limit: usize },
    /// Autoplacer ran out of candidate positions.
    #[error("no room left for {0}")]
    CannotPlaceShip(String),
    /// More than one shot fired while salvo mode is off.
    #[error("salvo mode is off, expected a single shot, got {0}")]
    TooManyShots(usize),
    /// Salvo size doesn't match the number of ships alive.
    #[error("expected {expected} shots, got {actual}")]
    IncorrectShots { expected: usize, actual: usize },
    /// Fleets are still being arranged.
    #[error("fleets are not ready")]
    GameNotReady,
    /// Game is over.
    #[error("game has ended")]
    GameEnded,
    /// No player with this name takes part in the game.
    #[error("player {0} is not in this game")]
    PlayerNotFound(String),
    /// Firing order text doesn't name a known order.
    #[error("firing order {0:?} is invalid")]
    IncorrectFiringOrder(String),
    /// Salvo was fired on another move or by another player.
    #[error("salvo doesn't belong to the current move")]
    StaleSalvo,
    /// An event listener returned an error.
    #[error("event listener failed: {0}")]
    Listener(String),
}
