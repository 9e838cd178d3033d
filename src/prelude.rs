//! Commonly used types and utilities for ease of import.

pub use crate::roster::{classic, get_roster, russian};
pub use crate::{
    AiPlayer, Autoplacer, Board, Coordinate, Error, Event, EventKind, FiringOrder, Game,
    GameState, Roster, Salvo, Settings, Shot, Side, TargetCaller,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
