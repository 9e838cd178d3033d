use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::common::{Error, Result};

/// Default board edge length.
pub const BOARD_SIZE: usize = 10;
/// Largest board edge: columns are labelled with a single letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Rule deciding when the turn passes to the other player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FiringOrder {
    /// Players swap after every salvo.
    #[default]
    Alternately,
    /// The actor keeps firing while every shot hits.
    UntilMiss,
}

impl FiringOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            FiringOrder::Alternately => "alternately",
            FiringOrder::UntilMiss => "until_miss",
        }
    }
}

impl fmt::Display for FiringOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FiringOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "alternately" => Ok(FiringOrder::Alternately),
            "until_miss" => Ok(FiringOrder::UntilMiss),
            _ => Err(Error::IncorrectFiringOrder(s.to_string())),
        }
    }
}

/// Per-game rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub firing_order: FiringOrder,
    /// One shot per ship alive instead of one shot per move.
    pub salvo_mode: bool,
    /// Forbid ships touching each other, diagonals included.
    pub no_adjacent_ships: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: BOARD_SIZE,
            height: BOARD_SIZE,
            firing_order: FiringOrder::default(),
            salvo_mode: false,
            no_adjacent_ships: false,
        }
    }
}
