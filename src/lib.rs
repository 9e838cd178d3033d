#![cfg_attr(not(feature = "std"), no_std)]
//! Rules engine and computer opponent for a two-player fleet battle.
//!
//! A [`Game`] walks through fleet arrangement, battle and end. Ships are
//! placed with [`Game::add_ship`], salvos are fired with [`Game::fire`] and
//! resolved with [`Game::turn`]; listeners registered with [`Game::on`] hear
//! about every transition. [`Autoplacer`] and [`TargetCaller`] (wrapped
//! together in [`AiPlayer`]) play a side without human input.

extern crate alloc;

mod ai;
mod autoplacer;
mod board;
mod common;
mod config;
mod coordinate;
pub mod events;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
pub mod roster;
mod ship;

pub use ai::*;
pub use autoplacer::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use events::{Event, EventKind};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use roster::{Roster, RosterItem};
pub use ship::*;
