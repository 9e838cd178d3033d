//! Ship instances spawned from roster items.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::coordinate::{format_position, Coordinate};
use crate::roster::RosterItem;

/// A ship on a board.
///
/// Remaining hit points never increase and never drop below zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: String,
    kind: String,
    max_hp: usize,
    hp: usize,
    position: Vec<Coordinate>,
}

impl Ship {
    /// New, unplaced ship at full health.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, hp: usize) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            max_hp: hp,
            hp,
            position: Vec::new(),
        }
    }

    /// Spawn a ship from a roster template, keeping the item's id.
    pub fn from_item(item: &RosterItem) -> Self {
        Self::new(item.id.clone(), item.kind.clone(), item.hp)
    }

    /// Roster id this ship was spawned from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ship type, e.g. `"cruiser"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn max_hp(&self) -> usize {
        self.max_hp
    }

    pub fn hp(&self) -> usize {
        self.hp
    }

    pub fn destroyed(&self) -> bool {
        self.hp == 0
    }

    /// Cells occupied by the ship, sorted; empty until placed.
    pub fn position(&self) -> &[Coordinate] {
        &self.position
    }

    /// Take one hit point of damage.
    pub fn damage(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub(crate) fn set_position(&mut self, position: Vec<Coordinate>) {
        self.position = position;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: \"{}\", kind: \"{}\", hp: {}/{}, position: {} }}",
            self.id,
            self.kind,
            self.hp,
            self.max_hp,
            format_position(&self.position),
        )
    }
}
