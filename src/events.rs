//! Game events and the listener registry.
//!
//! Listeners run synchronously, on the caller's stack, in registration order.
//! The first listener error stops delivery and is returned to whoever issued
//! the command.

use alloc::{boxed::Box, format, vec::Vec};

use crate::common::{Error, Result};
use crate::coordinate::Coordinate;
use crate::game::Side;

/// Something that happened inside a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A ship landed on `player`'s board.
    ShipSpawned {
        player: Side,
        roster_id: &'a str,
        position: &'a [Coordinate],
        /// `player`'s fleet now matches the roster.
        fleet_ready: bool,
    },
    /// `player` has placed the whole fleet.
    FleetReady { player: Side },
    /// `actor` is to fire at `subject`.
    NextMove { actor: Side, subject: Side },
    GameEnded { winner: Side },
}

/// Discriminant of [`Event`], used to register listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ShipSpawned,
    FleetReady,
    NextMove,
    GameEnded,
}

impl Event<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ShipSpawned { .. } => EventKind::ShipSpawned,
            Event::FleetReady { .. } => EventKind::FleetReady,
            Event::NextMove { .. } => EventKind::NextMove,
            Event::GameEnded { .. } => EventKind::GameEnded,
        }
    }
}

/// Callback invoked for every event of the kind it was registered for.
pub type Listener = Box<dyn FnMut(&Event<'_>) -> anyhow::Result<()> + Send>;

/// Ordered listener registry.
#[derive(Default)]
pub struct Hooks {
    listeners: Vec<(EventKind, Listener)>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: EventKind, listener: F)
    where
        F: FnMut(&Event<'_>) -> anyhow::Result<()> + Send + 'static,
    {
        self.listeners.push((kind, Box::new(listener)));
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        let kind = event.kind();
        for (_, listener) in self.listeners.iter_mut().filter(|(k, _)| *k == kind) {
            listener(event).map_err(|err| Error::Listener(format!("{err:#}")))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hooks")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
