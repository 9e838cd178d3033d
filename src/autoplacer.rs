//! Random fleet arrangement for computer players.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};
#[cfg(feature = "std")]
use rand::SeedableRng;

use crate::{
    board::Board,
    common::{Error, Result},
    coordinate::{Coordinate, Direction},
    roster::Roster,
};

/// Finds legal positions for ships on a board.
///
/// Every free cell is tried as a starting point in every direction, both in
/// shuffled order, and the first straight run that fits is returned. The
/// search always terminates but may miss a position on a crowded board.
#[derive(Debug, Clone)]
pub struct Autoplacer<R = SmallRng> {
    hp_by_kind: BTreeMap<String, usize>,
    no_adjacent_ships: bool,
    rng: R,
}

#[cfg(feature = "std")]
impl Autoplacer<SmallRng> {
    /// Autoplacer seeded from the thread-local generator.
    pub fn new(roster: &Roster, no_adjacent_ships: bool) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(roster, no_adjacent_ships, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Autoplacer<R> {
    pub fn with_rng(roster: &Roster, no_adjacent_ships: bool, rng: R) -> Self {
        let hp_by_kind = roster
            .iter()
            .map(|item| (item.kind.clone(), item.hp))
            .collect();
        Self {
            hp_by_kind,
            no_adjacent_ships,
            rng,
        }
    }

    /// Pick a position on `board` for a ship of type `kind`.
    ///
    /// Fails with [`Error::ShipNotFound`] for a type the roster doesn't have
    /// and with [`Error::CannotPlaceShip`] when no candidate fits.
    pub fn place(&mut self, board: &Board, kind: &str) -> Result<Vec<Coordinate>> {
        let hp = *self
            .hp_by_kind
            .get(kind)
            .ok_or_else(|| Error::ShipNotFound(kind.to_string()))?;

        let mut starts: Vec<Coordinate> = board.empty_cells().map(|c| c.coordinate()).collect();
        starts.shuffle(&mut self.rng);
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);

        for &start in &starts {
            for &direction in &directions {
                let Some(run) = grow_run(board, start, direction, hp) else {
                    continue;
                };
                if self.no_adjacent_ships && run.iter().any(|&c| board.has_adjacent_ship(c)) {
                    continue;
                }
                return Ok(run);
            }
        }
        Err(Error::CannotPlaceShip(kind.to_string()))
    }
}

/// Straight run of `len` free cells from `start` towards `direction`.
fn grow_run(
    board: &Board,
    start: Coordinate,
    direction: Direction,
    len: usize,
) -> Option<Vec<Coordinate>> {
    let mut run = Vec::with_capacity(len);
    let mut next = Some(start);
    while run.len() < len {
        let coordinate = next?;
        if board.ship_at(coordinate).is_some() {
            return None;
        }
        run.push(coordinate);
        next = coordinate.step(direction, board.width(), board.height());
    }
    Some(run)
}
