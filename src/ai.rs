// Hunt-and-target fire control.
// Only sees what a real opponent would: which cells were shot, and the ships
// revealed by its own hits.

use alloc::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng};
#[cfg(feature = "std")]
use rand::SeedableRng;

use crate::{board::Radar, coordinate::Coordinate, game::Shot};

/// Chooses cells to fire at.
///
/// Fires at random until something is hit, then works through the hit's
/// neighbours first-in first-out. With the no-adjacent-ships rule the ring
/// around a sunk ship is never targeted.
#[derive(Debug, Clone)]
pub struct TargetCaller<R = SmallRng> {
    width: usize,
    height: usize,
    no_adjacent_ships: bool,
    next_targets: VecDeque<Coordinate>,
    excluded: BTreeSet<Coordinate>,
    rng: R,
}

#[cfg(feature = "std")]
impl TargetCaller<SmallRng> {
    /// Target caller for `enemy`, seeded from the thread-local generator.
    pub fn new(enemy: &impl Radar, no_adjacent_ships: bool) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(enemy, no_adjacent_ships, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> TargetCaller<R> {
    pub fn with_rng(enemy: &impl Radar, no_adjacent_ships: bool, rng: R) -> Self {
        Self {
            width: enemy.width(),
            height: enemy.height(),
            no_adjacent_ships,
            next_targets: VecDeque::new(),
            excluded: BTreeSet::new(),
            rng,
        }
    }

    /// Pending targets, oldest first.
    pub fn next_targets(&self) -> impl Iterator<Item = &Coordinate> {
        self.next_targets.iter()
    }

    /// Cells known to be empty that won't be called out.
    pub fn excluded(&self) -> &BTreeSet<Coordinate> {
        &self.excluded
    }

    /// Up to `count` distinct cells to fire at: queued targets first, then
    /// random unshot cells.
    ///
    /// Returns fewer than `count` only when the board runs out of cells.
    pub fn call_out(&mut self, enemy: &impl Radar, count: usize) -> Vec<Coordinate> {
        let mut targets = Vec::with_capacity(count);

        while targets.len() < count {
            let Some(next) = self.next_targets.pop_front() else {
                break;
            };
            if !enemy.is_shot(next) && !targets.contains(&next) {
                targets.push(next);
            }
        }

        if targets.len() < count {
            let missing = count - targets.len();
            let random = self.random_targets(enemy, &targets, missing);
            targets.extend(random);
        }
        targets
    }

    fn random_targets(
        &mut self,
        enemy: &impl Radar,
        taken: &[Coordinate],
        count: usize,
    ) -> Vec<Coordinate> {
        let unshot: Vec<Coordinate> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Coordinate::new(x, y)))
            .filter(|&c| !enemy.is_shot(c) && !taken.contains(&c))
            .collect();
        let mut candidates: Vec<Coordinate> = unshot
            .iter()
            .copied()
            .filter(|c| !self.excluded.contains(c))
            .collect();
        // Excluded cells are only fired at once nothing else is left.
        if candidates.is_empty() {
            candidates = unshot;
        }
        candidates
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect()
    }

    /// Learn from the shots of a resolved salvo.
    pub fn provide_feedback(&mut self, enemy: &impl Radar, shots: &[Shot]) {
        for shot in shots {
            let Some(ship) = &shot.ship else {
                continue;
            };
            if ship.destroyed() {
                if self.no_adjacent_ships {
                    self.exclude_surroundings(enemy, ship.position());
                    self.next_targets.clear();
                }
            } else {
                self.enqueue_neighbours(enemy, shot.coordinate);
            }
        }
    }

    fn exclude_surroundings(&mut self, enemy: &impl Radar, position: &[Coordinate]) {
        for cell in position {
            for neighbour in cell.neighbours(self.width, self.height) {
                if !enemy.is_shot(neighbour) && !position.contains(&neighbour) {
                    self.excluded.insert(neighbour);
                }
            }
        }
    }

    fn enqueue_neighbours(&mut self, enemy: &impl Radar, coordinate: Coordinate) {
        for neighbour in coordinate.cardinal_neighbours(self.width, self.height) {
            if enemy.is_shot(neighbour)
                || self.next_targets.contains(&neighbour)
                || self.excluded.contains(&neighbour)
            {
                continue;
            }
            self.next_targets.push_back(neighbour);
        }
    }
}
