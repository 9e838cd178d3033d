use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    ai::TargetCaller,
    autoplacer::Autoplacer,
    common::Result,
    game::{Game, Salvo, Side},
    roster::RosterItem,
};

/// Computer opponent playing one side of a [`Game`].
#[derive(Debug, Clone)]
pub struct AiPlayer<R = SmallRng> {
    side: Side,
    autoplacer: Autoplacer<R>,
    target_caller: TargetCaller<R>,
}

impl AiPlayer<SmallRng> {
    /// Deterministic player: the same seed always plays the same game.
    pub fn with_seed(game: &Game, side: Side, seed: u64) -> Self {
        Self::with_rngs(
            game,
            side,
            SmallRng::seed_from_u64(seed),
            SmallRng::seed_from_u64(seed.wrapping_add(1)),
        )
    }

    #[cfg(feature = "std")]
    pub fn new(game: &Game, side: Side) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rngs(
            game,
            side,
            SmallRng::from_rng(&mut seed_rng),
            SmallRng::from_rng(&mut seed_rng),
        )
    }
}

impl<R: Rng> AiPlayer<R> {
    pub fn with_rngs(game: &Game, side: Side, placement_rng: R, targeting_rng: R) -> Self {
        let no_adjacent_ships = game.settings().no_adjacent_ships;
        let enemy = game.player(side.opponent()).board();
        Self {
            side,
            autoplacer: Autoplacer::with_rng(game.roster(), no_adjacent_ships, placement_rng),
            target_caller: TargetCaller::with_rng(enemy, no_adjacent_ships, targeting_rng),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn target_caller(&self) -> &TargetCaller<R> {
        &self.target_caller
    }

    /// Place every roster ship this side hasn't placed yet.
    pub fn arrange_fleet(&mut self, game: &mut Game) -> Result<()> {
        let items: Vec<RosterItem> = game.roster().iter().cloned().collect();
        for item in items {
            let placed = game.player(self.side).count_ships(&item.kind);
            if placed >= game.roster().count_kind(&item.kind) {
                continue;
            }
            let position = self.autoplacer.place(game.player(self.side).board(), &item.kind)?;
            game.add_ship(self.side, &position, &item.id)?;
        }
        Ok(())
    }

    /// Fire one salvo, learn from it and hand it to [`Game::turn`].
    pub fn play_move(&mut self, game: &mut Game) -> Result<Salvo> {
        let count = if game.salvo_mode() {
            game.ships_alive(self.side)
        } else {
            1
        };
        let enemy = self.side.opponent();
        let targets = self.target_caller.call_out(game.player(enemy).board(), count);
        let salvo = game.fire(&targets)?;
        self.target_caller
            .provide_feedback(game.player(enemy).board(), salvo.shots());
        game.turn(&salvo)?;
        Ok(salvo)
    }
}
