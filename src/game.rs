//! Game state machine: fleet arrangement, battle, end.

use alloc::{string::ToString, vec::Vec};

use crate::{
    board::Board,
    common::{Error, Result},
    config::{FiringOrder, Settings},
    coordinate::{format_position, Coordinate},
    events::{Event, EventKind, Hooks},
    player::Player,
    roster::Roster,
    ship::Ship,
};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Lifecycle stage of a game. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    ArrangeFleet,
    Battle,
    End,
}

/// Outcome of striking one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub coordinate: Coordinate,
    /// Snapshot of the ship taken right after the hit; `None` on a miss.
    pub ship: Option<Ship>,
}

impl Shot {
    pub fn hit(&self) -> bool {
        self.ship.is_some()
    }

    /// The shot took the ship's last hit point.
    pub fn destroyed(&self) -> bool {
        self.ship.as_ref().is_some_and(Ship::destroyed)
    }
}

/// Shots fired by one `fire` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salvo {
    actor: Side,
    subject: Side,
    mv: u32,
    shots: Vec<Shot>,
}

impl Salvo {
    pub fn actor(&self) -> Side {
        self.actor
    }

    pub fn subject(&self) -> Side {
        self.subject
    }

    /// Move number the salvo was fired on.
    pub fn move_number(&self) -> u32 {
        self.mv
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Shot> {
        self.shots.iter()
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.shots.iter().filter(|s| s.hit()).count()
    }

    pub fn misses(&self) -> usize {
        self.len() - self.hits()
    }
}

impl<'a> IntoIterator for &'a Salvo {
    type Item = &'a Shot;
    type IntoIter = core::slice::Iter<'a, Shot>;

    fn into_iter(self) -> Self::IntoIter {
        self.shots.iter()
    }
}

/// Two players, a roster and the rules, driven through commands.
///
/// Player A always moves first once both fleets are ready.
#[derive(Debug)]
pub struct Game {
    player_a: Player,
    player_b: Player,
    roster: Roster,
    settings: Settings,
    state: GameState,
    actor: Option<Side>,
    winner: Option<Side>,
    moves: u32,
    hooks: Hooks,
}

impl Game {
    /// New game on default-sized boards.
    pub fn new(
        player_a: &str,
        player_b: &str,
        roster: Roster,
        firing_order: FiringOrder,
        salvo_mode: bool,
    ) -> Self {
        let settings = Settings {
            firing_order,
            salvo_mode,
            ..Settings::default()
        };
        Self::with_settings(player_a, player_b, roster, settings)
    }

    pub fn with_settings(
        player_a: &str,
        player_b: &str,
        roster: Roster,
        settings: Settings,
    ) -> Self {
        let board = Board::new(settings.width, settings.height);
        Self {
            player_a: Player::new(player_a, board.clone()),
            player_b: Player::new(player_b, board),
            roster,
            settings,
            state: GameState::ArrangeFleet,
            actor: None,
            winner: None,
            moves: 0,
            hooks: Hooks::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ended(&self) -> bool {
        self.state == GameState::End
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn firing_order(&self) -> FiringOrder {
        self.settings.firing_order
    }

    pub fn salvo_mode(&self) -> bool {
        self.settings.salvo_mode
    }

    /// Player on turn; `None` before the battle starts.
    pub fn actor(&self) -> Option<Side> {
        self.actor
    }

    /// Player under attack; `None` before the battle starts.
    pub fn subject(&self) -> Option<Side> {
        self.actor.map(Side::opponent)
    }

    /// Set once the game has ended.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Number of salvos resolved by `turn` so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::A => &mut self.player_a,
            Side::B => &mut self.player_b,
        }
    }

    pub fn player_by_name(&self, name: &str) -> Result<Side> {
        [Side::A, Side::B]
            .into_iter()
            .find(|&side| self.player(side).name() == name)
            .ok_or_else(|| Error::PlayerNotFound(name.to_string()))
    }

    pub fn ships_alive(&self, side: Side) -> usize {
        self.player(side).ships_alive()
    }

    pub fn ships(&self, side: Side) -> &[Ship] {
        self.player(side).ships()
    }

    /// Register `listener` for events of `kind`.
    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: FnMut(&Event<'_>) -> anyhow::Result<()> + Send + 'static,
    {
        self.hooks.register(kind, listener);
    }

    pub fn clear_hooks(&mut self) {
        self.hooks.clear();
    }

    /// Whether `side`'s placed ships match the roster by type and count.
    pub fn is_fleet_ready(&self, side: Side) -> bool {
        let player = self.player(side);
        player.ships().len() == self.roster.len()
            && self
                .roster
                .iter()
                .all(|item| player.count_ships(&item.kind) == self.roster.count_kind(&item.kind))
    }

    /// Place the ship described by roster item `roster_id` on `side`'s board.
    pub fn add_ship(&mut self, side: Side, position: &[Coordinate], roster_id: &str) -> Result<()> {
        let item = self
            .roster
            .get(roster_id)
            .ok_or_else(|| Error::ShipNotFound(roster_id.to_string()))?;
        let limit = self.roster.count_kind(&item.kind);
        if self.player(side).count_ships(&item.kind) >= limit {
            return Err(Error::ShipLimitExceeded {
                kind: item.kind.clone(),
                limit,
            });
        }
        let ship = Ship::from_item(item);

        let no_adjacent_ships = self.settings.no_adjacent_ships;
        let board = self.player_mut(side).board_mut();
        board.check_position(position, ship.max_hp())?;
        if no_adjacent_ships && position.iter().any(|&c| board.has_adjacent_ship(c)) {
            return Err(Error::ShipsAdjacent);
        }
        board.place_ship(position, ship)?;

        log::debug!(
            "{} placed {} at {}",
            self.player(side).name(),
            roster_id,
            format_position(position)
        );

        let fleet_ready = self.is_fleet_ready(side);
        let battle_starts = self.state == GameState::ArrangeFleet
            && self.is_fleet_ready(Side::A)
            && self.is_fleet_ready(Side::B);
        if battle_starts {
            self.state = GameState::Battle;
            self.actor = Some(Side::A);
            log::info!(
                "battle started: {} vs {}",
                self.player_a.name(),
                self.player_b.name()
            );
        }

        self.hooks.emit(&Event::ShipSpawned {
            player: side,
            roster_id,
            position,
            fleet_ready,
        })?;
        if fleet_ready {
            self.hooks.emit(&Event::FleetReady { player: side })?;
        }
        if battle_starts {
            self.hooks.emit(&Event::NextMove {
                actor: Side::A,
                subject: Side::B,
            })?;
        }
        Ok(())
    }

    /// Fire at the subject's board.
    ///
    /// Doesn't pass the turn or check for a winner; hand the salvo to
    /// [`Game::turn`] for that.
    pub fn fire(&mut self, positions: &[Coordinate]) -> Result<Salvo> {
        let actor = match (self.state, self.actor) {
            (GameState::End, _) => return Err(Error::GameEnded),
            (GameState::Battle, Some(actor)) => actor,
            _ => return Err(Error::GameNotReady),
        };
        let subject = actor.opponent();

        if self.settings.salvo_mode {
            let expected = self.player(actor).ships_alive();
            if positions.len() != expected {
                return Err(Error::IncorrectShots {
                    expected,
                    actual: positions.len(),
                });
            }
        } else if positions.len() != 1 {
            return Err(Error::TooManyShots(positions.len()));
        }

        let board = self.player(subject).board();
        for (i, &coordinate) in positions.iter().enumerate() {
            if board.cell(coordinate)?.is_shot() || positions[..i].contains(&coordinate) {
                return Err(Error::CellAlreadyShot(coordinate));
            }
        }

        let board = self.player_mut(subject).board_mut();
        let mut shots = Vec::with_capacity(positions.len());
        for &coordinate in positions {
            let ship = board.hit_cell(coordinate)?.cloned();
            shots.push(Shot { coordinate, ship });
        }

        let salvo = Salvo {
            actor,
            subject,
            mv: self.moves,
            shots,
        };
        log::debug!(
            "{} fired at {}: {} hit(s), {} miss(es)",
            self.player(actor).name(),
            format_position(positions),
            salvo.hits(),
            salvo.misses()
        );
        Ok(salvo)
    }

    /// Resolve a salvo returned by [`Game::fire`]: end the game or pass the
    /// turn according to the firing order.
    pub fn turn(&mut self, salvo: &Salvo) -> Result<()> {
        match self.state {
            GameState::End => return Err(Error::GameEnded),
            GameState::ArrangeFleet => return Err(Error::GameNotReady),
            GameState::Battle => {}
        }
        if self.actor != Some(salvo.actor) || salvo.mv != self.moves {
            return Err(Error::StaleSalvo);
        }
        self.moves += 1;

        if self.player(salvo.subject).ships_alive() == 0 {
            self.state = GameState::End;
            self.winner = Some(salvo.actor);
            log::info!(
                "game ended after {} moves, {} won",
                self.moves,
                self.player(salvo.actor).name()
            );
            return self.hooks.emit(&Event::GameEnded {
                winner: salvo.actor,
            });
        }

        let keep_turn = match self.settings.firing_order {
            FiringOrder::Alternately => false,
            FiringOrder::UntilMiss => salvo.iter().all(Shot::hit),
        };
        let actor = if keep_turn {
            salvo.actor
        } else {
            salvo.subject
        };
        self.actor = Some(actor);

        self.hooks.emit(&Event::NextMove {
            actor,
            subject: actor.opponent(),
        })
    }
}
