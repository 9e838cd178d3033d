use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use battleship_engine::{
    init_logging, roster::get_roster, AiPlayer, Event, EventKind, FiringOrder, Game, Settings,
    Side,
};
use clap::Parser;
use serde::Serialize;

/// Play a computer vs computer game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for player A.
    seed_a: u64,
    /// Seed for player B.
    seed_b: u64,
    #[arg(long, default_value = "classic")]
    roster: String,
    /// Two of every ship.
    #[arg(long)]
    double: bool,
    #[arg(long, default_value = "alternately", value_parser = parse_firing_order)]
    firing_order: FiringOrder,
    /// One shot per ship alive.
    #[arg(long)]
    salvo: bool,
    #[arg(long)]
    no_adjacent_ships: bool,
    /// Give up after this many moves.
    #[arg(long, default_value_t = 1000)]
    max_moves: u32,
}

fn name_of(names: &[String; 2], side: Side) -> &str {
    match side {
        Side::A => &names[0],
        Side::B => &names[1],
    }
}

fn parse_firing_order(s: &str) -> Result<FiringOrder, String> {
    s.parse().map_err(|e: battleship_engine::Error| e.to_string())
}

#[derive(Serialize)]
struct Summary {
    roster: String,
    firing_order: FiringOrder,
    salvo_mode: bool,
    winner: Option<String>,
    moves: u32,
    shots: Shots,
}

#[derive(Serialize, Default)]
struct Shots {
    player_a: usize,
    player_b: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut roster =
        get_roster(&cli.roster).ok_or_else(|| anyhow!("unknown roster {:?}", cli.roster))?;
    if cli.double {
        let doubled = &roster + &roster;
        roster = doubled;
    }
    let settings = Settings {
        firing_order: cli.firing_order,
        salvo_mode: cli.salvo,
        no_adjacent_ships: cli.no_adjacent_ships,
        ..Settings::default()
    };
    let mut game = Game::with_settings("Computer 1", "Computer 2", roster, settings);

    let names = [Side::A, Side::B].map(|side| game.player(side).name().to_string());
    let next_move = names.clone();
    game.on(EventKind::FleetReady, move |event| {
        if let Event::FleetReady { player } = event {
            log::info!("{} is ready", name_of(&names, *player));
        }
        Ok(())
    });
    game.on(EventKind::NextMove, move |event| {
        if let Event::NextMove { actor, subject } = event {
            log::debug!(
                "{} aims at {}",
                name_of(&next_move, *actor),
                name_of(&next_move, *subject)
            );
        }
        Ok(())
    });
    let finished = Arc::new(Mutex::new(None::<Side>));
    let winner = Arc::clone(&finished);
    game.on(EventKind::GameEnded, move |event| {
        if let Event::GameEnded { winner: side } = event {
            *winner.lock().map_err(|_| anyhow!("winner slot poisoned"))? = Some(*side);
        }
        Ok(())
    });

    let mut ai_a = AiPlayer::with_seed(&game, Side::A, cli.seed_a);
    let mut ai_b = AiPlayer::with_seed(&game, Side::B, cli.seed_b);
    ai_a.arrange_fleet(&mut game)?;
    ai_b.arrange_fleet(&mut game)?;

    let mut shots = Shots::default();
    while !game.ended() {
        if game.moves() >= cli.max_moves {
            bail!("no winner after {} moves", cli.max_moves);
        }
        let salvo = match game.actor() {
            Some(Side::A) => ai_a.play_move(&mut game)?,
            Some(Side::B) => ai_b.play_move(&mut game)?,
            None => bail!("battle didn't start"),
        };
        for shot in salvo.shots() {
            log::debug!(
                "{} -> {}: {}",
                game.player(salvo.actor()).name(),
                shot.coordinate,
                match &shot.ship {
                    Some(ship) if ship.destroyed() => format!("{} sunk", ship.kind()),
                    Some(ship) => format!("{} hit", ship.kind()),
                    None => "miss".to_string(),
                }
            );
        }
        match salvo.actor() {
            Side::A => shots.player_a += salvo.len(),
            Side::B => shots.player_b += salvo.len(),
        }
    }

    let winner = *finished
        .lock()
        .map_err(|_| anyhow!("winner slot poisoned"))?;
    let winner = winner.map(|side| game.player(side).name().to_string());
    let summary = Summary {
        roster: game.roster().name().to_string(),
        firing_order: game.firing_order(),
        salvo_mode: game.salvo_mode(),
        winner,
        moves: game.moves(),
        shots,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
