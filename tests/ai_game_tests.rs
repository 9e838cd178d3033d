use battleship_engine::roster::{classic, russian};
use battleship_engine::{AiPlayer, FiringOrder, Game, GameState, Roster, Settings, Side};

fn play_out(roster: Roster, settings: Settings, seed_a: u64, seed_b: u64) -> Game {
    let mut game = Game::with_settings("Computer 1", "Computer 2", roster, settings);
    let mut ai_a = AiPlayer::with_seed(&game, Side::A, seed_a);
    let mut ai_b = AiPlayer::with_seed(&game, Side::B, seed_b);
    ai_a.arrange_fleet(&mut game).unwrap();
    assert_eq!(game.state(), GameState::ArrangeFleet);
    ai_b.arrange_fleet(&mut game).unwrap();
    assert_eq!(game.state(), GameState::Battle);

    let cells = (settings.width * settings.height) as u32;
    while !game.ended() {
        assert!(game.moves() <= 2 * cells, "game never ended");
        match game.actor().unwrap() {
            Side::A => ai_a.play_move(&mut game).unwrap(),
            Side::B => ai_b.play_move(&mut game).unwrap(),
        };
    }
    game
}

fn assert_finished(game: &Game) {
    let winner = game.winner().unwrap();
    assert_eq!(game.ships_alive(winner.opponent()), 0);
    assert!(game.ships_alive(winner) > 0);
}

#[test]
fn test_ai_vs_ai_game() {
    let game = play_out(classic(), Settings::default(), 123, 456);
    assert_finished(&game);
}

#[test]
fn test_ai_vs_ai_is_deterministic() {
    let first = play_out(classic(), Settings::default(), 5, 6);
    let second = play_out(classic(), Settings::default(), 5, 6);
    assert_eq!(first.winner(), second.winner());
    assert_eq!(first.moves(), second.moves());
    assert_eq!(
        first.player(Side::A).board(),
        second.player(Side::A).board()
    );
}

#[test]
fn test_ai_vs_ai_salvo_until_miss() {
    let settings = Settings {
        firing_order: FiringOrder::UntilMiss,
        salvo_mode: true,
        ..Settings::default()
    };
    for seed in 0..5 {
        let game = play_out(classic(), settings, seed, seed + 100);
        assert_finished(&game);
    }
}

#[test]
fn test_ai_vs_ai_no_adjacent_ships() {
    let settings = Settings {
        no_adjacent_ships: true,
        ..Settings::default()
    };
    let game = play_out(classic(), settings, 11, 12);
    assert_finished(&game);
    for side in [Side::A, Side::B] {
        let board = game.player(side).board();
        for ship in board.ships() {
            assert!(ship.position().iter().all(|&c| !board.has_adjacent_ship(c)));
        }
    }
}

#[test]
fn test_ai_arranges_double_roster() {
    let roster = &russian() + &russian();
    let settings = Settings {
        width: 16,
        height: 16,
        ..Settings::default()
    };
    let mut game = Game::with_settings("a", "b", roster, settings);
    AiPlayer::with_seed(&game, Side::A, 1)
        .arrange_fleet(&mut game)
        .unwrap();
    assert!(game.is_fleet_ready(Side::A));
    assert_eq!(game.ships(Side::A).len(), 20);
}
