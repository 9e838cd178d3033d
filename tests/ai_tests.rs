use std::collections::HashSet;

use battleship_engine::{
    parse_position, Board, Coordinate, Radar, Ship, Shot, TargetCaller,
};
use rand::{rngs::SmallRng, SeedableRng};

fn c(label: &str) -> Coordinate {
    label.parse().unwrap()
}

fn pos(labels: &[&str]) -> Vec<Coordinate> {
    parse_position(labels).unwrap()
}

fn caller(board: &Board, no_adjacent_ships: bool) -> TargetCaller {
    TargetCaller::with_rng(board, no_adjacent_ships, SmallRng::seed_from_u64(9))
}

fn strike(board: &mut Board, label: &str) -> Shot {
    let coordinate = c(label);
    let ship = board.hit_cell(coordinate).unwrap().cloned();
    Shot { coordinate, ship }
}

#[test]
fn test_hit_queues_cardinal_neighbours() {
    let mut board = Board::default();
    board
        .place_ship(&pos(&["B2", "B3", "B4", "B5"]), Ship::new("0", "battleship", 4))
        .unwrap();
    let mut ai = caller(&board, false);

    let shot = strike(&mut board, "B3");
    ai.provide_feedback(&board, &[shot]);
    let queued: Vec<Coordinate> = ai.next_targets().copied().collect();
    assert_eq!(queued, pos(&["B2", "B4", "C3", "A3"]));

    assert_eq!(ai.call_out(&board, 1), vec![c("B2")]);
    let queued: Vec<Coordinate> = ai.next_targets().copied().collect();
    assert_eq!(queued, pos(&["B4", "C3", "A3"]));
}

#[test]
fn test_miss_queues_nothing() {
    let mut board = Board::default();
    let mut ai = caller(&board, false);
    let shot = strike(&mut board, "E5");
    ai.provide_feedback(&board, &[shot]);
    assert_eq!(ai.next_targets().count(), 0);
}

#[test]
fn test_queued_cells_already_shot_are_skipped() {
    let mut board = Board::default();
    board
        .place_ship(&pos(&["B2", "B3", "B4"]), Ship::new("0", "cruiser", 3))
        .unwrap();
    let mut ai = caller(&board, false);
    let shot = strike(&mut board, "B3");
    ai.provide_feedback(&board, &[shot]);
    strike(&mut board, "B2");

    assert_eq!(ai.call_out(&board, 1), vec![c("B4")]);
}

#[test]
fn test_random_targets_unshot_and_distinct() {
    let mut board = Board::new(4, 4);
    for label in ["A1", "B1", "C1", "D1"] {
        board.hit_cell(c(label)).unwrap();
    }
    let mut ai = caller(&board, false);

    let targets = ai.call_out(&board, 5);
    assert_eq!(targets.len(), 5);
    let distinct: HashSet<Coordinate> = targets.iter().copied().collect();
    assert_eq!(distinct.len(), 5);
    assert!(targets.iter().all(|&t| !board.is_shot(t)));

    // only 12 cells are left
    assert_eq!(ai.call_out(&board, 20).len(), 12);
}

#[test]
fn test_sunk_ship_surroundings_excluded() {
    let mut board = Board::default();
    board
        .place_ship(&pos(&["B2", "B3"]), Ship::new("0", "destroyer", 2))
        .unwrap();
    let mut ai = caller(&board, true);

    let shot = strike(&mut board, "B2");
    ai.provide_feedback(&board, &[shot]);
    assert_eq!(ai.next_targets().count(), 4);

    let shot = strike(&mut board, "B3");
    ai.provide_feedback(&board, &[shot]);
    assert_eq!(ai.next_targets().count(), 0);

    let expected: HashSet<Coordinate> = pos(&[
        "A1", "B1", "C1", "A2", "C2", "A3", "C3", "A4", "B4", "C4",
    ])
    .into_iter()
    .collect();
    let excluded: HashSet<Coordinate> = ai.excluded().iter().copied().collect();
    assert_eq!(excluded, expected);

    for _ in 0..10 {
        for target in ai.call_out(&board, 3) {
            assert!(!expected.contains(&target), "{target} is next to a sunk ship");
        }
    }
}

#[test]
fn test_sunk_ship_without_rule_excludes_nothing() {
    let mut board = Board::default();
    board
        .place_ship(&pos(&["B2"]), Ship::new("0", "frigate", 1))
        .unwrap();
    let mut ai = caller(&board, false);
    let shot = strike(&mut board, "B2");
    assert!(shot.destroyed());
    ai.provide_feedback(&board, &[shot]);
    assert!(ai.excluded().is_empty());
    assert_eq!(ai.next_targets().count(), 0);
}

#[test]
fn test_falls_back_to_excluded_cells() {
    let mut board = Board::new(2, 1);
    board
        .place_ship(&pos(&["A1"]), Ship::new("0", "frigate", 1))
        .unwrap();
    let mut ai = caller(&board, true);
    let shot = strike(&mut board, "A1");
    ai.provide_feedback(&board, &[shot]);
    assert!(ai.excluded().contains(&c("B1")));
    assert_eq!(ai.call_out(&board, 1), vec![c("B1")]);
}
