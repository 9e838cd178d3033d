use battleship_engine::{roster::classic, Autoplacer, Board, Coordinate, Error, Radar, Ship};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let roster = classic();
    let mut autoplacer = Autoplacer::with_rng(&roster, false, SmallRng::seed_from_u64(seed));
    let mut board = Board::default();
    for item in &roster {
        let position = autoplacer.place(&board, &item.kind).unwrap();
        board.place_ship(&position, Ship::from_item(item)).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hit_cell_idempotent(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut board = random_board(seed);
        let coordinate = Coordinate::new(x, y);
        board.hit_cell(coordinate).unwrap();
        let after = board.clone();
        let err = board.hit_cell(coordinate).unwrap_err();
        prop_assert_eq!(err, Error::CellAlreadyShot(coordinate));
        prop_assert_eq!(board, after);
    }

    #[test]
    fn hp_never_grows(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let total: usize = board.ships().iter().map(Ship::max_hp).sum();
        prop_assert_eq!(total, classic().total_hp());

        let mut previous: Vec<usize> = board.ships().iter().map(Ship::hp).collect();
        for _ in 0..60 {
            let coordinate = Coordinate::new(rng.random_range(0..10), rng.random_range(0..10));
            let hit = match board.hit_cell(coordinate) {
                Ok(ship) => ship.is_some(),
                Err(err) => {
                    prop_assert_eq!(err, Error::CellAlreadyShot(coordinate));
                    continue;
                }
            };
            let current: Vec<usize> = board.ships().iter().map(Ship::hp).collect();
            let lost: usize = previous.iter().zip(&current).map(|(p, c)| p - c).sum();
            prop_assert_eq!(lost, usize::from(hit));
            previous = current;
        }
        for ship in board.ships() {
            let shot = ship.position().iter().filter(|&&c| board.is_shot(c)).count();
            prop_assert_eq!(ship.hp(), ship.max_hp() - shot);
        }
    }

    #[test]
    fn ships_never_overlap(seed in any::<u64>()) {
        let board = random_board(seed);
        let occupied = board.cells().filter(|c| c.has_ship()).count();
        prop_assert_eq!(occupied, classic().total_hp());
    }
}
