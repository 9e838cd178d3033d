use std::collections::HashSet;

use battleship_engine::roster::{classic, get_roster, rosters, russian};
use battleship_engine::{Roster, RosterItem, Ship};

#[test]
fn test_classic_roster() {
    let roster = classic();
    assert_eq!(roster.name(), "classic");
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.total_hp(), 17);
    assert_eq!(roster.get("0"), Some(&RosterItem::new("0", "carrier", 5)));
    assert_eq!(roster.get("4"), Some(&RosterItem::new("4", "destroyer", 2)));
    assert_eq!(roster.get("5"), None);
}

#[test]
fn test_russian_roster_counts() {
    let roster = russian();
    assert_eq!(roster.len(), 10);
    assert_eq!(roster.count_kind("frigate"), 4);
    assert_eq!(roster.count_kind("destroyer"), 3);
    assert_eq!(roster.count_kind("cruiser"), 2);
    assert_eq!(roster.count_kind("battleship"), 1);
}

#[test]
fn test_registry() {
    assert_eq!(get_roster("classic"), Some(classic()));
    assert_eq!(get_roster("russian"), Some(russian()));
    assert_eq!(get_roster("nope"), None);
    let names: Vec<String> = rosters().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["classic", "russian"]);
}

#[test]
fn test_double_roster_has_unique_ids() {
    let single = Roster::new("duo", [("ship", 2)]);
    let double = &single + &single;

    assert_eq!(double.name(), "duo+duo");
    assert_eq!(double.len(), 2);
    assert_eq!(double.count_kind("ship"), 2);
    let ids: Vec<&str> = double.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1"]);
}

#[test]
fn test_concatenation_preserves_order() {
    let combined = classic() + russian();
    assert_eq!(combined.len(), 15);
    let kinds: Vec<&str> = combined.iter().map(|item| item.kind.as_str()).collect();
    assert_eq!(
        &kinds[..6],
        ["carrier", "battleship", "cruiser", "submarine", "destroyer", "battleship"]
    );
    let ids: HashSet<&str> = combined.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), combined.len());
}

#[test]
fn test_ship_from_item_keeps_id() {
    let roster = classic();
    let item = roster.find_kind("submarine").unwrap();
    let mut ship = Ship::from_item(item);
    assert_eq!(ship.id(), "3");
    assert_eq!(ship.kind(), "submarine");
    assert_eq!(ship.hp(), 3);
    for _ in 0..5 {
        ship.damage();
    }
    assert_eq!(ship.hp(), 0);
    assert!(ship.destroyed());
    assert_eq!(ship.max_hp(), 3);
}
