//! Fleet compositions.
//!
//! A [`Roster`] lists the ships each player has to place. Item ids are unique
//! inside a roster and are carried through to the spawned [`Ship`](crate::Ship),
//! so ships of the same type stay individually addressable.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::ops::Add;

/// Template for one ship of a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterItem {
    pub id: String,
    pub kind: String,
    pub hp: usize,
}

impl RosterItem {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, hp: usize) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            hp,
        }
    }
}

/// Named, ordered list of ship templates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    name: String,
    items: Vec<RosterItem>,
}

impl Roster {
    /// Build a roster from `(type, hp)` pairs; ids are the item indices.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        ships: impl IntoIterator<Item = (S, usize)>,
    ) -> Self {
        let items = ships
            .into_iter()
            .enumerate()
            .map(|(i, (kind, hp))| RosterItem::new(i.to_string(), kind, hp))
            .collect();
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[RosterItem] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RosterItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item with the given id.
    pub fn get(&self, id: &str) -> Option<&RosterItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First item of the given type.
    pub fn find_kind(&self, kind: &str) -> Option<&RosterItem> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// How many ships of `kind` the roster contains.
    pub fn count_kind(&self, kind: &str) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    /// Sum of hit points over the whole fleet.
    pub fn total_hp(&self) -> usize {
        self.items.iter().map(|item| item.hp).sum()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterItem;
    type IntoIter = core::slice::Iter<'a, RosterItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Concatenate two rosters, e.g. `classic + classic` for a double fleet.
///
/// Ids are renumbered in concatenated order so they stay unique.
impl Add for Roster {
    type Output = Roster;

    fn add(self, other: Roster) -> Roster {
        &self + &other
    }
}

impl Add<&Roster> for &Roster {
    type Output = Roster;

    fn add(self, other: &Roster) -> Roster {
        Roster::new(
            format!("{}+{}", self.name, other.name),
            self.items
                .iter()
                .chain(other.items.iter())
                .map(|item| (item.kind.clone(), item.hp)),
        )
    }
}

const CLASSIC: [(&str, usize); 5] = [
    ("carrier", 5),
    ("battleship", 4),
    ("cruiser", 3),
    ("submarine", 3),
    ("destroyer", 2),
];

const RUSSIAN: [(&str, usize); 10] = [
    ("battleship", 4),
    ("cruiser", 3),
    ("cruiser", 3),
    ("destroyer", 2),
    ("destroyer", 2),
    ("destroyer", 2),
    ("frigate", 1),
    ("frigate", 1),
    ("frigate", 1),
    ("frigate", 1),
];

/// Names of the built-in rosters.
pub const ROSTER_NAMES: [&str; 2] = ["classic", "russian"];

/// Carrier, battleship, cruiser, submarine, destroyer.
pub fn classic() -> Roster {
    Roster::new("classic", CLASSIC)
}

/// Ten ships from a four-decker down to four single-cell frigates.
pub fn russian() -> Roster {
    Roster::new("russian", RUSSIAN)
}

/// Built-in roster by name.
pub fn get_roster(name: &str) -> Option<Roster> {
    match name {
        "classic" => Some(classic()),
        "russian" => Some(russian()),
        _ => None,
    }
}

/// All built-in rosters.
pub fn rosters() -> Vec<Roster> {
    ROSTER_NAMES.iter().filter_map(|name| get_roster(name)).collect()
}
