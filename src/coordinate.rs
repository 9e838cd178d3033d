//! Grid addressing: `(x, y)` indices and their `A1`-style labels.

use alloc::{format, string::String, string::ToString, vec::Vec};
use core::{fmt, str::FromStr};

use crate::common::{Error, Result};
use crate::config::MAX_BOARD_SIZE;

/// Zero-based column (`x`) and row (`y`) of a cell.
///
/// Bounds are not part of the type; the [`Board`](crate::Board) checks them.
/// Ordering is column first, then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

/// One of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order hunting neighbours are queued.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Parse a label such as `a1` or `J10`.
    ///
    /// Only the shape is checked here. Row `0` and columns past `Z` can never
    /// exist on a board and are reported as [`Error::CellOutOfRange`].
    pub fn parse(label: &str) -> Result<Self> {
        let mut chars = label.chars();
        let col = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| Error::IncorrectCoordinate(label.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::IncorrectCoordinate(label.to_string()));
        }
        let row: usize = digits
            .parse()
            .map_err(|_| Error::CellOutOfRange(label.to_string()))?;
        if row == 0 {
            return Err(Error::CellOutOfRange(label.to_string()));
        }
        let x = (col.to_ascii_uppercase() as u8 - b'A') as usize;
        Ok(Self { x, y: row - 1 })
    }

    /// Human-readable label, e.g. `B7`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Neighbour one step away in `direction`, if it stays inside a
    /// `width` × `height` grid.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (x, y) = match direction {
            Direction::Up => (Some(self.x), self.y.checked_sub(1)),
            Direction::Down => (Some(self.x), Some(self.y + 1)),
            Direction::Right => (Some(self.x + 1), Some(self.y)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
        };
        match (x, y) {
            (Some(x), Some(y)) if x < width && y < height => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Cardinal neighbours inside the grid, in [`Direction::ALL`] order.
    pub fn cardinal_neighbours(&self, width: usize, height: usize) -> Vec<Self> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.step(d, width, height))
            .collect()
    }

    /// Up to eight surrounding cells, diagonals included.
    pub fn neighbours(&self, width: usize, height: usize) -> Vec<Self> {
        let mut out = Vec::with_capacity(8);
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let x = self.x.checked_add_signed(dx);
                let y = self.y.checked_add_signed(dy);
                if let (Some(x), Some(y)) = (x, y) {
                    if x < width && y < height {
                        out.push(Self { x, y });
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x < MAX_BOARD_SIZE {
            write!(f, "{}{}", (b'A' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "#{}:{}", self.x, self.y + 1)
        }
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse a list of labels into coordinates.
pub fn parse_position<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Coordinate>> {
    labels.iter().map(|l| Coordinate::parse(l.as_ref())).collect()
}

/// Check that `coordinates` form one horizontal or vertical line with no
/// gaps, in any input order.
///
/// `A2, A3, A4` is valid, `A2, A4, A5` is not; `B3, C3, D3` is valid,
/// `B3, C3, E3` is not.
pub fn is_valid_position(coordinates: &[Coordinate]) -> Result<()> {
    let mut sorted = coordinates.to_vec();
    sorted.sort_unstable();

    // None until the first pair fixes the axis; `Some(true)` is horizontal.
    let mut axis = None;
    for pair in sorted.windows(2) {
        let (curr, next) = (pair[0], pair[1]);
        let horizontal = next.y == curr.y && next.x == curr.x + 1;
        let vertical = next.x == curr.x && next.y == curr.y + 1;
        if !(horizontal || vertical) || *axis.get_or_insert(horizontal) != horizontal {
            return Err(Error::InvalidPosition);
        }
    }
    Ok(())
}

/// Format coordinates as a comma separated label list.
pub fn format_position(coordinates: &[Coordinate]) -> String {
    let labels: Vec<String> = coordinates.iter().map(Coordinate::label).collect();
    format!("[{}]", labels.join(", "))
}
