//! Board state: a grid of cells and the ships placed on it.

use alloc::{string::ToString, vec::Vec};
use core::fmt;

use crate::common::{Error, Result};
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::coordinate::{is_valid_position, Coordinate, Direction};
use crate::ship::Ship;

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coordinate: Coordinate,
    /// Index into the owning board's ship list.
    ship: Option<usize>,
    shot: bool,
}

impl Cell {
    fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ship: None,
            shot: false,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn is_shot(&self) -> bool {
        self.shot
    }
}

/// Read-only view of a board under attack.
///
/// Exposes dimensions and shot status only, never what sits in a cell.
pub trait Radar {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Whether `coordinate` has been fired at. Out-of-range cells count as shot.
    fn is_shot(&self, coordinate: Coordinate) -> bool;
}

/// A rectangular grid with its ships.
///
/// Every occupied cell points at exactly one ship and each ship covers a
/// straight contiguous run of `max_hp` cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE, BOARD_SIZE)
    }
}

impl Board {
    /// Create an empty `width` × `height` board.
    ///
    /// # Panics
    ///
    /// If either side is zero or wider than 26 cells.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&width) && (1..=MAX_BOARD_SIZE).contains(&height),
            "board size must be within 1..={MAX_BOARD_SIZE}, got {width}x{height}"
        );
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Coordinate::new(x, y))))
            .collect();
        Board {
            width,
            height,
            cells,
            ships: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// Parse a label and check it against the board size.
    pub fn parse(&self, label: &str) -> Result<Coordinate> {
        let coordinate = Coordinate::parse(label)?;
        self.check(coordinate)?;
        Ok(coordinate)
    }

    fn check(&self, coordinate: Coordinate) -> Result<()> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(Error::CellOutOfRange(coordinate.to_string()))
        }
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.y * self.width + coordinate.x
    }

    pub fn cell(&self, coordinate: Coordinate) -> Result<&Cell> {
        self.check(coordinate)?;
        Ok(&self.cells[self.index(coordinate)])
    }

    /// Ship occupying `coordinate`, if any.
    pub fn ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        if !self.contains(coordinate) {
            return None;
        }
        self.cells[self.index(coordinate)]
            .ship
            .map(|idx| &self.ships[idx])
    }

    /// Neighbour of `coordinate` in one cardinal direction.
    pub fn adjacent_cell(&self, coordinate: Coordinate, direction: Direction) -> Option<&Cell> {
        coordinate
            .step(direction, self.width, self.height)
            .map(|c| &self.cells[self.index(c)])
    }

    /// Whether a ship other than the one at `coordinate` touches it,
    /// diagonals included.
    pub fn has_adjacent_ship(&self, coordinate: Coordinate) -> bool {
        if !self.contains(coordinate) {
            return false;
        }
        let own = self.cells[self.index(coordinate)].ship;
        coordinate
            .neighbours(self.width, self.height)
            .into_iter()
            .filter_map(|c| self.cells[self.index(c)].ship)
            .any(|ship| Some(ship) != own)
    }

    /// Check that a ship of `hp` could go to `position`: right length,
    /// straight and gapless, inside the board, on free cells.
    pub fn check_position(&self, position: &[Coordinate], hp: usize) -> Result<()> {
        if position.len() != hp {
            return Err(Error::ShipDoesntFitCells {
                hp,
                cells: position.len(),
            });
        }
        is_valid_position(position)?;
        for &coordinate in position {
            if self.cell(coordinate)?.has_ship() {
                return Err(Error::CellTaken(coordinate));
            }
        }
        Ok(())
    }

    /// Put `ship` on every cell of `position`.
    ///
    /// All checks run before any cell is touched.
    pub fn place_ship(&mut self, position: &[Coordinate], mut ship: Ship) -> Result<&Ship> {
        self.check_position(position, ship.max_hp())?;

        let idx = self.ships.len();
        for &coordinate in position {
            let cell = self.index(coordinate);
            self.cells[cell].ship = Some(idx);
        }
        let mut sorted = position.to_vec();
        sorted.sort_unstable();
        ship.set_position(sorted);
        self.ships.push(ship);
        Ok(&self.ships[idx])
    }

    /// Shoot at `coordinate`, damaging the ship there if any.
    pub fn hit_cell(&mut self, coordinate: Coordinate) -> Result<Option<&Ship>> {
        let cell = self.cell(coordinate)?;
        if cell.is_shot() {
            return Err(Error::CellAlreadyShot(coordinate));
        }
        let idx = self.index(coordinate);
        self.cells[idx].shot = true;
        match self.cells[idx].ship {
            Some(ship) => {
                self.ships[ship].damage();
                Ok(Some(&self.ships[ship]))
            }
            None => Ok(None),
        }
    }

    /// Cells not yet fired at.
    pub fn unshot_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.shot)
    }

    /// Cells without a ship.
    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.ship.is_none())
    }
}

impl Radar for Board {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_shot(&self, coordinate: Coordinate) -> bool {
        !self.contains(coordinate) || self.cells[self.index(coordinate)].shot
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width, self.height)?;
        for y in 0..self.height {
            write!(f, "  {:>2} ", y + 1)?;
            for x in 0..self.width {
                let cell = &self.cells[y * self.width + x];
                let glyph = match (cell.ship.is_some(), cell.shot) {
                    (true, true) => 'X',
                    (true, false) => '#',
                    (false, true) => '*',
                    (false, false) => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
