#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use clues::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use types::*;

mod cell;
mod clues;
mod engine;
mod error;
mod layout;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    title: String,
    solution: Array2<Cell>,
    black_count: CellCount,
}

impl Level {
    pub fn new(title: impl Into<String>, solution: Array2<Cell>) -> Result<Self> {
        let (height, width) = solution.dim();
        if height == 0 || width == 0 {
            return Err(GameError::EmptyLevel);
        }
        if height > usize::from(Coord::MAX) || width > usize::from(Coord::MAX) {
            return Err(GameError::LevelTooLarge);
        }

        let black_count = solution
            .iter()
            .filter(|cell| cell.is_black())
            .count()
            .try_into()
            .unwrap();

        Ok(Self {
            title: title.into(),
            solution,
            black_count,
        })
    }

    /// Builds a level from rows of text art, `'#'` for black and `'.'` for
    /// white. All rows must have the same length.
    pub fn from_rows(title: impl Into<String>, rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(GameError::EmptyLevel);
        }
        if height > usize::from(Coord::MAX) || width > usize::from(Coord::MAX) {
            return Err(GameError::LevelTooLarge);
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            let start = cells.len();
            for symbol in row.chars() {
                cells.push(match symbol {
                    '#' => Cell::Black,
                    '.' => Cell::White,
                    _ => return Err(GameError::UnknownCellSymbol(symbol)),
                });
            }
            if cells.len() - start != width {
                return Err(GameError::MalformedLevel);
            }
        }

        let solution =
            Array2::from_shape_vec((height, width), cells).map_err(|_| GameError::MalformedLevel)?;
        Self::new(title, solution)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.solution.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.solution.view()
    }

    pub fn black_count(&self) -> CellCount {
        self.black_count
    }
}

impl Index<Coord2> for Level {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.solution[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FillOutcome {
    NoChange,
    Filled,
    Mistake,
    Lost,
    Won,
}

impl FillOutcome {
    pub const fn has_update(self) -> bool {
        use FillOutcome::*;
        match self {
            NoChange => false,
            Filled => true,
            Mistake => true,
            Lost => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_parses_title_and_cells() {
        let level = Level::from_rows("dot", &["#.", ".#"]).unwrap();

        assert_eq!(level.title(), "dot");
        assert_eq!(level.size(), (2, 2));
        assert_eq!(level.black_count(), 2);
        assert_eq!(level[(0, 0)], Cell::Black);
        assert_eq!(level[(0, 1)], Cell::White);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Level::from_rows("bad", &["##", "#"]).unwrap_err(),
            GameError::MalformedLevel
        );
    }

    #[test]
    fn empty_art_is_rejected() {
        assert_eq!(Level::from_rows("bad", &[]).unwrap_err(), GameError::EmptyLevel);
        assert_eq!(
            Level::from_rows("bad", &["", ""]).unwrap_err(),
            GameError::EmptyLevel
        );
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(
            Level::from_rows("bad", &["#x"]).unwrap_err(),
            GameError::UnknownCellSymbol('x')
        );
    }

    #[test]
    fn oversized_grids_are_rejected() {
        let solution = Array2::default((1, usize::from(Coord::MAX) + 1));
        assert_eq!(
            Level::new("wide", solution).unwrap_err(),
            GameError::LevelTooLarge
        );
    }
}
