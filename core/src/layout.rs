use alloc::vec::Vec;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

/// Bold separator period used by the shipped catalog.
pub const DEFAULT_SUBGRID: Coord = 5;

bitflags! {
    /// Presentational border tags for one full-grid cell.
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Borders: u8 {
        const NO_LEFT     = 1;
        const NO_RIGHT    = 1 << 1;
        const NO_TOP      = 1 << 2;
        const NO_BOTTOM   = 1 << 3;
        const BOLD_LEFT   = 1 << 4;
        const BOLD_RIGHT  = 1 << 5;
        const BOLD_TOP    = 1 << 6;
        const BOLD_BOTTOM = 1 << 7;
    }
}

/// Mapping between the full grid (clue margins + image) and the image, with
/// the clues precomputed per row and column. Margins are just wide enough for
/// the longest clue on their axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    image_size: Coord2,
    top_margin: Coord,
    left_margin: Coord,
    subgrid: Coord,
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
}

impl GridLayout {
    pub fn new(level: &Level) -> Self {
        Self::with_subgrid(level, DEFAULT_SUBGRID)
    }

    pub fn with_subgrid(level: &Level, subgrid: Coord) -> Self {
        let rows = row_clues(level.cells());
        let cols = col_clues(level.cells());
        let left_margin = widest(&rows);
        let top_margin = widest(&cols);

        Self {
            image_size: level.size(),
            top_margin,
            left_margin,
            subgrid: subgrid.max(1),
            row_clues: rows,
            col_clues: cols,
        }
    }

    pub const fn image_size(&self) -> Coord2 {
        self.image_size
    }

    pub const fn top_margin(&self) -> Coord {
        self.top_margin
    }

    pub const fn left_margin(&self) -> Coord {
        self.left_margin
    }

    pub const fn subgrid(&self) -> Coord {
        self.subgrid
    }

    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    pub fn col_clues(&self) -> &[Clue] {
        &self.col_clues
    }

    pub fn full_size(&self) -> GridCoord2 {
        let (rows, cols) = self.image_size;
        (
            GridCoord::from(rows) + GridCoord::from(self.top_margin),
            GridCoord::from(cols) + GridCoord::from(self.left_margin),
        )
    }

    pub fn to_image(&self, (i, j): GridCoord2) -> Option<Coord2> {
        let row = i.checked_sub(self.top_margin.into())?;
        let col = j.checked_sub(self.left_margin.into())?;
        let (rows, cols) = self.image_size;

        if row < rows.into() && col < cols.into() {
            Some((row.try_into().unwrap(), col.try_into().unwrap()))
        } else {
            None
        }
    }

    pub fn borders(&self, (i, j): GridCoord2) -> Borders {
        let top_margin = GridCoord::from(self.top_margin);
        let left_margin = GridCoord::from(self.left_margin);
        let subgrid = GridCoord::from(self.subgrid);
        let mut tags = Borders::empty();

        // Margin cells omit the separators along their clue axis, except at
        // the image boundary and the outer edge.
        if j < left_margin {
            if j != left_margin - 1 {
                tags |= Borders::NO_RIGHT;
            }
            if j != 0 {
                tags |= Borders::NO_LEFT;
            }
        }
        if i < top_margin {
            if i != top_margin - 1 {
                tags |= Borders::NO_BOTTOM;
            }
            if i != 0 {
                tags |= Borders::NO_TOP;
            }
        }

        // Bold separators at the subgrid period, counted from the image
        // origin; margin rows and columns never close a subgrid block.
        if i == top_margin || i == 0 {
            tags |= Borders::BOLD_TOP;
        } else if let Some(row) = i.checked_sub(top_margin) {
            if row % subgrid == subgrid - 1 {
                tags |= Borders::BOLD_BOTTOM;
            }
        }
        if j == left_margin || j == 0 {
            tags |= Borders::BOLD_LEFT;
        } else if let Some(col) = j.checked_sub(left_margin) {
            if col % subgrid == subgrid - 1 {
                tags |= Borders::BOLD_RIGHT;
            }
        }

        tags
    }

    pub fn clue_at(&self, (i, j): GridCoord2) -> Option<Coord> {
        let top_margin = GridCoord::from(self.top_margin);
        let left_margin = GridCoord::from(self.left_margin);

        let in_top = i < top_margin;
        let in_left = j < left_margin;
        if in_top == in_left {
            return None;
        }

        if in_top {
            // Column clues are right-aligned against the image edge and read
            // from the end of the run list.
            let clues = self.col_clues.get(usize::from(j - left_margin))?;
            let clue_index = usize::from(top_margin - 1 - i);
            if clue_index < clues.len() {
                Some(clues[clues.len() - 1 - clue_index])
            } else {
                None
            }
        } else {
            // Row clues read from the front, nearest run first.
            let clues = self.row_clues.get(usize::from(i - top_margin))?;
            let clue_index = usize::from(left_margin - 1 - j);
            if clue_index < clues.len() {
                Some(clues[clue_index])
            } else {
                None
            }
        }
    }
}

fn widest(clues: &[Clue]) -> Coord {
    clues
        .iter()
        .map(|clue| clue.len())
        .max()
        .unwrap_or(0)
        .try_into()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        let level = Level::from_rows(
            "fixture",
            &[
                "#.#.#", //
                "##.#.", //
                ".....", //
                "#...#",
            ],
        )
        .unwrap();
        GridLayout::new(&level)
    }

    #[test]
    fn margins_fit_the_longest_clue() {
        let layout = layout();

        assert_eq!(layout.left_margin(), 3);
        assert_eq!(layout.top_margin(), 2);
        assert_eq!(layout.image_size(), (4, 5));
        assert_eq!(layout.full_size(), (6, 8));
        assert_eq!(layout.row_clues()[1].as_slice(), &[2, 1]);
        assert_eq!(layout.col_clues()[0].as_slice(), &[2, 1]);
    }

    #[test]
    fn image_coordinates_shift_by_the_margins() {
        let layout = layout();

        assert_eq!(layout.to_image((2, 3)), Some((0, 0)));
        assert_eq!(layout.to_image((5, 7)), Some((3, 4)));
        assert_eq!(layout.to_image((1, 3)), None);
        assert_eq!(layout.to_image((2, 2)), None);
        assert_eq!(layout.to_image((6, 3)), None);
        assert_eq!(layout.to_image((2, 8)), None);
    }

    #[test]
    fn column_clues_read_from_the_end_of_the_run_list() {
        let layout = layout();

        assert_eq!(layout.clue_at((1, 3)), Some(1));
        assert_eq!(layout.clue_at((0, 3)), Some(2));
        assert_eq!(layout.clue_at((0, 4)), None);
    }

    #[test]
    fn row_clues_read_from_the_front_of_the_run_list() {
        let layout = layout();

        assert_eq!(layout.clue_at((3, 2)), Some(2));
        assert_eq!(layout.clue_at((3, 1)), Some(1));
        assert_eq!(layout.clue_at((3, 0)), None);
    }

    #[test]
    fn corner_and_image_cells_carry_no_clue() {
        let layout = layout();

        assert_eq!(layout.clue_at((0, 0)), None);
        assert_eq!(layout.clue_at((1, 1)), None);
        assert_eq!(layout.clue_at((2, 3)), None);
        assert_eq!(layout.clue_at((1, 20)), None);
    }

    #[test]
    fn first_image_row_and_column_get_bold_edges() {
        let layout = layout();

        assert_eq!(layout.borders((2, 3)), Borders::BOLD_TOP | Borders::BOLD_LEFT);
    }

    #[test]
    fn outer_corner_keeps_its_outer_edges() {
        let layout = layout();

        assert_eq!(
            layout.borders((0, 0)),
            Borders::NO_RIGHT | Borders::NO_BOTTOM | Borders::BOLD_TOP | Borders::BOLD_LEFT
        );
    }

    #[test]
    fn inner_margin_cells_suppress_separators_along_the_clue_axis() {
        let layout = layout();

        assert_eq!(
            layout.borders((1, 1)),
            Borders::NO_LEFT | Borders::NO_RIGHT | Borders::NO_TOP
        );
    }

    #[test]
    fn subgrid_blocks_close_with_bold_edges() {
        let level = Level::from_rows(
            "fixture",
            &[
                "#.#.#", //
                "##.#.", //
                ".....", //
                "#...#",
            ],
        )
        .unwrap();
        let layout = GridLayout::with_subgrid(&level, 2);

        assert_eq!(
            layout.borders((3, 4)),
            Borders::BOLD_BOTTOM | Borders::BOLD_RIGHT
        );
    }

    #[test]
    fn subgrid_period_is_at_least_one() {
        let level = Level::from_rows("fixture", &["#"]).unwrap();
        let layout = GridLayout::with_subgrid(&level, 0);

        assert_eq!(layout.subgrid(), 1);
    }
}
