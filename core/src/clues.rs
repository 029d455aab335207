use alloc::vec::Vec;
use ndarray::ArrayView2;
use smallvec::SmallVec;

use crate::*;

/// Run lengths of consecutive black cells along one row or column.
pub type Clue = SmallVec<[Coord; 8]>;

pub fn line_clues<'a>(line: impl IntoIterator<Item = &'a Cell>) -> Clue {
    let mut runs = Clue::new();
    let mut run: Coord = 0;

    for cell in line {
        if cell.is_black() {
            run += 1;
        } else if run != 0 {
            runs.push(run);
            run = 0;
        }
    }
    if run != 0 {
        runs.push(run);
    }

    runs
}

pub fn row_clues(grid: ArrayView2<Cell>) -> Vec<Clue> {
    grid.rows().into_iter().map(line_clues).collect()
}

pub fn col_clues(grid: ArrayView2<Cell>) -> Vec<Clue> {
    row_clues(grid.t())
}
