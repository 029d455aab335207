/// Single coordinate axis used for image width, height, and positions.
pub type Coord = u8;

/// Count type used for cell totals and mistake counts.
pub type CellCount = u16;

/// Two-dimensional image coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Single coordinate axis of the full grid (margins + image). Wider than
/// `Coord` because clue margins extend the image plane.
pub type GridCoord = u16;

/// Two-dimensional full-grid coordinates `(row, col)`, margins included.
pub type GridCoord2 = (GridCoord, GridCoord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
