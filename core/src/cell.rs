use serde::{Deserialize, Serialize};

/// Solution cell of a level picture.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    White,
    Black,
}

impl Cell {
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::White
    }
}

/// Player-visible annotation of an image cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    Filled,
    Crossed,
}

impl Mark {
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::Empty
    }
}
