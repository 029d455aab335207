use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Life budget used by the shipped catalog.
pub const DEFAULT_LIVES: u8 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Won,
    Lost,
    LivesLeft(u8),
}

impl core::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Won => f.write_str("You won!"),
            Self::Lost => f.write_str("Game over! You lost."),
            Self::LivesLeft(1) => f.write_str("1 life left. Choose wisely."),
            Self::LivesLeft(lives) => write!(f, "{} lives left.", lives),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    level: Level,
    marks: Array2<Mark>,
    mistakes: BTreeSet<Coord2>,
    initial_lives: u8,
    filled_count: CellCount,
}

impl PlayEngine {
    pub fn new(level: Level) -> Self {
        Self::with_lives(level, DEFAULT_LIVES)
    }

    pub fn with_lives(level: Level, lives: u8) -> Self {
        let size = level.size();
        Self {
            level,
            marks: Array2::default(size.to_nd_index()),
            mistakes: BTreeSet::new(),
            initial_lives: lives.max(1),
            filled_count: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn size(&self) -> Coord2 {
        self.level.size()
    }

    pub fn mark_at(&self, coords: Coord2) -> Mark {
        self.marks[coords.to_nd_index()]
    }

    pub fn is_mistake(&self, coords: Coord2) -> bool {
        self.mistakes.contains(&coords)
    }

    pub fn initial_lives(&self) -> u8 {
        self.initial_lives
    }

    pub fn lives(&self) -> u8 {
        let mistakes: u8 = self.mistakes.len().try_into().unwrap();
        self.initial_lives - mistakes
    }

    pub fn game_won(&self) -> bool {
        self.filled_count == self.level.black_count()
    }

    pub fn game_over(&self) -> bool {
        self.lives() == 0 || self.game_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.game_won() {
            GameStatus::Won
        } else if self.lives() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::LivesLeft(self.lives())
        }
    }

    pub fn fill(&mut self, coords: Coord2) -> FillOutcome {
        use FillOutcome::*;

        if !self.in_image(coords) || self.mistakes.contains(&coords) || self.game_over() {
            return NoChange;
        }

        match self.marks[coords.to_nd_index()] {
            Mark::Filled => NoChange,
            _ if self.level[coords].is_black() => {
                self.marks[coords.to_nd_index()] = Mark::Filled;
                self.filled_count += 1;
                if self.game_won() {
                    log::debug!("fill {:?}: picture completed", coords);
                    Won
                } else {
                    log::trace!("fill {:?}", coords);
                    Filled
                }
            }
            _ => {
                self.marks[coords.to_nd_index()] = Mark::Crossed;
                self.mistakes.insert(coords);
                log::debug!("fill {:?}: mistake, {} lives left", coords, self.lives());
                if self.lives() == 0 { Lost } else { Mistake }
            }
        }
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        use Mark::*;
        use MarkOutcome::*;

        if !self.in_image(coords) || self.mistakes.contains(&coords) {
            return NoChange;
        }

        match self.marks[coords.to_nd_index()] {
            Filled => NoChange,
            Crossed => {
                self.marks[coords.to_nd_index()] = Empty;
                log::trace!("unmark {:?}", coords);
                Changed
            }
            Empty => {
                self.marks[coords.to_nd_index()] = Crossed;
                log::trace!("mark {:?}", coords);
                Changed
            }
        }
    }

    fn in_image(&self, coords: Coord2) -> bool {
        let size = self.level.size();
        coords.0 < size.0 && coords.1 < size.1
    }
}
