use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Level rows have unequal lengths")]
    MalformedLevel,
    #[error("Level has no rows or no columns")]
    EmptyLevel,
    #[error("Level dimensions exceed the coordinate range")]
    LevelTooLarge,
    #[error("Unrecognized cell symbol {0:?}")]
    UnknownCellSymbol(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
