use crate::hex::HexPosition;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the game core and its collaborators
#[derive(Debug, Error)]
pub enum GameError {
    /// A tile was added where one already sits (caller bug)
    #[error("a tile is already placed at {0}")]
    TileAlreadyPlaced(HexPosition),

    /// A tile without a position was handed to the grid
    #[error("tile has no board position")]
    TileNotPositioned,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds values the game cannot run with
    #[error("unusable config: {0}")]
    InvalidConfig(String),

    /// Drawing surface failure
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
