use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern table entry {index} has an empty game id")]
    EmptyGameId { index: usize },

    #[error("duplicate game id in pattern table: {0}")]
    DuplicateGameId(String),

    #[error("game {game_id} has a blank {field}")]
    BlankTerm {
        game_id: String,
        field: &'static str,
    },

    #[error("unknown confidence: {0}")]
    UnknownConfidence(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("advisor error: {0}")]
    Advisor(anyhow::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("remix store lock poisoned")]
    StorePoisoned,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
