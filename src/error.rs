//! Error types shared by the game core and the leaderboard store.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::screen::{Action, Screen};

pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
    #[error("category \"{0}\" has no puzzles")]
    EmptyCategory(&'static str),
    #[error("no category selected")]
    NoCategory,
    #[error("no round in progress")]
    NoActiveRound,
    #[error("round already solved, waiting for the next puzzle")]
    RoundSolved,
    #[error("cannot {action:?} from the {from:?} screen")]
    InvalidTransition { from: Screen, action: Action },
    #[error("leaderboard can only be opened from the menu")]
    LeaderboardOnlyFromMenu,
    #[error("feedback message is empty")]
    EmptyFeedback,
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode store response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("document {document} is missing field \"{field}\"")]
    MissingField { document: String, field: &'static str },
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<StoreError> for JsValue {
    fn from(err: StoreError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
