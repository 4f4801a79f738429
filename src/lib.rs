//! Emoji Guess core crate.
//!
//! Players pick a category and decode emoji sequences into titles against a
//! per-round countdown. The game rules live in plain Rust ([`GameSession`]
//! and the modules it drives) so they run under native tests; the browser
//! shell in `app` binds them to the page and the leaderboard store.

use wasm_bindgen::prelude::*;

mod app;
pub mod backdrop;
pub mod catalog;
pub mod clock;
pub mod config;
mod dom;
pub mod error;
pub mod leaderboard;
pub mod picker;
pub mod player;
pub mod scoring;
pub mod screen;
pub mod session;

pub use catalog::{Category, Puzzle};
pub use config::GameConfig;
pub use error::{GameError, StoreError};
pub use screen::{Action, Screen};
pub use session::{GameSession, GuessOutcome, HintOutcome, TickEvent};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}

/// Boots the game UI. `config_json` is an optional JSON object overriding
/// [`GameConfig`] defaults, e.g. `{"round_seconds": 45, "firestore": {...}}`.
#[wasm_bindgen]
pub fn start_game(config_json: Option<String>) -> Result<(), JsValue> {
    let config = GameConfig::from_json(config_json.as_deref())?;
    tracing::info!(round_seconds = config.round_seconds, remote = config.firestore.is_some(), "starting emoji guess");
    app::start(config)
}
