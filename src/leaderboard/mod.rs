//! Leaderboard and feedback persistence.
//!
//! Scores are stored one document per player name. [`submit_score`] keeps
//! only a player's best: it creates the document on first submission and
//! afterwards overwrites it only with a strictly higher score. Listings are
//! ordered by score (highest first), ties broken by the earlier timestamp.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::StoreError;

mod firestore;
mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

pub const BANNER_PREFIX: &str = "Top Scores: ";
const ANONYMOUS_BANNER_NAME: &str = "Anon";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

/// A player's existing leaderboard document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredScore {
    pub id: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub name: String,
    pub category: String,
    pub score: u32,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Raised { previous: u32 },
    Kept { best: u32 },
}

/// Remote document store behind the leaderboard and feedback form.
#[allow(async_fn_in_trait)]
pub trait ScoreStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredScore>, StoreError>;
    async fn create(&self, name: &str, score: u32) -> Result<(), StoreError>;
    /// Overwrites the score of document `id` and refreshes its timestamp.
    async fn raise(&self, id: &str, score: u32) -> Result<(), StoreError>;
    /// Highest scores first, ties by earliest timestamp.
    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError>;
    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), StoreError>;
}

pub async fn submit_score<S: ScoreStore>(
    store: &S,
    name: &str,
    score: u32,
) -> Result<SubmitOutcome, StoreError> {
    let outcome = match store.find_by_name(name).await? {
        None => {
            store.create(name, score).await?;
            SubmitOutcome::Created
        }
        Some(existing) if score > existing.score => {
            store.raise(&existing.id, score).await?;
            SubmitOutcome::Raised { previous: existing.score }
        }
        Some(existing) => SubmitOutcome::Kept { best: existing.score },
    };
    match outcome {
        SubmitOutcome::Kept { best } => debug!(name, score, best, "score not high enough to update"),
        _ => info!(name, score, ?outcome, "score submitted"),
    }
    Ok(outcome)
}

/// Sorts in leaderboard order and truncates to `limit`.
pub fn rank(entries: &mut Vec<LeaderboardEntry>, limit: usize) {
    entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.timestamp.cmp(&b.timestamp)));
    entries.truncate(limit);
}

pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() { ANONYMOUS_BANNER_NAME } else { name }
}

pub fn banner_text(entries: &[LeaderboardEntry]) -> String {
    let body = entries
        .iter()
        .map(|e| format!("{}: {}", display_name(&e.name), e.score))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{BANNER_PREFIX}{body}")
}

/// Store selected by configuration: Firestore when configured, otherwise an
/// in-memory board that lives as long as the page.
pub enum Backend {
    Remote(FirestoreStore),
    Local(MemoryStore),
}

impl Backend {
    pub fn from_config(config: &GameConfig) -> Self {
        match &config.firestore {
            Some(fs) => {
                info!(project = %fs.project_id, "using firestore leaderboard");
                Backend::Remote(FirestoreStore::new(fs))
            }
            None => {
                info!("no firestore configured, leaderboard is local to this page");
                Backend::Local(MemoryStore::new())
            }
        }
    }
}

impl ScoreStore for Backend {
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredScore>, StoreError> {
        match self {
            Backend::Remote(s) => s.find_by_name(name).await,
            Backend::Local(s) => s.find_by_name(name).await,
        }
    }

    async fn create(&self, name: &str, score: u32) -> Result<(), StoreError> {
        match self {
            Backend::Remote(s) => s.create(name, score).await,
            Backend::Local(s) => s.create(name, score).await,
        }
    }

    async fn raise(&self, id: &str, score: u32) -> Result<(), StoreError> {
        match self {
            Backend::Remote(s) => s.raise(id, score).await,
            Backend::Local(s) => s.raise(id, score).await,
        }
    }

    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        match self {
            Backend::Remote(s) => s.top(limit).await,
            Backend::Local(s) => s.top(limit).await,
        }
    }

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), StoreError> {
        match self {
            Backend::Remote(s) => s.add_feedback(feedback).await,
            Backend::Local(s) => s.add_feedback(feedback).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, score: u32, secs: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn rank_orders_by_score_then_earliest() {
        let mut entries = vec![
            entry("late", 30, 200),
            entry("low", 10, 0),
            entry("early", 30, 100),
            entry("top", 50, 300),
        ];
        rank(&mut entries, 3);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["top", "early", "late"]);
    }

    #[test]
    fn banner_joins_entries() {
        let entries = vec![entry("Rowan", 40, 0), entry("", 12, 1)];
        assert_eq!(banner_text(&entries), "Top Scores: Rowan: 40 | Anon: 12");
        assert_eq!(banner_text(&[]), "Top Scores: ");
    }

    #[test]
    fn local_backend_without_firestore_config() {
        let backend = Backend::from_config(&GameConfig::default());
        assert!(matches!(backend, Backend::Local(_)));
    }
}
