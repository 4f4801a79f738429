//! In-memory leaderboard, used when no remote store is configured and in tests.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use super::{Feedback, LeaderboardEntry, ScoreStore, StoredScore, rank};
use crate::error::StoreError;

#[derive(Clone, Debug)]
struct Row {
    id: String,
    entry: LeaderboardEntry,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<Row>>,
    feedback: RefCell<Vec<(Feedback, DateTime<Utc>)>>,
    next_id: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("local-{id}")
    }

    /// Inserts an entry with an explicit timestamp.
    pub fn seed(&self, name: &str, score: u32, timestamp: DateTime<Utc>) {
        let id = self.allocate_id();
        self.rows.borrow_mut().push(Row {
            id,
            entry: LeaderboardEntry { name: name.to_string(), score, timestamp },
        });
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.feedback.borrow().iter().map(|(f, _)| f.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl ScoreStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredScore>, StoreError> {
        Ok(self.rows.borrow().iter().find(|r| r.entry.name == name).map(|r| StoredScore {
            id: r.id.clone(),
            score: r.entry.score,
        }))
    }

    async fn create(&self, name: &str, score: u32) -> Result<(), StoreError> {
        self.seed(name, score, Utc::now());
        Ok(())
    }

    async fn raise(&self, id: &str, score: u32) -> Result<(), StoreError> {
        if let Some(row) = self.rows.borrow_mut().iter_mut().find(|r| r.id == id) {
            row.entry.score = score;
            row.entry.timestamp = Utc::now();
        }
        Ok(())
    }

    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let mut entries: Vec<_> = self.rows.borrow().iter().map(|r| r.entry.clone()).collect();
        rank(&mut entries, limit);
        Ok(entries)
    }

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), StoreError> {
        self.feedback.borrow_mut().push((feedback.clone(), Utc::now()));
        Ok(())
    }
}
