//! Cloud Firestore REST (v1) client for the `leaderboard` and `feedback`
//! collections.
//!
//! Reads go through `documents:runQuery` with a structured query; writes go
//! through `documents:commit` so the `timestamp` field can be set to the
//! server's request time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{Feedback, LeaderboardEntry, ScoreStore, StoredScore};
use crate::config::FirestoreConfig;
use crate::error::StoreError;

const API_ROOT: &str = "https://firestore.googleapis.com/v1";
const LEADERBOARD: &str = "leaderboard";
const FEEDBACK: &str = "feedback";
const AUTO_ID_LEN: usize = 20;

/// Typed Firestore field value, e.g. `{"integerValue": "10"}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Value {
    NullValue(()),
    BooleanValue(bool),
    StringValue(String),
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(DateTime<Utc>),
}

impl Value {
    fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_score(&self) -> Option<u32> {
        match self {
            Value::IntegerValue(s) => s.parse::<i64>().ok().map(|n| n.clamp(0, u32::MAX as i64) as u32),
            Value::DoubleValue(d) if d.is_finite() => Some(d.max(0.0) as u32),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    document: Option<Document>,
}

impl Document {
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn player_name(&self) -> String {
        self.fields.get("name").and_then(Value::as_str).unwrap_or_default().to_string()
    }

    fn score(&self) -> u32 {
        self.fields.get("score").and_then(Value::as_score).unwrap_or(0)
    }

    fn into_stored(self) -> StoredScore {
        StoredScore {
            id: self.id().to_string(),
            score: self.score(),
        }
    }

    fn into_entry(self) -> Result<LeaderboardEntry, StoreError> {
        let timestamp = match self.fields.get("timestamp") {
            Some(Value::TimestampValue(ts)) => *ts,
            _ => {
                return Err(StoreError::MissingField {
                    document: self.name,
                    field: "timestamp",
                });
            }
        };
        Ok(LeaderboardEntry {
            name: self.player_name(),
            score: self.score(),
            timestamp,
        })
    }
}

fn string_value(s: &str) -> serde_json::Value {
    json!({ "stringValue": s })
}

fn integer_value(n: u32) -> serde_json::Value {
    // Firestore encodes int64 as a JSON string.
    json!({ "integerValue": n.to_string() })
}

fn server_timestamp() -> serde_json::Value {
    json!([{ "fieldPath": "timestamp", "setToServerValue": "REQUEST_TIME" }])
}

fn top_query(limit: usize) -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": LEADERBOARD }],
            "orderBy": [
                { "field": { "fieldPath": "score" }, "direction": "DESCENDING" },
                { "field": { "fieldPath": "timestamp" }, "direction": "ASCENDING" }
            ],
            "limit": limit
        }
    })
}

fn by_name_query(name: &str) -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": LEADERBOARD }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "name" },
                    "op": "EQUAL",
                    "value": string_value(name)
                }
            },
            "limit": 1
        }
    })
}

fn auto_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(AUTO_ID_LEN)
        .map(char::from)
        .collect()
}

pub struct FirestoreStore {
    client: reqwest::Client,
    api_key: String,
    /// `projects/{project}/databases/{database}/documents`
    documents_path: String,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            documents_path: format!(
                "projects/{}/databases/{}/documents",
                config.project_id, config.database
            ),
        }
    }

    fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.documents_path)
    }

    fn create_write(&self, collection: &str, fields: serde_json::Value) -> serde_json::Value {
        json!({
            "update": { "name": self.document_name(collection, &auto_id()), "fields": fields },
            "updateTransforms": server_timestamp(),
            "currentDocument": { "exists": false }
        })
    }

    fn raise_write(&self, id: &str, score: u32) -> serde_json::Value {
        json!({
            "update": {
                "name": self.document_name(LEADERBOARD, id),
                "fields": { "score": integer_value(score) }
            },
            "updateMask": { "fieldPaths": ["score"] },
            "updateTransforms": server_timestamp(),
            "currentDocument": { "exists": true }
        })
    }

    async fn post(&self, method: &str, body: &serde_json::Value) -> Result<String, StoreError> {
        let url = format!("{API_ROOT}/{}:{method}", self.documents_path);
        debug!(%url, "firestore request");
        let resp = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), %text, "firestore request failed");
            return Err(StoreError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }

    async fn run_query(&self, query: &serde_json::Value) -> Result<Vec<Document>, StoreError> {
        let text = self.post("runQuery", query).await?;
        decode_query(&text)
    }

    async fn commit(&self, write: serde_json::Value) -> Result<(), StoreError> {
        self.post("commit", &json!({ "writes": [write] })).await.map(|_| ())
    }
}

/// A query with no matches still yields one element carrying only `readTime`.
fn decode_query(text: &str) -> Result<Vec<Document>, StoreError> {
    let results: Vec<QueryResult> = serde_json::from_str(text)?;
    Ok(results.into_iter().filter_map(|r| r.document).collect())
}

impl ScoreStore for FirestoreStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<StoredScore>, StoreError> {
        let docs = self.run_query(&by_name_query(name)).await?;
        Ok(docs.into_iter().next().map(Document::into_stored))
    }

    async fn create(&self, name: &str, score: u32) -> Result<(), StoreError> {
        let fields = json!({ "name": string_value(name), "score": integer_value(score) });
        self.commit(self.create_write(LEADERBOARD, fields)).await
    }

    async fn raise(&self, id: &str, score: u32) -> Result<(), StoreError> {
        self.commit(self.raise_write(id, score)).await
    }

    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let docs = self.run_query(&top_query(limit)).await?;
        docs.into_iter().map(Document::into_entry).collect()
    }

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), StoreError> {
        let fields = json!({
            "name": string_value(&feedback.name),
            "category": string_value(&feedback.category),
            "score": integer_value(feedback.score),
            "message": string_value(&feedback.message),
        });
        self.commit(self.create_write(FEEDBACK, fields)).await
    }
}
