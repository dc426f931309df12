use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub mood: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Date as shown to users and to the model, e.g. `3/14/2025`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}

/// Fields a caller supplies when creating or updating a journal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJournal {
    pub user_id: i64,
    pub title: String,
    pub mood: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    Model,
    Fallback,
}

impl SummarySource {
    pub fn as_str(&self) -> &str {
        match self {
            SummarySource::Model => "model",
            SummarySource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
    pub generated_at: DateTime<Utc>,
    pub source: SummarySource,
}

impl SummaryResult {
    pub fn new(text: impl Into<String>, source: SummarySource) -> Self {
        Self {
            text: text.into(),
            generated_at: Utc::now(),
            source,
        }
    }
}
