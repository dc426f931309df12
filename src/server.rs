use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::handlers::{health, journals, summarize, users};
use crate::inference::InferenceClient;
use crate::store::Store;
use crate::summary::SummaryService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub summaries: SummaryService,
}

impl AppState {
    pub fn new(store: Arc<Store>, inference: Arc<dyn InferenceClient>) -> Self {
        let summaries = SummaryService::new(store.clone(), inference);
        Self { store, summaries }
    }
}

// Request types

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalParams {
    pub id: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalPayload {
    pub title: Option<String>,
    pub mood: Option<String>,
    pub description: Option<String>,
    /// Clients send this as a number or a numeric string.
    #[serde(rename = "userId")]
    pub user_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterPayload {
    pub email: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/summarize", get(summarize::summarize))
        .route(
            "/api/journals",
            get(journals::list_journals)
                .post(journals::create_journal)
                .put(journals::update_journal)
                .delete(journals::delete_journal),
        )
        .route("/api/users", get(users::list_users).post(users::register_user))
        .with_state(state)
}

/// Parse an id sent as a query string value.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()
}

/// Parse an id sent in a JSON body, either as a number or a numeric string.
pub fn parse_json_id(raw: Option<&Value>) -> Option<i64> {
    match raw? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_id(Some(s.as_str())),
        _ => None,
    }
}
