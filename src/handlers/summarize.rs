use axum::{
    extract::{Query, State},
    Json,
};
use chrono::SecondsFormat;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::server::{parse_id, AppState, SummarizeParams};

/// `GET /api/summarize?userId=&query=` → `{ summary, lastUpdated }`.
pub async fn summarize(
    State(state): State<AppState>,
    Query(params): Query<SummarizeParams>,
) -> ApiResult<Json<Value>> {
    let user_id = parse_id(params.user_id.as_deref())
        .ok_or_else(|| ApiError::Validation("User ID is required".into()))?;

    let result = state
        .summaries
        .summarize(user_id, params.query.as_deref())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to generate summary"))?;

    Ok(Json(json!({
        "summary": result.text,
        "lastUpdated": result.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })))
}
