use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::server::{parse_id, parse_json_id, AppState, JournalParams, JournalPayload};
use crate::types::NewJournal;

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Validate a create/update body. Every field is required and non-empty.
fn new_journal(payload: Result<Json<JournalPayload>, JsonRejection>) -> ApiResult<NewJournal> {
    let missing = || ApiError::Validation("Missing required fields".into());
    let Json(payload) = payload.map_err(|_| missing())?;

    Ok(NewJournal {
        user_id: parse_json_id(payload.user_id.as_ref()).ok_or_else(missing)?,
        title: non_empty(payload.title).ok_or_else(missing)?,
        mood: non_empty(payload.mood).ok_or_else(missing)?,
        description: non_empty(payload.description).ok_or_else(missing)?,
    })
}

pub async fn create_journal(
    State(state): State<AppState>,
    payload: Result<Json<JournalPayload>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let journal = new_journal(payload)?;
    let created = state
        .store
        .create_journal(&journal)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create journal"))?;

    tracing::info!(journal_id = created.id, user_id = created.user_id, "journal created");
    Ok(Json(json!({ "journal": created })))
}

pub async fn list_journals(
    State(state): State<AppState>,
    Query(params): Query<JournalParams>,
) -> ApiResult<Json<Value>> {
    let user_id = parse_id(params.user_id.as_deref())
        .ok_or_else(|| ApiError::Validation("User ID is required".into()))?;

    let journals = state
        .store
        .journals_for_user(user_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch journals"))?;
    Ok(Json(json!({ "journals": journals })))
}

pub async fn update_journal(
    State(state): State<AppState>,
    Query(params): Query<JournalParams>,
    payload: Result<Json<JournalPayload>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(params.id.as_deref())
        .ok_or_else(|| ApiError::Validation("Journal ID is required".into()))?;
    let journal = new_journal(payload)?;

    let updated = state
        .store
        .update_journal(id, &journal)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update journal"))?;

    tracing::info!(journal_id = id, "journal updated");
    Ok(Json(json!({ "journal": updated })))
}

pub async fn delete_journal(
    State(state): State<AppState>,
    Query(params): Query<JournalParams>,
) -> ApiResult<Json<Value>> {
    let (Some(id), Some(user_id)) = (
        parse_id(params.id.as_deref()),
        parse_id(params.user_id.as_deref()),
    ) else {
        return Err(ApiError::Validation(
            "Journal ID and User ID are required".into(),
        ));
    };

    state
        .store
        .delete_journal(id, user_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete journal"))?;

    tracing::info!(journal_id = id, user_id, "journal deleted");
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::server::test_support::{offline_state, send};

    #[tokio::test]
    async fn create_then_list() {
        let state = offline_state();
        let user = state.store.create_user("a@example.com").await.unwrap();

        let (status, body) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({
                "title": "Monday",
                "mood": "Hopeful",
                "description": "New week, new plans.",
                "userId": user.id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journal"]["title"], "Monday");
        assert_eq!(body["journal"]["userId"], user.id);
        assert!(body["journal"]["createdAt"].is_string());

        let (status, body) =
            send(&state, "GET", &format!("/api/journals?userId={}", user.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journals"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_accepts_string_user_id() {
        let state = offline_state();
        let user = state.store.create_user("a@example.com").await.unwrap();
        let (status, _) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({
                "title": "t", "mood": "m", "description": "d",
                "userId": user.id.to_string()
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn create_requires_every_field() {
        let state = offline_state();
        let (status, body) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({ "title": "t", "mood": "", "description": "d", "userId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));

        let (status, _) = send(&state, "POST", "/api/journals", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_server_error() {
        let state = offline_state();
        let (status, body) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({ "title": "t", "mood": "m", "description": "d", "userId": 77 })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to create journal" }));
    }

    #[tokio::test]
    async fn list_requires_user_id() {
        let state = offline_state();
        let (status, body) = send(&state, "GET", "/api/journals", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "User ID is required" }));
    }

    #[tokio::test]
    async fn update_enforces_ownership() {
        let state = offline_state();
        let owner = state.store.create_user("owner@example.com").await.unwrap();
        let other = state.store.create_user("other@example.com").await.unwrap();
        let (_, created) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({ "title": "t", "mood": "m", "description": "d", "userId": owner.id })),
        )
        .await;
        let id = created["journal"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &state,
            "PUT",
            "/api/journals",
            Some(json!({ "title": "t2", "mood": "m2", "description": "d2", "userId": owner.id })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Journal ID is required" }));

        let (status, body) = send(
            &state,
            "PUT",
            "/api/journals?id=999",
            Some(json!({ "title": "t2", "mood": "m2", "description": "d2", "userId": owner.id })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Journal not found" }));

        let (status, body) = send(
            &state,
            "PUT",
            &format!("/api/journals?id={}", id),
            Some(json!({ "title": "t2", "mood": "m2", "description": "d2", "userId": other.id })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let (status, body) = send(
            &state,
            "PUT",
            &format!("/api/journals?id={}", id),
            Some(json!({ "title": "t2", "mood": "m2", "description": "d2", "userId": owner.id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journal"]["title"], "t2");
        assert_eq!(body["journal"]["createdAt"], created["journal"]["createdAt"]);
    }

    #[tokio::test]
    async fn delete_flow() {
        let state = offline_state();
        let owner = state.store.create_user("owner@example.com").await.unwrap();
        let (_, created) = send(
            &state,
            "POST",
            "/api/journals",
            Some(json!({ "title": "t", "mood": "m", "description": "d", "userId": owner.id })),
        )
        .await;
        let id = created["journal"]["id"].as_i64().unwrap();

        let (status, body) = send(&state, "DELETE", &format!("/api/journals?id={}", id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Journal ID and User ID are required" }));

        let (status, _) = send(
            &state,
            "DELETE",
            &format!("/api/journals?id={}&userId={}", id, owner.id + 1),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(
            &state,
            "DELETE",
            &format!("/api/journals?id={}&userId={}", id, owner.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, _) = send(
            &state,
            "DELETE",
            &format!("/api/journals?id={}&userId={}", id, owner.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
