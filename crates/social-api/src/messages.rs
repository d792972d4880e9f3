use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use social_core::Deletion;
use social_types::api::{CreateMessageQuery, CreateMessageRequest, UpdateMessageRequest};

use crate::error::ApiError;
use crate::state::{AppState, run_blocking};

/// POST /messages?userId={id}
///
/// The author comes from the `userId` query parameter, falling back to
/// `postedBy` in the body.
pub async fn create_message(
    State(state): State<AppState>,
    Query(query): Query<CreateMessageQuery>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let posted_by = req.author(&query).ok_or(ApiError::MissingAuthor)?;

    let message = run_blocking(move || {
        state
            .messages
            .create_message(req.message_text.as_deref(), posted_by, req.time_posted_epoch)
    })
    .await?;

    Ok(Json(message))
}

pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = run_blocking(move || state.messages.get_all_messages()).await?;
    Ok(Json(messages))
}

/// GET /messages/{message_id} — an absent message is a 200 with an empty body.
pub async fn get_message_by_id(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let message = run_blocking(move || state.messages.get_message_by_id(message_id)).await?;

    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// PATCH /messages/{message_id} — 200 with `1` rows updated, or 400 with `0`.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<Response, ApiError> {
    let result = run_blocking(move || {
        state
            .messages
            .update_message(message_id, req.message_text.as_deref())
    })
    .await;

    match result {
        Ok(_) => Ok(Json(1).into_response()),
        Err(ApiError::Core(err)) if err.is_rejection() => {
            warn!(message_id, error = %err, "Update rejected");
            Ok((StatusCode::BAD_REQUEST, Json(0)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// DELETE /messages/{message_id} — 200 with `1` when removed, 200 with an
/// empty body when there was nothing to remove.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = run_blocking(move || state.messages.delete_message(message_id)).await?;

    Ok(match outcome {
        Deletion::Deleted => Json(1).into_response(),
        Deletion::NotFound => StatusCode::OK.into_response(),
    })
}

/// GET /accounts/{account_id}/messages
pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = run_blocking(move || state.messages.get_messages_by_account(account_id)).await?;
    Ok(Json(messages))
}
