use axum::{Json, extract::State, response::IntoResponse};

use social_types::api::AccountRequest;

use crate::error::ApiError;
use crate::state::{AppState, run_blocking};

/// POST /register — 200 with the stored account, 409 on a taken username,
/// 400 on invalid fields.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = run_blocking(move || {
        state
            .accounts
            .register(req.username.as_deref(), req.password.as_deref())
    })
    .await?;

    Ok(Json(account))
}

/// POST /login — 200 with the account, 401 on any mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = run_blocking(move || {
        state
            .accounts
            .login(req.username.as_deref(), req.password.as_deref())
    })
    .await?;

    Ok(Json(account))
}
