use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::session;
use crate::state::AppState;

// POST /api/auth/verify
#[derive(Deserialize)]
pub struct VerifyRequest {
    pub otp: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    token: String,
}

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let token = session::verify(&state, &body.otp)?;
    Ok(Json(VerifyResponse { token }))
}

// POST /api/auth/resend
pub async fn resend_otp() -> Json<serde_json::Value> {
    session::resend();
    Json(serde_json::json!({"ok": true}))
}

// POST /api/auth/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    session::check_auth(&state, &headers)?;
    session::logout(&state)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
