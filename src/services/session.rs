use axum::http::HeaderMap;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::{lock, AppState};

/// Checks the one-time code. On success the provider is marked verified and
/// a fresh session token replaces any previous one.
pub fn verify(state: &AppState, otp: &str) -> Result<String, AppError> {
    if otp != state.config.otp_code {
        tracing::warn!("otp verification failed");
        return Err(AppError::Unauthorized);
    }

    let token = Uuid::new_v4().to_string();
    *lock(&state.session)? = Some(token.clone());
    lock(&state.provider)?.is_verified = true;

    tracing::info!("provider verified");
    Ok(token)
}

pub fn resend() {
    tracing::info!("otp resend requested");
}

pub fn logout(state: &AppState) -> Result<(), AppError> {
    *lock(&state.session)? = None;
    lock(&state.provider)?.is_verified = false;
    tracing::info!("provider logged out");
    Ok(())
}

pub fn check_auth(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let token = auth.strip_prefix("Bearer ").unwrap_or("");

    let session = lock(&state.session)?;
    match session.as_deref() {
        Some(current) if !token.is_empty() && current == token => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
