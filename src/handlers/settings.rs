use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use super::optional_body;
use crate::errors::AppError;
use crate::models::{SettingKey, Settings};
use crate::services::preferences;
use crate::services::session::check_auth;
use crate::state::{lock, AppState};

// GET /api/settings
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Settings>, AppError> {
    check_auth(&state, &headers)?;
    let settings = *lock(&state.settings)?;
    Ok(Json(settings))
}

// POST /api/settings/toggle
#[derive(Deserialize)]
pub struct ToggleRequest {
    pub setting: SettingKey,
}

pub async fn toggle_setting(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<Settings>, AppError> {
    check_auth(&state, &headers)?;

    let mut settings = lock(&state.settings)?;
    let value = settings.toggle(body.setting);
    tracing::debug!(setting = ?body.setting, value, "setting toggled");

    Ok(Json(*settings))
}

// POST /api/settings/save
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Settings>, AppError> {
    check_auth(&state, &headers)?;

    let settings = *lock(&state.settings)?;
    tracing::info!(
        email = settings.notifications.email,
        sms = settings.notifications.sms,
        push = settings.notifications.push,
        two_factor = settings.account.two_factor,
        privacy_mode = settings.account.privacy_mode,
        "saving settings"
    );

    Ok(Json(settings))
}

// POST /api/settings/theme
#[derive(Deserialize)]
pub struct ThemeRequest {
    pub dark_mode: Option<bool>,
}

/// Sets dark mode when a value is given, otherwise flips it. The new value is
/// written to the preferences store before it becomes visible.
pub async fn update_theme(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ThemeRequest>, JsonRejection>,
) -> Result<Json<Settings>, AppError> {
    check_auth(&state, &headers)?;
    let requested = optional_body(body)?.and_then(|b| b.dark_mode);

    let mut settings = lock(&state.settings)?;
    let dark_mode = requested.unwrap_or(!settings.dark_mode);

    {
        let db = lock(&state.db)?;
        preferences::store_dark_mode(&db, dark_mode)?;
    }
    settings.dark_mode = dark_mode;

    Ok(Json(*settings))
}
