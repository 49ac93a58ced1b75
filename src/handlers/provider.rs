use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ProfileDetails, ProfileUpdate, Provider, ProviderUpdate};
use crate::services::session::check_auth;
use crate::state::{lock, AppState};

// GET /api/provider
pub async fn get_provider(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Provider>, AppError> {
    check_auth(&state, &headers)?;
    let provider = lock(&state.provider)?.clone();
    Ok(Json(provider))
}

// POST /api/provider/online
pub async fn toggle_online(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Provider>, AppError> {
    check_auth(&state, &headers)?;

    let mut provider = lock(&state.provider)?;
    let online = provider.toggle_online();
    tracing::info!(online, "provider availability changed");

    Ok(Json(provider.clone()))
}

// GET /api/profile
#[derive(Serialize)]
pub struct ProfileResponse {
    provider: Provider,
    details: ProfileDetails,
}

fn profile_response(state: &AppState) -> Result<ProfileResponse, AppError> {
    Ok(ProfileResponse {
        provider: lock(&state.provider)?.clone(),
        details: lock(&state.profile)?.clone(),
    })
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, AppError> {
    check_auth(&state, &headers)?;
    Ok(Json(profile_response(&state)?))
}

// POST /api/profile
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub provider: Option<ProviderUpdate>,
    pub details: Option<ProfileUpdate>,
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    check_auth(&state, &headers)?;

    if let Some(update) = body.provider {
        lock(&state.provider)?.apply(update)?;
    }
    if let Some(update) = body.details {
        lock(&state.profile)?.apply(update);
    }
    tracing::info!("profile updated");

    Ok(Json(profile_response(&state)?))
}
