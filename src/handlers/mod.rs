pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod health;
pub mod provider;
pub mod settings;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::state::AppState;

/// Body for endpoints where the payload may be left out entirely. A request
/// without a JSON content type counts as "no body"; a JSON body that doesn't
/// parse is a validation error.
pub(crate) fn optional_body<T>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<Option<T>, AppError> {
    match body {
        Ok(Json(value)) => Ok(Some(value)),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(None),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_allow_any = state.config.cors_allow_any;

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/verify", post(auth::verify_otp))
        .route("/api/auth/resend", post(auth::resend_otp))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/availability", get(dashboard::get_availability))
        .route("/api/wallet", get(dashboard::get_wallet))
        .route("/api/bookings", get(bookings::list_bookings))
        .route("/api/bookings/:id/accept", post(bookings::accept_booking))
        .route("/api/bookings/:id/reject", post(bookings::reject_booking))
        .route("/api/provider", get(provider::get_provider))
        .route("/api/provider/online", post(provider::toggle_online))
        .route(
            "/api/profile",
            get(provider::get_profile).post(provider::update_profile),
        )
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings/toggle", post(settings::toggle_setting))
        .route("/api/settings/save", post(settings::save_settings))
        .route("/api/settings/theme", post(settings::update_theme))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_allow_any {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
