use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::optional_body;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::services::session::check_auth;
use crate::state::{lock, AppState};

// GET /api/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct BookingsResponse {
    revision: u64,
    bookings: Vec<Booking>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, AppError> {
    check_auth(&state, &headers)?;

    let status = match query.status.as_deref() {
        Some(raw) => Some(
            BookingStatus::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("unknown status: {raw}")))?,
        ),
        None => None,
    };

    let ledger = lock(&state.ledger)?;
    let bookings = match status {
        Some(status) => ledger.by_status(status),
        None => ledger.snapshot().as_ref().clone(),
    };

    Ok(Json(BookingsResponse {
        revision: ledger.revision(),
        bookings,
    }))
}

#[derive(Serialize)]
pub struct TransitionResponse {
    booking: Booking,
    revision: u64,
    bookings: Vec<Booking>,
}

// POST /api/bookings/:id/accept
#[derive(Deserialize)]
pub struct AcceptRequest {
    pub expected_revision: Option<u64>,
}

pub async fn accept_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<Json<AcceptRequest>, JsonRejection>,
) -> Result<Json<TransitionResponse>, AppError> {
    check_auth(&state, &headers)?;
    let expected_revision = optional_body(body)?.and_then(|b| b.expected_revision);

    let mut ledger = lock(&state.ledger)?;
    let booking = ledger.accept(&id, expected_revision)?;

    Ok(Json(TransitionResponse {
        booking,
        revision: ledger.revision(),
        bookings: ledger.snapshot().as_ref().clone(),
    }))
}

// POST /api/bookings/:id/reject
#[derive(Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
    pub expected_revision: Option<u64>,
}

pub async fn reject_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<RejectRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    check_auth(&state, &headers)?;

    let mut ledger = lock(&state.ledger)?;
    let booking = ledger.reject(&id, &body.reason, body.expected_revision)?;

    Ok(Json(TransitionResponse {
        booking,
        revision: ledger.revision(),
        bookings: ledger.snapshot().as_ref().clone(),
    }))
}
