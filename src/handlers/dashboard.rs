use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{TimeSlot, Transaction};
use crate::services::dashboard::{format_rupees, summarize, DashboardSummary};
use crate::services::session::check_auth;
use crate::state::{lock, AppState};

// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardSummary>, AppError> {
    check_auth(&state, &headers)?;

    let provider = lock(&state.provider)?.clone();
    let now = chrono::Local::now().naive_local();
    let ledger = lock(&state.ledger)?;

    Ok(Json(summarize(&provider, &ledger, now)))
}

// GET /api/availability
#[derive(Serialize)]
pub struct SlotResponse {
    #[serde(flatten)]
    slot: TimeSlot,
    summary: String,
}

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    check_auth(&state, &headers)?;

    let slots = state
        .time_slots
        .iter()
        .map(|slot| SlotResponse {
            summary: slot.to_human_readable(),
            slot: slot.clone(),
        })
        .collect();

    Ok(Json(slots))
}

// GET /api/wallet
#[derive(Serialize)]
pub struct WalletResponse {
    balance: f64,
    balance_display: String,
    transactions: Vec<Transaction>,
}

pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<WalletResponse>, AppError> {
    check_auth(&state, &headers)?;

    let balance = lock(&state.provider)?.wallet_balance;

    Ok(Json(WalletResponse {
        balance,
        balance_display: format_rupees(balance),
        transactions: state.transactions.clone(),
    }))
}
