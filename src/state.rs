use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{ProfileDetails, Provider, Settings, TimeSlot, Transaction};
use crate::services::ledger::BookingLedger;
use crate::services::{preferences, seed};

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub ledger: Mutex<BookingLedger>,
    pub provider: Mutex<Provider>,
    pub profile: Mutex<ProfileDetails>,
    pub settings: Mutex<Settings>,
    pub session: Mutex<Option<String>>,
    pub time_slots: Vec<TimeSlot>,
    pub transactions: Vec<Transaction>,
}

impl AppState {
    /// Builds state from the demo seed, restoring the stored theme.
    pub fn seeded(config: AppConfig, conn: Connection) -> anyhow::Result<Self> {
        let dark_mode = preferences::load_dark_mode(&conn)?;

        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
            ledger: Mutex::new(BookingLedger::new(
                seed::bookings(),
                config.transition_policy,
            )),
            config,
            provider: Mutex::new(seed::provider()),
            profile: Mutex::new(seed::profile()),
            settings: Mutex::new(Settings {
                dark_mode,
                ..Settings::default()
            }),
            session: Mutex::new(None),
            time_slots: seed::time_slots(),
            transactions: seed::transactions(),
        })
    }
}

pub fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("state lock poisoned")))
}
