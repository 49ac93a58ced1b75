use rusqlite::Connection;

use crate::db::queries;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Reads the stored theme. Anything missing or not a JSON boolean counts as
/// light mode.
pub fn load_dark_mode(conn: &Connection) -> anyhow::Result<bool> {
    let stored = queries::get_preference(conn, DARK_MODE_KEY)?;
    let dark_mode = match stored {
        Some(raw) => match serde_json::from_str::<bool>(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, raw = %raw, "ignoring malformed dark mode preference");
                false
            }
        },
        None => false,
    };
    Ok(dark_mode)
}

pub fn store_dark_mode(conn: &Connection, dark_mode: bool) -> anyhow::Result<()> {
    let raw = serde_json::to_string(&dark_mode)?;
    queries::set_preference(conn, DARK_MODE_KEY, &raw)?;
    tracing::debug!(dark_mode, "stored theme preference");
    Ok(())
}
