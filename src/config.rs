use std::env;

use crate::services::ledger::TransitionPolicy;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub otp_code: String,
    pub transition_policy: TransitionPolicy,
    pub cors_allow_any: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let transition_policy = match env::var("TRANSITION_POLICY") {
            Ok(raw) => TransitionPolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("unknown TRANSITION_POLICY {raw:?}, using guarded");
                TransitionPolicy::Guarded
            }),
            Err(_) => TransitionPolicy::Guarded,
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "providerdesk.db".to_string()),
            otp_code: env::var("OTP_CODE").unwrap_or_else(|_| "123456".to_string()),
            transition_policy,
            cors_allow_any: env::var("CORS_ALLOW_ANY")
                .ok()
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
