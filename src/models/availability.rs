use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A window in which the provider takes bookings. Recurring slots repeat on
/// `recurring_days`, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurring_days: Vec<u8>,
}

impl TimeSlot {
    pub fn day_names(&self) -> Vec<&'static str> {
        const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        self.recurring_days
            .iter()
            .filter_map(|d| NAMES.get(*d as usize).copied())
            .collect()
    }

    pub fn to_human_readable(&self) -> String {
        let window = format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        if self.is_recurring {
            format!("{}: {window}", self.day_names().join(", "))
        } else {
            format!("{}: {window}", self.start_time.format("%Y-%m-%d"))
        }
    }
}
