use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{Booking, Provider};
use crate::services::ledger::BookingLedger;

const UPCOMING_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub provider_name: String,
    pub total_bookings: usize,
    pub todays_appointments: usize,
    pub total_earnings: f64,
    pub total_earnings_display: String,
    pub upcoming: Vec<Booking>,
}

pub fn format_rupees(amount: f64) -> String {
    format!("₹{amount:.2}")
}

pub fn summarize(
    provider: &Provider,
    ledger: &BookingLedger,
    now: NaiveDateTime,
) -> DashboardSummary {
    let todays_appointments = ledger.starting_on(now.date()).len();

    let mut upcoming = ledger.starting_after(now);
    upcoming.truncate(UPCOMING_LIMIT);

    DashboardSummary {
        provider_name: provider.name.clone(),
        total_bookings: ledger.snapshot().len(),
        todays_appointments,
        total_earnings: provider.wallet_balance,
        total_earnings_display: format_rupees(provider.wallet_balance),
        upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use crate::services::ledger::TransitionPolicy;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn provider() -> Provider {
        Provider {
            id: "1".to_string(),
            name: "Mohit".to_string(),
            email: "mohit123@gmail.com".to_string(),
            phone: "+917893453214".to_string(),
            is_verified: true,
            is_online: true,
            wallet_balance: 1250.75,
        }
    }

    fn booking(id: &str, start: &str) -> Booking {
        let start_time = dt(start);
        Booking {
            id: id.to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Sonu".to_string(),
            service_id: "s1".to_string(),
            service_name: "Consultation".to_string(),
            start_time,
            end_time: start_time + chrono::Duration::hours(1),
            status: BookingStatus::Pending,
            price: 75.0,
        }
    }

    fn ledger(bookings: Vec<Booking>) -> BookingLedger {
        BookingLedger::new(bookings, TransitionPolicy::Guarded)
    }

    #[test]
    fn test_counts_todays_appointments() {
        let bookings = vec![
            booking("1", "2024-03-21 08:00"),
            booking("2", "2024-03-21 16:00"),
            booking("3", "2024-03-22 10:00"),
        ];
        let summary = summarize(&provider(), &ledger(bookings), dt("2024-03-21 12:00"));
        assert_eq!(summary.total_bookings, 3);
        assert_eq!(summary.todays_appointments, 2);
    }

    #[test]
    fn test_upcoming_capped_at_three_in_order() {
        let bookings = vec![
            booking("past", "2024-03-20 10:00"),
            booking("a", "2024-03-22 10:00"),
            booking("b", "2024-03-23 10:00"),
            booking("c", "2024-03-24 10:00"),
            booking("d", "2024-03-25 10:00"),
        ];
        let summary = summarize(&provider(), &ledger(bookings), dt("2024-03-21 12:00"));
        let ids: Vec<_> = summary.upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_earnings_display() {
        let summary = summarize(&provider(), &ledger(vec![]), dt("2024-03-21 12:00"));
        assert_eq!(summary.total_earnings_display, "₹1250.75");
        assert_eq!(summary.todays_appointments, 0);
        assert!(summary.upcoming.is_empty());
    }
}
