//! Demo data the dashboard starts with. Nothing here is persisted; every
//! restart begins from the same state.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    Booking, BookingStatus, ProfileDetails, Provider, TimeSlot, Transaction, TransactionKind,
    TransactionStatus,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .unwrap_or_default()
}

pub fn provider() -> Provider {
    Provider {
        id: "1".to_string(),
        name: "Mohit".to_string(),
        email: "mohit123@gmail.com".to_string(),
        phone: "+917893453214".to_string(),
        is_verified: false,
        is_online: false,
        wallet_balance: 1250.75,
    }
}

pub fn profile() -> ProfileDetails {
    ProfileDetails {
        address: "123 Business Street, City, State 12345".to_string(),
        bio: "Professional service provider with over 5 years of experience.".to_string(),
        specialties: vec![
            "Consultation".to_string(),
            "Advisory".to_string(),
            "Planning".to_string(),
        ],
        qualifications: vec![
            "Certified Professional".to_string(),
            "Industry Expert".to_string(),
        ],
        languages: vec!["English".to_string(), "Hindi".to_string()],
        experience: "5+ years".to_string(),
        rate: "₹75/hour".to_string(),
    }
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Sonu".to_string(),
            service_id: "s1".to_string(),
            service_name: "Consultation".to_string(),
            start_time: at(2024, 3, 21, 11),
            end_time: at(2024, 3, 21, 12),
            status: BookingStatus::Pending,
            price: 75.0,
        },
        Booking {
            id: "2".to_string(),
            customer_id: "c2".to_string(),
            customer_name: "Nitin".to_string(),
            service_id: "s2".to_string(),
            service_name: "Advisory Session".to_string(),
            start_time: at(2024, 3, 22, 14),
            end_time: at(2024, 3, 22, 15),
            status: BookingStatus::Accepted,
            price: 90.0,
        },
    ]
}

pub fn time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot {
            id: "1".to_string(),
            start_time: at(2024, 3, 20, 10),
            end_time: at(2024, 3, 20, 14),
            is_recurring: true,
            recurring_days: vec![1],
        },
        TimeSlot {
            id: "2".to_string(),
            start_time: at(2024, 3, 21, 9),
            end_time: at(2024, 3, 21, 12),
            is_recurring: false,
            recurring_days: vec![],
        },
        TimeSlot {
            id: "3".to_string(),
            start_time: at(2024, 3, 22, 14),
            end_time: at(2024, 3, 22, 17),
            is_recurring: true,
            recurring_days: vec![3, 5],
        },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![Transaction {
        id: "1".to_string(),
        amount: 75.0,
        kind: TransactionKind::Credit,
        description: "Payment for consultation".to_string(),
        timestamp: NaiveDate::from_ymd_opt(2024, 3, 19)
            .and_then(|d| d.and_hms_opt(15, 30, 0))
            .unwrap_or_default(),
        status: TransactionStatus::Completed,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_booking_ids_unique_and_windows_ordered() {
        let bookings = bookings();
        let ids: HashSet<_> = bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), bookings.len());
        assert!(bookings.iter().all(|b| b.start_time < b.end_time));
        assert!(bookings.iter().all(|b| b.price >= 0.0));
    }

    #[test]
    fn test_provider_starts_unverified_and_offline() {
        let p = provider();
        assert!(!p.is_verified);
        assert!(!p.is_online);
    }
}
