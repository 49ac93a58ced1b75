use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Booking, BookingStatus};

/// How strictly the ledger treats `accepted` and `rejected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Every transition overwrites the status unconditionally.
    Permissive,
    /// Only `pending` bookings can be accepted or rejected.
    #[default]
    Guarded,
}

impl TransitionPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Some(TransitionPolicy::Permissive),
            "guarded" => Some(TransitionPolicy::Guarded),
            _ => None,
        }
    }

    pub fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Guarded => from == BookingStatus::Pending && to.is_terminal(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LedgerError {
    #[error("booking not found: {0}")]
    NotFound(String),

    #[error("booking {id} is {from}, cannot become {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("stale revision: expected {expected}, ledger is at {actual}")]
    Stale { expected: u64, actual: u64 },
}

/// Returns a new collection where the booking matching `id` is accepted.
/// An unknown id yields a value-equal copy of the input.
pub fn accept_in(bookings: &[Booking], id: &str) -> Vec<Booking> {
    set_status_in(bookings, id, BookingStatus::Accepted)
}

/// Like [`accept_in`], setting `rejected`.
pub fn reject_in(bookings: &[Booking], id: &str) -> Vec<Booking> {
    set_status_in(bookings, id, BookingStatus::Rejected)
}

/// Only the first record with a matching id changes, the same one `get` finds.
fn set_status_in(bookings: &[Booking], id: &str, status: BookingStatus) -> Vec<Booking> {
    let mut matched = false;
    bookings
        .iter()
        .map(|b| {
            if !matched && b.id == id {
                matched = true;
                b.with_status(status)
            } else {
                b.clone()
            }
        })
        .collect()
}

/// Ordered booking collection. Each transition swaps in a fresh snapshot, so
/// an `Arc` handed out by [`BookingLedger::snapshot`] never changes.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    bookings: Arc<Vec<Booking>>,
    policy: TransitionPolicy,
    revision: u64,
}

impl BookingLedger {
    pub fn new(bookings: Vec<Booking>, policy: TransitionPolicy) -> Self {
        Self {
            bookings: Arc::new(bookings),
            policy,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Arc<Vec<Booking>> {
        Arc::clone(&self.bookings)
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn by_status(&self, status: BookingStatus) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.status == status)
            .cloned()
            .collect()
    }

    pub fn starting_on(&self, date: NaiveDate) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.start_time.date() == date)
            .cloned()
            .collect()
    }

    pub fn starting_after(&self, instant: NaiveDateTime) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.start_time > instant)
            .cloned()
            .collect()
    }

    pub fn accept(
        &mut self,
        id: &str,
        expected_revision: Option<u64>,
    ) -> Result<Booking, LedgerError> {
        let booking = self.transition(id, BookingStatus::Accepted, expected_revision)?;
        tracing::info!(booking_id = %id, revision = self.revision, "booking accepted");
        Ok(booking)
    }

    /// The reason is logged and then dropped; it is not kept on the record.
    pub fn reject(
        &mut self,
        id: &str,
        reason: &str,
        expected_revision: Option<u64>,
    ) -> Result<Booking, LedgerError> {
        let booking = self.transition(id, BookingStatus::Rejected, expected_revision)?;
        tracing::info!(
            booking_id = %id,
            reason = %reason,
            revision = self.revision,
            "booking rejected"
        );
        Ok(booking)
    }

    fn transition(
        &mut self,
        id: &str,
        to: BookingStatus,
        expected_revision: Option<u64>,
    ) -> Result<Booking, LedgerError> {
        if let Some(expected) = expected_revision {
            if expected != self.revision {
                return Err(LedgerError::Stale {
                    expected,
                    actual: self.revision,
                });
            }
        }

        let from = self
            .get(id)
            .map(|b| b.status)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        if !self.policy.allows(from, to) {
            tracing::warn!(booking_id = %id, %from, %to, "transition refused");
            return Err(LedgerError::InvalidTransition {
                id: id.to_string(),
                from,
                to,
            });
        }

        let next = set_status_in(&self.bookings, id, to);
        self.bookings = Arc::new(next);
        self.revision += 1;

        self.get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            customer_id: format!("c{id}"),
            customer_name: format!("Customer {id}"),
            service_id: format!("s{id}"),
            service_name: "Consultation".to_string(),
            start_time: dt("2024-03-21 11:00"),
            end_time: dt("2024-03-21 12:00"),
            status,
            price: 75.0,
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("1", BookingStatus::Pending),
            booking("2", BookingStatus::Accepted),
        ]
    }

    // ── Pure helpers ──

    #[test]
    fn test_accept_in_changes_only_target() {
        let before = sample();
        let after = accept_in(&before, "1");
        assert_eq!(after[0].status, BookingStatus::Accepted);
        assert_eq!(after[0], before[0].with_status(BookingStatus::Accepted));
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn test_reject_in_unknown_id_is_noop() {
        let before = sample();
        assert_eq!(reject_in(&before, "9"), before);
        assert_eq!(accept_in(&before, "9"), before);
    }

    #[test]
    fn test_accept_in_twice_is_idempotent() {
        let once = accept_in(&sample(), "1");
        let twice = accept_in(&once, "1");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reject_in_overwrites_accepted() {
        let after = reject_in(&sample(), "2");
        assert_eq!(after[1].status, BookingStatus::Rejected);
        assert_eq!(after[0].status, BookingStatus::Pending);
    }

    #[test]
    fn test_duplicate_ids_change_only_first_match() {
        let mut bookings = sample();
        bookings.push(booking("1", BookingStatus::Pending));

        let after = accept_in(&bookings, "1");
        assert_eq!(after[0].status, BookingStatus::Accepted);
        assert_eq!(after[2].status, BookingStatus::Pending);

        let mut ledger = BookingLedger::new(bookings, TransitionPolicy::Guarded);
        ledger.reject("1", "no-show", None).unwrap();
        let snap = ledger.snapshot();
        assert_eq!(snap[0].status, BookingStatus::Rejected);
        assert_eq!(snap[2].status, BookingStatus::Pending);
    }

    // ── Permissive ledger ──

    #[test]
    fn test_permissive_reject_accepted_booking() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Permissive);
        let b = ledger.reject("2", "double-booked", None).unwrap();
        assert_eq!(b.status, BookingStatus::Rejected);
        assert_eq!(ledger.snapshot()[0].status, BookingStatus::Pending);
    }

    #[test]
    fn test_permissive_accept_twice() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Permissive);
        ledger.accept("1", None).unwrap();
        let first = ledger.snapshot();
        ledger.accept("1", None).unwrap();
        assert_eq!(*first, *ledger.snapshot());
    }

    #[test]
    fn test_reason_does_not_affect_result() {
        let mut a = BookingLedger::new(sample(), TransitionPolicy::Permissive);
        let mut b = BookingLedger::new(sample(), TransitionPolicy::Permissive);
        a.reject("1", "no-show", None).unwrap();
        b.reject("1", "", None).unwrap();
        assert_eq!(*a.snapshot(), *b.snapshot());
    }

    // ── Guarded ledger ──

    #[test]
    fn test_guarded_accept_pending() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Guarded);
        ledger.accept("1", None).unwrap();
        let snap = ledger.snapshot();
        assert_eq!(snap[0].status, BookingStatus::Accepted);
        assert_eq!(snap[1].status, BookingStatus::Accepted);
        assert_eq!(ledger.revision(), 1);
    }

    #[test]
    fn test_guarded_refuses_terminal_transition() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Guarded);
        let err = ledger.reject("2", "double-booked", None).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidTransition {
                id: "2".to_string(),
                from: BookingStatus::Accepted,
                to: BookingStatus::Rejected,
            }
        );
        assert_eq!(*ledger.snapshot(), sample());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn test_guarded_second_accept_loses() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Guarded);
        assert!(ledger.accept("1", None).is_ok());
        assert!(matches!(
            ledger.reject("1", "late", None),
            Err(LedgerError::InvalidTransition { .. })
        ));
        assert_eq!(ledger.get("1").unwrap().status, BookingStatus::Accepted);
    }

    // ── Shared behaviour ──

    #[test]
    fn test_unknown_id_not_found_and_unchanged() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Guarded);
        let err = ledger.reject("9", "no-show", None).unwrap_err();
        assert_eq!(err, LedgerError::NotFound("9".to_string()));
        assert_eq!(*ledger.snapshot(), sample());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn test_stale_revision_refused() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Permissive);
        ledger.accept("1", Some(0)).unwrap();
        let err = ledger.reject("2", "x", Some(0)).unwrap_err();
        assert_eq!(err, LedgerError::Stale { expected: 0, actual: 1 });
        assert_eq!(ledger.get("2").unwrap().status, BookingStatus::Accepted);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_transition() {
        let mut ledger = BookingLedger::new(sample(), TransitionPolicy::Guarded);
        let before = ledger.snapshot();
        ledger.accept("1", None).unwrap();
        assert_eq!(before[0].status, BookingStatus::Pending);
        assert_eq!(ledger.snapshot()[0].status, BookingStatus::Accepted);
    }

    #[test]
    fn test_filters() {
        let mut bookings = sample();
        bookings[1].start_time = dt("2024-03-22 14:00");
        let ledger = BookingLedger::new(bookings, TransitionPolicy::Guarded);

        assert_eq!(ledger.by_status(BookingStatus::Pending).len(), 1);
        assert_eq!(
            ledger
                .starting_on(NaiveDate::from_ymd_opt(2024, 3, 22).unwrap())
                .len(),
            1
        );
        assert_eq!(ledger.starting_after(dt("2024-03-21 11:00")).len(), 1);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(TransitionPolicy::parse("Permissive"), Some(TransitionPolicy::Permissive));
        assert_eq!(TransitionPolicy::parse("guarded"), Some(TransitionPolicy::Guarded));
        assert_eq!(TransitionPolicy::parse("strict"), None);
    }
}
