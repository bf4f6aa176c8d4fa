use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

use crate::model::{
    id::{ItemId, ReservationId, UserId},
    item::Category,
};

pub mod event;

/// A rental window, half-open: the start instant is included, the end
/// instant is not. A reservation ending exactly when another starts does
/// not overlap it, so back-to-back bookings are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl RentalPeriod {
    /// Builds a period, rejecting `start >= end` with `InvalidRange`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(AppError::InvalidRange)
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Two half-open ranges [s1, e1) and [s2, e2) overlap iff
    /// `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Whether a reservation in this status occupies its date range.
    /// Cancelled reservations free their range immediately.
    pub fn blocks_availability(self) -> bool {
        matches!(self, Self::Active | Self::Completed)
    }

    /// Validates a lifecycle transition. `Active` may move to `Cancelled`
    /// or `Completed`; both of those are terminal.
    pub fn ensure_transition(self, next: ReservationStatus) -> AppResult<()> {
        match (self, next) {
            (Self::Active, Self::Cancelled) | (Self::Active, Self::Completed) => Ok(()),
            (from, to) => Err(AppError::InvalidTransition {
                from: from.as_ref().into(),
                to: to.as_ref().into(),
            }),
        }
    }
}

#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub status: ReservationStatus,
    pub period: RentalPeriod,
    pub reserved_at: DateTime<Utc>,
    pub item: ReservationItem,
}

impl Reservation {
    pub fn slot(&self) -> ReservationSlot {
        ReservationSlot {
            reservation_id: self.reservation_id,
            status: self.status,
            period: self.period,
        }
    }
}

#[derive(Debug)]
pub struct ReservationItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: Category,
    pub price_per_day: i64,
}

/// The slice of a reservation the availability check needs: which slot of
/// the item's calendar it occupies and whether it still occupies it.
#[derive(Debug, Clone, Copy)]
pub struct ReservationSlot {
    pub reservation_id: ReservationId,
    pub status: ReservationStatus,
    pub period: RentalPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Conflict { with: ReservationId },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Decides whether `period` can be booked against the reservations that
/// already exist for the same item. Only `Active` and `Completed`
/// reservations participate; cancelled ones have freed their range.
///
/// Pure and side-effect free, so it is safe to call speculatively for
/// calendar previews. Whether the item itself exists is the caller's
/// precondition, not this function's concern.
pub fn check_availability(period: &RentalPeriod, existing: &[ReservationSlot]) -> Availability {
    for slot in existing {
        if slot.status.blocks_availability() && slot.period.overlaps(period) {
            return Availability::Conflict {
                with: slot.reservation_id,
            };
        }
    }
    Availability::Available
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, d, 0, 0, 0).unwrap()
    }

    fn period(start: u32, end: u32) -> RentalPeriod {
        RentalPeriod::new(day(start), day(end)).unwrap()
    }

    fn slot(status: ReservationStatus, start: u32, end: u32) -> ReservationSlot {
        ReservationSlot {
            reservation_id: ReservationId::new(),
            status,
            period: period(start, end),
        }
    }

    #[test]
    fn empty_range_is_rejected() {
        assert!(matches!(
            RentalPeriod::new(day(10), day(10)),
            Err(AppError::InvalidRange)
        ));
        assert!(matches!(
            RentalPeriod::new(day(12), day(10)),
            Err(AppError::InvalidRange)
        ));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (period(1, 5), period(3, 8)),
            (period(1, 5), period(5, 9)),
            (period(2, 4), period(1, 8)),
            (period(1, 2), period(4, 6)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn back_to_back_periods_do_not_overlap() {
        let first = period(10, 15);
        let second = period(15, 20);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn identical_periods_overlap() {
        let p = period(10, 15);
        assert!(p.overlaps(&p));
    }

    #[test]
    fn availability_scenario_around_existing_booking() {
        // Item has an active booking for [Jan 10, Jan 15).
        let existing = vec![slot(ReservationStatus::Active, 10, 15)];

        assert!(check_availability(&period(15, 20), &existing).is_available());
        assert!(!check_availability(&period(12, 18), &existing).is_available());
        assert!(check_availability(&period(1, 10), &existing).is_available());
    }

    #[test]
    fn completed_reservations_still_block() {
        let existing = vec![slot(ReservationStatus::Completed, 10, 15)];
        assert!(!check_availability(&period(12, 18), &existing).is_available());
    }

    #[test]
    fn cancelling_frees_the_range() {
        let mut existing = vec![slot(ReservationStatus::Active, 10, 15)];
        assert!(!check_availability(&period(12, 18), &existing).is_available());

        existing[0].status = ReservationStatus::Cancelled;
        assert!(check_availability(&period(12, 18), &existing).is_available());
    }

    #[test]
    fn check_is_idempotent_without_state_change() {
        let existing = vec![slot(ReservationStatus::Active, 10, 15)];
        let p = period(12, 18);
        assert_eq!(
            check_availability(&p, &existing),
            check_availability(&p, &existing)
        );
    }

    #[test]
    fn conflict_reports_the_blocking_reservation() {
        let existing = vec![
            slot(ReservationStatus::Cancelled, 10, 15),
            slot(ReservationStatus::Active, 14, 16),
        ];
        let got = check_availability(&period(12, 18), &existing);
        assert_eq!(
            got,
            Availability::Conflict {
                with: existing[1].reservation_id
            }
        );
    }

    #[test]
    fn active_can_cancel_or_complete_and_nothing_else() {
        use ReservationStatus::*;

        assert!(Active.ensure_transition(Cancelled).is_ok());
        assert!(Active.ensure_transition(Completed).is_ok());

        for (from, to) in [
            (Active, Active),
            (Cancelled, Active),
            (Cancelled, Completed),
            (Completed, Active),
            (Completed, Cancelled),
        ] {
            assert!(matches!(
                from.ensure_transition(to),
                Err(AppError::InvalidTransition { .. })
            ));
        }
    }

    // Models the per-item mutual-exclusion scope of the check-then-insert
    // sequence: two writers race for the same item and overlapping dates,
    // and exactly one may win.
    #[tokio::test]
    async fn concurrent_overlapping_creates_admit_exactly_one() {
        use std::sync::Arc;
        use tokio::sync::Mutex;

        let store: Arc<Mutex<Vec<ReservationSlot>>> = Arc::new(Mutex::new(Vec::new()));

        let mut tasks = Vec::new();
        for _ in 0..2 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                let proposed = period(10, 15);
                let mut existing = store.lock().await;
                match check_availability(&proposed, &existing) {
                    Availability::Available => {
                        existing.push(slot(ReservationStatus::Active, 10, 15));
                        true
                    }
                    Availability::Conflict { .. } => false,
                }
            }));
        }

        let mut succeeded = 0;
        for task in tasks {
            if task.await.unwrap() {
                succeeded += 1;
            }
        }
        assert_eq!(succeeded, 1);
        assert_eq!(store.lock().await.len(), 1);
    }
}
