use kernel::model::{
    id::{ItemId, ReservationId, UserId},
    item::Category,
    reservation::{
        RentalPeriod, Reservation, ReservationItem, ReservationSlot, ReservationStatus,
    },
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

fn parse_status(raw: &str) -> Result<ReservationStatus, AppError> {
    raw.parse::<ReservationStatus>()
        .map_err(|e| AppError::ConversionEntityError(e.to_string()))
}

fn stored_period(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<RentalPeriod, AppError> {
    // The table constraint guarantees start < end; a row violating it is
    // corruption, not caller input.
    RentalPeriod::new(start_date, end_date)
        .map_err(|_| AppError::ConversionEntityError("reservation row holds an empty period".into()))
}

/// Reservation joined with its item, for listing and detail reads.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reserved_at: DateTime<Utc>,
    pub item_id: ItemId,
    pub item_name: String,
    pub category: String,
    pub price_per_day: i64,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            user_id,
            status,
            start_date,
            end_date,
            reserved_at,
            item_id,
            item_name,
            category,
            price_per_day,
        } = value;
        Ok(Reservation {
            reservation_id,
            reserved_by: user_id,
            status: parse_status(&status)?,
            period: stored_period(start_date, end_date)?,
            reserved_at,
            item: ReservationItem {
                item_id,
                item_name,
                category: category
                    .parse::<Category>()
                    .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
                price_per_day,
            },
        })
    }
}

/// The narrow projection the availability check consumes.
#[derive(sqlx::FromRow)]
pub struct ReservationSlotRow {
    pub reservation_id: ReservationId,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl TryFrom<ReservationSlotRow> for ReservationSlot {
    type Error = AppError;

    fn try_from(value: ReservationSlotRow) -> Result<Self, Self::Error> {
        let ReservationSlotRow {
            reservation_id,
            status,
            start_date,
            end_date,
        } = value;
        Ok(ReservationSlot {
            reservation_id,
            status: parse_status(&status)?,
            period: stored_period(start_date, end_date)?,
        })
    }
}
