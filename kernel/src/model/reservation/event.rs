use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::{
    id::{ItemId, ReservationId, UserId},
    reservation::{RentalPeriod, ReservationStatus},
};

#[derive(new)]
pub struct CreateReservation {
    pub item_id: ItemId,
    pub reserved_by: UserId,
    pub period: RentalPeriod,
    pub reserved_at: DateTime<Utc>,
}

#[derive(new)]
pub struct UpdateReservationStatus {
    pub reservation_id: ReservationId,
    pub status: ReservationStatus,
}
