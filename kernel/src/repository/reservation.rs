use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ItemId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservationStatus},
        Reservation, ReservationSlot,
    },
};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Books an item. The availability check and the insert run as one
    /// serializable transaction per item, so two racing creations with
    /// overlapping periods cannot both succeed.
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;

    /// Applies a lifecycle transition; rejects anything but the moves the
    /// state machine allows.
    async fn update_status(&self, event: UpdateReservationStatus) -> AppResult<()>;

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;

    /// A requester's reservations, newest rental window first.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;

    /// Every reservation in the store, for administrative review.
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;

    /// The calendar slots that currently occupy an item (status Active or
    /// Completed). Read from a plain snapshot; callers using this for
    /// previews accept that a later create re-validates under the lock.
    async fn find_slots_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<ReservationSlot>>;
}
