use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ItemId, ReservationId, UserId},
    reservation::{
        check_availability,
        event::{CreateReservation, UpdateReservationStatus},
        Availability, Reservation, ReservationSlot, ReservationStatus,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::reservation::{ReservationRow, ReservationSlotRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

impl ReservationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

// Postgres reports a serialization failure with SQLSTATE 40001 when two
// serializable transactions collide. For this store that only happens when
// two creations race for the same item, so the loser is told Conflict
// rather than receiving an opaque 500.
fn map_serialization_failure(e: sqlx::Error, fallback: fn(sqlx::Error) -> AppError) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.code().as_deref() == Some("40001") {
            return AppError::ReservationConflict(
                "a concurrent booking for this item was accepted first".into(),
            );
        }
    }
    fallback(e)
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // The availability check and the insert must not be separable:
        // run both inside one serializable transaction scoped to the item.
        self.set_transaction_serializable(&mut tx).await?;

        let item_exists: Option<ItemId> =
            sqlx::query_scalar("SELECT item_id FROM items WHERE item_id = $1")
                .bind(event.item_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        if item_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "item ({}) not found",
                event.item_id
            )));
        }

        let slot_rows: Vec<ReservationSlotRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, status, start_date, end_date
                FROM reservations
                WHERE item_id = $1
                  AND status IN ('active', 'completed')
            "#,
        )
        .bind(event.item_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let slots = slot_rows
            .into_iter()
            .map(ReservationSlot::try_from)
            .collect::<AppResult<Vec<ReservationSlot>>>()?;

        if let Availability::Conflict { with } = check_availability(&event.period, &slots) {
            return Err(AppError::ReservationConflict(format!(
                "item ({}) is already booked for the requested dates (reservation {})",
                event.item_id, with
            )));
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, item_id, user_id, status, start_date, end_date, reserved_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reservation_id)
        .bind(event.item_id)
        .bind(event.reserved_by)
        .bind(ReservationStatus::Active.as_ref())
        .bind(event.period.start())
        .bind(event.period.end())
        .bind(event.reserved_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_serialization_failure(e, AppError::SpecificOperationError))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| map_serialization_failure(e, AppError::TransactionError))?;

        Ok(reservation_id)
    }

    async fn update_status(&self, event: UpdateReservationStatus) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // Lock the row so two concurrent transitions serialize; the state
        // machine then rejects the second one.
        let current: Option<String> = sqlx::query_scalar(
            r#"
                SELECT status FROM reservations
                WHERE reservation_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(current) = current else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };

        let current = current
            .parse::<ReservationStatus>()
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        current.ensure_transition(event.status)?;

        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = $2
                WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.status.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    r.reservation_id,
                    r.user_id,
                    r.status,
                    r.start_date,
                    r.end_date,
                    r.reserved_at,
                    i.item_id,
                    i.item_name,
                    i.category,
                    i.price_per_day
                FROM reservations AS r
                INNER JOIN items AS i ON r.item_id = i.item_id
                WHERE r.reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    r.reservation_id,
                    r.user_id,
                    r.status,
                    r.start_date,
                    r.end_date,
                    r.reserved_at,
                    i.item_id,
                    i.item_name,
                    i.category,
                    i.price_per_day
                FROM reservations AS r
                INNER JOIN items AS i ON r.item_id = i.item_id
                WHERE r.user_id = $1
                ORDER BY r.start_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    r.reservation_id,
                    r.user_id,
                    r.status,
                    r.start_date,
                    r.end_date,
                    r.reserved_at,
                    i.item_id,
                    i.item_name,
                    i.category,
                    i.price_per_day
                FROM reservations AS r
                INNER JOIN items AS i ON r.item_id = i.item_id
                ORDER BY r.reserved_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_slots_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<ReservationSlot>> {
        let rows: Vec<ReservationSlotRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, status, start_date, end_date
                FROM reservations
                WHERE item_id = $1
                  AND status IN ('active', 'completed')
                ORDER BY start_date ASC
            "#,
        )
        .bind(item_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ReservationSlot::try_from).collect()
    }
}
