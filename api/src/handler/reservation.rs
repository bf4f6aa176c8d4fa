use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use kernel::model::{
    id::{ItemId, ReservationId},
    reservation::{
        check_availability,
        event::{CreateReservation, UpdateReservationStatus},
        RentalPeriod, ReservationStatus,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        AvailabilityQuery, AvailabilityResponse, CreateReservationRequest,
        CreateReservationResponse, ReservationResponse, ReservationsResponse,
        UpdateReservationStatusRequest,
    },
};

/// Books an item for a date range. The period is validated here; the
/// overlap check and the insert run atomically in the repository.
pub async fn reserve_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<CreateReservationResponse>)> {
    let period = RentalPeriod::new(req.start_date, req.end_date)?;

    let reservation_id = registry
        .reservation_repository()
        .create(CreateReservation::new(item_id, user.id(), period, Utc::now()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse { reservation_id }),
    ))
}

/// Speculative calendar preview. Reads a plain snapshot without the
/// serializable transaction; a create that follows re-validates, so a
/// stale "available" here can still lose the race.
pub async fn check_item_availability(
    Path(item_id): Path<ItemId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    let period = RentalPeriod::new(query.from, query.to)?;

    if registry
        .item_repository()
        .find_by_id(item_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("specified item not found".into()));
    }

    let slots = registry
        .reservation_repository()
        .find_slots_by_item_id(item_id)
        .await?;

    Ok(Json(check_availability(&period, &slots).into()))
}

pub async fn show_my_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_user_id(user.id())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified reservation not found".into()))?;

    if reservation.reserved_by != user.id() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(Json(reservation.into()))
}

/// Applies a lifecycle transition. Owners may cancel their own booking;
/// marking one completed is administrative.
pub async fn update_reservation_status(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationStatusRequest>,
) -> AppResult<StatusCode> {
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified reservation not found".into()))?;

    if reservation.reserved_by != user.id() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let next = ReservationStatus::from(req.status);
    if next == ReservationStatus::Completed && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .reservation_repository()
        .update_status(UpdateReservationStatus::new(reservation_id, next))
        .await
        .map(|_| StatusCode::OK)
}
