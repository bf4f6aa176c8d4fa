use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{ItemId, ReviewId},
    review::event::DeleteReview,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::review::{
        CreateReviewRequest, CreateReviewRequestWithIds, CreateReviewResponse, ReviewsResponse,
    },
};

pub async fn post_review(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<CreateReviewResponse>)> {
    req.validate(&())?;

    if registry
        .item_repository()
        .find_by_id(item_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("specified item not found".into()));
    }

    let review_id = registry
        .review_repository()
        .create(CreateReviewRequestWithIds::new(item_id, user.id(), req).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse { review_id }),
    ))
}

pub async fn show_item_reviews(
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    if registry
        .item_repository()
        .find_by_id(item_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("specified item not found".into()));
    }

    registry
        .review_repository()
        .find_by_item_id(item_id)
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn delete_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let review = registry
        .review_repository()
        .find_by_id(review_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified review not found".into()))?;

    // Only the author or an administrator may remove a review.
    if review.author.user_id != user.id() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .review_repository()
        .delete(DeleteReview::new(review_id))
        .await
        .map(|_| StatusCode::OK)
}
