use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::ItemId, item::event::DeleteItem};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::item::{
        CreateItemRequest, ItemListQuery, ItemResponse, PaginatedItemResponse, UpdateItemRequest,
        UpdateItemRequestWithId,
    },
};

pub async fn register_item(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateItemRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .item_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

// The catalog is public; browsing requires no account.
pub async fn show_item_list(
    Query(query): Query<ItemListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedItemResponse>> {
    query.validate(&())?;

    registry
        .item_repository()
        .find_all(query.into())
        .await
        .map(PaginatedItemResponse::from)
        .map(Json)
}

pub async fn show_item(
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ItemResponse>> {
    registry
        .item_repository()
        .find_by_id(item_id)
        .await
        .and_then(|item| match item {
            Some(item) => Ok(Json(item.into())),
            None => Err(AppError::EntityNotFound("specified item not found".into())),
        })
}

pub async fn update_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateItemRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_item = UpdateItemRequestWithId::new(item_id, req);
    registry
        .item_repository()
        .update(update_item.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .item_repository()
        .delete(DeleteItem::new(item_id))
        .await
        .map(|_| StatusCode::OK)
}
