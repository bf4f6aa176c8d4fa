use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ItemId, ReviewId},
    review::{
        event::{CreateReview, DeleteReview},
        Review,
    },
};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId>;
    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Review>>;
    async fn find_by_id(&self, review_id: ReviewId) -> AppResult<Option<Review>>;
    async fn delete(&self, event: DeleteReview) -> AppResult<()>;
}
