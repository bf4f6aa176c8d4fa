use derive_new::new;

use crate::model::id::{ItemId, ReviewId, UserId};

#[derive(new)]
pub struct CreateReview {
    pub item_id: ItemId,
    pub reviewed_by: UserId,
    pub rating: i16,
    pub title: String,
    pub body: String,
}

#[derive(new)]
pub struct DeleteReview {
    pub review_id: ReviewId,
}
