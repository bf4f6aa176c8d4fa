use kernel::model::{
    id::{ItemId, ReviewId, UserId},
    review::Review,
    user::ReviewAuthor,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub item_id: ItemId,
    pub rating: i16,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
    pub user_name: String,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            item_id,
            rating,
            title,
            body,
            created_at,
            user_id,
            user_name,
        } = value;
        Review {
            review_id,
            item_id,
            rating,
            title,
            body,
            created_at,
            author: ReviewAuthor { user_id, user_name },
        }
    }
}
