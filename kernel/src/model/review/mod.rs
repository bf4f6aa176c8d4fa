use chrono::{DateTime, Utc};

use crate::model::{
    id::{ItemId, ReviewId},
    user::ReviewAuthor,
};

pub mod event;

#[derive(Debug)]
pub struct Review {
    pub review_id: ReviewId,
    pub item_id: ItemId,
    pub rating: i16,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: ReviewAuthor,
}
