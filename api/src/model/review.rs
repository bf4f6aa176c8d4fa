use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ItemId, ReviewId, UserId},
    review::{event::CreateReview, Review},
    user::ReviewAuthor,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(range(min = 1, max = 5))]
    pub rating: i16,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub body: String,
}

#[derive(new)]
pub struct CreateReviewRequestWithIds(ItemId, UserId, CreateReviewRequest);

impl From<CreateReviewRequestWithIds> for CreateReview {
    fn from(value: CreateReviewRequestWithIds) -> Self {
        let CreateReviewRequestWithIds(
            item_id,
            reviewed_by,
            CreateReviewRequest {
                rating,
                title,
                body,
            },
        ) = value;
        CreateReview {
            item_id,
            reviewed_by,
            rating,
            title,
            body,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponse {
    pub review_id: ReviewId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            items: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub item_id: ItemId,
    pub rating: i16,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: ReviewAuthorResponse,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            item_id,
            rating,
            title,
            body,
            created_at,
            author,
        } = value;
        Self {
            review_id,
            item_id,
            rating,
            title,
            body,
            created_at,
            author: author.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthorResponse {
    pub user_id: UserId,
    pub user_name: String,
}

impl From<ReviewAuthor> for ReviewAuthorResponse {
    fn from(value: ReviewAuthor) -> Self {
        let ReviewAuthor { user_id, user_name } = value;
        Self { user_id, user_name }
    }
}
