use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ItemId, ReviewId},
    review::{
        event::{CreateReview, DeleteReview},
        Review,
    },
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::review::ReviewRow, ConnectionPool};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId> {
        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews (review_id, item_id, user_id, rating, title, body)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review_id)
        .bind(event.item_id)
        .bind(event.reviewed_by)
        .bind(event.rating)
        .bind(&event.title)
        .bind(&event.body)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been created".into(),
            ));
        }

        Ok(review_id)
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT
                    rv.review_id,
                    rv.item_id,
                    rv.rating,
                    rv.title,
                    rv.body,
                    rv.created_at,
                    u.user_id,
                    u.user_name
                FROM reviews AS rv
                INNER JOIN users AS u ON rv.user_id = u.user_id
                WHERE rv.item_id = $1
                ORDER BY rv.created_at DESC
            "#,
        )
        .bind(item_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_by_id(&self, review_id: ReviewId) -> AppResult<Option<Review>> {
        let row: Option<ReviewRow> = sqlx::query_as(
            r#"
                SELECT
                    rv.review_id,
                    rv.item_id,
                    rv.rating,
                    rv.title,
                    rv.body,
                    rv.created_at,
                    u.user_id,
                    u.user_name
                FROM reviews AS rv
                INNER JOIN users AS u ON rv.user_id = u.user_id
                WHERE rv.review_id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Review::from))
    }

    async fn delete(&self, event: DeleteReview) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reviews WHERE review_id = $1
            "#,
        )
        .bind(event.review_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified review not found".into()));
        }

        Ok(())
    }
}
