use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::{database::model::user::UserCredentialRow, database::ConnectionPool, redis::RedisClient};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

fn token_key(access_token: &AccessToken) -> String {
    format!("token:{}", access_token.0)
}

fn verify_password(raw: &str, hash: &str) -> AppResult<()> {
    let parsed_hash = PasswordHash::new(hash)?;
    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::UnauthenticatedError)
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let Some(value) = self.kv.get(&token_key(access_token)).await? else {
            return Ok(None);
        };
        Ok(Some(value.parse::<UserId>()?))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Unknown email and wrong password collapse into the same error,
        // so login cannot be used to enumerate accounts.
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        verify_password(password, &row.password_hash)?;

        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let access_token = AccessToken(uuid::Uuid::new_v4().simple().to_string());
        self.kv
            .set_ex(
                &token_key(&access_token),
                &event.user_id.to_string(),
                self.ttl,
            )
            .await?;
        Ok(access_token)
    }

    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()> {
        self.kv.delete(&token_key(access_token)).await
    }
}
