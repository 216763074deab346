//! PostgreSQL User Store

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repository::UserStore;
use crate::error::AuthResult;

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: self.user_id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        // Emails are stored lowercase; match case-insensitively on input
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash
            FROM users
            WHERE email = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}
