use sqlx::{PgConnection, PgPool};

use crate::credentials::hash_password;
use crate::error::AppResult;
use crate::models::{UserModel, USER_COLUMNS};

pub async fn find_user(conn: &mut PgConnection, id: i64) -> Result<Option<UserModel>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn find_users(conn: &mut PgConnection, ids: &[i64]) -> Result<Vec<UserModel>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {} FROM users WHERE id = ANY($1)", USER_COLUMNS))
        .bind(ids)
        .fetch_all(conn)
        .await
}

/// Makes sure a staff account with this username exists. An existing account
/// is promoted to staff but its password is left alone.
pub async fn ensure_admin(pool: &PgPool, username: &str, password: &str) -> AppResult<()> {
    let password_hash = hash_password(password)?;

    let created: Option<(i64,)> = sqlx::query_as(
        "INSERT INTO users (username, password_hash, is_staff) VALUES ($1, $2, TRUE) \
         ON CONFLICT (username) DO NOTHING RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_optional(pool)
    .await?;

    match created {
        Some((id,)) => tracing::info!("Created staff account {} (id={})", username, id),
        None => {
            sqlx::query("UPDATE users SET is_staff = TRUE WHERE username = $1")
                .bind(username)
                .execute(pool)
                .await?;
            tracing::info!("Staff account {} already present", username);
        }
    }
    Ok(())
}
