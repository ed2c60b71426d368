use sqlx::PgPool;

use super::types::{NewUser, User};

const SELECT_USER: &str = "\
    SELECT id, username, email, password, \
           to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at \
    FROM users";

/// Find user by email for authentication. Returns internal User with password hash.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let sql = format!("{SELECT_USER} WHERE email = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Create a new account. Fails with a unique violation when the email is taken.
pub async fn create(pool: &PgPool, new: &NewUser) -> Result<i64, sqlx::Error> {
    let id: (i64,) = sqlx::query_as(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&new.username)
    .bind(&new.email)
    .bind(&new.password)
    .fetch_one(pool)
    .await?;
    Ok(id.0)
}

/// Whether `err` is the unique-email constraint firing.
pub fn is_duplicate_email(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.is_unique_violation())
}
