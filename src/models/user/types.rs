use serde::Deserialize;

/// Stored account, including the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

/// New account data for creation. `password` is already hashed.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form data from the sign-up page.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}
