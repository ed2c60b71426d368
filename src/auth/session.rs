use actix_session::Session;

use crate::booking::Identity;
use crate::errors::AppError;

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_username(session: &Session) -> Option<String> {
    session.get::<String>("username").unwrap_or(None)
}

/// Identity of the signed-in user, for handlers behind `require_auth`.
pub fn require_identity(session: &Session) -> Result<Identity, AppError> {
    get_user_id(session)
        .map(|user_id| Identity { user_id })
        .ok_or_else(|| AppError::Session("Not authenticated".to_string()))
}

/// Store the signed-in user in the session, replacing any previous one.
pub fn sign_in(session: &Session, user_id: i64, username: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert("user_id", user_id)
        .and_then(|()| session.insert("username", username))
        .map_err(|e| AppError::Session(format!("Failed to store login: {e}")))
}

/// Message for the next rendered page, with its alert variant.
pub fn set_flash(session: &Session, variant: &str, message: &str) {
    let _ = session.insert("flash", message);
    let _ = session.insert("flash_variant", variant);
}

pub fn take_flash(session: &Session) -> Option<(String, String)> {
    let flash = session.get::<String>("flash").unwrap_or(None)?;
    let variant = session
        .get::<String>("flash_variant")
        .unwrap_or(None)
        .unwrap_or_else(|| "info".to_string());
    session.remove("flash");
    session.remove("flash_variant");
    Some((flash, variant))
}
