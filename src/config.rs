//! Runtime configuration from environment variables (a `.env` file is read
//! first when present).

use std::{env, fmt::Display, str::FromStr};

use actix_web::cookie::Key;

/// Cookie session keys must be at least this long.
const MIN_SESSION_KEY_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub session_key: Key,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }

        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            database_url,
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:8080")?,
            db_max_connections: try_load("DB_MAX_CONNECTIONS", "8")?,
            cookie_secure: try_load("COOKIE_SECURE", "false")?,
            session_key: session_key(env::var("SESSION_KEY").ok()),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| format!("Invalid {key} value {raw:?}: {e}"))
}

/// Load the session key; without a usable one, sessions do not survive restarts.
fn session_key(raw: Option<String>) -> Key {
    match raw {
        Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
