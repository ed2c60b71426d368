// Template context structures for Askama templates, organized by page area.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_username, take_flash};
use crate::models::classroom::{FLOORS, Floor};

mod booking;
mod common;

pub use self::booking::{BookingFormTemplate, BookingListTemplate, ClassroomListTemplate};
pub use self::common::{HomeTemplate, LoginTemplate, SignupTemplate};

/// A Bootstrap-style alert box.
pub struct Alert {
    pub message: String,
    /// `danger`, `info` or `success`.
    pub variant: String,
}

impl Alert {
    pub fn new(variant: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: variant.to_string(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new("danger", message)
    }
}

/// Common context shared by all pages. Templates access these as
/// `ctx.username`, `ctx.floors`, etc.
pub struct PageContext {
    /// `None` for visitors who are not signed in.
    pub username: Option<String>,
    pub flash: Option<Alert>,
    pub csrf_token: String,
    pub floors: &'static [Floor],
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        let flash = take_flash(session).map(|(message, variant)| Alert { message, variant });
        Self {
            username: get_username(session),
            flash,
            csrf_token: csrf::get_or_create_token(session),
            floors: &FLOORS,
        }
    }
}
