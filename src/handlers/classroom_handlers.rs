use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::classroom;
use crate::templates_structs::{ClassroomListTemplate, HomeTemplate, PageContext};

pub async fn home(session: Session) -> Result<HttpResponse, AppError> {
    render(HomeTemplate {
        ctx: PageContext::build(&session),
    })
}

pub async fn floor(session: Session, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let floor = classroom::find_floor(&path).ok_or(AppError::NotFound)?;
    render(ClassroomListTemplate {
        ctx: PageContext::build(&session),
        floor,
    })
}
