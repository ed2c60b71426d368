use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::booking::service;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;
use crate::store::BookingStore;

pub async fn delete<S: BookingStore + 'static>(
    store: web::Data<S>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    match service::remove(store.get_ref(), id).await {
        Ok(true) => set_flash(&session, "success", "Booking successfully deleted!"),
        Ok(false) => set_flash(&session, "info", "That booking no longer exists."),
        Err(e) => {
            log::error!("Error deleting booking {id}: {e}");
            set_flash(&session, "danger", "Failed to delete booking. Please try again.");
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/bookings"))
        .finish())
}
