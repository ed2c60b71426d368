use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::store::BookingStore;
use crate::templates_structs::{BookingListTemplate, PageContext};

pub async fn list<S: BookingStore + 'static>(
    store: web::Data<S>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (bookings, error) = match store.list().await {
        Ok(bookings) => {
            log::debug!("Fetched {} bookings", bookings.len());
            (bookings, None)
        }
        Err(e) => {
            log::error!("Error fetching bookings: {e}");
            (vec![], Some("Failed to fetch bookings. Please try again later.".to_string()))
        }
    };

    render(BookingListTemplate {
        ctx: PageContext::build(&session),
        bookings,
        error,
    })
}
