use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::{require_identity, set_flash};
use crate::booking::{BookingRequest, SubmitOutcome, service};
use crate::errors::{AppError, render};
use crate::models::booking::{BookingForm, BookingFormQuery};
use crate::models::classroom;
use crate::store::BookingStore;
use crate::templates_structs::{Alert, BookingFormTemplate, PageContext};

const BOOKED: &str = "Your classroom is successfully booked!";
const ALREADY_BOOKED: &str = "This classroom is already booked for the selected date and time.";
const UNKNOWN_CLASSROOM: &str = "Please choose a classroom from the classroom list.";
const STORE_FAILED: &str = "Error adding booking. Please try again.";

fn form_page(
    session: &Session,
    form: BookingRequest,
    alert: Option<Alert>,
) -> Result<HttpResponse, AppError> {
    render(BookingFormTemplate {
        ctx: PageContext::build(session),
        form,
        alert,
    })
}

pub async fn new_form(
    session: Session,
    query: web::Query<BookingFormQuery>,
) -> Result<HttpResponse, AppError> {
    if classroom::find(&query.classroom).is_none() {
        set_flash(&session, "info", "Choose a classroom to book.");
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/classrooms/ground-floor"))
            .finish());
    }
    form_page(&session, BookingRequest::for_classroom(&query.classroom), None)
}

pub async fn create<S: BookingStore + 'static>(
    store: web::Data<S>,
    session: Session,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let identity = require_identity(&session)?;
    let request = form.into_inner().request;

    let alert = match service::submit(store.get_ref(), identity, &request).await {
        Ok(SubmitOutcome::Booked { advisory, .. }) => {
            let message = match advisory {
                Some(advisory) => format!("{BOOKED} {advisory}"),
                None => BOOKED.to_string(),
            };
            set_flash(&session, "success", &message);
            return Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/"))
                .finish());
        }
        Ok(SubmitOutcome::Rejected(rejection)) => Alert::danger(rejection.to_string()),
        Ok(SubmitOutcome::UnknownClassroom) => Alert::danger(UNKNOWN_CLASSROOM),
        Ok(SubmitOutcome::Conflict) => Alert::danger(ALREADY_BOOKED),
        Err(e) => {
            log::error!("Error adding booking: {e}");
            Alert::danger(STORE_FAILED)
        }
    };

    form_page(&session, request, Some(alert))
}
