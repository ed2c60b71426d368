use askama::Template;

use crate::booking::BookingRequest;
use crate::models::booking::Booking;
use crate::models::classroom::Floor;

use super::{Alert, PageContext};

#[derive(Template)]
#[template(path = "classrooms.html")]
pub struct ClassroomListTemplate {
    pub ctx: PageContext,
    pub floor: &'static Floor,
}

#[derive(Template)]
#[template(path = "bookings/form.html")]
pub struct BookingFormTemplate {
    pub ctx: PageContext,
    pub form: BookingRequest,
    pub alert: Option<Alert>,
}

#[derive(Template)]
#[template(path = "bookings/list.html")]
pub struct BookingListTemplate {
    pub ctx: PageContext,
    pub bookings: Vec<Booking>,
    pub error: Option<String>,
}
