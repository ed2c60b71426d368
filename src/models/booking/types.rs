use serde::{Deserialize, Serialize};

use crate::booking::{BookingKey, BookingRequest};

/// A stored booking as shown in the bookings table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub section: String,
    pub subject: String,
    pub faculty_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub students_strength: i32,
    pub description: String,
    pub classroom: String,
    pub created_at: String,
}

impl Booking {
    pub fn key(&self) -> BookingKey {
        BookingKey {
            classroom: self.classroom.clone(),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// Materialise an inserted booking; used by stores that assign ids themselves.
    pub fn from_new(id: i64, new: &NewBooking) -> Self {
        Self {
            id,
            user_id: new.user_id,
            name: new.name.clone(),
            email: new.email.clone(),
            section: new.section.clone(),
            subject: new.subject.clone(),
            faculty_name: new.faculty_name.clone(),
            date: new.date.clone(),
            start_time: new.start_time.clone(),
            end_time: new.end_time.clone(),
            students_strength: new.students_strength,
            description: new.description.clone(),
            classroom: new.classroom.clone(),
            created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Booking data for insertion, built from an accepted request.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub section: String,
    pub subject: String,
    pub faculty_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub students_strength: i32,
    pub description: String,
    pub classroom: String,
}

impl NewBooking {
    /// `strength` is the validated student count.
    pub fn from_request(user_id: i64, request: &BookingRequest, strength: u8) -> Self {
        Self {
            user_id,
            name: request.name.clone(),
            email: request.email.clone(),
            section: request.section.clone(),
            subject: request.subject.clone(),
            faculty_name: request.faculty_name.clone(),
            date: request.date.clone(),
            start_time: request.start_time.clone(),
            end_time: request.end_time.clone(),
            students_strength: i32::from(strength),
            description: request.description.clone(),
            classroom: request.classroom.clone(),
        }
    }
}

/// Booking form submission: the request fields plus the CSRF token.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(flatten)]
    pub request: BookingRequest,
    pub csrf_token: String,
}

/// Query string of the booking form page.
#[derive(Debug, Default, Deserialize)]
pub struct BookingFormQuery {
    #[serde(default)]
    pub classroom: String,
}
