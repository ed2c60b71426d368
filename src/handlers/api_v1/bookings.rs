use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::booking::service;
use crate::errors::AppError;
use crate::models::booking::Booking;
use crate::store::BookingStore;

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct ApiBookingList {
    pub bookings: Vec<Booking>,
    pub total: usize,
}

/// GET /api/v1/bookings - List all bookings
pub async fn list<S: BookingStore + 'static>(
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    let bookings = store.list().await?;
    let total = bookings.len();
    Ok(HttpResponse::Ok().json(ApiBookingList { bookings, total }))
}

/// DELETE /api/v1/bookings/{id} - Delete a booking
pub async fn delete<S: BookingStore + 'static>(
    store: web::Data<S>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if service::remove(store.get_ref(), id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: format!("Booking {id} not found"),
        }))
    }
}
